//! Double-buffered occupancy.
//!
//! `current` is the state at the start of a tick and is only read during the
//! tick.  `next` collects claims as agents are processed.  At tick end the two
//! swap.  Nothing reads `next` before the swap except the claim check.

use evac_core::{Grid, GridDims, Location};

#[derive(Clone, Debug)]
pub struct Occupancy {
    current: Grid<bool>,
    next:    Grid<bool>,
}

impl Occupancy {
    pub fn new(dims: GridDims) -> Self {
        Self {
            current: Grid::filled(dims, false),
            next:    Grid::filled(dims, false),
        }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.current.dims()
    }

    /// The settled state.
    #[inline]
    pub fn current(&self) -> &Grid<bool> {
        &self.current
    }

    #[inline]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.current[loc]
    }

    /// Mark `loc` in the settled state.  Used by placement between ticks.
    #[inline]
    pub fn occupy(&mut self, loc: Location) {
        self.current[loc] = true;
    }

    /// Occupied cells in the settled state.
    pub fn occupied_count(&self) -> usize {
        self.current.as_slice().iter().filter(|&&o| o).count()
    }

    /// Start a tick: clear `next` and hand out `current` for reading
    /// alongside a claim handle on `next`.
    pub fn begin_tick(&mut self) -> (&Grid<bool>, Claims<'_>) {
        self.next.fill(false);
        (&self.current, Claims { next: &mut self.next })
    }

    /// End a tick: `next` becomes `current`.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}

/// Write access to the `next` buffer for one tick.
pub struct Claims<'a> {
    next: &'a mut Grid<bool>,
}

impl Claims<'_> {
    /// Claim `loc` for the next state.  `false` if someone already did.
    #[inline]
    pub fn claim(&mut self, loc: Location) -> bool {
        let cell = &mut self.next[loc];
        if *cell {
            return false;
        }
        *cell = true;
        true
    }

    #[inline]
    pub fn is_claimed(&self, loc: Location) -> bool {
        self.next[loc]
    }
}
