//! Read-only automaton state passed to every movement decision.

use evac_core::{Grid, GridDims, Location, Scenario, Tick};
use evac_space::{Neighbourhood, Neighbours, StaticFloorField};

/// A read-only snapshot of the automaton passed to
/// [`MovementModel::choose_movement`][crate::MovementModel::choose_movement].
///
/// Built once per tick and shared by every decision in that tick.  The
/// occupancy it exposes is the *current* buffer: the state at the start of
/// the tick, untouched by moves already applied this tick.
pub struct AutomatonView<'a> {
    /// Tick being computed.
    pub tick: Tick,

    /// Movement connectivity configured on the automaton.
    pub neighbourhood: Neighbourhood,

    pub scenario: &'a dyn Scenario,

    pub floor_field: &'a StaticFloorField,

    /// `true` where an agent stood at the start of the tick.
    pub occupied: &'a Grid<bool>,
}

impl<'a> AutomatonView<'a> {
    #[inline]
    pub fn new(
        tick:          Tick,
        neighbourhood: Neighbourhood,
        scenario:      &'a dyn Scenario,
        floor_field:   &'a StaticFloorField,
        occupied:      &'a Grid<bool>,
    ) -> Self {
        Self { tick, neighbourhood, scenario, floor_field, occupied }
    }

    #[inline]
    pub fn dims(&self) -> GridDims {
        self.occupied.dims()
    }

    #[inline]
    pub fn neighbours(&self, loc: Location) -> Neighbours {
        self.neighbourhood.neighbours(self.dims(), loc)
    }

    #[inline]
    pub fn is_blocked(&self, loc: Location) -> bool {
        self.scenario.is_cell_blocked(loc.row, loc.col)
    }

    #[inline]
    pub fn is_exit(&self, loc: Location) -> bool {
        self.scenario.is_cell_exit(loc.row, loc.col)
    }

    #[inline]
    pub fn is_occupied(&self, loc: Location) -> bool {
        self.occupied[loc]
    }

    /// Neither blocked nor occupied at the start of the tick.
    #[inline]
    pub fn is_free(&self, loc: Location) -> bool {
        !self.is_blocked(loc) && !self.is_occupied(loc)
    }
}
