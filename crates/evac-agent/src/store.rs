//! Pedestrian storage: the active set, the evacuated set, and id allocation.
//!
//! # Why take/restore?
//!
//! The tick loop needs to walk the active set in a freshly shuffled order
//! while moving some agents into the evacuated set and mutating the rest.
//! Rather than juggling indices into a `Vec` that is shrinking underneath the
//! loop, the automaton takes the whole active `Vec` out, shuffles it, and
//! hands back the survivors:
//!
//! ```ignore
//! let mut order = store.take_active();
//! rng.shuffle(&mut order);
//! let mut still_active = Vec::with_capacity(order.len());
//! for ped in order {
//!     if on_exit { store.push_evacuated(ped) } else { still_active.push(ped) }
//! }
//! store.restore_active(still_active);
//! ```
//!
//! The active set therefore stays in the last tick's scheduling order.

use evac_core::{AgentId, Location};

use crate::{Pedestrian, PedestrianParams};

// ── IdAllocator ───────────────────────────────────────────────────────────────

/// Hands out strictly increasing [`AgentId`]s starting at 0.
///
/// Owned by one store; there is no process-wide counter.
#[derive(Debug, Default, Clone)]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allocate(&mut self) -> AgentId {
        let id = AgentId(self.next);
        self.next += 1;
        id
    }

    /// Number of ids handed out so far.
    pub fn allocated(&self) -> usize {
        self.next as usize
    }
}

// ── PedestrianStore ───────────────────────────────────────────────────────────

/// Every pedestrian the automaton ever placed, split by lifecycle stage.
#[derive(Debug, Default, Clone)]
pub struct PedestrianStore {
    active:    Vec<Pedestrian>,
    evacuated: Vec<Pedestrian>,
    ids:       IdAllocator,
}

impl PedestrianStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an active pedestrian with a fresh id.
    ///
    /// Does not check the location; the automaton validates placement.
    pub fn spawn(&mut self, location: Location, params: PedestrianParams) -> AgentId {
        let id = self.ids.allocate();
        self.active.push(Pedestrian::new(id, location, params));
        id
    }

    pub fn active(&self) -> &[Pedestrian] {
        &self.active
    }

    /// Evacuated pedestrians in the order they left.
    pub fn evacuated(&self) -> &[Pedestrian] {
        &self.evacuated
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn evacuated_len(&self) -> usize {
        self.evacuated.len()
    }

    /// Pedestrians ever placed.  Always `active_len() + evacuated_len()`.
    pub fn total(&self) -> usize {
        self.ids.allocated()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Look a pedestrian up in either set.  Linear scan.
    pub fn get(&self, id: AgentId) -> Option<&Pedestrian> {
        self.iter().find(|p| p.id() == id)
    }

    /// Active then evacuated pedestrians.
    pub fn iter(&self) -> impl Iterator<Item = &Pedestrian> + '_ {
        self.active.iter().chain(self.evacuated.iter())
    }

    // ── Tick-loop access ──────────────────────────────────────────────────

    /// Move the active set out for one tick.  Must be paired with
    /// [`restore_active`](Self::restore_active).
    pub fn take_active(&mut self) -> Vec<Pedestrian> {
        std::mem::take(&mut self.active)
    }

    /// Put the surviving active pedestrians back.
    pub fn restore_active(&mut self, active: Vec<Pedestrian>) {
        debug_assert!(self.active.is_empty(), "restore_active without take_active");
        self.active = active;
        debug_assert_eq!(self.active.len() + self.evacuated.len(), self.total());
    }

    /// Append a pedestrian that has left through an exit.
    pub fn push_evacuated(&mut self, pedestrian: Pedestrian) {
        debug_assert!(pedestrian.is_evacuated());
        self.evacuated.push(pedestrian);
    }
}
