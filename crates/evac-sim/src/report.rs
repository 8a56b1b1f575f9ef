use std::fmt;

use evac_core::Tick;

/// What happened during one [`Automaton::step`][crate::Automaton::step].
///
/// Every pedestrian active at the start of the tick is counted exactly once
/// in `moved`, `stayed`, or `evacuated`.  `conflicts` is the subset of
/// `stayed` that lost a destination to an earlier claimant.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TickReport {
    pub tick:      Tick,
    pub moved:     usize,
    pub stayed:    usize,
    pub conflicts: usize,
    pub evacuated: usize,
    /// Active pedestrians after the step.
    pub active:    usize,
}

impl TickReport {
    pub fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }

    /// Pedestrians processed this tick.
    #[inline]
    pub fn processed(&self) -> usize {
        self.moved + self.stayed + self.evacuated
    }
}

impl fmt::Display for TickReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: moved={} stayed={} conflicts={} evacuated={} active={}",
            self.tick, self.moved, self.stayed, self.conflicts, self.evacuated, self.active
        )
    }
}
