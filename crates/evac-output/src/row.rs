//! Plain data row types written by output backends.

/// Where one active pedestrian stood at a snapshot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRow {
    pub agent_id: u32,
    pub tick:     u64,
    pub row:      usize,
    pub col:      usize,
}

/// Per-tick counts, taken from the automaton's `TickReport`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickSummaryRow {
    pub tick:         u64,
    pub elapsed_secs: f64,
    pub moved:        u64,
    pub stayed:       u64,
    pub conflicts:    u64,
    pub evacuated:    u64,
    pub active:       u64,
}
