//! Run parameters for an [`Automaton`][crate::Automaton].

use evac_space::Neighbourhood;

use crate::{SimError, SimResult};

/// Parameters fixed for the lifetime of one automaton.
///
/// With the `serde` feature this round-trips through JSON; missing fields
/// take their [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AutomatonConfig {
    /// Movement connectivity.  The floor field is always built with Moore
    /// connectivity regardless of this setting.
    pub neighbourhood: Neighbourhood,

    /// Simulated seconds after which [`Automaton::is_finished`] reports true.
    /// `f64::INFINITY` disables the limit.
    ///
    /// [`Automaton::is_finished`]: crate::Automaton::is_finished
    pub time_limit_secs: f64,

    pub seconds_per_tick: f64,

    /// Seed for the automaton's single [`SimRng`][evac_core::SimRng].
    pub seed: u64,

    /// Physical edge length of one cell, used to convert statistics and
    /// trace coordinates to metres.
    pub cell_size_m: f64,

    /// Emit an observer snapshot every N ticks.  `0` disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for AutomatonConfig {
    fn default() -> Self {
        Self {
            neighbourhood:         Neighbourhood::Moore,
            time_limit_secs:       600.0,
            seconds_per_tick:      0.3,
            seed:                  0,
            cell_size_m:           0.4,
            output_interval_ticks: 1,
        }
    }
}

impl AutomatonConfig {
    pub fn validate(&self) -> SimResult<()> {
        if !(self.seconds_per_tick.is_finite() && self.seconds_per_tick > 0.0) {
            return Err(SimError::Config(format!(
                "seconds_per_tick must be finite and > 0, got {}",
                self.seconds_per_tick
            )));
        }
        if self.time_limit_secs.is_nan() || self.time_limit_secs < 0.0 {
            return Err(SimError::Config(format!(
                "time_limit_secs must be >= 0, got {}",
                self.time_limit_secs
            )));
        }
        if !(self.cell_size_m.is_finite() && self.cell_size_m > 0.0) {
            return Err(SimError::Config(format!(
                "cell_size_m must be finite and > 0, got {}",
                self.cell_size_m
            )));
        }
        Ok(())
    }

    /// Ticks needed to reach `time_limit_secs`, or `None` without a limit.
    pub fn tick_limit(&self) -> Option<u64> {
        self.time_limit_secs
            .is_finite()
            .then(|| (self.time_limit_secs / self.seconds_per_tick).ceil() as u64)
    }
}
