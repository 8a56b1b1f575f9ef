//! Simulation time model.
//!
//! Time is a monotonically increasing [`Tick`] counter.  [`SimClock`] maps it
//! to simulated seconds:
//!
//!   elapsed_secs = tick * seconds_per_tick
//!
//! The integer tick is canonical; seconds are derived on demand and never
//! accumulated, so there is no floating-point drift over long runs.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Simulated seconds at this tick for the given resolution.
    #[inline]
    pub fn as_secs(self, seconds_per_tick: f64) -> f64 {
        self.0 as f64 * seconds_per_tick
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tracks the current tick and converts it to simulated seconds.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// Simulated seconds one tick represents.
    pub seconds_per_tick: f64,
    /// The current tick — advanced by [`SimClock::advance`] once per step.
    pub current_tick: Tick,
}

impl SimClock {
    pub fn new(seconds_per_tick: f64) -> Self {
        Self { seconds_per_tick, current_tick: Tick::ZERO }
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Simulated seconds since tick 0.
    #[inline]
    pub fn elapsed_secs(&self) -> f64 {
        self.current_tick.as_secs(self.seconds_per_tick)
    }

    /// `true` once `elapsed_secs() >= limit_secs`.
    #[inline]
    pub fn has_reached(&self, limit_secs: f64) -> bool {
        self.elapsed_secs() >= limit_secs
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} s)", self.current_tick, self.elapsed_secs())
    }
}
