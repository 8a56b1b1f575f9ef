//! The [`Statistics`] snapshot.

use std::fmt;

use evac_agent::Pedestrian;
use evac_core::{AgentId, Location};
use evac_space::ExitIndex;

use crate::{mean, median};

/// Straight-line distance from a still-active pedestrian to its closest exit.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RemainingDistance {
    pub agent:    AgentId,
    pub location: Location,
    /// Metres (cells × cell size).  `None` only when the scenario has no exits.
    pub metres:   Option<f64>,
}

/// Summary of one run, derived on demand and never stored by the automaton.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Statistics {
    pub evacuated: usize,
    pub remaining: usize,

    /// Over evacuated pedestrians.
    pub mean_steps:   Option<f64>,
    pub median_steps: Option<f64>,

    /// Seconds from tick 0 to the exit tick, over evacuated pedestrians.
    pub mean_evacuation_secs:   Option<f64>,
    pub median_evacuation_secs: Option<f64>,

    /// One entry per still-active pedestrian, in store order.
    pub remaining_distances: Vec<RemainingDistance>,
}

impl Statistics {
    /// Fraction of placed pedestrians that evacuated, `None` if nobody was placed.
    pub fn evacuated_fraction(&self) -> Option<f64> {
        let total = self.evacuated + self.remaining;
        (total > 0).then(|| self.evacuated as f64 / total as f64)
    }

    pub fn mean_remaining_distance(&self) -> Option<f64> {
        let d: Vec<f64> = self.remaining_distances.iter().filter_map(|r| r.metres).collect();
        mean(&d)
    }
}

/// Aggregate `evacuated` and `active` pedestrians into a [`Statistics`].
///
/// `cell_size_m` converts cell units to metres for remaining distances.
pub fn summarize(
    evacuated:        &[Pedestrian],
    active:           &[Pedestrian],
    exits:            &ExitIndex,
    seconds_per_tick: f64,
    cell_size_m:      f64,
) -> Statistics {
    let steps: Vec<f64> = evacuated.iter().map(|p| p.steps() as f64).collect();
    let times: Vec<f64> = evacuated
        .iter()
        .filter_map(|p| p.evacuation_time_secs(seconds_per_tick))
        .collect();

    let remaining_distances = active
        .iter()
        .map(|p| RemainingDistance {
            agent:    p.id(),
            location: p.location(),
            metres:   exits.nearest(p.location()).map(|(_, d)| d * cell_size_m),
        })
        .collect();

    Statistics {
        evacuated:              evacuated.len(),
        remaining:              active.len(),
        mean_steps:             mean(&steps),
        median_steps:           median(&steps),
        mean_evacuation_secs:   mean(&times),
        median_evacuation_secs: median(&times),
        remaining_distances,
    }
}

struct Opt(Option<f64>);

impl fmt::Display for Opt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v:.2}"),
            None => f.write_str("n/a"),
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "evacuated:              {}", self.evacuated)?;
        writeln!(f, "remaining:              {}", self.remaining)?;
        writeln!(f, "mean steps:             {}", Opt(self.mean_steps))?;
        writeln!(f, "median steps:           {}", Opt(self.median_steps))?;
        writeln!(f, "mean evacuation (s):    {}", Opt(self.mean_evacuation_secs))?;
        writeln!(f, "median evacuation (s):  {}", Opt(self.median_evacuation_secs))?;
        write!(f, "mean distance left (m): {}", Opt(self.mean_remaining_distance()))
    }
}
