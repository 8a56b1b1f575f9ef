//! `evac-stats` — pure aggregation over pedestrian records.
//!
//! Nothing here mutates automaton state.  [`summarize`] reads the evacuated
//! and still-active collections and returns a [`Statistics`] snapshot.
//!
//! Evacuation times are derived from exit ticks (`exit_tick * seconds_per_tick`).
//! Remaining-agent distances are straight-line distances to the closest exit
//! centre, scaled by the physical cell size.  They are not the floor field's
//! geodesic distances and can underestimate the walk around walls.

pub mod aggregate;
pub mod summary;


pub use aggregate::{mean, median};
pub use summary::{RemainingDistance, Statistics, summarize};
