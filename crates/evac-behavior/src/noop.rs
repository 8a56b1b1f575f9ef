//! A no-op movement model — pedestrians never move.

use evac_agent::Pedestrian;
use evac_core::{Location, SimRng};

use crate::{AutomatonView, MovementModel};

/// A [`MovementModel`] that always stays put.
///
/// Useful in tests: pedestrians placed on exits still evacuate, everyone else
/// stays where they were placed.
pub struct StayPut;

impl MovementModel for StayPut {
    fn choose_movement(
        &self,
        _pedestrian: &Pedestrian,
        _view:       &AutomatonView<'_>,
        _rng:        &mut SimRng,
    ) -> Option<Location> {
        None
    }
}
