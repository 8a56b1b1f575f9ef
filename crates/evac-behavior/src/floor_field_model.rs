//! The floor-field movement model.
//!
//! # Decision
//!
//! For a pedestrian at cell `c` with parameters `(bias, repulsion, velocity)`:
//!
//! 1. **Velocity gate** — one Bernoulli(`velocity`) draw; on failure, stay.
//! 2. **Candidates** — every neighbour `n` of `c` (automaton neighbourhood)
//!    that is neither blocked nor occupied at the start of the tick.
//! 3. **Desirability** —
//!    ```text
//!    crowding(n) = number of non-blocked neighbours of n
//!    d(n)        = exp(bias * field(n) - repulsion / (1 + crowding(n)))
//!    ```
//! 4. No candidates → stay.
//! 5. Shift by the minimum (see [`crate::sampling`]) and draw one candidate
//!    proportionally.
//!
//! RNG draw order per decision: the gate draw, then (if reached) one
//! weighted draw.

use smallvec::SmallVec;

use evac_agent::{Pedestrian, PedestrianParams};
use evac_core::{Location, SimRng};

use crate::sampling::{sample_weighted, shift_weights};
use crate::{AutomatonView, MovementModel};

/// One admissible destination and its unshifted desirability.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub location:     Location,
    pub desirability: f64,
}

/// Crowd-aware, field-biased random walk.
#[derive(Copy, Clone, Debug, Default)]
pub struct FloorFieldModel;

impl FloorFieldModel {
    /// Unnormalized preference for a cell with field value `field` and
    /// `crowding` non-blocked neighbours.
    #[inline]
    pub fn desirability(params: &PedestrianParams, field: f64, crowding: usize) -> f64 {
        (params.field_attraction_bias() * field
            - params.crowd_repulsion() / (1.0 + crowding as f64))
            .exp()
    }

    /// Number of non-blocked neighbours of `loc`.
    pub fn crowding(view: &AutomatonView<'_>, loc: Location) -> usize {
        view.neighbours(loc)
            .into_iter()
            .filter(|&n| !view.is_blocked(n))
            .count()
    }

    /// Admissible destinations for `pedestrian`, in neighbourhood order.
    pub fn candidates(
        &self,
        pedestrian: &Pedestrian,
        view:       &AutomatonView<'_>,
    ) -> SmallVec<[Candidate; 8]> {
        let params = pedestrian.params();
        view.neighbours(pedestrian.location())
            .into_iter()
            .filter(|&n| view.is_free(n))
            .filter_map(|n| {
                let field = view.floor_field.value(n)?;
                Some(Candidate {
                    location:     n,
                    desirability: Self::desirability(params, field, Self::crowding(view, n)),
                })
            })
            .collect()
    }
}

impl MovementModel for FloorFieldModel {
    fn choose_movement(
        &self,
        pedestrian: &Pedestrian,
        view:       &AutomatonView<'_>,
        rng:        &mut SimRng,
    ) -> Option<Location> {
        if !rng.gen_bool(pedestrian.params().velocity()) {
            return None;
        }

        let candidates = self.candidates(pedestrian, view);
        if candidates.is_empty() {
            return None;
        }

        let mut weights: SmallVec<[f64; 8]> =
            candidates.iter().map(|c| c.desirability).collect();
        shift_weights(&mut weights);

        match sample_weighted(&weights, rng) {
            Ok(i) => Some(candidates[i].location),
            Err(e) => {
                // Only reachable with overflowing desirabilities (huge bias).
                tracing::warn!(agent = %pedestrian.id(), error = %e, "movement sampling failed; staying");
                None
            }
        }
    }
}
