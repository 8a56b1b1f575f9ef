//! The `MovementModel` trait — the decision extension point.

use evac_agent::Pedestrian;
use evac_core::{Location, SimRng};

use crate::AutomatonView;

/// Pluggable per-pedestrian movement decision.
///
/// Called once per active, non-evacuating pedestrian per tick, in the
/// automaton's shuffled order.  Implementations must be pure apart from RNG
/// consumption: same pedestrian, same view, same RNG state → same answer.
///
/// # Example
///
/// ```rust,ignore
/// struct AlwaysEast;
///
/// impl MovementModel for AlwaysEast {
///     fn choose_movement(&self, p: &Pedestrian, view: &AutomatonView<'_>, _rng: &mut SimRng)
///         -> Option<Location>
///     {
///         view.dims()
///             .offset(p.location(), 0, 1)
///             .filter(|&loc| view.is_free(loc))
///     }
/// }
/// ```
pub trait MovementModel: Send + Sync + 'static {
    /// The cell `pedestrian` wants to move to this tick, or `None` to stay.
    ///
    /// The automaton may still refuse the move if another pedestrian claimed
    /// the cell earlier in the same tick.
    fn choose_movement(
        &self,
        pedestrian: &Pedestrian,
        view:       &AutomatonView<'_>,
        rng:        &mut SimRng,
    ) -> Option<Location>;
}
