//! Fluent builder for constructing an [`Automaton`].

use evac_agent::PedestrianStore;
use evac_behavior::MovementModel;
use evac_core::{Scenario, SimClock, SimRng};
use evac_space::{ExitIndex, StaticFloorField};

use crate::{Automaton, AutomatonConfig, Occupancy, SimResult};

/// Fluent builder for [`Automaton<M, S>`].
///
/// # Required inputs
///
/// - [`AutomatonConfig`] — neighbourhood, time step, seed, …
/// - `S: Scenario` — dimensions plus the blocked/exit predicates
/// - `M: MovementModel` — e.g. [`evac_behavior::FloorFieldModel`]
///
/// # Optional inputs
///
/// | Method     | Default                        |
/// |------------|--------------------------------|
/// | `.rng(r)`  | `SimRng::new(config.seed)`     |
///
/// # Example
///
/// ```rust,ignore
/// let mut automaton = AutomatonBuilder::new(config, scenario, FloorFieldModel)
///     .build()?;
/// automaton.add_pedestrians_uniformly(50, |_| PedestrianParams::default())?;
/// automaton.run(&mut NoopObserver)?;
/// ```
pub struct AutomatonBuilder<M: MovementModel, S: Scenario> {
    config:   AutomatonConfig,
    scenario: S,
    model:    M,
    rng:      Option<SimRng>,
}

impl<M: MovementModel, S: Scenario> AutomatonBuilder<M, S> {
    pub fn new(config: AutomatonConfig, scenario: S, model: M) -> Self {
        Self { config, scenario, model, rng: None }
    }

    /// Inject the random source instead of seeding one from `config.seed`.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Validate the config, compute the floor field and exit index, and
    /// return an empty automaton at tick 0.
    ///
    /// Fails on an invalid config, a zero-sized grid, or a scenario with no
    /// exits.
    pub fn build(self) -> SimResult<Automaton<M, S>> {
        self.config.validate()?;
        let dims = self.scenario.dims()?;
        let floor_field = StaticFloorField::compute(&self.scenario)?;
        let exits = ExitIndex::from_scenario(&self.scenario);

        tracing::debug!(
            %dims,
            neighbourhood = %self.config.neighbourhood,
            seed = self.config.seed,
            "automaton built"
        );

        Ok(Automaton {
            clock:       SimClock::new(self.config.seconds_per_tick),
            rng:         self.rng.unwrap_or_else(|| SimRng::new(self.config.seed)),
            config:      self.config,
            scenario:    self.scenario,
            floor_field,
            exits,
            occupancy:   Occupancy::new(dims),
            pedestrians: PedestrianStore::new(),
            model:       self.model,
            tick_zero_snapshot_sent: false,
        })
    }
}
