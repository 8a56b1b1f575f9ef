//! The pedestrian record and its immutable behaviour parameters.

use evac_core::{AgentId, Location, Tick};

use crate::{AgentError, AgentResult};

// ── PedestrianParams ──────────────────────────────────────────────────────────

/// Behaviour parameters fixed at creation.
///
/// | Parameter               | Range      | Effect                                  |
/// |-------------------------|------------|-----------------------------------------|
/// | `field_attraction_bias` | `>= 0`     | pull toward higher floor-field values   |
/// | `crowd_repulsion`       | `>= 0`     | push away from crowded cells            |
/// | `velocity`              | `(0, 1]`   | probability of attempting a move        |
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PedestrianParams {
    field_attraction_bias: f64,
    crowd_repulsion:       f64,
    velocity:              f64,
}

impl PedestrianParams {
    /// Validate and build a parameter set.
    pub fn new(field_attraction_bias: f64, crowd_repulsion: f64, velocity: f64) -> AgentResult<Self> {
        let params = Self { field_attraction_bias, crowd_repulsion, velocity };
        params.validate()?;
        Ok(params)
    }

    /// Re-check the invariants.  Needed for values that arrived through
    /// deserialization rather than [`new`](Self::new).
    pub fn validate(&self) -> AgentResult<()> {
        non_negative("field_attraction_bias", self.field_attraction_bias)?;
        non_negative("crowd_repulsion", self.crowd_repulsion)?;
        if !(self.velocity > 0.0 && self.velocity <= 1.0) {
            return Err(AgentError::InvalidParam {
                name:   "velocity",
                value:  self.velocity,
                reason: "must lie in (0, 1]",
            });
        }
        Ok(())
    }

    #[inline]
    pub fn field_attraction_bias(&self) -> f64 {
        self.field_attraction_bias
    }

    #[inline]
    pub fn crowd_repulsion(&self) -> f64 {
        self.crowd_repulsion
    }

    #[inline]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }
}

impl Default for PedestrianParams {
    /// Full speed, unit field attraction, no crowd repulsion.
    fn default() -> Self {
        Self { field_attraction_bias: 1.0, crowd_repulsion: 0.0, velocity: 1.0 }
    }
}

fn non_negative(name: &'static str, value: f64) -> AgentResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(AgentError::InvalidParam { name, value, reason: "must be finite and >= 0" })
    }
}

// ── Pedestrian ────────────────────────────────────────────────────────────────

/// One agent.
///
/// Lifecycle: created active, evacuated at most once, never destroyed.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pedestrian {
    id:        AgentId,
    location:  Location,
    steps:     u64,
    exit_tick: Option<Tick>,
    /// Visited cells, starting with the spawn cell.
    path:      Vec<Location>,
    params:    PedestrianParams,
}

impl Pedestrian {
    pub fn new(id: AgentId, location: Location, params: PedestrianParams) -> Self {
        Self { id, location, steps: 0, exit_tick: None, path: vec![location], params }
    }

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    /// Number of successful moves.
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    #[inline]
    pub fn exit_tick(&self) -> Option<Tick> {
        self.exit_tick
    }

    #[inline]
    pub fn is_evacuated(&self) -> bool {
        self.exit_tick.is_some()
    }

    pub fn path(&self) -> &[Location] {
        &self.path
    }

    #[inline]
    pub fn params(&self) -> &PedestrianParams {
        &self.params
    }

    /// `exit_tick × seconds_per_tick`, once evacuated.
    pub fn evacuation_time_secs(&self, seconds_per_tick: f64) -> Option<f64> {
        self.exit_tick.map(|t| t.as_secs(seconds_per_tick))
    }

    /// Record a move: new location, path entry, step count.
    pub fn move_to(&mut self, location: Location) {
        self.location = location;
        self.path.push(location);
        self.steps += 1;
    }

    /// Stamp the exit tick.  Later calls keep the first tick.
    pub fn mark_evacuated(&mut self, tick: Tick) {
        debug_assert!(self.exit_tick.is_none(), "{} evacuated twice", self.id);
        self.exit_tick.get_or_insert(tick);
    }
}
