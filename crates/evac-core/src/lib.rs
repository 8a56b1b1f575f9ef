//! `evac-core` — foundational types for the evacuation cellular automaton.
//!
//! Every other `evac-*` crate depends on this one.  It has no `evac-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`                                             |
//! | [`grid`]        | `Location`, `GridDims`, `Grid<T>`                     |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `SimRng` — the single injectable random source        |
//! | [`scenario`]    | `Scenario` trait, `GridScenario`, `CellKind`          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod scenario;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use grid::{Grid, GridDims, Location};
pub use ids::AgentId;
pub use rng::SimRng;
pub use scenario::{CellKind, GridScenario, GridScenarioBuilder, Scenario};
pub use time::{SimClock, Tick};
