//! `evac-agent` — pedestrian state for the evacuation automaton.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`pedestrian`]  | `Pedestrian` record, `PedestrianParams`                   |
//! | [`store`]       | `PedestrianStore` (active + evacuated), `IdAllocator`     |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! Pedestrians are plain data.  Only the automaton mutates them, and only
//! between decision queries; decision models see them through `&Pedestrian`.

pub mod error;
pub mod pedestrian;
pub mod store;


pub use error::{AgentError, AgentResult};
pub use pedestrian::{Pedestrian, PedestrianParams};
pub use store::{IdAllocator, PedestrianStore};
