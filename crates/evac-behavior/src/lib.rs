//! `evac-behavior` — how a pedestrian picks its next cell.
//!
//! # Crate layout
//!
//! | Module                 | Contents                                                  |
//! |------------------------|-----------------------------------------------------------|
//! | [`context`]            | `AutomatonView<'a>` — read-only tick snapshot             |
//! | [`model`]              | `MovementModel` trait                                     |
//! | [`floor_field_model`]  | `FloorFieldModel` — crowd-aware, field-biased random walk |
//! | [`sampling`]           | weight shifting and weighted discrete sampling            |
//! | [`noop`]               | `StayPut` — never moves                                   |
//! | [`error`]              | `BehaviorError`, `BehaviorResult<T>`                      |
//!
//! # Design notes
//!
//! The automaton's tick has two halves per agent:
//!
//! 1. **Decide**: call `MovementModel::choose_movement` with a `&Pedestrian`,
//!    an `&AutomatonView` over the *current* occupancy, and the shared RNG.
//!    No mutation.
//! 2. **Apply**: the automaton checks the answer against the *next*
//!    occupancy and moves or keeps the agent.
//!
//! Models therefore never see claims made earlier in the same tick.

pub mod context;
pub mod error;
pub mod floor_field_model;
pub mod model;
pub mod noop;
pub mod sampling;

#[cfg(test)]
mod tests;

pub use context::AutomatonView;
pub use error::{BehaviorError, BehaviorResult};
pub use floor_field_model::{Candidate, FloorFieldModel};
pub use model::MovementModel;
pub use noop::StayPut;
pub use sampling::{WEIGHT_FLOOR, sample_weighted, shift_weights};
