//! `evac-space` — grid connectivity, the static floor field, and exit lookup.
//!
//! # Crate layout
//!
//! | Module             | Contents                                                 |
//! |--------------------|----------------------------------------------------------|
//! | [`neighbourhood`]  | `Neighbourhood` (Von Neumann / Moore), `Neighbours`      |
//! | [`floor_field`]    | `StaticFloorField` — multi-source Dijkstra, normalized   |
//! | [`exit_index`]     | `ExitIndex` — R-tree nearest-exit queries                |
//! | [`error`]          | `SpaceError`, `SpaceResult<T>`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `Neighbourhood`.        |

pub mod error;
pub mod exit_index;
pub mod floor_field;
pub mod neighbourhood;

#[cfg(test)]
mod tests;

pub use error::{SpaceError, SpaceResult};
pub use exit_index::ExitIndex;
pub use floor_field::StaticFloorField;
pub use neighbourhood::{Neighbourhood, Neighbours};
