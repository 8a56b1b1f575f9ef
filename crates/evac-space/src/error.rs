//! Spatial-subsystem error type.

use thiserror::Error;

use evac_core::CoreError;

/// Errors produced by `evac-space`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SpaceError {
    #[error("scenario has no reachable exit cells; the floor field is undefined")]
    NoExits,

    #[error("unknown neighbourhood {0:?}: expected \"von-neumann\" or \"moore\"")]
    UnknownNeighbourhood(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type SpaceResult<T> = Result<T, SpaceError>;
