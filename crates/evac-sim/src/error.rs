use evac_agent::AgentError;
use evac_core::CoreError;
use evac_space::SpaceError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("automaton configuration error: {0}")]
    Config(String),

    #[error("cannot place {requested} pedestrians: only {available} free cells")]
    Capacity {
        requested: usize,
        available: usize,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Space(#[from] SpaceError),

    #[error(transparent)]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
