use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum AgentError {
    #[error("invalid pedestrian parameter {name} = {value}: {reason}")]
    InvalidParam {
        name:   &'static str,
        value:  f64,
        reason: &'static str,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
