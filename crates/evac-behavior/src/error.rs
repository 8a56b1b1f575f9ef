use rand::distributions::WeightedError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum BehaviorError {
    #[error("cannot sample from candidate weights: {0}")]
    Weights(#[from] WeightedError),
}

pub type BehaviorResult<T> = Result<T, BehaviorError>;
