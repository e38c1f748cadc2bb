use slime_core::GridShape;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("trail map dimensions must be positive, got {0}")]
    ZeroDimension(GridShape),
}

pub type GridResult<T> = Result<T, GridError>;
