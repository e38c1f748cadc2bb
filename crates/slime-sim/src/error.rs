use slime_agent::AgentError;
use slime_core::SlimeError;
use slime_grid::GridError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Config(#[from] SlimeError),

    #[error("trail map error: {0}")]
    Grid(#[from] GridError),

    #[error("agent store error: {0}")]
    Agent(#[from] AgentError),
}

pub type SimResult<T> = Result<T, SimError>;
