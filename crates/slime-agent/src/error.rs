use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    /// An append would push the active count past the allocated capacity.
    /// Callers are expected to pre-clamp, so this indicates a logic error.
    #[error("cannot append {requested} agents: {count} of {capacity} slots already active")]
    Capacity {
        capacity:  usize,
        count:     usize,
        requested: usize,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
