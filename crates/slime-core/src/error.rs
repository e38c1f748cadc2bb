//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `SlimeError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The top-level error type for `slime-core`.
#[derive(Debug, Error)]
pub enum SlimeError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `slime-core`.
pub type SlimeResult<T> = Result<T, SlimeError>;
