//! `slime-agent`: dense, fixed-capacity agent storage.
//!
//! # Crate layout
//!
//! | Module      | Contents                                   |
//! |-------------|--------------------------------------------|
//! | [`store`]   | `Agent` record, `AgentStore`               |
//! | [`error`]   | `AgentError`, `AgentResult`                |

pub mod error;
pub mod store;


pub use error::{AgentError, AgentResult};
pub use store::{Agent, AgentStore};
