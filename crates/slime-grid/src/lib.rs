//! `slime-grid`: trail map storage and the decay/diffusion pass.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`maps`]      | `TrailMaps` (current + scratch buffers), `BufferKind`     |
//! | [`diffuse`]   | `DiffuseParams`, `diffuse_and_decay`                      |
//! | [`error`]     | `GridError`, `GridResult`                                 |
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Diffuses rows in parallel on Rayon's thread pool.      |

pub mod diffuse;
pub mod error;
pub mod maps;

#[cfg(test)]
mod tests;

pub use diffuse::{diffuse_and_decay, DiffuseParams};
pub use error::{GridError, GridResult};
pub use maps::{BufferKind, TrailMaps};
