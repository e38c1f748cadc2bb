//! `slime-core`: foundational types for the slime mold simulation.
//!
//! This crate is a dependency of every other `slime-*` crate.  It has no
//! `slime-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`vec2`]        | `Vec2` grid-space point / direction                   |
//! | [`color`]       | `Rgba` four-channel intensity                         |
//! | [`shape`]       | `GridShape` bounds, clamping, cell lookup             |
//! | [`time`]        | `Tick`, `SimClock`                                    |
//! | [`rng`]         | `AgentRng` (per-agent, per-step), `RngStream`         |
//! | [`config`]      | `SimulationConfig`, `ResolutionPreset`                |
//! | [`error`]       | `SlimeError`, `SlimeResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod color;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod shape;
pub mod time;
pub mod vec2;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgba;
pub use config::{ResolutionPreset, SimulationConfig, MAX_AGENTS_LIMIT, MIN_CREATE_RADIUS};
pub use error::{SlimeError, SlimeResult};
pub use ids::{AgentId, CellId};
pub use rng::{AgentRng, RngStream};
pub use shape::GridShape;
pub use time::{SimClock, Tick};
pub use vec2::Vec2;
