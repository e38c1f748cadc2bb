//! `slime-sim`: tick loop orchestrator for the slime mold simulation.
//!
//! # Host step
//!
//! ```text
//! create_agents(request): between steps; new agents move next tick
//!
//! step():
//!   ① Clear: honor a pending clear request (agents → 0, trail → 0, pause)
//!   ② Lifecycle: reinitialize if width/height/max_agents changed
//!   ③ Latch: snapshot the per-tick settings from the live config
//!   ④ for _ in 0..num_steps:
//!        Steer: sense, turn, move every active agent
//!                    (parallel with the `parallel` feature)
//!        Deposit: each agent adds its color to its cell
//!                    (counted in parallel with the `parallel` feature)
//!        Diffuse: box blur + decay into scratch, swap
//!                    (parallel with the `parallel` feature)
//! ```
//!
//! Steer and Deposit are skipped while paused.  With no active agents no
//! ticks run at all.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                       |
//! |------------|--------------------------------------------------------------|
//! | `parallel` | Runs steering, deposition counting, and diffusion on Rayon.  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use slime_core::SimulationConfig;
//! use slime_sim::{CreateRequest, NoopObserver, SimBuilder};
//!
//! let mut sim = SimBuilder::new(SimulationConfig::default())
//!     .running(true)
//!     .build()?;
//! let center = sim.config().shape().center();
//! sim.create_agents(CreateRequest::scattered(center))?;
//! sim.run_steps(100, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod deposit;
pub mod error;
pub mod observer;
pub mod population;
pub mod sim;
pub mod steering;


pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use population::{CreateRequest, SpawnParams};
pub use sim::{Sim, SimState, StepReport};
pub use steering::{SteerParams, Turn};
