//! Population growth: spawning agents in a disk around a target point.
//!
//! This is the only path that adds agents.  A request asks for
//! `num_steps * agents_per_step` agents and is clamped so the store never
//! exceeds its capacity; a request clamped to zero is a no-op.

use std::f32::consts::TAU;

use slime_agent::{Agent, AgentResult, AgentStore};
use slime_core::{AgentRng, GridShape, RngStream, SimulationConfig, Tick, Vec2};
use tracing::debug;

/// A "create at point" gesture, already mapped into grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CreateRequest {
    /// Centre of the spawn disk.  Clamped into the grid before sampling.
    pub position: Vec2,
    /// Heading given to every new agent unless `ignore_heading` is set.
    pub heading: f32,
    /// Give each new agent a uniform-random heading instead.
    pub ignore_heading: bool,
}

impl CreateRequest {
    /// Spawn agents all facing `heading`.
    pub fn with_heading(position: Vec2, heading: f32) -> Self {
        Self { position, heading, ignore_heading: false }
    }

    /// Spawn agents facing uniformly random directions.
    pub fn scattered(position: Vec2) -> Self {
        Self { position, heading: 0.0, ignore_heading: true }
    }

    /// Derive a request from pointer motion since the previous frame.
    ///
    /// A stationary pointer scatters headings; a moving pointer gives every
    /// new agent the drag direction.
    pub fn from_pointer(position: Vec2, pointer_delta: Vec2) -> Self {
        if pointer_delta.length() <= f32::EPSILON {
            Self::scattered(position)
        } else {
            Self::with_heading(position, pointer_delta.angle())
        }
    }
}

/// Snapshot of the spawn settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpawnParams {
    /// Agents requested per gesture before clamping.
    pub requested: u64,
    pub radius:    f32,
}

impl SpawnParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            requested: config.requested_per_gesture(),
            radius:    config.create_radius,
        }
    }
}

/// How many of `requested` agents fit into `agents` without exceeding capacity.
#[inline]
pub fn clamp_request(requested: u64, agents: &AgentStore) -> usize {
    requested.min(agents.remaining() as u64) as usize
}

/// Append up to `params.requested` agents around `request.position`.
///
/// Positions are uniform over the disk of `params.radius` (area-uniform, not
/// square) and clamped into the grid.  Each new agent draws from the `Spawn`
/// stream keyed on its own slot and `epoch`.  Returns the number created.
pub fn create_agents(
    agents:  &mut AgentStore,
    shape:   GridShape,
    params:  &SpawnParams,
    request: &CreateRequest,
    seed:    u64,
    epoch:   Tick,
) -> AgentResult<usize> {
    let n = clamp_request(params.requested, agents);
    if n == 0 {
        debug!(requested = params.requested, "population cap reached; nothing created");
        return Ok(0);
    }
    if (n as u64) < params.requested {
        debug!(requested = params.requested, created = n, "spawn request clamped to capacity");
    }

    let center = shape.clamp(request.position);
    agents.append_with(n, |id| {
        let mut rng = AgentRng::for_step(seed, id, epoch, RngStream::Spawn);
        let r = params.radius * rng.random::<f32>().sqrt();
        let theta = rng.gen_range(0.0..TAU);
        let position = shape.clamp(center + Vec2::from_angle(theta) * r);
        let heading = if request.ignore_heading {
            rng.gen_range(0.0..TAU)
        } else {
            request.heading
        };
        Agent::new(position, heading)
    })?;

    Ok(n)
}
