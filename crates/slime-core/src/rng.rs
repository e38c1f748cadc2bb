//! Deterministic per-agent, per-tick RNG.
//!
//! # Determinism strategy
//!
//! Steering runs over every active agent in parallel, so there is no shared
//! generator.  Instead each agent derives a fresh `SmallRng` for each tick:
//!
//!   seed = mix(global_seed ^ mix(agent * GOLDEN ^ mix(tick ^ stream)))
//!
//! where `mix` is the SplitMix64 finalizer.  This means:
//!
//! - Agents never share RNG state (no contention, no ordering dependency).
//! - Two agents in the same tick, or one agent in two ticks, never draw from
//!   the same stream, so coin flips are never forced in lockstep.
//! - Results are reproducible for a given global seed regardless of how
//!   Rayon splits the work.
//! - `RngStream` separates independent uses (steering vs. spawning) keyed on
//!   the same agent slot.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{AgentId, Tick};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output finalizer.
#[inline]
fn mix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Independent random streams drawn for the same agent slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u64)]
pub enum RngStream {
    /// Turn magnitude and tie-break coin flips during steering.
    Steer = 0x5354_4545_5200_0000,
    /// Disk sampling and random headings during population growth.
    Spawn = 0x5350_4157_4e00_0000,
}

// ── AgentRng ──────────────────────────────────────────────────────────────────

/// Per-agent, per-tick deterministic RNG.
///
/// Created on the worker thread that processes the agent and dropped at the
/// end of that agent's update; never stored or shared.
pub struct AgentRng(SmallRng);

impl AgentRng {
    /// Seed deterministically from the run's global seed, an agent slot, the
    /// current tick, and the purpose of the draw.
    pub fn for_step(global_seed: u64, agent: AgentId, tick: Tick, stream: RngStream) -> Self {
        let inner = mix(tick.0 ^ stream as u64);
        let seed = mix(global_seed ^ mix((agent.0 as u64).wrapping_mul(MIXING_CONSTANT) ^ inner));
        AgentRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }
}
