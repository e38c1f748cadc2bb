//! Simulation time model.
//!
//! Time is a monotonically increasing `Tick` counter: one tick is one full
//! pass of steering, deposition, and diffusion.  `SimClock` additionally
//! accumulates the simulated seconds those ticks covered, since the
//! per-tick `delta_time` may change between host steps.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
///
/// The tick feeds the per-agent RNG seed, so it must never repeat within a
/// run; `u64` makes wrap-around a non-issue.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// Tick counter plus the simulated seconds elapsed since the clock started.
///
/// The clock is never reset by a clear or a reinitialize: tick values keep
/// increasing so RNG streams never repeat within a process.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    /// The current tick, advanced by `SimClock::advance()`.
    pub current_tick: Tick,
    /// Sum of every `delta_time` passed to `advance`.
    pub elapsed_secs: f64,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick covering `delta_time` seconds.
    #[inline]
    pub fn advance(&mut self, delta_time: f32) {
        self.current_tick = Tick(self.current_tick.0 + 1);
        self.elapsed_secs += delta_time as f64;
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.2} s)", self.current_tick, self.elapsed_secs)
    }
}
