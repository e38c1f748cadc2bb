//! Simulation observer trait for presentation and data collection.

use slime_agent::AgentStore;
use slime_core::{GridShape, Tick};
use slime_grid::TrailMaps;

/// Callbacks invoked by [`Sim::step`][crate::Sim::step] at key points in the
/// tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: intensity printer
///
/// ```rust,ignore
/// struct IntensityPrinter;
///
/// impl SimObserver for IntensityPrinter {
///     fn on_step_end(&mut self, tick: Tick, maps: &TrailMaps, agents: &AgentStore) {
///         println!("{tick}: {} agents, {:.1} total", agents.count(), maps.total_intensity());
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the tick's buffer swap.  `agents` is the active count.
    fn on_tick_end(&mut self, _tick: Tick, _agents: usize) {}

    /// Called once all ticks of a host step have completed.
    ///
    /// This is the only point at which the trail is handed out mid-run, and
    /// it is always a fully completed tick's output.
    fn on_step_end(&mut self, _tick: Tick, _maps: &TrailMaps, _agents: &AgentStore) {}

    /// Called after buffers were (re)allocated for a new grid shape or capacity.
    fn on_reinitialize(&mut self, _shape: GridShape, _max_agents: usize) {}

    /// Called after a clear zeroed the trail and removed every agent.
    fn on_clear(&mut self) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
