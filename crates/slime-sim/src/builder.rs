//! Fluent builder for constructing a [`Sim`].

use slime_agent::Agent;
use slime_core::SimulationConfig;
use tracing::debug;

use crate::{Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs (have defaults)
///
/// | Method             | Default                                   |
/// |--------------------|-------------------------------------------|
/// | `.clamp_config()`  | Config is used exactly as given           |
/// | `.running(b)`      | Paused                                    |
/// | `.agents(v)`       | No agents                                 |
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(config)
///     .clamp_config()
///     .running(true)
///     .build()?;
/// sim.create_agents(CreateRequest::scattered(center))?;
/// sim.step(&mut NoopObserver)?;
/// ```
pub struct SimBuilder {
    config:  SimulationConfig,
    clamp:   bool,
    running: bool,
    agents:  Vec<Agent>,
}

impl SimBuilder {
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            clamp:   false,
            running: false,
            agents:  Vec::new(),
        }
    }

    /// Run [`SimulationConfig::clamp`] before validating, as a host would
    /// after loading a preset.
    pub fn clamp_config(mut self) -> Self {
        self.clamp = true;
        self
    }

    /// Start running instead of paused.
    pub fn running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Seed the population with explicit agents.
    ///
    /// Positions are clamped into the grid.  More agents than `max_agents`
    /// fails the build with a capacity error.
    pub fn agents(mut self, agents: Vec<Agent>) -> Self {
        self.agents = agents;
        self
    }

    /// Validate the config, allocate buffers, and return a ready [`Sim`].
    pub fn build(mut self) -> SimResult<Sim> {
        if self.clamp {
            self.config.clamp(None);
        }

        let mut sim = Sim::uninitialized(self.config);
        sim.initialize()?;

        if !self.agents.is_empty() {
            let shape = sim.config().shape();
            for agent in &mut self.agents {
                agent.position = shape.clamp(agent.position);
            }
            sim.seed_agents(&self.agents)?;
            debug!(count = self.agents.len(), "seeded initial agents");
        }

        sim.set_running(self.running);
        Ok(sim)
    }
}
