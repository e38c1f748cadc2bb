//! The `Sim` struct, its lifecycle, and the tick loop.

use slime_agent::{Agent, AgentStore};
use slime_core::{GridShape, Rgba, SimClock, SimulationConfig, Tick};
use slime_grid::{diffuse_and_decay, DiffuseParams, TrailMaps};
use tracing::{debug, info, trace};

use crate::deposit::deposit_all;
use crate::population::{create_agents, CreateRequest, SpawnParams};
use crate::steering::{steer_all, SteerParams};
use crate::{NoopObserver, SimObserver, SimResult};

// ── Lifecycle ─────────────────────────────────────────────────────────────────

/// Whether buffers matching the live config exist.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SimState {
    /// No usable buffers: never initialized, or the last reinitialize was
    /// refused by `SimulationConfig::validate`.
    Uninitialized,
    /// Buffers exist for the shape and capacity they were built with.  The
    /// config may have drifted since; the next step or spawn notices.
    Ready,
}

/// Buffers plus the config values they were allocated for.
struct World {
    shape:      GridShape,
    max_agents: u32,
    maps:       TrailMaps,
    agents:     AgentStore,
}

impl World {
    fn allocate(config: &SimulationConfig) -> SimResult<Self> {
        config.validate()?;
        let shape = config.shape();
        Ok(Self {
            shape,
            max_agents: config.max_agents,
            maps:       TrailMaps::new(shape)?,
            agents:     AgentStore::with_capacity(config.max_agents as usize),
        })
    }

    /// `false` once the live config asks for a different shape or capacity.
    fn matches(&self, config: &SimulationConfig) -> bool {
        self.shape == config.shape() && self.max_agents == config.max_agents
    }
}

// ── Per-step settings ─────────────────────────────────────────────────────────

/// Config values latched once per host step and held fixed for all of its ticks.
struct TickSettings {
    steer:      SteerParams,
    diffuse:    DiffuseParams,
    color:      Rgba,
    seed:       u64,
    num_steps:  u32,
    delta_time: f32,
}

impl TickSettings {
    fn latch(config: &SimulationConfig) -> Self {
        Self {
            steer:      SteerParams::from_config(config),
            diffuse:    DiffuseParams::from_config(config),
            color:      config.agent_color,
            seed:       config.seed,
            num_steps:  config.num_steps,
            delta_time: config.delta_time,
        }
    }
}

/// What a call to [`Sim::step`] did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Ticks run.  Zero when the population was empty.
    pub ticks: u32,
    /// Active agents after the step.
    pub agents: usize,
    /// A pending clear was honored before ticking.
    pub cleared: bool,
    /// Buffers were reallocated before ticking.
    pub reinitialized: bool,
}

// ── Sim ───────────────────────────────────────────────────────────────────────

/// The main simulation runner.
///
/// `Sim` owns the live [`SimulationConfig`], the trail buffers, and the agent
/// store, and drives the per-tick phase sequence:
///
/// 1. **Steer** (optionally parallel): every active agent senses the trail as
///    it stood when the tick began, turns, and moves.
/// 2. **Deposit** (optionally parallel): every active agent adds its color
///    to the cell under it.
/// 3. **Diffuse/decay** (optionally parallel): box-blur the trail into the
///    scratch buffer, decay it, and swap it in.
///
/// Steering and deposition are skipped while paused; diffusion still runs.
///
/// Population growth ([`Sim::create_agents`]) happens between host steps, so
/// new agents first move on the following tick.
///
/// Create via [`SimBuilder`][crate::SimBuilder].
pub struct Sim {
    config:          SimulationConfig,
    world:           Option<World>,
    clock:           SimClock,
    running:         bool,
    clear_requested: bool,
    /// Counts spawn gestures so repeated spawns into the same slots draw
    /// fresh positions.
    spawn_epoch:     u64,
}

impl Sim {
    pub(crate) fn uninitialized(config: SimulationConfig) -> Self {
        Self {
            config,
            world:           None,
            clock:           SimClock::new(),
            running:         false,
            clear_requested: false,
            spawn_epoch:     0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn state(&self) -> SimState {
        if self.world.is_some() { SimState::Ready } else { SimState::Uninitialized }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Mutable access for the host.  Shape or capacity edits take effect as
    /// a full reinitialize on the next step or spawn.
    pub fn config_mut(&mut self) -> &mut SimulationConfig {
        &mut self.config
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// The tick the next tick will run as.
    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Active agents; zero when uninitialized.
    pub fn num_agents(&self) -> usize {
        self.world.as_ref().map_or(0, |w| w.agents.count())
    }

    /// The trail buffers of the last completed tick.
    pub fn maps(&self) -> Option<&TrailMaps> {
        self.world.as_ref().map(|w| &w.maps)
    }

    pub fn agents(&self) -> Option<&AgentStore> {
        self.world.as_ref().map(|w| &w.agents)
    }

    // ── Lifecycle ─────────────────────────────────────────────────────────

    /// Drop any existing buffers and allocate new ones from the live config.
    ///
    /// Leaves the simulation paused.  On error the simulation stays
    /// [`SimState::Uninitialized`].
    pub fn initialize(&mut self) -> SimResult<()> {
        self.world = None;
        self.running = false;
        let world = World::allocate(&self.config)?;
        info!(shape = %world.shape, max_agents = world.max_agents, "simulation initialized");
        self.world = Some(world);
        Ok(())
    }

    /// Reinitialize if the live config no longer matches the buffers.
    /// Returns `true` if buffers were reallocated.
    fn ensure_ready<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<bool> {
        if self.world.as_ref().is_some_and(|w| w.matches(&self.config)) {
            return Ok(false);
        }
        self.initialize()?;
        observer.on_reinitialize(self.config.shape(), self.config.max_agents as usize);
        Ok(true)
    }

    /// Remove every agent, zero the trail, and pause, immediately.
    pub fn clear(&mut self) {
        if let Some(world) = self.world.as_mut() {
            world.agents.clear();
            world.maps.clear();
        }
        self.running = false;
        self.clear_requested = false;
        info!("simulation cleared");
    }

    /// Ask for a [`clear`](Self::clear) at the start of the next step or spawn.
    pub fn request_clear(&mut self) {
        self.clear_requested = true;
    }

    fn honor_clear<O: SimObserver>(&mut self, observer: &mut O) -> bool {
        if !self.clear_requested {
            return false;
        }
        self.clear();
        observer.on_clear();
        true
    }

    // ── Population ────────────────────────────────────────────────────────

    /// Spawn agents around `request.position`.
    ///
    /// Asks for `num_steps * agents_per_step` agents, clamped to the free
    /// capacity.  Returns the number actually created.
    pub fn create_agents(&mut self, request: CreateRequest) -> SimResult<usize> {
        self.honor_clear(&mut NoopObserver);
        self.ensure_ready(&mut NoopObserver)?;

        let params = SpawnParams::from_config(&self.config);
        let seed = self.config.seed;
        let epoch = Tick(self.spawn_epoch);
        self.spawn_epoch += 1;

        let Some(world) = self.world.as_mut() else {
            return Ok(0);
        };
        let created = create_agents(&mut world.agents, world.shape, &params, &request, seed, epoch)?;
        debug!(created, total = world.agents.count(), at = %request.position, "agents created");
        Ok(created)
    }

    /// Append explicit agents; used by the builder.
    pub(crate) fn seed_agents(&mut self, agents: &[Agent]) -> SimResult<()> {
        if let Some(world) = self.world.as_mut() {
            world.agents.append(agents)?;
        }
        Ok(())
    }

    // ── Stepping ──────────────────────────────────────────────────────────

    /// Run one host step: honor a pending clear, reinitialize if the config
    /// changed shape or capacity, then run `num_steps` ticks.
    ///
    /// With no active agents no ticks run and the trail is left untouched.
    pub fn step<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<StepReport> {
        let cleared = self.honor_clear(observer);
        let reinitialized = self.ensure_ready(observer)?;
        let mut report = StepReport { cleared, reinitialized, ..StepReport::default() };

        let settings = TickSettings::latch(&self.config);
        let running = self.running;
        let Some(world) = self.world.as_mut() else {
            return Ok(report);
        };
        if world.agents.is_empty() {
            return Ok(report);
        }

        for _ in 0..settings.num_steps {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            run_tick(world, &settings, running, now);
            observer.on_tick_end(now, world.agents.count());
            self.clock.advance(settings.delta_time);
            report.ticks += 1;
        }

        report.agents = world.agents.count();
        observer.on_step_end(self.clock.current_tick, &world.maps, &world.agents);
        Ok(report)
    }

    /// Run `n` host steps.
    pub fn run_steps<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }
}

/// One tick: steer → deposit → diffuse/decay → swap.
fn run_tick(world: &mut World, settings: &TickSettings, running: bool, now: Tick) {
    trace!(tick = %now, agents = world.agents.count(), running, "tick");
    if running {
        steer_all(&mut world.agents, &world.maps, &settings.steer, settings.seed, now);
        deposit_all(&world.agents, &mut world.maps, settings.color);
    }
    diffuse_and_decay(&mut world.maps, &settings.diffuse);
}
