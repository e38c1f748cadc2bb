//! Simulation configuration.
//!
//! `SimulationConfig` is owned and edited by the host (inspector UI, preset
//! files, command line).  The host is expected to call [`SimulationConfig::clamp`]
//! after every edit; the simulation core only runs the narrower
//! [`SimulationConfig::validate`] check and refuses to initialize on failure.

use std::f32::consts::FRAC_PI_2;
use std::f32::consts::FRAC_PI_4;

use crate::{GridShape, Rgba, SlimeError, SlimeResult};

/// Hard upper bound on `max_agents`.
pub const MAX_AGENTS_LIMIT: u32 = 8_000_000;

/// Smallest allowed spawn-disk radius.
pub const MIN_CREATE_RADIUS: f32 = 0.01;

/// Fixed simulation timestep used when the host does not supply one.
pub const DEFAULT_DELTA_TIME: f32 = 0.02;

/// Aspect-ratio rule applied to `width`/`height` by [`SimulationConfig::clamp`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResolutionPreset {
    /// Square grid: width and height are kept equal.
    Box,
    /// 16:9 grid: dimensions are kept at an integer multiple of 16×9.
    #[default]
    Hd,
    /// Dimensions are left as entered.
    Free,
}

/// Every knob the host can turn.
///
/// Fields are read as a snapshot at the start of each host step; changing
/// `width`, `height`, or `max_agents` triggers a full reinitialize on the
/// next step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimulationConfig {
    /// Display name of the preset these settings came from.
    pub preset_name: String,
    pub resolution: ResolutionPreset,

    // ── Trail map ─────────────────────────────────────────────────────────
    /// Trail-map width in cells.
    pub width: u32,
    /// Trail-map height in cells.
    pub height: u32,
    /// Fraction of trail intensity lost per simulated second.
    pub decay_factor: f32,
    /// Blend weight between the unblurred cell and its box average, clamped
    /// to `[0, 1]`.  `1.0` is a pure box blur.
    pub diffuse_factor: f32,
    /// Half-width of the diffusion box, in cells.  `0` disables blurring.
    pub diffuse_kernel_size: u32,

    // ── Population ────────────────────────────────────────────────────────
    /// Capacity of the agent store.
    pub max_agents: u32,
    /// Ticks run per host step.
    pub num_steps: u32,
    /// Seconds simulated by one tick.
    pub delta_time: f32,
    /// Global RNG seed.  The same seed and inputs reproduce a run exactly.
    pub seed: u64,

    // ── Agent motion ──────────────────────────────────────────────────────
    /// Cells per second.  At the default `delta_time`, 50 is one cell per tick.
    pub agent_speed: f32,
    /// Maximum radians turned per second.
    pub agent_rotation_speed: f32,
    /// Intensity each agent deposits per tick.
    pub agent_color: Rgba,

    // ── Sensors ───────────────────────────────────────────────────────────
    /// Distance from the agent to each sensor, in cells.
    pub sensor_distance: f32,
    /// Angle between the forward sensor and each side sensor, in `[0, π/2]`.
    pub sensor_angle: f32,
    /// Half-width of the square each sensor sums over, in cells.
    pub sensor_width: u32,

    // ── Spawning ──────────────────────────────────────────────────────────
    /// Radius of the disk new agents are placed in.
    pub create_radius: f32,
    /// Agents created per tick of a create gesture.
    pub agents_per_step: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            preset_name:          "Untitled".to_owned(),
            resolution:           ResolutionPreset::Hd,
            width:                16,
            height:               9,
            decay_factor:         0.1,
            diffuse_factor:       1.0,
            diffuse_kernel_size:  1,
            max_agents:           5_000_000,
            num_steps:            1,
            delta_time:           DEFAULT_DELTA_TIME,
            seed:                 0,
            agent_speed:          50.0,
            agent_rotation_speed: 10.0,
            agent_color:          Rgba::WHITE,
            sensor_distance:      9.0,
            sensor_angle:         FRAC_PI_4,
            sensor_width:         1,
            create_radius:        1.0,
            agents_per_step:      1,
        }
    }
}

impl SimulationConfig {
    #[inline]
    pub fn shape(&self) -> GridShape {
        GridShape::new(self.width, self.height)
    }

    /// Agents a single create gesture asks for before the population cap.
    #[inline]
    pub fn requested_per_gesture(&self) -> u64 {
        self.num_steps as u64 * self.agents_per_step as u64
    }

    /// Pull every field into its legal range.
    ///
    /// `previous` is the grid shape before the edit being clamped.  The
    /// resolution preset uses it to decide which dimension the user changed
    /// and therefore which one to derive from the other; `None` treats the
    /// width as the edited dimension.
    pub fn clamp(&mut self, previous: Option<GridShape>) {
        self.width = self.width.max(1);
        self.height = self.height.max(1);

        let width_changed = previous.is_none_or(|p| p.width != self.width);
        let height_changed = previous.is_none_or(|p| p.height != self.height);

        match self.resolution {
            ResolutionPreset::Box => {
                if self.width != self.height {
                    if width_changed {
                        self.height = self.width;
                    } else {
                        self.width = self.height;
                    }
                }
            }
            ResolutionPreset::Hd => {
                if width_changed {
                    let m = (self.width / 16).max(1);
                    self.width = 16 * m;
                    self.height = 9 * m;
                } else if height_changed {
                    let m = (self.height / 9).max(1);
                    self.width = 16 * m;
                    self.height = 9 * m;
                }
            }
            ResolutionPreset::Free => {}
        }

        self.max_agents = self.max_agents.clamp(1, MAX_AGENTS_LIMIT);
        self.num_steps = self.num_steps.max(1);

        self.decay_factor = non_negative(self.decay_factor);
        self.diffuse_factor = non_negative(self.diffuse_factor);
        self.agent_speed = non_negative(self.agent_speed);
        self.agent_rotation_speed = non_negative(self.agent_rotation_speed);
        self.delta_time = non_negative(self.delta_time);
        self.sensor_angle = non_negative(self.sensor_angle).min(FRAC_PI_2);

        if !(self.create_radius >= MIN_CREATE_RADIUS) {
            self.create_radius = MIN_CREATE_RADIUS;
        }
    }

    /// Core-side defensive check run before (re)allocating buffers.
    ///
    /// Only the conditions that would make allocation meaningless are
    /// rejected; everything else is assumed to have been clamped by the host.
    pub fn validate(&self) -> SlimeResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(SlimeError::Config(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_agents == 0 {
            return Err(SlimeError::Config("max_agents must be positive".to_owned()));
        }
        if self.max_agents > MAX_AGENTS_LIMIT {
            return Err(SlimeError::Config(format!(
                "max_agents {} exceeds the limit of {MAX_AGENTS_LIMIT}",
                self.max_agents
            )));
        }
        Ok(())
    }
}

/// Map negative and NaN values to zero.
#[inline]
fn non_negative(v: f32) -> f32 {
    if v >= 0.0 { v } else { 0.0 }
}
