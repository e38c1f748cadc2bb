//! Unit tests for slime-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, CellId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(AgentId::INVALID.0, u32::MAX);
        assert_eq!(CellId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod color {
    use crate::Rgba;

    #[test]
    fn weight_ignores_alpha() {
        assert_eq!(Rgba::new(1.0, 2.0, 3.0, 100.0).weight(), 6.0);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Rgba::new(1.0, 1.0, 1.0, 1.0);
        let b = Rgba::ZERO;
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.25), Rgba::new(0.75, 0.75, 0.75, 0.75));
    }

    #[test]
    fn add_assign_accumulates() {
        let mut c = Rgba::ZERO;
        c += Rgba::WHITE;
        c += Rgba::WHITE;
        assert_eq!(c, Rgba::new(2.0, 2.0, 2.0, 2.0));
    }
}

#[cfg(test)]
mod shape {
    use crate::{CellId, GridShape, Vec2};

    #[test]
    fn clamp_keeps_points_inside() {
        let s = GridShape::new(16, 9);
        let p = s.clamp(Vec2::new(-3.0, 42.0));
        assert_eq!(p, Vec2::new(0.0, 8.0));
        assert!(s.contains(p));
    }

    #[test]
    fn cell_of_rounds_and_clamps() {
        let s = GridShape::new(4, 4);
        assert_eq!(s.cell_of(Vec2::new(1.4, 2.6)), (1, 3));
        assert_eq!(s.cell_of(Vec2::new(3.9, -0.2)), (3, 0));
    }

    #[test]
    fn cell_id_is_row_major() {
        let s = GridShape::new(5, 3);
        assert_eq!(s.cell_id(2, 1), CellId(7));
        assert_eq!(s.cell_count(), 15);
    }

    #[test]
    fn single_cell_grid() {
        let s = GridShape::new(1, 1);
        assert_eq!(s.clamp(Vec2::new(0.7, 0.7)), Vec2::ZERO);
        assert_eq!(s.cell_of(Vec2::new(0.7, 0.7)), (0, 0));
    }

    #[test]
    fn contains_cell_bounds() {
        let s = GridShape::new(2, 2);
        assert!(s.contains_cell(1, 1));
        assert!(!s.contains_cell(-1, 0));
        assert!(!s.contains_cell(0, 2));
    }
}

#[cfg(test)]
mod time {
    use crate::{SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(t.offset(3), Tick(13));
        assert_eq!(Tick(15) - Tick(10), 5u64);
    }

    #[test]
    fn clock_accumulates_delta_time() {
        let mut clock = SimClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert_eq!(clock.current_tick, Tick(2));
        assert!((clock.elapsed_secs - 0.75).abs() < 1e-9);
    }
}

#[cfg(test)]
mod rng {
    use crate::{AgentId, AgentRng, RngStream, Tick};

    fn draw(seed: u64, agent: u32, tick: u64, stream: RngStream) -> u64 {
        AgentRng::for_step(seed, AgentId(agent), Tick(tick), stream).random()
    }

    #[test]
    fn same_inputs_same_stream() {
        assert_eq!(draw(9, 3, 100, RngStream::Steer), draw(9, 3, 100, RngStream::Steer));
    }

    #[test]
    fn adjacent_agents_differ() {
        assert_ne!(draw(0, 0, 0, RngStream::Steer), draw(0, 1, 0, RngStream::Steer));
    }

    #[test]
    fn consecutive_ticks_differ() {
        assert_ne!(draw(0, 5, 1, RngStream::Steer), draw(0, 5, 2, RngStream::Steer));
    }

    #[test]
    fn streams_differ() {
        assert_ne!(draw(0, 5, 1, RngStream::Steer), draw(0, 5, 1, RngStream::Spawn));
    }

    #[test]
    fn seeds_differ() {
        assert_ne!(draw(1, 0, 0, RngStream::Steer), draw(2, 0, 0, RngStream::Steer));
    }

    #[test]
    fn gen_range_within_bounds() {
        let mut rng = AgentRng::for_step(0, AgentId(0), Tick(0), RngStream::Spawn);
        for _ in 0..1_000 {
            let v: f32 = rng.gen_range(0.0..1.0);
            assert!((0.0..1.0).contains(&v));
        }
    }
}

#[cfg(test)]
mod config {
    use std::f32::consts::FRAC_PI_2;

    use crate::{GridShape, ResolutionPreset, SimulationConfig, MAX_AGENTS_LIMIT, MIN_CREATE_RADIUS};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimulationConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.shape(), GridShape::new(16, 9));
    }

    #[test]
    fn validate_rejects_zero_dimensions() {
        let cfg = SimulationConfig { width: 0, ..SimulationConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimulationConfig { height: 0, ..SimulationConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_capacity() {
        let cfg = SimulationConfig { max_agents: 0, ..SimulationConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = SimulationConfig { max_agents: MAX_AGENTS_LIMIT + 1, ..SimulationConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn clamp_fixes_ranges() {
        let mut cfg = SimulationConfig {
            resolution: ResolutionPreset::Free,
            width: 0,
            height: 0,
            max_agents: 0,
            num_steps: 0,
            decay_factor: -1.0,
            agent_speed: f32::NAN,
            sensor_angle: 3.0,
            create_radius: 0.0,
            ..SimulationConfig::default()
        };
        cfg.clamp(None);
        assert_eq!((cfg.width, cfg.height), (1, 1));
        assert_eq!(cfg.max_agents, 1);
        assert_eq!(cfg.num_steps, 1);
        assert_eq!(cfg.decay_factor, 0.0);
        assert_eq!(cfg.agent_speed, 0.0);
        assert_eq!(cfg.sensor_angle, FRAC_PI_2);
        assert_eq!(cfg.create_radius, MIN_CREATE_RADIUS);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn clamp_caps_max_agents() {
        let mut cfg = SimulationConfig { max_agents: u32::MAX, ..SimulationConfig::default() };
        cfg.clamp(Some(cfg.shape()));
        assert_eq!(cfg.max_agents, MAX_AGENTS_LIMIT);
    }

    #[test]
    fn hd_preset_follows_edited_width() {
        let mut cfg = SimulationConfig { width: 100, height: 9, ..SimulationConfig::default() };
        cfg.clamp(Some(GridShape::new(16, 9)));
        assert_eq!((cfg.width, cfg.height), (96, 54));
    }

    #[test]
    fn hd_preset_follows_edited_height() {
        let mut cfg = SimulationConfig { width: 16, height: 30, ..SimulationConfig::default() };
        cfg.clamp(Some(GridShape::new(16, 9)));
        assert_eq!((cfg.width, cfg.height), (48, 27));
    }

    #[test]
    fn box_preset_squares_grid() {
        let mut cfg = SimulationConfig {
            resolution: ResolutionPreset::Box,
            width: 64,
            height: 9,
            ..SimulationConfig::default()
        };
        cfg.clamp(Some(GridShape::new(16, 9)));
        assert_eq!((cfg.width, cfg.height), (64, 64));

        cfg.height = 32;
        cfg.clamp(Some(GridShape::new(64, 64)));
        assert_eq!((cfg.width, cfg.height), (32, 32));
    }

    #[test]
    fn requested_per_gesture_multiplies() {
        let cfg = SimulationConfig { num_steps: 3, agents_per_step: 7, ..SimulationConfig::default() };
        assert_eq!(cfg.requested_per_gesture(), 21);
    }
}
