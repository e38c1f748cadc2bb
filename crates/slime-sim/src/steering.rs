//! Sensing and steering: the per-agent half of a tick.
//!
//! Each active agent, independently:
//!
//! 1. sums trail weight around three sensor points (left, forward, right),
//! 2. turns by a random fraction of its rotation budget according to
//!    [`choose_turn`],
//! 3. moves forward, reflecting its heading off any wall it would cross.
//!
//! All sensing reads the trail as it stood when the tick began; nothing is
//! written to the grid here.

use std::f32::consts::{PI, TAU};

use slime_agent::{Agent, AgentStore};
use slime_core::{AgentId, AgentRng, GridShape, Rgba, RngStream, SimulationConfig, Tick, Vec2};
use slime_grid::TrailMaps;

/// Per-tick snapshot of the motion and sensor settings.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SteerParams {
    pub speed:           f32,
    pub rotation_speed:  f32,
    pub sensor_distance: f32,
    pub sensor_angle:    f32,
    pub sensor_width:    u32,
    pub delta_time:      f32,
}

impl SteerParams {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            speed:           config.agent_speed,
            rotation_speed:  config.agent_rotation_speed,
            sensor_distance: config.sensor_distance,
            sensor_angle:    config.sensor_angle,
            sensor_width:    config.sensor_width,
            delta_time:      config.delta_time,
        }
    }
}

/// Outcome of the steering rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Turn {
    Straight,
    /// Toward `heading - sensor_angle`.
    Left,
    /// Toward `heading + sensor_angle`.
    Right,
}

/// Pick a turn from the left, forward, and right sensor weights.
///
/// `coin` breaks the tie when forward is the strict minimum and both sides
/// weigh the same: `true` turns right.
pub fn choose_turn(left: f32, forward: f32, right: f32, coin: bool) -> Turn {
    if forward > left && forward > right {
        Turn::Straight
    } else if forward < left && forward < right {
        if left == right {
            if coin { Turn::Right } else { Turn::Left }
        } else if right > left {
            Turn::Right
        } else {
            Turn::Left
        }
    } else if left < right {
        Turn::Right
    } else {
        Turn::Left
    }
}

/// Total trail weight in the `(2w+1)²` square centred on the cell nearest the
/// sensor point `distance` cells from `origin` along `angle`.
///
/// Cells of the square that fall outside the grid contribute nothing.
pub fn sense(trail: &[Rgba], shape: GridShape, origin: Vec2, angle: f32, params: &SteerParams) -> f32 {
    let point = origin + Vec2::from_angle(angle) * params.sensor_distance;
    let cx = point.x.round() as i64;
    let cy = point.y.round() as i64;
    let w = params.sensor_width as i64;

    // A far sensor point saturates the cast; keep the box math saturating too.
    let x0 = cx.saturating_sub(w).max(0);
    let x1 = cx.saturating_add(w).min(shape.width as i64 - 1);
    let y0 = cy.saturating_sub(w).max(0);
    let y1 = cy.saturating_add(w).min(shape.height as i64 - 1);
    if x0 > x1 || y0 > y1 {
        return 0.0;
    }

    let width = shape.width as usize;
    let mut total = 0.0;
    for y in y0 as usize..=y1 as usize {
        let row = &trail[y * width..(y + 1) * width];
        for c in &row[x0 as usize..=x1 as usize] {
            total += c.weight();
        }
    }
    total
}

/// Sense, turn, and move one agent.
pub fn steer_agent(
    agent:  &mut Agent,
    trail:  &[Rgba],
    shape:  GridShape,
    params: &SteerParams,
    rng:    &mut AgentRng,
) {
    let mut heading = agent.heading;
    let left = sense(trail, shape, agent.position, heading - params.sensor_angle, params);
    let forward = sense(trail, shape, agent.position, heading, params);
    let right = sense(trail, shape, agent.position, heading + params.sensor_angle, params);

    let strength: f32 = rng.random();
    let coin = rng.gen_bool(0.5);
    let turn = params.rotation_speed * params.delta_time * strength;

    match choose_turn(left, forward, right, coin) {
        Turn::Straight => {}
        Turn::Left => heading -= turn,
        Turn::Right => heading += turn,
    }

    let next = agent.position + Vec2::from_angle(heading) * (params.speed * params.delta_time);

    // Mirror the heading about whichever wall was crossed.
    if next.x < 0.0 || next.x > shape.max_x() {
        heading = PI - heading;
    }
    if next.y < 0.0 || next.y > shape.max_y() {
        heading = -heading;
    }
    if heading != agent.heading {
        heading = heading.rem_euclid(TAU);
    }

    agent.position = shape.clamp(next);
    agent.heading = heading;
}

/// Steer every active agent against the current trail.
///
/// Agent `i` draws from `AgentRng::for_step(seed, i, tick, Steer)`, so the
/// outcome does not depend on processing order or thread count.
pub fn steer_all(
    agents: &mut AgentStore,
    maps:   &TrailMaps,
    params: &SteerParams,
    seed:   u64,
    tick:   Tick,
) {
    let trail = maps.trail();
    let shape = maps.shape();
    let update = |(i, agent): (usize, &mut Agent)| {
        let mut rng = AgentRng::for_step(seed, AgentId(i as u32), tick, RngStream::Steer);
        steer_agent(agent, trail, shape, params, &mut rng);
    };

    #[cfg(not(feature = "parallel"))]
    {
        agents.active_mut().iter_mut().enumerate().for_each(update);
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        agents.active_mut().par_iter_mut().enumerate().for_each(update);
    }
}
