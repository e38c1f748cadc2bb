//! Deposition: every active agent adds its color to the cell it stands on.
//!
//! Runs in two passes.  First every agent's cell is counted; with the
//! `parallel` feature agents are counted on Rayon's thread pool into atomic
//! per-cell counters.  Then each visited cell receives `color * count` in a
//! single add.  Counts are integers, so the trail is bit-identical whichever
//! way the first pass ran, and two agents landing on one cell both
//! contribute.

use slime_agent::AgentStore;
use slime_core::Rgba;
use slime_grid::TrailMaps;

/// Add `color` onto the trail cell under each active agent.
pub fn deposit_all(agents: &AgentStore, maps: &mut TrailMaps, color: Rgba) {
    if agents.is_empty() {
        return;
    }
    let counts = count_cells(agents, maps);
    for (cell, &n) in maps.trail_mut().iter_mut().zip(&counts) {
        if n > 0 {
            *cell += color * n as f32;
        }
    }
}

/// Number of active agents standing on each cell, row-major.
#[cfg(not(feature = "parallel"))]
fn count_cells(agents: &AgentStore, maps: &TrailMaps) -> Vec<u32> {
    let shape = maps.shape();
    let mut counts = vec![0u32; shape.cell_count()];
    for agent in agents.active() {
        let (x, y) = shape.cell_of(agent.position);
        counts[shape.cell_id(x, y).index()] += 1;
    }
    counts
}

/// Number of active agents standing on each cell, row-major.
#[cfg(feature = "parallel")]
fn count_cells(agents: &AgentStore, maps: &TrailMaps) -> Vec<u32> {
    use std::sync::atomic::{AtomicU32, Ordering};

    use rayon::prelude::*;

    let shape = maps.shape();
    let counts: Vec<AtomicU32> = (0..shape.cell_count()).map(|_| AtomicU32::new(0)).collect();
    agents.active().par_iter().for_each(|agent| {
        let (x, y) = shape.cell_of(agent.position);
        counts[shape.cell_id(x, y).index()].fetch_add(1, Ordering::Relaxed);
    });
    counts.into_iter().map(AtomicU32::into_inner).collect()
}
