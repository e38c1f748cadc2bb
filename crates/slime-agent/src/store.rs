//! Core agent storage.
//!
//! # Active prefix
//!
//! All `capacity` records are allocated up front.  Only the prefix
//! `[0, count)` is live; slots past `count` hold stale data from earlier
//! runs and are never handed out by any accessor:
//!
//! ```ignore
//! for agent in store.active() { … }          // only live agents
//! store.active_mut().par_iter_mut()…          // parallel update
//! ```
//!
//! The population grows only by appending at `count` and shrinks only via
//! [`AgentStore::clear`], which resets `count` without touching the records.

use std::ops::Range;

use slime_core::{AgentId, Vec2};

use crate::{AgentError, AgentResult};

/// One simulated particle.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Agent {
    /// Grid-space position inside `[0, width-1] × [0, height-1]`.
    pub position: Vec2,
    /// Radians, counter-clockwise from +x.
    pub heading: f32,
}

impl Agent {
    #[inline]
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }
}

/// Dense array of agent records with a live prefix.
#[derive(Clone, Debug)]
pub struct AgentStore {
    records: Vec<Agent>,
    count:   usize,
}

impl AgentStore {
    /// Allocate `capacity` zeroed records with no active agents.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: vec![Agent::default(); capacity],
            count:   0,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.records.len()
    }

    /// Number of active agents.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// `true` if there are no active agents.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Free slots left before the store is full.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.count
    }

    /// Iterator over all active `AgentId`s in ascending index order.
    pub fn agent_ids(&self) -> impl Iterator<Item = AgentId> + '_ {
        (0..self.count as u32).map(AgentId)
    }

    /// The active agent at `agent`, or `None` if the slot is not live.
    #[inline]
    pub fn get(&self, agent: AgentId) -> Option<&Agent> {
        self.active().get(agent.index())
    }

    /// Read-only slice of active agents.
    #[inline]
    pub fn active(&self) -> &[Agent] {
        &self.records[..self.count]
    }

    /// Mutable slice of active agents.
    #[inline]
    pub fn active_mut(&mut self) -> &mut [Agent] {
        &mut self.records[..self.count]
    }

    /// Copy `agents` into `[count, count + len)` and make them active.
    pub fn append(&mut self, agents: &[Agent]) -> AgentResult<Range<usize>> {
        let range = self.reserve(agents.len())?;
        self.records[range.clone()].copy_from_slice(agents);
        self.count = range.end;
        Ok(range)
    }

    /// Append `n` agents produced by `make`, which receives the slot each new
    /// agent will occupy.
    pub fn append_with<F>(&mut self, n: usize, mut make: F) -> AgentResult<Range<usize>>
    where
        F: FnMut(AgentId) -> Agent,
    {
        let range = self.reserve(n)?;
        for i in range.clone() {
            self.records[i] = make(AgentId(i as u32));
        }
        self.count = range.end;
        Ok(range)
    }

    /// Deactivate every agent.  Records are neither freed nor zeroed.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    fn reserve(&self, n: usize) -> AgentResult<Range<usize>> {
        if n > self.remaining() {
            return Err(AgentError::Capacity {
                capacity:  self.capacity(),
                count:     self.count,
                requested: n,
            });
        }
        Ok(self.count..self.count + n)
    }
}
