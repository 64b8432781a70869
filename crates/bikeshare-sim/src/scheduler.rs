//! Uniform-random activation order.

use bikeshare_core::{AgentId, SimRng};

/// Random activation scheduler.
///
/// Holds one slot per registered agent and reshuffles the whole list at the
/// top of every tick, so a tick activates every agent exactly once in a
/// fresh uniformly random order.  Membership is fixed at construction; the
/// model never adds or removes agents mid-run.
pub struct RandomActivation {
    order: Vec<AgentId>,
}

impl RandomActivation {
    /// Register every agent that will be activated each tick.
    pub fn new<I: IntoIterator<Item = AgentId>>(agents: I) -> Self {
        Self {
            order: agents.into_iter().collect(),
        }
    }

    /// Draw a fresh activation permutation for the coming tick.
    pub fn shuffle(&mut self, rng: &mut SimRng) {
        rng.shuffle(&mut self.order);
    }

    /// The permutation drawn by the most recent [`shuffle`](Self::shuffle).
    pub fn order(&self) -> &[AgentId] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
