//! Per-agent RNG pool.

use bikeshare_core::{AgentId, AgentRng};

/// Per-agent deterministic RNG state.
///
/// Kept outside the agent vec so the model can hold `&mut Agent` and that
/// agent's `&mut AgentRng` at the same time (different fields of the model,
/// so the borrows are disjoint).
pub struct AgentRngs {
    pub inner: Vec<AgentRng>,
}

impl AgentRngs {
    /// Allocate and seed `count` per-agent RNGs from the global seed.
    pub fn new(count: u32, global_seed: u64) -> Self {
        let inner = (0..count)
            .map(|i| AgentRng::new(global_seed, AgentId(i)))
            .collect();
        Self { inner }
    }

    /// Mutable reference to one agent's RNG.
    #[inline]
    pub fn get_mut(&mut self, agent: AgentId) -> &mut AgentRng {
        &mut self.inner[agent.index()]
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
