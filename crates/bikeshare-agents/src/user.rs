//! The mobile rider agent.

use bikeshare_core::{AgentId, AgentRng};
use bikeshare_grid::{GridError, GridResult};

use crate::context::StepContext;

/// A rider roaming the grid.
///
/// Position lives in the grid, not here; the struct carries only identity.
pub struct User {
    id: AgentId,
}

impl User {
    pub fn new(id: AgentId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    /// Hop to a uniformly random Moore-adjacent cell.
    ///
    /// Unconditional: riders keep wandering every tick, queued or not.
    /// The draw comes from the agent's own RNG stream, so one rider's path
    /// depends only on the run seed and its ID.
    pub fn step(&mut self, ctx: &mut StepContext<'_>, rng: &mut AgentRng) -> GridResult<()> {
        let pos = ctx
            .grid
            .position(self.id)
            .ok_or(GridError::NotPlaced(self.id))?;
        let options = ctx.grid.neighborhood(pos, false);
        let target = rng
            .choose(&options)
            .copied()
            .ok_or(GridError::EmptyNeighborhood(pos))?;
        ctx.grid.move_agent(self.id, target)?;
        Ok(())
    }
}
