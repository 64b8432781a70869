//! World state handed to each agent step.

use bikeshare_grid::MultiGrid;

use crate::kind::AgentKind;

/// The world as one agent sees it for the duration of its step.
///
/// Activation is strictly sequential, so the context hands the active agent
/// direct mutable access to the grid instead of collecting move intents for
/// a later commit phase.  The kind registry is a parallel read-only slice:
/// `kinds[agent.index()]` classifies any agent without touching the agent
/// vec the caller is already borrowing from.
pub struct StepContext<'a> {
    /// The shared toroidal grid.  Users move themselves through it.
    pub grid: &'a mut MultiGrid,

    /// Variant of every agent, indexed by agent ID.
    pub kinds: &'a [AgentKind],
}

impl<'a> StepContext<'a> {
    #[inline]
    pub fn new(grid: &'a mut MultiGrid, kinds: &'a [AgentKind]) -> Self {
        Self { grid, kinds }
    }
}
