//! The closed agent type: one enum over every variant in the model.

use bikeshare_core::{AgentId, AgentRng};
use bikeshare_grid::GridResult;

use crate::context::StepContext;
use crate::kind::AgentKind;
use crate::station::Station;
use crate::user::User;

/// Any agent in the model.
///
/// The variant set is closed: the scheduler activates agents through
/// [`step`](Self::step) without trait objects, and adding a variant turns
/// every match in the workspace into a compile-error checklist.
pub enum Agent {
    Station(Station),
    User(User),
}

impl Agent {
    pub fn id(&self) -> AgentId {
        match self {
            Agent::Station(s) => s.id(),
            Agent::User(u) => u.id(),
        }
    }

    /// Which variant this is.  The model mirrors this into its dense kind
    /// registry at construction.
    pub fn kind(&self) -> AgentKind {
        match self {
            Agent::Station(_) => AgentKind::Station,
            Agent::User(_) => AgentKind::User,
        }
    }

    /// Shared view of the station variant, if that is what this is.
    pub fn as_station(&self) -> Option<&Station> {
        match self {
            Agent::Station(s) => Some(s),
            Agent::User(_) => None,
        }
    }

    /// Advance this agent by one tick.
    ///
    /// Stations touch only their own counters and cannot fail; a user move
    /// can surface a grid defect.
    pub fn step(&mut self, ctx: &mut StepContext<'_>, rng: &mut AgentRng) -> GridResult<()> {
        match self {
            Agent::Station(s) => {
                s.step(ctx);
                Ok(())
            }
            Agent::User(u) => u.step(ctx, rng),
        }
    }
}
