//! The fixed bike-dock agent.

use bikeshare_core::{AgentId, GridPos};

use crate::context::StepContext;
use crate::kind::AgentKind;

/// A dock with a finite bike inventory and a cumulative wait counter.
///
/// Identity and position are fixed at construction; the counters evolve
/// only through [`step`](Self::step).  Bikes deplete one-way (nothing in
/// the model ever returns one) and `waiting_time` only grows from its
/// seeded value.
pub struct Station {
    id:  AgentId,
    pos: GridPos,

    bikes_available: u32,
    users_waiting:   u32,
    waiting_time:    u64,
}

impl Station {
    /// A fresh dock: full inventory, empty queue, seeded wait counter.
    pub fn new(id: AgentId, pos: GridPos, initial_bikes: u32, seeded_waiting_time: u64) -> Self {
        Self {
            id,
            pos,
            bikes_available: initial_bikes,
            users_waiting: 0,
            waiting_time: seeded_waiting_time,
        }
    }

    /// Dock with explicit counter values, for exercising mid-run states.
    #[cfg(test)]
    pub(crate) fn with_counters(
        id: AgentId,
        pos: GridPos,
        bikes_available: u32,
        users_waiting: u32,
        waiting_time: u64,
    ) -> Self {
        Self { id, pos, bikes_available, users_waiting, waiting_time }
    }

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    /// Bikes currently docked here.
    pub fn bikes_available(&self) -> u32 {
        self.bikes_available
    }

    /// Riders queued here right now.
    pub fn users_waiting(&self) -> u32 {
        self.users_waiting
    }

    /// Cumulative rider-minutes spent waiting at this dock.
    pub fn waiting_time(&self) -> u64 {
        self.waiting_time
    }

    /// Serve the riders standing on this dock's cell, in arrival order.
    ///
    /// Each co-located user either takes a bike, which also releases one
    /// queued rider (the queue is a bare count, no identities), or joins
    /// the queue and adds one minute to the cumulative wait.
    pub fn step(&mut self, ctx: &StepContext<'_>) {
        for agent in ctx.grid.contents_at(self.pos) {
            if ctx.kinds[agent.index()] != AgentKind::User {
                continue;
            }
            if self.bikes_available > 0 {
                self.bikes_available -= 1;
                if self.users_waiting > 0 {
                    self.users_waiting -= 1;
                }
            } else {
                self.users_waiting += 1;
                self.waiting_time += 1;
            }
        }
    }
}
