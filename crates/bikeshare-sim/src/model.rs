//! The `Model` struct and its tick loop.

use bikeshare_agents::{Agent, AgentKind, AgentRngs, Station, StepContext};
use bikeshare_core::{AgentId, ModelConfig, SimRng, Tick};
use bikeshare_grid::MultiGrid;
use bikeshare_metrics::MetricsRecorder;

use crate::portrayal::{Portrayal, Shape};
use crate::scheduler::RandomActivation;
use crate::{SimObserver, SimResult};

/// The bikeshare model.
///
/// Holds all simulation state and drives the three-phase tick loop:
///
/// 1. **Sample**: record every station's cumulative waiting time.  This
///    runs first, so the series holds the value *entering* each tick.
/// 2. **Shuffle**: draw a fresh uniformly random permutation of all agents.
/// 3. **Activate**: step each agent once, in permutation order.  Agents
///    mutate the world directly; an agent activated later in the tick sees
///    the moves of agents activated earlier.
///
/// Create via [`ModelBuilder`][crate::ModelBuilder].
pub struct Model {
    /// Global configuration (grid dimensions, user count, seed).
    pub(crate) config: ModelConfig,

    /// The shared toroidal grid.
    pub(crate) grid: MultiGrid,

    /// All agents, indexed by `AgentId`.  Stations first, then users.
    pub(crate) agents: Vec<Agent>,

    /// Variant registry parallel to `agents`.
    pub(crate) kinds: Vec<AgentKind>,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub(crate) rngs: AgentRngs,

    /// Activation order, reshuffled at the top of every tick.
    pub(crate) scheduler: RandomActivation,

    /// Waiting-time series for every station.
    pub(crate) recorder: MetricsRecorder,

    /// Model-level RNG (activation shuffles; construction-time draws).
    pub(crate) rng: SimRng,

    /// The next tick to execute.
    pub(crate) tick: Tick,
}

impl Model {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run exactly `n_ticks` ticks from the current position.
    ///
    /// Calls observer hooks at every tick boundary and `on_run_end` once
    /// after the last tick.  Use [`NoopObserver`][crate::NoopObserver] if
    /// you don't need callbacks.
    pub fn advance<O: SimObserver>(&mut self, n_ticks: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n_ticks {
            let now = self.tick;
            observer.on_tick_start(now);
            self.step()?;
            observer.on_tick_end(now, self.scheduler.order());
            observer.on_snapshot(now, &self.agents);
        }
        observer.on_run_end(self.tick);
        Ok(())
    }

    /// Execute one tick without observer callbacks.
    pub fn step(&mut self) -> SimResult<()> {
        self.record_metrics();
        self.scheduler.shuffle(&mut self.rng);

        // The permutation is fixed for the whole tick even though agents
        // move the world mid-tick.
        for i in 0..self.scheduler.len() {
            let agent = self.scheduler.order()[i];
            self.activate(agent)?;
        }

        self.tick = self.tick + 1;
        Ok(())
    }

    // ── Core tick processing ──────────────────────────────────────────────

    /// Sample every station's cumulative waiting time at the current tick.
    fn record_metrics(&mut self) {
        for agent in &self.agents {
            if let Some(station) = agent.as_station() {
                self.recorder
                    .record(self.tick, station.id(), station.waiting_time());
            }
        }
    }

    /// Step one agent.
    fn activate(&mut self, agent: AgentId) -> SimResult<()> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let grid  = &mut self.grid;
        let kinds = self.kinds.as_slice();
        let rng   = self.rngs.get_mut(agent);

        let mut ctx = StepContext::new(grid, kinds);
        self.agents[agent.index()].step(&mut ctx, rng)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// The next tick to execute; equals the number of completed ticks.
    pub fn tick(&self) -> Tick {
        self.tick
    }

    pub fn grid(&self) -> &MultiGrid {
        &self.grid
    }

    /// All agents, indexed by `AgentId`.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    pub fn station_count(&self) -> usize {
        self.kinds.iter().filter(|k| **k == AgentKind::Station).count()
    }

    pub fn user_count(&self) -> usize {
        self.kinds.iter().filter(|k| **k == AgentKind::User).count()
    }

    /// All stations, in ID order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.agents.iter().filter_map(Agent::as_station)
    }

    /// One station by ID, if that agent exists and is a station.
    pub fn station(&self, agent: AgentId) -> Option<&Station> {
        self.agents.get(agent.index()).and_then(Agent::as_station)
    }

    /// The collected waiting-time series.
    pub fn recorder(&self) -> &MetricsRecorder {
        &self.recorder
    }

    // ── Rendering ─────────────────────────────────────────────────────────

    /// Render descriptor for one agent, if it draws at all.
    ///
    /// Stations draw as filled green cells labeled with their cumulative
    /// waiting time.  Users are not drawn.
    pub fn portray(&self, agent: AgentId) -> Option<Portrayal> {
        match self.agents.get(agent.index())? {
            Agent::Station(s) => Some(Portrayal {
                shape:      Shape::Rect,
                filled:     true,
                w:          0.8,
                h:          0.8,
                layer:      0,
                color:      "green",
                text:       Some(s.waiting_time().to_string()),
                text_color: Some("white"),
            }),
            Agent::User(_) => None,
        }
    }
}
