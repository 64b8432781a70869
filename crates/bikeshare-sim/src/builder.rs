//! Fluent builder for constructing a [`Model`].

use bikeshare_agents::{
    seed_waiting_time, Agent, AgentKind, AgentRngs, Station, User, DEFAULT_SITES,
};
use bikeshare_core::{AgentId, GridPos, ModelConfig, SimRng, Tick};
use bikeshare_grid::MultiGrid;
use bikeshare_metrics::MetricsRecorder;

use crate::scheduler::RandomActivation;
use crate::{Model, SimError, SimResult};

/// Bikes docked at each station when the model starts.
const DEFAULT_INITIAL_BIKES: u32 = 5;

/// Fluent builder for [`Model`].
///
/// # Required inputs
///
/// - [`ModelConfig`] — grid dimensions, user count, seed
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default               |
/// |---------------------|-----------------------|
/// | `.sites(v)`         | [`DEFAULT_SITES`]     |
/// | `.initial_bikes(n)` | 5 per station         |
///
/// # Example
///
/// ```rust,ignore
/// let config = ModelConfig { user_count: 100, grid_width: 10, grid_height: 10, seed: 42 };
/// let mut model = ModelBuilder::new(config).build()?;
/// model.advance(200, &mut NoopObserver)?;
/// ```
pub struct ModelBuilder {
    config:        ModelConfig,
    sites:         Option<Vec<GridPos>>,
    initial_bikes: u32,
}

impl ModelBuilder {
    pub fn new(config: ModelConfig) -> Self {
        Self {
            config,
            sites:         None,
            initial_bikes: DEFAULT_INITIAL_BIKES,
        }
    }

    /// Supply dock sites.  Slot order becomes station ID order.
    ///
    /// If not called, the five-dock [`DEFAULT_SITES`] layout is used.
    pub fn sites(mut self, sites: Vec<GridPos>) -> Self {
        self.sites = Some(sites);
        self
    }

    /// Bikes docked at every station when the model starts.
    pub fn initial_bikes(mut self, bikes: u32) -> Self {
        self.initial_bikes = bikes;
        self
    }

    /// Validate inputs, seed and place every agent, and return a
    /// ready-to-run [`Model`].
    ///
    /// Construction draws from the model RNG in a fixed order (station wait
    /// seeds first, then user placements), so two builds from the same
    /// config produce identical initial state.
    pub fn build(self) -> SimResult<Model> {
        self.config.validate()?;

        let width  = self.config.grid_width;
        let height = self.config.grid_height;

        // ── Validate and resolve optional inputs ──────────────────────────
        //
        // Sites are checked against the grid rather than wrapped onto it: a
        // mistyped coordinate should fail the build, not land on an aliased
        // cell.
        let sites = self.sites.unwrap_or_else(|| DEFAULT_SITES.to_vec());
        for &site in &sites {
            if site.x >= width || site.y >= height {
                return Err(SimError::SiteOutOfBounds { site, width, height });
            }
        }

        let station_count = sites.len() as u32;
        let agent_count = station_count + self.config.user_count;

        let mut rng = SimRng::new(self.config.seed);
        let mut grid = MultiGrid::new(width, height);
        let mut agents: Vec<Agent> = Vec::with_capacity(agent_count as usize);

        // ── Stations: low IDs, fixed sites, seeded wait counters ──────────
        for (i, &site) in sites.iter().enumerate() {
            let id = AgentId(i as u32);
            let wait = seed_waiting_time(&mut rng);
            grid.place(id, site)?;
            agents.push(Agent::Station(Station::new(id, site, self.initial_bikes, wait)));
        }

        // ── Users: uniformly random starting cells ────────────────────────
        for i in 0..self.config.user_count {
            let id = AgentId(station_count + i);
            let pos = GridPos::new(rng.gen_range(0..width), rng.gen_range(0..height));
            grid.place(id, pos)?;
            agents.push(Agent::User(User::new(id)));
        }

        // ── Registries, scheduler, recorder ───────────────────────────────
        let kinds: Vec<AgentKind> = agents.iter().map(Agent::kind).collect();
        let rngs = AgentRngs::new(agent_count, self.config.seed);
        let scheduler = RandomActivation::new(agents.iter().map(Agent::id));

        let mut recorder = MetricsRecorder::new("waiting_time");
        for agent in &agents {
            if let Some(station) = agent.as_station() {
                recorder.track(station.id());
            }
        }

        Ok(Model {
            config: self.config,
            grid,
            agents,
            kinds,
            rngs,
            scheduler,
            recorder,
            rng,
            tick: Tick::ZERO,
        })
    }
}
