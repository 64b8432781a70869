//! Integration tests for bikeshare-sim.

use bikeshare_core::{AgentId, GridPos, ModelConfig, Tick};

use crate::{Model, ModelBuilder, NoopObserver, SimError, SimObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn test_config(user_count: u32, seed: u64) -> ModelConfig {
    ModelConfig {
        user_count,
        grid_width: 10,
        grid_height: 10,
        seed,
    }
}

fn downtown_model(user_count: u32, seed: u64) -> Model {
    ModelBuilder::new(test_config(user_count, seed)).build().unwrap()
}

/// A 2x2 grid where every cell is an empty dock, so riders can never take a
/// bike anywhere.
fn starved_model(user_count: u32, seed: u64) -> Model {
    let config = ModelConfig {
        user_count,
        grid_width: 2,
        grid_height: 2,
        seed,
    };
    let sites = vec![
        GridPos::new(0, 0),
        GridPos::new(0, 1),
        GridPos::new(1, 0),
        GridPos::new(1, 1),
    ];
    ModelBuilder::new(config)
        .sites(sites)
        .initial_bikes(0)
        .build()
        .unwrap()
}

// ── ModelBuilder validation ───────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;

    #[test]
    fn builds_with_defaults() {
        let model = downtown_model(100, 42);
        assert_eq!(model.agent_count(), 105);
        assert_eq!(model.station_count(), 5);
        assert_eq!(model.user_count(), 100);
        assert_eq!(model.tick(), Tick::ZERO);
        assert_eq!(model.recorder().tracked().len(), 5);
        assert_eq!(model.grid().placed_count(), 105);
    }

    #[test]
    fn stations_occupy_the_low_ids() {
        let model = downtown_model(3, 1);
        for id in 0..5u32 {
            assert!(model.station(AgentId(id)).is_some(), "agent {id} should be a dock");
        }
        assert!(model.station(AgentId(5)).is_none(), "agent 5 should be a rider");
    }

    #[test]
    fn stations_sit_on_the_default_sites() {
        let model = downtown_model(0, 9);
        let sites: Vec<GridPos> = model.stations().map(|s| s.pos()).collect();
        assert_eq!(sites, bikeshare_agents::DEFAULT_SITES);
        for station in model.stations() {
            assert_eq!(model.grid().position(station.id()), Some(station.pos()));
        }
    }

    #[test]
    fn fresh_docks_are_stocked_and_seeded() {
        let model = downtown_model(10, 3);
        for station in model.stations() {
            assert_eq!(station.bikes_available(), 5);
            assert_eq!(station.users_waiting(), 0);
            assert!(
                (4_999..=9_999).contains(&station.waiting_time()),
                "seeded wait out of envelope: {}",
                station.waiting_time()
            );
        }
    }

    #[test]
    fn riders_start_inside_the_grid() {
        let model = downtown_model(200, 11);
        for id in 5..205u32 {
            let pos = model.grid().position(AgentId(id)).expect("rider placed");
            assert!(pos.x < 10 && pos.y < 10);
        }
    }

    #[test]
    fn zero_dimension_config_rejected() {
        let config = ModelConfig { user_count: 5, grid_width: 0, grid_height: 10, seed: 0 };
        assert!(matches!(
            ModelBuilder::new(config).build(),
            Err(SimError::Config(_))
        ));
    }

    #[test]
    fn off_grid_site_rejected() {
        let result = ModelBuilder::new(test_config(5, 0))
            .sites(vec![GridPos::new(10, 3)])
            .build();
        assert!(matches!(result, Err(SimError::SiteOutOfBounds { .. })));
    }

    #[test]
    fn custom_sites_and_stock() {
        let model = ModelBuilder::new(test_config(2, 6))
            .sites(vec![GridPos::new(1, 1), GridPos::new(8, 8)])
            .initial_bikes(1)
            .build()
            .unwrap();
        assert_eq!(model.station_count(), 2);
        assert_eq!(model.user_count(), 2);
        for station in model.stations() {
            assert_eq!(station.bikes_available(), 1);
        }
    }

    #[test]
    fn zero_riders_is_a_valid_model() {
        let mut model = downtown_model(0, 5);
        assert_eq!(model.user_count(), 0);
        model.advance(5, &mut NoopObserver).unwrap();
        assert_eq!(model.tick(), Tick(5));
    }

    #[test]
    fn same_config_builds_identical_initial_state() {
        let a = downtown_model(50, 77);
        let b = downtown_model(50, 77);

        let waits_a: Vec<u64> = a.stations().map(|s| s.waiting_time()).collect();
        let waits_b: Vec<u64> = b.stations().map(|s| s.waiting_time()).collect();
        assert_eq!(waits_a, waits_b);

        for id in 0..a.agent_count() as u32 {
            assert_eq!(a.grid().position(AgentId(id)), b.grid().position(AgentId(id)));
        }
    }
}

// ── Tick loop ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod run_tests {
    use super::*;

    #[test]
    fn step_advances_the_tick() {
        let mut model = downtown_model(10, 42);
        model.step().unwrap();
        assert_eq!(model.tick(), Tick(1));
        model.step().unwrap();
        assert_eq!(model.tick(), Tick(2));
    }

    #[test]
    fn advance_runs_exactly_n_ticks() {
        let mut model = downtown_model(10, 42);
        model.advance(5, &mut NoopObserver).unwrap();
        assert_eq!(model.tick(), Tick(5));
        model.advance(3, &mut NoopObserver).unwrap();
        assert_eq!(model.tick(), Tick(8));
    }

    /// Observer that counts hook invocations.
    #[derive(Default)]
    struct HookCounter {
        starts:    usize,
        ends:      usize,
        snapshots: usize,
        run_ends:  usize,
    }
    impl SimObserver for HookCounter {
        fn on_tick_start(&mut self, _t: Tick) { self.starts += 1; }
        fn on_tick_end(&mut self, _t: Tick, _a: &[AgentId]) { self.ends += 1; }
        fn on_snapshot(&mut self, _t: Tick, _agents: &[bikeshare_agents::Agent]) {
            self.snapshots += 1;
        }
        fn on_run_end(&mut self, _t: Tick) { self.run_ends += 1; }
    }

    #[test]
    fn observer_called_once_per_tick() {
        let mut model = downtown_model(5, 42);
        let mut obs = HookCounter::default();
        model.advance(7, &mut obs).unwrap();
        assert_eq!(obs.starts, 7);
        assert_eq!(obs.ends, 7);
        assert_eq!(obs.snapshots, 7);
        assert_eq!(obs.run_ends, 1);
    }

    #[test]
    fn advance_zero_ticks_still_reports_run_end() {
        let mut model = downtown_model(5, 42);
        let mut obs = HookCounter::default();
        model.advance(0, &mut obs).unwrap();
        assert_eq!(obs.starts, 0);
        assert_eq!(obs.run_ends, 1);
        assert_eq!(model.tick(), Tick::ZERO);
    }

    /// Observer that captures each tick's activation order.
    #[derive(Default)]
    struct CaptureOrders {
        orders: Vec<Vec<AgentId>>,
    }
    impl SimObserver for CaptureOrders {
        fn on_tick_end(&mut self, _t: Tick, activated: &[AgentId]) {
            self.orders.push(activated.to_vec());
        }
    }

    #[test]
    fn every_agent_activates_exactly_once_per_tick() {
        let mut model = downtown_model(20, 13);
        let mut obs = CaptureOrders::default();
        model.advance(4, &mut obs).unwrap();

        for order in &obs.orders {
            assert_eq!(order.len(), 25);
            let mut sorted = order.clone();
            sorted.sort();
            let expected: Vec<AgentId> = (0..25u32).map(AgentId).collect();
            assert_eq!(sorted, expected, "not a permutation of all agents");
        }
    }

    #[test]
    fn stations_never_move() {
        let mut model = downtown_model(30, 21);
        let before: Vec<GridPos> = model.stations().map(|s| s.pos()).collect();
        model.advance(10, &mut NoopObserver).unwrap();
        let after: Vec<GridPos> = model.stations().map(|s| s.pos()).collect();
        assert_eq!(before, after);
        for station in model.stations() {
            assert_eq!(model.grid().position(station.id()), Some(station.pos()));
        }
    }

    #[test]
    fn bikes_only_deplete() {
        let mut model = downtown_model(60, 2);
        let mut last: Vec<u32> = model.stations().map(|s| s.bikes_available()).collect();
        for _ in 0..15 {
            model.step().unwrap();
            let now: Vec<u32> = model.stations().map(|s| s.bikes_available()).collect();
            for (b, a) in last.iter().zip(&now) {
                assert!(a <= b, "bike count rose from {b} to {a}");
            }
            last = now;
        }
    }

    #[test]
    fn starved_docks_accrue_wait() {
        let mut model = starved_model(50, 7);
        let before: u64 = model.stations().map(|s| s.waiting_time()).sum();
        model.advance(30, &mut NoopObserver).unwrap();
        let after: u64 = model.stations().map(|s| s.waiting_time()).sum();
        assert!(after > before, "no wait accrued: {before} -> {after}");
    }
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod determinism_tests {
    use super::*;

    /// Full observable trace of a run: activation orders plus final state.
    fn trace(seed: u64) -> (Vec<Vec<AgentId>>, Vec<(u32, u32, u64)>, Vec<GridPos>) {
        #[derive(Default)]
        struct Capture {
            orders: Vec<Vec<AgentId>>,
        }
        impl SimObserver for Capture {
            fn on_tick_end(&mut self, _t: Tick, activated: &[AgentId]) {
                self.orders.push(activated.to_vec());
            }
        }

        let mut model = downtown_model(40, seed);
        let mut obs = Capture::default();
        model.advance(20, &mut obs).unwrap();

        let stations = model
            .stations()
            .map(|s| (s.bikes_available(), s.users_waiting(), s.waiting_time()))
            .collect();
        let riders = (5..45u32)
            .map(|id| model.grid().position(AgentId(id)).unwrap())
            .collect();
        (obs.orders, stations, riders)
    }

    #[test]
    fn same_seed_reproduces_the_run() {
        assert_eq!(trace(42), trace(42));
    }

    #[test]
    fn different_seeds_diverge() {
        let (orders_a, _, _) = trace(42);
        let (orders_b, _, _) = trace(43);
        assert_ne!(orders_a, orders_b);
    }
}

// ── Conservation ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod conservation_tests {
    use super::*;

    #[test]
    fn every_agent_stays_on_exactly_one_cell() {
        let mut model = downtown_model(35, 19);
        for _ in 0..12 {
            model.step().unwrap();

            assert_eq!(model.grid().placed_count(), 40);
            let mut seen = 0usize;
            for y in 0..10 {
                for x in 0..10 {
                    seen += model.grid().contents_at(GridPos::new(x, y)).len();
                }
            }
            assert_eq!(seen, 40, "cell contents out of sync with placements");

            for id in 0..40u32 {
                let pos = model.grid().position(AgentId(id)).expect("agent placed");
                assert!(
                    model.grid().contents_at(pos).contains(&AgentId(id)),
                    "agent {id} missing from its own cell"
                );
            }
        }
    }

    #[test]
    fn population_is_fixed_for_the_run() {
        let mut model = downtown_model(25, 4);
        model.advance(10, &mut NoopObserver).unwrap();
        assert_eq!(model.agent_count(), 30);
        assert_eq!(model.station_count(), 5);
        assert_eq!(model.user_count(), 25);
    }
}

// ── Metric sampling ───────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling_tests {
    use super::*;

    #[test]
    fn one_sample_per_station_per_tick() {
        let mut model = downtown_model(10, 31);
        model.advance(10, &mut NoopObserver).unwrap();

        for station in model.stations() {
            let series = model.recorder().series(station.id());
            assert_eq!(series.len(), 10);
            for (i, sample) in series.iter().enumerate() {
                assert_eq!(sample.tick, Tick(i as u64));
            }
        }
    }

    #[test]
    fn tick_zero_sample_is_the_seeded_value() {
        let mut model = downtown_model(30, 8);
        let seeds: Vec<u64> = model.stations().map(|s| s.waiting_time()).collect();

        model.advance(3, &mut NoopObserver).unwrap();

        for (station, seed) in model.stations().zip(&seeds) {
            let series = model.recorder().series(station.id());
            assert_eq!(series[0].value, *seed, "tick 0 must sample pre-activation state");
        }
    }

    #[test]
    fn samples_never_decrease() {
        let mut model = starved_model(20, 12);
        model.advance(25, &mut NoopObserver).unwrap();

        for station in model.stations() {
            let series = model.recorder().series(station.id());
            for pair in series.windows(2) {
                assert!(pair[1].value >= pair[0].value);
            }
        }
    }
}

// ── Portrayal ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod portrayal_tests {
    use super::*;
    use crate::Shape;

    #[test]
    fn docks_draw_as_labeled_green_cells() {
        let model = downtown_model(5, 42);
        let p = model.portray(AgentId(0)).expect("dock portrayal");
        assert_eq!(p.shape, Shape::Rect);
        assert!(p.filled);
        assert_eq!(p.w, 0.8);
        assert_eq!(p.h, 0.8);
        assert_eq!(p.layer, 0);
        assert_eq!(p.color, "green");
        assert_eq!(
            p.text.as_deref(),
            Some(model.station(AgentId(0)).unwrap().waiting_time().to_string().as_str())
        );
        assert_eq!(p.text_color, Some("white"));
    }

    #[test]
    fn riders_are_not_drawn() {
        let model = downtown_model(5, 42);
        assert!(model.portray(AgentId(5)).is_none());
    }

    #[test]
    fn unknown_agents_are_not_drawn() {
        let model = downtown_model(5, 42);
        assert!(model.portray(AgentId(999)).is_none());
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use bikeshare_core::{AgentId, SimRng};

    use crate::RandomActivation;

    #[test]
    fn holds_registered_agents() {
        let sched = RandomActivation::new((0..4u32).map(AgentId));
        assert_eq!(sched.len(), 4);
        assert!(!sched.is_empty());
        assert_eq!(sched.order(), &[AgentId(0), AgentId(1), AgentId(2), AgentId(3)]);
    }

    #[test]
    fn shuffle_permutes_without_losing_anyone() {
        let mut sched = RandomActivation::new((0..50u32).map(AgentId));
        let mut rng = SimRng::new(3);
        for _ in 0..10 {
            sched.shuffle(&mut rng);
            let mut sorted = sched.order().to_vec();
            sorted.sort();
            assert_eq!(sorted, (0..50u32).map(AgentId).collect::<Vec<_>>());
        }
    }

    #[test]
    fn shuffle_sequence_tracks_the_seed() {
        let run = |seed: u64| {
            let mut sched = RandomActivation::new((0..20u32).map(AgentId));
            let mut rng = SimRng::new(seed);
            let mut orders = Vec::new();
            for _ in 0..5 {
                sched.shuffle(&mut rng);
                orders.push(sched.order().to_vec());
            }
            orders
        };
        assert_eq!(run(9), run(9));
        assert_ne!(run(9), run(10));
    }
}
