//! Simulation observer trait for progress reporting and data collection.

use bikeshare_agents::Agent;
use bikeshare_core::{AgentId, Tick};

/// Callbacks invoked by [`Model::advance`][crate::Model::advance] at key
/// points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: Tick, activated: &[AgentId]) {
///         if tick.0 % self.interval == 0 {
///             println!("tick {tick}: activated {} agents", activated.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before metrics are sampled.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called at the end of each tick.
    ///
    /// `activated` is the permutation the scheduler drew for this tick, in
    /// activation order.
    fn on_tick_end(&mut self, _tick: Tick, _activated: &[AgentId]) {}

    /// Called after each tick with read-only access to the full agent state,
    /// so hosts can render or record without the model knowing about any
    /// specific output format.
    fn on_snapshot(&mut self, _tick: Tick, _agents: &[Agent]) {}

    /// Called once after the final tick of an `advance` call completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `advance`
/// but don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
