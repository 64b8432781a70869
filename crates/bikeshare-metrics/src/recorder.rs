//! In-memory metric collection.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;

use bikeshare_core::{AgentId, Tick};

use crate::row::{TickTotalRow, WaitingTimeRow};
use crate::writer::MetricsWriter;
use crate::MetricsResult;

/// One recorded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSample {
    pub tick:  Tick,
    pub value: u64,
}

/// Collects one named per-agent metric over the course of a run.
///
/// Sampling happens at the top of each tick, before any agent has been
/// activated, so a sample at tick `T` is the value *entering* `T`, not the
/// value after `T`'s activity.
pub struct MetricsRecorder {
    metric:  &'static str,
    tracked: Vec<AgentId>,
    series:  FxHashMap<AgentId, Vec<MetricSample>>,
}

impl MetricsRecorder {
    pub fn new(metric: &'static str) -> Self {
        Self {
            metric,
            tracked: Vec::new(),
            series: FxHashMap::default(),
        }
    }

    /// Name of the metric being collected.
    pub fn metric(&self) -> &'static str {
        self.metric
    }

    /// Register an agent for collection.  Registration order becomes export
    /// order; registering twice is a no-op.
    pub fn track(&mut self, agent: AgentId) {
        if !self.tracked.contains(&agent) {
            self.tracked.push(agent);
            self.series.insert(agent, Vec::new());
        }
    }

    /// Agents registered for collection, in registration order.
    pub fn tracked(&self) -> &[AgentId] {
        &self.tracked
    }

    /// Append one sample.  Samples for untracked agents are dropped.
    pub fn record(&mut self, tick: Tick, agent: AgentId, value: u64) {
        if let Some(series) = self.series.get_mut(&agent) {
            series.push(MetricSample { tick, value });
        }
    }

    /// The sample series for one agent, in recording order.
    pub fn series(&self, agent: AgentId) -> &[MetricSample] {
        self.series.get(&agent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of samples held, across all tracked agents.
    pub fn sample_count(&self) -> usize {
        self.series.values().map(Vec::len).sum()
    }

    /// Export every series plus per-tick fleet totals through `writer`, then
    /// finish it.
    pub fn export<W: MetricsWriter>(&self, writer: &mut W) -> MetricsResult<()> {
        for &agent in &self.tracked {
            let rows: Vec<WaitingTimeRow> = self
                .series(agent)
                .iter()
                .map(|s| WaitingTimeRow {
                    station_id:   agent.0,
                    tick:         s.tick.0,
                    waiting_time: s.value,
                })
                .collect();
            writer.write_samples(&rows)?;
        }

        // Totals keyed by tick.  BTreeMap so the rows come out tick-ordered
        // even though samples are stored per agent.
        let mut totals: BTreeMap<u64, u64> = BTreeMap::new();
        for &agent in &self.tracked {
            for s in self.series(agent) {
                *totals.entry(s.tick.0).or_insert(0) += s.value;
            }
        }
        for (tick, total) in totals {
            writer.write_tick_total(&TickTotalRow { tick, waiting_time_total: total })?;
        }

        writer.finish()
    }
}
