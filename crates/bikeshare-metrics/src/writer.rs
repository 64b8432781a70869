//! The `MetricsWriter` trait implemented by all backend writers.

use crate::{MetricsResult, TickTotalRow, WaitingTimeRow};

/// Trait implemented by metric export backends.
pub trait MetricsWriter {
    /// Write a batch of per-station samples.
    fn write_samples(&mut self, rows: &[WaitingTimeRow]) -> MetricsResult<()>;

    /// Write one fleet-wide total row.
    fn write_tick_total(&mut self, row: &TickTotalRow) -> MetricsResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent, safe to call more than once.
    fn finish(&mut self) -> MetricsResult<()>;
}
