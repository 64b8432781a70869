//! CSV metrics backend.
//!
//! Creates two files in the configured output directory:
//! - `waiting_times.csv`
//! - `tick_totals.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::row::{TickTotalRow, WaitingTimeRow};
use crate::writer::MetricsWriter;
use crate::MetricsResult;

/// Writes collected metrics to two CSV files.
pub struct CsvMetricsWriter {
    samples:  Writer<File>,
    totals:   Writer<File>,
    finished: bool,
}

impl CsvMetricsWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> MetricsResult<Self> {
        let mut samples = Writer::from_path(dir.join("waiting_times.csv"))?;
        samples.write_record(["station_id", "tick", "waiting_time"])?;

        let mut totals = Writer::from_path(dir.join("tick_totals.csv"))?;
        totals.write_record(["tick", "waiting_time_total"])?;

        Ok(Self {
            samples,
            totals,
            finished: false,
        })
    }
}

impl MetricsWriter for CsvMetricsWriter {
    fn write_samples(&mut self, rows: &[WaitingTimeRow]) -> MetricsResult<()> {
        for row in rows {
            self.samples.write_record(&[
                row.station_id.to_string(),
                row.tick.to_string(),
                row.waiting_time.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_total(&mut self, row: &TickTotalRow) -> MetricsResult<()> {
        self.totals.write_record(&[
            row.tick.to_string(),
            row.waiting_time_total.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> MetricsResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.samples.flush()?;
        self.totals.flush()?;
        Ok(())
    }
}
