//! `bikeshare-metrics` — metric collection and export for the bikeshare model.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                |
//! |-------------|---------------------------------------------------------|
//! | [`recorder`]| `MetricsRecorder`, `MetricSample` — in-memory series    |
//! | [`writer`]  | `MetricsWriter` backend trait                           |
//! | [`csv`]     | CSV backend (`waiting_times.csv`, `tick_totals.csv`)    |
//! | [`row`]     | Plain row types shared by backends                      |
//! | [`error`]   | `MetricsError`, `MetricsResult<T>`                      |
//!
//! # Usage
//!
//! ```rust,ignore
//! use bikeshare_metrics::{CsvMetricsWriter, MetricsRecorder};
//!
//! let mut recorder = MetricsRecorder::new("waiting_time");
//! recorder.track(station_id);
//! // each tick, before activation:
//! recorder.record(tick, station_id, value);
//! // after the run:
//! let mut writer = CsvMetricsWriter::new(Path::new("./output"))?;
//! recorder.export(&mut writer)?;
//! ```

pub mod csv;
pub mod error;
pub mod recorder;
pub mod row;
pub mod writer;


pub use csv::CsvMetricsWriter;
pub use error::{MetricsError, MetricsResult};
pub use recorder::{MetricSample, MetricsRecorder};
pub use row::{TickTotalRow, WaitingTimeRow};
pub use writer::MetricsWriter;
