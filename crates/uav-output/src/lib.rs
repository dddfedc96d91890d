//! `uav-output` — per-step output writers for the uav_grid simulator.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `step_snapshots.csv`, `step_summaries.csv`     |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`StepOutputObserver`], which implements `uav_sim::SchedulerObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use uav_output::{CsvWriter, StepOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = StepOutputObserver::new(writer, &config.sim);
//! sched.run_until_idle(0.0, 1_000.0 / 60.0, 0, &mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::StepOutputObserver;
pub use row::{StepSnapshotRow, StepSummaryRow};
pub use writer::OutputWriter;
