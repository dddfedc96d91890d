//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `step_snapshots.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSnapshotRow, StepSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 10] = [
    "step", "agent_id", "cell_x", "cell_z",
    "position_x", "position_y", "position_z",
    "target_x", "target_y", "target_z",
];

pub const SUMMARY_HEADER: [&str; 5] = ["step", "sim_time_ms", "executed", "holds", "faults"];

/// Writes per-step output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create (or truncate) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("step_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self { snapshots, summaries })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[StepSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            self.snapshots.write_record(&[
                row.step.to_string(),
                row.agent_id.to_string(),
                row.cell_x.to_string(),
                row.cell_z.to_string(),
                format!("{:.3}", row.position_x),
                format!("{:.3}", row.position_y),
                format!("{:.3}", row.position_z),
                format!("{:.3}", row.target_x),
                format!("{:.3}", row.target_y),
                format!("{:.3}", row.target_z),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.step.to_string(),
            row.sim_time_ms.to_string(),
            row.executed.to_string(),
            row.holds.to_string(),
            row.faults.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
