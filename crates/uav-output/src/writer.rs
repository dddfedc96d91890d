//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StepSnapshotRow, StepSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are returned to the caller; [`StepOutputObserver`](crate::StepOutputObserver)
/// stores the first one for [`take_error`](crate::StepOutputObserver::take_error).
pub trait OutputWriter {
    /// Write a batch of per-UAV snapshots.
    fn write_snapshots(&mut self, rows: &[StepSnapshotRow]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush everything written so far to the underlying files.
    ///
    /// Safe to call more than once; rows written after a `finish` are
    /// flushed by the next one.
    fn finish(&mut self) -> OutputResult<()>;
}
