//! `StepOutputObserver<W>` — bridges `SchedulerObserver` to an `OutputWriter`.

use uav_agent::{AgentError, Fleet, TargetUpdate, Uav};
use uav_core::{SimConfig, Step};
use uav_sim::SchedulerObserver;

use crate::row::{StepSnapshotRow, StepSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// Per-step tallies, reset after each summary row.
#[derive(Default)]
struct StepTally {
    executed: u64,
    holds:    u64,
    faults:   u64,
}

/// A [`SchedulerObserver`] that writes one snapshot row per UAV and one
/// summary row for every processed step.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check with [`take_error`][Self::take_error] once
/// the run is over.
pub struct StepOutputObserver<W: OutputWriter> {
    writer:         W,
    step_length_ms: f64,
    tally:          StepTally,
    last_error:     Option<OutputError>,
}

impl<W: OutputWriter> StepOutputObserver<W> {
    /// Create an observer backed by `writer`, using `config` for the
    /// step → simulated time conversion.
    pub fn new(writer: W, config: &SimConfig) -> Self {
        Self {
            writer,
            step_length_ms: config.step_length_ms,
            tally:          StepTally::default(),
            last_error:     None,
        }
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  Called automatically whenever a run completes, so a
    /// resubmitted run is flushed too; call it yourself after
    /// [`Scheduler::stop`](uav_sim::Scheduler::stop).
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SchedulerObserver for StepOutputObserver<W> {
    fn on_target(&mut self, _step: Step, _uav: &Uav, update: &TargetUpdate) {
        if update.is_hold() {
            self.tally.holds += 1;
        } else {
            self.tally.executed += 1;
        }
    }

    fn on_command_fault(&mut self, _step: Step, _error: &AgentError) {
        self.tally.faults += 1;
    }

    fn on_step(&mut self, step: Step, fleet: &Fleet) {
        let tally = std::mem::take(&mut self.tally);
        let row = StepSummaryRow {
            step:        step.0,
            sim_time_ms: step.0 as f64 * self.step_length_ms,
            executed:    tally.executed,
            holds:       tally.holds,
            faults:      tally.faults,
        };
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);

        let rows: Vec<StepSnapshotRow> = fleet.iter().map(|uav| StepSnapshotRow::capture(step, uav)).collect();
        if !rows.is_empty() {
            let result = self.writer.write_snapshots(&rows);
            self.store_err(result);
        }
    }

    fn on_run_complete(&mut self, _final_step: Step) {
        self.finish();
    }
}
