//! Scheduler observer trait for progress reporting and data collection.

use uav_agent::{AgentError, Fleet, TargetUpdate, Uav};
use uav_command::Command;
use uav_core::Step;

use crate::SubmitReport;

/// Callbacks invoked by [`Scheduler`][crate::Scheduler] while it distributes
/// commands and advances frames.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example — step printer
///
/// ```rust,ignore
/// struct StepPrinter;
///
/// impl SchedulerObserver for StepPrinter {
///     fn on_step(&mut self, step: Step, fleet: &Fleet) {
///         for uav in fleet.iter() {
///             println!("{step} {}: {}", uav.name(), uav.target());
///         }
///     }
/// }
/// ```
pub trait SchedulerObserver {
    /// Called once per `submit_commands`, after distribution.
    fn on_submit(&mut self, _report: &SubmitReport) {}

    /// Called for each command naming a UAV that does not exist.  The command
    /// is dropped.
    fn on_unknown_agent(&mut self, _command: &Command) {}

    /// Called after `uav`'s target has been assigned for `step`.  Fires at
    /// most once per UAV per step.
    fn on_target(&mut self, _step: Step, _uav: &Uav, _update: &TargetUpdate) {}

    /// Called when a UAV's command for `step` could not be executed.  The UAV
    /// keeps its previous target.
    fn on_command_fault(&mut self, _step: Step, _error: &AgentError) {}

    /// Called once every UAV's target has been recomputed for `step`.
    fn on_step(&mut self, _step: Step, _fleet: &Fleet) {}

    /// Called when the step counter reaches the longest queue and the run ends.
    fn on_run_complete(&mut self, _final_step: Step) {}

    /// Called at the end of every unpaused `advance`, after interpolation.
    fn on_frame(&mut self, _frame_ms: f64, _step: Step) {}
}

/// A [`SchedulerObserver`] that does nothing.
pub struct NoopObserver;

impl SchedulerObserver for NoopObserver {}
