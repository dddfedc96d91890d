//! The `Scheduler` struct: command distribution, step clock and frame update.

use tracing::{debug, info, warn};
use uav_agent::{Fleet, FlightLevels};
use uav_command::Command;
use uav_core::{GridIndex, Step, StepClock};

use crate::{AgentView, SchedulerObserver, SimError, SimResult};

// ── SubmitReport ──────────────────────────────────────────────────────────────

/// Outcome of one [`Scheduler::submit_commands`] call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitReport {
    /// Commands appended to a UAV queue.
    pub accepted:      usize,
    /// Agent names of dropped commands, in input order (repeats kept).
    pub dropped:       Vec<String>,
    /// Longest queue across the fleet after distribution.
    pub longest_queue: usize,
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Owns the fleet and the step clock, and drives both from host frames.
///
/// The scheduler is the only writer of UAV state; hosts read it back through
/// [`views`](Self::views).  Create via [`SchedulerBuilder`][crate::SchedulerBuilder].
pub struct Scheduler {
    grid:          GridIndex,
    levels:        FlightLevels,
    fleet:         Fleet,
    clock:         StepClock,
    /// Longest per-UAV queue at the last submission.  The run ends when the
    /// step counter reaches it.
    longest_queue: usize,
    /// `true` while unexecuted steps remain.
    running:       bool,
    /// Host-controlled freeze of stepping and motion.
    paused:        bool,
}

impl Scheduler {
    pub(crate) fn new(grid: GridIndex, levels: FlightLevels, fleet: Fleet, step_length_ms: f64) -> Self {
        Self {
            grid,
            levels,
            fleet,
            clock: StepClock::new(step_length_ms),
            longest_queue: 0,
            running: false,
            paused: false,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn grid(&self) -> &GridIndex {
        &self.grid
    }

    #[inline]
    pub fn levels(&self) -> &FlightLevels {
        &self.levels
    }

    #[inline]
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// The step whose commands are (or were last) executing.
    #[inline]
    pub fn current_step(&self) -> Step {
        self.clock.current()
    }

    /// The most recently processed step, `None` before step 0 has run.
    #[inline]
    pub fn last_step(&self) -> Option<Step> {
        self.clock.last_processed()
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn longest_queue_length(&self) -> usize {
        self.longest_queue
    }

    #[inline]
    pub fn step_length_ms(&self) -> f64 {
        self.clock.step_length_ms()
    }

    /// Read-only snapshots of every UAV, in `AgentId` order.
    pub fn views(&self) -> impl Iterator<Item = AgentView<'_>> + '_ {
        self.fleet.iter().map(AgentView::from)
    }

    // ── Host controls ─────────────────────────────────────────────────────

    /// Freeze or resume stepping and motion.  Time spent paused does not
    /// count toward the current step.
    pub fn set_paused(&mut self, paused: bool) {
        if self.paused != paused {
            debug!(paused, "scheduler pause toggled");
        }
        self.paused = paused;
    }

    /// End the run immediately.  UAVs keep gliding toward their last targets.
    pub fn stop(&mut self) {
        if self.running {
            info!(step = %self.clock.current(), "run stopped by host");
        }
        self.running = false;
    }

    // ── Command distribution ──────────────────────────────────────────────

    /// Append each command to the queue of the UAV it names, then restart the
    /// step clock from step 0.
    ///
    /// A command's execution step is its index in its own UAV's queue, so the
    /// interleaving of different UAVs in `commands` does not matter.  Commands
    /// naming unknown UAVs are dropped and reported.  Submitting again during
    /// a run extends the queues and restarts from step 0; steps already
    /// executed are executed again.
    pub fn submit_commands<I, O>(&mut self, commands: I, observer: &mut O) -> SubmitReport
    where
        I: IntoIterator<Item = Command>,
        O: SchedulerObserver,
    {
        let mut report = SubmitReport::default();

        for command in commands {
            let Some(uav) = self.fleet.lookup(&command.agent_id).and_then(|id| self.fleet.get_mut(id)) else {
                warn!(agent = %command.agent_id, kind = %command.kind, "command for unknown UAV dropped");
                observer.on_unknown_agent(&command);
                report.dropped.push(command.agent_id);
                continue;
            };
            uav.enqueue(command);
            report.accepted += 1;
        }

        self.clock.reset();
        self.longest_queue = self.fleet.longest_queue();
        self.running = self.longest_queue > 0;
        report.longest_queue = self.longest_queue;

        info!(
            accepted      = report.accepted,
            dropped       = report.dropped.len(),
            longest_queue = self.longest_queue,
            "commands submitted"
        );
        observer.on_submit(&report);
        report
    }

    // ── Frame update ──────────────────────────────────────────────────────

    /// Advance the simulation to wall-clock time `frame_ms`.
    ///
    /// Call once per rendered frame with non-decreasing timestamps.  Crosses
    /// at most one step boundary per call.
    pub fn advance<O: SchedulerObserver>(&mut self, frame_ms: f64, observer: &mut O) {
        let dt = self.clock.frame_delta(frame_ms);

        if self.paused {
            self.clock.pause_for(dt);
            return;
        }

        if self.running {
            let elapsed = self.clock.elapsed(frame_ms);
            if self.clock.is_step_done(elapsed) {
                let step = self.clock.advance_step();
                debug!(%step, elapsed, "step boundary");
                if step.index() >= self.longest_queue {
                    self.running = false;
                    info!(final_step = %step, "run complete");
                    observer.on_run_complete(step);
                }
            }
            if self.running && self.clock.needs_processing() {
                self.process_step(observer);
            }
        }

        for uav in self.fleet.iter_mut() {
            uav.interpolate(dt);
        }
        observer.on_frame(frame_ms, self.clock.current());
    }

    /// Recompute every UAV's target for the current step.
    ///
    /// A UAV whose command cannot be executed keeps its previous target; the
    /// rest of the fleet is unaffected.
    fn process_step<O: SchedulerObserver>(&mut self, observer: &mut O) {
        let step = self.clock.current();
        let grid = &self.grid;
        let levels = &self.levels;

        for uav in self.fleet.iter_mut() {
            match uav.compute_target(step, grid, levels) {
                Ok(update) => {
                    uav.set_target(update.target);
                    observer.on_target(step, uav, &update);
                }
                Err(e) => {
                    warn!(agent = %uav.name(), %step, error = %e, "command fault, holding target");
                    observer.on_command_fault(step, &e);
                }
            }
        }

        self.clock.mark_processed();
        observer.on_step(step, &self.fleet);
    }

    // ── Headless host loops ───────────────────────────────────────────────

    /// Call [`advance`](Self::advance) for `n` frames spaced `frame_ms` apart,
    /// starting at `start_ms`.  Returns the timestamp of the next frame.
    pub fn run_frames<O: SchedulerObserver>(
        &mut self,
        start_ms: f64,
        frame_ms: f64,
        n:        u64,
        observer: &mut O,
    ) -> f64 {
        for i in 0..n {
            self.advance(start_ms + i as f64 * frame_ms, observer);
        }
        start_ms + n as f64 * frame_ms
    }

    /// Advance frames until the run ends, then `settle_frames` more so UAVs
    /// can close in on their final targets.  Returns the timestamp of the next
    /// frame.
    ///
    /// # Errors
    ///
    /// [`SimError::Config`] if `frame_ms` is not positive or the scheduler is
    /// paused, since the run could then never end.
    pub fn run_until_idle<O: SchedulerObserver>(
        &mut self,
        start_ms:      f64,
        frame_ms:      f64,
        settle_frames: u64,
        observer:      &mut O,
    ) -> SimResult<f64> {
        if !(frame_ms > 0.0) {
            return Err(SimError::Config(format!("frame interval must be positive, got {frame_ms}")));
        }
        if self.paused && self.running {
            return Err(SimError::Config("cannot run a paused scheduler to completion".into()));
        }

        let mut frame: u64 = 0;
        while self.running {
            self.advance(start_ms + frame as f64 * frame_ms, observer);
            frame += 1;
        }
        let next = start_ms + frame as f64 * frame_ms;
        Ok(self.run_frames(next, frame_ms, settle_frames, observer))
    }
}
