//! Simulation time model.
//!
//! # Design
//!
//! Simulated time is a monotonically increasing `Step` counter.  Steps are
//! not driven by a loop of their own: the host calls in once per rendered
//! frame with a wall-clock timestamp (milliseconds), and `StepClock` derives
//! the step from elapsed time:
//!
//!   elapsed   = frame_ms - start_ms - paused_ms
//!   step_done = elapsed - current_step * step_length_ms >= step_length_ms
//!
//! The epoch (`start_ms`) is the first frame observed after a reset, not the
//! reset itself.  At most one step boundary is crossed per frame; a host that
//! stalls for several step lengths catches up one step per frame.

use std::fmt;

// ── Step ──────────────────────────────────────────────────────────────────────

/// An absolute simulation step index.  Step `n` executes the `n`-th command of
/// every agent's queue.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Step(pub u64);

impl Step {
    pub const ZERO: Step = Step(0);

    #[inline]
    pub fn next(self) -> Step {
        Step(self.0 + 1)
    }

    /// Position in a per-agent command queue.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

// ── StepClock ─────────────────────────────────────────────────────────────────

/// Maps per-frame wall-clock timestamps onto the discrete step counter and
/// remembers which step was last processed.
#[derive(Clone, Debug)]
pub struct StepClock {
    /// Fixed duration of one step, in milliseconds.
    step_length_ms: f64,
    /// Wall-clock time of the first frame after the last reset.
    start_ms: Option<f64>,
    /// Timestamp of the previous frame, for per-frame deltas.  Survives resets.
    last_frame_ms: Option<f64>,
    /// Wall-clock time spent paused since `start_ms`.
    paused_ms: f64,
    current: Step,
    /// `None` until step 0 has been processed.
    last_processed: Option<Step>,
}

impl StepClock {
    pub fn new(step_length_ms: f64) -> Self {
        Self {
            step_length_ms,
            start_ms: None,
            last_frame_ms: None,
            paused_ms: 0.0,
            current: Step::ZERO,
            last_processed: None,
        }
    }

    #[inline]
    pub fn step_length_ms(&self) -> f64 {
        self.step_length_ms
    }

    #[inline]
    pub fn current(&self) -> Step {
        self.current
    }

    #[inline]
    pub fn last_processed(&self) -> Option<Step> {
        self.last_processed
    }

    /// `true` once the first frame after a reset has fixed the epoch.
    #[inline]
    pub fn is_started(&self) -> bool {
        self.start_ms.is_some()
    }

    /// Rewind to step 0 and forget the epoch.  The previous-frame timestamp is
    /// kept so the next frame delta stays small.
    pub fn reset(&mut self) {
        self.start_ms = None;
        self.paused_ms = 0.0;
        self.current = Step::ZERO;
        self.last_processed = None;
    }

    /// Milliseconds since the previous frame (0 for the very first frame).
    ///
    /// Timestamps that go backwards yield 0 rather than a negative delta.
    pub fn frame_delta(&mut self, frame_ms: f64) -> f64 {
        let delta = match self.last_frame_ms {
            Some(prev) => (frame_ms - prev).max(0.0),
            None => 0.0,
        };
        self.last_frame_ms = Some(frame_ms);
        delta
    }

    /// Exclude `delta_ms` of wall-clock time from the step clock.
    pub fn pause_for(&mut self, delta_ms: f64) {
        if self.start_ms.is_some() {
            self.paused_ms += delta_ms;
        }
    }

    /// Elapsed simulated milliseconds at `frame_ms`, fixing the epoch on the
    /// first call after a reset.
    pub fn elapsed(&mut self, frame_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(frame_ms);
        (frame_ms - start - self.paused_ms).max(0.0)
    }

    /// Has the current step run for at least one full step length?
    #[inline]
    pub fn is_step_done(&self, elapsed_ms: f64) -> bool {
        elapsed_ms - self.current.0 as f64 * self.step_length_ms >= self.step_length_ms
    }

    /// Move to the next step.
    #[inline]
    pub fn advance_step(&mut self) -> Step {
        self.current = self.current.next();
        self.current
    }

    /// `true` if the current step has not yet had its targets computed.
    #[inline]
    pub fn needs_processing(&self) -> bool {
        self.last_processed != Some(self.current)
    }

    #[inline]
    pub fn mark_processed(&mut self) {
        self.last_processed = Some(self.current);
    }
}
