//! Frame-rate-independent exponential approach.
//!
//! # Model
//!
//! Per reference frame the UAV closes `1 / divider` of the remaining distance,
//! with `divider = step_length / box_size`.  For an arbitrary frame delta
//! `dt` the same decay is applied continuously:
//!
//! ```text
//! remaining(dt) = remaining * (1 - 1/divider) ^ (dt / reference_frame_ms)
//! fraction(dt)  = 1 - (1 - 1/divider) ^ (dt / reference_frame_ms)
//! ```
//!
//! Two 8 ms frames therefore move a UAV exactly as far as one 16 ms frame.
//! The approach is asymptotic; the target is never overshot.

/// Decay parameters shared by every UAV in a run.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DecayMotion {
    divider:            f64,
    reference_frame_ms: f64,
}

impl DecayMotion {
    /// `divider = step_length_ms / box_size`.
    pub fn new(step_length_ms: f64, box_size: u32, reference_frame_ms: f64) -> Self {
        Self {
            divider: step_length_ms / box_size.max(1) as f64,
            reference_frame_ms,
        }
    }

    /// Per-reference-frame divisor of the remaining distance.
    #[inline]
    pub fn divider(&self) -> f64 {
        self.divider
    }

    #[inline]
    pub fn reference_frame_ms(&self) -> f64 {
        self.reference_frame_ms
    }

    /// Fraction of the remaining distance to cover in a frame of `dt_ms`.
    ///
    /// Always in `[0, 1]`.  A divider of 1 or less snaps straight to the target.
    pub fn fraction(&self, dt_ms: f64) -> f32 {
        if !(dt_ms > 0.0) {
            return 0.0;
        }
        if self.divider <= 1.0 || self.reference_frame_ms <= 0.0 {
            return 1.0;
        }
        let keep = (1.0 - 1.0 / self.divider).powf(dt_ms / self.reference_frame_ms);
        (1.0 - keep).clamp(0.0, 1.0) as f32
    }
}
