//! Plain data row types written by output backends.

use uav_agent::Uav;
use uav_core::Step;

/// One UAV's state right after its target was computed for a step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSnapshotRow {
    pub step:       u64,
    pub agent_id:   u32,
    /// Last commanded cell.
    pub cell_x:     i32,
    pub cell_z:     i32,
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
    pub target_x:   f32,
    pub target_y:   f32,
    pub target_z:   f32,
}

impl StepSnapshotRow {
    pub fn capture(step: Step, uav: &Uav) -> Self {
        let (cell, position, target) = (uav.cell(), uav.position(), uav.target());
        Self {
            step:       step.0,
            agent_id:   uav.id().0,
            cell_x:     cell.x,
            cell_z:     cell.z,
            position_x: position.x,
            position_y: position.y,
            position_z: position.z,
            target_x:   target.x,
            target_y:   target.y,
            target_z:   target.z,
        }
    }
}

/// Outcome counts for one processed step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSummaryRow {
    pub step:        u64,
    /// Simulated time at which the step began.
    pub sim_time_ms: f64,
    /// UAVs that executed a queued command.
    pub executed:    u64,
    /// UAVs that held their target (queue exhausted or unknown command).
    pub holds:       u64,
    /// UAVs whose command could not be executed.
    pub faults:      u64,
}
