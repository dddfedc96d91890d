//! Per-UAV simulation state and its step state machine.

use tracing::{debug, warn};

use uav_command::{Command, CommandKind, CommandQueue};
use uav_core::{AgentId, Cell, GridIndex, Step, Vec3};

use crate::{AgentError, AgentResult, DecayMotion};

/// Horizontal movement below which heading is left unchanged.
const HEADING_EPSILON: f32 = 1e-4;

// ── FlightLevels ──────────────────────────────────────────────────────────────

/// Altitudes targeted by `TAKEOFF` and `LAND`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FlightLevels {
    pub cruise: f32,
    pub ground: f32,
}

impl Default for FlightLevels {
    fn default() -> Self {
        Self { cruise: 100.0, ground: 5.0 }
    }
}

// ── TargetUpdate ──────────────────────────────────────────────────────────────

/// Why a step produced the target it did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TargetCause {
    /// A command from the queue was executed.
    Executed(CommandKind),
    /// The queue has no command for this step; the previous target is kept.
    Exhausted,
    /// The command kind is not understood; the previous target is kept.
    Unrecognized,
}

/// Result of one [`Uav::compute_target`] call.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TargetUpdate {
    pub target: Vec3,
    pub cause:  TargetCause,
}

impl TargetUpdate {
    /// `true` if the update leaves the UAV heading where it already was.
    #[inline]
    pub fn is_hold(&self) -> bool {
        !matches!(self.cause, TargetCause::Executed(_))
    }
}

// ── Uav ───────────────────────────────────────────────────────────────────────

/// One simulated UAV.
///
/// `cell` is the *last commanded* cell: it moves only when a `MOVE` executes,
/// so successive relative moves accumulate.  `target` changes only at step
/// boundaries; `position` and `heading` change every frame.
#[derive(Clone, Debug)]
pub struct Uav {
    id:       AgentId,
    name:     String,
    cell:     Cell,
    position: Vec3,
    target:   Vec3,
    /// Yaw in radians, `atan2(dx, dz)` of the last horizontal movement.
    heading:  f32,
    queue:    CommandQueue,
    motion:   DecayMotion,
}

impl Uav {
    /// A UAV resting at `position` with an empty queue.  Its initial target is
    /// its own position.
    pub fn new(id: AgentId, name: impl Into<String>, cell: Cell, position: Vec3, motion: DecayMotion) -> Self {
        Self {
            id,
            name: name.into(),
            cell,
            position,
            target: position,
            heading: 0.0,
            queue: CommandQueue::new(),
            motion,
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn id(&self) -> AgentId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    #[inline]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    #[inline]
    pub fn heading(&self) -> f32 {
        self.heading
    }

    #[inline]
    pub fn queue(&self) -> &CommandQueue {
        &self.queue
    }

    #[inline]
    pub fn motion(&self) -> &DecayMotion {
        &self.motion
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Append a command to the end of the queue.
    pub fn enqueue(&mut self, command: Command) {
        self.queue.push(command);
    }

    pub fn set_target(&mut self, target: Vec3) {
        self.target = target;
    }

    /// Derive the target for `step` from the command at that queue index.
    ///
    /// | Command        | Target                                               |
    /// |----------------|------------------------------------------------------|
    /// | `TAKEOFF`      | current ground position at `levels.cruise`           |
    /// | `LAND`         | current ground position at `levels.ground`           |
    /// | `MOVE(dx, dz)` | ground-plane centre of `cell + (dx, dz)`             |
    /// | none / unknown | previous target (hold)                               |
    ///
    /// A `MOVE` also advances the stored `cell`.  The caller assigns the
    /// returned target; this method does not.
    ///
    /// # Errors
    ///
    /// [`AgentError::MissingCommandData`] for a `MOVE` without a direction.
    /// `cell` is left untouched in that case.
    pub fn compute_target(
        &mut self,
        step:   Step,
        grid:   &GridIndex,
        levels: &FlightLevels,
    ) -> AgentResult<TargetUpdate> {
        let Some(command) = self.queue.get(step.index()) else {
            return Ok(TargetUpdate { target: self.target, cause: TargetCause::Exhausted });
        };

        let target = match command.kind {
            CommandKind::Takeoff => self.position.with_y(levels.cruise),
            CommandKind::Land => self.position.with_y(levels.ground),
            CommandKind::Move => {
                let direction = command.move_direction().map_err(|_| AgentError::MissingCommandData {
                    agent: self.id,
                    name:  self.name.clone(),
                    step,
                })?;
                self.cell = self.cell.offset(direction.dx, direction.dz);
                grid.cell_center(self.cell)
            }
            CommandKind::Unrecognized => {
                warn!(agent = %self.name, %step, "unrecognised command kind, holding position");
                return Ok(TargetUpdate { target: self.target, cause: TargetCause::Unrecognized });
            }
        };

        debug!(agent = %self.name, %step, kind = %command.kind, cell = %self.cell, %target, "target computed");
        Ok(TargetUpdate { target, cause: TargetCause::Executed(command.kind) })
    }

    /// Move toward the target for a frame lasting `dt_ms` and turn to face
    /// the direction of travel.
    pub fn interpolate(&mut self, dt_ms: f64) {
        let fraction = self.motion.fraction(dt_ms);
        if fraction <= 0.0 {
            return;
        }
        let next = self.position.lerp(self.target, fraction);

        let dx = next.x - self.position.x;
        let dz = next.z - self.position.z;
        if dx.abs() > HEADING_EPSILON || dz.abs() > HEADING_EPSILON {
            self.heading = dx.atan2(dz);
        }

        self.position = next;
    }
}
