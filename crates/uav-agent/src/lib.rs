//! `uav-agent` — per-UAV simulation state and the fleet that owns it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`motion`]  | `DecayMotion` — elapsed-time-scaled exponential approach          |
//! | [`state`]   | `Uav`, `FlightLevels`, `TargetUpdate`, `TargetCause`              |
//! | [`store`]   | `Fleet` — dense `Vec<Uav>` plus a name → `AgentId` index          |
//! | [`builder`] | `FleetBuilder` — spawns UAVs from static configuration            |
//! | [`error`]   | `AgentError`, `AgentResult<T>`                                    |
//!
//! # Movement model
//!
//! Each UAV has a `target` that only changes at step boundaries and a
//! `position` that changes every frame:
//!
//! 1. `Uav::compute_target(step, ..)` reads the command at index `step` of
//!    the UAV's queue and derives the new target (or holds the old one).
//! 2. `Uav::interpolate(dt_ms)` closes a fixed *fraction* of the remaining
//!    distance, scaled by the real frame delta so speed does not depend on
//!    the host's frame rate.
//!
//! Nothing here knows about rendering; hosts read positions through the
//! scheduler's read-only views.

pub mod builder;
pub mod error;
pub mod motion;
pub mod state;
pub mod store;


pub use builder::FleetBuilder;
pub use error::{AgentError, AgentResult};
pub use motion::DecayMotion;
pub use state::{FlightLevels, TargetCause, TargetUpdate, Uav};
pub use store::Fleet;
