//! `uav-core` — foundational types for the `uav_grid` simulator.
//!
//! This crate is a dependency of every other `uav-*` crate.  It has no
//! `uav-*` dependencies of its own.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `BuildingId`                               |
//! | [`geo`]         | `Vec3` world-space coordinate                         |
//! | [`grid`]        | `Cell`, `GridIndex` (cell ↔ world transform)          |
//! | [`time`]        | `Step`, `StepClock` (wall-clock → step counter)       |
//! | [`config`]      | `MapConfig`, `UavConfig`, `SimConfig`, `WorldConfig`  |
//! | [`rng`]         | `SimRng` (seeded, deterministic)                      |
//! | [`scenery`]     | `Building`, `scatter_buildings`                       |
//! | [`error`]       | `CoreError`, `CoreResult`                             |

pub mod config;
pub mod error;
pub mod geo;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod scenery;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MapConfig, SimConfig, UavConfig, WorldConfig};
pub use error::{CoreError, CoreResult};
pub use geo::Vec3;
pub use grid::{Cell, GridIndex};
pub use ids::{AgentId, BuildingId};
pub use rng::SimRng;
pub use scenery::{Building, scatter_buildings};
pub use time::{Step, StepClock};
