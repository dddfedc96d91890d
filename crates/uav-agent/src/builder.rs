//! Fluent builder that spawns a [`Fleet`] from static configuration.
//!
//! # Usage
//!
//! ```rust,ignore
//! let grid = config.map.grid()?;
//! let fleet = FleetBuilder::new(grid, &config.sim)
//!     .uavs(&config.map.uavs)
//!     .build()?;
//! ```

use uav_core::{AgentId, GridIndex, SimConfig, UavConfig};

use crate::{AgentResult, DecayMotion, Fleet, Uav};

/// Spawns every configured UAV at the centre of its cell, at spawn altitude.
pub struct FleetBuilder {
    grid:           GridIndex,
    motion:         DecayMotion,
    spawn_altitude: f32,
    roster:         Vec<UavConfig>,
}

impl FleetBuilder {
    pub fn new(grid: GridIndex, sim: &SimConfig) -> Self {
        Self {
            grid,
            motion: DecayMotion::new(sim.step_length_ms, grid.box_size(), sim.reference_frame_ms),
            spawn_altitude: sim.spawn_altitude,
            roster: Vec::new(),
        }
    }

    /// Add one UAV to the roster.
    pub fn uav(mut self, config: UavConfig) -> Self {
        self.roster.push(config);
        self
    }

    /// Add several UAVs, keeping their order.
    pub fn uavs(mut self, configs: &[UavConfig]) -> Self {
        self.roster.extend_from_slice(configs);
        self
    }

    /// Construct the fleet.  `AgentId`s follow roster order.
    ///
    /// # Errors
    ///
    /// [`AgentError::DuplicateName`](crate::AgentError::DuplicateName) if two
    /// roster entries share a name.
    pub fn build(self) -> AgentResult<Fleet> {
        let mut fleet = Fleet::new();
        for (i, config) in self.roster.into_iter().enumerate() {
            let position = self.grid.cell_center(config.position).with_y(self.spawn_altitude);
            let uav = Uav::new(AgentId(i as u32), config.name, config.position, position, self.motion);
            fleet.insert(uav)?;
        }
        Ok(fleet)
    }
}
