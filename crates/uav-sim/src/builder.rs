//! Fluent builder for constructing a [`Scheduler`].

use uav_agent::{FleetBuilder, FlightLevels};
use uav_core::{UavConfig, WorldConfig};

use crate::{Scheduler, SimResult};

/// Fluent builder for [`Scheduler`].
///
/// # Optional inputs (have defaults)
///
/// | Method                 | Default                                        |
/// |------------------------|------------------------------------------------|
/// | `.uav(c)`              | Only the UAVs listed in the map configuration  |
/// | `.flight_levels(l)`    | `cruiseAltitude` / `groundAltitude` from config |
///
/// # Example
///
/// ```rust,ignore
/// let config = WorldConfig::from_json_path(path)?;
/// let mut sched = SchedulerBuilder::new(config).build()?;
/// sched.submit_commands(commands, &mut NoopObserver);
/// ```
pub struct SchedulerBuilder {
    config: WorldConfig,
    levels: Option<FlightLevels>,
}

impl SchedulerBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self { config, levels: None }
    }

    /// Add a UAV after those in the map configuration.
    pub fn uav(mut self, uav: UavConfig) -> Self {
        self.config.map.uavs.push(uav);
        self
    }

    /// Override the `TAKEOFF` / `LAND` altitudes.
    pub fn flight_levels(mut self, levels: FlightLevels) -> Self {
        self.levels = Some(levels);
        self
    }

    /// Validate the configuration, spawn the fleet, and return an idle
    /// scheduler.
    ///
    /// # Errors
    ///
    /// [`SimError::Core`](crate::SimError::Core) wrapping
    /// `CoreError::InvalidConfiguration` for bad grid extents, box size, step
    /// length or duplicate UAV names.
    pub fn build(self) -> SimResult<Scheduler> {
        self.config.validate()?;
        let grid = self.config.map.grid()?;
        let sim = &self.config.sim;

        let fleet = FleetBuilder::new(grid, sim).uavs(&self.config.map.uavs).build()?;
        let levels = self.levels.unwrap_or(FlightLevels {
            cruise: sim.cruise_altitude,
            ground: sim.ground_altitude,
        });

        Ok(Scheduler::new(grid, levels, fleet, sim.step_length_ms))
    }
}
