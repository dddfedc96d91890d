//! World and simulation configuration.
//!
//! # JSON format
//!
//! ```json
//! {
//!   "mapConfig": {
//!     "gridX": 30, "gridZ": 30, "boxSize": 20, "randomBuildings": 50,
//!     "UAVs": [ { "name": "alpha", "position": { "x": 3, "y": 4 } } ]
//!   },
//!   "sim": { "stepLengthMs": 4000, "cruiseAltitude": 100 }
//! }
//! ```
//!
//! Every field except the UAV list has a default.  Extents are read as signed
//! integers so that a negative value is reported as an invalid configuration
//! rather than a parse failure.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Cell, CoreError, CoreResult, GridIndex};

// ── UavConfig ─────────────────────────────────────────────────────────────────

/// Static description of one UAV: its unique name and spawn cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UavConfig {
    pub name:     String,
    pub position: Cell,
}

impl UavConfig {
    pub fn new(name: impl Into<String>, position: Cell) -> Self {
        Self { name: name.into(), position }
    }
}

// ── MapConfig ─────────────────────────────────────────────────────────────────

/// Grid extents, cell size, scenery density and the fleet roster.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MapConfig {
    pub grid_x:           i64,
    pub grid_z:           i64,
    pub box_size:         i64,
    pub random_buildings: u32,
    #[serde(rename = "UAVs", alias = "uavs")]
    pub uavs:             Vec<UavConfig>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            grid_x:           30,
            grid_z:           30,
            box_size:         20,
            random_buildings: 50,
            uavs:             Vec::new(),
        }
    }
}

impl MapConfig {
    /// Validate extents and build the matching [`GridIndex`].
    pub fn grid(&self) -> CoreResult<GridIndex> {
        let extent = |v: i64, what: &str| -> CoreResult<u32> {
            u32::try_from(v)
                .ok()
                .filter(|&n| n > 0)
                .ok_or_else(|| CoreError::InvalidConfiguration(format!(
                    "{what} must be a positive integer, got {v}"
                )))
        };
        GridIndex::new(
            extent(self.grid_x, "gridX")?,
            extent(self.grid_z, "gridZ")?,
            extent(self.box_size, "boxSize")?,
        )
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Step clock and flight-envelope constants.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    /// Duration of one step in milliseconds.  Default: 4000.
    pub step_length_ms:     f64,
    /// Altitude a `TAKEOFF` command climbs to.
    pub cruise_altitude:    f32,
    /// Altitude a `LAND` command descends to.
    pub ground_altitude:    f32,
    /// Altitude UAVs are placed at before any command runs.
    pub spawn_altitude:     f32,
    /// Frame duration at which one interpolation call closes exactly
    /// `1 / movement_divider` of the remaining distance.  Default: 60 fps.
    pub reference_frame_ms: f64,
    /// Seed for scenery placement.
    pub seed:               u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            step_length_ms:     4_000.0,
            cruise_altitude:    100.0,
            ground_altitude:    5.0,
            spawn_altitude:     5.0,
            reference_frame_ms: 1_000.0 / 60.0,
            seed:               42,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> CoreResult<()> {
        if !(self.step_length_ms.is_finite() && self.step_length_ms > 0.0) {
            return Err(CoreError::InvalidConfiguration(format!(
                "stepLengthMs must be positive, got {}",
                self.step_length_ms
            )));
        }
        if !(self.reference_frame_ms.is_finite() && self.reference_frame_ms > 0.0) {
            return Err(CoreError::InvalidConfiguration(format!(
                "referenceFrameMs must be positive, got {}",
                self.reference_frame_ms
            )));
        }
        let altitudes = [self.cruise_altitude, self.ground_altitude, self.spawn_altitude];
        if altitudes.iter().any(|a| !a.is_finite()) {
            return Err(CoreError::InvalidConfiguration("altitudes must be finite".into()));
        }
        Ok(())
    }
}

// ── WorldConfig ───────────────────────────────────────────────────────────────

/// Everything needed to construct a simulation run.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WorldConfig {
    #[serde(rename = "mapConfig", alias = "map")]
    pub map: MapConfig,
    #[serde(default)]
    pub sim: SimConfig,
}

impl WorldConfig {
    /// Check every invariant a simulation run relies on.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] for non-positive extents, box size
    /// or step length, and for empty or duplicate UAV names.
    pub fn validate(&self) -> CoreResult<()> {
        self.map.grid()?;
        self.sim.validate()?;

        let mut seen = HashSet::with_capacity(self.map.uavs.len());
        for uav in &self.map.uavs {
            if uav.name.is_empty() {
                return Err(CoreError::InvalidConfiguration("UAV name must not be empty".into()));
            }
            if !seen.insert(uav.name.as_str()) {
                return Err(CoreError::InvalidConfiguration(format!(
                    "duplicate UAV name {:?}",
                    uav.name
                )));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON document from any `Read` source.
    pub fn from_json_reader<R: Read>(reader: R) -> CoreResult<Self> {
        let config: WorldConfig =
            serde_json::from_reader(reader).map_err(|e| CoreError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`from_json_reader`](Self::from_json_reader) for an in-memory string.
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Self::from_json_reader(json.as_bytes())
    }

    /// Like [`from_json_reader`](Self::from_json_reader) for a file on disk.
    pub fn from_json_path(path: &Path) -> CoreResult<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(file))
    }
}
