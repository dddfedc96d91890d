//! Grid geometry: integer cells ↔ continuous world coordinates.
//!
//! # Layout
//!
//! The grid is addressed like a matrix (`<0, 0>` is one corner) but is
//! centred on the world origin:
//!
//! ```text
//! world_x = (cell.x - grid_x / 2) * box_size + box_size / 2
//! world_z = (cell.z - grid_z / 2) * box_size + box_size / 2
//! ```
//!
//! All divisions are integer (floor) divisions, so cell centres land on whole
//! world units.  `y` (altitude) of a cell centre is always 0.

use crate::{CoreError, CoreResult, Vec3};

// ── Cell ──────────────────────────────────────────────────────────────────────

/// An integer grid coordinate.
///
/// Cells outside the declared extents are legal values: relative moves may
/// carry an agent off the nominal grid and the transform still applies.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Cell {
    pub x: i32,
    /// Second ground axis.  Configuration files call it `y`.
    #[serde(alias = "y")]
    pub z: i32,
}

impl Cell {
    #[inline]
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The cell `(dx, dz)` away from `self`.  Saturates instead of wrapping.
    #[inline]
    pub fn offset(self, dx: i32, dz: i32) -> Cell {
        Cell::new(self.x.saturating_add(dx), self.z.saturating_add(dz))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}, {}>", self.x, self.z)
    }
}

// ── GridIndex ─────────────────────────────────────────────────────────────────

/// Stateless transform between grid cells and world positions.
///
/// Extents and box size are validated once at construction and never change
/// afterwards.  Shared by the scheduler (agent targets) and the presentation
/// layer (scenery placement) so both agree on the coordinate system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct GridIndex {
    grid_x:   u32,
    grid_z:   u32,
    box_size: u32,
}

impl GridIndex {
    /// Build a grid of `grid_x × grid_z` cells, each `box_size` world units wide.
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidConfiguration`] if any argument is zero.
    pub fn new(grid_x: u32, grid_z: u32, box_size: u32) -> CoreResult<Self> {
        if grid_x == 0 || grid_z == 0 {
            return Err(CoreError::InvalidConfiguration(format!(
                "grid extents must be positive, got {grid_x} × {grid_z}"
            )));
        }
        if box_size == 0 {
            return Err(CoreError::InvalidConfiguration(
                "box size must be positive".into(),
            ));
        }
        Ok(Self { grid_x, grid_z, box_size })
    }

    #[inline]
    pub fn grid_x(&self) -> u32 {
        self.grid_x
    }

    #[inline]
    pub fn grid_z(&self) -> u32 {
        self.grid_z
    }

    #[inline]
    pub fn box_size(&self) -> u32 {
        self.box_size
    }

    /// World-space centre of `cell` (altitude 0).
    ///
    /// Total for every `Cell`, including ones outside the declared extents.
    pub fn cell_center(&self, cell: Cell) -> Vec3 {
        let size = self.box_size as i64;
        let half = size / 2;
        let x = (cell.x as i64 - (self.grid_x / 2) as i64) * size + half;
        let z = (cell.z as i64 - (self.grid_z / 2) as i64) * size + half;
        Vec3::new(x as f32, 0.0, z as f32)
    }

    /// `true` if `cell` lies inside the declared extents.
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.z >= 0
            && (cell.x as u32) < self.grid_x
            && (cell.z as u32) < self.grid_z
    }

    /// Side length of the square ground plane that covers the whole grid.
    #[inline]
    pub fn ground_extent(&self) -> f32 {
        (self.grid_x.max(self.grid_z) as u64 * self.box_size as u64) as f32
    }

    /// Iterator over every in-bounds cell, row-major by `z` then `x`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.grid_z as i32)
            .flat_map(move |z| (0..self.grid_x as i32).map(move |x| Cell::new(x, z)))
    }
}
