//! Static scenery placement.
//!
//! Buildings are pure presentation, but they are placed through the same
//! [`GridIndex::cell_center`] transform the agents use, so a UAV commanded
//! into a building's cell visibly flies to that building.

use crate::{BuildingId, Cell, GridIndex, SimRng, Vec3};

/// Smallest building footprint, in world units.
const MIN_FOOTPRINT: f32 = 10.0;
/// Building heights are drawn from `[MIN_HEIGHT, MIN_HEIGHT + HEIGHT_SPREAD)`.
const MIN_HEIGHT: f32 = 10.0;
const HEIGHT_SPREAD: f32 = 50.0;

/// One box-shaped obstacle standing on the ground plane.
#[derive(Clone, Debug, PartialEq)]
pub struct Building {
    pub id:        BuildingId,
    pub cell:      Cell,
    /// Centre of the building's base (altitude 0).
    pub base:      Vec3,
    /// Edge length of the square footprint.
    pub footprint: f32,
    pub height:    f32,
}

/// Place `count` buildings at random in-bounds cells.
///
/// Several buildings may share a cell.  The footprint never exceeds the cell
/// size; cells narrower than the minimum footprint get a full-cell building.
pub fn scatter_buildings(grid: &GridIndex, count: u32, rng: &mut SimRng) -> Vec<Building> {
    let box_size = grid.box_size() as f32;

    (0..count)
        .map(|i| {
            let cell = Cell::new(
                rng.gen_range(0..grid.grid_x()) as i32,
                rng.gen_range(0..grid.grid_z()) as i32,
            );
            let footprint = if box_size > MIN_FOOTPRINT {
                rng.gen_range(MIN_FOOTPRINT..box_size)
            } else {
                box_size
            };
            let height = MIN_HEIGHT + rng.gen_range(0.0..HEIGHT_SPREAD);

            Building {
                id: BuildingId(i),
                cell,
                base: grid.cell_center(cell),
                footprint,
                height,
            }
        })
        .collect()
}
