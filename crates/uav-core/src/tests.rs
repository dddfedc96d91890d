//! Unit tests for uav-core primitives.

#[cfg(test)]
mod ids {
    use crate::{AgentId, BuildingId};

    #[test]
    fn index_roundtrip() {
        let id = AgentId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(AgentId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn default_is_invalid() {
        assert_eq!(AgentId::default(), AgentId::INVALID);
        assert_eq!(BuildingId::INVALID.0, u32::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(AgentId(7).to_string(), "AgentId(7)");
    }
}

#[cfg(test)]
mod geo {
    use crate::Vec3;

    #[test]
    fn arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 6.0, 3.0);
        assert_eq!(b - a, Vec3::new(3.0, 4.0, 0.0));
        assert_eq!((b - a).length(), 5.0);
        assert_eq!(a + Vec3::ZERO, a);
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, -10.0, 4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Vec3::new(5.0, -5.0, 2.0));
    }

    #[test]
    fn ground_distance_ignores_altitude() {
        let a = Vec3::new(0.0, 5.0, 0.0);
        let b = Vec3::new(3.0, 100.0, 4.0);
        assert_eq!(a.ground_distance(b), 5.0);
    }
}

#[cfg(test)]
mod grid {
    use proptest::prelude::*;

    use crate::{Cell, CoreError, GridIndex, Vec3};

    fn grid_30() -> GridIndex {
        GridIndex::new(30, 30, 20).unwrap()
    }

    #[test]
    fn zero_extent_rejected() {
        assert!(matches!(GridIndex::new(0, 30, 20), Err(CoreError::InvalidConfiguration(_))));
        assert!(matches!(GridIndex::new(30, 0, 20), Err(CoreError::InvalidConfiguration(_))));
        assert!(matches!(GridIndex::new(30, 30, 0), Err(CoreError::InvalidConfiguration(_))));
    }

    #[test]
    fn middle_cell_sits_near_origin() {
        // (15 - 15) * 20 + 10 = 10 on both axes.
        assert_eq!(grid_30().cell_center(Cell::new(15, 15)), Vec3::new(10.0, 0.0, 10.0));
    }

    #[test]
    fn corner_cell() {
        // (0 - 15) * 20 + 10 = -290
        assert_eq!(grid_30().cell_center(Cell::new(0, 0)), Vec3::new(-290.0, 0.0, -290.0));
    }

    #[test]
    fn z_axis_uses_its_own_extent() {
        let grid = GridIndex::new(10, 4, 10).unwrap();
        // x: (0 - 5) * 10 + 5 = -45 ; z: (0 - 2) * 10 + 5 = -15
        assert_eq!(grid.cell_center(Cell::new(0, 0)), Vec3::new(-45.0, 0.0, -15.0));
    }

    #[test]
    fn odd_box_size_floors_half_cell() {
        let grid = GridIndex::new(2, 2, 5).unwrap();
        // (1 - 1) * 5 + 2 = 2
        assert_eq!(grid.cell_center(Cell::new(1, 1)), Vec3::new(2.0, 0.0, 2.0));
    }

    #[test]
    fn out_of_range_cells_are_total() {
        let grid = grid_30();
        assert_eq!(grid.cell_center(Cell::new(-1, 40)), Vec3::new(-310.0, 0.0, 510.0));
        assert!(!grid.contains(Cell::new(-1, 40)));
        assert!(grid.contains(Cell::new(29, 0)));
        assert!(!grid.contains(Cell::new(30, 0)));
    }

    #[test]
    fn cells_covers_extents() {
        let grid = GridIndex::new(3, 2, 10).unwrap();
        let cells: Vec<Cell> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert!(cells.iter().all(|&c| grid.contains(c)));
    }

    #[test]
    fn ground_extent_uses_larger_axis() {
        let grid = GridIndex::new(10, 25, 20).unwrap();
        assert_eq!(grid.ground_extent(), 500.0);
    }

    proptest! {
        #[test]
        fn cell_center_is_deterministic(x in -1_000i32..1_000, z in -1_000i32..1_000) {
            let grid = grid_30();
            prop_assert_eq!(grid.cell_center(Cell::new(x, z)), grid.cell_center(Cell::new(x, z)));
        }

        #[test]
        fn distinct_cells_are_a_box_apart(
            ax in 0i32..30, az in 0i32..30, bx in 0i32..30, bz in 0i32..30,
        ) {
            prop_assume!((ax, az) != (bx, bz));
            let grid = grid_30();
            let a = grid.cell_center(Cell::new(ax, az));
            let b = grid.cell_center(Cell::new(bx, bz));
            prop_assert!(a.distance(b) >= grid.box_size() as f32);
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{Step, StepClock};

    #[test]
    fn step_display_and_next() {
        assert_eq!(Step(3).to_string(), "S3");
        assert_eq!(Step(3).next(), Step(4));
        assert_eq!(Step(3).index(), 3);
    }

    #[test]
    fn epoch_is_first_observed_frame() {
        let mut clock = StepClock::new(4_000.0);
        assert!(!clock.is_started());
        assert_eq!(clock.elapsed(1_000.0), 0.0);
        assert!(clock.is_started());
        assert_eq!(clock.elapsed(3_500.0), 2_500.0);
    }

    #[test]
    fn step_done_at_exact_boundary() {
        let mut clock = StepClock::new(4_000.0);
        let e = clock.elapsed(0.0);
        assert!(!clock.is_step_done(e));
        assert!(!clock.is_step_done(clock.clone().elapsed(3_999.0)));
        assert!(clock.is_step_done(clock.clone().elapsed(4_000.0)));
        clock.advance_step();
        assert!(!clock.is_step_done(7_999.0));
        assert!(clock.is_step_done(8_000.0));
    }

    #[test]
    fn processing_marker() {
        let mut clock = StepClock::new(100.0);
        assert!(clock.needs_processing());
        clock.mark_processed();
        assert!(!clock.needs_processing());
        clock.advance_step();
        assert!(clock.needs_processing());
        assert_eq!(clock.last_processed(), Some(Step(0)));
    }

    #[test]
    fn reset_forgets_epoch_but_keeps_frame_history() {
        let mut clock = StepClock::new(100.0);
        clock.frame_delta(10.0);
        clock.elapsed(10.0);
        clock.advance_step();
        clock.mark_processed();

        clock.reset();
        assert_eq!(clock.current(), Step::ZERO);
        assert_eq!(clock.last_processed(), None);
        assert!(!clock.is_started());
        assert_eq!(clock.frame_delta(25.0), 15.0);
    }

    #[test]
    fn frame_delta_never_negative() {
        let mut clock = StepClock::new(100.0);
        assert_eq!(clock.frame_delta(50.0), 0.0);
        assert_eq!(clock.frame_delta(40.0), 0.0);
        assert_eq!(clock.frame_delta(60.0), 20.0);
    }

    #[test]
    fn paused_time_is_excluded() {
        let mut clock = StepClock::new(100.0);
        clock.elapsed(0.0);
        clock.pause_for(30.0);
        assert_eq!(clock.elapsed(100.0), 70.0);
    }

    #[test]
    fn pause_before_epoch_is_ignored() {
        let mut clock = StepClock::new(100.0);
        clock.pause_for(30.0);
        assert_eq!(clock.elapsed(0.0), 0.0);
        assert_eq!(clock.elapsed(100.0), 100.0);
    }
}

#[cfg(test)]
mod config {
    use std::io::Write;

    use crate::{Cell, CoreError, WorldConfig};

    const WORLD_JSON: &str = r#"{
        "mapConfig": {
            "gridX": 10, "gridZ": 8, "boxSize": 20, "randomBuildings": 3,
            "UAVs": [
                { "name": "alpha", "position": { "x": 1, "y": 2 } },
                { "name": "bravo", "position": { "x": 5, "y": 5 } }
            ]
        },
        "sim": { "stepLengthMs": 2000 }
    }"#;

    #[test]
    fn parses_legacy_field_names() {
        let config = WorldConfig::from_json_str(WORLD_JSON).unwrap();
        assert_eq!(config.map.grid_x, 10);
        assert_eq!(config.map.grid_z, 8);
        assert_eq!(config.map.uavs.len(), 2);
        assert_eq!(config.map.uavs[0].position, Cell::new(1, 2));
        assert_eq!(config.sim.step_length_ms, 2_000.0);
        // Unspecified fields keep their defaults.
        assert_eq!(config.sim.cruise_altitude, 100.0);
        assert_eq!(config.sim.ground_altitude, 5.0);
    }

    #[test]
    fn missing_sim_section_uses_defaults() {
        let json = r#"{ "mapConfig": { "UAVs": [] } }"#;
        let config = WorldConfig::from_json_str(json).unwrap();
        assert_eq!(config.sim.step_length_ms, 4_000.0);
        assert_eq!(config.map.grid_x, 30);
        assert_eq!(config.map.box_size, 20);
    }

    #[test]
    fn negative_extent_is_invalid_configuration() {
        let json = r#"{ "mapConfig": { "gridX": -3, "UAVs": [] } }"#;
        let err = WorldConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, CoreError::InvalidConfiguration(_)), "{err}");
    }

    #[test]
    fn zero_box_size_is_invalid_configuration() {
        let json = r#"{ "mapConfig": { "boxSize": 0, "UAVs": [] } }"#;
        assert!(matches!(
            WorldConfig::from_json_str(json),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn non_positive_step_length_is_invalid() {
        let json = r#"{ "mapConfig": { "UAVs": [] }, "sim": { "stepLengthMs": 0 } }"#;
        assert!(matches!(
            WorldConfig::from_json_str(json),
            Err(CoreError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn duplicate_names_rejected() {
        let json = r#"{ "mapConfig": { "UAVs": [
            { "name": "a", "position": { "x": 0, "y": 0 } },
            { "name": "a", "position": { "x": 1, "y": 1 } }
        ] } }"#;
        let err = WorldConfig::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("duplicate"), "{err}");
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(WorldConfig::from_json_str("{"), Err(CoreError::Parse(_))));
    }

    #[test]
    fn loads_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(WORLD_JSON.as_bytes()).unwrap();
        let config = WorldConfig::from_json_path(file.path()).unwrap();
        assert_eq!(config.map.uavs[1].name, "bravo");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = WorldConfig::from_json_path(std::path::Path::new("/nonexistent/world.json"));
        assert!(matches!(err, Err(CoreError::Io(_))));
    }
}

#[cfg(test)]
mod scenery {
    use crate::{GridIndex, SimRng, scatter_buildings};

    #[test]
    fn buildings_stay_in_bounds() {
        let grid = GridIndex::new(30, 30, 20).unwrap();
        let buildings = scatter_buildings(&grid, 50, &mut SimRng::new(7));
        assert_eq!(buildings.len(), 50);
        for b in &buildings {
            assert!(grid.contains(b.cell), "{:?}", b.cell);
            assert_eq!(b.base, grid.cell_center(b.cell));
            assert!(b.footprint >= 10.0 && b.footprint < 20.0);
            assert!(b.height >= 10.0 && b.height < 60.0);
        }
    }

    #[test]
    fn same_seed_same_city() {
        let grid = GridIndex::new(30, 30, 20).unwrap();
        let a = scatter_buildings(&grid, 20, &mut SimRng::new(99));
        let b = scatter_buildings(&grid, 20, &mut SimRng::new(99));
        assert_eq!(a, b);
    }

    #[test]
    fn narrow_cells_get_full_footprint() {
        let grid = GridIndex::new(4, 4, 8).unwrap();
        let buildings = scatter_buildings(&grid, 5, &mut SimRng::new(1));
        assert!(buildings.iter().all(|b| b.footprint == 8.0));
    }

    #[test]
    fn ids_are_sequential() {
        let grid = GridIndex::new(4, 4, 20).unwrap();
        let buildings = scatter_buildings(&grid, 3, &mut SimRng::new(1));
        let ids: Vec<u32> = buildings.iter().map(|b| b.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
