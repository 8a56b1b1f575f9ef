//! Unit tests for evac-space.
//!
//! All scenarios are tiny ASCII maps so expected distances can be worked out
//! by hand.

#[cfg(test)]
mod helpers {
    use evac_core::{GridScenario, GridScenarioBuilder};

    pub fn map(text: &str) -> GridScenario {
        GridScenario::parse(text).expect("valid test map")
    }

    /// 9x11 room with a deterministic scatter of pillars and two exits.
    pub fn pillared_room() -> GridScenario {
        let mut b = GridScenarioBuilder::new(9, 11).exit(0, 5).exit(8, 10);
        for row in 1..8 {
            for col in 0..11 {
                if (row * 7 + col * 3) % 5 == 0 && (row, col) != (4, 5) {
                    b = b.block(row, col);
                }
            }
        }
        b.build().expect("valid pillared room")
    }
}

// ── Neighbourhood ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod neighbourhood {
    use evac_core::{CoreError, GridDims, Location};

    use crate::{Neighbourhood, SpaceError};

    fn dims() -> GridDims {
        GridDims::new(4, 5).unwrap()
    }

    #[test]
    fn interior_counts() {
        let c = Location::new(1, 1);
        assert_eq!(Neighbourhood::VonNeumann.neighbours(dims(), c).len(), 4);
        assert_eq!(Neighbourhood::Moore.neighbours(dims(), c).len(), 8);
    }

    #[test]
    fn corner_and_edge_are_clipped() {
        let corner = Location::new(0, 0);
        assert_eq!(Neighbourhood::VonNeumann.neighbours(dims(), corner).len(), 2);
        assert_eq!(Neighbourhood::Moore.neighbours(dims(), corner).len(), 3);

        let edge = Location::new(3, 2);
        assert_eq!(Neighbourhood::VonNeumann.neighbours(dims(), edge).len(), 3);
        assert_eq!(Neighbourhood::Moore.neighbours(dims(), edge).len(), 5);
    }

    #[test]
    fn von_neumann_order_is_fixed() {
        let n = Neighbourhood::VonNeumann.neighbours(dims(), Location::new(1, 1));
        assert_eq!(
            n.as_slice(),
            &[Location::new(0, 1), Location::new(1, 0), Location::new(1, 2), Location::new(2, 1)]
        );
    }

    #[test]
    fn moore_excludes_self() {
        let c = Location::new(2, 2);
        assert!(!Neighbourhood::Moore.neighbours(dims(), c).contains(&c));
    }

    #[test]
    fn out_of_bounds_input_rejected() {
        let err = Neighbourhood::Moore.try_neighbours(dims(), 4, 0).unwrap_err();
        assert!(matches!(err, SpaceError::Core(CoreError::OutOfBounds { row: 4, .. })));
        assert!(Neighbourhood::Moore.try_neighbours(dims(), 3, 4).is_ok());
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("von-neumann".parse::<Neighbourhood>().unwrap(), Neighbourhood::VonNeumann);
        assert_eq!("Moore".parse::<Neighbourhood>().unwrap(), Neighbourhood::Moore);
        assert!("hex".parse::<Neighbourhood>().is_err());
        assert_eq!(Neighbourhood::VonNeumann.to_string(), "von-neumann");
    }
}

// ── Floor field ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod floor_field {
    use std::f64::consts::SQRT_2;

    use evac_core::{GridScenario, Location, Scenario};

    use super::helpers::{map, pillared_room};
    use crate::{Neighbourhood, SpaceError, StaticFloorField};

    const EPS: f64 = 1e-9;

    #[test]
    fn corner_exit_uses_diagonal_weights() {
        let s = map("E..\n...\n...\n");
        let f = StaticFloorField::compute(&s).unwrap();
        assert_eq!(f.distance(Location::new(1, 1)), Some(SQRT_2));
        assert!((f.max_distance() - 2.0 * SQRT_2).abs() < EPS);
        assert_eq!(f.value(Location::new(0, 0)), Some(1.0));
        assert!(f.value(Location::new(2, 2)).unwrap().abs() < EPS);
        let edge = f.value(Location::new(1, 0)).unwrap();
        assert!((edge - (1.0 - 1.0 / (2.0 * SQRT_2))).abs() < EPS);
    }

    #[test]
    fn wall_forces_detour() {
        let s = map("E.#..\n..#..\n.....\n");
        let f = StaticFloorField::compute(&s).unwrap();
        let d = f.distance(Location::new(0, 3)).unwrap();
        assert!((d - (1.0 + 3.0 * SQRT_2)).abs() < EPS, "got {d}");
    }

    #[test]
    fn values_in_unit_interval_and_exits_are_max() {
        let s = pillared_room();
        let f = StaticFloorField::compute(&s).unwrap();
        let max = s
            .dims()
            .unwrap()
            .locations()
            .filter_map(|loc| f.value(loc))
            .fold(f64::NEG_INFINITY, f64::max);
        for loc in s.dims().unwrap().locations() {
            match f.value(loc) {
                None => assert!(s.is_cell_blocked(loc.row, loc.col)),
                Some(v) => assert!((0.0..=1.0).contains(&v), "{loc}: {v}"),
            }
        }
        for exit in s.exits() {
            assert_eq!(f.value(exit), Some(max));
        }
        assert_eq!(f.exit_count(), 2);
    }

    #[test]
    fn matches_exhaustive_relaxation() {
        // Bellman-Ford style fixed point as an independent reference.
        let s = pillared_room();
        let dims = s.dims().unwrap();
        let mut reference = vec![f64::INFINITY; dims.cell_count()];
        for exit in s.exits() {
            reference[dims.index(exit)] = 0.0;
        }
        let mut changed = true;
        while changed {
            changed = false;
            for loc in dims.locations() {
                if s.is_cell_blocked(loc.row, loc.col) {
                    continue;
                }
                for n in Neighbourhood::Moore.neighbours(dims, loc) {
                    if s.is_cell_blocked(n.row, n.col) {
                        continue;
                    }
                    let w = if loc.is_diagonal_to(n) { SQRT_2 } else { 1.0 };
                    let cand = reference[dims.index(n)] + w;
                    if cand + EPS < reference[dims.index(loc)] {
                        reference[dims.index(loc)] = cand;
                        changed = true;
                    }
                }
            }
        }

        let f = StaticFloorField::compute(&s).unwrap();
        for loc in dims.locations() {
            if s.is_cell_blocked(loc.row, loc.col) {
                assert_eq!(f.distance(loc), None);
                continue;
            }
            let expected = reference[dims.index(loc)];
            let got = f.distance(loc).unwrap_or(f64::INFINITY);
            assert!(
                (expected.is_infinite() && got.is_infinite()) || (expected - got).abs() < 1e-6,
                "{loc}: expected {expected}, got {got}"
            );
        }
    }

    #[test]
    fn no_exits_is_rejected() {
        let s = GridScenario::open(4, 4).unwrap();
        assert_eq!(StaticFloorField::compute(&s).unwrap_err(), SpaceError::NoExits);
    }

    #[test]
    fn blocked_cells_have_no_value() {
        let s = map("E#.\n");
        let f = StaticFloorField::compute(&s).unwrap();
        assert_eq!(f.value(Location::new(0, 1)), None);
        assert_eq!(f.distance(Location::new(0, 1)), None);
    }

    #[test]
    fn unreachable_cells_get_zero() {
        let s = map("E.#.\n..#.\n");
        let f = StaticFloorField::compute(&s).unwrap();
        assert_eq!(f.unreachable_count(), 2);
        assert_eq!(f.value(Location::new(0, 3)), Some(0.0));
        assert_eq!(f.distance(Location::new(1, 3)), None);
    }

    #[test]
    fn all_exit_grid_is_uniformly_one() {
        let s = map("EE\n");
        let f = StaticFloorField::compute(&s).unwrap();
        assert_eq!(f.max_distance(), 0.0);
        assert_eq!(f.value(Location::new(0, 1)), Some(1.0));
    }

    #[test]
    fn field_increases_toward_exit_along_corridor() {
        let s = map("..........E\n");
        let f = StaticFloorField::compute(&s).unwrap();
        let values: Vec<f64> = (0..11).map(|c| f.value(Location::new(0, c)).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] < w[1]), "{values:?}");
        assert_eq!(values[0], 0.0);
    }
}

// ── Exit index ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod exit_index {
    use evac_core::Location;

    use super::helpers::map;
    use crate::ExitIndex;

    #[test]
    fn nearest_exit_and_distance() {
        let s = map("E....\n.....\n....E\n");
        let idx = ExitIndex::from_scenario(&s);
        assert_eq!(idx.len(), 2);

        let (exit, d) = idx.nearest(Location::new(2, 0)).unwrap();
        assert_eq!(exit, Location::new(0, 0));
        assert_eq!(d, 2.0);

        let (exit, d) = idx.nearest(Location::new(1, 4)).unwrap();
        assert_eq!(exit, Location::new(2, 4));
        assert_eq!(d, 1.0);
    }

    #[test]
    fn distance_ignores_walls() {
        let s = map("E#.\n");
        let idx = ExitIndex::from_scenario(&s);
        assert_eq!(idx.nearest(Location::new(0, 2)).map(|(_, d)| d), Some(2.0));
    }

    #[test]
    fn empty_index() {
        let idx = ExitIndex::from_exits(std::iter::empty());
        assert!(idx.is_empty());
        assert!(idx.nearest(Location::new(0, 0)).is_none());
    }
}
