//! Unit tests for evac-behavior.

use evac_agent::{Pedestrian, PedestrianParams};
use evac_core::{AgentId, Grid, GridScenario, Location, Scenario, SimRng, Tick};
use evac_space::{Neighbourhood, StaticFloorField};

use crate::AutomatonView;

// ── Helpers ───────────────────────────────────────────────────────────────────

struct Fixture {
    scenario: GridScenario,
    field:    StaticFloorField,
    occupied: Grid<bool>,
}

impl Fixture {
    fn new(map: &str) -> Self {
        let scenario = GridScenario::parse(map).unwrap();
        let field = StaticFloorField::compute(&scenario).unwrap();
        let occupied = Grid::filled(scenario.dims().unwrap(), false);
        Self { scenario, field, occupied }
    }

    fn occupy(mut self, row: usize, col: usize) -> Self {
        self.occupied[Location::new(row, col)] = true;
        self
    }

    fn view(&self, neighbourhood: Neighbourhood) -> AutomatonView<'_> {
        AutomatonView::new(Tick(0), neighbourhood, &self.scenario, &self.field, &self.occupied)
    }
}

fn ped_at(row: usize, col: usize, params: PedestrianParams) -> Pedestrian {
    Pedestrian::new(AgentId(0), Location::new(row, col), params)
}

// ── Sampling ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sampling_tests {
    use super::*;
    use crate::{BehaviorError, WEIGHT_FLOOR, sample_weighted, shift_weights};

    #[test]
    fn shift_moves_minimum_to_floor() {
        let mut w = [3.0, 1.0, 2.0];
        shift_weights(&mut w);
        assert!((w[1] - WEIGHT_FLOOR).abs() < 1e-12);
        assert!((w[0] - (2.0 + WEIGHT_FLOOR)).abs() < 1e-12);
        assert!(w.iter().all(|&x| x > 0.0));
    }

    #[test]
    fn shifted_ties_are_uniform_and_positive() {
        let mut w = [0.7; 4];
        shift_weights(&mut w);
        assert!(w.iter().all(|&x| x == w[0]));
        assert!(w.iter().all(|&x| x > 0.0 && (x - WEIGHT_FLOOR).abs() < 1e-12));
    }

    #[test]
    fn empty_weights_rejected() {
        let mut rng = SimRng::new(0);
        assert!(matches!(sample_weighted(&[], &mut rng), Err(BehaviorError::Weights(_))));
        assert!(sample_weighted(&[f64::NAN, 1.0], &mut rng).is_err());
    }

    #[test]
    fn empirical_frequencies_converge() {
        const TRIALS: usize = 20_000;
        let weights = [1.0, 2.0, 3.0, 4.0];
        let total: f64 = weights.iter().sum();
        let mut counts = [0usize; 4];
        let mut rng = SimRng::new(2024);
        for _ in 0..TRIALS {
            counts[sample_weighted(&weights, &mut rng).unwrap()] += 1;
        }
        for (i, &c) in counts.iter().enumerate() {
            let freq = c as f64 / TRIALS as f64;
            let expected = weights[i] / total;
            assert!((freq - expected).abs() < 0.02, "index {i}: {freq} vs {expected}");
        }
    }
}

// ── View ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod view_tests {
    use super::*;

    #[test]
    fn free_excludes_blocked_and_occupied() {
        let fx = Fixture::new("E.#\n...\n").occupy(1, 0);
        let view = fx.view(Neighbourhood::Moore);
        assert!(view.is_free(Location::new(0, 1)));
        assert!(!view.is_free(Location::new(0, 2)));
        assert!(!view.is_free(Location::new(1, 0)));
        assert!(view.is_exit(Location::new(0, 0)));
    }
}

// ── Floor-field model ─────────────────────────────────────────────────────────

#[cfg(test)]
mod floor_field_model_tests {
    use super::*;
    use crate::{FloorFieldModel, MovementModel, StayPut};

    #[test]
    fn desirability_formula() {
        let p = PedestrianParams::new(2.0, 3.0, 1.0).unwrap();
        let d = FloorFieldModel::desirability(&p, 0.5, 2);
        assert!((d - (2.0f64 * 0.5 - 3.0 / 3.0).exp()).abs() < 1e-12);
        assert_eq!(FloorFieldModel::desirability(&PedestrianParams::default(), 0.0, 8), 1.0);
    }

    #[test]
    fn crowding_counts_open_neighbours() {
        let fx = Fixture::new("E.#\n...\n...\n");
        let moore = fx.view(Neighbourhood::Moore);
        assert_eq!(FloorFieldModel::crowding(&moore, Location::new(1, 1)), 7);
        assert_eq!(FloorFieldModel::crowding(&moore, Location::new(2, 2)), 3);
        let vn = fx.view(Neighbourhood::VonNeumann);
        assert_eq!(FloorFieldModel::crowding(&vn, Location::new(1, 1)), 4);
        assert_eq!(FloorFieldModel::crowding(&vn, Location::new(1, 2)), 2);
    }

    #[test]
    fn candidates_skip_blocked_and_occupied() {
        let fx = Fixture::new("E.#\n...\n").occupy(1, 0);
        let ped = ped_at(1, 1, PedestrianParams::default());
        let locs: Vec<Location> = FloorFieldModel
            .candidates(&ped, &fx.view(Neighbourhood::Moore))
            .iter()
            .map(|c| c.location)
            .collect();
        assert_eq!(locs, vec![Location::new(0, 0), Location::new(0, 1), Location::new(1, 2)]);
    }

    #[test]
    fn boxed_in_pedestrian_stays() {
        let fx = Fixture::new("##.\n#..\n##E\n").occupy(0, 2).occupy(1, 2).occupy(2, 2);
        let ped = ped_at(1, 1, PedestrianParams::default());
        let mut rng = SimRng::new(1);
        for _ in 0..100 {
            assert_eq!(FloorFieldModel.choose_movement(&ped, &fx.view(Neighbourhood::Moore), &mut rng), None);
        }
    }

    #[test]
    fn corridor_walker_heads_for_exit() {
        let fx = Fixture::new("........E\n");
        let ped = ped_at(0, 4, PedestrianParams::default());
        let view = fx.view(Neighbourhood::VonNeumann);
        let mut rng = SimRng::new(9);
        let forward = (0..1_000)
            .filter(|_| FloorFieldModel.choose_movement(&ped, &view, &mut rng) == Some(Location::new(0, 5)))
            .count();
        // Backward carries only the WEIGHT_FLOOR share.
        assert!(forward >= 990, "forward chosen {forward} / 1000");
    }

    #[test]
    fn velocity_gate_rate() {
        const TRIALS: usize = 20_000;
        let fx = Fixture::new("E....\n.....\n");
        let ped = ped_at(1, 2, PedestrianParams::new(1.0, 0.0, 0.3).unwrap());
        let view = fx.view(Neighbourhood::Moore);
        let mut rng = SimRng::new(77);
        let moved = (0..TRIALS)
            .filter(|_| FloorFieldModel.choose_movement(&ped, &view, &mut rng).is_some())
            .count();
        let rate = moved as f64 / TRIALS as f64;
        assert!((rate - 0.3).abs() < 0.02, "move rate {rate}");
    }

    #[test]
    fn repulsion_prefers_open_cells_on_flat_field() {
        // Two exits make the middle column's neighbours tie on field value;
        // only crowding separates them.
        let fx = Fixture::new("E...E\n#....\n##...\n");
        let ped = ped_at(1, 2, PedestrianParams::new(0.0, 5.0, 1.0).unwrap());
        let view = fx.view(Neighbourhood::VonNeumann);
        let cands = FloorFieldModel.candidates(&ped, &view);
        let left = cands.iter().find(|c| c.location == Location::new(1, 1)).unwrap();
        let right = cands.iter().find(|c| c.location == Location::new(1, 3)).unwrap();
        assert!(right.desirability > left.desirability);
    }

    #[test]
    fn same_seed_same_decisions() {
        let fx = Fixture::new("E.....\n......\n......\n");
        let ped = ped_at(2, 3, PedestrianParams::new(0.5, 1.0, 0.8).unwrap());
        let view = fx.view(Neighbourhood::Moore);
        let run = |seed| {
            let mut rng = SimRng::new(seed);
            (0..50)
                .map(|_| FloorFieldModel.choose_movement(&ped, &view, &mut rng))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(5), run(5));
    }

    #[test]
    fn stay_put_never_moves() {
        let fx = Fixture::new("E..\n");
        let ped = ped_at(0, 1, PedestrianParams::default());
        let mut rng = SimRng::new(0);
        assert_eq!(StayPut.choose_movement(&ped, &fx.view(Neighbourhood::Moore), &mut rng), None);
    }
}
