//! Unit tests for the forager step procedure and selection policy.

use forage_core::{ForagerId, ForagerParams, ForagerRng, Position};
use forage_grid::Grid;

use crate::{Forager, ForagerState, StepEvent, TrailDistanceWeighted, probabilities};

fn rng(id: u32) -> ForagerRng {
    ForagerRng::new(42, ForagerId(id))
}

/// Bounded 5×5 grid with a home at `home` and a registered forager.
fn setup(home: Position) -> (Grid, Forager) {
    let mut grid = Grid::new(5, 5, 4, false, 42);
    grid.place_home(Some(home)).unwrap();
    let forager = Forager::new(ForagerId(0), home, ForagerParams::default());
    grid.cell_mut(home)
        .unwrap()
        .home_mut()
        .unwrap()
        .register(forager.id());
    (grid, forager)
}

#[cfg(test)]
mod selection {
    use super::*;

    #[test]
    fn probabilities_sum_to_one_and_are_non_negative() {
        let params = ForagerParams::default();
        let policy = TrailDistanceWeighted;
        use crate::SelectionPolicy;
        let scores: Vec<f64> = [(0.5, 1.0), (0.001, 1.0), (0.2, 1.414)]
            .iter()
            .map(|&(intensity, dist)| policy.score(intensity, dist, &params))
            .collect();
        let probs = probabilities(&scores).unwrap();
        assert!((probs.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        assert!(probs.iter().all(|&p| p >= 0.0));
    }

    #[test]
    fn degenerate_scores_have_no_distribution() {
        assert!(probabilities(&[0.0, 0.0]).is_none());
        assert!(probabilities(&[f64::NAN, 1.0]).is_none());
        assert!(probabilities(&[]).is_none());
    }

    #[test]
    fn stronger_trail_scores_higher() {
        use crate::SelectionPolicy;
        let params = ForagerParams::default();
        let policy = TrailDistanceWeighted;
        let weak = policy.score(0.001, 1.0, &params);
        let strong = policy.score(0.5, 1.0, &params);
        assert!(strong > weak);
    }
}

#[cfg(test)]
mod exploring {
    use super::*;

    #[test]
    fn advance_pushes_current_cell_and_accumulates_path() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Advanced);
        assert_eq!(forager.trail(), &[Position::new(2, 2)]);
        assert!(forager.path_length() > 0.99);
        assert!(visible.contains(&forager.pos()));
    }

    #[test]
    fn collecting_transitions_to_returning() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        // Surround the forager so only the resource cell is selectable.
        for pos in [Position::new(1, 2), Position::new(2, 1), Position::new(2, 3)] {
            grid.place_obstacle(Some(pos)).unwrap();
        }
        grid.place_resource(Some(Position::new(3, 2)), 1).unwrap();

        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Collected);
        assert_eq!(forager.state(), ForagerState::Returning);
        assert_eq!(forager.mandible(), 1);
        assert!(grid
            .cell(Position::new(3, 2))
            .unwrap()
            .resource()
            .unwrap()
            .is_empty());
    }

    #[test]
    fn empty_resource_does_not_transition() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        for pos in [Position::new(1, 2), Position::new(2, 1), Position::new(2, 3)] {
            grid.place_obstacle(Some(pos)).unwrap();
        }
        grid.place_resource(Some(Position::new(3, 2)), 1).unwrap();
        grid.cell_mut(Position::new(3, 2))
            .unwrap()
            .resource_mut()
            .unwrap()
            .collect()
            .unwrap();

        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Advanced);
        assert_eq!(forager.state(), ForagerState::Exploring);
    }

    #[test]
    fn dead_end_pops_origin_and_clears_trail() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        let visible = grid.visible_from(forager.pos());
        // Every visible cell already visited: classic self-trap.
        let mut trail = vec![Position::new(0, 0)];
        trail.extend(visible.iter().copied());
        forager.set_trail(trail);

        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::DeadEnd);
        assert_eq!(forager.pos(), Position::new(0, 0));
        assert!(forager.trail().is_empty());
        assert_eq!(forager.path_length(), 0.0);
    }

    #[test]
    fn obstacles_are_never_selected() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        // Three of four neighbours blocked; the only legal move is (3, 2).
        for pos in [Position::new(1, 2), Position::new(2, 1), Position::new(2, 3)] {
            grid.place_obstacle(Some(pos)).unwrap();
        }
        let visible = grid.visible_from(forager.pos());
        for _ in 0..5 {
            let mut f = forager.clone();
            let mut g = rng(7);
            f.step(&visible, &mut grid, &TrailDistanceWeighted, &mut g)
                .unwrap();
            assert_eq!(f.pos(), Position::new(3, 2));
        }
    }

    #[test]
    fn trapped_forager_with_no_trail_stalls() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        for pos in [
            Position::new(1, 2),
            Position::new(2, 1),
            Position::new(2, 3),
            Position::new(3, 2),
        ] {
            grid.place_obstacle(Some(pos)).unwrap();
        }
        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Stalled);
        assert_eq!(forager.pos(), Position::new(2, 2));
    }
}

#[cfg(test)]
mod returning {
    use super::*;

    #[test]
    fn backtrack_reinforces_and_pops_most_recent() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        forager.set_trail(vec![Position::new(2, 2), Position::new(2, 3)]);
        forager.load_mandible(2.0);
        let visible = grid.visible_from(forager.pos());

        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Backtracked);
        assert_eq!(report.reinforced, Some(Position::new(2, 2)));
        assert_eq!(forager.pos(), Position::new(2, 3));
        assert_eq!(forager.trail(), &[Position::new(2, 2)]);
        assert!(grid.cell(Position::new(2, 2)).unwrap().has_trail());
    }

    #[test]
    fn deposit_at_own_home_completes_the_cycle() {
        let home = Position::new(2, 2);
        let (mut grid, mut forager) = setup(home);
        forager.set_trail(vec![home]);
        forager.load_mandible(1.0);

        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Delivered);
        assert_eq!(forager.state(), ForagerState::Exploring);
        assert_eq!(forager.path_length(), 0.0);
        assert!(forager.trail().is_empty());
        assert_eq!(grid.cell(home).unwrap().home().unwrap().delivered(), 1);
    }

    #[test]
    fn foreign_home_does_not_accept_the_unit() {
        let home = Position::new(2, 2);
        let (mut grid, mut forager) = setup(home);
        // A second home the forager does not belong to.
        let other = grid.place_home(Some(Position::new(1, 1))).unwrap();
        forager.set_trail(vec![other]);
        forager.load_mandible(1.0);

        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Backtracked);
        assert!(forager.is_laden());
        assert_eq!(grid.cell(other).unwrap().home().unwrap().delivered(), 0);
    }

    #[test]
    fn returning_with_empty_trail_stalls_in_place() {
        let (mut grid, mut forager) = setup(Position::new(2, 2));
        forager.load_mandible(1.0);
        let visible = grid.visible_from(forager.pos());
        let report = forager
            .step(&visible, &mut grid, &TrailDistanceWeighted, &mut rng(0))
            .unwrap();
        assert_eq!(report.event, StepEvent::Stalled);
        assert_eq!(report.reinforced, Some(Position::new(2, 2)));
        assert_eq!(forager.pos(), Position::new(2, 2));
    }
}
