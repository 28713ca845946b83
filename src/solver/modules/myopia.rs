use crate::puzzle::{Direction, Position};
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
};

/// Distance to the nearest opposite-coloured cell along one ray can land
/// anywhere between these two bounds: `nearest` is the first cell that is
/// already opposite or could still become it, `farthest` the first cell that
/// is opposite today. `None` means no such cell on the ray.
#[derive(Debug, Clone, Copy)]
struct RayBounds {
    nearest: Option<usize>,
    farthest: Option<usize>,
}

/// Myopia symbol: its arrows point towards all nearest opposite-coloured
/// cells and only towards those; with no arrows, no opposite-coloured cell is
/// visible in any orthogonal direction. Holes in the shape are passed over.
#[derive(Debug, Clone)]
pub struct MyopiaModule {
    pos: Position,
    arrows: Vec<Direction>,
}

impl MyopiaModule {
    pub fn new(pos: Position, arrows: Vec<Direction>) -> Self {
        Self { pos, arrows }
    }

    fn ray(&self, grid: &SearchGrid, dir: Direction, opposite: TileState) -> (RayBounds, Vec<Position>) {
        let mut nearest = None;
        let mut farthest = None;
        let mut undecided = Vec::new();
        let mut cursor = self.pos;
        let mut distance = 0usize;

        while let Some(next) = grid.step(cursor, dir) {
            distance += 1;
            let state = grid.get(next);
            if state == opposite {
                nearest.get_or_insert(distance);
                farthest = Some(distance);
                break;
            }
            if state == TileState::Empty {
                nearest.get_or_insert(distance);
                undecided.push(next);
            }
            cursor = next;
        }

        (RayBounds { nearest, farthest }, undecided)
    }

    fn evaluate(&self, grid: &SearchGrid) -> Option<CheckSummary> {
        if !grid.in_bounds(self.pos.x as i64, self.pos.y as i64) {
            return None;
        }
        let anchor = grid.get(self.pos);
        if anchor == TileState::NonExistent {
            return None;
        }
        if anchor == TileState::Empty {
            let watch =
                WatchMask::from_positions(grid.width(), grid.height(), [self.pos]);
            return Some(CheckSummary {
                watch: Some(watch),
                ratings: vec![Rating {
                    pos: self.pos,
                    score: 2,
                }],
            });
        }

        let opposite = anchor.opposite();
        let mut watched = Vec::new();
        let mut ratings = Vec::new();
        let mut arrow_floor = 0usize;
        let mut arrow_ceiling = usize::MAX;
        let mut plain = Vec::new();

        for dir in Direction::ALL {
            let (bounds, undecided) = self.ray(grid, dir, opposite);
            for pos in undecided {
                ratings.push(Rating { pos, score: 2 });
                watched.push(pos);
            }
            if self.arrows.contains(&dir) {
                // An arrow must eventually see an opposite cell at the common
                // nearest distance.
                let Some(nearest) = bounds.nearest else {
                    return None;
                };
                arrow_floor = arrow_floor.max(nearest);
                arrow_ceiling = arrow_ceiling.min(bounds.farthest.unwrap_or(usize::MAX));
            } else {
                plain.push(bounds);
            }
        }

        if self.arrows.is_empty() {
            // No arrows: no direction may ever show an opposite cell.
            if plain.iter().any(|bounds| bounds.farthest.is_some()) {
                return None;
            }
        } else {
            if arrow_floor > arrow_ceiling {
                return None;
            }
            // Every non-arrow direction must stay strictly farther than the
            // closest distance the arrows can agree on.
            for bounds in &plain {
                if let Some(farthest) = bounds.farthest {
                    if farthest <= arrow_floor {
                        return None;
                    }
                }
            }
        }

        let watch = WatchMask::from_positions(grid.width(), grid.height(), watched);
        Some(CheckSummary {
            watch: Some(watch),
            ratings,
        })
    }
}

impl SolverModule for MyopiaModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "myopia".into(),
            description: format!(
                "{} arrows at ({}, {})",
                self.arrows.len(),
                self.pos.x,
                self.pos.y
            ),
        }
    }

    fn check_global(&self, grid: &SearchGrid) -> GlobalCheck {
        match self.evaluate(grid) {
            None => GlobalCheck::Infeasible,
            Some(summary) => GlobalCheck::Feasible(summary),
        }
    }

    fn check_local(&self, grid: &SearchGrid, _changed: &[Position]) -> LocalCheck {
        match self.evaluate(grid) {
            None => LocalCheck::Violated,
            Some(summary) => LocalCheck::Updated(summary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::modules::test_support::grid_from_rows;

    #[test]
    fn arrow_towards_the_unique_nearest_opposite_is_feasible() {
        let grid = grid_from_rows(&[
            "...", //
            "##.", //
            "...",
        ]);
        let module = MyopiaModule::new(Position::new(0, 1), vec![Direction::Up]);
        assert!(module.evaluate(&grid).is_none());
        // The nearest light cells from (0, 1) sit up and down at distance 1,
        // so both arrows are required.
        let both = MyopiaModule::new(
            Position::new(0, 1),
            vec![Direction::Up, Direction::Down],
        );
        assert!(both.evaluate(&grid).is_some());
    }

    #[test]
    fn arrow_matching_the_adjacent_opposite_is_feasible() {
        let grid = grid_from_rows(&["#.  "]);
        // Arrow right is satisfiable only at distance 1, which is where the
        // light cell already sits.
        let module = MyopiaModule::new(Position::new(0, 0), vec![Direction::Right]);
        assert!(module.evaluate(&grid).is_some());
    }

    #[test]
    fn arrow_with_no_possible_target_is_infeasible() {
        let grid = grid_from_rows(&["##"]);
        let module = MyopiaModule::new(Position::new(0, 0), vec![Direction::Right]);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn no_arrows_means_no_visible_opposite() {
        let grid = grid_from_rows(&["#."]);
        let module = MyopiaModule::new(Position::new(0, 0), vec![]);
        assert!(module.evaluate(&grid).is_none());

        let open = grid_from_rows(&["# "]);
        let undecided = MyopiaModule::new(Position::new(0, 0), vec![]);
        assert!(undecided.evaluate(&open).is_some());
    }

    #[test]
    fn empty_cells_leave_the_bounds_open() {
        let grid = grid_from_rows(&[
            " ", //
            "#", //
            ".",
        ]);
        // Down sees a light cell at distance 1; up could still hide a closer
        // one, so pointing only up is not yet refutable but pointing only
        // down already is... both remain possible until (0, 0) is coloured.
        let down_only = MyopiaModule::new(Position::new(0, 1), vec![Direction::Down]);
        assert!(down_only.evaluate(&grid).is_some());
        let up_and_down = MyopiaModule::new(
            Position::new(0, 1),
            vec![Direction::Up, Direction::Down],
        );
        assert!(up_and_down.evaluate(&grid).is_some());
    }
}
