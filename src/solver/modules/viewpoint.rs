use crate::puzzle::{Direction, Position};
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
};

/// Viewpoint symbol: exactly `count` cells of the marked cell's colour are
/// visible from it along the four orthogonal directions, counting the marked
/// cell itself. Visibility extends through same-coloured cells and stops at
/// the first cell of the opposite colour or outside the shape.
#[derive(Debug, Clone)]
pub struct ViewpointModule {
    pos: Position,
    count: usize,
}

impl ViewpointModule {
    pub fn new(pos: Position, count: usize) -> Self {
        Self { pos, count }
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

        // The marked cell is always visible to itself.
        let mut min_visible = 1usize;
        let mut max_visible = 1usize;
        let mut watched = vec![self.pos];
        let mut ratings = Vec::new();

        for dir in Direction::ALL {
            let mut unbroken = true;
            let mut cursor = self.pos;
            while let Some(next) = grid.step(cursor, dir) {
                let state = grid.get(next);
                if state == anchor {
                    if unbroken {
                        min_visible += 1;
                    }
                    max_visible += 1;
                    watched.push(next);
                } else if state == TileState::Empty {
                    // The first gap ends the guaranteed run but leaves the
                    // rest of the ray potentially visible.
                    ratings.push(Rating {
                        pos: next,
                        score: if unbroken { 3 } else { 1 },
                    });
                    unbroken = false;
                    max_visible += 1;
                    watched.push(next);
                } else {
                    break;
                }
                cursor = next;
            }
        }

        if min_visible > self.count || max_visible < self.count {
            return None;
        }

        let watch = WatchMask::from_positions(grid.width(), grid.height(), watched);
        Some(CheckSummary {
            watch: Some(watch),
            ratings,
        })
    }
}

impl SolverModule for ViewpointModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "viewpoint".into(),
            description: format!(
                "{} cells visible from ({}, {})",
                self.count, self.pos.x, self.pos.y
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
    fn too_many_forced_visible_cells_is_infeasible() {
        let grid = grid_from_rows(&["####"]);
        let module = ViewpointModule::new(Position::new(0, 0), 2);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn too_little_potential_is_infeasible() {
        let grid = grid_from_rows(&[
            "#.", //
            "..",
        ]);
        let module = ViewpointModule::new(Position::new(0, 0), 3);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn gap_keeps_the_ray_potentially_visible() {
        // One dark cell, a gap and another dark cell: between 1 and 3 cells
        // may end up visible depending on the gap.
        let grid = grid_from_rows(&["# #."]);
        let module = ViewpointModule::new(Position::new(0, 0), 3);
        let summary = module.evaluate(&grid).unwrap();
        assert_eq!(summary.ratings.len(), 1);
        assert_eq!(summary.ratings[0].pos, Position::new(1, 0));

        let tight = ViewpointModule::new(Position::new(0, 0), 4);
        assert!(tight.evaluate(&grid).is_none());
    }

    #[test]
    fn exact_completed_count_is_feasible() {
        let grid = grid_from_rows(&[
            ".#.", //
            "###", //
            ".#.",
        ]);
        let module = ViewpointModule::new(Position::new(1, 1), 5);
        assert!(module.evaluate(&grid).is_some());
        let wrong = ViewpointModule::new(Position::new(1, 1), 4);
        assert!(wrong.evaluate(&grid).is_none());
    }
}
