use crate::puzzle::Position;
use crate::solver::{
    grid::{SearchGrid, TileState},
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
    modules::flood,
};

/// Region-area rule: every orthogonally connected group of the rule's colour
/// must contain exactly `size` cells.
#[derive(Debug, Clone)]
pub struct RegionAreaModule {
    color: TileState,
    size: usize,
}

impl RegionAreaModule {
    /// # Panics
    ///
    /// Panics if `color` is not `Dark` or `Light`; translation rejects such
    /// rules before a module is built.
    pub fn new(color: TileState, size: usize) -> Self {
        assert!(color.is_colored(), "region-area needs a concrete colour");
        Self { color, size }
    }

    fn evaluate(&self, grid: &SearchGrid) -> Option<CheckSummary> {
        let mut seen = vec![false; grid.width() * grid.height()];
        let mut ratings = Vec::new();

        for start in grid.positions() {
            if grid.get(start) != self.color || seen[start.y * grid.width() + start.x] {
                continue;
            }
            let group = flood(grid, &[start], |s| s == self.color);
            for &pos in &group {
                seen[pos.y * grid.width() + pos.x] = true;
            }
            if group.len() > self.size {
                return None;
            }
            if group.len() < self.size {
                // The group still needs cells; they can only come through
                // adjacent empties.
                let reachable =
                    flood(grid, &group, |s| s == self.color || s == TileState::Empty);
                if reachable.len() < self.size {
                    return None;
                }
                for &pos in &group {
                    for neighbor in grid.neighbors(pos) {
                        if grid.get(neighbor) == TileState::Empty {
                            ratings.push(Rating {
                                pos: neighbor,
                                score: 3,
                            });
                        }
                    }
                }
            }
        }

        // A cell of the colour can appear anywhere and open a new group, so
        // this module is always re-checked.
        Some(CheckSummary {
            watch: None,
            ratings,
        })
    }
}

impl SolverModule for RegionAreaModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "region-area".into(),
            description: format!("every {:?} group has exactly {} cells", self.color, self.size),
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
    fn oversized_group_is_infeasible() {
        let grid = grid_from_rows(&["###  "]);
        let module = RegionAreaModule::new(TileState::Dark, 2);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn sealed_undersized_group_is_infeasible() {
        let grid = grid_from_rows(&[
            "#.", //
            "..",
        ]);
        let module = RegionAreaModule::new(TileState::Dark, 2);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn growing_group_rates_its_frontier() {
        let grid = grid_from_rows(&[
            "# ", //
            "  ",
        ]);
        let module = RegionAreaModule::new(TileState::Dark, 2);
        let summary = module.evaluate(&grid).unwrap();
        let rated: Vec<Position> = summary.ratings.iter().map(|r| r.pos).collect();
        assert!(rated.contains(&Position::new(1, 0)));
        assert!(rated.contains(&Position::new(0, 1)));
    }

    #[test]
    fn multiple_exact_groups_are_feasible() {
        let grid = grid_from_rows(&[
            "##.##", //
            ".....",
        ]);
        let module = RegionAreaModule::new(TileState::Dark, 2);
        assert!(module.evaluate(&grid).is_some());
    }
}
