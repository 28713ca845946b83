use crate::puzzle::Position;
use crate::solver::{
    grid::{SearchGrid, TileState},
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
    modules::flood,
};

/// Connect-all rule: every cell of the rule's colour must end up in one
/// orthogonally connected group. A grid without any cell of the colour
/// satisfies the rule trivially.
#[derive(Debug, Clone)]
pub struct ConnectAllModule {
    color: TileState,
}

impl ConnectAllModule {
    /// # Panics
    ///
    /// Panics if `color` is not `Dark` or `Light`; translation rejects such
    /// rules before a module is built.
    pub fn new(color: TileState) -> Self {
        assert!(color.is_colored(), "connect-all needs a concrete colour");
        Self { color }
    }

    fn evaluate(&self, grid: &SearchGrid) -> Option<CheckSummary> {
        let colored: Vec<Position> = grid
            .positions()
            .filter(|&pos| grid.get(pos) == self.color)
            .collect();

        // A new cell of the colour may appear anywhere and open a second
        // group, so this module is always re-checked.
        if colored.is_empty() {
            return Some(CheckSummary {
                watch: None,
                ratings: Vec::new(),
            });
        }

        // All coloured cells must be joinable through cells that are the
        // colour already or still empty.
        let reachable = flood(grid, &[colored[0]], |s| {
            s == self.color || s == TileState::Empty
        });
        let mut reach_table = vec![false; grid.width() * grid.height()];
        for &pos in &reachable {
            reach_table[pos.y * grid.width() + pos.x] = true;
        }
        if colored
            .iter()
            .any(|&pos| !reach_table[pos.y * grid.width() + pos.x])
        {
            return None;
        }

        let mut ratings = Vec::new();
        for &pos in &reachable {
            if grid.get(pos) == TileState::Empty
                && grid.neighbors(pos).any(|n| grid.get(n) == self.color)
            {
                ratings.push(Rating { pos, score: 2 });
            }
        }

        Some(CheckSummary {
            watch: None,
            ratings,
        })
    }
}

impl SolverModule for ConnectAllModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "connect-all".into(),
            description: format!("all {:?} cells form one group", self.color),
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
    fn no_colored_cells_is_trivially_feasible() {
        let grid = grid_from_rows(&["...", "..."]);
        let module = ConnectAllModule::new(TileState::Dark);
        assert!(module.evaluate(&grid).is_some());
    }

    #[test]
    fn separated_groups_with_an_empty_bridge_are_feasible() {
        let grid = grid_from_rows(&["# #"]);
        let module = ConnectAllModule::new(TileState::Dark);
        let summary = module.evaluate(&grid).unwrap();
        // The bridge cell touches both groups and is rated urgent.
        assert!(summary
            .ratings
            .iter()
            .any(|r| r.pos == Position::new(1, 0)));
    }

    #[test]
    fn cut_off_groups_are_infeasible() {
        let grid = grid_from_rows(&["#.#"]);
        let module = ConnectAllModule::new(TileState::Dark);
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn holes_block_connectivity() {
        let grid = grid_from_rows(&["#X#"]);
        let module = ConnectAllModule::new(TileState::Dark);
        assert!(module.evaluate(&grid).is_none());
    }
}
