use crate::puzzle::{Color, Pattern, Position};
use crate::solver::{
    grid::{SearchGrid, TileState},
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, SolverModule},
};

/// Ban-pattern rule: the pattern must not appear anywhere in the grid, in any
/// rotation or mirror image. Gray pattern cells match any coloured tile;
/// empty and non-existent tiles never complete a match.
#[derive(Debug, Clone)]
pub struct BanPatternModule {
    variants: Vec<Pattern>,
}

impl BanPatternModule {
    pub fn new(pattern: &Pattern) -> Self {
        Self {
            variants: pattern.orientations(),
        }
    }

    fn cell_matches(state: TileState, wanted: Color) -> bool {
        match wanted {
            Color::Dark => state == TileState::Dark,
            Color::Light => state == TileState::Light,
            Color::Gray => state.is_colored(),
        }
    }

    /// Whether `variant` matches with its origin at `(ox, oy)`.
    fn matches_at(grid: &SearchGrid, variant: &Pattern, ox: i64, oy: i64) -> bool {
        variant.cells().iter().all(|&(offset, wanted)| {
            let x = ox + offset.x as i64;
            let y = oy + offset.y as i64;
            grid.in_bounds(x, y)
                && Self::cell_matches(grid.get(Position::new(x as usize, y as usize)), wanted)
        })
    }

    /// Whether any variant matches somewhere covering `pos`.
    fn matches_covering(&self, grid: &SearchGrid, pos: Position) -> bool {
        self.variants.iter().any(|variant| {
            variant.cells().iter().any(|&(offset, _)| {
                let ox = pos.x as i64 - offset.x as i64;
                let oy = pos.y as i64 - offset.y as i64;
                Self::matches_at(grid, variant, ox, oy)
            })
        })
    }
}

impl SolverModule for BanPatternModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "ban-pattern".into(),
            description: format!(
                "{}-cell pattern, {} orientations",
                self.variants.first().map_or(0, |v| v.cells().len()),
                self.variants.len()
            ),
        }
    }

    fn check_global(&self, grid: &SearchGrid) -> GlobalCheck {
        for variant in &self.variants {
            for y in 0..grid.height() as i64 {
                for x in 0..grid.width() as i64 {
                    if Self::matches_at(grid, variant, x, y) {
                        return GlobalCheck::Infeasible;
                    }
                }
            }
        }
        // Any assignment can complete a match, so no watch mask; there are
        // no heuristic scores to hand out either.
        GlobalCheck::Feasible(CheckSummary {
            watch: None,
            ratings: Vec::new(),
        })
    }

    fn check_local(&self, grid: &SearchGrid, changed: &[Position]) -> LocalCheck {
        if changed
            .iter()
            .any(|&pos| self.matches_covering(grid, pos))
        {
            LocalCheck::Violated
        } else {
            LocalCheck::Unchanged
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::modules::test_support::grid_from_rows;

    fn block_module() -> BanPatternModule {
        BanPatternModule::new(&Pattern::block(2, 2, Color::Dark))
    }

    #[test]
    fn completed_block_is_violated() {
        let grid = grid_from_rows(&[
            ".##", //
            ".##",
        ]);
        let module = block_module();
        assert!(matches!(
            module.check_global(&grid),
            GlobalCheck::Infeasible
        ));
        assert!(matches!(
            module.check_local(&grid, &[Position::new(1, 1)]),
            LocalCheck::Violated
        ));
    }

    #[test]
    fn partial_block_is_unchanged() {
        let grid = grid_from_rows(&[
            ".##", //
            ".# ",
        ]);
        let module = block_module();
        assert!(matches!(
            module.check_local(&grid, &[Position::new(1, 1)]),
            LocalCheck::Unchanged
        ));
    }

    #[test]
    fn rotated_orientations_are_banned_too() {
        let module = BanPatternModule::new(&Pattern::new([
            (Position::new(0, 0), Color::Dark),
            (Position::new(1, 0), Color::Dark),
            (Position::new(2, 0), Color::Dark),
        ]));
        let vertical = grid_from_rows(&[
            "#.", //
            "#.", //
            "#.",
        ]);
        assert!(matches!(
            module.check_local(&vertical, &[Position::new(0, 2)]),
            LocalCheck::Violated
        ));
    }

    #[test]
    fn gray_pattern_cells_match_either_colour() {
        let module = BanPatternModule::new(&Pattern::new([
            (Position::new(0, 0), Color::Dark),
            (Position::new(1, 0), Color::Gray),
        ]));
        let grid = grid_from_rows(&["#."]);
        assert!(matches!(
            module.check_local(&grid, &[Position::new(1, 0)]),
            LocalCheck::Violated
        ));
        let open = grid_from_rows(&["# "]);
        assert!(matches!(
            module.check_local(&open, &[Position::new(0, 0)]),
            LocalCheck::Unchanged
        ));
    }
}
