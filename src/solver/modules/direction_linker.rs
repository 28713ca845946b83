use crate::puzzle::{LotusAxis, Position, SymbolCenter};
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
    modules::flood,
};

#[derive(Debug, Clone, Copy)]
enum LinkKind {
    /// Point reflection through the center (galaxy).
    Point,
    /// Mirror reflection in an axis through the center (lotus).
    Mirror(LotusAxis),
}

/// Galaxy and lotus symbols: every cell of the same-coloured group containing
/// the center is linked to its reflected counterpart, which must take the
/// same colour.
#[derive(Debug, Clone)]
pub struct DirectionLinkerModule {
    center: SymbolCenter,
    kind: LinkKind,
}

impl DirectionLinkerModule {
    pub fn galaxy(center: SymbolCenter) -> Self {
        Self {
            center,
            kind: LinkKind::Point,
        }
    }

    pub fn lotus(center: SymbolCenter, axis: LotusAxis) -> Self {
        Self {
            center,
            kind: LinkKind::Mirror(axis),
        }
    }

    /// The cell linked to `pos`, or `None` when the reflection falls between
    /// cells and `pos` therefore has no counterpart.
    fn link(&self, pos: Position) -> Option<(i64, i64)> {
        // Work in doubled coordinates relative to the center.
        let ux = 2 * pos.x as i64 - self.center.x2;
        let uy = 2 * pos.y as i64 - self.center.y2;
        let (vx, vy) = match self.kind {
            LinkKind::Point => (-ux, -uy),
            LinkKind::Mirror(LotusAxis::Vertical) => (-ux, uy),
            LinkKind::Mirror(LotusAxis::Horizontal) => (ux, -uy),
            LinkKind::Mirror(LotusAxis::DiagonalDown) => (uy, ux),
            LinkKind::Mirror(LotusAxis::DiagonalUp) => (-uy, -ux),
        };
        let mx2 = self.center.x2 + vx;
        let my2 = self.center.y2 + vy;
        if mx2.rem_euclid(2) != 0 || my2.rem_euclid(2) != 0 {
            return None;
        }
        Some((mx2 / 2, my2 / 2))
    }

    fn evaluate(&self, grid: &SearchGrid) -> Option<CheckSummary> {
        let (ax, ay) = self.center.anchor_cell();
        if !grid.in_bounds(ax, ay) {
            return None;
        }
        let anchor = Position::new(ax as usize, ay as usize);
        let state = grid.get(anchor);
        if state == TileState::NonExistent {
            return None;
        }
        if state == TileState::Empty {
            let watch = WatchMask::from_positions(grid.width(), grid.height(), [anchor]);
            return Some(CheckSummary {
                watch: Some(watch),
                ratings: vec![Rating { pos: anchor, score: 2 }],
            });
        }

        let group = flood(grid, &[anchor], |s| s == state);
        let mut watched = Vec::new();
        let mut ratings = Vec::new();

        for &pos in &group {
            let (mx, my) = self.link(pos)?;
            if !grid.in_bounds(mx, my) {
                return None;
            }
            let mirror = Position::new(mx as usize, my as usize);
            match grid.get(mirror) {
                TileState::NonExistent => return None,
                s if s == state.opposite() => return None,
                TileState::Empty => {
                    // The counterpart is forced to this colour eventually.
                    watched.push(mirror);
                    ratings.push(Rating {
                        pos: mirror,
                        score: 4,
                    });
                }
                _ => {}
            }
            // The group can grow through any empty neighbour.
            for neighbor in grid.neighbors(pos) {
                if grid.get(neighbor) == TileState::Empty {
                    watched.push(neighbor);
                    ratings.push(Rating {
                        pos: neighbor,
                        score: 2,
                    });
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

impl SolverModule for DirectionLinkerModule {
    fn descriptor(&self) -> ModuleDescriptor {
        let name = match self.kind {
            LinkKind::Point => "galaxy",
            LinkKind::Mirror(_) => "lotus",
        };
        ModuleDescriptor {
            name: name.into(),
            description: format!(
                "symmetric group around ({}, {}) in half-cells",
                self.center.x2, self.center.y2
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
    fn centered_galaxy_accepts_symmetric_group() {
        let grid = grid_from_rows(&[
            "##.", //
            ".#.", //
            ".##",
        ]);
        let module = DirectionLinkerModule::galaxy(SymbolCenter::at_cell(1, 1));
        assert!(module.evaluate(&grid).is_some());
    }

    #[test]
    fn centered_galaxy_rejects_asymmetric_group() {
        let grid = grid_from_rows(&[
            "##.", //
            ".#.", //
            "..#",
        ]);
        // (1, 0) is in the group but its counterpart (1, 2) is light.
        let module = DirectionLinkerModule::galaxy(SymbolCenter::at_cell(1, 1));
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn border_centered_galaxy_links_across_the_border() {
        // Center between (0, 0) and (1, 0).
        let grid = grid_from_rows(&["## "]);
        let module = DirectionLinkerModule::galaxy(SymbolCenter::from_doubled(1, 0));
        assert!(module.evaluate(&grid).is_some());
    }

    #[test]
    fn mirror_outside_the_grid_is_infeasible() {
        let grid = grid_from_rows(&["###"]);
        let module = DirectionLinkerModule::galaxy(SymbolCenter::at_cell(0, 0));
        // (2, 0) reflects to (-2, 0), outside the grid.
        assert!(module.evaluate(&grid).is_none());
    }

    #[test]
    fn empty_mirror_cell_is_rated_as_forced() {
        let grid = grid_from_rows(&["## "]);
        let module = DirectionLinkerModule::galaxy(SymbolCenter::at_cell(1, 0));
        let summary = module.evaluate(&grid).unwrap();
        // (0, 0) is dark, so its mirror (2, 0) must become dark too.
        assert!(summary
            .ratings
            .iter()
            .any(|r| r.pos == Position::new(2, 0) && r.score == 4));
    }

    #[test]
    fn vertical_lotus_mirrors_left_to_right() {
        let grid = grid_from_rows(&[
            "#.#", //
            "###",
        ]);
        let module =
            DirectionLinkerModule::lotus(SymbolCenter::at_cell(1, 1), LotusAxis::Vertical);
        assert!(module.evaluate(&grid).is_some());

        let asymmetric = grid_from_rows(&[
            "#..", //
            "###",
        ]);
        assert!(module.evaluate(&asymmetric).is_none());
    }
}
