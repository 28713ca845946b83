use crate::puzzle::Position;
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
    modules::flood,
};

/// Area-number symbol: the same-coloured orthogonally connected group
/// containing the marked cell must have exactly `count` cells.
#[derive(Debug, Clone)]
pub struct AreaNumberModule {
    pos: Position,
    count: usize,
}

impl AreaNumberModule {
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
            // Nothing to propagate until the marked cell gains a colour;
            // only that change matters.
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

        let group = flood(grid, &[self.pos], |s| s == anchor);
        if group.len() > self.count {
            return None;
        }
        // Room to grow: cells reachable through the group's colour or empties.
        let reachable = flood(grid, &[self.pos], |s| s == anchor || s == TileState::Empty);
        if reachable.len() < self.count {
            return None;
        }

        let mut ratings = Vec::new();
        for &pos in &reachable {
            if grid.get(pos) != TileState::Empty {
                continue;
            }
            let frontier = grid
                .neighbors(pos)
                .any(|n| grid.get(n) == anchor && group.contains(&n));
            ratings.push(Rating {
                pos,
                score: if frontier { 3 } else { 1 },
            });
        }

        let watch = WatchMask::from_positions(grid.width(), grid.height(), reachable);
        Some(CheckSummary {
            watch: Some(watch),
            ratings,
        })
    }
}

impl SolverModule for AreaNumberModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "area-number".into(),
            description: format!(
                "group at ({}, {}) has exactly {} cells",
                self.pos.x, self.pos.y, self.count
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
