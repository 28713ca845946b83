use crate::puzzle::{Direction, Position};
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{CheckSummary, GlobalCheck, LocalCheck, ModuleDescriptor, Rating, SolverModule},
};

/// Dart symbol: exactly `count` cells of the colour opposite to the marked
/// cell's lie along `direction`, scanning to the edge of the grid. Holes in
/// the shape are passed over without being counted.
#[derive(Debug, Clone)]
pub struct DartModule {
    pos: Position,
    direction: Direction,
    count: usize,
}

impl DartModule {
    pub fn new(pos: Position, direction: Direction, count: usize) -> Self {
        Self {
            pos,
            direction,
            count,
        }
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
        let mut confirmed = 0usize;
        let mut undecided = Vec::new();

        let mut cursor = self.pos;
        while let Some(next) = grid.step(cursor, self.direction) {
            let state = grid.get(next);
            if state == opposite {
                confirmed += 1;
            } else if state == TileState::Empty {
                undecided.push(next);
            }
            cursor = next;
        }

        if confirmed > self.count || confirmed + undecided.len() < self.count {
            return None;
        }

        let ratings = undecided
            .iter()
            .map(|&pos| Rating { pos, score: 2 })
            .collect();
        let watch = WatchMask::from_positions(grid.width(), grid.height(), undecided);
        Some(CheckSummary {
            watch: Some(watch),
            ratings,
        })
    }
}

impl SolverModule for DartModule {
    fn descriptor(&self) -> ModuleDescriptor {
        ModuleDescriptor {
            name: "dart".into(),
            description: format!(
                "{} opposite cells {:?} of ({}, {})",
                self.count, self.direction, self.pos.x, self.pos.y
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
