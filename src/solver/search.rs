//! The recursive backtracking search over region assignments.

use std::sync::Arc;
use std::time::Instant;

use im::Vector;
use tracing::{debug, trace};

use crate::puzzle::Position;
use crate::solver::{
    grid::{SearchGrid, TileState},
    mask::WatchMask,
    module::{GlobalCheck, LocalCheck, Rating, SolverModule},
    stats::SearchStats,
};

/// Per-module watch masks for one recursion depth. `None` means the module
/// is always re-checked.
type MaskSnapshot = Vector<Option<Arc<WatchMask>>>;
/// Per-module heuristic scores for one recursion depth.
type RatingSnapshot = Vector<Arc<Vec<Rating>>>;

/// The core search driver.
///
/// Branches are explored Light first, then Dark; every assignment colours a
/// whole merged region and is undone when both branches fail, so the grid a
/// failed call leaves behind is bit-for-bit the grid it received.
#[derive(Debug, Default)]
pub struct BacktrackingSearch;

impl BacktrackingSearch {
    pub fn new() -> Self {
        Self
    }

    /// Runs every module's whole-grid check and, if none is infeasible, the
    /// recursive search. Returns `true` when the grid ends fully and validly
    /// assigned.
    pub fn run(
        &self,
        grid: &mut SearchGrid,
        modules: &[Box<dyn SolverModule>],
        stats: &mut SearchStats,
    ) -> bool {
        let mut watches = MaskSnapshot::new();
        let mut ratings = RatingSnapshot::new();

        for (module_id, module) in modules.iter().enumerate() {
            let started = Instant::now();
            let result = module.check_global(grid);
            stats.record_check(module_id, started.elapsed());

            match result {
                GlobalCheck::Infeasible => {
                    stats.record_violation(module_id);
                    debug!(module_id, "whole-grid check failed; puzzle is unsolvable");
                    return false;
                }
                GlobalCheck::Feasible(summary) => {
                    watches.push_back(summary.watch.map(Arc::new));
                    ratings.push_back(Arc::new(summary.ratings));
                }
            }
        }

        self.backtrack(grid, modules, watches, ratings, stats)
    }

    fn backtrack(
        &self,
        grid: &mut SearchGrid,
        modules: &[Box<dyn SolverModule>],
        watches: MaskSnapshot,
        ratings: RatingSnapshot,
        stats: &mut SearchStats,
    ) -> bool {
        let Some(pos) = next_tile(grid, &ratings) else {
            // No empty cell left: the grid is fully and validly assigned.
            return true;
        };
        stats.nodes += 1;

        // The merged region is fixed for the puzzle's lifetime, so both
        // branches colour the same set of cells.
        let changed: Vec<Position> = grid.region(pos).to_vec();

        for state in [TileState::Light, TileState::Dark] {
            grid.set_region(pos, state);
            trace!(x = pos.x, y = pos.y, ?state, "assign");

            if let Some((next_watches, next_ratings)) =
                self.validate(grid, modules, &changed, &watches, &ratings, stats)
            {
                if self.backtrack(grid, modules, next_watches, next_ratings, stats) {
                    return true;
                }
            }
            stats.backtracks += 1;
        }

        // Both branches failed: restore the region and let the caller try
        // its other colour.
        grid.set_region(pos, TileState::Empty);
        false
    }

    /// Runs the incremental checks for one assignment, in module
    /// registration order, short-circuiting on the first violation.
    ///
    /// On success, returns the mask/rating snapshot for the next depth: each
    /// module either carries its previous state forward or replaces it.
    fn validate(
        &self,
        grid: &SearchGrid,
        modules: &[Box<dyn SolverModule>],
        changed: &[Position],
        watches: &MaskSnapshot,
        ratings: &RatingSnapshot,
        stats: &mut SearchStats,
    ) -> Option<(MaskSnapshot, RatingSnapshot)> {
        let mut next_watches = watches.clone();
        let mut next_ratings = ratings.clone();

        for (module_id, module) in modules.iter().enumerate() {
            if let Some(mask) = &watches[module_id] {
                if !changed.iter().any(|&pos| mask.get(pos)) {
                    stats.skips += 1;
                    continue;
                }
            }

            let started = Instant::now();
            let result = module.check_local(grid, changed);
            stats.record_check(module_id, started.elapsed());

            match result {
                LocalCheck::Violated => {
                    stats.record_violation(module_id);
                    return None;
                }
                LocalCheck::Unchanged => {}
                LocalCheck::Updated(summary) => {
                    next_watches.set(module_id, summary.watch.map(Arc::new));
                    next_ratings.set(module_id, Arc::new(summary.ratings));
                }
            }
        }

        Some((next_watches, next_ratings))
    }
}

/// Picks the still-empty position with the highest aggregate rating score;
/// ties keep the earliest position in row-major order. Falls back to the
/// first empty position when no score is positive, and returns `None` when
/// the grid has no empty position left.
fn next_tile(grid: &SearchGrid, ratings: &RatingSnapshot) -> Option<Position> {
    let mut scores = vec![0u32; grid.width() * grid.height()];
    for module_ratings in ratings {
        for rating in module_ratings.iter() {
            scores[rating.pos.y * grid.width() + rating.pos.x] += rating.score;
        }
    }

    let mut highest = 0u32;
    let mut best = None;
    let mut fallback = None;

    for pos in grid.positions() {
        if grid.get(pos) != TileState::Empty {
            continue;
        }
        let score = scores[pos.y * grid.width() + pos.x];
        if score > highest {
            highest = score;
            best = Some(pos);
        }
        if fallback.is_none() {
            fallback = Some(pos);
        }
    }

    best.or(fallback)
}
