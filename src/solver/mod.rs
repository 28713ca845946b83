//! The constraint-solving engine: translation, incremental validation,
//! backtracking search and the underclued meta-solver.

pub mod grid;
pub mod mask;
pub mod module;
pub mod modules;
pub mod search;
pub mod stats;
pub mod translate;
pub mod underclued;

use tracing::debug;

use crate::error::Result;
use crate::puzzle::Puzzle;
use crate::solver::{search::BacktrackingSearch, stats::SearchStats};

/// Solves a puzzle.
///
/// Returns the completed puzzle, or `None` when no valid colouring exists.
/// Puzzles declaring the `Underclued` rule are handled by the meta-solver,
/// which fixes only the cells forced in every valid completion and leaves
/// genuinely ambiguous cells gray.
///
/// # Errors
///
/// Fails when the puzzle carries a rule or symbol kind without a solver
/// module. Unsolvability is not an error; it is the `None` result.
pub fn solve(puzzle: &Puzzle) -> Result<(Option<Puzzle>, SearchStats)> {
    let mut stats = SearchStats::default();
    let solution = if puzzle.is_underclued() {
        underclued::solve_underclued(puzzle, &mut stats)?
    } else {
        solve_normal(puzzle, &mut stats)?
    };
    debug!(
        solved = solution.is_some(),
        nodes = stats.nodes,
        backtracks = stats.backtracks,
        "solve finished"
    );
    Ok((solution, stats))
}

/// One full core solve: translate, check every module against the whole
/// grid, search, translate back.
pub(crate) fn solve_normal(puzzle: &Puzzle, stats: &mut SearchStats) -> Result<Option<Puzzle>> {
    let (mut grid, modules) = translate::translate(puzzle)?;
    stats.solves += 1;

    if !BacktrackingSearch::new().run(&mut grid, &modules, stats) {
        return Ok(None);
    }
    Ok(Some(translate::merge_solution(puzzle, &grid)))
}
