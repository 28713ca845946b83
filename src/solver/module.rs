//! The uniform contract every rule and symbol constraint implements.

use crate::puzzle::Position;
use crate::solver::{grid::SearchGrid, mask::WatchMask};

/// Human-readable identification of a module, for stats rendering.
#[derive(Debug, Clone)]
pub struct ModuleDescriptor {
    pub name: String,
    pub description: String,
}

/// A heuristic score a module assigns to one position. Scores from all
/// modules are summed per position to pick the next cell to branch on; they
/// bias search order and never prove feasibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub pos: Position,
    pub score: u32,
}

/// What a successful check hands back to the search driver.
#[derive(Debug)]
pub struct CheckSummary {
    /// Positions whose change requires this module to re-run its incremental
    /// check. `None` means "always re-check".
    pub watch: Option<WatchMask>,
    /// Fresh heuristic scores, replacing the module's previous ones.
    pub ratings: Vec<Rating>,
}

/// Outcome of a whole-grid check, run once per module at the solve root.
#[derive(Debug)]
pub enum GlobalCheck {
    /// The constraint is already violated; the puzzle is unsolvable and the
    /// search is never entered.
    Infeasible,
    Feasible(CheckSummary),
}

/// Outcome of an incremental check after one region assignment.
#[derive(Debug)]
pub enum LocalCheck {
    /// The assignment breaks this constraint; the branch must be rejected.
    Violated,
    /// Still satisfied; the previously stored watch mask and ratings remain
    /// valid.
    Unchanged,
    /// Still locally satisfiable, with a replacement watch mask and ratings.
    Updated(CheckSummary),
}

/// A solver module: the adapter one rule or symbol instance contributes.
///
/// Modules read tile states and connectivity but never mutate the grid, and
/// they must be cheap relative to search depth — no module runs a sub-search
/// of its own.
pub trait SolverModule: std::fmt::Debug {
    fn descriptor(&self) -> ModuleDescriptor;

    fn check_global(&self, grid: &SearchGrid) -> GlobalCheck;

    /// `changed` is the full merged region coloured by the latest
    /// assignment, not a single cell.
    fn check_local(&self, grid: &SearchGrid, changed: &[Position]) -> LocalCheck;
}
