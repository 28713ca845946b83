//! Chiaro is a solver for grid logic puzzles whose cells are coloured dark
//! or light, optionally merged into regions that share one colour, and
//! constrained by pluggable rules and symbols.
//!
//! The engine is a backtracking search with incremental constraint
//! propagation. Each rule or symbol instance contributes a *module*: a
//! uniform adapter exposing a whole-grid feasibility check and a cheap
//! incremental re-check, together with a watch mask (which changed cells
//! make a re-check necessary) and heuristic ratings (which cell the search
//! should branch on next).
//!
//! # Core Concepts
//!
//! - **[`puzzle::Puzzle`]**: the external model — tiles, merged-region
//!   connections, rules and symbols.
//! - **[`solver::module::SolverModule`]**: the contract every constraint
//!   implements; translation builds one module per rule and symbol instance.
//! - **[`solver::solve`]**: translates the puzzle, runs the search and
//!   copies the solved colours back. Puzzles declaring the `Underclued`
//!   rule are solved for per-cell certainty instead of one arbitrary
//!   solution.
//!
//! # Example
//!
//! ```
//! use chiaro::puzzle::{Color, Position, Puzzle, Rule, Tile};
//! use chiaro::solver;
//!
//! let mut puzzle = Puzzle::new(3, 3);
//! puzzle.set_tile(Position::new(0, 0), Tile::fixed(Color::Dark));
//! puzzle.set_tile(Position::new(2, 2), Tile::fixed(Color::Dark));
//! puzzle.add_rule(Rule::ConnectAll { color: Color::Dark });
//!
//! let (solution, _stats) = solver::solve(&puzzle).unwrap();
//! let solution = solution.unwrap();
//!
//! // Every cell is decided, and the two dark corners are joined up.
//! assert!(solution
//!     .positions()
//!     .all(|pos| solution.tile(pos).color != Color::Gray));
//! ```

pub mod error;
pub mod examples;
pub mod puzzle;
pub mod solver;
