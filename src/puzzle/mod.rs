//! The external puzzle model: tiles, merged-region connections, rules and
//! symbols. This is the boundary the editor layer speaks; the solver
//! translates it into its own representation and back.

pub mod connections;
pub mod grid;
pub mod primitives;
pub mod rules;
pub mod symbols;
pub mod tile;

pub use connections::Connections;
pub use grid::Puzzle;
pub use primitives::{Color, Direction, LotusAxis, Position, SymbolCenter};
pub use rules::{Pattern, Rule};
pub use symbols::{Symbol, SymbolKind};
pub use tile::Tile;
