//! Per-cell symbol constraints a puzzle may carry.

use serde::{Deserialize, Serialize};

use crate::puzzle::primitives::{Direction, LotusAxis, Position, SymbolCenter};

/// Stable identity of a symbol kind, used to group instances and to match
/// them to solver modules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SymbolKind {
    AreaNumber,
    Viewpoint,
    Dart,
    Galaxy,
    Lotus,
    Myopia,
    Letter,
}

/// A symbol instance placed on the grid.
///
/// `Letter` is a display-only annotation with no solver module; puzzles
/// carrying one cannot be solved by this engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Symbol {
    /// The same-coloured orthogonally connected group containing `pos` must
    /// have exactly `count` cells.
    AreaNumber { pos: Position, count: usize },
    /// Exactly `count` cells of the marked cell's colour are visible from
    /// `pos` along the four orthogonal directions, counting `pos` itself.
    Viewpoint { pos: Position, count: usize },
    /// Exactly `count` cells of the opposite colour lie in `direction` from
    /// `pos`.
    Dart {
        pos: Position,
        direction: Direction,
        count: usize,
    },
    /// The same-coloured group containing the center is symmetric under a
    /// point reflection through `center`.
    Galaxy { center: SymbolCenter },
    /// The same-coloured group containing the center is symmetric under a
    /// mirror reflection in `axis` through `center`.
    Lotus {
        center: SymbolCenter,
        axis: LotusAxis,
    },
    /// Arrows point towards all nearest opposite-coloured cells, and only
    /// towards those. An empty arrow list means no opposite-coloured cell is
    /// orthogonally visible at all.
    Myopia {
        pos: Position,
        directions: Vec<Direction>,
    },
    /// A display-only letter annotation.
    Letter { pos: Position, letter: char },
}

impl Symbol {
    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::AreaNumber { .. } => SymbolKind::AreaNumber,
            Symbol::Viewpoint { .. } => SymbolKind::Viewpoint,
            Symbol::Dart { .. } => SymbolKind::Dart,
            Symbol::Galaxy { .. } => SymbolKind::Galaxy,
            Symbol::Lotus { .. } => SymbolKind::Lotus,
            Symbol::Myopia { .. } => SymbolKind::Myopia,
            Symbol::Letter { .. } => SymbolKind::Letter,
        }
    }
}
