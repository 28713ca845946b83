//! Shared coordinate and colour primitives for the puzzle model.

use serde::{Deserialize, Serialize};

/// A grid coordinate. `x` is the column and `y` the row; `(0, 0)` is the
/// top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// The colour of a tile. `Gray` means not yet determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Gray,
    Dark,
    Light,
}

/// One of the four orthogonal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` step this direction takes in grid coordinates.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The mirror axis of a lotus symbol, running through the symbol's center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LotusAxis {
    Vertical,
    Horizontal,
    /// Rising diagonal, like `/`.
    DiagonalUp,
    /// Falling diagonal, like `\`.
    DiagonalDown,
}

/// The anchor point of a symmetry symbol, stored at double resolution so it
/// can sit on a cell center (even coordinates) or on a cell border (odd
/// coordinates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SymbolCenter {
    pub x2: i64,
    pub y2: i64,
}

impl SymbolCenter {
    /// A center aligned with the middle of the cell at `(x, y)`.
    pub fn at_cell(x: usize, y: usize) -> Self {
        Self {
            x2: 2 * x as i64,
            y2: 2 * y as i64,
        }
    }

    /// A center at an arbitrary half-cell coordinate.
    pub fn from_doubled(x2: i64, y2: i64) -> Self {
        Self { x2, y2 }
    }

    /// The cell containing (or immediately up-left of) the center.
    pub fn anchor_cell(self) -> (i64, i64) {
        (self.x2.div_euclid(2), self.y2.div_euclid(2))
    }
}
