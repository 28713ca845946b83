use serde::{Deserialize, Serialize};

use crate::puzzle::primitives::Color;

/// One cell of the external puzzle grid.
///
/// A non-existing tile is a hole in the puzzle shape. A fixed tile was
/// coloured by the puzzle author and is never touched by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub exists: bool,
    pub fixed: bool,
    pub color: Color,
}

impl Tile {
    /// An existing, unfixed, undetermined tile.
    pub fn gray() -> Self {
        Self {
            exists: true,
            fixed: false,
            color: Color::Gray,
        }
    }

    /// An existing tile pre-coloured by the puzzle author.
    pub fn fixed(color: Color) -> Self {
        Self {
            exists: true,
            fixed: true,
            color,
        }
    }

    /// A hole in the puzzle shape.
    pub fn nonexistent() -> Self {
        Self {
            exists: false,
            fixed: false,
            color: Color::Gray,
        }
    }

    /// The same tile with a different colour.
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::gray()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_color_preserves_flags() {
        let tile = Tile::fixed(Color::Dark).with_color(Color::Light);
        assert!(tile.exists);
        assert!(tile.fixed);
        assert_eq!(tile.color, Color::Light);
    }
}
