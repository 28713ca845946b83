//! Symbol-heavy and underclued puzzles: viewpoints, darts, symmetry and
//! per-cell certainty.

use crate::puzzle::{Color, Position, Puzzle, Rule, Symbol, SymbolCenter, Tile};

/// A row where one viewpoint pins down every cell.
pub fn pinned_row(width: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(width, 1);
    puzzle.set_tile(Position::new(0, 0), Tile::fixed(Color::Dark));
    puzzle.add_symbol(Symbol::Viewpoint {
        pos: Position::new(0, 0),
        count: width,
    });
    puzzle
}

/// A galaxy centered on the middle cell, with one arm already fixed.
pub fn half_galaxy(size: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(size, size);
    let mid = size / 2;
    puzzle.set_tile(Position::new(mid, mid), Tile::fixed(Color::Dark));
    puzzle.set_tile(Position::new(0, mid), Tile::fixed(Color::Dark));
    puzzle.add_symbol(Symbol::Galaxy {
        center: SymbolCenter::at_cell(mid, mid),
    });
    puzzle
}

/// Two interchangeable cells under a rule that never tells them apart.
pub fn symmetric_pair() -> Puzzle {
    let mut puzzle = Puzzle::new(2, 1);
    puzzle.add_rule(Rule::RegionArea {
        color: Color::Dark,
        size: 1,
    });
    puzzle.add_rule(Rule::Underclued);
    puzzle
}
