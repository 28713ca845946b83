//! The solver's internal grid: a mutable tile-state array plus the
//! precomputed merged-region table.

use crate::puzzle::{Direction, Position};

/// The state of one cell as the search sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Outside the puzzle shape. Never transitions.
    NonExistent,
    /// Not yet determined.
    Empty,
    Dark,
    Light,
}

impl TileState {
    pub fn is_colored(self) -> bool {
        matches!(self, TileState::Dark | TileState::Light)
    }

    /// The other colour.
    ///
    /// # Panics
    ///
    /// Panics when called on `Empty` or `NonExistent`.
    pub fn opposite(self) -> TileState {
        match self {
            TileState::Dark => TileState::Light,
            TileState::Light => TileState::Dark,
            other => panic!("{other:?} has no opposite colour"),
        }
    }
}

/// The grid a single in-flight search owns and mutates.
///
/// Assignments always colour an entire merged region at once, and the search
/// undoes them by resetting the same region to `Empty`, so between top-level
/// calls a merged region is never observed with mixed colours.
#[derive(Debug, Clone)]
pub struct SearchGrid {
    width: usize,
    height: usize,
    tiles: Vec<TileState>,
    /// Per-position merged region, including the position itself.
    regions: Vec<Vec<Position>>,
}

impl SearchGrid {
    /// # Panics
    ///
    /// Panics when the tile or region tables do not cover `width * height`
    /// cells.
    pub fn new(
        width: usize,
        height: usize,
        tiles: Vec<TileState>,
        regions: Vec<Vec<Position>>,
    ) -> Self {
        assert_eq!(tiles.len(), width * height);
        assert_eq!(regions.len(), width * height);
        Self {
            width,
            height,
            tiles,
            regions,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.x < self.width && pos.y < self.height);
        pos.y * self.width + pos.x
    }

    pub fn get(&self, pos: Position) -> TileState {
        self.tiles[self.index(pos)]
    }

    /// Whether the signed coordinates name a cell inside the grid bounds.
    pub fn in_bounds(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Whether `pos` is part of the puzzle shape.
    pub fn exists(&self, pos: Position) -> bool {
        self.get(pos) != TileState::NonExistent
    }

    /// The merged region containing `pos`, including `pos` itself.
    pub fn region(&self, pos: Position) -> &[Position] {
        &self.regions[pos.y * self.width + pos.x]
    }

    /// Colours every position of the merged region containing `pos` at once.
    pub fn set_region(&mut self, pos: Position, state: TileState) {
        let width = self.width;
        let index = pos.y * width + pos.x;
        for i in 0..self.regions[index].len() {
            let member = self.regions[index][i];
            self.tiles[member.y * width + member.x] = state;
        }
    }

    /// The in-bounds cell one step in `dir` from `pos`, if any.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dx, dy) = dir.offset();
        let x = pos.x as i64 + dx;
        let y = pos.y as i64 + dy;
        self.in_bounds(x, y)
            .then(|| Position::new(x as usize, y as usize))
    }

    /// The in-bounds orthogonal neighbours of `pos`.
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    /// All grid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }
}
