use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::puzzle::{
    connections::Connections,
    primitives::{Color, Position},
    rules::Rule,
    symbols::{Symbol, SymbolKind},
    tile::Tile,
};

/// The external puzzle: a grid of tiles plus the rules and symbols that
/// constrain it.
///
/// This is the structure the editor layer hands to [`crate::solver::solve`]
/// and receives back with undetermined tiles filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    pub connections: Connections,
    pub rules: Vec<Rule>,
    symbols: BTreeMap<SymbolKind, Vec<Symbol>>,
}

impl Puzzle {
    /// An all-gray puzzle of the given dimensions, with no rules or symbols.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::gray(); width * height],
            connections: Connections::new(),
            rules: Vec::new(),
            symbols: BTreeMap::new(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid bounds.
    pub fn tile(&self, pos: Position) -> Tile {
        assert!(pos.x < self.width && pos.y < self.height, "{pos:?} is out of bounds");
        self.tiles[pos.y * self.width + pos.x]
    }

    /// Replaces the tile at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` lies outside the grid bounds.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) {
        assert!(pos.x < self.width && pos.y < self.height, "{pos:?} is out of bounds");
        self.tiles[pos.y * self.width + pos.x] = tile;
    }

    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Registers a symbol under its kind, preserving insertion order within
    /// the kind.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.entry(symbol.kind()).or_default().push(symbol);
    }

    /// Symbol instances grouped by kind, in kind order.
    pub fn symbols(&self) -> impl Iterator<Item = (SymbolKind, &[Symbol])> {
        self.symbols
            .iter()
            .map(|(kind, list)| (*kind, list.as_slice()))
    }

    /// All grid positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| Position::new(x, y)))
    }

    /// Whether the puzzle declares itself underclued.
    pub fn is_underclued(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Underclued))
    }

    /// Whether any existing, unfixed tile is still gray.
    pub fn has_undetermined_tiles(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.exists && !tile.fixed && tile.color == Color::Gray)
    }
}
