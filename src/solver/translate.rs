//! Maps the external puzzle model into the solver grid and module list, and
//! copies solved colours back out.

use crate::error::{Result, TranslationError};
use crate::puzzle::{Color, Puzzle, Rule, Symbol, SymbolKind};
use crate::solver::{
    grid::{SearchGrid, TileState},
    module::SolverModule,
    modules::{
        AreaNumberModule, BanPatternModule, ConnectAllModule, DartModule,
        DirectionLinkerModule, MyopiaModule, RegionAreaModule, ViewpointModule,
    },
};

fn rule_color(rule: &Rule, color: Color) -> Result<TileState> {
    match color {
        Color::Dark => Ok(TileState::Dark),
        Color::Light => Ok(TileState::Light),
        Color::Gray => Err(TranslationError::GrayRuleColor(rule.name()).into()),
    }
}

/// Builds the solver grid and one module per rule and symbol instance.
///
/// Every kind must map to a supported module; an unsupported kind fails the
/// whole solve attempt. The `Underclued` rule is skipped here — it selects
/// the meta-solver and contributes no grid constraint.
pub fn translate(puzzle: &Puzzle) -> Result<(SearchGrid, Vec<Box<dyn SolverModule>>)> {
    let mut tiles = Vec::with_capacity(puzzle.width() * puzzle.height());
    let mut regions = Vec::with_capacity(puzzle.width() * puzzle.height());
    for pos in puzzle.positions() {
        let tile = puzzle.tile(pos);
        tiles.push(if !tile.exists {
            TileState::NonExistent
        } else {
            match tile.color {
                Color::Dark => TileState::Dark,
                Color::Light => TileState::Light,
                Color::Gray => TileState::Empty,
            }
        });
        regions.push(puzzle.connections.connected_tiles(pos));
    }
    let grid = SearchGrid::new(puzzle.width(), puzzle.height(), tiles, regions);

    let mut modules: Vec<Box<dyn SolverModule>> = Vec::new();

    for (kind, symbols) in puzzle.symbols() {
        for symbol in symbols {
            let module: Box<dyn SolverModule> = match symbol {
                Symbol::AreaNumber { pos, count } => {
                    Box::new(AreaNumberModule::new(*pos, *count))
                }
                Symbol::Viewpoint { pos, count } => {
                    Box::new(ViewpointModule::new(*pos, *count))
                }
                Symbol::Dart {
                    pos,
                    direction,
                    count,
                } => Box::new(DartModule::new(*pos, *direction, *count)),
                Symbol::Galaxy { center } => Box::new(DirectionLinkerModule::galaxy(*center)),
                Symbol::Lotus { center, axis } => {
                    Box::new(DirectionLinkerModule::lotus(*center, *axis))
                }
                Symbol::Myopia { pos, directions } => {
                    Box::new(MyopiaModule::new(*pos, directions.clone()))
                }
                Symbol::Letter { .. } => {
                    return Err(TranslationError::UnsupportedSymbol(kind).into());
                }
            };
            modules.push(module);
        }
    }

    for rule in &puzzle.rules {
        let module: Box<dyn SolverModule> = match rule {
            Rule::ConnectAll { color } => {
                Box::new(ConnectAllModule::new(rule_color(rule, *color)?))
            }
            Rule::RegionArea { color, size } => {
                Box::new(RegionAreaModule::new(rule_color(rule, *color)?, *size))
            }
            Rule::BanPattern { pattern } => Box::new(BanPatternModule::new(pattern)),
            Rule::Underclued => continue,
            Rule::CustomText { .. } => {
                return Err(TranslationError::UnsupportedRule(rule.name().into()).into());
            }
        };
        modules.push(module);
    }

    Ok((grid, modules))
}

/// Copies the solved colours back onto the puzzle. Only tiles that were
/// existing, unfixed and still gray are replaced; everything else passes
/// through unchanged.
pub fn merge_solution(puzzle: &Puzzle, grid: &SearchGrid) -> Puzzle {
    let mut solved = puzzle.clone();
    for pos in puzzle.positions() {
        let tile = puzzle.tile(pos);
        if !tile.exists || tile.fixed || tile.color != Color::Gray {
            continue;
        }
        let color = if grid.get(pos) == TileState::Dark {
            Color::Dark
        } else {
            Color::Light
        };
        solved.set_tile(pos, tile.with_color(color));
    }
    solved
}
