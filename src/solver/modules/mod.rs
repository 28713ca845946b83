//! One solver module per supported rule and symbol kind.

pub mod area_number;
pub mod ban_pattern;
pub mod connect_all;
pub mod dart;
pub mod direction_linker;
pub mod myopia;
pub mod region_area;
pub mod viewpoint;

pub use area_number::AreaNumberModule;
pub use ban_pattern::BanPatternModule;
pub use connect_all::ConnectAllModule;
pub use dart::DartModule;
pub use direction_linker::DirectionLinkerModule;
pub use myopia::MyopiaModule;
pub use region_area::RegionAreaModule;
pub use viewpoint::ViewpointModule;

use crate::puzzle::Position;
use crate::solver::grid::{SearchGrid, TileState};

/// Orthogonal flood fill from `starts` over cells accepted by `accept`.
/// Returns the visited positions; start positions that `accept` rejects are
/// skipped.
pub(crate) fn flood(
    grid: &SearchGrid,
    starts: &[Position],
    accept: impl Fn(TileState) -> bool,
) -> Vec<Position> {
    let mut seen = vec![false; grid.width() * grid.height()];
    let mut visited = Vec::new();
    let mut frontier = Vec::new();

    for &start in starts {
        let index = start.y * grid.width() + start.x;
        if !seen[index] && accept(grid.get(start)) {
            seen[index] = true;
            visited.push(start);
            frontier.push(start);
        }
    }

    while let Some(current) = frontier.pop() {
        for neighbor in grid.neighbors(current) {
            let index = neighbor.y * grid.width() + neighbor.x;
            if !seen[index] && accept(grid.get(neighbor)) {
                seen[index] = true;
                visited.push(neighbor);
                frontier.push(neighbor);
            }
        }
    }

    visited
}
