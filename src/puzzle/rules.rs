//! Grid-wide rules a puzzle may declare.

use serde::{Deserialize, Serialize};

use crate::puzzle::primitives::{Color, Position};

/// A local arrangement of colours, anchored at its top-left corner.
///
/// `Gray` cells act as wildcards that match any already-coloured tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    cells: Vec<(Position, Color)>,
}

impl Pattern {
    /// Builds a pattern from cell offsets, normalising it so the smallest
    /// offsets become zero.
    pub fn new(cells: impl IntoIterator<Item = (Position, Color)>) -> Self {
        let raw: Vec<(i64, i64, Color)> = cells
            .into_iter()
            .map(|(pos, color)| (pos.x as i64, pos.y as i64, color))
            .collect();
        Self {
            cells: normalise(raw),
        }
    }

    /// A solid `width` x `height` block of a single colour.
    pub fn block(width: usize, height: usize, color: Color) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push((Position::new(x, y), color));
            }
        }
        Self::new(cells)
    }

    pub fn cells(&self) -> &[(Position, Color)] {
        &self.cells
    }

    /// All distinct orientations of this pattern: four rotations of both the
    /// pattern and its mirror image.
    pub fn orientations(&self) -> Vec<Pattern> {
        let mut variants: Vec<Pattern> = Vec::new();

        for mirror in [false, true] {
            let mut cells: Vec<(i64, i64, Color)> = self
                .cells
                .iter()
                .map(|&(pos, color)| {
                    let x = pos.x as i64;
                    (if mirror { -x } else { x }, pos.y as i64, color)
                })
                .collect();

            for _ in 0..4 {
                let candidate = Pattern {
                    cells: normalise(cells.clone()),
                };
                if !variants.contains(&candidate) {
                    variants.push(candidate);
                }
                // Quarter turn: (x, y) -> (-y, x).
                cells = cells.iter().map(|&(x, y, c)| (-y, x, c)).collect();
            }
        }

        variants
    }
}

fn normalise(cells: Vec<(i64, i64, Color)>) -> Vec<(Position, Color)> {
    let min_x = cells.iter().map(|&(x, _, _)| x).min().unwrap_or(0);
    let min_y = cells.iter().map(|&(_, y, _)| y).min().unwrap_or(0);
    let mut shifted: Vec<(Position, Color)> = cells
        .into_iter()
        .map(|(x, y, color)| {
            (
                Position::new((x - min_x) as usize, (y - min_y) as usize),
                color,
            )
        })
        .collect();
    shifted.sort();
    shifted
}

/// A rule instance attached to a puzzle.
///
/// `Underclued` changes how the puzzle is solved rather than constraining the
/// grid directly; `CustomText` is display-only and has no solver module, so a
/// solve attempt on a puzzle carrying it fails at translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// All cells of `color` must form one orthogonally connected group.
    ConnectAll { color: Color },
    /// Every orthogonally connected group of `color` must contain exactly
    /// `size` cells.
    RegionArea { color: Color, size: usize },
    /// The pattern must not appear anywhere in the grid, in any orientation.
    BanPattern { pattern: Pattern },
    /// The puzzle accepts any completion consistent with its rules; solving
    /// determines per-cell certainty instead of one arbitrary solution.
    Underclued,
    /// Free-form instructions for the human solver.
    CustomText { description: String },
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::ConnectAll { .. } => "connect-all",
            Rule::RegionArea { .. } => "region-area",
            Rule::BanPattern { .. } => "ban-pattern",
            Rule::Underclued => "underclued",
            Rule::CustomText { .. } => "custom-text",
        }
    }
}
