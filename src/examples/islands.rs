//! Connectivity and area flavoured puzzles: connect-all, region-area,
//! ban-pattern and area-number working together.

use crate::puzzle::{Color, Pattern, Position, Puzzle, Rule, Symbol, Tile};

/// An all-gray grid whose dark cells must form one connected group.
pub fn connected_darkness(width: usize, height: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(width, height);
    puzzle.add_rule(Rule::ConnectAll { color: Color::Dark });
    puzzle
}

/// Two fixed dark corners that must be joined without ever forming a 2x2
/// dark block.
pub fn corridor(width: usize, height: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(width, height);
    puzzle.set_tile(Position::new(0, 0), Tile::fixed(Color::Dark));
    puzzle.set_tile(
        Position::new(width - 1, height - 1),
        Tile::fixed(Color::Dark),
    );
    puzzle.add_rule(Rule::ConnectAll { color: Color::Dark });
    puzzle.add_rule(Rule::BanPattern {
        pattern: Pattern::block(2, 2, Color::Dark),
    });
    puzzle
}

/// Dark islands of exactly `island_size` cells in a connected light sea,
/// seeded by one area-number symbol.
pub fn islands(width: usize, height: usize, island_size: usize) -> Puzzle {
    let mut puzzle = Puzzle::new(width, height);
    puzzle.set_tile(Position::new(0, 0), Tile::fixed(Color::Dark));
    puzzle.add_rule(Rule::RegionArea {
        color: Color::Dark,
        size: island_size,
    });
    puzzle.add_rule(Rule::ConnectAll {
        color: Color::Light,
    });
    puzzle.add_symbol(Symbol::AreaNumber {
        pos: Position::new(0, 0),
        count: island_size,
    });
    puzzle
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::examples::test_support::{assert_sound, components};
    use crate::puzzle::Connections;
    use crate::solver::solve;

    #[test]
    fn dark_cells_end_up_connected() {
        let (solution, _) = solve(&connected_darkness(3, 3)).unwrap();
        let solution = solution.expect("an unconstrained grid is solvable");

        assert!(solution
            .positions()
            .all(|pos| solution.tile(pos).color != Color::Gray));
        // All-light is acceptable; otherwise the dark cells form one group.
        assert!(components(&solution, Color::Dark).len() <= 1);
        assert_sound(&solution);
    }

    #[test]
    fn corridor_avoids_the_banned_block() {
        let (solution, _) = solve(&corridor(4, 4)).unwrap();
        let solution = solution.expect("the corners can be joined");

        assert_eq!(components(&solution, Color::Dark).len(), 1);
        for y in 0..3 {
            for x in 0..3 {
                let block_is_dark = [(0, 0), (1, 0), (0, 1), (1, 1)].iter().all(|&(dx, dy)| {
                    solution.tile(Position::new(x + dx, y + dy)).color == Color::Dark
                });
                assert!(!block_is_dark, "2x2 dark block at ({x}, {y})");
            }
        }
        assert_sound(&solution);
    }

    #[test]
    fn islands_have_the_requested_size() {
        let (solution, _) = solve(&islands(4, 4, 2)).unwrap();
        let solution = solution.expect("islands puzzle is solvable");

        for component in components(&solution, Color::Dark) {
            assert_eq!(component.len(), 2);
        }
        assert_eq!(components(&solution, Color::Light).len(), 1);
        assert_sound(&solution);
    }

    #[test]
    fn already_decided_puzzles_round_trip_unchanged() {
        let mut puzzle = Puzzle::new(2, 2);
        for pos in [Position::new(0, 0), Position::new(1, 1)] {
            puzzle.set_tile(pos, Tile::fixed(Color::Dark));
        }
        for pos in [Position::new(1, 0), Position::new(0, 1)] {
            puzzle.set_tile(pos, Tile::fixed(Color::Light));
        }

        let (solution, stats) = solve(&puzzle).unwrap();
        assert_eq!(solution.unwrap(), puzzle);
        // Nothing was left to branch on.
        assert_eq!(stats.nodes, 0);
    }

    #[test]
    fn merged_regions_share_one_colour() {
        let mut puzzle = connected_darkness(3, 3);
        let mut connections = Connections::new();
        connections.connect(Position::new(0, 0), Position::new(2, 2));
        connections.connect(Position::new(2, 2), Position::new(2, 0));
        puzzle.connections = connections;
        puzzle.set_tile(Position::new(1, 1), Tile::fixed(Color::Dark));

        let (solution, _) = solve(&puzzle).unwrap();
        let solution = solution.expect("merged grid is solvable");
        let merged = [
            Position::new(0, 0),
            Position::new(2, 2),
            Position::new(2, 0),
        ];
        let colors: Vec<Color> = merged.iter().map(|&p| solution.tile(p).color).collect();
        assert!(colors.windows(2).all(|pair| pair[0] == pair[1]));
        assert_sound(&solution);
    }

    mod prop_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn solutions_satisfy_every_module(
                seeds in proptest::collection::vec((0..4usize, 0..4usize), 0..4),
                island_size in 1..3usize,
            ) {
                let mut puzzle = islands(4, 4, island_size);
                for (x, y) in seeds {
                    puzzle.set_tile(Position::new(x, y), Tile::fixed(Color::Dark));
                }

                let (solution, _) = solve(&puzzle).unwrap();
                if let Some(solution) = solution {
                    for component in components(&solution, Color::Dark) {
                        prop_assert_eq!(component.len(), island_size);
                    }
                    assert_sound(&solution);
                }
            }

            #[test]
            fn solving_leaves_the_input_untouched(
                seeds in proptest::collection::vec((0..3usize, 0..3usize), 0..3),
            ) {
                let mut puzzle = corridor(3, 3);
                for (x, y) in seeds {
                    puzzle.set_tile(Position::new(x, y), Tile::fixed(Color::Dark));
                }
                let snapshot = puzzle.clone();
                let _ = solve(&puzzle).unwrap();
                prop_assert_eq!(puzzle, snapshot);
            }
        }
    }
}
