use serde::{Deserialize, Serialize};

use crate::puzzle::primitives::Position;

/// Merge edges between tiles. Tiles joined by a chain of edges form one
/// merged region and must always share the same colour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connections {
    edges: Vec<(Position, Position)>,
}

impl Connections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Joins two tiles into the same merged region.
    pub fn connect(&mut self, a: Position, b: Position) {
        if a != b && !self.edges.contains(&(a, b)) && !self.edges.contains(&(b, a)) {
            self.edges.push((a, b));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Every position in the merged region containing `pos`, including `pos`
    /// itself. Membership is the transitive closure of the merge edges.
    pub fn connected_tiles(&self, pos: Position) -> Vec<Position> {
        let mut region = vec![pos];
        let mut frontier = vec![pos];

        while let Some(current) = frontier.pop() {
            for &(a, b) in &self.edges {
                let other = if a == current {
                    b
                } else if b == current {
                    a
                } else {
                    continue;
                };
                if !region.contains(&other) {
                    region.push(other);
                    frontier.push(other);
                }
            }
        }

        region
    }
}
