use crate::puzzle::Position;

/// A dense word-packed boolean grid, used by modules to record which
/// positions require a re-check when they change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchMask {
    width: usize,
    height: usize,
    words: Vec<u64>,
}

impl WatchMask {
    /// An all-unset mask covering a `width` x `height` grid.
    pub fn new(width: usize, height: usize) -> Self {
        let bits = width * height;
        Self {
            width,
            height,
            words: vec![0; bits.div_ceil(64)],
        }
    }

    fn bit(&self, pos: Position) -> Option<(usize, u64)> {
        if pos.x >= self.width || pos.y >= self.height {
            return None;
        }
        let index = pos.y * self.width + pos.x;
        Some((index / 64, 1 << (index % 64)))
    }

    /// Whether `pos` is set. Out-of-bounds positions read as unset.
    pub fn get(&self, pos: Position) -> bool {
        match self.bit(pos) {
            Some((word, mask)) => self.words[word] & mask != 0,
            None => false,
        }
    }

    /// Sets `pos`. Out-of-bounds positions are ignored.
    pub fn set(&mut self, pos: Position) {
        if let Some((word, mask)) = self.bit(pos) {
            self.words[word] |= mask;
        }
    }

    /// Builds a mask with every listed position set.
    pub fn from_positions(
        width: usize,
        height: usize,
        positions: impl IntoIterator<Item = Position>,
    ) -> Self {
        let mut mask = Self::new(width, height);
        for pos in positions {
            mask.set(pos);
        }
        mask
    }
}
