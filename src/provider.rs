use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::FALLER_SIZE;
use crate::faller::Faller;
use crate::tile::Color;

// ============================================================================
// Faller Provider Trait
// ============================================================================

pub trait FallerProvider {
    fn next_faller(&mut self, width: i32, staged_row: i32) -> Faller;
}

/// Random column and random colors for every faller.
pub struct RandomFallerProvider {
    rng: StdRng,
}

impl RandomFallerProvider {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomFallerProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl FallerProvider for RandomFallerProvider {
    fn next_faller(&mut self, width: i32, staged_row: i32) -> Faller {
        Faller::random(&mut self.rng, width, staged_row)
    }
}

/// Replays a fixed list of `(column, colors)` pairs, cycling when exhausted.
/// Columns wider than the board are clamped to its last column.
pub struct SequenceFallerProvider {
    fallers: Vec<(i32, [Color; FALLER_SIZE])>,
    index: usize,
}

impl SequenceFallerProvider {
    /// # Panics
    ///
    /// Panics if `fallers` is empty.
    pub fn new(fallers: Vec<(i32, [Color; FALLER_SIZE])>) -> Self {
        assert!(!fallers.is_empty(), "faller sequence must not be empty");
        Self { fallers, index: 0 }
    }
}

impl FallerProvider for SequenceFallerProvider {
    fn next_faller(&mut self, width: i32, staged_row: i32) -> Faller {
        let (column, colors) = self.fallers[self.index % self.fallers.len()];
        self.index += 1;
        Faller::new(column.clamp(1, width), colors, staged_row)
    }
}
