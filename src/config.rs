use std::time::Duration;

use crate::error::ConfigError;

// ============================================================================
// Configuration
// ============================================================================

pub const COLUMNS_BOARD_WIDTH: i32 = 7;
pub const COLUMNS_BOARD_HEIGHT: i32 = 13;
pub const FALLER_SIZE: usize = 3;

// Scoring
pub const THREE_FOLD_POINT_VALUE: u32 = 3;
pub const THREE_FOLD_STREAK: usize = 3;

// Timing (in milliseconds)
pub const DEFAULT_DROP_INTERVAL_MS: u64 = 1000;

/// Tunables for a single game. The defaults are the canonical Columns rules.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameConfig {
    pub board_width: i32,
    pub board_height: i32,
    pub point_value: u32,
    pub drop_interval_ms: u64,
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_width: COLUMNS_BOARD_WIDTH,
            board_height: COLUMNS_BOARD_HEIGHT,
            point_value: THREE_FOLD_POINT_VALUE,
            drop_interval_ms: DEFAULT_DROP_INTERVAL_MS,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_board_size(mut self, width: i32, height: i32) -> Self {
        self.board_width = width;
        self.board_height = height;
        self
    }

    pub fn with_point_value(mut self, point_value: u32) -> Self {
        self.point_value = point_value;
        self
    }

    pub fn with_drop_interval_ms(mut self, drop_interval_ms: u64) -> Self {
        self.drop_interval_ms = drop_interval_ms;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cadence at which the external scheduler should call `GameState::tick`.
    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_width < 1 {
            return Err(ConfigError::BoardTooNarrow {
                width: self.board_width,
            });
        }
        if self.board_height < FALLER_SIZE as i32 {
            return Err(ConfigError::BoardTooShort {
                height: self.board_height,
                minimum: FALLER_SIZE as i32,
            });
        }
        Ok(())
    }
}
