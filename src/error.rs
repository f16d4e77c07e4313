//! Error types for board queries and tile movement.
//!
//! Both [`RuleError`] variants are recoverable: movement rules catch them, restore the
//! pre-move positions and report failure as `false`.

use derive_more::{Display, Error};

/// Failure raised while querying the board or attempting a movement.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RuleError {
    /// The coordinate lies outside `[1, width] x [1, height]`.
    #[display("Invalid board position ({x}, {y})")]
    InvalidBoardPosition { x: i32, y: i32 },

    /// The requested transformation has no legal effect.
    #[display("Illegal tile movement: {reason}")]
    IllegalTileMovement { reason: String },
}

impl RuleError {
    pub fn illegal(reason: impl Into<String>) -> Self {
        Self::IllegalTileMovement {
            reason: reason.into(),
        }
    }
}

/// A [`GameConfig`](crate::config::GameConfig) that cannot host a game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    #[display("Board width {width} must be at least 1")]
    BoardTooNarrow { width: i32 },

    #[display("Board height {height} must be at least {minimum}")]
    BoardTooShort { height: i32, minimum: i32 },
}
