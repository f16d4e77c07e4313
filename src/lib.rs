//! Rule engine for Columns, the falling-block tile-matching game.
//!
//! A three-tile [`Faller`] spawns above the board, descends one row per
//! [`GameState::tick`], and can be shifted sideways or rotated in place. Once it can no
//! longer fall it is committed to the board, every three-in-a-row in any of eight
//! directions is cleared and scored, and the remaining tiles collapse under gravity.
//!
//! Timing, input and rendering belong to the caller: drive `tick` at
//! [`GameConfig::drop_interval`] and forward player commands between ticks.

pub mod board;
pub mod config;
pub mod error;
pub mod faller;
pub mod game;
pub mod matching;
pub mod movement;
pub mod provider;
pub mod scoring;
pub mod tile;

pub use board::Board;
pub use config::GameConfig;
pub use error::{ConfigError, RuleError};
pub use faller::Faller;
pub use game::{GameEvent, GameState, PlayerId, TickOutcome};
pub use matching::{MatchFound, MatchRule, ScanDelta};
pub use movement::{FallerMovement, TileMovement};
pub use provider::{FallerProvider, RandomFallerProvider, SequenceFallerProvider};
pub use scoring::Scoring;
pub use tile::{Cell, Color, NullTile, Position, Tile, TileShape};
