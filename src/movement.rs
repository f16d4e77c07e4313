//! Movement rules for single tiles and fallers.
//!
//! Every rule follows the same protocol: capture the origin positions, `apply` the
//! transformation to the member positions, then either commit (null the origins, place the
//! members at their new positions) or revert to the captured origins. A failed attempt
//! leaves the board untouched and is reported as `false`, never as an error.

use tracing::{debug, warn};

use crate::board::Board;
use crate::error::RuleError;
use crate::faller::Faller;
use crate::tile::{Cell, Position, Tile};

/// Runs after a faller movement whether or not it succeeded.
pub type AfterMove = fn(&mut Board, &Faller);

// ============================================================================
// Shared commit step
// ============================================================================

/// Nulls every on-board origin, then writes each on-board member into its slot.
/// Positions must already be validated by the movement's `apply`.
fn seat(board: &mut Board, origins: &[Position], members: &[Tile]) {
    for &origin in origins {
        if board.is_staged(origin) {
            continue;
        }
        debug!(x = origin.x, y = origin.y, "marking slot with a null tile");
        let cleared = board.clear_slot(origin);
        debug_assert!(cleared.is_ok(), "origin {origin:?} was off the board");
    }
    for tile in members {
        if board.is_staged(tile.position) {
            continue;
        }
        let placed = board.place_tile(*tile);
        debug_assert!(placed.is_ok(), "destination {:?} was not validated", tile.position);
    }
}

/// Re-places every faller member onto the board at its current position.
pub fn resit_faller(board: &mut Board, faller: &Faller) {
    for tile in faller.members() {
        if !board.is_staged(tile.position) {
            let placed = board.place_tile(*tile);
            debug_assert!(placed.is_ok(), "member {tile:?} was off the board");
        }
    }
}

// ============================================================================
// Tile movements
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TileMovement {
    /// One row down. The caller checks that the destination is free.
    SingleStepDescent,
    /// Straight down to the lowest free row beneath the tile.
    AbsoluteDescent,
}

impl TileMovement {
    /// Computes the destination of `tile` without touching the board.
    pub fn apply(&self, board: &Board, tile: &Tile) -> Result<Position, RuleError> {
        match self {
            TileMovement::SingleStepDescent => {
                let destination = tile.position.offset(0, -1);
                if !board.is_staged(destination)
                    && !board.in_bounds(destination.x, destination.y)
                {
                    return Err(RuleError::InvalidBoardPosition {
                        x: destination.x,
                        y: destination.y,
                    });
                }
                Ok(destination)
            }
            TileMovement::AbsoluteDescent => {
                let Position { x, y: start } = tile.position;
                board.tile_at(x, start)?;

                let mut y = start;
                while y > 1 && board.is_null_at(x, y - 1)? {
                    y -= 1;
                }
                if y == start {
                    return Err(RuleError::illegal(format!(
                        "tile at ({x}, {start}) is already resting"
                    )));
                }
                Ok(Position::new(x, y))
            }
        }
    }

    /// Moves `tile` and updates the board. Returns `false` and leaves both untouched when
    /// the movement is illegal.
    pub fn perform(&self, board: &mut Board, tile: &mut Tile) -> bool {
        let origin = tile.position;
        match self.apply(board, tile) {
            Ok(destination) => {
                tile.position = destination;
                seat(board, &[origin], &[*tile]);
                debug!(
                    movement = ?self,
                    from = ?origin,
                    to = ?destination,
                    "tile moved"
                );
                true
            }
            Err(err) => {
                debug!(movement = ?self, %err, "could not move tile, reverting");
                tile.position = origin;
                false
            }
        }
    }

    /// Moves whatever tile occupies `(x, y)`. Null tiles and empty coordinates are refused.
    pub fn perform_at(&self, board: &mut Board, x: i32, y: i32) -> bool {
        let mut tile = match board.tile_at(x, y) {
            Ok(Cell::Tile(tile)) => *tile,
            Ok(Cell::Null(_)) => {
                debug!(x, y, "no tile to move");
                return false;
            }
            Err(err) => {
                debug!(%err, "no tile to move");
                return false;
            }
        };
        self.perform(board, &mut tile)
    }
}

// ============================================================================
// Faller movements
// ============================================================================

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FallerMovement {
    ShiftLeft,
    ShiftRight,
    /// Bottom member goes to the top, the others drop one slot.
    ShuffleUp,
    /// Top member goes to the bottom, the others rise one slot.
    ShuffleDown,
    /// Single-step descent of every member, lowest first.
    Descend,
}

impl FallerMovement {
    pub fn after(&self) -> Option<AfterMove> {
        match self {
            FallerMovement::ShuffleUp | FallerMovement::ShuffleDown => Some(resit_faller),
            _ => None,
        }
    }

    /// Rewrites the member positions of `faller`. On error the positions may be
    /// half-updated; [`perform`](Self::perform) restores them.
    pub fn apply(&self, board: &Board, faller: &mut Faller) -> Result<(), RuleError> {
        match self {
            FallerMovement::ShiftLeft => shift(board, faller, -1),
            FallerMovement::ShiftRight => shift(board, faller, 1),
            FallerMovement::ShuffleUp => {
                let positions = faller.positions();
                faller.members.rotate_left(1);
                faller.set_positions(positions);
                Ok(())
            }
            FallerMovement::ShuffleDown => {
                let positions = faller.positions();
                faller.members.rotate_right(1);
                faller.set_positions(positions);
                Ok(())
            }
            FallerMovement::Descend => {
                let below = faller.lowest().position.offset(0, -1);
                if !board.is_staged(below) && !board.is_null_at(below.x, below.y)? {
                    return Err(RuleError::illegal(format!(
                        "slot ({}, {}) below the faller is occupied",
                        below.x, below.y
                    )));
                }
                for tile in faller.members.iter_mut() {
                    tile.position = TileMovement::SingleStepDescent.apply(board, tile)?;
                }
                Ok(())
            }
        }
    }

    pub fn perform(&self, board: &mut Board, faller: &mut Faller) -> bool {
        let origins = faller.positions();
        debug!(
            movement = ?self,
            descent_file = faller.descent_file(),
            "attempting to move faller"
        );

        let moved = match self.apply(board, faller) {
            Ok(()) => {
                seat(board, &origins, faller.members());
                for (origin, tile) in origins.iter().zip(faller.members()) {
                    debug!(from = ?origin, to = ?tile.position, "faller member moved");
                }
                true
            }
            Err(err) => {
                warn!(movement = ?self, %err, "could not apply movement rule, reverting faller");
                faller.set_positions(origins);
                false
            }
        };

        if let Some(after) = self.after() {
            after(board, faller);
        }
        moved
    }
}

fn shift(board: &Board, faller: &mut Faller, dx: i32) -> Result<(), RuleError> {
    for tile in faller.members.iter_mut() {
        tile.position = tile.position.offset(dx, 0);
    }
    // All three destinations are checked before anything is committed.
    for tile in faller.members() {
        let Position { x, y } = tile.position;
        if !(1..=board.width()).contains(&x) {
            return Err(RuleError::InvalidBoardPosition { x, y });
        }
        if board.is_staged(tile.position) {
            continue;
        }
        if !board.is_null_at(x, y)? {
            return Err(RuleError::illegal(format!("slot ({x}, {y}) is occupied")));
        }
    }
    Ok(())
}
