//! Three-in-a-row match rules.
//!
//! A rule scans from a start cell along a fixed [`ScanDelta`]. The start cell and the next
//! two cells in that direction must all hold tiles of the same color.

use tracing::debug;

use crate::board::Board;
use crate::config::{THREE_FOLD_POINT_VALUE, THREE_FOLD_STREAK};
use crate::tile::{Cell, Tile};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ScanDelta {
    Up,
    Down,
    Right,
    Left,
    UpAndRight,
    UpAndLeft,
    DownAndRight,
    DownAndLeft,
}

impl ScanDelta {
    pub const ALL: [ScanDelta; 8] = [
        ScanDelta::Up,
        ScanDelta::Down,
        ScanDelta::Right,
        ScanDelta::Left,
        ScanDelta::UpAndRight,
        ScanDelta::UpAndLeft,
        ScanDelta::DownAndRight,
        ScanDelta::DownAndLeft,
    ];

    pub fn value(&self) -> (i32, i32) {
        match self {
            ScanDelta::Up => (0, 1),
            ScanDelta::Down => (0, -1),
            ScanDelta::Right => (1, 0),
            ScanDelta::Left => (-1, 0),
            ScanDelta::UpAndRight => (1, 1),
            ScanDelta::UpAndLeft => (-1, 1),
            ScanDelta::DownAndRight => (1, -1),
            ScanDelta::DownAndLeft => (-1, -1),
        }
    }
}

/// A discovered streak and the points it is worth.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchFound {
    pub points: u32,
    pub tiles: Vec<Tile>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MatchRule {
    pub scan_delta: ScanDelta,
    pub point_value: u32,
    pub streak: usize,
}

impl MatchRule {
    pub const fn three_fold(scan_delta: ScanDelta) -> Self {
        Self {
            scan_delta,
            point_value: THREE_FOLD_POINT_VALUE,
            streak: THREE_FOLD_STREAK,
        }
    }

    pub const fn three_fold_north() -> Self {
        Self::three_fold(ScanDelta::Up)
    }

    pub const fn three_fold_south() -> Self {
        Self::three_fold(ScanDelta::Down)
    }

    pub const fn three_fold_east() -> Self {
        Self::three_fold(ScanDelta::Right)
    }

    pub const fn three_fold_west() -> Self {
        Self::three_fold(ScanDelta::Left)
    }

    pub const fn three_fold_north_east() -> Self {
        Self::three_fold(ScanDelta::UpAndRight)
    }

    pub const fn three_fold_north_west() -> Self {
        Self::three_fold(ScanDelta::UpAndLeft)
    }

    pub const fn three_fold_south_east() -> Self {
        Self::three_fold(ScanDelta::DownAndRight)
    }

    pub const fn three_fold_south_west() -> Self {
        Self::three_fold(ScanDelta::DownAndLeft)
    }

    /// All eight directional three-fold rules.
    pub fn three_fold_all() -> [MatchRule; 8] {
        ScanDelta::ALL.map(MatchRule::three_fold)
    }

    pub fn with_point_value(mut self, point_value: u32) -> Self {
        self.point_value = point_value;
        self
    }

    pub fn check_match(&self, board: &Board, start_x: i32, start_y: i32) -> Option<MatchFound> {
        let first = match board.tile_at(start_x, start_y) {
            Ok(Cell::Tile(tile)) => *tile,
            _ => return None,
        };

        let (dx, dy) = self.scan_delta.value();
        let mut streak = vec![first];
        for i in 1..self.streak as i32 {
            let (x, y) = (start_x + dx * i, start_y + dy * i);
            let candidate = match board.tile_at(x, y) {
                Ok(Cell::Tile(tile)) => *tile,
                Ok(Cell::Null(_)) => return None,
                Err(_) => {
                    debug!(start_x, start_y, "matching sequence ran off the board");
                    return None;
                }
            };
            if !streak.iter().all(|prev| prev.matches(&candidate)) {
                return None;
            }
            streak.push(candidate);
        }

        debug!(
            start_x,
            start_y,
            scan_delta = ?self.scan_delta,
            "match of {} discovered",
            streak.len()
        );
        Some(MatchFound {
            points: self.point_value * streak.len() as u32,
            tiles: streak,
        })
    }
}
