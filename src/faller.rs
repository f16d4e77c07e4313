use rand::Rng;

use crate::config::FALLER_SIZE;
use crate::tile::{Color, Position, Tile};

/// The player-controlled group of three tiles sharing one column.
///
/// Members are kept bottom to top: `members()[0]` is the lowest tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Faller {
    pub(crate) members: [Tile; FALLER_SIZE],
    descent_file: i32,
}

impl Faller {
    /// Stacks the colors (bottom to top) on `column`, starting at `staged_row`.
    pub fn new(column: i32, colors: [Color; FALLER_SIZE], staged_row: i32) -> Self {
        let members = [
            Tile::new(column, staged_row, colors[0]),
            Tile::new(column, staged_row + 1, colors[1]),
            Tile::new(column, staged_row + 2, colors[2]),
        ];
        Self {
            members,
            descent_file: column,
        }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: i32, staged_row: i32) -> Self {
        let column = rng.gen_range(1..=width);
        let colors = [Color::random(rng), Color::random(rng), Color::random(rng)];
        Self::new(column, colors, staged_row)
    }

    pub fn members(&self) -> &[Tile; FALLER_SIZE] {
        &self.members
    }

    pub fn positions(&self) -> [Position; FALLER_SIZE] {
        self.members.map(|tile| tile.position)
    }

    pub fn colors(&self) -> [Color; FALLER_SIZE] {
        self.members.map(|tile| tile.color)
    }

    /// Column the faller spawned in.
    pub fn descent_file(&self) -> i32 {
        self.descent_file
    }

    /// Current column. Differs from the descent file after a shift.
    pub fn column(&self) -> i32 {
        self.members[0].position.x
    }

    pub fn lowest(&self) -> &Tile {
        &self.members[0]
    }

    pub fn has_staged_member(&self, staged_row: i32) -> bool {
        self.members
            .iter()
            .any(|tile| tile.position.y >= staged_row)
    }

    pub(crate) fn set_positions(&mut self, positions: [Position; FALLER_SIZE]) {
        for (tile, position) in self.members.iter_mut().zip(positions) {
            tile.position = position;
        }
    }
}
