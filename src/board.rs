//! The playfield: a fixed `width x height` grid where every slot holds either a
//! [`Tile`] or a [`NullTile`].
//!
//! Row 1 is the floor. Rows above `height` are off the board; the first of them is the
//! staged row where fallers spawn before entering play.

use std::fmt;

use crate::error::RuleError;
use crate::tile::{Cell, NullTile, Position, Tile};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    // grid[y - 1][x - 1]
    grid: Vec<Vec<Cell>>,
}

impl Board {
    pub fn new(width: i32, height: i32) -> Self {
        let grid = (1..=height)
            .map(|y| {
                (1..=width)
                    .map(|x| Cell::Null(NullTile::at(Position::new(x, y))))
                    .collect()
            })
            .collect();

        Self {
            width,
            height,
            grid,
        }
    }

    /// Builds a board and places each tile at its own position. Tiles outside the board
    /// are skipped.
    pub fn with_tiles<I>(width: i32, height: i32, tiles: I) -> Self
    where
        I: IntoIterator<Item = Tile>,
    {
        let mut board = Self::new(width, height);
        for tile in tiles {
            let _ = board.place_tile(tile);
        }
        board
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn staged_row(&self) -> i32 {
        self.height + 1
    }

    /// True for positions above the visible board. Such positions are never written.
    pub fn is_staged(&self, position: Position) -> bool {
        position.y >= self.staged_row()
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        (1..=self.width).contains(&x) && (1..=self.height).contains(&y)
    }

    pub fn tile_at(&self, x: i32, y: i32) -> Result<&Cell, RuleError> {
        if !self.in_bounds(x, y) {
            return Err(RuleError::InvalidBoardPosition { x, y });
        }
        Ok(&self.grid[(y - 1) as usize][(x - 1) as usize])
    }

    pub fn is_null_at(&self, x: i32, y: i32) -> Result<bool, RuleError> {
        self.tile_at(x, y).map(Cell::is_null)
    }

    /// Writes `cell` into the slot at its own position, replacing the previous occupant.
    pub fn place_tile(&mut self, cell: impl Into<Cell>) -> Result<(), RuleError> {
        let cell = cell.into();
        let Position { x, y } = cell.position();
        if !self.in_bounds(x, y) {
            return Err(RuleError::InvalidBoardPosition { x, y });
        }
        self.grid[(y - 1) as usize][(x - 1) as usize] = cell;
        Ok(())
    }

    pub fn clear_slot(&mut self, position: Position) -> Result<(), RuleError> {
        self.place_tile(NullTile::at(position))
    }

    /// Occupied tiles, scanned row by row from the floor up.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.grid.iter().flatten().filter_map(Cell::as_tile)
    }

    /// Slots of column `x` from the floor up. Empty for an out-of-range column.
    pub fn column(&self, x: i32) -> impl Iterator<Item = &Cell> + '_ {
        let index = if (1..=self.width).contains(&x) {
            Some((x - 1) as usize)
        } else {
            None
        };
        self.grid
            .iter()
            .filter_map(move |row| index.map(|i| &row[i]))
    }

    pub fn occupied_count(&self) -> usize {
        self.tiles().count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.iter().rev() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
