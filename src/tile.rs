use std::fmt;

use rand::Rng;

// ============================================================================
// Types
// ============================================================================

/// Board coordinate. Columns and rows are 1-indexed and rows grow upward.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Magenta,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Orange,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Magenta,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            Color::Red => "#a10b0b",
            Color::Orange => "#ad6211",
            Color::Yellow => "#dce31b",
            Color::Green => "#3ec934",
            Color::Blue => "#4a8af0",
            Color::Magenta => "#b71ceb",
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Color::Red => 'R',
            Color::Orange => 'O',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Magenta => 'M',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.symbol() == symbol.to_ascii_uppercase())
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Color::ALL[rng.gen_range(0..Color::ALL.len())]
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TileShape {
    #[default]
    Square,
}

/// A single colored unit on the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Tile {
    pub position: Position,
    pub color: Color,
    pub shape: TileShape,
}

impl Tile {
    pub fn new(x: i32, y: i32, color: Color) -> Self {
        Self {
            position: Position::new(x, y),
            color,
            shape: TileShape::Square,
        }
    }

    /// Matching equality: two tiles match iff their colors do.
    pub fn matches(&self, other: &Tile) -> bool {
        self.color == other.color
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.color.symbol())
    }
}

/// Sentinel filling every empty slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NullTile {
    pub position: Position,
}

impl NullTile {
    pub fn at(position: Position) -> Self {
        Self { position }
    }
}

impl fmt::Display for NullTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ".")
    }
}

/// The occupant of a board slot.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Cell {
    Tile(Tile),
    Null(NullTile),
}

impl Cell {
    pub fn position(&self) -> Position {
        match self {
            Cell::Tile(tile) => tile.position,
            Cell::Null(null) => null.position,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null(_))
    }

    pub fn as_tile(&self) -> Option<&Tile> {
        match self {
            Cell::Tile(tile) => Some(tile),
            Cell::Null(_) => None,
        }
    }
}

impl From<Tile> for Cell {
    fn from(tile: Tile) -> Self {
        Cell::Tile(tile)
    }
}

impl From<NullTile> for Cell {
    fn from(null: NullTile) -> Self {
        Cell::Null(null)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Tile(tile) => fmt::Display::fmt(tile, f),
            Cell::Null(null) => fmt::Display::fmt(null, f),
        }
    }
}
