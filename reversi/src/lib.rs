//! Core types and game logic for Reversi (Othello)
//!
//! Boards are immutable values: applying a move returns a new `BoardState`.
//! Coordinates exposed to callers are 1-indexed on both axes.

use std::fmt;

use thiserror::Error;

mod board;
mod moves;

pub use board::BoardState;
pub use moves::Move;

/// Errors raised by board construction and move application
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Target cell is occupied or the move captures nothing
    #[error("Illegal move at {target}")]
    IllegalMove { target: Coord },

    /// Move was built for the player who is not on turn
    #[error("Move by {found:?} but {expected:?} is to move")]
    WrongMover { expected: Player, found: Player },

    /// Coordinate outside 1..=8
    #[error("Invalid coordinate ({x}, {y}) (must be 1-8 on both axes)")]
    InvalidCoord { x: u8, y: u8 },

    /// Cell code outside {0, 1, 2}
    #[error("Invalid cell code {code} (must be 0, 1 or 2)")]
    InvalidCellCode { code: u8 },

    /// Player code outside {1, 2}
    #[error("Invalid player code {code} (must be 1 or 2)")]
    InvalidPlayerCode { code: u8 },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;

/// Board edge length
pub const BOARD_SIZE: u8 = 8;

/// Player one is Black and always opens; player two is White.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(&self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    /// Convert player to cell representation
    pub fn to_cell(&self) -> Cell {
        match self {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }

    /// Decode a player number (1 = Black, 2 = White)
    pub fn from_code(code: u8) -> GameResult<Player> {
        match code {
            1 => Ok(Player::Black),
            2 => Ok(Player::White),
            _ => Err(GameError::InvalidPlayerCode { code }),
        }
    }

    /// Player number (1 = Black, 2 = White)
    pub fn code(&self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Decode a cell code (0 = empty, 1 = Black, 2 = White)
    pub fn from_code(code: u8) -> GameResult<Cell> {
        match code {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Black),
            2 => Ok(Cell::White),
            _ => Err(GameError::InvalidCellCode { code }),
        }
    }

    /// Owner of the disc in this cell, if any
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Cell::Empty
    }
}

/// A board coordinate, 1-indexed: `x` is the column, `y` the row.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Build a coordinate, rejecting anything outside 1..=8
    pub fn new(x: u8, y: u8) -> GameResult<Coord> {
        if (1..=BOARD_SIZE).contains(&x) && (1..=BOARD_SIZE).contains(&y) {
            Ok(Coord { x, y })
        } else {
            Err(GameError::InvalidCoord { x, y })
        }
    }

    /// Build from 0-indexed (row, col) array indices; callers guarantee range.
    pub(crate) fn from_indices(row: usize, col: usize) -> Coord {
        debug_assert!(row < 8 && col < 8);
        Coord {
            x: col as u8 + 1,
            y: row as u8 + 1,
        }
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    /// 0-indexed row into the grid
    pub fn row(&self) -> usize {
        (self.y - 1) as usize
    }

    /// 0-indexed column into the grid
    pub fn col(&self) -> usize {
        (self.x - 1) as usize
    }

    /// Step by (dx, dy), returning None when leaving the board
    pub fn offset(&self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i8 + dx;
        let y = self.y as i8 + dy;
        if (1..=BOARD_SIZE as i8).contains(&x) && (1..=BOARD_SIZE as i8).contains(&y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// The up-to-eight cells surrounding this one, clipped at the edges
    pub fn neighbors(self) -> impl Iterator<Item = Coord> {
        DIRECTIONS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy))
    }
}

/// Algebraic notation: column letter then row number, e.g. `D3`
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.x - 1) as char, self.y)
    }
}

/// The eight compass directions as (dx, dy)
pub const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];
