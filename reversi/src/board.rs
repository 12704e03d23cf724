use std::fmt;

use crate::{Cell, Coord, GameResult, Player};

/// An immutable snapshot of the game: the grid plus whose turn it is.
///
/// The grid is stored row-major, `cells[y - 1][x - 1]`. States are `Copy` and
/// never edited after construction; moves produce new states.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BoardState {
    cells: [[Cell; 8]; 8],
    next: Player,
}

impl BoardState {
    /// Standard opening: four discs in the center, Black to move.
    /// - D4 and E5 are White
    /// - E4 and D5 are Black
    pub fn new() -> Self {
        let mut cells = [[Cell::Empty; 8]; 8];

        cells[3][3] = Cell::White;
        cells[3][4] = Cell::Black;
        cells[4][3] = Cell::Black;
        cells[4][4] = Cell::White;

        BoardState {
            cells,
            next: Player::Black,
        }
    }

    /// Build a state from an already-typed grid
    pub fn from_cells(cells: [[Cell; 8]; 8], next: Player) -> Self {
        BoardState { cells, next }
    }

    /// Build a state from numeric codes, `codes[y - 1][x - 1]`.
    ///
    /// Cells use 0 = empty, 1 = Black, 2 = White; `next` uses 1 or 2. Any
    /// other value is rejected so malformed input never reaches the search.
    pub fn from_codes(codes: &[[u8; 8]; 8], next: u8) -> GameResult<Self> {
        let next = Player::from_code(next)?;
        let mut cells = [[Cell::Empty; 8]; 8];

        for (row, line) in codes.iter().enumerate() {
            for (col, &code) in line.iter().enumerate() {
                cells[row][col] = Cell::from_code(code)?;
            }
        }

        Ok(BoardState { cells, next })
    }

    /// Current board as codes [0=empty, 1=black, 2=white], `[y - 1][x - 1]`
    pub fn to_codes(&self) -> [[u8; 8]; 8] {
        let mut codes = [[0u8; 8]; 8];

        for row in 0..8 {
            for col in 0..8 {
                codes[row][col] = match self.cells[row][col] {
                    Cell::Empty => 0,
                    Cell::Black => 1,
                    Cell::White => 2,
                };
            }
        }

        codes
    }

    /// The player who moves next
    pub fn next(&self) -> Player {
        self.next
    }

    /// Cell at a coordinate
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Cell at 1-indexed (x, y), or None off the board
    pub fn get(&self, x: u8, y: u8) -> Option<Cell> {
        Coord::new(x, y).ok().map(|at| self.cell(at))
    }

    /// Raw grid, row-major
    pub fn cells(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Every cell with its coordinate, y outer and x inner
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, line)| {
            line.iter()
                .enumerate()
                .map(move |(col, &cell)| (Coord::from_indices(row, col), cell))
        })
    }

    /// Number of discs owned by `player`
    pub fn disc_count(&self, player: Player) -> u32 {
        let target = player.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == target).count() as u32
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> u32 {
        self.cells.iter().flatten().filter(|c| c.is_empty()).count() as u32
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> u32 {
        64 - self.empty_count()
    }

    /// Same grid with the turn handed to the other player.
    ///
    /// For controllers handling a pass; the search never calls this.
    pub fn passed(&self) -> Self {
        BoardState {
            cells: self.cells,
            next: self.next.opponent(),
        }
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Debug rendering: column letters across, row numbers down.
impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  A B C D E F G H")?;
        for (row, line) in self.cells.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for cell in line {
                let symbol = match cell {
                    Cell::Empty => ".",
                    Cell::Black => "●",
                    Cell::White => "○",
                };
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "{:?} to move", self.next)
    }
}
