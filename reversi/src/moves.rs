use std::fmt;

use crate::{BoardState, Coord, GameError, GameResult, Player, DIRECTIONS};

/// A disc placement by `mover` at `target`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Move {
    pub target: Coord,
    pub mover: Player,
}

impl Move {
    pub fn new(target: Coord, mover: Player) -> Self {
        Move { target, mover }
    }
}

/// Algebraic notation of the target, e.g. `D3`
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.target)
    }
}

impl BoardState {
    /// Opponent discs captured in direction (dx, dy) if `mover` played at `at`.
    ///
    /// Scans outward while cells hold the opponent's discs; the line only
    /// counts when it ends on one of the mover's own discs.
    fn captures_in_direction(&self, at: Coord, mover: Player, dx: i8, dy: i8) -> Vec<Coord> {
        let opponent = mover.opponent().to_cell();
        let own = mover.to_cell();

        let mut flips = Vec::new();
        let mut look = at.offset(dx, dy);

        while let Some(cell_at) = look {
            let cell = self.cell(cell_at);
            if cell == opponent {
                flips.push(cell_at);
                look = cell_at.offset(dx, dy);
            } else if cell == own {
                return flips;
            } else {
                break;
            }
        }

        Vec::new()
    }

    /// Every disc the player on turn would flip by playing at `at`.
    ///
    /// Empty when the target is occupied or nothing is sandwiched.
    pub fn captures(&self, at: Coord) -> Vec<Coord> {
        if !self.cell(at).is_empty() {
            return Vec::new();
        }

        DIRECTIONS
            .iter()
            .flat_map(|&(dx, dy)| self.captures_in_direction(at, self.next(), dx, dy))
            .collect()
    }

    /// Whether the player on turn may place a disc at `at`
    pub fn is_legal(&self, at: Coord) -> bool {
        self.cell(at).is_empty()
            && DIRECTIONS
                .iter()
                .any(|&(dx, dy)| !self.captures_in_direction(at, self.next(), dx, dy).is_empty())
    }

    /// All legal moves for the player on turn.
    ///
    /// Ordered y outer, x inner (A1, B1, ..., H1, A2, ...). Searches break ties
    /// by this order, so it must stay stable.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mover = self.next();
        self.iter()
            .filter(|(at, cell)| cell.is_empty() && self.is_legal(*at))
            .map(|(at, _)| Move::new(at, mover))
            .collect()
    }

    /// Whether the player on turn has any legal move
    pub fn has_legal_move(&self) -> bool {
        self.iter().any(|(at, _)| self.is_legal(at))
    }

    /// Apply a move, returning the successor state.
    ///
    /// Places the mover's disc, flips every captured line and hands the turn
    /// to the opponent, even when the opponent has no reply. Passing is left
    /// to the caller.
    pub fn apply_move(&self, mv: &Move) -> GameResult<BoardState> {
        if mv.mover != self.next() {
            return Err(GameError::WrongMover {
                expected: self.next(),
                found: mv.mover,
            });
        }

        let flips = self.captures(mv.target);
        if flips.is_empty() {
            return Err(GameError::IllegalMove { target: mv.target });
        }

        let own = mv.mover.to_cell();
        let mut cells = *self.cells();
        cells[mv.target.row()][mv.target.col()] = own;
        for at in flips {
            cells[at.row()][at.col()] = own;
        }

        Ok(BoardState::from_cells(cells, mv.mover.opponent()))
    }
}
