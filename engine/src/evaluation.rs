//! Static evaluation
//!
//! Scores a board from one player's perspective. Positive favors that player.
//! - Positional weights: corners strongly positive, the cells next to corners
//!   strongly negative since they hand the corner to the opponent
//! - Mobility: legal move count of the side to move, credited to that side
//! - Openness: empty cells exposed around the discs a move flipped
//! - Disc differential: plain disc count difference for the late endgame

use reversi::{BoardState, Player};

/// Positional weights, `[y - 1][x - 1]`
pub const POSITION_WEIGHTS: [[i32; 8]; 8] = [
    [45, -11, 4, -1, -1, 4, -11, 45],
    [-11, -16, -1, -3, -3, -1, -16, -11],
    [4, -1, 2, -1, -1, 2, -1, 4],
    [-1, -3, -1, 0, 0, -1, -3, -1],
    [-1, -3, -1, 0, 0, -1, -3, -1],
    [4, -1, 2, -1, -1, 2, -1, 4],
    [-11, -16, -1, -3, -3, -1, -16, -11],
    [45, -11, 4, -1, -1, 4, -11, 45],
];

/// Sum of weights over `perspective`'s discs minus the opponent's
pub fn positional_score(state: &BoardState, perspective: Player) -> i32 {
    let opponent = perspective.opponent();

    state
        .iter()
        .map(|(at, cell)| match cell.owner() {
            Some(owner) if owner == perspective => POSITION_WEIGHTS[at.row()][at.col()],
            Some(owner) if owner == opponent => -POSITION_WEIGHTS[at.row()][at.col()],
            _ => 0,
        })
        .sum()
}

/// Positional score plus mobility.
///
/// The legal move count of the side to move is added when that side is
/// `perspective` and subtracted otherwise.
pub fn calculate_point(state: &BoardState, perspective: Player) -> i32 {
    point_with_mobility(state, perspective, state.legal_moves().len())
}

/// `calculate_point` with the mobility already known
pub(crate) fn point_with_mobility(state: &BoardState, perspective: Player, mobility: usize) -> i32 {
    let mobility = mobility as i32;
    let positional = positional_score(state, perspective);

    if state.next() == perspective {
        positional + mobility
    } else {
        positional - mobility
    }
}

/// Negated count of empty cells around the discs flipped between two states.
///
/// Only cells that were occupied in `before` and changed owner count, so the
/// newly placed disc is ignored. Neighborhoods are read from `after` and
/// clipped at the board edge. The result is never positive.
pub fn calculate_openness(before: &BoardState, after: &BoardState) -> i32 {
    let exposed: usize = before
        .iter()
        .filter(|(at, cell)| !cell.is_empty() && after.cell(*at) != *cell)
        .map(|(at, _)| at.neighbors().filter(|n| after.cell(*n).is_empty()).count())
        .sum();

    -(exposed as i32)
}

/// `perspective`'s discs minus the opponent's, one point per disc
pub fn disc_differential(state: &BoardState, perspective: Player) -> i32 {
    state.disc_count(perspective) as i32 - state.disc_count(perspective.opponent()) as i32
}
