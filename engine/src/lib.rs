//! Reversi Move Search Engine
//!
//! Picks a move for the side to move in an 8×8 Reversi position.
//!
//! Algorithm Details:
//! - Depth and evaluator are chosen from the number of empty cells; in the
//!   opening the mover's mobility decides between depth 2 and 3
//! - Opening and midgame leaves combine positional weights, mobility and an
//!   openness penalty for exposing flipped discs to empty cells
//! - Late positions are searched with positional leaves, and the last dozen
//!   empties to the end (up to six plies) with plain disc counts
//! - Sibling moves are cut by a shallow bound table by default; sound
//!   alpha-beta and plain minimax are available through `SearchConfig`
//!
//! Key characteristics:
//! - Deterministic move selection (same board state always produces same move)
//! - Ties go to the earliest move in generator order (y outer, x inner)
//! - Each call owns its search state, so concurrent calls never interfere

use std::fmt;

use reversi::{BoardState, Move};
use tracing::info;
use web_time::Instant;

pub mod config;
pub mod error;
pub mod evaluation;
pub mod iterative;
pub mod phase;
pub mod search;

pub use config::{Pruning, SearchConfig};
pub use error::{EngineError, EngineResult};
pub use iterative::choose_move_within;
pub use phase::{select_plan, PhaseThresholds, SearchPlan, Variant};
pub use search::{SearchOutcome, SearchStats};

/// What the side to move should do
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Decision {
    Play(Move),
    /// No legal move; the turn passes without changing the board
    Pass,
}

impl Decision {
    /// The move to play, if any
    pub fn as_move(&self) -> Option<Move> {
        match self {
            Decision::Play(mv) => Some(*mv),
            Decision::Pass => None,
        }
    }
}

/// `D3` style for moves, `PASS` otherwise
impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Play(mv) => write!(f, "{}", mv),
            Decision::Pass => write!(f, "PASS"),
        }
    }
}

/// Choose a move with the default configuration
///
/// # Arguments
/// * `state` - Position to move from; the side to move is `state.next()`
///
/// # Returns
/// `Decision::Play` with the chosen move, or `Decision::Pass` if the side to
/// move has no legal move
pub fn choose_move(state: &BoardState) -> EngineResult<Decision> {
    choose_move_with(state, &SearchConfig::default())
}

/// Choose a move with an explicit configuration
pub fn choose_move_with(state: &BoardState, config: &SearchConfig) -> EngineResult<Decision> {
    config.validate()?;

    let start = Instant::now();
    let moves = state.legal_moves();
    if moves.is_empty() {
        info!(player = ?state.next(), "no legal moves, passing");
        return Ok(Decision::Pass);
    }

    let plan = select_plan(state.empty_count(), moves.len(), &config.phases);
    let outcome = search::search(state, plan, state.next(), config)?;

    // A root with legal moves always yields one; fall back to the first anyway
    let mv = outcome.best_move.unwrap_or(moves[0]);

    info!(
        player = ?state.next(),
        chosen = %mv,
        plan = %plan,
        score = outcome.score,
        nodes = outcome.stats.nodes,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "move chosen"
    );

    Ok(Decision::Play(mv))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reversi::{Coord, Player};

    #[test]
    fn test_choose_move_opening_is_legal() {
        let board = BoardState::new();
        let decision = choose_move(&board).unwrap();

        let mv = decision.as_move().expect("opening has moves");
        assert_eq!(mv.mover, Player::Black);
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_choose_move_passes_when_stuck() {
        let mut codes = [[0u8; 8]; 8];
        codes[0][0] = 1;
        codes[0][1] = 1;
        codes[7][7] = 2;
        let board = BoardState::from_codes(&codes, 1).unwrap();

        assert_eq!(choose_move(&board).unwrap(), Decision::Pass);
    }

    #[test]
    fn test_choose_move_rejects_bad_config() {
        let config = SearchConfig::new().with_no_move_score(-5);
        let err = choose_move_with(&BoardState::new(), &config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig { .. }));
    }

    #[test]
    fn test_decision_display() {
        let mv = Move::new(Coord::new(6, 5).unwrap(), Player::Black);
        assert_eq!(Decision::Play(mv).to_string(), "F5");
        assert_eq!(Decision::Pass.to_string(), "PASS");
    }
}
