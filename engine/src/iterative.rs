//! Iterative deepening search
//!
//! Layers a wall-clock budget on top of the fixed-depth search. The phase
//! plan fixes the variant and the maximum depth; depths 1, 2, ... are then
//! searched in turn, each with a fresh context. The deadline is only checked
//! between iterations, so a running search is never interrupted and the
//! first iteration always completes.

use std::time::Duration;

use reversi::BoardState;
use tracing::{debug, info};
use web_time::Instant;

use crate::config::SearchConfig;
use crate::error::EngineResult;
use crate::phase::select_plan;
use crate::search::search;
use crate::Decision;

/// Choose a move, deepening until the plan's depth or the budget runs out.
///
/// With an ample budget this returns the same move as `choose_move_with`.
pub fn choose_move_within(
    state: &BoardState,
    config: &SearchConfig,
    budget: Duration,
) -> EngineResult<Decision> {
    config.validate()?;

    let start = Instant::now();
    let moves = state.legal_moves();
    if moves.is_empty() {
        return Ok(Decision::Pass);
    }

    let plan = select_plan(state.empty_count(), moves.len(), &config.phases);
    let mut best_move = moves[0];
    let mut completed = 0;

    for depth in 1..=plan.depth {
        if depth > 1 && start.elapsed() >= budget {
            debug!(depth, "budget exhausted before iteration");
            break;
        }

        let outcome = search(state, plan.with_depth(depth), state.next(), config)?;
        if let Some(mv) = outcome.best_move {
            best_move = mv;
        }
        completed = depth;

        debug!(
            depth,
            score = outcome.score,
            best = %best_move,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "iteration complete"
        );
    }

    info!(
        player = ?state.next(),
        chosen = %best_move,
        plan = %plan,
        completed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "move chosen within budget"
    );

    Ok(Decision::Play(best_move))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::choose_move_with;

    #[test]
    fn test_ample_budget_matches_fixed_depth() {
        let board = BoardState::new();
        let config = SearchConfig::default();

        let fixed = choose_move_with(&board, &config).unwrap();
        let deepened = choose_move_within(&board, &config, Duration::from_secs(3600)).unwrap();
        assert_eq!(fixed, deepened);
    }

    #[test]
    fn test_zero_budget_still_moves() {
        let board = BoardState::new();
        let decision =
            choose_move_within(&board, &SearchConfig::default(), Duration::ZERO).unwrap();

        let mv = decision.as_move().expect("opening has moves");
        assert!(board.legal_moves().contains(&mv));
    }

    #[test]
    fn test_stuck_side_passes() {
        let mut codes = [[0u8; 8]; 8];
        codes[3][3] = 2;
        let board = BoardState::from_codes(&codes, 1).unwrap();

        let decision =
            choose_move_within(&board, &SearchConfig::default(), Duration::from_secs(1)).unwrap();
        assert_eq!(decision, Decision::Pass);
    }
}
