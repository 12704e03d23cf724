//! Integration tests for the Reversi engine
//!
//! These tests drive the public API end to end: move generation on hand-built
//! positions, pass handling, determinism and agreement between the pruning
//! modes.

use proptest::prelude::*;
use reversi::{BoardState, Coord, Move, Player};
use reversi_engine::evaluation::disc_differential;
use reversi_engine::search::search;
use reversi_engine::{
    choose_move, choose_move_with, select_plan, Decision, Pruning, SearchConfig, SearchPlan,
};

fn coord(x: u8, y: u8) -> Coord {
    Coord::new(x, y).unwrap()
}

/// Leaves and stuck nodes of the full tree to `depth`, asserting that
/// leaves at the requested depth are full boards when `full` is set
fn count_paths(state: &BoardState, depth: u8, full: bool) -> (u64, u64) {
    if depth == 0 {
        if full {
            assert_eq!(state.empty_count(), 0, "leaf before completion:\n{}", state);
        }
        return (1, 0);
    }

    let moves = state.legal_moves();
    if moves.is_empty() {
        return (0, 1);
    }

    moves.iter().fold((0, 0), |(leaves, stuck), mv| {
        let child = state.apply_move(mv).unwrap();
        let (l, s) = count_paths(&child, depth - 1, full);
        (leaves + l, stuck + s)
    })
}

#[test]
fn test_opening_has_four_moves() {
    let board = BoardState::new();
    let moves = board.legal_moves();

    assert_eq!(board.empty_count(), 60);
    assert_eq!(moves.len(), 4);
    assert_eq!(
        moves.iter().map(|m| m.target).collect::<Vec<_>>(),
        vec![coord(4, 3), coord(3, 4), coord(6, 5), coord(5, 6)]
    );
}

#[test]
fn test_stuck_mover_passes() {
    // Black has discs but nothing to sandwich
    let mut codes = [[0u8; 8]; 8];
    codes[0][0] = 1;
    codes[0][7] = 1;
    codes[4][4] = 2;
    let board = BoardState::from_codes(&codes, 1).unwrap();

    assert!(board.legal_moves().is_empty());
    assert_eq!(choose_move(&board).unwrap(), Decision::Pass);
    assert_eq!(choose_move(&board).unwrap().to_string(), "PASS");
}

#[test]
fn test_full_board_is_terminal() {
    // 40 Black discs on rows 1-5, 24 White discs on rows 6-8
    let mut codes = [[1u8; 8]; 8];
    for line in codes.iter_mut().skip(5) {
        *line = [2; 8];
    }
    let board = BoardState::from_codes(&codes, 1).unwrap();

    assert!(board.legal_moves().is_empty());
    assert!(board.passed().legal_moves().is_empty());
    assert_eq!(disc_differential(&board, Player::Black), 40 - 24);

    let outcome = search(&board, SearchPlan::endgame(0), Player::Black, &SearchConfig::new()).unwrap();
    assert_eq!(outcome.score, 16);
    assert_eq!(outcome.best_move, None);

    assert_eq!(choose_move(&board).unwrap(), Decision::Pass);
}

#[test]
fn test_capture_in_two_directions() {
    // Black plays A1: east line B1 against C1, diagonal B2 against C3
    let mut codes = [[0u8; 8]; 8];
    codes[0][2] = 1;
    codes[2][2] = 1;
    codes[0][1] = 2;
    codes[1][1] = 2;
    let board = BoardState::from_codes(&codes, 1).unwrap();

    let moves = board.legal_moves();
    let a1 = Move::new(coord(1, 1), Player::Black);
    assert!(moves.contains(&a1));

    let next = board.apply_move(&a1).unwrap();
    assert_eq!(next.occupied_count(), board.occupied_count() + 1);
    assert_eq!(next.disc_count(Player::White), 0);
    assert_eq!(next.disc_count(Player::Black), 5);
    assert_eq!(next.next(), Player::White);
}

#[test]
fn test_choose_move_is_deterministic() {
    let board = BoardState::new();
    let first = choose_move(&board).unwrap();
    for _ in 0..3 {
        assert_eq!(choose_move(&board).unwrap(), first);
    }
}

#[test]
fn test_alpha_beta_opening_keeps_first_of_ties() {
    let config = SearchConfig::new().with_pruning(Pruning::AlphaBeta);
    let decision = choose_move_with(&BoardState::new(), &config).unwrap();
    assert_eq!(decision.to_string(), "D3");
}

#[test]
fn test_endgame_search_reaches_full_board() {
    // Everything Black except: H1 empty, H2 White, row 8 = B W W W W . . .
    let mut codes = [[1u8; 8]; 8];
    codes[0][7] = 0;
    codes[1][7] = 2;
    codes[7] = [1, 2, 2, 2, 2, 0, 0, 0];
    let board = BoardState::from_codes(&codes, 1).unwrap();
    assert_eq!(board.empty_count(), 4);

    let config = SearchConfig::new().with_pruning(Pruning::None);
    let plan = select_plan(board.empty_count(), board.legal_moves().len(), &config.phases);
    assert_eq!(plan, SearchPlan::endgame(4));

    let outcome = search(&board, plan, Player::Black, &config).unwrap();
    let (leaves, stuck) = count_paths(&board, plan.depth, true);

    assert_eq!(outcome.stats.leaves, leaves);
    assert_eq!(outcome.stats.terminals, stuck);
    assert!(outcome.best_move.is_some());
}

#[test]
fn test_endgame_choice_is_legal_for_every_pruning() {
    let mut codes = [[1u8; 8]; 8];
    codes[0][7] = 0;
    codes[1][7] = 2;
    codes[7] = [1, 2, 2, 2, 2, 0, 0, 0];
    let board = BoardState::from_codes(&codes, 1).unwrap();

    for pruning in [Pruning::GrandparentCut, Pruning::AlphaBeta, Pruning::None] {
        let config = SearchConfig::new().with_pruning(pruning);
        let mv = choose_move_with(&board, &config).unwrap().as_move().unwrap();
        assert!(board.legal_moves().contains(&mv), "{:?} chose {}", pruning, mv);
    }
}

/// Positions reached by random legal playouts from the opening
fn playout() -> impl Strategy<Value = BoardState> {
    prop::collection::vec(0usize..64, 0..50).prop_map(|choices| {
        let mut board = BoardState::new();
        for choice in choices {
            let mut moves = board.legal_moves();
            if moves.is_empty() {
                board = board.passed();
                moves = board.legal_moves();
                if moves.is_empty() {
                    break;
                }
            }
            board = board.apply_move(&moves[choice % moves.len()]).unwrap();
        }
        board
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    /// Identical boards always produce identical decisions
    #[test]
    fn prop_choose_move_deterministic(board in playout()) {
        let first = choose_move(&board).unwrap();
        let second = choose_move(&board).unwrap();
        prop_assert_eq!(first, second);
    }

    /// The engine only ever plays legal moves, and passes only when stuck
    #[test]
    fn prop_choose_move_is_legal(board in playout()) {
        let moves = board.legal_moves();
        match choose_move(&board).unwrap() {
            Decision::Play(mv) => {
                prop_assert!(moves.contains(&mv), "illegal choice {}", mv);
                prop_assert_eq!(mv.mover, board.next());
            }
            Decision::Pass => prop_assert!(moves.is_empty()),
        }
    }

    /// Alpha-beta returns the plain minimax move and score
    #[test]
    fn prop_alpha_beta_matches_minimax(board in playout()) {
        let moves = board.legal_moves();
        prop_assume!(!moves.is_empty());

        let plan = select_plan(board.empty_count(), moves.len(), &SearchConfig::new().phases);
        let plan = plan.with_depth(plan.depth.min(3));

        let plain = search(&board, plan, board.next(), &SearchConfig::new().with_pruning(Pruning::None)).unwrap();
        let pruned = search(&board, plan, board.next(), &SearchConfig::new().with_pruning(Pruning::AlphaBeta)).unwrap();

        prop_assert_eq!(plain.score, pruned.score);
        prop_assert_eq!(plain.best_move, pruned.best_move);
    }

    /// The grandparent cut only abandons subtrees the parent rejects, so the
    /// root result is the plain minimax one
    #[test]
    fn prop_grandparent_cut_matches_minimax(board in playout()) {
        let moves = board.legal_moves();
        prop_assume!(!moves.is_empty());

        let plan = select_plan(board.empty_count(), moves.len(), &SearchConfig::new().phases);
        let plan = plan.with_depth(plan.depth.min(3));

        let plain = search(&board, plan, board.next(), &SearchConfig::new().with_pruning(Pruning::None)).unwrap();
        let cut = search(&board, plan, board.next(), &SearchConfig::new()).unwrap();

        prop_assert_eq!(plain.score, cut.score);
        prop_assert_eq!(plain.best_move, cut.best_move);
        prop_assert!(cut.stats.nodes <= plain.stats.nodes);
    }
}
