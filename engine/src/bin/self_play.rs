//! Plays a full game with the engine on both sides and prints each move.
//!
//! Set `RUST_LOG=reversi_engine=debug` to see search statistics.

use anyhow::{Context, Result};
use reversi::{BoardState, Player};
use reversi_engine::{choose_move, Decision};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut board = BoardState::new();
    let mut ply = 0;
    let mut passes_in_row = 0;

    println!("{}\n", board);

    // Two passes in a row end the game
    while passes_in_row < 2 {
        ply += 1;
        let player = board.next();

        match choose_move(&board).with_context(|| format!("search failed at ply {}", ply))? {
            Decision::Play(mv) => {
                passes_in_row = 0;
                board = board
                    .apply_move(&mv)
                    .with_context(|| format!("engine chose illegal move {}", mv))?;
                println!("{:>3}. {:?} {}", ply, player, mv);
            }
            Decision::Pass => {
                passes_in_row += 1;
                board = board.passed();
                println!("{:>3}. {:?} PASS", ply, player);
            }
        }
    }

    let black = board.disc_count(Player::Black);
    let white = board.disc_count(Player::White);
    println!("\n{}\n", board);
    println!("Black: {}, White: {}", black, white);

    match black.cmp(&white) {
        std::cmp::Ordering::Greater => println!("Black wins"),
        std::cmp::Ordering::Less => println!("White wins"),
        std::cmp::Ordering::Equal => println!("Draw"),
    }

    Ok(())
}
