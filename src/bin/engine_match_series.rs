//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use arbiter_chess::engines::engine_trait::AiLevel;
use arbiter_chess::utils::match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap these two lines to pit different tiers against each other.
    let player1 = || AiLevel::Greedy.build();
    let player2 = || AiLevel::Minimax.build();

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                max_plies: 200,
                opening_min_plies: 2,
                opening_max_plies: 6,
            },
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
