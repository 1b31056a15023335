//! Engine-vs-engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without any
//! interactive surface, with an optional seeded random opening prefix so a
//! series explores different games deterministically.

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::board::move_list::legal_moves_for;
use crate::engines::engine_trait::Engine;
use crate::utils::notation::move_to_coords;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u32,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub opening_moves: Vec<String>,
    pub played_moves: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_moves={} p2_moves={}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_moves,
            self.player2_moves
        )
    }
}

/// Play a single seeded engine-vs-engine match from the starting position.
pub fn play_engine_match(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    seed: u64,
    config: MatchConfig,
) -> Result<MatchResult, String> {
    let mut board = Board::new();
    let mut turn = Color::White;

    let opening_moves = apply_seeded_random_opening(
        &mut board,
        &mut turn,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut played_moves = Vec::<String>::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    for _ in 0..config.max_plies {
        let legal_moves = legal_moves_for(&board, turn);
        if legal_moves.is_empty() {
            return Ok(MatchResult {
                outcome: terminal_outcome(&board, turn),
                final_board: board,
                opening_moves,
                played_moves,
                white_move_count,
                black_move_count,
            });
        }

        let engine = match turn {
            Color::White => engine_white.as_mut(),
            Color::Black => engine_black.as_mut(),
        };
        let Some(chosen) = engine.choose_move(&board, turn) else {
            return Ok(MatchResult {
                outcome: terminal_outcome(&board, turn),
                final_board: board,
                opening_moves,
                played_moves,
                white_move_count,
                black_move_count,
            });
        };

        if !legal_moves.contains(&chosen) {
            return Err("engine returned illegal move".to_owned());
        }

        match turn {
            Color::White => white_move_count += 1,
            Color::Black => black_move_count += 1,
        }
        played_moves.push(move_to_coords(&chosen));
        board.apply_move(&chosen);
        turn = turn.opposite();
    }

    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board: board,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Player colors are randomized each game, deterministically from
/// `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0x5CA1_AB1E_0D06_F00D);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        if config.verbose {
            let (white, black) = if player1_is_white {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} white={} black={}",
                i + 1,
                config.games,
                seed,
                white,
                black
            );
        }

        let result = if player1_is_white {
            play_engine_match(
                player1_factory(),
                player2_factory(),
                seed,
                config.per_game.clone(),
            )?
        } else {
            play_engine_match(
                player2_factory(),
                player1_factory(),
                seed,
                config.per_game.clone(),
            )?
        };

        let (p1_moves, p2_moves) = if player1_is_white {
            (result.white_move_count, result.black_move_count)
        } else {
            (result.black_move_count, result.white_move_count)
        };
        stats.player1_moves += p1_moves;
        stats.player2_moves += p2_moves;

        let mapped = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => {
                win_for(&mut stats, player1_is_white, Color::White)
            }
            MatchOutcome::BlackWinCheckmate => {
                win_for(&mut stats, !player1_is_white, Color::Black)
            }
            MatchOutcome::DrawStalemate => {
                stats.draws += 1;
                SeriesOutcome::DrawStalemate
            }
            MatchOutcome::DrawMaxPlies => {
                stats.draws += 1;
                SeriesOutcome::DrawMaxPlies
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            println!(
                "[series] game {}/{} result={:?} p1_wins={} p2_wins={} draws={}",
                i + 1,
                config.games,
                result.outcome,
                stats.player1_wins,
                stats.player2_wins,
                stats.draws
            );
        }
    }

    Ok(stats)
}

fn win_for(stats: &mut MatchSeriesStats, player1_won: bool, color: Color) -> SeriesOutcome {
    let player = if player1_won {
        stats.player1_wins += 1;
        PlayerId::Player1
    } else {
        stats.player2_wins += 1;
        PlayerId::Player2
    };
    SeriesOutcome::PlayerWinCheckmate { player, color }
}

/// Classify a position where `turn` has no move to make.
fn terminal_outcome(board: &Board, turn: Color) -> MatchOutcome {
    if board.is_in_check(turn) {
        match turn {
            Color::White => MatchOutcome::BlackWinCheckmate,
            Color::Black => MatchOutcome::WhiteWinCheckmate,
        }
    } else {
        MatchOutcome::DrawStalemate
    }
}

/// Advance the board by a seeded handful of uniformly random legal plies.
fn apply_seeded_random_opening(
    board: &mut Board,
    turn: &mut Color,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut opening_moves = Vec::<String>::new();

    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = if low == high {
        low
    } else {
        rng.random_range(low..=high)
    };

    for _ in 0..target_plies {
        let legal_moves = legal_moves_for(board, *turn);
        if legal_moves.is_empty() {
            break;
        }
        let chosen = legal_moves[rng.random_range(0..legal_moves.len())];
        opening_moves.push(move_to_coords(&chosen));
        board.apply_move(&chosen);
        *turn = turn.opposite();
    }

    opening_moves
}
