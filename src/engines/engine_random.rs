//! Tier-1 capture-biased random strategy.
//!
//! Enumerates every legal move, then chooses uniformly among captures when
//! any exist, otherwise among all moves. No lookahead.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::board::move_list::{capture_moves, legal_moves_for};
use crate::engines::engine_trait::Engine;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let all = legal_moves_for(board, color);
        if all.is_empty() {
            return None;
        }

        let captures = capture_moves(board, color, &all);
        let pool = if captures.is_empty() { &all } else { &captures };
        pool.as_slice().choose(&mut self.rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::board::board::Board;
    use crate::board::chess_types::Color;
    use crate::engines::engine_trait::Engine;
    use crate::utils::fen::parse_fen;

    #[test]
    fn chosen_moves_are_always_legal() {
        let board = Board::new();
        let mut engine = RandomEngine::with_seed(1);
        for _ in 0..20 {
            let mv = engine
                .choose_move(&board, Color::White)
                .expect("start position has legal moves");
            assert!(board.is_legal_move(&mv, Color::White));
        }
    }

    #[test]
    fn prefers_a_capture_when_one_exists() {
        // The only capture on the board is queen takes queen.
        let (board, _) =
            parse_fen("3q3k/8/8/3Q4/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(3);
        for _ in 0..10 {
            let mv = engine
                .choose_move(&board, Color::White)
                .expect("position has legal moves");
            assert_eq!((mv.from_row, mv.from_col), (4, 3));
            assert_eq!((mv.to_row, mv.to_col), (7, 3));
        }
    }

    #[test]
    fn reports_no_move_when_checkmated() {
        let (board, _) =
            parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(5);
        assert_eq!(engine.choose_move(&board, Color::White), None);
        assert!(board.is_checkmate(Color::White));
    }

    #[test]
    fn reports_no_move_when_stalemated() {
        let (board, _) = parse_fen("7k/5K2/6Q1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(5);
        assert_eq!(engine.choose_move(&board, Color::Black), None);
        assert!(board.is_stalemate(Color::Black));
    }
}
