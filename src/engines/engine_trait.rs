//! Strategy abstraction for the tiered artificial opponent.
//!
//! All tiers implement one narrow capability: choose a move for a color on
//! a board, or signal that none exists. A `None` result is never fatal;
//! the caller classifies it with `Board::is_checkmate` /
//! `Board::is_stalemate`.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_random::RandomEngine;

pub trait Engine: Send {
    /// Pick a legal move for `color` on `board`, or `None` when `color`
    /// has no legal move.
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move>;
}

/// Strength tier, selected once at engine construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiLevel {
    /// Capture-biased uniform random choice, no lookahead.
    Random,
    /// One-ply material + positional greedy.
    Greedy,
    /// Depth-3 minimax with alpha-beta pruning.
    Minimax,
}

impl AiLevel {
    /// Build this tier's strategy with an entropy-seeded tie-break
    /// generator.
    pub fn build(self) -> Box<dyn Engine> {
        match self {
            AiLevel::Random => Box::new(RandomEngine::new()),
            AiLevel::Greedy => Box::new(GreedyEngine::new()),
            AiLevel::Minimax => Box::new(MinimaxEngine::new()),
        }
    }

    /// Build this tier's strategy with a deterministic tie-break generator
    /// for reproducible games and tests.
    pub fn build_with_seed(self, seed: u64) -> Box<dyn Engine> {
        match self {
            AiLevel::Random => Box::new(RandomEngine::with_seed(seed)),
            AiLevel::Greedy => Box::new(GreedyEngine::with_seed(seed)),
            AiLevel::Minimax => Box::new(MinimaxEngine::with_seed(seed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AiLevel, Engine as _};
    use crate::board::board::Board;
    use crate::board::chess_types::Color;

    #[test]
    fn every_tier_produces_a_move_from_the_starting_position() {
        let board = Board::new();
        for level in [AiLevel::Random, AiLevel::Greedy, AiLevel::Minimax] {
            let mut engine = level.build_with_seed(7);
            let mv = engine
                .choose_move(&board, Color::White)
                .expect("start position has legal moves");
            assert!(board.is_legal_move(&mv, Color::White));
        }
    }
}
