//! Tier-2 one-ply material + positional strategy.
//!
//! Plays an immediate checkmate when one exists; otherwise simulates every
//! legal move on a scratch copy and keeps the best `StandardScorer`
//! outcome, breaking ties uniformly at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::board::move_list::legal_moves_for;
use crate::engines::engine_trait::Engine;
use crate::search::board_scoring::{BoardScorer, StandardScorer};

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
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

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let all = legal_moves_for(board, color);
        if all.is_empty() {
            return None;
        }

        // A move that mates on the spot beats any evaluation.
        let mut mating = Vec::new();
        for mv in &all {
            let mut scratch = board.clone();
            scratch.apply_move(mv);
            if scratch.is_checkmate(color.opposite()) {
                mating.push(*mv);
            }
        }
        if !mating.is_empty() {
            return mating.as_slice().choose(&mut self.rng).copied();
        }

        let scorer = StandardScorer;
        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();
        for mv in &all {
            let mut scratch = board.clone();
            scratch.apply_move(mv);
            let score = scorer.score(&scratch, color);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(*mv);
            } else if score == best_score {
                best_moves.push(*mv);
            }
        }

        best_moves.as_slice().choose(&mut self.rng).copied()
    }
}
