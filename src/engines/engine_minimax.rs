//! Tier-3 depth-3 minimax strategy with alpha-beta pruning.
//!
//! Short-circuits to any single move that mates on the spot; otherwise
//! searches three plies ahead with `KingSafetyScorer` leaves, tightening
//! alpha across root moves and breaking root ties uniformly at random.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::board::move_list::legal_moves_for;
use crate::engines::engine_trait::Engine;
use crate::search::board_scoring::KingSafetyScorer;
use crate::search::minimax::{alpha_beta, SEARCH_DEPTH};

pub struct MinimaxEngine {
    rng: StdRng,
    depth: u32,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
            depth: SEARCH_DEPTH,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            depth: SEARCH_DEPTH,
        }
    }

    /// Deterministic engine searching a caller-chosen depth.
    pub fn with_seed_and_depth(seed: u64, depth: u32) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            depth: depth.max(1),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for MinimaxEngine {
    fn choose_move(&mut self, board: &Board, color: Color) -> Option<Move> {
        let all = legal_moves_for(board, color);
        if all.is_empty() {
            return None;
        }

        // A mate on the spot needs no search.
        for mv in &all {
            let mut scratch = board.clone();
            scratch.apply_move(mv);
            if scratch.is_checkmate(color.opposite()) {
                return Some(*mv);
            }
        }

        let scorer = KingSafetyScorer;
        let mut scratch = board.clone();
        let mut alpha = i32::MIN;
        let mut best_score = i32::MIN;
        let mut best_moves = Vec::new();

        for mv in &all {
            let undo = scratch.apply_move(mv);
            let score = alpha_beta(
                &mut scratch,
                self.depth - 1,
                alpha,
                i32::MAX,
                false,
                color,
                &scorer,
            );
            scratch.undo_move(mv, undo);

            if score > best_score {
                best_score = score;
                best_moves.clear();
                best_moves.push(*mv);
            } else if score == best_score {
                best_moves.push(*mv);
            }
            alpha = alpha.max(score);
        }

        best_moves.as_slice().choose(&mut self.rng).copied()
    }
}
