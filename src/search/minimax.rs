//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The search mutates one scratch board through apply/undo pairs rather
//! than cloning per node; pruning only skips subtrees that cannot change
//! the chosen value, so the result matches an unpruned search.

use crate::board::board::Board;
use crate::board::chess_types::Color;
use crate::board::move_list::legal_moves_for;
use crate::search::board_scoring::{BoardScorer, MATE_SCORE};

/// Search depth in plies: own move, opponent reply, own counter-reply.
pub const SEARCH_DEPTH: u32 = 3;

/// Alpha-beta minimax over `board`, scoring leaves with `scorer` from
/// `ai_color`'s perspective.
///
/// The maximizing layers belong to `ai_color`, the minimizing layers to the
/// opponent. Checkmate at a node yields ±`MATE_SCORE` favoring whichever
/// side is not checkmated; stalemate yields exactly 0. The board is
/// restored to its entry state before returning.
pub fn alpha_beta(
    board: &mut Board,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    ai_color: Color,
    scorer: &dyn BoardScorer,
) -> i32 {
    if depth == 0 {
        return scorer.score(board, ai_color);
    }

    let to_move = if maximizing {
        ai_color
    } else {
        ai_color.opposite()
    };
    if board.is_checkmate(to_move) {
        return if maximizing { -MATE_SCORE } else { MATE_SCORE };
    }
    if board.is_stalemate(to_move) {
        return 0;
    }

    let moves = legal_moves_for(board, to_move);

    if maximizing {
        let mut best = i32::MIN;
        for mv in &moves {
            let undo = board.apply_move(mv);
            let value = alpha_beta(board, depth - 1, alpha, beta, false, ai_color, scorer);
            board.undo_move(mv, undo);

            best = best.max(value);
            alpha = alpha.max(value);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = i32::MAX;
        for mv in &moves {
            let undo = board.apply_move(mv);
            let value = alpha_beta(board, depth - 1, alpha, beta, true, ai_color, scorer);
            board.undo_move(mv, undo);

            best = best.min(value);
            beta = beta.min(value);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
