//! Static position evaluation shared by the greedy and search tiers.
//!
//! Scores are centipawns from the perspective of the evaluated color:
//! signed material plus positional bonuses over every piece, check terms,
//! a legal-move mobility term, and (for the search tier) a pawn-shield
//! king-safety term.

use crate::board::board::{Board, BOARD_SIZE};
use crate::board::chess_types::{Color, Piece, PieceType};
use crate::board::move_list::legal_moves_for;

/// Sentinel magnitude returned by search for decided positions; larger than
/// any value the static formulas below can produce.
pub const MATE_SCORE: i32 = 100_000;

const CHECK_BONUS: i32 = 50;
const PAWN_SHIELD_BONUS: i32 = 10;

/// Centipawn material values. The king's value is a sentinel magnitude
/// only; kings are never actually traded.
pub const fn piece_value(kind: PieceType) -> i32 {
    match kind {
        PieceType::Pawn => 100,
        PieceType::Knight => 320,
        PieceType::Bishop => 330,
        PieceType::Rook => 500,
        PieceType::Queen => 900,
        PieceType::King => 20000,
    }
}

pub trait BoardScorer {
    /// Score `board` from `color`'s perspective: positive favors `color`.
    fn score(&self, board: &Board, color: Color) -> i32;
}

/// Material + position + check terms with the mobility difference weighted
/// ×2. The one-ply greedy tier maximizes this directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardScorer;

impl BoardScorer for StandardScorer {
    fn score(&self, board: &Board, color: Color) -> i32 {
        material_positional_term(board, color)
            + check_term(board, color)
            + mobility_term(board, color, 2)
    }
}

/// The search tier's leaf evaluation: mobility weighted ×3 plus a
/// pawn-shield king-safety term for both sides.
#[derive(Debug, Clone, Copy, Default)]
pub struct KingSafetyScorer;

impl BoardScorer for KingSafetyScorer {
    fn score(&self, board: &Board, color: Color) -> i32 {
        material_positional_term(board, color)
            + check_term(board, color)
            + mobility_term(board, color, 3)
            + pawn_shield_term(board, color)
            - pawn_shield_term(board, color.opposite())
    }
}

/// Signed sum of material value plus positional bonus over every piece on
/// the board: added for `color`'s pieces, subtracted for the opponent's.
fn material_positional_term(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let Some(piece) = board.get_piece(row, col) else {
                continue;
            };
            let value = piece_value(piece.kind) + positional_bonus(piece, row, col);
            if piece.color == color {
                score += value;
            } else {
                score -= value;
            }
        }
    }
    score
}

/// Placement bonus: pawns gain by advancing (extra for central files),
/// minors and majors by closing the Manhattan distance to the board
/// midpoint, the king by staying on its back ranks.
fn positional_bonus(piece: Piece, row: usize, col: usize) -> i32 {
    let center_distance = (3.5 - row as f64).abs() + (3.5 - col as f64).abs();

    match piece.kind {
        PieceType::Pawn => {
            let advancement = match piece.color {
                Color::White => row as i32,
                Color::Black => 7 - row as i32,
            };
            let mut bonus = advancement * 5;
            if (2..=5).contains(&col) {
                bonus += 10;
            }
            bonus
        }
        PieceType::Knight => (20.0 - center_distance * 5.0) as i32,
        PieceType::Bishop => (15.0 - center_distance * 3.0) as i32,
        PieceType::Rook => (5.0 - center_distance) as i32,
        PieceType::Queen => (10.0 - center_distance * 2.0) as i32,
        PieceType::King => {
            let back_rank = match piece.color {
                Color::White => row <= 1,
                Color::Black => row >= 6,
            };
            if back_rank {
                20
            } else {
                0
            }
        }
    }
}

/// +50 when the opponent stands in check, −50 when `color` does.
fn check_term(board: &Board, color: Color) -> i32 {
    let mut term = 0;
    if board.is_in_check(color.opposite()) {
        term += CHECK_BONUS;
    }
    if board.is_in_check(color) {
        term -= CHECK_BONUS;
    }
    term
}

/// Weighted difference in legal-move counts.
fn mobility_term(board: &Board, color: Color, weight: i32) -> i32 {
    let ours = legal_moves_for(board, color).len() as i32;
    let theirs = legal_moves_for(board, color.opposite()).len() as i32;
    (ours - theirs) * weight
}

/// +10 per friendly pawn on one of the three squares directly in front of
/// the king.
fn pawn_shield_term(board: &Board, color: Color) -> i32 {
    let Some((king_row, king_col)) = board.king_square(color) else {
        return 0;
    };

    let shield_row = king_row as i32 + color.forward();
    if !(0..BOARD_SIZE as i32).contains(&shield_row) {
        return 0;
    }
    let shield_row = shield_row as usize;

    let mut safety = 0;
    let first = king_col.saturating_sub(1);
    let last = (king_col + 1).min(BOARD_SIZE - 1);
    for col in first..=last {
        if board.get_piece(shield_row, col) == Some(Piece::new(PieceType::Pawn, color)) {
            safety += PAWN_SHIELD_BONUS;
        }
    }
    safety
}
