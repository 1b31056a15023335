//! Shared legal-move enumeration.
//!
//! Every AI tier and every mobility count goes through this one generator,
//! so a strategy reporting "no move" always coincides with the board's own
//! checkmate/stalemate classification.

use crate::board::board::{Board, BOARD_SIZE};
use crate::board::chess_move::Move;
use crate::board::chess_types::{Color, PieceType};

/// All legal moves for `color`: every origin/destination quadruple plus
/// trial castling moves for king pieces.
pub fn legal_moves_for(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for from_row in 0..BOARD_SIZE {
        for from_col in 0..BOARD_SIZE {
            let Some(piece) = board.get_piece(from_row, from_col) else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            if piece.kind == PieceType::King {
                if from_col + 2 < BOARD_SIZE {
                    let kingside = Move::castling(from_row, from_col, from_row, from_col + 2);
                    if board.is_legal_move(&kingside, color) {
                        moves.push(kingside);
                    }
                }
                if from_col >= 2 {
                    let queenside = Move::castling(from_row, from_col, from_row, from_col - 2);
                    if board.is_legal_move(&queenside, color) {
                        moves.push(queenside);
                    }
                }
            }

            for to_row in 0..BOARD_SIZE {
                for to_col in 0..BOARD_SIZE {
                    let mv = Move::new(from_row, from_col, to_row, to_col);
                    if board.is_legal_move(&mv, color) {
                        moves.push(mv);
                    }
                }
            }
        }
    }

    moves
}

/// The subset of `moves` whose destination holds an opposing piece.
pub fn capture_moves(board: &Board, color: Color, moves: &[Move]) -> Vec<Move> {
    moves
        .iter()
        .copied()
        .filter(|mv| matches!(board.get_piece(mv.to_row, mv.to_col), Some(p) if p.color != color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{capture_moves, legal_moves_for};
    use crate::board::board::Board;
    use crate::board::chess_move::Move;
    use crate::board::chess_types::Color;
    use crate::utils::fen::parse_fen;

    #[test]
    fn startpos_has_twenty_legal_moves_per_side() {
        let board = Board::new();
        let white = legal_moves_for(&board, Color::White);
        let black = legal_moves_for(&board, Color::Black);
        assert_eq!(white.len(), 20);
        assert_eq!(black.len(), 20);

        let white_pawn_moves = white.iter().filter(|m| m.from_row == 1).count();
        let white_knight_moves = white.iter().filter(|m| m.from_row == 0).count();
        assert_eq!(white_pawn_moves, 16);
        assert_eq!(white_knight_moves, 4);
    }

    #[test]
    fn startpos_has_no_captures() {
        let board = Board::new();
        let moves = legal_moves_for(&board, Color::White);
        assert!(capture_moves(&board, Color::White, &moves).is_empty());
    }

    #[test]
    fn enumeration_includes_legal_castling_moves() {
        let (board, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        let moves = legal_moves_for(&board, Color::White);
        assert!(moves.contains(&Move::castling(0, 4, 0, 6)));
        assert!(moves.contains(&Move::castling(0, 4, 0, 2)));
        assert!(moves.iter().filter(|m| m.is_castling).count() == 2);
    }

    #[test]
    fn enumeration_agrees_with_has_any_legal_move() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3",
            "7k/5K2/6Q1/8/8/8/8/8 b - - 0 1",
            "r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1",
        ];
        for fen in fens {
            let (board, _) = parse_fen(fen).expect("FEN should parse");
            for color in [Color::White, Color::Black] {
                assert_eq!(
                    board.has_any_legal_move(color),
                    !legal_moves_for(&board, color).is_empty(),
                    "enumeration mismatch for {fen}"
                );
            }
        }
    }

    #[test]
    fn every_enumerated_move_passes_the_legality_check() {
        let (board, _) =
            parse_fen("r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
                .expect("FEN should parse");
        for mv in legal_moves_for(&board, Color::White) {
            assert!(board.is_legal_move(&mv, Color::White));
        }
    }
}
