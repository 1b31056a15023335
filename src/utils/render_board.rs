//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and
//! diagnostics in text environments.

use crate::board::board::{Board, BOARD_SIZE};
use crate::board::chess_types::{Color, Piece, PieceType};

/// Render the board to a Unicode string for terminal output, White's back
/// rank at the bottom.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in (0..BOARD_SIZE).rev() {
        out.push(char::from(b'1' + row as u8));
        out.push(' ');

        for col in 0..BOARD_SIZE {
            match board.get_piece(row, col) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }
            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + row as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceType::Pawn) => '♙',
        (Color::White, PieceType::Knight) => '♘',
        (Color::White, PieceType::Bishop) => '♗',
        (Color::White, PieceType::Rook) => '♖',
        (Color::White, PieceType::Queen) => '♕',
        (Color::White, PieceType::King) => '♔',
        (Color::Black, PieceType::Pawn) => '♟',
        (Color::Black, PieceType::Knight) => '♞',
        (Color::Black, PieceType::Bishop) => '♝',
        (Color::Black, PieceType::Rook) => '♜',
        (Color::Black, PieceType::Queen) => '♛',
        (Color::Black, PieceType::King) => '♚',
    }
}
