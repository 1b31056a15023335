//! Coordinate (long-algebraic) move text: "e2e4", "e1g1".
//!
//! Parsing consults the board so that a two-column king move comes back
//! with its castling flag set, ready for `Board::apply_move`.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::PieceType;

/// Name a square: column a–h then rank 1–8 ("e2").
pub fn square_name(row: usize, col: usize) -> String {
    let mut name = String::with_capacity(2);
    name.push(char::from(b'a' + col as u8));
    name.push(char::from(b'1' + row as u8));
    name
}

/// Parse a two-character square name.
pub fn parse_square(text: &str) -> Result<(usize, usize), String> {
    let mut chars = text.chars();
    let file = chars.next().ok_or_else(|| format!("Empty square name: {text}"))?;
    let rank = chars.next().ok_or_else(|| format!("Truncated square name: {text}"))?;
    if chars.next().is_some() {
        return Err(format!("Square name too long: {text}"));
    }

    if !('a'..='h').contains(&file) {
        return Err(format!("Invalid file character: {file}"));
    }
    if !('1'..='8').contains(&rank) {
        return Err(format!("Invalid rank character: {rank}"));
    }

    let col = (file as u8 - b'a') as usize;
    let row = (rank as u8 - b'1') as usize;
    Ok((row, col))
}

/// Render a move as origin square followed by destination square.
pub fn move_to_coords(mv: &Move) -> String {
    let mut out = square_name(mv.from_row, mv.from_col);
    out.push_str(&square_name(mv.to_row, mv.to_col));
    out
}

/// Parse coordinate text into a `Move`, flagging castling whenever the
/// origin square holds a king stepping two columns sideways.
pub fn coords_to_move(text: &str, board: &Board) -> Result<Move, String> {
    if text.len() != 4 || !text.is_ascii() {
        return Err(format!("Move text must be four ASCII characters: {text}"));
    }
    let (from_row, from_col) = parse_square(&text[..2])?;
    let (to_row, to_col) = parse_square(&text[2..])?;

    let mv = Move::new(from_row, from_col, to_row, to_col);
    let is_king = matches!(
        board.get_piece(from_row, from_col),
        Some(piece) if piece.kind == PieceType::King
    );
    if is_king && mv.is_two_column_step() {
        Ok(Move::castling(from_row, from_col, to_row, to_col))
    } else {
        Ok(mv)
    }
}
