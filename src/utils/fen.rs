//! FEN position setup for boards and tests.
//!
//! Parses the placement, side-to-move, and castling fields onto the mailbox
//! board and its has-moved bookkeeping, and prints a board back out. The
//! en-passant and clock fields are accepted on input but not tracked by the
//! core, and are emitted as placeholders on output.

use crate::board::board::{Board, CastlingFlags, BOARD_SIZE};
use crate::board::chess_types::{Color, Piece, PieceType};

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parse a FEN string into a board and the side to move.
pub fn parse_fen(fen: &str) -> Result<(Board, Color), String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    // En-passant square and clocks are allowed but ignored.

    let mut board = Board::empty();
    parse_placement(board_part, &mut board)?;
    let side = parse_side_to_move(side_part)?;
    board.set_castling_flags(parse_castling_flags(castling_part)?);

    Ok((board, side))
}

/// Print `board` with `side` to move as a FEN string.
pub fn generate_fen(board: &Board, side: Color) -> String {
    let mut out = String::new();

    for fen_rank in 0..BOARD_SIZE {
        let row = BOARD_SIZE - 1 - fen_rank;
        let mut empty_run = 0;
        for col in 0..BOARD_SIZE {
            match board.get_piece(row, col) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece_to_fen_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if fen_rank < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match side {
        Color::White => 'w',
        Color::Black => 'b',
    });
    out.push(' ');
    out.push_str(&castling_field(board));
    out.push_str(" - 0 1");

    out
}

fn parse_placement(board_part: &str, board: &mut Board) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank, rank_str) in ranks.iter().enumerate() {
        let row = BOARD_SIZE - 1 - fen_rank;
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                col += step;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;
            if col >= BOARD_SIZE {
                return Err("Board rank has too many files".to_owned());
            }
            board.set_piece(row, col, Some(piece));
            col += 1;
        }

        if col != BOARD_SIZE {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Color, String> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

/// Map the castling-rights field onto the six has-moved booleans. A right
/// that is absent marks its rook as moved; a side with neither right marks
/// its king as moved.
fn parse_castling_flags(castling_part: &str) -> Result<CastlingFlags, String> {
    let mut white_kingside = false;
    let mut white_queenside = false;
    let mut black_kingside = false;
    let mut black_queenside = false;

    if castling_part != "-" {
        for ch in castling_part.chars() {
            match ch {
                'K' => white_kingside = true,
                'Q' => white_queenside = true,
                'k' => black_kingside = true,
                'q' => black_queenside = true,
                _ => return Err(format!("Invalid castling rights character: {ch}")),
            }
        }
    }

    Ok(CastlingFlags {
        white_king_moved: !(white_kingside || white_queenside),
        black_king_moved: !(black_kingside || black_queenside),
        white_kingside_rook_moved: !white_kingside,
        white_queenside_rook_moved: !white_queenside,
        black_kingside_rook_moved: !black_kingside,
        black_queenside_rook_moved: !black_queenside,
    })
}

/// A right is emitted only while its king and rook both sit unmoved on
/// their original squares.
fn castling_field(board: &Board) -> String {
    let flags = board.castling_flags();
    let mut field = String::new();

    for (color, kingside_ch, queenside_ch) in
        [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')]
    {
        let row = color.home_row();
        let king_in_place = !flags.king_moved(color)
            && board.get_piece(row, 4) == Some(Piece::new(PieceType::King, color));
        if !king_in_place {
            continue;
        }
        if !flags.kingside_rook_moved(color)
            && board.get_piece(row, 7) == Some(Piece::new(PieceType::Rook, color))
        {
            field.push(kingside_ch);
        }
        if !flags.queenside_rook_moved(color)
            && board.get_piece(row, 0) == Some(Piece::new(PieceType::Rook, color))
        {
            field.push(queenside_ch);
        }
    }

    if field.is_empty() {
        field.push('-');
    }
    field
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else {
        Color::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceType::Pawn,
        'n' => PieceType::Knight,
        'b' => PieceType::Bishop,
        'r' => PieceType::Rook,
        'q' => PieceType::Queen,
        'k' => PieceType::King,
        _ => return None,
    };
    Some(Piece::new(kind, color))
}

fn piece_to_fen_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceType::Pawn => 'p',
        PieceType::Knight => 'n',
        PieceType::Bishop => 'b',
        PieceType::Rook => 'r',
        PieceType::Queen => 'q',
        PieceType::King => 'k',
    };
    match piece.color {
        Color::White => ch.to_ascii_uppercase(),
        Color::Black => ch,
    }
}
