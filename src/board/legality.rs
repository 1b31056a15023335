//! Authoritative move legality: piece geometry, path scans, castling
//! eligibility, and the self-check filter.
//!
//! Every candidate that is not a castle is trial-applied to a value copy of
//! the board and rejected if the mover's own king ends up attacked; castling
//! is judged entirely by its precondition set, whose transit-square attack
//! scan subsumes the generic self-check test.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::{Color, Piece, PieceType};

/// Which wing a castle targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

impl Board {
    /// The authoritative legality check for `mover`.
    ///
    /// Combines bounds and ownership checks, the piece-specific movement
    /// rule, castling eligibility for two-column king moves, and the
    /// self-check filter. The board is left untouched.
    pub fn is_legal_move(&self, mv: &Move, mover: Color) -> bool {
        if !Board::is_inside(mv.from_row, mv.from_col) || !Board::is_inside(mv.to_row, mv.to_col) {
            return false;
        }

        let piece = match self.get_piece(mv.from_row, mv.from_col) {
            Some(piece) if piece.color == mover => piece,
            _ => return false,
        };

        if let Some(target) = self.get_piece(mv.to_row, mv.to_col) {
            if target.color == mover {
                return false;
            }
        }

        // The castling flag and the two-column king geometry must agree:
        // apply_move relocates the rook off the flag alone.
        let castle_shaped = piece.kind == PieceType::King && mv.is_two_column_step();
        if mv.is_castling != castle_shaped {
            return false;
        }
        if castle_shaped {
            let side = if mv.to_col > mv.from_col {
                CastlingSide::Kingside
            } else {
                CastlingSide::Queenside
            };
            return self.can_castle(mover, side);
        }

        if !self.piece_rule_allows(piece, mv) {
            return false;
        }

        // Self-check filter on a value copy of the grid.
        let mut trial = self.clone();
        trial.apply_move(mv);
        !trial.is_in_check(mover)
    }

    /// Castling eligibility for `color` on `side`, judged on the pre-move
    /// board: the king and the wing rook sit on their original squares and
    /// have never moved, the squares strictly between them are empty, the
    /// king is not in check, and the squares the king transits and lands on
    /// are not attacked.
    pub fn can_castle(&self, color: Color, side: CastlingSide) -> bool {
        let row = color.home_row();
        let flags = self.castling_flags();

        if flags.king_moved(color) {
            return false;
        }
        if self.get_piece(row, 4) != Some(Piece::new(PieceType::King, color)) {
            return false;
        }

        let (rook_moved, rook_col, between, transit): (bool, usize, &[usize], [usize; 2]) =
            match side {
                CastlingSide::Kingside => (flags.kingside_rook_moved(color), 7, &[5, 6], [5, 6]),
                CastlingSide::Queenside => {
                    (flags.queenside_rook_moved(color), 0, &[1, 2, 3], [2, 3])
                }
            };

        if rook_moved {
            return false;
        }
        if self.get_piece(row, rook_col) != Some(Piece::new(PieceType::Rook, color)) {
            return false;
        }
        if between.iter().any(|&col| self.get_piece(row, col).is_some()) {
            return false;
        }

        if self.is_in_check(color) {
            return false;
        }
        let enemy = color.opposite();
        if transit
            .iter()
            .any(|&col| self.is_square_attacked(row, col, enemy))
        {
            return false;
        }

        true
    }

    /// Piece-specific movement rule; bounds, ownership, and the self-check
    /// filter are handled by the caller.
    fn piece_rule_allows(&self, piece: Piece, mv: &Move) -> bool {
        let row_delta = mv.to_row as i32 - mv.from_row as i32;
        let col_delta = mv.to_col as i32 - mv.from_col as i32;

        match piece.kind {
            PieceType::Pawn => self.pawn_rule_allows(piece.color, mv, row_delta, col_delta),
            PieceType::Knight => {
                let (dr, dc) = (row_delta.abs(), col_delta.abs());
                (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
            }
            PieceType::Bishop => {
                row_delta.abs() == col_delta.abs()
                    && self.is_path_clear(mv.from_row, mv.from_col, mv.to_row, mv.to_col)
            }
            PieceType::Rook => {
                (row_delta == 0 || col_delta == 0)
                    && self.is_path_clear(mv.from_row, mv.from_col, mv.to_row, mv.to_col)
            }
            PieceType::Queen => {
                (row_delta.abs() == col_delta.abs() || row_delta == 0 || col_delta == 0)
                    && self.is_path_clear(mv.from_row, mv.from_col, mv.to_row, mv.to_col)
            }
            PieceType::King => row_delta.abs() <= 1 && col_delta.abs() <= 1,
        }
    }

    fn pawn_rule_allows(&self, color: Color, mv: &Move, row_delta: i32, col_delta: i32) -> bool {
        let dir = color.forward();
        let target = self.get_piece(mv.to_row, mv.to_col);

        if col_delta == 0 {
            // Forward moves never capture.
            if target.is_some() {
                return false;
            }
            if row_delta == dir {
                return true;
            }
            if mv.from_row == color.pawn_row() && row_delta == 2 * dir {
                let mid_row = (mv.from_row as i32 + dir) as usize;
                return self.get_piece(mid_row, mv.from_col).is_none();
            }
            return false;
        }

        // Diagonal steps are capture-only; no en passant.
        if col_delta.abs() == 1 && row_delta == dir {
            return matches!(target, Some(t) if t.color != color);
        }

        false
    }

    /// Every square strictly between origin and destination must be empty.
    /// Assumes the two squares are aligned on a rank, file, or diagonal.
    pub(crate) fn is_path_clear(
        &self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        let row_step = (to_row as i32 - from_row as i32).signum();
        let col_step = (to_col as i32 - from_col as i32).signum();

        let mut row = from_row as i32 + row_step;
        let mut col = from_col as i32 + col_step;
        while (row, col) != (to_row as i32, to_col as i32) {
            if self.get_piece(row as usize, col as usize).is_some() {
                return false;
            }
            row += row_step;
            col += col_step;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::CastlingSide;
    use crate::board::board::Board;
    use crate::board::chess_move::Move;
    use crate::board::chess_types::{Color, Piece, PieceType};
    use crate::utils::fen::parse_fen;

    #[test]
    fn startpos_pawn_and_knight_moves_are_legal() {
        let board = Board::new();
        assert!(board.is_legal_move(&Move::new(1, 4, 2, 4), Color::White));
        assert!(board.is_legal_move(&Move::new(1, 4, 3, 4), Color::White));
        assert!(board.is_legal_move(&Move::new(0, 1, 2, 2), Color::White));
        assert!(board.is_legal_move(&Move::new(6, 3, 4, 3), Color::Black));
    }

    #[test]
    fn startpos_rejects_blocked_and_wrong_color_moves() {
        let board = Board::new();
        // Rook, bishop, and queen are boxed in.
        assert!(!board.is_legal_move(&Move::new(0, 0, 3, 0), Color::White));
        assert!(!board.is_legal_move(&Move::new(0, 2, 2, 4), Color::White));
        assert!(!board.is_legal_move(&Move::new(0, 3, 2, 3), Color::White));
        // Moving the opponent's piece.
        assert!(!board.is_legal_move(&Move::new(6, 4, 5, 4), Color::White));
        // Capturing your own piece.
        assert!(!board.is_legal_move(&Move::new(0, 0, 1, 0), Color::White));
        // Out of bounds.
        assert!(!board.is_legal_move(&Move::new(1, 4, 8, 4), Color::White));
    }

    #[test]
    fn pawn_double_step_requires_start_rank_and_clear_path() {
        let (board, _) =
            parse_fen("rnbqkbnr/pppppppp/8/8/8/4P3/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
                .expect("FEN should parse");
        // The e-pawn already advanced; no second double step.
        assert!(!board.is_legal_move(&Move::new(2, 4, 4, 4), Color::White));

        let (blocked, _) =
            parse_fen("rnbqkbnr/pppp1ppp/8/8/8/4p3/PPPPPPPP/RNBQKBNR w KQkq - 0 1")
                .expect("FEN should parse");
        // Black pawn on e3 blocks both the single and double push.
        assert!(!blocked.is_legal_move(&Move::new(1, 4, 2, 4), Color::White));
        assert!(!blocked.is_legal_move(&Move::new(1, 4, 3, 4), Color::White));
        // Diagonal captures of that pawn are available.
        assert!(blocked.is_legal_move(&Move::new(1, 3, 2, 4), Color::White));
        assert!(blocked.is_legal_move(&Move::new(1, 5, 2, 4), Color::White));
    }

    #[test]
    fn pawn_diagonal_requires_an_enemy_target() {
        let board = Board::new();
        assert!(!board.is_legal_move(&Move::new(1, 4, 2, 5), Color::White));
    }

    #[test]
    fn pinned_piece_may_not_expose_its_king() {
        let (board, _) = parse_fen("4r3/8/8/8/8/8/4N3/4K3 w - - 0 1").expect("FEN should parse");
        // The knight is pinned to the king by the rook on e8.
        assert!(!board.is_legal_move(&Move::new(1, 4, 2, 2), Color::White));
        assert!(!board.is_legal_move(&Move::new(1, 4, 3, 3), Color::White));
        // The king itself may step aside.
        assert!(board.is_legal_move(&Move::new(0, 4, 0, 3), Color::White));
    }

    #[test]
    fn moving_into_an_attacked_square_is_rejected() {
        let (board, _) = parse_fen("4r3/8/8/8/8/8/8/3K4 w - - 0 1").expect("FEN should parse");
        assert!(!board.is_legal_move(&Move::new(0, 3, 0, 4), Color::White));
        assert!(board.is_legal_move(&Move::new(0, 3, 0, 2), Color::White));
    }

    #[test]
    fn castling_is_legal_on_a_cleared_home_rank() {
        let (board, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(board.can_castle(Color::White, CastlingSide::Kingside));
        assert!(board.can_castle(Color::White, CastlingSide::Queenside));
        assert!(board.can_castle(Color::Black, CastlingSide::Kingside));
        assert!(board.can_castle(Color::Black, CastlingSide::Queenside));
        assert!(board.is_legal_move(&Move::castling(0, 4, 0, 6), Color::White));
        assert!(board.is_legal_move(&Move::castling(0, 4, 0, 2), Color::White));
    }

    #[test]
    fn castling_flag_and_geometry_must_agree() {
        let (board, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        // Two-column king move without the flag.
        assert!(!board.is_legal_move(&Move::new(0, 4, 0, 6), Color::White));
        // Flagged move that is not a two-column king move.
        assert!(!board.is_legal_move(&Move::castling(0, 4, 0, 5), Color::White));
        assert!(!board.is_legal_move(&Move::castling(0, 0, 0, 2), Color::White));
    }

    #[test]
    fn castling_is_rejected_once_the_king_or_rook_has_moved() {
        let (mut board, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");

        // Shuffle the kingside rook away and back.
        let out = Move::new(0, 7, 0, 6);
        let back = Move::new(0, 6, 0, 7);
        board.apply_move(&out);
        board.apply_move(&back);
        assert!(!board.can_castle(Color::White, CastlingSide::Kingside));
        assert!(board.can_castle(Color::White, CastlingSide::Queenside));

        // Shuffle the king away and back: both wings are gone.
        board.apply_move(&Move::new(0, 4, 0, 5));
        board.apply_move(&Move::new(0, 5, 0, 4));
        assert!(!board.can_castle(Color::White, CastlingSide::Queenside));
    }

    #[test]
    fn castling_is_rejected_when_a_between_square_is_occupied() {
        let board = Board::new();
        assert!(!board.can_castle(Color::White, CastlingSide::Kingside));
        assert!(!board.can_castle(Color::White, CastlingSide::Queenside));

        let (queenside_blocked, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/RN2K2R w KQkq - 0 1").expect("FEN should parse");
        assert!(!queenside_blocked.can_castle(Color::White, CastlingSide::Queenside));
        assert!(queenside_blocked.can_castle(Color::White, CastlingSide::Kingside));
    }

    #[test]
    fn castling_is_rejected_out_of_check_or_through_attacks() {
        let (in_check, _) =
            parse_fen("4r3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        assert!(!in_check.can_castle(Color::White, CastlingSide::Kingside));
        assert!(!in_check.can_castle(Color::White, CastlingSide::Queenside));

        let (transit_attacked, _) =
            parse_fen("5r2/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!transit_attacked.can_castle(Color::White, CastlingSide::Kingside));

        let (landing_attacked, _) =
            parse_fen("6r1/8/8/8/8/8/8/4K2R w K - 0 1").expect("FEN should parse");
        assert!(!landing_attacked.can_castle(Color::White, CastlingSide::Kingside));
    }

    #[test]
    fn queenside_castling_ignores_attacks_on_the_rook_transit_column() {
        // Only columns 2 and 3 must be safe; an attack on column 1 is fine.
        let (board, _) = parse_fen("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1").expect("FEN should parse");
        assert!(board.can_castle(Color::White, CastlingSide::Queenside));
    }

    #[test]
    fn accepted_castling_never_leaves_the_king_in_check() {
        let (board, _) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("FEN should parse");
        for (color, mv) in [
            (Color::White, Move::castling(0, 4, 0, 6)),
            (Color::White, Move::castling(0, 4, 0, 2)),
            (Color::Black, Move::castling(7, 4, 7, 6)),
            (Color::Black, Move::castling(7, 4, 7, 2)),
        ] {
            assert!(board.is_legal_move(&mv, color));
            let mut after = board.clone();
            after.apply_move(&mv);
            assert!(
                !after.is_in_check(color),
                "castled king must be safe on the post-move board"
            );
        }
    }

    #[test]
    fn path_clear_scan_sees_blockers_in_any_direction() {
        let mut board = Board::empty();
        board.set_piece(3, 3, Some(Piece::new(PieceType::Pawn, Color::White)));
        assert!(!board.is_path_clear(0, 0, 7, 7));
        assert!(!board.is_path_clear(7, 7, 0, 0));
        assert!(!board.is_path_clear(3, 0, 3, 7));
        assert!(board.is_path_clear(0, 0, 0, 7));
        assert!(board.is_path_clear(3, 3, 3, 7));
    }
}
