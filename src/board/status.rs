//! Check, checkmate, and stalemate classification.
//!
//! Attack detection evaluates piece-movement geometry only and never runs
//! the self-check filter, so check queries cannot recurse back into
//! `is_legal_move`. Two kings on adjacent squares count as mutually
//! attacking, which keeps a king from stepping into the other's guard.

use crate::board::board::{Board, BOARD_SIZE};
use crate::board::chess_move::Move;
use crate::board::chess_types::{Color, Piece, PieceType};

impl Board {
    /// True when `color`'s king is attacked. A kingless board is degenerate
    /// but defined: it reads as not in check.
    pub fn is_in_check(&self, color: Color) -> bool {
        let Some((king_row, king_col)) = self.king_square(color) else {
            return false;
        };
        self.is_square_attacked(king_row, king_col, color.opposite())
    }

    /// True when any piece of `attacker` can reach (`row`, `col`) under
    /// movement geometry alone.
    pub fn is_square_attacked(&self, row: usize, col: usize, attacker: Color) -> bool {
        for from_row in 0..BOARD_SIZE {
            for from_col in 0..BOARD_SIZE {
                let Some(piece) = self.get_piece(from_row, from_col) else {
                    continue;
                };
                if piece.color != attacker {
                    continue;
                }
                if self.attacks_square(piece, from_row, from_col, row, col) {
                    return true;
                }
            }
        }
        false
    }

    /// `color` is in check and has no legal move.
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// `color` is not in check and has no legal move.
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Short-circuiting probe over the same candidate set as
    /// `move_list::legal_moves_for`: every origin/destination quadruple for
    /// `color`'s pieces plus trial castling moves for kings.
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        for from_row in 0..BOARD_SIZE {
            for from_col in 0..BOARD_SIZE {
                let Some(piece) = self.get_piece(from_row, from_col) else {
                    continue;
                };
                if piece.color != color {
                    continue;
                }

                if piece.kind == PieceType::King {
                    if from_col + 2 < BOARD_SIZE
                        && self.is_legal_move(
                            &Move::castling(from_row, from_col, from_row, from_col + 2),
                            color,
                        )
                    {
                        return true;
                    }
                    if from_col >= 2
                        && self.is_legal_move(
                            &Move::castling(from_row, from_col, from_row, from_col - 2),
                            color,
                        )
                    {
                        return true;
                    }
                }

                for to_row in 0..BOARD_SIZE {
                    for to_col in 0..BOARD_SIZE {
                        if self.is_legal_move(&Move::new(from_row, from_col, to_row, to_col), color)
                        {
                            return true;
                        }
                    }
                }
            }
        }
        false
    }

    /// Geometry-only attack test for one piece; sliders still require a
    /// clear path, but no king-safety reasoning happens here.
    fn attacks_square(
        &self,
        piece: Piece,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        let row_delta = to_row as i32 - from_row as i32;
        let col_delta = to_col as i32 - from_col as i32;
        if row_delta == 0 && col_delta == 0 {
            return false;
        }

        match piece.kind {
            PieceType::Pawn => row_delta == piece.color.forward() && col_delta.abs() == 1,
            PieceType::Knight => {
                let (dr, dc) = (row_delta.abs(), col_delta.abs());
                (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
            }
            PieceType::Bishop => {
                row_delta.abs() == col_delta.abs()
                    && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            PieceType::Rook => {
                (row_delta == 0 || col_delta == 0)
                    && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            PieceType::Queen => {
                (row_delta.abs() == col_delta.abs() || row_delta == 0 || col_delta == 0)
                    && self.is_path_clear(from_row, from_col, to_row, to_col)
            }
            // Adjacent kings attack each other.
            PieceType::King => row_delta.abs() <= 1 && col_delta.abs() <= 1,
        }
    }
}
