//! Turn orchestration between a human mover and the configured AI tier.
//!
//! `GameEngine` owns the live board, tracks whose turn it is, applies
//! validated player moves, and dispatches to the selected strategy when the
//! turn belongs to the AI color. It never classifies outcomes itself; the
//! interaction surface queries the board's check/checkmate/stalemate
//! predicates alongside the ended flag.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::chess_types::Color;
use crate::engines::engine_trait::{AiLevel, Engine};

pub struct GameEngine {
    board: Board,
    current_turn: Color,
    ai_level: Option<AiLevel>,
    ai_color: Option<Color>,
    strategy: Option<Box<dyn Engine>>,
    move_count: u32,
    game_ended: bool,
}

impl GameEngine {
    /// Fresh game from the standard starting position. When an AI level is
    /// given the AI plays Black by default; `set_ai_color` overrides this.
    pub fn new(ai_level: Option<AiLevel>) -> Self {
        Self::build(Board::new(), Color::White, ai_level, None)
    }

    /// Fresh game whose AI breaks ties deterministically.
    pub fn with_seed(ai_level: Option<AiLevel>, seed: u64) -> Self {
        Self::build(Board::new(), Color::White, ai_level, Some(seed))
    }

    /// Game resumed from an arbitrary position, with a deterministic AI.
    pub fn from_position(board: Board, turn: Color, ai_level: Option<AiLevel>, seed: u64) -> Self {
        Self::build(board, turn, ai_level, Some(seed))
    }

    fn build(board: Board, turn: Color, ai_level: Option<AiLevel>, seed: Option<u64>) -> Self {
        let strategy = ai_level.map(|level| match seed {
            Some(seed) => level.build_with_seed(seed),
            None => level.build(),
        });
        Self {
            board,
            current_turn: turn,
            ai_level,
            ai_color: ai_level.map(|_| Color::Black),
            strategy,
            move_count: 0,
            game_ended: false,
        }
    }

    /// Assign the color the AI plays; the human plays the opposite side.
    /// Intended to be called before the first move.
    pub fn set_ai_color(&mut self, color: Color) {
        if self.ai_level.is_some() {
            self.ai_color = Some(color);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn ai_level(&self) -> Option<AiLevel> {
        self.ai_level
    }

    pub fn ai_color(&self) -> Option<Color> {
        self.ai_color
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn is_game_ended(&self) -> bool {
        self.game_ended
    }

    /// External termination: resignation or an agreed draw.
    pub fn set_game_ended(&mut self, ended: bool) {
        self.game_ended = ended;
    }

    /// Validate and apply a move for the side to move. On success the move
    /// counter advances and the turn flips; on failure nothing changes and
    /// the caller should surface a rejected move, not a crash.
    pub fn make_player_move(&mut self, mv: &Move) -> bool {
        match self.board.get_piece(mv.from_row, mv.from_col) {
            Some(piece) if piece.color == self.current_turn => {}
            _ => return false,
        }
        if !self.board.is_legal_move(mv, self.current_turn) {
            return false;
        }

        self.board.apply_move(mv);
        self.move_count += 1;
        self.current_turn = self.current_turn.opposite();
        true
    }

    /// Let the configured strategy move if the turn belongs to the AI
    /// color; a no-op otherwise. Returns the applied move, or `None` either
    /// when nothing was due or when the strategy had no legal move. The
    /// latter also sets the ended flag, and the caller distinguishes
    /// checkmate from stalemate by querying the board.
    pub fn trigger_ai_move_if_due(&mut self) -> Option<Move> {
        if self.game_ended {
            return None;
        }
        let ai_color = self.ai_color?;
        if self.current_turn != ai_color {
            return None;
        }
        let strategy = self.strategy.as_mut()?;

        match strategy.choose_move(&self.board, ai_color) {
            Some(mv) => {
                self.board.apply_move(&mv);
                self.move_count += 1;
                self.current_turn = self.current_turn.opposite();
                Some(mv)
            }
            None => {
                self.game_ended = true;
                None
            }
        }
    }
}
