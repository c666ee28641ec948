//! Core game model: validation, execution, undo, and game-over detection.
//!
//! `GameState` is the single entry point external collaborators (a UI, an
//! engine player, persistence) drive. It owns the board, the side to move,
//! the outcome of the most recent validation, and the undo stack used by the
//! make/undo workflow. Legality is decided in two phases: the structural
//! per-piece rules, then a speculative application of the move to rule out
//! leaving one's own king in check. The speculation is scoped so the board is
//! restored on every path and no side effect of a rejected or hypothetical
//! move is ever observable.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessError;
use crate::game_state::chess_rules::{promotion_row, BOARD_COLS, BOARD_ROWS, STARTING_PLAYER};
use crate::game_state::chess_types::{Move, MoveValidity, Piece, PieceKind, Player};
use crate::game_state::undo_state::UndoState;
use crate::move_generation::legal_move_checks::{is_king_in_check, piece_move_is_valid};
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    message_code: MoveValidity,
    undo_stack: Vec<UndoState>,
}

impl GameState {
    /// Fresh game with the standard arrangement, White to move.
    pub fn new_game() -> Self {
        Self {
            board: Board::standard(),
            current_player: STARTING_PLAYER,
            message_code: MoveValidity::Valid,
            undo_stack: Vec::new(),
        }
    }

    /// Empty standard-sized board, White to move. For setup and tests.
    pub fn new_empty() -> Self {
        Self {
            board: Board::empty(BOARD_ROWS, BOARD_COLS),
            current_player: STARTING_PLAYER,
            message_code: MoveValidity::Valid,
            undo_stack: Vec::new(),
        }
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.board.nrows()
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.board.ncols()
    }

    #[inline]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Outcome of the most recent validation or execution attempt.
    #[inline]
    pub fn message_code(&self) -> MoveValidity {
        self.message_code
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Validate a move for the current player and record the outcome in
    /// [`Self::message_code`].
    pub fn is_valid_move(&mut self, mv: Move) -> bool {
        let (legal, code) = self.assess_move(mv);
        self.message_code = code;
        legal
    }

    /// Evaluate a move without leaving any observable state change.
    ///
    /// Structural rejection is `Invalid`. A structurally sound move is then
    /// applied speculatively inside [`Board::with_move_applied`] to classify
    /// the check consequences for the mover.
    pub(crate) fn assess_move(&mut self, mv: Move) -> (bool, MoveValidity) {
        if !self.board.in_bounds(mv.from_row, mv.from_col)
            || !self.board.in_bounds(mv.to_row, mv.to_col)
        {
            return (false, MoveValidity::Invalid);
        }

        let Some(id) = self.board.square(mv.from_row, mv.from_col) else {
            return (false, MoveValidity::Invalid);
        };
        let mover = self.board.piece(id).player;
        if mover != self.current_player {
            return (false, MoveValidity::Invalid);
        }

        if !piece_move_is_valid(&self.board, id, mv) {
            return (false, MoveValidity::Invalid);
        }

        let currently_in_check = is_king_in_check(&self.board, mover);
        let still_in_check = self
            .board
            .with_move_applied(mv, |board| is_king_in_check(board, mover));

        if still_in_check {
            if currently_in_check {
                return (false, MoveValidity::StayingInCheck);
            }
            return (false, MoveValidity::MovingIntoCheck);
        }
        (true, MoveValidity::Valid)
    }

    /// Execute a move. A rejected move records its outcome and leaves board,
    /// turn, and history exactly as before the call.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let (legal, code) = self.assess_move(mv);
        self.message_code = code;
        if !legal {
            return false;
        }

        let id = self
            .board
            .square(mv.from_row, mv.from_col)
            .expect("legal move starts from an occupied square");
        let piece = *self.board.piece(id);
        let captured = self.board.square(mv.to_row, mv.to_col);

        let mut entry = UndoState {
            mv,
            moved_piece: id,
            captured_piece: captured,
            promoted_to: None,
            prev_first_move: piece.first_move,
            prev_player: self.current_player,
        };

        self.board.place(mv.from_row, mv.from_col, None);

        if piece.kind == PieceKind::Pawn {
            self.board.piece_mut(id).first_move = false;
            if mv.to_row == promotion_row(piece.player, self.board.nrows()) {
                let queen = self
                    .board
                    .insert(mv.to_row, mv.to_col, Piece::new(PieceKind::Queen, piece.player));
                entry.promoted_to = Some(queen);
            } else {
                self.board.place(mv.to_row, mv.to_col, Some(id));
            }
        } else {
            self.board.place(mv.to_row, mv.to_col, Some(id));
        }

        self.undo_stack.push(entry);
        self.current_player = self.current_player.next();
        true
    }

    /// Undo the most recent executed move.
    ///
    /// Restores grid occupancy, the moved piece's `first_move` snapshot, and
    /// the side to move. A promoted queen leaves the grid and the original
    /// pawn returns; the queen stays in the arena, unreferenced.
    pub fn undo(&mut self) -> Result<(), ChessError> {
        let Some(entry) = self.undo_stack.pop() else {
            return Err(ChessError::NothingToUndo);
        };

        let mv = entry.mv;
        self.board.place(mv.to_row, mv.to_col, entry.captured_piece);
        self.board.place(mv.from_row, mv.from_col, Some(entry.moved_piece));
        self.board.piece_mut(entry.moved_piece).first_move = entry.prev_first_move;
        self.current_player = entry.prev_player;
        self.message_code = MoveValidity::Valid;
        Ok(())
    }

    /// Whether `player`'s king is attacked.
    #[inline]
    pub fn in_check(&self, player: Player) -> bool {
        is_king_in_check(&self.board, player)
    }

    /// True when the current player has no legal move: checkmate if also in
    /// check, stalemate otherwise.
    pub fn is_complete(&mut self) -> bool {
        !has_any_legal_move(self)
    }

    /// Guarded board read.
    #[inline]
    pub fn piece_at(&self, row: i8, col: i8) -> Result<Option<&Piece>, ChessError> {
        self.board.piece_at(row, col)
    }

    /// Direct board mutation for setup and tests. `None` clears the square.
    #[inline]
    pub fn set_piece(&mut self, row: i8, col: i8, piece: Option<Piece>) -> Result<(), ChessError> {
        self.board.set_piece(row, col, piece)
    }
}
