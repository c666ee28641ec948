use crate::game_state::chess_types::{Move, PieceId, Player};

/// Single undo record for `make_move` / `undo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,
    pub moved_piece: PieceId,
    pub captured_piece: Option<PieceId>,
    /// Queen substituted onto the destination when a pawn promoted.
    pub promoted_to: Option<PieceId>,

    pub prev_first_move: bool,
    pub prev_player: Player,
}
