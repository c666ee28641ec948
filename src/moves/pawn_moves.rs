//! Pawn movement and attack rules.
//!
//! Pawns are the only piece whose rules read mutable piece state: the
//! `first_move` flag gates the two-square opening advance. The predicate is
//! pure — the flag is flipped by the execution layer, never here.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::forward_direction;
use crate::game_state::chess_types::{Move, Piece, Player};

/// Shape rule for a pawn move. Assumes the shared base check passed.
pub fn pawn_move_is_valid(board: &Board, piece: &Piece, mv: Move) -> bool {
    let dr = mv.row_delta();
    let dc = mv.col_delta();
    let direction = forward_direction(piece.player);
    let destination = board.piece_on(mv.to_row, mv.to_col);

    if dc == 0 {
        // Forward moves never capture.
        if destination.is_some() {
            return false;
        }
        if dr == direction {
            return true;
        }
        if piece.first_move && dr == 2 * direction {
            return board
                .piece_on(mv.from_row + direction, mv.from_col)
                .is_none();
        }
        return false;
    }

    // One-column diagonal forward step, capture only.
    dc.abs() == 1
        && dr == direction
        && matches!(destination, Some(target) if target.player != piece.player)
}

/// True when a pawn owned by `player` on `(row, col)` attacks `target`.
#[inline]
pub fn pawn_attacks_square(player: Player, row: i8, col: i8, target: (i8, i8)) -> bool {
    let direction = forward_direction(player);
    target.0 == row + direction && (target.1 == col - 1 || target.1 == col + 1)
}

#[cfg(test)]
mod tests {
    use super::pawn_attacks_square;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Move, Piece, PieceKind, Player};
    use crate::move_generation::legal_move_checks::piece_move_is_valid;

    #[test]
    fn white_pawn_single_and_double_step() {
        let mut board = Board::empty(8, 8);
        let pawn = board.insert(6, 4, Piece::new(PieceKind::Pawn, Player::White));

        assert!(piece_move_is_valid(&board, pawn, Move::new(6, 4, 5, 4)));
        assert!(piece_move_is_valid(&board, pawn, Move::new(6, 4, 4, 4)));
        // Validation is pure: the opening flag is untouched.
        assert!(board.piece(pawn).first_move);

        // Once the flag clears, the double step is gone but the single
        // step remains.
        board.piece_mut(pawn).first_move = false;
        assert!(!piece_move_is_valid(&board, pawn, Move::new(6, 4, 4, 4)));
        assert!(piece_move_is_valid(&board, pawn, Move::new(6, 4, 5, 4)));
    }

    #[test]
    fn double_step_requires_a_clear_intermediate_square() {
        let mut board = Board::empty(8, 8);
        let pawn = board.insert(1, 3, Piece::new(PieceKind::Pawn, Player::Black));
        board.insert(2, 3, Piece::new(PieceKind::Knight, Player::White));

        assert!(!piece_move_is_valid(&board, pawn, Move::new(1, 3, 3, 3)));

        board.set_piece(2, 3, None).unwrap();
        assert!(piece_move_is_valid(&board, pawn, Move::new(1, 3, 3, 3)));
    }

    #[test]
    fn forward_step_cannot_capture() {
        let mut board = Board::empty(8, 8);
        let pawn = board.insert(6, 4, Piece::new(PieceKind::Pawn, Player::White));
        board.insert(5, 4, Piece::new(PieceKind::Rook, Player::Black));

        assert!(!piece_move_is_valid(&board, pawn, Move::new(6, 4, 5, 4)));
        assert!(!piece_move_is_valid(&board, pawn, Move::new(6, 4, 4, 4)));
    }

    #[test]
    fn diagonal_step_is_capture_only() {
        let mut board = Board::empty(8, 8);
        let pawn = board.insert(6, 2, Piece::new(PieceKind::Pawn, Player::White));

        assert!(!piece_move_is_valid(&board, pawn, Move::new(6, 2, 5, 3)));

        board.insert(5, 3, Piece::new(PieceKind::Bishop, Player::Black));
        assert!(piece_move_is_valid(&board, pawn, Move::new(6, 2, 5, 3)));

        board.insert(5, 1, Piece::new(PieceKind::Bishop, Player::White));
        assert!(!piece_move_is_valid(&board, pawn, Move::new(6, 2, 5, 1)));
    }

    #[test]
    fn attack_squares_are_the_forward_diagonals_only() {
        assert!(pawn_attacks_square(Player::White, 6, 4, (5, 3)));
        assert!(pawn_attacks_square(Player::White, 6, 4, (5, 5)));
        assert!(!pawn_attacks_square(Player::White, 6, 4, (5, 4)));
        assert!(!pawn_attacks_square(Player::White, 6, 4, (7, 3)));
        assert!(pawn_attacks_square(Player::Black, 1, 4, (2, 5)));
        assert!(!pawn_attacks_square(Player::Black, 1, 4, (0, 3)));
    }
}
