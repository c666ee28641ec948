//! Queen movement rules: the union of the bishop and rook rules, sharing
//! their path scans.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::moves::bishop_moves::{bishop_attacks_square, bishop_move_is_valid};
use crate::moves::rook_moves::{rook_attacks_square, rook_move_is_valid};

#[inline]
pub fn queen_move_is_valid(board: &Board, mv: Move) -> bool {
    bishop_move_is_valid(board, mv) || rook_move_is_valid(board, mv)
}

#[inline]
pub fn queen_attacks_square(board: &Board, row: i8, col: i8, target: (i8, i8)) -> bool {
    bishop_attacks_square(board, row, col, target) || rook_attacks_square(board, row, col, target)
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Move, Piece, PieceKind, Player};
    use crate::move_generation::legal_move_checks::piece_move_is_valid;

    #[test]
    fn moves_along_both_axes_and_diagonals() {
        let mut board = Board::empty(8, 8);
        let queen = board.insert(3, 3, Piece::new(PieceKind::Queen, Player::White));

        assert!(piece_move_is_valid(&board, queen, Move::new(3, 3, 3, 7)));
        assert!(piece_move_is_valid(&board, queen, Move::new(3, 3, 0, 3)));
        assert!(piece_move_is_valid(&board, queen, Move::new(3, 3, 0, 0)));
        assert!(piece_move_is_valid(&board, queen, Move::new(3, 3, 7, 7)));
        assert!(!piece_move_is_valid(&board, queen, Move::new(3, 3, 5, 4)));
    }

    #[test]
    fn blocked_rays_stop_the_queen() {
        let mut board = Board::empty(8, 8);
        let queen = board.insert(3, 3, Piece::new(PieceKind::Queen, Player::Black));
        board.insert(3, 5, Piece::new(PieceKind::Pawn, Player::White));
        board.insert(5, 5, Piece::new(PieceKind::Pawn, Player::Black));

        assert!(!piece_move_is_valid(&board, queen, Move::new(3, 3, 3, 7)));
        assert!(piece_move_is_valid(&board, queen, Move::new(3, 3, 3, 5)));
        // Friendly blocker: neither the square nor anything beyond it.
        assert!(!piece_move_is_valid(&board, queen, Move::new(3, 3, 5, 5)));
        assert!(!piece_move_is_valid(&board, queen, Move::new(3, 3, 7, 7)));
    }
}
