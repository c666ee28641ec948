//! Structural move validation and check detection.
//!
//! `piece_move_is_valid` combines the shared base check with the per-kind
//! shape rules. The attack scan is deliberately independent of move
//! validation: `is_square_attacked` tests every opposing piece against its
//! own attack geometry, with sliding rays stopping at the first occupied
//! square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceId, PieceKind, Player};
use crate::move_generation::legal_move_shared::base_move_is_valid;
use crate::moves::bishop_moves::{bishop_attacks_square, bishop_move_is_valid};
use crate::moves::king_moves::{king_attacks_square, king_move_is_valid};
use crate::moves::knight_moves::{knight_attacks_square, knight_move_is_valid};
use crate::moves::pawn_moves::{pawn_attacks_square, pawn_move_is_valid};
use crate::moves::queen_moves::{queen_attacks_square, queen_move_is_valid};
use crate::moves::rook_moves::{rook_attacks_square, rook_move_is_valid};

/// Structural validator: the shared base check, then the shape rule for the
/// piece's kind. Pure with respect to board and piece state.
pub fn piece_move_is_valid(board: &Board, id: PieceId, mv: Move) -> bool {
    if !base_move_is_valid(board, id, mv) {
        return false;
    }
    let piece = board.piece(id);
    match piece.kind {
        PieceKind::Pawn => pawn_move_is_valid(board, piece, mv),
        PieceKind::Knight => knight_move_is_valid(mv),
        PieceKind::Bishop => bishop_move_is_valid(board, mv),
        PieceKind::Rook => rook_move_is_valid(board, mv),
        PieceKind::Queen => queen_move_is_valid(board, mv),
        PieceKind::King => king_move_is_valid(mv),
    }
}

/// Locate a player's king by full-board scan.
pub fn king_square(board: &Board, player: Player) -> Option<(i8, i8)> {
    for row in 0..board.nrows() as i8 {
        for col in 0..board.ncols() as i8 {
            if let Some(piece) = board.piece_on(row, col) {
                if piece.kind == PieceKind::King && piece.player == player {
                    return Some((row, col));
                }
            }
        }
    }
    None
}

/// Whether any piece owned by `attacker` attacks `target`.
pub fn is_square_attacked(board: &Board, target: (i8, i8), attacker: Player) -> bool {
    for row in 0..board.nrows() as i8 {
        for col in 0..board.ncols() as i8 {
            let Some(piece) = board.piece_on(row, col) else {
                continue;
            };
            if piece.player != attacker {
                continue;
            }
            let attacks = match piece.kind {
                PieceKind::Pawn => pawn_attacks_square(piece.player, row, col, target),
                PieceKind::Knight => knight_attacks_square(row, col, target),
                PieceKind::Bishop => bishop_attacks_square(board, row, col, target),
                PieceKind::Rook => rook_attacks_square(board, row, col, target),
                PieceKind::Queen => queen_attacks_square(board, row, col, target),
                PieceKind::King => king_attacks_square(row, col, target),
            };
            if attacks {
                return true;
            }
        }
    }
    false
}

/// Whether `player`'s king is attacked. False when the player has no king on
/// the board, which does not occur in a legally initialized game.
#[inline]
pub fn is_king_in_check(board: &Board, player: Player) -> bool {
    let Some(king) = king_square(board, player) else {
        return false;
    };
    is_square_attacked(board, king, player.next())
}
