//! Canonical chess-rule constants.
//!
//! This module stores static rule-related literals: board dimensions, the
//! standard starting arrangement, and the per-player direction conventions
//! used by pawn movement and promotion.

use crate::game_state::chess_types::{PieceKind, Player};

pub const BOARD_ROWS: usize = 8;
pub const BOARD_COLS: usize = 8;

/// Back-rank arrangement shared by both players, left to right.
pub const BACK_RANK: [PieceKind; BOARD_COLS] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const STARTING_PLAYER: Player = Player::White;

/// Row step a pawn advances by. White's home rows are at the bottom of the
/// grid, so White moves toward row 0.
#[inline]
pub const fn forward_direction(player: Player) -> i8 {
    match player {
        Player::White => -1,
        Player::Black => 1,
    }
}

/// Terminal rank at which a pawn promotes.
#[inline]
pub const fn promotion_row(player: Player, nrows: usize) -> i8 {
    match player {
        Player::White => 0,
        Player::Black => (nrows - 1) as i8,
    }
}
