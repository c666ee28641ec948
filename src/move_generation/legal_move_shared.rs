//! Shared helpers for structural validation and attack scans.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceId};

/// Base check every piece applies before its shape rule: both endpoints on
/// the board, source differs from destination, the piece actually occupies
/// the source square, and the destination holds no friendly piece.
pub fn base_move_is_valid(board: &Board, id: PieceId, mv: Move) -> bool {
    if !board.in_bounds(mv.from_row, mv.from_col) || !board.in_bounds(mv.to_row, mv.to_col) {
        return false;
    }
    if mv.from_row == mv.to_row && mv.from_col == mv.to_col {
        return false;
    }
    // Identity, not equality: the arena id must sit on the source square.
    if board.square(mv.from_row, mv.from_col) != Some(id) {
        return false;
    }
    match board.piece_on(mv.to_row, mv.to_col) {
        Some(destination) => destination.player != board.piece(id).player,
        None => true,
    }
}

/// Every square strictly between the move's endpoints must be empty; the
/// endpoints themselves are not inspected. Assumes an aligned (straight or
/// diagonal) move with in-bounds endpoints.
pub fn path_is_clear(board: &Board, mv: Move) -> bool {
    let row_step = mv.row_delta().signum();
    let col_step = mv.col_delta().signum();
    let mut row = mv.from_row + row_step;
    let mut col = mv.from_col + col_step;
    while (row, col) != (mv.to_row, mv.to_col) {
        if board.square(row, col).is_some() {
            return false;
        }
        row += row_step;
        col += col_step;
    }
    true
}

/// Walk each ray from `(row, col)` and report whether `target` is reached
/// before the ray hits an occupied square or the board edge.
pub fn slides_to_square(
    board: &Board,
    row: i8,
    col: i8,
    target: (i8, i8),
    directions: &[(i8, i8)],
) -> bool {
    for &(row_step, col_step) in directions {
        let mut r = row + row_step;
        let mut c = col + col_step;
        while board.in_bounds(r, c) {
            if (r, c) == target {
                return true;
            }
            if board.square(r, c).is_some() {
                break;
            }
            r += row_step;
            c += col_step;
        }
    }
    false
}
