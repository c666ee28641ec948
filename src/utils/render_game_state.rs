//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable board view for debugging, tests, and diagnostics
//! in text environments.

use crate::game_state::chess_types::{GameState, Piece, PieceKind, Player};

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 (Black's back rank) prints on top as rank 8, matching the standard
/// orientation. Written for the standard 8x8 board.
pub fn render_game_state(game: &GameState) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for row in 0..game.nrows() as i8 {
        let rank = game.nrows() as u8 - row as u8;
        out.push(char::from(b'0' + rank));
        out.push(' ');

        for col in 0..game.ncols() as i8 {
            match game.board().piece_on(row, col) {
                Some(piece) => out.push(piece_to_unicode(piece)),
                None => out.push('·'),
            }

            if col < game.ncols() as i8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + rank));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_to_unicode(piece: &Piece) -> char {
    match (piece.player, piece.kind) {
        (Player::White, PieceKind::Pawn) => '♙',
        (Player::White, PieceKind::Knight) => '♘',
        (Player::White, PieceKind::Bishop) => '♗',
        (Player::White, PieceKind::Rook) => '♖',
        (Player::White, PieceKind::Queen) => '♕',
        (Player::White, PieceKind::King) => '♔',
        (Player::Black, PieceKind::Pawn) => '♟',
        (Player::Black, PieceKind::Knight) => '♞',
        (Player::Black, PieceKind::Bishop) => '♝',
        (Player::Black, PieceKind::Rook) => '♜',
        (Player::Black, PieceKind::Queen) => '♛',
        (Player::Black, PieceKind::King) => '♚',
    }
}
