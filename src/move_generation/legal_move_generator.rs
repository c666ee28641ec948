//! Legal move enumeration for the side to move.
//!
//! An exhaustive (source, destination) sweep filtered through the game's own
//! assessment, so enumeration and validation can never disagree. Quadratic in
//! board area, which is fine at board scale.

use crate::game_state::chess_types::Move;
use crate::game_state::game_state::GameState;

/// Every legal move available to the current player.
pub fn generate_legal_moves(game: &mut GameState) -> Vec<Move> {
    let mut legal = Vec::new();
    let nrows = game.nrows() as i8;
    let ncols = game.ncols() as i8;
    for from_row in 0..nrows {
        for from_col in 0..ncols {
            let owned = matches!(
                game.board().piece_on(from_row, from_col),
                Some(piece) if piece.player == game.current_player()
            );
            if !owned {
                continue;
            }
            for to_row in 0..nrows {
                for to_col in 0..ncols {
                    if (from_row, from_col) == (to_row, to_col) {
                        continue;
                    }
                    let mv = Move::new(from_row, from_col, to_row, to_col);
                    if game.assess_move(mv).0 {
                        legal.push(mv);
                    }
                }
            }
        }
    }
    legal
}

/// Early-exit form of the sweep, backing `GameState::is_complete`.
pub fn has_any_legal_move(game: &mut GameState) -> bool {
    let nrows = game.nrows() as i8;
    let ncols = game.ncols() as i8;
    for from_row in 0..nrows {
        for from_col in 0..ncols {
            let owned = matches!(
                game.board().piece_on(from_row, from_col),
                Some(piece) if piece.player == game.current_player()
            );
            if !owned {
                continue;
            }
            for to_row in 0..nrows {
                for to_col in 0..ncols {
                    if (from_row, from_col) == (to_row, to_col) {
                        continue;
                    }
                    if game
                        .assess_move(Move::new(from_row, from_col, to_row, to_col))
                        .0
                    {
                        return true;
                    }
                }
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{generate_legal_moves, has_any_legal_move};
    use crate::game_state::game_state::GameState;

    #[test]
    fn twenty_legal_moves_from_the_starting_position() {
        let mut game = GameState::new_game();
        let moves = generate_legal_moves(&mut game);
        assert_eq!(moves.len(), 20);
        assert!(has_any_legal_move(&mut game));
        // Enumeration leaves the game untouched.
        assert_eq!(generate_legal_moves(&mut game).len(), 20);
    }

    #[test]
    fn every_generated_move_starts_from_a_current_player_piece() {
        let mut game = GameState::new_game();
        for mv in generate_legal_moves(&mut game) {
            let piece = game
                .piece_at(mv.from_row, mv.from_col)
                .unwrap()
                .copied()
                .unwrap();
            assert_eq!(piece.player, game.current_player());
        }
    }
}
