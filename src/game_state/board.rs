//! Grid-and-arena board representation.
//!
//! The grid holds one `Option<PieceId>` slot per square; the arena owns every
//! `Piece` ever placed. A captured or replaced piece stays in the arena and
//! merely loses its grid slot, so history entries can refer to it by id and
//! undo can put the exact same piece back.

use crate::game_state::chess_errors::ChessError;
use crate::game_state::chess_rules::{BACK_RANK, BOARD_COLS, BOARD_ROWS};
use crate::game_state::chess_types::{Move, Piece, PieceId, PieceKind, Player};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    nrows: usize,
    ncols: usize,
    squares: Vec<Option<PieceId>>,
    pieces: Vec<Piece>,
}

impl Board {
    pub fn empty(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            squares: vec![None; nrows * ncols],
            pieces: Vec::new(),
        }
    }

    /// Standard starting arrangement: Black's back rank on row 0 and pawns on
    /// row 1, mirrored for White on the last two rows.
    pub fn standard() -> Self {
        let mut board = Self::empty(BOARD_ROWS, BOARD_COLS);
        let last = (BOARD_ROWS - 1) as i8;
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.insert(0, col as i8, Piece::new(kind, Player::Black));
            board.insert(last, col as i8, Piece::new(kind, Player::White));
        }
        for col in 0..BOARD_COLS as i8 {
            board.insert(1, col, Piece::new(PieceKind::Pawn, Player::Black));
            board.insert(last - 1, col, Piece::new(PieceKind::Pawn, Player::White));
        }
        board
    }

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    pub fn in_bounds(&self, row: i8, col: i8) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.nrows && (col as usize) < self.ncols
    }

    #[inline]
    fn index(&self, row: i8, col: i8) -> usize {
        debug_assert!(self.in_bounds(row, col));
        row as usize * self.ncols + col as usize
    }

    /// Id occupying a square. Callers bounds-check first.
    #[inline]
    pub fn square(&self, row: i8, col: i8) -> Option<PieceId> {
        self.squares[self.index(row, col)]
    }

    /// The piece stored under a stable id, whether or not it is on the grid.
    #[inline]
    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id as usize]
    }

    #[inline]
    pub fn piece_mut(&mut self, id: PieceId) -> &mut Piece {
        &mut self.pieces[id as usize]
    }

    /// Piece currently occupying a square, if any. Callers bounds-check first.
    #[inline]
    pub fn piece_on(&self, row: i8, col: i8) -> Option<&Piece> {
        self.square(row, col).map(|id| self.piece(id))
    }

    /// Arena-allocate a piece, place it, and return its stable id. Whatever
    /// occupied the square loses its slot.
    pub fn insert(&mut self, row: i8, col: i8, piece: Piece) -> PieceId {
        let id = self.pieces.len() as PieceId;
        self.pieces.push(piece);
        let index = self.index(row, col);
        self.squares[index] = Some(id);
        id
    }

    /// Raw grid write; the arena is untouched.
    #[inline]
    pub fn place(&mut self, row: i8, col: i8, id: Option<PieceId>) {
        let index = self.index(row, col);
        self.squares[index] = id;
    }

    /// Guarded read for external callers.
    pub fn piece_at(&self, row: i8, col: i8) -> Result<Option<&Piece>, ChessError> {
        if !self.in_bounds(row, col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Ok(self.piece_on(row, col))
    }

    /// Guarded write for setup and tests. `None` clears the square.
    pub fn set_piece(&mut self, row: i8, col: i8, piece: Option<Piece>) -> Result<(), ChessError> {
        if !self.in_bounds(row, col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        match piece {
            Some(piece) => {
                self.insert(row, col, piece);
            }
            None => self.place(row, col, None),
        }
        Ok(())
    }

    /// Apply `mv` on the grid, run `eval` on the result, then restore the
    /// grid exactly as it was. The closure scope guarantees the revert runs
    /// on every path.
    pub fn with_move_applied<T>(&mut self, mv: Move, eval: impl FnOnce(&Board) -> T) -> T {
        let moved = self.square(mv.from_row, mv.from_col);
        let captured = self.square(mv.to_row, mv.to_col);
        self.place(mv.from_row, mv.from_col, None);
        self.place(mv.to_row, mv.to_col, moved);
        let out = eval(self);
        self.place(mv.from_row, mv.from_col, moved);
        self.place(mv.to_row, mv.to_col, captured);
        out
    }
}
