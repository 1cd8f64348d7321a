//! Board state: one optional piece per square.

use hotseat_core::{Color, Layout, Piece, PieceKind, Square};

/// The 8×8 grid of pieces.
///
/// Purely mechanical: nothing here checks whether a mutation is a legal
/// chess move. [`GameSession`](crate::GameSession) is the only owner that
/// mutates a live board; validators work on scratch copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the standard starting board.
    pub fn standard() -> Self {
        Self::from_layout(&Layout::default())
    }

    /// Creates a board from a parsed layout.
    pub fn from_layout(layout: &Layout) -> Self {
        let mut board = Board::empty();
        for (sq, piece) in layout.pieces() {
            board.place(sq, piece);
        }
        board
    }

    /// Converts the board back to a layout.
    pub fn to_layout(&self) -> Layout {
        let mut layout = Layout::empty();
        for (sq, piece) in self.iter() {
            layout.set(sq, Some(piece));
        }
        layout
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if a piece stands on the given square.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.piece_at(sq).is_some()
    }

    /// Puts a piece on a square, replacing whatever was there.
    #[inline]
    pub fn place(&mut self, sq: Square, piece: Piece) {
        self.squares[sq.index() as usize] = Some(piece);
    }

    /// Clears a square, returning the piece that stood there.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Moves whatever stands on `from` to `to`.
    ///
    /// The source is left empty and the previous occupant of `to` is
    /// returned. Moving from an empty square clears `to`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.remove(from);
        std::mem::replace(&mut self.squares[to.index() as usize], moving)
    }

    /// Iterates over occupied squares in index order.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the square of the given color's king.
    ///
    /// If a layout holds several kings of one color the lowest index wins.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.iter().find(|&(_, p)| p == king).map(|(sq, _)| sq)
    }

    /// Returns true if the given color still has a king on the board.
    #[inline]
    pub fn has_king(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
