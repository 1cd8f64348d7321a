//! Castling rights bookkeeping.

use crate::Board;
use hotseat_core::{Color, Piece, PieceKind, Square};
use std::fmt;

/// The two castling directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Toward the a-file rook (O-O-O).
    Queenside,
    /// Toward the h-file rook (O-O).
    Kingside,
}

impl CastleSide {
    /// Returns the index into per-side arrays (0 queenside, 1 kingside).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }

    /// Column step from the king toward this side's rook.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            CastleSide::Queenside => -1,
            CastleSide::Kingside => 1,
        }
    }

    /// Returns the king's starting square for a color.
    #[inline]
    pub const fn king_home(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Returns this side's rook corner for a color.
    #[inline]
    pub const fn rook_home(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Queenside) => Square::A1,
            (Color::White, CastleSide::Kingside) => Square::H1,
            (Color::Black, CastleSide::Queenside) => Square::A8,
            (Color::Black, CastleSide::Kingside) => Square::H8,
        }
    }

    /// Returns the king's destination when castling to this side.
    #[inline]
    pub const fn king_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Queenside) => Square::C1,
            (Color::White, CastleSide::Kingside) => Square::G1,
            (Color::Black, CastleSide::Queenside) => Square::C8,
            (Color::Black, CastleSide::Kingside) => Square::G8,
        }
    }

    /// Returns the rook's destination, the square the king passes over.
    #[inline]
    pub const fn rook_target(self, color: Color) -> Square {
        match (color, self) {
            (Color::White, CastleSide::Queenside) => Square::D1,
            (Color::White, CastleSide::Kingside) => Square::F1,
            (Color::Black, CastleSide::Queenside) => Square::D8,
            (Color::Black, CastleSide::Kingside) => Square::F8,
        }
    }

    /// Identifies the corner a square is, if it is one.
    fn corner(sq: Square) -> Option<(Color, CastleSide)> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|c| [(c, CastleSide::Queenside), (c, CastleSide::Kingside)])
            .find(|&(c, side)| side.rook_home(c) == sq)
    }
}

impl fmt::Display for CastleSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleSide::Queenside => write!(f, "O-O-O"),
            CastleSide::Kingside => write!(f, "O-O"),
        }
    }
}

/// Per-color record of whether the king or either rook has moved.
///
/// Flags only ever go from `false` to `true`; once lost, a castling right
/// never comes back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CastlingRights {
    king_moved: [bool; 2],
    rook_moved: [[bool; 2]; 2],
}

impl CastlingRights {
    /// Rights at the start of a standard game: nothing has moved.
    pub const fn new() -> Self {
        CastlingRights {
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
        }
    }

    /// Infers rights from a board: a king off its home square counts as
    /// moved, and so does a missing corner rook.
    pub fn from_board(board: &Board) -> Self {
        let mut rights = CastlingRights::new();
        for color in Color::ALL {
            let king = Piece::new(PieceKind::King, color);
            rights.king_moved[color.index()] =
                board.piece_at(CastleSide::king_home(color)) != Some(king);

            let rook = Piece::new(PieceKind::Rook, color);
            for side in [CastleSide::Queenside, CastleSide::Kingside] {
                rights.rook_moved[color.index()][side.index()] =
                    board.piece_at(side.rook_home(color)) != Some(rook);
            }
        }
        rights
    }

    /// Returns true once the color's king has moved.
    #[inline]
    pub const fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Returns true once the color's rook on the given side has moved or
    /// been captured.
    #[inline]
    pub const fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    /// Returns true if neither the king nor the rook for `side` has moved.
    #[inline]
    pub const fn can_castle(&self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    /// Marks a color's king as moved.
    #[inline]
    pub fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    /// Marks a color's rook on one side as moved.
    #[inline]
    pub fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }

    /// Updates the flags for a piece moving from `from` to `to`.
    ///
    /// A king move costs both rights of its color. Anything leaving or
    /// arriving on a rook corner costs the right tied to that corner, which
    /// covers a rook moving away as well as a rook being captured at home.
    pub fn record_move(&mut self, piece: Piece, from: Square, to: Square) {
        if piece.kind == PieceKind::King {
            self.mark_king_moved(piece.color);
        }
        for sq in [from, to] {
            if let Some((color, side)) = CastleSide::corner(sq) {
                self.mark_rook_moved(color, side);
            }
        }
    }
}
