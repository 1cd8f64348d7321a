//! Board layout notation: the piece-placement field of FEN.
//!
//! The first rank group describes row 0 (rank 8), matching the square
//! numbering used throughout the crate.

use crate::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    #[error("rank {rank} has {squares} squares, expected 8")]
    InvalidRankLength { rank: u8, squares: u32 },
}

/// A parsed board layout.
///
/// Holds one optional piece per square. The engine is responsible for
/// turning this into its own board representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    squares: [Option<Piece>; 64],
}

impl Layout {
    /// The standard starting layout.
    pub const STANDARD: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    /// A layout with no pieces.
    pub const fn empty() -> Self {
        Layout {
            squares: [None; 64],
        }
    }

    /// Parses a layout string.
    ///
    /// A full FEN record is accepted too; everything after the first
    /// whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let placement = text.split_whitespace().next().unwrap_or("");
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(LayoutError::InvalidRankCount(ranks.len()));
        }

        let mut layout = Layout::empty();
        for (row, rank_str) in ranks.iter().enumerate() {
            let rank = 8 - row as u8;
            let mut col = 0u32;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += run;
                } else if let Some(piece) = Piece::from_fen_char(c) {
                    if col < 8 {
                        layout.squares[row * 8 + col as usize] = Some(piece);
                    }
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { ch: c, rank });
                }
            }
            if col != 8 {
                return Err(LayoutError::InvalidRankLength {
                    rank,
                    squares: col,
                });
            }
        }

        Ok(layout)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Sets or clears a square.
    pub fn set(&mut self, sq: Square, piece: Option<Piece>) {
        self.squares[sq.index() as usize] = piece;
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.piece_at(sq).map(|p| (sq, p)))
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::parse(Self::STANDARD).expect("STANDARD is valid")
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            let mut empty_count = 0;
            for col in 0..8u8 {
                let sq = Square::from_row_col(row, col).ok_or(fmt::Error)?;
                match self.piece_at(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{}", empty_count)?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.to_fen_char())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{}", empty_count)?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
