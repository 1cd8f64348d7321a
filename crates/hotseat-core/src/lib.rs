//! Core types for hotseat chess.
//!
//! This crate provides the fundamental types shared by the engine and the
//! front end:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - Board layout notation (the piece-placement field of FEN)
//!
//! Squares use a single fixed frame: index 0 is a8 and index 63 is h1, so
//! Black starts on 0..16 and White on 48..64.

mod color;
mod layout;
mod piece;
mod square;

pub use color::Color;
pub use layout::{Layout, LayoutError};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
