//! Move legality and game state engine for two-player chess on one board.
//!
//! This crate provides:
//! - [`Board`] - the 8×8 grid of optional pieces
//! - [`geometry`] - raw per-piece reachability with line-of-sight blocking
//! - [`threat`] - attack detection by ray, knight, pawn and king scans
//! - [`validate`] - the legality verdict for a proposed move
//! - [`GameSession`] - turn order, castling, promotion and king-capture wins
//!
//! # Rules
//!
//! The game ends when a king is actually captured; there is no checkmate or
//! stalemate detection, no en passant and no draw adjudication. Castling may
//! not start in, pass through or end in check. Moving into check is allowed
//! unless [`RuleConfig::forbid_self_check`] is set.
//!
//! # Example
//!
//! ```
//! use hotseat_core::{Color, Square};
//! use hotseat_engine::{GameSession, MoveOutcome};
//!
//! let mut game = GameSession::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//!
//! let outcome = game.propose_move(e2, e4).unwrap();
//! assert_eq!(outcome, MoveOutcome::Moved { captured: None });
//! assert_eq!(game.active_color(), Color::Black);
//! ```

mod board;
mod castling;
mod error;
pub mod geometry;
mod rules;
mod session;
pub mod threat;
mod validator;

pub use board::Board;
pub use castling::{CastleSide, CastlingRights};
pub use error::MoveError;
pub use rules::RuleConfig;
pub use session::{GameSession, MoveOutcome, SessionState};
pub use validator::{validate, Verdict};
