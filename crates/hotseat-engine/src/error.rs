//! Reasons a move request is rejected.

use thiserror::Error;

/// Why a move or promotion request was turned down.
///
/// Every variant is recoverable: a rejected request leaves the session
/// exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    /// A square index outside 0..64.
    #[error("square index {0} is off the board")]
    InvalidSquare(u8),

    /// The source square holds a piece of the side not on move.
    #[error("it is not your turn")]
    NotYourTurn,

    /// The source square is empty.
    #[error("there is no piece on that square")]
    NoPieceAtSource,

    /// The destination holds a piece of the mover's own color.
    #[error("you cannot go here!")]
    OccupiedByOwnPiece,

    /// The piece cannot move that way, or its path is blocked.
    #[error("that piece cannot move there")]
    IllegalGeometry,

    /// Castling rights are gone, the path is occupied, or the king is or
    /// would pass through check.
    #[error("castling is not available")]
    CastlingUnavailable,

    /// The move would leave the mover's king attacked.
    #[error("that move leaves your king in check")]
    LeavesKingInCheck,

    /// Promotion to a pawn or king, or a promotion choice when no pawn is
    /// waiting for one.
    #[error("invalid promotion choice")]
    InvalidPromotionChoice,

    /// A pawn is waiting for its promotion piece.
    #[error("choose a promotion piece first")]
    PromotionPending,

    /// The game is already decided.
    #[error("the game is over")]
    GameOver,
}
