//! Move legality.
//!
//! Combines raw geometry, threat scans and castling rights into a single
//! verdict. Validation never touches the live board; any "what if" question
//! is answered on a scratch copy.

use crate::castling::{CastleSide, CastlingRights};
use crate::geometry::{path_clear, reachable};
use crate::threat::{is_attacked, is_in_check};
use crate::{Board, MoveError, RuleConfig};
use hotseat_core::{Color, Piece, PieceKind, Square};

/// The kind of legal move a request turned out to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// An ordinary move or capture.
    Legal,
    /// King two squares toward the h-file rook.
    CastleKingside,
    /// King two squares toward the a-file rook.
    CastleQueenside,
}

impl Verdict {
    /// Returns the castling side, if this is a castling verdict.
    pub const fn castle_side(self) -> Option<CastleSide> {
        match self {
            Verdict::Legal => None,
            Verdict::CastleKingside => Some(CastleSide::Kingside),
            Verdict::CastleQueenside => Some(CastleSide::Queenside),
        }
    }
}

impl From<CastleSide> for Verdict {
    fn from(side: CastleSide) -> Self {
        match side {
            CastleSide::Kingside => Verdict::CastleKingside,
            CastleSide::Queenside => Verdict::CastleQueenside,
        }
    }
}

/// Decides whether `active` may move the piece on `from` to `to`.
///
/// Checks run in order: a piece of the active color on `from`, no own piece
/// on `to`, castling when the king steps two columns from its home square,
/// otherwise piece geometry, and finally (if enabled) self-check.
pub fn validate(
    board: &Board,
    rights: &CastlingRights,
    active: Color,
    from: Square,
    to: Square,
    rules: &RuleConfig,
) -> Result<Verdict, MoveError> {
    let piece = board.piece_at(from).ok_or(MoveError::NoPieceAtSource)?;
    if piece.color != active {
        return Err(MoveError::NotYourTurn);
    }

    if board.piece_at(to).is_some_and(|target| target.color == active) {
        return Err(MoveError::OccupiedByOwnPiece);
    }

    if let Some(side) = castle_request(piece, from, to) {
        return validate_castle(board, rights, active, side).map(Verdict::from);
    }

    if !reachable(board, piece, from, to) {
        return Err(MoveError::IllegalGeometry);
    }

    if rules.forbid_self_check {
        let mut scratch = board.clone();
        scratch.move_piece(from, to);
        if is_in_check(&scratch, active) {
            return Err(MoveError::LeavesKingInCheck);
        }
    }

    Ok(Verdict::Legal)
}

/// Recognizes a king on its home square stepping two columns sideways.
fn castle_request(piece: Piece, from: Square, to: Square) -> Option<CastleSide> {
    if piece.kind != PieceKind::King || from != CastleSide::king_home(piece.color) {
        return None;
    }
    [CastleSide::Kingside, CastleSide::Queenside]
        .into_iter()
        .find(|side| side.king_target(piece.color) == to)
}

fn validate_castle(
    board: &Board,
    rights: &CastlingRights,
    color: Color,
    side: CastleSide,
) -> Result<CastleSide, MoveError> {
    let king_from = CastleSide::king_home(color);
    let rook_from = side.rook_home(color);

    if !rights.can_castle(color, side) {
        return Err(MoveError::CastlingUnavailable);
    }
    if board.piece_at(rook_from) != Some(Piece::new(PieceKind::Rook, color)) {
        return Err(MoveError::CastlingUnavailable);
    }
    if !path_clear(board, king_from, rook_from) {
        return Err(MoveError::CastlingUnavailable);
    }
    if is_in_check(board, color) {
        return Err(MoveError::CastlingUnavailable);
    }

    // Put the king on each square it crosses and ask whether it would be
    // attacked there.
    let king = Piece::new(PieceKind::King, color);
    let mut scratch = board.clone();
    scratch.remove(king_from);
    for sq in [side.rook_target(color), side.king_target(color)] {
        scratch.place(sq, king);
        let attacked = is_attacked(&scratch, sq, color.opposite());
        scratch.remove(sq);
        if attacked {
            return Err(MoveError::CastlingUnavailable);
        }
    }

    Ok(side)
}
