//! Attack detection by scanning outward from the target square.

use crate::geometry::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::Board;
use hotseat_core::{Color, Piece, PieceKind, Square};

/// Returns true if the given square is attacked by the given color.
///
/// Attacks are geometric: whose turn it is does not matter, and the target
/// square may be empty or hold a piece of either color.
pub fn is_attacked(board: &Board, target: Square, by_color: Color) -> bool {
    let enemy =
        |sq: Square, kind: PieceKind| board.piece_at(sq) == Some(Piece::new(kind, by_color));

    // Sliders: the first piece on each ray decides.
    let rays = ORTHOGONAL
        .iter()
        .map(|&d| (d, PieceKind::Rook))
        .chain(DIAGONAL.iter().map(|&d| (d, PieceKind::Bishop)));
    for ((d_row, d_col), slider) in rays {
        let mut current = target.offset(d_row, d_col);
        while let Some(sq) = current {
            if let Some(piece) = board.piece_at(sq) {
                if piece.color == by_color
                    && (piece.kind == slider || piece.kind == PieceKind::Queen)
                {
                    return true;
                }
                break;
            }
            current = sq.offset(d_row, d_col);
        }
    }

    if KNIGHT_OFFSETS
        .iter()
        .filter_map(|&(r, c)| target.offset(r, c))
        .any(|sq| enemy(sq, PieceKind::Knight))
    {
        return true;
    }

    // An attacking pawn stands one row behind the target from its own point
    // of view, so step against its direction of travel.
    let behind = -by_color.pawn_direction();
    if [-1, 1]
        .iter()
        .filter_map(|&c| target.offset(behind, c))
        .any(|sq| enemy(sq, PieceKind::Pawn))
    {
        return true;
    }

    KING_OFFSETS
        .iter()
        .filter_map(|&(r, c)| target.offset(r, c))
        .any(|sq| enemy(sq, PieceKind::King))
}

/// Returns true if the king of the given color is attacked.
///
/// A color without a king on the board is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .king_square(color)
        .is_some_and(|king| is_attacked(board, king, color.opposite()))
}
