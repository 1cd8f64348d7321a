//! Raw piece reachability.
//!
//! Everything here ignores whose turn it is, castling and check. All
//! decisions are made on (row, col) deltas; a linear index difference alone
//! would admit moves that wrap around the board edge.

use crate::Board;
use hotseat_core::{Piece, PieceKind, Square};

/// Rook directions as (row, col) steps.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions as (row, col) steps.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Knight jumps as (row, col) offsets.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King steps as (row, col) offsets.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

/// Returns true if `from` and `to` share a row or column.
#[inline]
pub fn is_orthogonal(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}

/// Returns true if `from` and `to` lie on a common diagonal.
#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr != 0 && dr.abs() == dc.abs()
}

/// Returns true if no square strictly between `from` and `to` is occupied.
///
/// The squares must be aligned on a row, column or diagonal; unaligned
/// pairs are reported as blocked.
pub fn path_clear(board: &Board, from: Square, to: Square) -> bool {
    if !is_orthogonal(from, to) && !is_diagonal(from, to) {
        return false;
    }
    let (dr, dc) = deltas(from, to);
    let step = (dr.signum(), dc.signum());

    let mut current = from.offset(step.0, step.1);
    while let Some(sq) = current {
        if sq == to {
            return true;
        }
        if board.is_occupied(sq) {
            return false;
        }
        current = sq.offset(step.0, step.1);
    }
    false
}

/// Returns true if `piece` standing on `from` could move to `to` on `board`.
///
/// A pawn's step straight ahead is always eligible, and may take whatever
/// stands there. The double step needs only the starting row. Diagonal steps
/// must land on an occupied square; there is no en passant. The occupant's
/// color at `to` is not considered here.
pub fn reachable(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_reachable(board, piece, from, to),
        PieceKind::Knight => knight_reachable(from, to),
        PieceKind::Bishop => is_diagonal(from, to) && path_clear(board, from, to),
        PieceKind::Rook => is_orthogonal(from, to) && path_clear(board, from, to),
        PieceKind::Queen => {
            (is_diagonal(from, to) || is_orthogonal(from, to)) && path_clear(board, from, to)
        }
        PieceKind::King => king_reachable(from, to),
    }
}

fn pawn_reachable(board: &Board, pawn: Piece, from: Square, to: Square) -> bool {
    let forward = pawn.color.pawn_direction();
    let (dr, dc) = deltas(from, to);

    match (dr, dc.abs()) {
        (r, 0) if r == forward => true,
        (r, 0) if r == 2 * forward => from.row() == pawn.color.pawn_row(),
        (r, 1) if r == forward => board.is_occupied(to),
        _ => false,
    }
}

fn knight_reachable(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    matches!((dr.abs(), dc.abs()), (1, 2) | (2, 1))
}

fn king_reachable(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr.abs() <= 1 && dc.abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_core::{Color, Layout};

    fn sq(name: &str) -> Square {
        Square::from_algebraic(name).unwrap()
    }

    fn board(layout: &str) -> Board {
        Board::from_layout(&Layout::parse(layout).unwrap())
    }

    fn white(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::White)
    }

    fn black(kind: PieceKind) -> Piece {
        Piece::new(kind, Color::Black)
    }

    #[test]
    fn pawn_pushes() {
        let b = Board::standard();
        let pawn = white(PieceKind::Pawn);
        assert!(reachable(&b, pawn, sq("e2"), sq("e3")));
        assert!(reachable(&b, pawn, sq("e2"), sq("e4")));
        assert!(!reachable(&b, pawn, sq("e2"), sq("e5")));
        assert!(!reachable(&b, pawn, sq("e2"), sq("e1")));

        let bp = black(PieceKind::Pawn);
        assert!(reachable(&b, bp, sq("d7"), sq("d6")));
        assert!(reachable(&b, bp, sq("d7"), sq("d5")));
        assert!(!reachable(&b, bp, sq("d7"), sq("d8")));
    }

    #[test]
    fn pawn_double_push_only_from_start_row() {
        let b = board("4k3/8/8/8/8/4P3/8/4K3");
        assert!(!reachable(&b, white(PieceKind::Pawn), sq("e3"), sq("e5")));
        assert!(reachable(&b, white(PieceKind::Pawn), sq("e3"), sq("e4")));
    }

    #[test]
    fn pawn_steps_ahead_onto_pieces() {
        // the knight on e3 is taken straight ahead or jumped by the double step
        let b = board("4k3/8/8/8/8/4n3/4P3/4K3");
        let pawn = white(PieceKind::Pawn);
        assert!(reachable(&b, pawn, sq("e2"), sq("e3")));
        assert!(reachable(&b, pawn, sq("e2"), sq("e4")));

        let b = board("4k3/8/8/8/4p3/8/4P3/4K3");
        assert!(reachable(&b, pawn, sq("e2"), sq("e4")));
        assert!(reachable(&b, black(PieceKind::Pawn), sq("e4"), sq("e3")));
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_pieces() {
        let b = board("4k3/8/8/8/8/3n4/4P3/4K3");
        let pawn = white(PieceKind::Pawn);
        assert!(reachable(&b, pawn, sq("e2"), sq("d3")));
        assert!(!reachable(&b, pawn, sq("e2"), sq("f3")));
    }

    #[test]
    fn pawn_capture_does_not_wrap_edge() {
        // a-file pawn; the h-file square one row up is index-adjacent
        let b = board("4k3/8/8/8/7n/P7/8/4K3");
        assert!(!reachable(&b, white(PieceKind::Pawn), sq("a3"), sq("h4")));
        let b = board("4k3/8/8/8/8/7n/P7/4K3");
        assert!(!reachable(&b, white(PieceKind::Pawn), sq("a2"), sq("h3")));
    }

    #[test]
    fn knight_jumps() {
        let b = Board::standard();
        let knight = white(PieceKind::Knight);
        assert!(reachable(&b, knight, sq("g1"), sq("f3")));
        assert!(reachable(&b, knight, sq("g1"), sq("h3")));
        assert!(reachable(&b, knight, sq("g1"), sq("e2")));
        assert!(!reachable(&b, knight, sq("g1"), sq("g3")));
        // index distance 15 without the knight shape
        assert!(!reachable(&b, knight, sq("h1"), sq("a2")));
    }

    #[test]
    fn bishop_lines_and_blocking() {
        let b = board("4k3/8/8/8/8/8/8/2B1K3");
        let bishop = white(PieceKind::Bishop);
        assert!(reachable(&b, bishop, sq("c1"), sq("h6")));
        assert!(reachable(&b, bishop, sq("c1"), sq("a3")));
        assert!(!reachable(&b, bishop, sq("c1"), sq("c4")));

        let b = board("4k3/8/8/8/8/8/3p4/2B1K3");
        assert!(!reachable(&b, bishop, sq("c1"), sq("e3")));
        assert!(reachable(&b, bishop, sq("c1"), sq("d2")));
    }

    #[test]
    fn bishop_rejects_index_stride_wraps() {
        // h1 -> a2 differs by 7 in index but is not a diagonal
        let b = Board::empty();
        let bishop = white(PieceKind::Bishop);
        assert!(!reachable(&b, bishop, sq("h1"), sq("a2")));
        // a8 -> h8 differs by 7 too
        assert!(!reachable(&b, bishop, sq("a8"), sq("h8")));
        // h3 -> a1 differs by 9
        assert!(!reachable(&b, bishop, sq("h3"), sq("a1")));
    }

    #[test]
    fn rook_lines_and_blocking() {
        let b = board("4k3/8/8/8/8/8/8/R3K3");
        let rook = white(PieceKind::Rook);
        assert!(reachable(&b, rook, sq("a1"), sq("a8")));
        assert!(reachable(&b, rook, sq("a1"), sq("d1")));
        assert!(!reachable(&b, rook, sq("a1"), sq("f1")));
        assert!(reachable(&b, rook, sq("a1"), sq("e1")));
        assert!(!reachable(&b, rook, sq("a1"), sq("b2")));
    }

    #[test]
    fn rook_rejects_row_wrap() {
        // h1 and a2 are index-adjacent but not on one row
        let b = Board::empty();
        assert!(!reachable(&b, white(PieceKind::Rook), sq("a2"), sq("h1")));
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let b = board("4k3/8/8/8/3Q4/8/8/4K3");
        let queen = white(PieceKind::Queen);
        assert!(reachable(&b, queen, sq("d4"), sq("d8")));
        assert!(reachable(&b, queen, sq("d4"), sq("a4")));
        assert!(reachable(&b, queen, sq("d4"), sq("h8")));
        assert!(reachable(&b, queen, sq("d4"), sq("a1")));
        assert!(!reachable(&b, queen, sq("d4"), sq("e6")));
    }

    #[test]
    fn queen_long_orthogonal_blocked() {
        let b = Board::standard();
        assert!(!reachable(&b, white(PieceKind::Queen), sq("d1"), sq("d5")));
    }

    #[test]
    fn king_steps() {
        let b = Board::empty();
        let king = white(PieceKind::King);
        assert!(reachable(&b, king, sq("e4"), sq("e5")));
        assert!(reachable(&b, king, sq("e4"), sq("d3")));
        assert!(!reachable(&b, king, sq("e4"), sq("e6")));
        assert!(!reachable(&b, king, sq("h5"), sq("a4")));
        assert!(!reachable(&b, king, sq("e1"), sq("g1")));
    }

    #[test]
    fn same_square_is_never_reachable() {
        let b = Board::empty();
        for kind in PieceKind::ALL {
            assert!(!reachable(&b, white(kind), sq("d4"), sq("d4")));
        }
    }

    #[test]
    fn path_clear_requires_alignment() {
        let b = Board::empty();
        assert!(path_clear(&b, sq("a1"), sq("h8")));
        assert!(!path_clear(&b, sq("a1"), sq("b3")));
        assert!(path_clear(&b, sq("a1"), sq("a2")));
    }
}
