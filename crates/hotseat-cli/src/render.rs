//! ASCII board drawing.

use hotseat_core::{Color, Square};
use hotseat_engine::Board;

const BORDER: &str = "  +-----------------+\n";

/// Draws the board as seen from `perspective`'s side of the table.
///
/// White sees rank 8 at the top and the a-file on the left; Black sees the
/// board turned around. Empty squares are dots, pieces use FEN letters.
pub fn render(board: &Board, perspective: Color) -> String {
    let seat = |sq: Square| match perspective {
        Color::White => sq,
        Color::Black => sq.flipped(),
    };

    let mut out = String::from(BORDER);
    for sq in Square::all().map(seat) {
        if seat(sq).col() == 0 {
            out.push(sq.rank().to_char());
            out.push_str(" |");
        }
        out.push(' ');
        out.push(board.piece_at(sq).map_or('.', |piece| piece.to_fen_char()));
        if seat(sq).col() == 7 {
            out.push_str(" |\n");
        }
    }
    out.push_str(BORDER);
    out.push_str("   ");
    for sq in Square::all().filter(|sq| sq.row() == 7).map(seat) {
        out.push(' ');
        out.push(sq.file().to_char());
    }
    out.push('\n');
    out
}
