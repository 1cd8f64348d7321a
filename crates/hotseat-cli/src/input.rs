//! Parsing of typed player input.

use hotseat_core::{PieceKind, Square};
use thiserror::Error;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A move in coordinate notation, `e2e4` or `e2 e4`.
    Move { from: Square, to: Square },
    /// A move by raw square index, `52 36`. Range is checked by the engine.
    MoveIndices { from: u8, to: u8 },
    /// A promotion choice letter.
    Promote(PieceKind),
    /// Start over with the score kept.
    Rematch,
    /// Start over with the score reset.
    NewGame,
    Score,
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("nothing entered")]
    Empty,
    #[error("cannot understand '{0}', type help for the list of commands")]
    Unrecognized(String),
}

/// Parses one line of input. Case and surrounding whitespace are ignored.
pub fn parse(line: &str) -> Result<Command, InputError> {
    let text = line.trim().to_ascii_lowercase();
    if text.is_empty() {
        return Err(InputError::Empty);
    }

    match text.as_str() {
        "rematch" => return Ok(Command::Rematch),
        "new" => return Ok(Command::NewGame),
        "score" => return Ok(Command::Score),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let mut chars = text.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        if let Some(kind) = PieceKind::from_letter(c) {
            return Ok(Command::Promote(kind));
        }
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let command = match words.as_slice() {
        [single] if single.len() == 4 && single.is_ascii() => {
            squares(&single[..2], &single[2..])
        }
        [from, to] => squares(from, to).or_else(|| indices(from, to)),
        _ => None,
    };
    command.ok_or_else(|| InputError::Unrecognized(line.trim().to_string()))
}

fn squares(from: &str, to: &str) -> Option<Command> {
    Some(Command::Move {
        from: Square::from_algebraic(from)?,
        to: Square::from_algebraic(to)?,
    })
}

fn indices(from: &str, to: &str) -> Option<Command> {
    Some(Command::MoveIndices {
        from: from.parse().ok()?,
        to: to.parse().ok()?,
    })
}
