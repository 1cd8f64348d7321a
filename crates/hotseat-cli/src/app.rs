//! The interactive hotseat loop.
//!
//! Reads one command per line, forwards moves to the [`GameSession`] and
//! prints the board, rejections and results. Generic over its input and
//! output so whole games can be scripted in tests.

use crate::config::Config;
use crate::input::{self, Command, InputError};
use crate::render::render;
use crate::scoreboard::{ScoreError, Scoreboard};
use hotseat_core::Color;
use hotseat_engine::{GameSession, MoveError, MoveOutcome, SessionState};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};

const HELP: &str = "\
moves:     e2e4, e2 e4 or square indices like 52 36
promotion: q, r, b or n when asked
commands:  rematch (keep score), new (reset score), score, help, quit";

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// A game at the terminal plus the running score.
pub struct App {
    game: GameSession,
    scores: Scoreboard,
    score_file: PathBuf,
    flip_board: bool,
}

impl App {
    /// Starts a fresh game and loads the score file named in `config`.
    pub fn new(config: &Config) -> Result<Self, ScoreError> {
        let score_file = config.display.score_file.clone();
        let scores = Scoreboard::load(&score_file)?;
        info!(path = %score_file.display(), %scores, "scoreboard loaded");
        Ok(App {
            game: GameSession::with_rules(config.rules),
            scores,
            score_file,
            flip_board: config.display.flip_board,
        })
    }

    pub fn game(&self) -> &GameSession {
        &self.game
    }

    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Runs until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> anyhow::Result<()> {
        writeln!(out, "hotseat chess, type help for commands")?;
        self.show_board(&mut out)?;
        for line in input.lines() {
            if self.handle(&line?, &mut out)? == Flow::Quit {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Handles a single line of input.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> anyhow::Result<Flow> {
        let command = match input::parse(line) {
            Ok(command) => command,
            Err(InputError::Empty) => return Ok(Flow::Continue),
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Move { from, to } => {
                let result = self.game.propose_move(from, to);
                self.report(result, out)?;
            }
            Command::MoveIndices { from, to } => {
                let result = self.game.propose_indices(from, to);
                self.report(result, out)?;
            }
            Command::Promote(kind) => {
                let result = self.game.choose_promotion(kind);
                self.report(result, out)?;
            }
            Command::Rematch => {
                self.game.rematch();
                writeln!(out, "rematch! {}", self.scores)?;
                self.show_board(out)?;
            }
            Command::NewGame => {
                self.game.rematch();
                self.scores.reset();
                writeln!(out, "new game, score reset")?;
                self.save_scores(out)?;
                self.show_board(out)?;
            }
            Command::Score => writeln!(out, "{}", self.scores)?,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => {
                writeln!(out, "bye! {}", self.scores)?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn report<W: Write>(
        &mut self,
        result: Result<MoveOutcome, MoveError>,
        out: &mut W,
    ) -> anyhow::Result<()> {
        match result {
            Ok(MoveOutcome::Moved { captured: Some(piece) }) => {
                writeln!(out, "captured {}", piece)?;
            }
            Ok(MoveOutcome::Moved { captured: None }) => {}
            Ok(MoveOutcome::Castled(side)) => writeln!(out, "{}", side)?,
            Ok(MoveOutcome::PromotionPending(square)) => {
                writeln!(out, "pawn on {} promotes: choose q, r, b or n", square)?;
                return Ok(());
            }
            Ok(MoveOutcome::Promoted { piece, .. }) => writeln!(out, "promoted to {}", piece)?,
            Err(e) => {
                writeln!(out, "{}", e)?;
                return Ok(());
            }
        }

        if let Some(winner) = self.game.winner() {
            self.record_win(winner, out)?;
        } else {
            self.show_board(out)?;
        }
        Ok(())
    }

    fn record_win<W: Write>(&mut self, winner: Color, out: &mut W) -> anyhow::Result<()> {
        self.scores.record_win(winner);
        self.save_scores(out)?;
        write!(out, "{}", render(self.game.board(), winner))?;
        writeln!(out, "{} wins! {}", winner, self.scores)?;
        writeln!(out, "type rematch, new or quit")?;
        Ok(())
    }

    /// Writes the score file; a failure is reported and play goes on.
    fn save_scores<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Err(e) = self.scores.save(&self.score_file) {
            warn!(path = %self.score_file.display(), error = %e, "could not save score");
            writeln!(out, "score not saved: {}", e)?;
        }
        Ok(())
    }

    fn show_board<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let active = self.game.active_color();
        let perspective = if self.flip_board { active } else { Color::White };
        write!(out, "{}", render(self.game.board(), perspective))?;
        match self.game.state() {
            SessionState::AwaitingMove(color) if self.game.is_in_check(color) => {
                writeln!(out, "{} to move (check)", color)
            }
            SessionState::AwaitingMove(color) => writeln!(out, "{} to move", color),
            SessionState::AwaitingPromotion { square, .. } => {
                writeln!(out, "choose a promotion piece for {}", square)
            }
            SessionState::GameOver { winner } => writeln!(out, "{} has won", winner),
        }
    }
}
