//! Game session: turn order, move application and the promotion protocol.
//!
//! The [`GameSession`] exclusively owns the board, the castling rights and
//! the turn. Callers read through `&self` queries and change state only
//! through [`GameSession::propose_move`], [`GameSession::choose_promotion`]
//! and [`GameSession::rematch`].

use crate::castling::{CastleSide, CastlingRights};
use crate::threat::is_in_check;
use crate::validator::validate;
use crate::{Board, MoveError, RuleConfig};
use hotseat_core::{Color, Layout, Piece, PieceKind, Square};
use tracing::{debug, info};

/// Where the session is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the given color to move.
    AwaitingMove(Color),
    /// A pawn of `color` reached the last row on `square` and needs a
    /// replacement piece before play continues.
    AwaitingPromotion { color: Color, square: Square },
    /// A king was captured.
    GameOver { winner: Color },
}

/// What an accepted request did to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// A piece moved, possibly capturing.
    Moved { captured: Option<Piece> },
    /// King and rook moved together.
    Castled(CastleSide),
    /// A pawn reached the last row; call
    /// [`GameSession::choose_promotion`] next.
    PromotionPending(Square),
    /// The waiting pawn was replaced.
    Promoted { square: Square, piece: Piece },
}

/// A two-player game on one shared board.
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    rights: CastlingRights,
    state: SessionState,
    rules: RuleConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session on the standard board with default rules.
    pub fn new() -> Self {
        Self::with_rules(RuleConfig::default())
    }

    /// Creates a session on the standard board.
    pub fn with_rules(rules: RuleConfig) -> Self {
        GameSession {
            board: Board::standard(),
            rights: CastlingRights::new(),
            state: SessionState::AwaitingMove(rules.first_to_move),
            rules,
        }
    }

    /// Creates a session from a custom layout.
    ///
    /// Castling rights are inferred from which kings and rooks still stand
    /// on their home squares. A layout missing a king starts out finished.
    pub fn from_layout(layout: &Layout, rules: RuleConfig) -> Self {
        let board = Board::from_layout(layout);
        let mut session = GameSession {
            rights: CastlingRights::from_board(&board),
            board,
            state: SessionState::AwaitingMove(rules.first_to_move),
            rules,
        };
        session.check_for_win();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the piece on a square, if any.
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    /// Returns the castling rights.
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.rights
    }

    /// Returns the rules this session plays by.
    pub fn rules(&self) -> &RuleConfig {
        &self.rules
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the color whose turn it is.
    ///
    /// During a pending promotion this is still the promoting side; once the
    /// game is over it is the side that would have moved next.
    pub fn active_color(&self) -> Color {
        match self.state {
            SessionState::AwaitingMove(color) => color,
            SessionState::AwaitingPromotion { color, .. } => color,
            SessionState::GameOver { winner } => winner.opposite(),
        }
    }

    /// Returns the winner once a king has been captured.
    pub fn winner(&self) -> Option<Color> {
        match self.state {
            SessionState::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    /// Returns true once the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Returns true if the given color's king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Proposes a move given as square indices.
    pub fn propose_indices(&mut self, from: u8, to: u8) -> Result<MoveOutcome, MoveError> {
        let from = Square::try_from(from).map_err(MoveError::InvalidSquare)?;
        let to = Square::try_from(to).map_err(MoveError::InvalidSquare)?;
        self.propose_move(from, to)
    }

    /// Proposes moving the piece on `from` to `to`.
    ///
    /// On rejection nothing changes. On success the board is updated and,
    /// unless a promotion is now pending, the win check runs and the turn
    /// passes to the other color.
    pub fn propose_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        let active = match self.state {
            SessionState::AwaitingMove(color) => color,
            SessionState::AwaitingPromotion { .. } => return Err(MoveError::PromotionPending),
            SessionState::GameOver { .. } => return Err(MoveError::GameOver),
        };

        let verdict = validate(&self.board, &self.rights, active, from, to, &self.rules)
            .inspect_err(|e| debug!(%from, %to, color = %active, error = %e, "move rejected"))?;

        if let Some(side) = verdict.castle_side() {
            self.castle(active, side);
            self.finish_turn(active);
            return Ok(MoveOutcome::Castled(side));
        }

        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::NoPieceAtSource)?;
        let captured = self.board.move_piece(from, to);
        self.rights.record_move(piece, from, to);
        debug!(%from, %to, piece = %piece, captured = ?captured, "move applied");

        if piece.kind == PieceKind::Pawn && to.row() == active.promotion_row() {
            info!(square = %to, color = %active, "promotion pending");
            self.state = SessionState::AwaitingPromotion {
                color: active,
                square: to,
            };
            return Ok(MoveOutcome::PromotionPending(to));
        }

        self.finish_turn(active);
        Ok(MoveOutcome::Moved { captured })
    }

    /// Resolves a pending promotion by replacing the pawn with `kind`.
    pub fn choose_promotion(&mut self, kind: PieceKind) -> Result<MoveOutcome, MoveError> {
        let SessionState::AwaitingPromotion { color, square } = self.state else {
            return Err(MoveError::InvalidPromotionChoice);
        };
        if !kind.is_promotion_target() {
            return Err(MoveError::InvalidPromotionChoice);
        }

        let piece = Piece::new(kind, color);
        self.board.place(square, piece);
        info!(%square, piece = %piece, "pawn promoted");

        self.finish_turn(color);
        Ok(MoveOutcome::Promoted { square, piece })
    }

    /// Looks for a missing king and ends the game if one is gone.
    ///
    /// Returns the winner, if any. Does nothing while a promotion is pending.
    pub fn check_for_win(&mut self) -> Option<Color> {
        if let SessionState::AwaitingMove(_) = self.state {
            let winner = if !self.board.has_king(Color::Black) {
                Some(Color::White)
            } else if !self.board.has_king(Color::White) {
                Some(Color::Black)
            } else {
                None
            };
            if let Some(winner) = winner {
                info!(%winner, "king captured, game over");
                self.state = SessionState::GameOver { winner };
            }
        }
        self.winner()
    }

    /// Resets the board, rights and turn for a new game with the same rules.
    pub fn rematch(&mut self) {
        *self = Self::with_rules(self.rules);
        info!(first = %self.rules.first_to_move, "rematch started");
    }

    fn castle(&mut self, color: Color, side: CastleSide) {
        let king_from = CastleSide::king_home(color);
        let rook_from = side.rook_home(color);
        self.board.move_piece(king_from, side.king_target(color));
        self.board.move_piece(rook_from, side.rook_target(color));
        self.rights.mark_king_moved(color);
        self.rights.mark_rook_moved(color, side);
        debug!(%color, %side, "castled");
    }

    /// Win check, then hand the move to the other side.
    fn finish_turn(&mut self, mover: Color) {
        self.state = SessionState::AwaitingMove(mover);
        if self.check_for_win().is_none() {
            self.state = SessionState::AwaitingMove(mover.opposite());
        }
    }
}
