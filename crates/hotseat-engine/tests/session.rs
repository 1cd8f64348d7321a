//! End-to-end games driven through the public session API.

use hotseat_core::{Color, Layout, Piece, PieceKind, Square};
use hotseat_engine::{CastleSide, GameSession, MoveError, MoveOutcome, RuleConfig, SessionState};

fn sq(name: &str) -> Square {
    Square::from_algebraic(name).unwrap()
}

fn session(layout: &str, rules: RuleConfig) -> GameSession {
    GameSession::from_layout(&Layout::parse(layout).unwrap(), rules)
}

fn play(game: &mut GameSession, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        game.propose_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{}{} rejected: {}", from, to, e));
    }
}

/// Squares whose occupant differs between two sessions.
fn changed_squares(before: &GameSession, after: &GameSession) -> Vec<Square> {
    Square::all()
        .filter(|&s| before.piece_at(s) != after.piece_at(s))
        .collect()
}

#[test]
fn opening_move_by_index() {
    let mut game = GameSession::new();
    assert_eq!(
        game.propose_indices(52, 36),
        Ok(MoveOutcome::Moved { captured: None })
    );
    assert_eq!(game.state(), SessionState::AwaitingMove(Color::Black));
}

#[test]
fn black_rook_cannot_jump_its_own_pawn() {
    let mut game = GameSession::with_rules(RuleConfig::default().with_first_to_move(Color::Black));
    assert_eq!(
        game.propose_move(Square::A8, Square::A1),
        Err(MoveError::IllegalGeometry)
    );
    assert_eq!(game.active_color(), Color::Black);
}

#[test]
fn ordinary_move_changes_exactly_two_squares() {
    let mut game = GameSession::new();
    let before = game.clone();
    game.propose_move(sq("g1"), sq("f3")).unwrap();
    assert_eq!(changed_squares(&before, &game), vec![sq("f3"), sq("g1")]);
    assert_eq!(game.piece_at(sq("g1")), None);
}

#[test]
fn pawn_takes_straight_ahead() {
    let black_pawn = Some(Piece::new(PieceKind::Pawn, Color::Black));

    let mut game = session("4k3/8/8/4p3/4P3/8/8/4K3", RuleConfig::default());
    assert_eq!(
        game.propose_move(sq("e4"), sq("e5")),
        Ok(MoveOutcome::Moved {
            captured: black_pawn
        })
    );

    // the double step from the starting row takes too
    let mut game = session("4k3/8/8/8/4p3/8/4P3/4K3", RuleConfig::default());
    assert_eq!(
        game.propose_move(sq("e2"), sq("e4")),
        Ok(MoveOutcome::Moved {
            captured: black_pawn
        })
    );
    assert_eq!(game.piece_at(sq("e2")), None);

    // an own piece ahead is still off limits
    let mut game = session("4k3/8/8/8/8/4N3/4P3/4K3", RuleConfig::default());
    assert_eq!(
        game.propose_move(sq("e2"), sq("e3")),
        Err(MoveError::OccupiedByOwnPiece)
    );
}

#[test]
fn castling_changes_exactly_two_pieces() {
    let mut game = GameSession::new();
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("g1", "f3"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
        ],
    );
    let before = game.clone();
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Ok(MoveOutcome::Castled(CastleSide::Kingside))
    );
    // king e1->g1 and rook h1->f1: four squares, two pieces
    assert_eq!(
        changed_squares(&before, &game),
        vec![Square::E1, Square::F1, Square::G1, Square::H1]
    );
    assert_eq!(
        game.piece_at(Square::G1),
        Some(Piece::new(PieceKind::King, Color::White))
    );
    assert_eq!(
        game.piece_at(Square::F1),
        Some(Piece::new(PieceKind::Rook, Color::White))
    );
    assert_eq!(game.active_color(), Color::Black);
}

#[test]
fn castling_lost_after_king_moves() {
    let mut game = session("r3k2r/8/8/8/8/8/8/R3K2R", RuleConfig::default());
    play(
        &mut game,
        &[("e1", "f1"), ("e8", "d8"), ("f1", "e1"), ("d8", "e8")],
    );
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );
    assert_eq!(
        game.propose_move(Square::E1, Square::C1),
        Err(MoveError::CastlingUnavailable)
    );
}

#[test]
fn castling_lost_after_rook_moves() {
    let mut game = session("r3k2r/8/8/8/8/8/8/R3K2R", RuleConfig::default());
    play(
        &mut game,
        &[("h1", "h2"), ("a8", "a7"), ("h2", "h1"), ("a7", "a8")],
    );
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );
    assert_eq!(
        game.propose_move(Square::E1, Square::C1),
        Ok(MoveOutcome::Castled(CastleSide::Queenside))
    );
    assert_eq!(
        game.propose_move(Square::E8, Square::C8),
        Err(MoveError::CastlingUnavailable)
    );
    assert_eq!(
        game.propose_move(Square::E8, Square::G8),
        Ok(MoveOutcome::Castled(CastleSide::Kingside))
    );
}

#[test]
fn castling_lost_after_rook_captured_at_home() {
    let mut game = session(
        "r3k2r/8/8/8/8/8/6b1/R3K2R",
        RuleConfig::default().with_first_to_move(Color::Black),
    );
    play(&mut game, &[("g2", "h1"), ("a1", "a2"), ("h1", "g2")]);
    assert!(game.castling_rights().rook_moved(Color::White, CastleSide::Kingside));
}

#[test]
fn castling_blocked_by_occupied_path() {
    let mut game = GameSession::new();
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::OccupiedByOwnPiece)
    );
    let mut game = session("r3k2r/8/8/8/8/8/8/R3KB1R", RuleConfig::default());
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );
}

#[test]
fn castling_blocked_by_check() {
    // knight on f3 gives check
    let mut game = session("4k3/8/8/8/8/5n2/8/R3K2R", RuleConfig::default());
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );

    // rook on the f-file covers the square the king crosses
    let mut game = session("5r2/4k3/8/8/8/8/8/R3K2R", RuleConfig::default());
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );
    assert_eq!(
        game.propose_move(Square::E1, Square::C1),
        Ok(MoveOutcome::Castled(CastleSide::Queenside))
    );

    // rook on the g-file covers the destination
    let mut game = session("6r1/4k3/8/8/8/8/8/R3K2R", RuleConfig::default());
    assert_eq!(
        game.propose_move(Square::E1, Square::G1),
        Err(MoveError::CastlingUnavailable)
    );
}

#[test]
fn turns_strictly_alternate() {
    let mut game = GameSession::new();
    game.propose_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(
        game.propose_move(sq("e4"), sq("e5")),
        Err(MoveError::NotYourTurn)
    );
    game.propose_move(sq("e7"), sq("e5")).unwrap();
    assert_eq!(
        game.propose_move(sq("e5"), sq("e4")),
        Err(MoveError::NotYourTurn)
    );
    assert_eq!(game.active_color(), Color::White);
}

#[test]
fn black_promotion_on_row_seven() {
    let mut game = session(
        "4k3/8/8/8/8/8/6p1/4K2R",
        RuleConfig::default().with_first_to_move(Color::Black),
    );
    // capture into the corner also promotes
    assert_eq!(
        game.propose_move(sq("g2"), Square::H1),
        Ok(MoveOutcome::PromotionPending(Square::H1))
    );
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(
        game.propose_move(Square::E1, sq("e2")),
        Err(MoveError::PromotionPending)
    );
    assert_eq!(
        game.choose_promotion(PieceKind::Knight),
        Ok(MoveOutcome::Promoted {
            square: Square::H1,
            piece: Piece::new(PieceKind::Knight, Color::Black)
        })
    );
    assert_eq!(game.active_color(), Color::White);
    assert!(game.castling_rights().rook_moved(Color::White, CastleSide::Kingside));
}

#[test]
fn promotion_defers_win_check() {
    // the pawn captures the king while promoting
    let mut game = session("3k4/4P3/8/8/8/8/8/4K3", RuleConfig::default());
    assert_eq!(
        game.propose_move(sq("e7"), sq("d8")),
        Ok(MoveOutcome::PromotionPending(sq("d8")))
    );
    assert_eq!(game.winner(), None);
    game.choose_promotion(PieceKind::Rook).unwrap();
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(game.state(), SessionState::GameOver { winner: Color::White });
}

#[test]
fn king_capture_wins_and_locks_the_board() {
    let mut game = GameSession::new();
    // scholar's-mate pattern; without checkmate detection Black must lose
    // the king outright
    play(
        &mut game,
        &[
            ("e2", "e4"),
            ("e7", "e5"),
            ("d1", "h5"),
            ("b8", "c6"),
            ("f1", "c4"),
            ("g8", "f6"),
            ("h5", "f7"),
        ],
    );
    assert!(game.is_in_check(Color::Black));
    assert!(!game.is_game_over());
    // Black ignores the check
    play(&mut game, &[("a7", "a6")]);
    assert_eq!(
        game.propose_move(sq("f7"), Square::E8),
        Ok(MoveOutcome::Moved {
            captured: Some(Piece::new(PieceKind::King, Color::Black))
        })
    );
    assert_eq!(game.winner(), Some(Color::White));
    assert_eq!(
        game.propose_move(sq("a6"), sq("a5")),
        Err(MoveError::GameOver)
    );
    assert_eq!(
        game.choose_promotion(PieceKind::Queen),
        Err(MoveError::InvalidPromotionChoice)
    );
}

#[test]
fn self_check_opt_in() {
    let layout = "4k3/4r3/8/8/8/8/4B3/4K3";
    let mut lenient = session(layout, RuleConfig::default());
    assert!(lenient.propose_move(sq("e2"), sq("d3")).is_ok());

    let mut strict = session(layout, RuleConfig::default().with_forbid_self_check(true));
    assert_eq!(
        strict.propose_move(sq("e2"), sq("d3")),
        Err(MoveError::LeavesKingInCheck)
    );
    assert_eq!(strict.active_color(), Color::White);
}

#[test]
fn rematch_keeps_rules() {
    let rules = RuleConfig::default().with_first_to_move(Color::Black);
    let mut game = GameSession::with_rules(rules);
    game.propose_move(sq("e7"), sq("e5")).unwrap();
    game.rematch();
    assert_eq!(game.active_color(), Color::Black);
    assert_eq!(game.rules(), &rules);
    assert_eq!(game.piece_at(sq("e7")).map(|p| p.kind), Some(PieceKind::Pawn));
}
