//! Core Tests
//!
//! Squares, game setup, FEN import, rendering and the game driver.

use pawnstorm::core::board::{Color, Game, PieceId, Square};
use pawnstorm::core::piece::PieceType;
use pawnstorm::error::ErrorKind;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

// ============================================================================
// Square Tests
// ============================================================================

#[test]
fn test_square_algebraic() {
    assert_eq!(sq("a1"), Square(0));
    assert_eq!(sq("h8"), Square(63));
    assert_eq!(sq("e4"), Square(28));
    assert_eq!(Square(28).to_algebraic(), "e4");
    assert_eq!(sq("e4").row(), 3);
    assert_eq!(sq("e4").col(), 4);
    assert!(Square::from_algebraic("i1").is_none());
    assert!(Square::from_algebraic("a9").is_none());
    assert!(Square::from_algebraic("a").is_none());
}

#[test]
fn test_square_offset_stays_on_board() {
    assert_eq!(sq("e4").offset(1, -1), Some(sq("d5")));
    assert_eq!(sq("a1").offset(0, -1), None);
    assert_eq!(sq("h8").offset(1, 0), None);
}

#[test]
fn test_castle_sentinels() {
    assert_eq!(Square::CASTLE_KINGSIDE, Square(64));
    assert_eq!(Square::CASTLE_QUEENSIDE, Square(65));
    assert!(Square::CASTLE_KINGSIDE.is_castle_sentinel());
    assert!(!Square::CASTLE_KINGSIDE.is_on_board());
    assert!(!sq("h8").is_castle_sentinel());
}

// ============================================================================
// Setup Tests
// ============================================================================

#[test]
fn test_standard_roster_order() {
    let game = Game::new();
    let white = &game.player(Color::White).pieces;
    assert_eq!(white.len(), 16);
    let back: Vec<PieceType> = white[..8].iter().map(|p| p.piece_type()).collect();
    assert_eq!(
        back,
        vec![
            PieceType::Rook,
            PieceType::Knight,
            PieceType::Bishop,
            PieceType::Queen,
            PieceType::King,
            PieceType::Bishop,
            PieceType::Knight,
            PieceType::Rook,
        ]
    );
    for (col, pawn) in white[8..].iter().enumerate() {
        assert_eq!(pawn.piece_type(), PieceType::Pawn);
        assert_eq!(pawn.square(), Square::from_row_col(1, col as i8));
    }
    assert_eq!(game.player(Color::Black).pieces[4].square(), sq("e8"));
}

#[test]
fn test_initial_state() {
    let game = Game::new();
    assert_eq!(game.side_to_move, Color::White);
    assert_eq!(game.board.en_passant, None);
    assert!(game.player(Color::White).castling.kingside);
    assert!(game.player(Color::Black).castling.queenside);
    assert!(!game.is_king_captured(Color::White));
    assert!(!game.is_king_captured(Color::Black));
    game.validate().unwrap();
}

#[test]
fn test_validate_detects_stray_slot() {
    let mut game = Game::new();
    // Point e4 at White's a-pawn, which still believes it is on a2.
    game.board.set(
        sq("e4"),
        Some(PieceId {
            color: Color::White,
            index: 8,
        }),
    );
    let err = game.validate().unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::Internal(_)));
}

// ============================================================================
// FEN Tests
// ============================================================================

#[test]
fn test_fen_startpos_matches_new_game() {
    assert_eq!(Game::from_fen(START_FEN).unwrap(), Game::new());
}

#[test]
fn test_fen_side_and_rights() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 0 1").unwrap();
    assert_eq!(game.side_to_move, Color::Black);
    let white = game.player(Color::White).castling;
    let black = game.player(Color::Black).castling;
    assert!(white.kingside && !white.queenside);
    assert!(!black.kingside && black.queenside);
}

#[test]
fn test_fen_en_passant_marks_pawn() {
    let game = Game::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").unwrap();
    assert_eq!(game.board.en_passant, Some(sq("d5")));
}

#[test]
fn test_fen_malformed_is_invalid_parameter() {
    let err = Game::from_fen("not a fen").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidParameter(_)));
}

#[test]
fn test_fen_inconsistent_en_passant_fails_construction() {
    let err = Game::from_fen("4k3/8/8/8/8/8/8/4K3 w - d6 0 1").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::ConstructorFailed(_)));
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_display_initial_position() {
    let expected = "rnbqkbnr\n\
                    pppppppp\n \
                    * * * *\n\
                    * * * * \n \
                    * * * *\n\
                    * * * * \n\
                    PPPPPPPP\n\
                    RNBQKBNR\n";
    assert_eq!(Game::new().to_string(), expected);
}

// ============================================================================
// Game Driver Tests
// ============================================================================

#[test]
fn test_play_flips_side() {
    let mut game = Game::new();
    let mv = game.parse_move("e2e4").unwrap();
    game.play(mv).unwrap();
    assert_eq!(game.side_to_move, Color::Black);
    assert_eq!(game.piece_at(sq("e4")).unwrap().piece_type(), PieceType::Pawn);
    assert!(game.piece_at(sq("e2")).is_none());
    game.validate().unwrap();
}

#[test]
fn test_parse_move_errors() {
    let game = Game::new();
    let err = game.parse_move("e2e5").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::IllegalOperation(_)));
    let err = game.parse_move("zz").unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::InvalidParameter(_)));
    // Black piece while White is to move
    assert!(game.parse_move("e7e5").is_err());
}

#[test]
fn test_parse_castling_as_king_move() {
    let game = Game::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let mv = game.parse_move("e1g1").unwrap();
    assert!(mv.is_castling());
    assert!(mv.is_kingside_castle());
    let mv = game.parse_move("e1c1").unwrap();
    assert!(mv.is_castling());
    assert!(!mv.is_kingside_castle());
}

#[test]
fn test_play_rejects_move_not_generated() {
    let mut game = Game::new();
    let before = game.clone();
    let bogus = pawnstorm::core::moves::Move::new(sq("d1"), sq("d5"));
    let err = game.play(bogus).unwrap_err();
    assert!(matches!(err.kind(), ErrorKind::IllegalOperation(_)));
    assert_eq!(game, before);
}

#[test]
fn test_king_capture_ends_game() {
    let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
    let mv = game.parse_move("e1e8").unwrap();
    game.play(mv).unwrap();
    assert!(game.is_king_captured(Color::Black));
    assert!(!game.is_king_captured(Color::White));
}
