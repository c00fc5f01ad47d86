//! Perft Tests
//!
//! Node counts from the initial position, and move-set agreement with the
//! shakmaty reference generator on positions where pseudo-legal and legal
//! moves coincide.

use pawnstorm::core::board::{Color, Game};
use pawnstorm::core::moves::Move;
use pawnstorm::engine::movegen::MoveGen;
use pawnstorm::engine::perft::{perft, perft_divide};
use shakmaty::{fen::Fen, CastlingMode, Chess, Position};
use std::collections::BTreeSet;

fn our_moves(fen: &str) -> BTreeSet<String> {
    let game = Game::from_fen(fen).unwrap();
    let side = game.side_to_move;
    MoveGen::generate_moves(&game, side, false)
        .iter()
        .map(|mv| mv.to_uci(side))
        .collect()
}

fn reference_moves(fen: &str) -> BTreeSet<String> {
    let f: Fen = fen.parse().unwrap();
    let pos: Chess = f.into_position(CastlingMode::Standard).unwrap();
    pos.legal_moves()
        .iter()
        .map(|mv| mv.to_uci(CastlingMode::Standard).to_string())
        .collect()
}

fn assert_same_moves(fen: &str) {
    let ours = our_moves(fen);
    let reference = reference_moves(fen);
    assert_eq!(
        ours,
        reference,
        "{}: extra {:?}, missing {:?}",
        fen,
        ours.difference(&reference).collect::<Vec<_>>(),
        reference.difference(&ours).collect::<Vec<_>>()
    );
}

#[test]
fn test_perft_initial_depth_1() {
    let mut game = Game::new();
    assert_eq!(perft(&mut game, Color::White, 1).unwrap(), 20);
}

#[test]
fn test_perft_initial_depth_2() {
    let mut game = Game::new();
    assert_eq!(perft(&mut game, Color::White, 2).unwrap(), 400);
}

#[test]
fn test_perft_initial_depth_3() {
    let mut game = Game::new();
    assert_eq!(perft(&mut game, Color::White, 3).unwrap(), 8902);
    assert_eq!(game, Game::new());
}

#[test]
fn test_perft_divide_initial() {
    let mut game = Game::new();
    let divide = perft_divide(&mut game, Color::White, 3).unwrap();
    assert_eq!(divide.len(), 20);
    assert_eq!(divide.iter().map(|(_, n)| n).sum::<u64>(), 8902);
    let e2e4 = divide
        .iter()
        .find(|(mv, _)| mv.to_uci(Color::White) == "e2e4")
        .map(|(_, n)| *n);
    assert_eq!(e2e4, Some(600));
}

#[test]
fn test_matches_reference_initial() {
    assert_same_moves("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_same_moves("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1");
}

#[test]
fn test_matches_reference_castling() {
    assert_same_moves("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
    assert_same_moves("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1");
}

#[test]
fn test_matches_reference_en_passant() {
    assert_same_moves("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
}

#[test]
fn test_matches_reference_promotion() {
    assert_same_moves("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1");
}

// ============================================================================
// Make/Unmake Tests
// ============================================================================

/// Play every generated move `depth` plies deep, checking after each unmake
/// that the position is exactly what it was before the move.
fn walk_round_trips(game: &mut Game, color: Color, depth: u32, line: &mut Vec<Move>) {
    if depth == 0 {
        return;
    }
    for &mv in &MoveGen::generate_moves(game, color, false) {
        let before = game.clone();
        let undo = game.make_move(color, mv).unwrap();
        line.push(mv);
        if !undo.captured_king() {
            game.validate().unwrap();
            walk_round_trips(game, color.opposite(), depth - 1, line);
        }
        game.unmake_move(undo);
        assert_eq!(*game, before, "unmake failed after {:?}", line);
        line.pop();
    }
}

#[test]
fn test_unmake_restores_every_move() {
    for fen in [
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    ] {
        let mut game = Game::from_fen(fen).unwrap();
        let side = game.side_to_move;
        walk_round_trips(&mut game, side, 3, &mut Vec::new());
    }
}
