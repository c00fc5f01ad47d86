//! Perft: leaf counts of the move tree, for checking the generator.

use crate::core::board::{Color, Game};
use crate::core::moves::Move;
use crate::error::EngineResult;

use super::movegen::MoveGen;

/// Count the leaves `depth` plies below the position, `color` to move
pub fn perft(game: &mut Game, color: Color, depth: u32) -> EngineResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let moves = MoveGen::generate_moves(game, color, false);
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0;
    for &mv in &moves {
        let undo = game.make_move(color, mv)?;
        let sub = perft(game, color.opposite(), depth - 1);
        game.unmake_move(undo);
        nodes += sub?;
    }
    Ok(nodes)
}

/// Per-root-move leaf counts, in generation order. Empty at depth 0, where
/// no root move is played.
pub fn perft_divide(game: &mut Game, color: Color, depth: u32) -> EngineResult<Vec<(Move, u64)>> {
    if depth == 0 {
        return Ok(Vec::new());
    }
    let moves = MoveGen::generate_moves(game, color, false);
    let mut counts = Vec::with_capacity(moves.len());
    for &mv in &moves {
        let undo = game.make_move(color, mv)?;
        let sub = perft(game, color.opposite(), depth - 1);
        game.unmake_move(undo);
        counts.push((mv, sub?));
    }
    Ok(counts)
}
