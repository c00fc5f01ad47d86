//! Self-play: the engine plays both sides until the game is decided.

use std::fmt;
use std::io::Write;
use tracing::info;

use crate::core::board::{Color, Game};
use crate::engine::search::{SearchLimits, Searcher};
use crate::error::EngineResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    KingCaptured { winner: Color },
    /// `side` was to move and had nothing to play
    NoMoves { side: Color },
    PlyLimit,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::KingCaptured { winner } => write!(f, "{} wins by capturing the king", winner.name()),
            GameOutcome::NoMoves { side } => write!(f, "{} has no moves", side.name()),
            GameOutcome::PlyLimit => write!(f, "ply limit reached"),
        }
    }
}

/// Alternate searching and playing until the game is decided or `max_plies`
/// moves have been played. The board is rendered before every move.
pub fn self_play<W: Write>(
    game: &mut Game,
    searcher: &mut Searcher,
    limits: &SearchLimits,
    max_plies: u32,
    out: &mut W,
) -> EngineResult<GameOutcome> {
    for ply in 0..max_plies {
        let side = game.side_to_move;
        writeln!(out, "{}", game)?;
        let result = searcher.search(game, limits)?;
        let Some(mv) = result.best_move else {
            return Ok(finish(GameOutcome::NoMoves { side }));
        };

        writeln!(out, "{}. {} plays {} ({})", ply / 2 + 1, side.name(), mv.to_uci(side), result.value)?;
        game.play(mv)?;

        if game.is_king_captured(side.opposite()) {
            return Ok(finish(GameOutcome::KingCaptured { winner: side }));
        }
    }
    Ok(finish(GameOutcome::PlyLimit))
}

fn finish(outcome: GameOutcome) -> GameOutcome {
    info!(%outcome, "game over");
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limits(max_ply: u32) -> SearchLimits {
        SearchLimits {
            max_ply,
            alpha_beta: true,
        }
    }

    #[test]
    fn test_king_capture_ends_game() {
        let mut game = Game::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1").unwrap();
        let mut searcher = Searcher::new(3);
        let mut out = Vec::new();
        let outcome = self_play(&mut game, &mut searcher, &limits(0), 10, &mut out).unwrap();
        assert_eq!(outcome, GameOutcome::KingCaptured { winner: Color::White });
        assert!(String::from_utf8(out).unwrap().contains("1. White plays e1e8"));
    }

    #[test]
    fn test_stuck_side_ends_game() {
        let mut game = Game::from_fen("4k3/8/8/8/8/p7/P7/8 w - - 0 1").unwrap();
        let mut searcher = Searcher::new(3);
        let outcome = self_play(&mut game, &mut searcher, &limits(1), 10, &mut std::io::sink()).unwrap();
        assert_eq!(outcome, GameOutcome::NoMoves { side: Color::White });
    }

    #[test]
    fn test_ply_limit() {
        let mut game = Game::new();
        let mut searcher = Searcher::new(3);
        let outcome = self_play(&mut game, &mut searcher, &limits(1), 4, &mut std::io::sink()).unwrap();
        assert_eq!(outcome, GameOutcome::PlyLimit);
        assert_eq!(game.side_to_move, Color::White);
        game.validate().unwrap();
    }
}
