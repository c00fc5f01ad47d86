//! Depth-bounded negamax with alpha-beta pruning over make/unmake.
//!
//! A line's value is what the mover captures minus the best the opponent can
//! get back. Pruning compares a child's running best against the best value
//! its grandparent ("uncle") already has: once the parent's line through this
//! child cannot beat the uncle, the remaining replies are skipped.

use tracing::trace;

use crate::core::board::{Color, Game};
use crate::core::moves::Move;
use crate::engine::movegen::MoveGen;
use crate::error::EngineResult;

use super::searcher::Searcher;
use super::types::WORST_LINE_VALUE;

impl Searcher {
    /// Best line value for `color` searching `max_ply` plies of replies.
    ///
    /// `parent_value` is the capture value of the move that led here and
    /// `uncle_value` the parent's best line so far. When `candidates` is given it
    /// receives every move tied for the best value, in generation order.
    /// Returns `WORST_LINE_VALUE` when `color` has no move.
    #[allow(clippy::too_many_arguments)]
    pub fn find_best_move(
        &mut self,
        game: &mut Game,
        color: Color,
        max_ply: u32,
        do_pruning: bool,
        parent_value: f64,
        uncle_value: f64,
        mut candidates: Option<&mut Vec<Move>>,
    ) -> EngineResult<f64> {
        self.stats.nodes += 1;

        let moves = MoveGen::generate_moves(game, color, false);
        let mut best = WORST_LINE_VALUE;

        for (i, &mv) in moves.iter().enumerate() {
            let undo = game.make_move(color, mv)?;
            let capture_value = undo.captured_value;

            let reply = if undo.captured_king() {
                self.stats.king_captures += 1;
                Ok(0.0)
            } else if max_ply > 0 {
                let child_pruning = self.alpha_beta && i > 0;
                self.find_best_move(game, color.opposite(), max_ply - 1, child_pruning, capture_value, best, None)
            } else {
                Ok(0.0)
            };
            game.unmake_move(undo);
            let line = capture_value - reply?;

            let new_best = line > best;
            if new_best {
                best = line;
            }
            if let Some(list) = candidates.as_deref_mut() {
                if new_best {
                    list.clear();
                }
                if line == best {
                    list.push(mv);
                }
            }

            if do_pruning && new_best && parent_value - best < uncle_value {
                self.stats.cutoffs += 1;
                trace!(%mv, best, parent_value, uncle_value, "cutoff");
                break;
            }
        }

        Ok(best)
    }
}
