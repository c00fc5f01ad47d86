//! Search limits, stats, results, and constants.

use crate::core::moves::Move;
use crate::core::piece::PieceType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies searched below the root; 0 scores only the root's own captures
    pub max_ply: u32,
    /// Disable to search the full tree (plain minimax)
    pub alpha_beta: bool,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_ply: DEFAULT_MAX_PLY,
            alpha_beta: true,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
    pub king_captures: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Best line value from the mover's point of view
    pub value: f64,
    /// Chosen among `candidates`; `None` when the side has no move
    pub best_move: Option<Move>,
    /// Every root move whose line value equals `value`
    pub candidates: Vec<Move>,
}

pub const KING_VALUE: f64 = PieceType::KING_VALUE;
/// Value of a side with no move, and the starting best value at every node
pub const WORST_LINE_VALUE: f64 = -2000.0;
pub const DEFAULT_MAX_PLY: u32 = 3;
/// Deepest search accepted from the command line or the GUI
pub const MAX_DEPTH: u32 = 8;
