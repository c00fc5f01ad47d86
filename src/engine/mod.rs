//! Chess engine components
//!
//! This module contains the engine functionality:
//! - Move generation, with captures ordered by victim
//! - Negamax search with alpha-beta pruning
//! - Perft node counting

pub mod movegen;
pub mod ordering;
pub mod perft;
pub mod search;

pub use movegen::MoveGen;
pub use perft::{perft, perft_divide};
pub use search::{SearchLimits, SearchResult, SearchStats, Searcher, KING_VALUE, WORST_LINE_VALUE};
