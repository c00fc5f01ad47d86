//! Search: depth-bounded negamax, alpha-beta pruning, random tie-breaking.

mod negamax;
mod report;
mod searcher;
mod types;

pub use report::{format_bestmove, format_info, format_score};
pub use searcher::Searcher;
pub use types::{SearchLimits, SearchResult, SearchStats, DEFAULT_MAX_PLY, KING_VALUE, MAX_DEPTH, WORST_LINE_VALUE};
