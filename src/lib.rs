pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod play;
pub mod uci;

pub use config::EngineConfig;
pub use crate::core::{Color, Game, Move, Square};
pub use engine::search::{SearchLimits, SearchResult, Searcher};
pub use error::{EngineError, EngineResult, ErrorKind};
pub use shakmaty;
pub use uci::UCI;
