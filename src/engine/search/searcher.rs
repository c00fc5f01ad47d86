//! Searcher: owns the tie-break RNG and statistics, and drives a root search.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::core::board::Game;
use crate::error::EngineResult;

use super::types::{SearchLimits, SearchResult, SearchStats, WORST_LINE_VALUE};

pub struct Searcher {
    pub(super) rng: StdRng,
    pub(super) stats: SearchStats,
    pub(super) alpha_beta: bool,
    pub(super) elapsed: Duration,
}

impl Searcher {
    /// A searcher whose tie-breaks are fully determined by `seed`
    pub fn new(seed: u64) -> Self {
        Searcher {
            rng: StdRng::seed_from_u64(seed),
            stats: SearchStats::default(),
            alpha_beta: true,
            elapsed: Duration::ZERO,
        }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Wall time of the last search
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Search for the side to move and pick one of the best moves at random.
    ///
    /// The position is mutated during the search and restored before returning,
    /// on success and on error alike.
    pub fn search(&mut self, game: &mut Game, limits: &SearchLimits) -> EngineResult<SearchResult> {
        let start = Instant::now();
        self.stats = SearchStats::default();
        self.alpha_beta = limits.alpha_beta;

        let side = game.side_to_move;
        let mut candidates = Vec::new();
        let value = self.find_best_move(
            game,
            side,
            limits.max_ply,
            false,
            0.0,
            WORST_LINE_VALUE,
            Some(&mut candidates),
        )?;
        let best_move = candidates.choose(&mut self.rng).copied();
        self.elapsed = start.elapsed();

        debug!(
            side = side.name(),
            max_ply = limits.max_ply,
            alpha_beta = limits.alpha_beta,
            value,
            candidates = candidates.len(),
            nodes = self.stats.nodes,
            cutoffs = self.stats.cutoffs,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "search finished"
        );

        Ok(SearchResult {
            value,
            best_move,
            candidates,
        })
    }
}
