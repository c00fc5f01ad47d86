//! Engine configuration shared by the command line and the UCI shell.

use crate::engine::search::{SearchLimits, DEFAULT_MAX_PLY};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Plies searched below the root
    pub max_ply: u32,
    pub alpha_beta: bool,
    /// Tie-break seed; the wall clock is used when unset
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_ply: DEFAULT_MAX_PLY,
            alpha_beta: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn limits(&self) -> SearchLimits {
        SearchLimits {
            max_ply: self.max_ply,
            alpha_beta: self.alpha_beta,
        }
    }

    pub fn rng_seed(&self) -> u64 {
        self.seed.unwrap_or_else(wall_clock_seed)
    }
}

fn wall_clock_seed() -> u64 {
    let now = chrono::Utc::now();
    now.timestamp_nanos_opt()
        .map(|nanos| nanos as u64)
        .unwrap_or_else(|| now.timestamp_micros() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.max_ply, 3);
        assert!(config.alpha_beta);
        assert_eq!(config.limits(), SearchLimits::default());
    }

    #[test]
    fn test_fixed_seed_wins() {
        let config = EngineConfig {
            seed: Some(42),
            ..EngineConfig::default()
        };
        assert_eq!(config.rng_seed(), 42);
    }
}
