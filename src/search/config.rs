//! Search configuration parameters.
//!
//! The search is sequential, so there are no thread-count or work-splitting
//! knobs; the configuration is weights, cache capacity and the zobrist seed.

use serde::{Deserialize, Serialize};

use crate::eval::EvalWeights;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Evaluation weights; difficulty presets vary these.
    pub weights: EvalWeights,

    /// Transposition cache capacity in entries. 0 disables caching.
    pub cache_capacity: usize,

    /// Seed for zobrist key generation. Same seed produces identical hashes
    /// across engines, so cached results are comparable between runs.
    pub zobrist_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            cache_capacity: 10_000,
            zobrist_seed: 0x0C0B_3EB5_1DEA_F00D,
        }
    }
}

impl SearchConfig {
    /// Create a config with custom evaluation weights.
    #[must_use]
    pub fn with_weights(mut self, weights: EvalWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Create a config with a custom cache capacity.
    #[must_use]
    pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Create a config with a custom zobrist seed.
    #[must_use]
    pub fn with_zobrist_seed(mut self, seed: u64) -> Self {
        self.zobrist_seed = seed;
        self
    }
}
