//! Alpha-beta minimax search driver.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::core::{BoardTopology, GameState, Move};
use crate::eval::{evaluate, quick_evaluate, terminal_score};
use crate::rules::{apply_and_advance, is_terminal, legal_moves};

use super::cache::TranspositionCache;
use super::config::SearchConfig;
use super::hash::ZobristKeys;
use super::stats::SearchStats;

/// Outcome of a search call.
///
/// `best` is `None` only at a depth-0 leaf or a terminal state (no legal
/// moves); UI callers map that to an end-of-game condition.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Score under the fixed sign convention: positive favors Black.
    pub score: f32,
    /// Best move found, if any.
    pub best: Option<Move>,
}

/// Adversarial search context.
///
/// Owns its transposition cache, zobrist keys, evaluation weights and
/// statistics; nothing is shared process-wide. One instance per concurrent
/// search: the cache is mutable state, so concurrent callers need either an
/// external lock or an engine each.
pub struct Search {
    config: SearchConfig,
    keys: ZobristKeys,
    cache: TranspositionCache,
    stats: SearchStats,
}

impl Search {
    /// Create a new search context.
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let keys = ZobristKeys::new(config.zobrist_seed);
        let cache = TranspositionCache::new(config.cache_capacity);
        Self {
            config,
            keys,
            cache,
            stats: SearchStats::default(),
        }
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent [`best_move`](Self::best_move) call.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Number of entries currently in the transposition cache.
    #[must_use]
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Drop all cached results (e.g. between unrelated games).
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// Search `state` to `depth` plies and return the best move with its
    /// score. `maximizing` selects the root objective: `true` seeks high
    /// (Black-favoring) scores, `false` low.
    ///
    /// Synchronous and single-threaded; runs to completion once started, with
    /// no mid-search abort hook; a caller needing cancellation must discard
    /// the thread or task running it. Never panics or errors: a position
    /// without legal moves yields `best: None` at any depth.
    pub fn best_move(
        &mut self,
        topology: &BoardTopology,
        state: &GameState,
        depth: u32,
        maximizing: bool,
    ) -> SearchResult {
        let start = Instant::now();
        self.stats.reset();
        let result = self.alphabeta(
            topology,
            state,
            depth,
            maximizing,
            f32::NEG_INFINITY,
            f32::INFINITY,
        );
        self.stats.time_us = start.elapsed().as_micros() as u64;
        result
    }

    fn alphabeta(
        &mut self,
        topology: &BoardTopology,
        state: &GameState,
        depth: u32,
        maximizing: bool,
        mut alpha: f32,
        mut beta: f32,
    ) -> SearchResult {
        self.stats.nodes += 1;

        let hash = self.keys.hash(state);
        if let Some(hit) = self.cache.get(hash, depth) {
            self.stats.cache_hits += 1;
            return hit;
        }

        let terminal = is_terminal(topology, state);
        if depth == 0 || terminal {
            self.stats.leaves += 1;
            let score = if terminal {
                terminal_score(state)
            } else {
                evaluate(state, &self.config.weights)
            };
            let result = SearchResult { score, best: None };
            self.store(hash, depth, result);
            return result;
        }

        // Materialize and order successors: quick evaluation of the
        // resulting position (WIN sentinel for terminal successors), best
        // first for the side on move. Stable sort keeps generation order on
        // ties, so move choice is deterministic.
        let moves = legal_moves(topology, state);
        let mut children: Vec<(Move, GameState, f32)> = Vec::with_capacity(moves.len());
        for mv in moves {
            // Generated moves always apply cleanly.
            let Ok(successor) = apply_and_advance(topology, state, mv) else {
                continue;
            };
            let key = if is_terminal(topology, &successor) {
                terminal_score(&successor)
            } else {
                quick_evaluate(&successor)
            };
            children.push((mv, successor, key));
        }
        if maximizing {
            children.sort_by(|a, b| b.2.total_cmp(&a.2));
        } else {
            children.sort_by(|a, b| a.2.total_cmp(&b.2));
        }

        let mut best = SearchResult {
            score: if maximizing {
                f32::NEG_INFINITY
            } else {
                f32::INFINITY
            },
            best: None,
        };
        for (mv, successor, _) in &children {
            let child = self.alphabeta(topology, successor, depth - 1, !maximizing, alpha, beta);
            // Strict comparison: ties keep the first-seen (best-ordered)
            // move, which makes the choice deterministic.
            if maximizing {
                if child.score > best.score {
                    best = SearchResult {
                        score: child.score,
                        best: Some(*mv),
                    };
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = SearchResult {
                        score: child.score,
                        best: Some(*mv),
                    };
                }
                beta = beta.min(best.score);
            }
            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        self.store(hash, depth, best);
        best
    }

    fn store(&mut self, hash: u64, depth: u32, result: SearchResult) {
        self.cache.put(hash, depth, result);
        self.stats.cache_stores += 1;
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}
