//! Adversarial search: depth-bounded minimax with alpha-beta pruning.
//!
//! ## Overview
//!
//! [`Search`] drives a recursive alpha-beta minimax over the rules layer:
//!
//! - Successors come from [`legal_moves`](crate::rules::legal_moves) +
//!   [`apply_and_advance`](crate::rules::apply_and_advance).
//! - Candidate moves are ordered by [`quick_evaluate`](crate::eval::quick_evaluate)
//!   of their successor for a better pruning yield; the root score is
//!   unaffected by ordering.
//! - A bounded LRU [`TranspositionCache`] memoizes `(depth, result)` pairs,
//!   keyed by an order-independent zobrist hash of the position.
//!
//! Everything mutable (cache, keys, statistics) is owned by the `Search`
//! instance; there are no process-wide tables.
//!
//! ## Usage
//!
//! ```
//! use cobweb::{BoardTopology, GameState, Search, SearchConfig};
//!
//! let topology = BoardTopology::standard();
//! let state = GameState::initial();
//!
//! let mut search = Search::new(SearchConfig::default());
//! let result = search.best_move(&topology, &state, 4, false);
//!
//! if let Some(mv) = result.best {
//!     println!("best: {mv} (score {:.1})", result.score);
//! }
//! ```

pub mod cache;
pub mod config;
pub mod engine;
pub mod hash;
pub mod stats;

// Re-export main types
pub use cache::TranspositionCache;
pub use config::SearchConfig;
pub use engine::{Search, SearchResult};
pub use hash::ZobristKeys;
pub use stats::SearchStats;
