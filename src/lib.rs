//! # cobweb
//!
//! Rule and decision engine for a two-player strategy game played on a fixed
//! 22-vertex web-shaped board.
//!
//! ## Design Principles
//!
//! 1. **Pure rules core**: every operation maps `GameState -> GameState` (or
//!    a move list) without observable mutation. Callers discard superseded
//!    states; the engine holds no reference to them beyond cache keys.
//!
//! 2. **Topology over geometry**: move legality (the forward-only rule for
//!    non-upgraded pieces) is decided by a precomputed per-vertex rank, never
//!    by rendering coordinates.
//!
//! 3. **No hidden globals**: the transposition cache and zobrist keys are
//!    owned by the [`Search`] instance that uses them.
//!
//! ## Modules
//!
//! - `core`: vertex ids, board topology, pieces, states, moves, errors
//! - `rules`: legal-move generation and move application
//! - `eval`: static and quick heuristic scoring
//! - `search`: alpha-beta minimax with a bounded LRU transposition cache
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
//! // White to move; White prefers low scores, so maximizing = false.
//! let result = search.best_move(&topology, &state, 4, false);
//! assert!(result.best.is_some());
//! ```

pub mod core;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    BoardTopology, Cob, Color, GameState, GameStateBuilder, Move, MoveList, RuleError, VertexId,
    VERTEX_COUNT,
};
pub use crate::eval::{evaluate, quick_evaluate, terminal_score, EvalWeights, WIN};
pub use crate::rules::{apply, apply_and_advance, is_terminal, is_valid_move, legal_moves, winner};
pub use crate::search::{
    Search, SearchConfig, SearchResult, SearchStats, TranspositionCache, ZobristKeys,
};
