//! Rules layer: legal-move generation and move application.
//!
//! Everything here is a pure function over (`BoardTopology`, `GameState`):
//! - `movegen`: enumerate legal moves, detect terminal states, attribute wins
//! - `apply`: materialize the successor of a move (promotion + contact flips)
//!
//! `apply` never toggles the side to move; `apply_and_advance` is the wrapper
//! that does, used by the search for successor generation and by UI move
//! commitment. Each caller toggles exactly once.

pub mod apply;
pub mod movegen;

pub use apply::{apply, apply_and_advance};
pub use movegen::{is_terminal, is_valid_move, legal_moves, winner};
