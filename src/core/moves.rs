//! Move value types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::vertex::VertexId;

/// A single move: relocation of the piece on `from` to the empty, adjacent
/// vertex `to`. Always edge-adjacent with `from != to` when produced by
/// [`legal_moves`](crate::rules::legal_moves).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: VertexId,
    pub to: VertexId,
}

impl Move {
    #[must_use]
    pub const fn new(from: VertexId, to: VertexId) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Inline move list. Worst case on the standard board is 8 upgraded pieces
/// times a maximum degree of 7, but positions rarely exceed a few dozen
/// moves; spills fall back to the heap.
pub type MoveList = SmallVec<[Move; 32]>;
