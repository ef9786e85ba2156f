//! Vertex identification for the fixed 22-vertex board.
//!
//! Vertices are numbered `0..22`, row by row from Black's home row at the top
//! of the board to White's home row at the bottom:
//!
//! ```text
//! rank 0:   0  1  2  3     Black home
//! rank 1:   4  5  6  7
//! rank 2:    8  9 10
//! rank 3:   11 12 13
//! rank 4:  14 15 16 17
//! rank 5:  18 19 20 21     White home
//! ```
//!
//! The numbering is an opaque identifier; all structure (adjacency, ranks,
//! home membership) lives in [`crate::core::BoardTopology`].

use serde::{Deserialize, Serialize};

/// Number of vertices on the board.
pub const VERTEX_COUNT: usize = 22;

/// Identifier for a board vertex.
///
/// Valid ids are `0..22`; anything else names a vertex that does not exist
/// and is rejected at the API boundary with
/// [`RuleError::UnknownVertex`](crate::core::RuleError::UnknownVertex).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub u8);

impl VertexId {
    /// Create a vertex id from a raw index.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Check whether this id names a vertex that exists on the board.
    #[must_use]
    pub const fn on_board(self) -> bool {
        (self.0 as usize) < VERTEX_COUNT
    }

    /// Iterate over every vertex id on the board.
    ///
    /// ```
    /// use cobweb::VertexId;
    ///
    /// assert_eq!(VertexId::all().count(), 22);
    /// assert!(VertexId::all().all(VertexId::on_board));
    /// ```
    pub fn all() -> impl Iterator<Item = VertexId> {
        (0..VERTEX_COUNT as u8).map(VertexId)
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board_bounds() {
        assert!(VertexId::new(0).on_board());
        assert!(VertexId::new(21).on_board());
        assert!(!VertexId::new(22).on_board());
        assert!(!VertexId::new(255).on_board());
    }

    #[test]
    fn test_all_covers_board() {
        let ids: Vec<_> = VertexId::all().collect();
        assert_eq!(ids.len(), VERTEX_COUNT);
        assert_eq!(ids[0], VertexId::new(0));
        assert_eq!(ids[21], VertexId::new(21));
    }

    #[test]
    fn test_display() {
        assert_eq!(VertexId::new(7).to_string(), "v7");
    }
}
