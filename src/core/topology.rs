//! Static board topology: edge set, adjacency index, ranks, home bases.
//!
//! The board is a web of 22 vertices in six rows (see [`crate::core::vertex`]
//! for the numbering). The edge set is fixed, symmetric and connected; the
//! adjacency index is folded from it once at construction and read-only
//! afterwards.
//!
//! ## Forward movement
//!
//! Each vertex carries a *rank* (its row index, 0 at Black's home row, 5 at
//! White's). A move is forward for White when the rank strictly decreases and
//! forward for Black when it strictly increases; same-rank moves are forward
//! for neither color. The rank comparison is the entire forward test;
//! legality never touches rendering coordinates.

use smallvec::SmallVec;

use super::error::RuleError;
use super::piece::Color;
use super::vertex::{VertexId, VERTEX_COUNT};

/// Neighbor list of one vertex. Maximum degree on the standard board is 7.
pub type NeighborList = SmallVec<[VertexId; 8]>;

/// The fixed, undirected edge set: row chains plus inter-row links, with the
/// two middle rows cross-linked to give the center its web-like density.
const EDGES: [(u8, u8); 43] = [
    // Row chains
    (0, 1),
    (1, 2),
    (2, 3),
    (4, 5),
    (5, 6),
    (6, 7),
    (8, 9),
    (9, 10),
    (11, 12),
    (12, 13),
    (14, 15),
    (15, 16),
    (16, 17),
    (18, 19),
    (19, 20),
    (20, 21),
    // Black home row to upper field row
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
    // Upper field row to upper mid row
    (4, 8),
    (5, 8),
    (5, 9),
    (6, 9),
    (6, 10),
    (7, 10),
    // Upper mid row to lower mid row (cross-linked center)
    (8, 11),
    (8, 12),
    (9, 11),
    (9, 12),
    (9, 13),
    (10, 12),
    (10, 13),
    // Lower mid row to lower field row
    (11, 14),
    (11, 15),
    (12, 15),
    (12, 16),
    (13, 16),
    (13, 17),
    // Lower field row to White home row
    (14, 18),
    (15, 19),
    (16, 20),
    (17, 21),
];

/// Row index of every vertex, top (Black home) to bottom (White home).
const RANKS: [u8; VERTEX_COUNT] = [
    0, 0, 0, 0, // Black home
    1, 1, 1, 1, // upper field
    2, 2, 2, // upper mid
    3, 3, 3, // lower mid
    4, 4, 4, 4, // lower field
    5, 5, 5, 5, // White home
];

/// Home base vertices, indexed by `Color::index()`.
const HOMES: [[u8; 4]; 2] = [
    [18, 19, 20, 21], // White
    [0, 1, 2, 3],     // Black
];

/// Starting placement, indexed by `Color::index()`: the field row adjacent to
/// each color's own home.
const STARTS: [[VertexId; 4]; 2] = [
    [
        VertexId::new(14),
        VertexId::new(15),
        VertexId::new(16),
        VertexId::new(17),
    ], // White
    [
        VertexId::new(4),
        VertexId::new(5),
        VertexId::new(6),
        VertexId::new(7),
    ], // Black
];

/// Starting vertices of a color; shared with `GameState::initial`, which has
/// no topology in scope.
pub(crate) const fn starting_row(color: Color) -> &'static [VertexId; 4] {
    &STARTS[color.index()]
}

/// Static board topology, built once and shared read-only.
///
/// ```
/// use cobweb::{BoardTopology, Color, VertexId};
///
/// let topology = BoardTopology::standard();
/// assert_eq!(topology.vertex_count(), 22);
/// assert!(topology.adjacent(VertexId::new(0), VertexId::new(4)).unwrap());
/// assert!(topology.in_home(Color::Black, VertexId::new(0)));
/// ```
#[derive(Clone, Debug)]
pub struct BoardTopology {
    edges: Vec<(VertexId, VertexId)>,
    adjacency: [NeighborList; VERTEX_COUNT],
    homes: [[VertexId; 4]; 2],
}

impl BoardTopology {
    /// Build the standard 22-vertex board.
    #[must_use]
    pub fn standard() -> Self {
        let edges: Vec<(VertexId, VertexId)> = EDGES
            .iter()
            .map(|&(a, b)| (VertexId::new(a), VertexId::new(b)))
            .collect();

        let mut adjacency: [NeighborList; VERTEX_COUNT] =
            std::array::from_fn(|_| NeighborList::new());
        for &(a, b) in &edges {
            adjacency[a.index()].push(b);
            adjacency[b.index()].push(a);
        }

        let homes = HOMES.map(|base| base.map(VertexId::new));

        Self {
            edges,
            adjacency,
            homes,
        }
    }

    /// Number of vertices on the board.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        VERTEX_COUNT
    }

    /// The undirected edge list.
    #[must_use]
    pub fn edges(&self) -> &[(VertexId, VertexId)] {
        &self.edges
    }

    /// Check whether a vertex id exists on this board.
    #[must_use]
    pub fn contains(&self, v: VertexId) -> bool {
        v.on_board()
    }

    /// Neighbors of a vertex, or `UnknownVertex` for an id off the board.
    pub fn neighbors(&self, v: VertexId) -> Result<&[VertexId], RuleError> {
        self.check(v)?;
        Ok(self.adj(v))
    }

    /// Check whether two vertices share an edge.
    pub fn adjacent(&self, a: VertexId, b: VertexId) -> Result<bool, RuleError> {
        self.check(b)?;
        Ok(self.neighbors(a)?.contains(&b))
    }

    /// Rank (row index) of a vertex: 0 at Black's home row, 5 at White's.
    pub fn rank(&self, v: VertexId) -> Result<u8, RuleError> {
        self.check(v)?;
        Ok(RANKS[v.index()])
    }

    /// The 4 home-base vertices of a color.
    #[must_use]
    pub fn home(&self, color: Color) -> &[VertexId; 4] {
        &self.homes[color.index()]
    }

    /// The 4 starting vertices of a color (the field row adjacent to its own
    /// home base).
    #[must_use]
    pub fn start(&self, color: Color) -> &[VertexId; 4] {
        starting_row(color)
    }

    /// Check whether a vertex lies in a color's home base.
    ///
    /// Off-board ids are in no home.
    #[must_use]
    pub fn in_home(&self, color: Color, v: VertexId) -> bool {
        self.homes[color.index()].contains(&v)
    }

    /// Check whether a move is forward for a color. Required for base
    /// (non-upgraded) pieces; upgraded pieces ignore direction.
    pub fn is_forward(
        &self,
        color: Color,
        from: VertexId,
        to: VertexId,
    ) -> Result<bool, RuleError> {
        self.check(from)?;
        self.check(to)?;
        Ok(self.forward_by_rank(color, from, to))
    }

    /// Rank comparison for validated ids.
    pub(crate) fn forward_by_rank(&self, color: Color, from: VertexId, to: VertexId) -> bool {
        let (from, to) = (RANKS[from.index()], RANKS[to.index()]);
        match color {
            Color::White => from > to,
            Color::Black => from < to,
        }
    }

    /// Neighbor slice for validated ids.
    pub(crate) fn adj(&self, v: VertexId) -> &[VertexId] {
        &self.adjacency[v.index()]
    }

    fn check(&self, v: VertexId) -> Result<(), RuleError> {
        if v.on_board() {
            Ok(())
        } else {
            Err(RuleError::UnknownVertex(v))
        }
    }
}
