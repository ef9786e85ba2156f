//! Game state: piece placement plus side to move.
//!
//! `GameState` is a `Copy` snapshot: a 22-slot array with at most one piece
//! per vertex, and the color whose turn it is. Every rules operation returns
//! a fresh state; nothing mutates a state observably after construction. The
//! array representation also gives a canonical, iteration-order-independent
//! encoding, which the zobrist hasher relies on.

use serde::{Deserialize, Serialize};

use super::error::RuleError;
use super::piece::{Cob, Color};
use super::vertex::{VertexId, VERTEX_COUNT};

/// Immutable snapshot of piece placement and side to move.
///
/// ```
/// use cobweb::{Color, GameState};
///
/// let state = GameState::initial();
/// assert_eq!(state.count(Color::White), 4);
/// assert_eq!(state.count(Color::Black), 4);
/// assert_eq!(state.turn, Color::White);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pieces: [Option<Cob>; VERTEX_COUNT],
    /// Side to move. Toggled only by explicit callers, never by `apply`.
    pub turn: Color,
}

impl GameState {
    /// The fixed starting position: 4 base Cobs per color on the field row
    /// adjacent to that color's own home base, White to move.
    #[must_use]
    pub fn initial() -> Self {
        let mut pieces = [None; VERTEX_COUNT];
        for color in [Color::White, Color::Black] {
            for &v in crate::core::topology::starting_row(color) {
                pieces[v.index()] = Some(Cob::new(color));
            }
        }
        Self {
            pieces,
            turn: Color::White,
        }
    }

    /// An empty board with the given side to move.
    #[must_use]
    pub fn empty(turn: Color) -> Self {
        Self {
            pieces: [None; VERTEX_COUNT],
            turn,
        }
    }

    /// Start building a custom state (test and editor scenarios).
    #[must_use]
    pub fn builder(turn: Color) -> GameStateBuilder {
        GameStateBuilder {
            state: Self::empty(turn),
        }
    }

    /// Piece on a vertex, if any. Off-board ids hold no piece.
    #[must_use]
    pub fn get(&self, v: VertexId) -> Option<Cob> {
        self.pieces.get(v.index()).copied().flatten()
    }

    /// Iterate over every occupied vertex in canonical (index) order.
    pub fn pieces(&self) -> impl Iterator<Item = (VertexId, Cob)> + '_ {
        self.pieces
            .iter()
            .enumerate()
            .filter_map(|(i, cob)| cob.map(|c| (VertexId::new(i as u8), c)))
    }

    /// Total number of pieces on the board.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.pieces.iter().flatten().count()
    }

    /// Number of pieces of one color.
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.pieces
            .iter()
            .flatten()
            .filter(|cob| cob.color == color)
            .count()
    }

    /// Place or clear a slot. Callers guarantee `v` is on the board.
    pub(crate) fn set(&mut self, v: VertexId, cob: Option<Cob>) {
        self.pieces[v.index()] = cob;
    }
}

/// Builder for arbitrary placements, validating vertex ids and occupancy so
/// the one-piece-per-vertex invariant holds by construction.
///
/// ```
/// use cobweb::{Cob, Color, GameState, VertexId};
///
/// let state = GameState::builder(Color::Black)
///     .place(VertexId::new(5), Cob::new(Color::Black))?
///     .place(VertexId::new(16), Cob::upgraded(Color::White))?
///     .build();
/// assert_eq!(state.piece_count(), 2);
/// # Ok::<(), cobweb::RuleError>(())
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    state: GameState,
}

impl GameStateBuilder {
    /// Place a Cob on an empty vertex.
    pub fn place(mut self, v: VertexId, cob: Cob) -> Result<Self, RuleError> {
        if !v.on_board() {
            return Err(RuleError::UnknownVertex(v));
        }
        if self.state.get(v).is_some() {
            return Err(RuleError::Occupied(v));
        }
        self.state.set(v, Some(cob));
        Ok(self)
    }

    /// Override the side to move.
    #[must_use]
    pub fn turn(mut self, color: Color) -> Self {
        self.state.turn = color;
        self
    }

    #[must_use]
    pub fn build(self) -> GameState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_placement() {
        let state = GameState::initial();
        assert_eq!(state.piece_count(), 8);
        assert_eq!(state.count(Color::White), 4);
        assert_eq!(state.count(Color::Black), 4);
        assert_eq!(state.turn, Color::White);
        // No piece starts upgraded or inside a home base.
        for (_, cob) in state.pieces() {
            assert!(!cob.upgraded);
        }
    }

    #[test]
    fn test_builder_places_and_sets_turn() {
        let state = GameState::builder(Color::White)
            .place(VertexId::new(9), Cob::new(Color::Black))
            .unwrap()
            .turn(Color::Black)
            .build();
        assert_eq!(state.turn, Color::Black);
        assert_eq!(state.get(VertexId::new(9)), Some(Cob::new(Color::Black)));
    }

    #[test]
    fn test_builder_rejects_unknown_vertex() {
        let err = GameState::builder(Color::White)
            .place(VertexId::new(22), Cob::new(Color::White))
            .unwrap_err();
        assert_eq!(err, RuleError::UnknownVertex(VertexId::new(22)));
    }

    #[test]
    fn test_builder_rejects_double_placement() {
        let err = GameState::builder(Color::White)
            .place(VertexId::new(3), Cob::new(Color::White))
            .unwrap()
            .place(VertexId::new(3), Cob::new(Color::Black))
            .unwrap_err();
        assert_eq!(err, RuleError::Occupied(VertexId::new(3)));
    }

    #[test]
    fn test_pieces_iterates_in_index_order() {
        let state = GameState::builder(Color::White)
            .place(VertexId::new(17), Cob::new(Color::White))
            .unwrap()
            .place(VertexId::new(2), Cob::new(Color::Black))
            .unwrap()
            .build();
        let order: Vec<_> = state.pieces().map(|(v, _)| v.index()).collect();
        assert_eq!(order, vec![2, 17]);
    }

    #[test]
    fn test_off_board_get_is_empty() {
        let state = GameState::initial();
        assert_eq!(state.get(VertexId::new(200)), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let state = GameState::initial();
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
