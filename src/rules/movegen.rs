//! Legal-move generation and terminal detection.

use crate::core::{BoardTopology, Color, GameState, Move, MoveList};

/// Enumerate every legal move for the side to move.
///
/// A move is legal when the origin holds a piece of `state.turn`, the target
/// is an empty adjacent vertex, and, for base (non-upgraded) pieces only,
/// the move is forward for that color. Upgraded pieces move in any direction.
///
/// No ordering is applied here; ordering is the search engine's concern.
/// O(occupied vertices × average degree).
#[must_use]
pub fn legal_moves(topology: &BoardTopology, state: &GameState) -> MoveList {
    let mut moves = MoveList::new();
    for (from, cob) in state.pieces() {
        if cob.color != state.turn {
            continue;
        }
        for &to in topology.adj(from) {
            if state.get(to).is_some() {
                continue;
            }
            if !cob.upgraded && !topology.forward_by_rank(cob.color, from, to) {
                continue;
            }
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Check a single move against the same legality conditions as
/// [`legal_moves`]. Off-board endpoints are simply not valid.
#[must_use]
pub fn is_valid_move(topology: &BoardTopology, state: &GameState, mv: Move) -> bool {
    if mv.from == mv.to || !topology.contains(mv.from) || !topology.contains(mv.to) {
        return false;
    }
    let Some(cob) = state.get(mv.from) else {
        return false;
    };
    cob.color == state.turn
        && state.get(mv.to).is_none()
        && topology.adj(mv.from).contains(&mv.to)
        && (cob.upgraded || topology.forward_by_rank(cob.color, mv.from, mv.to))
}

/// Check whether the game is over: either color has zero pieces, or the side
/// to move has no legal reply.
///
/// The no-move check is evaluated for the state's *own* turn, never for a
/// hypothetical opponent; win attribution in [`winner`] depends on whose turn
/// produced the empty move list.
#[must_use]
pub fn is_terminal(topology: &BoardTopology, state: &GameState) -> bool {
    state.count(Color::White) == 0
        || state.count(Color::Black) == 0
        || legal_moves(topology, state).is_empty()
}

/// Attribute the win for a terminal state.
///
/// A color whose opponent has no pieces wins; otherwise the opponent of the
/// stalled side to move wins. Returns `None` for non-terminal states. On an
/// ill-formed fully empty board the zero-piece check for White wins first.
#[must_use]
pub fn winner(topology: &BoardTopology, state: &GameState) -> Option<Color> {
    if state.count(Color::White) == 0 {
        Some(Color::Black)
    } else if state.count(Color::Black) == 0 {
        Some(Color::White)
    } else if legal_moves(topology, state).is_empty() {
        Some(state.turn.opponent())
    } else {
        None
    }
}
