//! Move application: relocation, promotion, contact capture.

use crate::core::{BoardTopology, GameState, Move, RuleError};

/// Apply a move and return the successor state. The input state is never
/// mutated.
///
/// Contract:
/// 1. Both endpoints must be on the board (`UnknownVertex`) and the origin
///    must hold a piece (`EmptyOrigin`). Legality beyond that (adjacency,
///    direction, target occupancy) is the caller's job via
///    [`is_valid_move`](crate::rules::is_valid_move); `apply` itself is a
///    mechanical state transition.
/// 2. The piece leaves `from`; entering the opponent's home base sets its
///    `upgraded` flag (monotonic; an already upgraded piece stays upgraded).
/// 3. The piece lands on `to`.
/// 4. Contact capture: every neighbor of `to` holding an opposite-color piece
///    is recolored to the mover's color, then re-checked for promotion
///    against its *new* color's opponent home. A single pass over direct
///    neighbors only; flips never chain.
/// 5. The turn is **not** toggled.
///
/// Total piece count is invariant: relocation and recoloring, never removal.
pub fn apply(topology: &BoardTopology, state: &GameState, mv: Move) -> Result<GameState, RuleError> {
    if !topology.contains(mv.from) {
        return Err(RuleError::UnknownVertex(mv.from));
    }
    if !topology.contains(mv.to) {
        return Err(RuleError::UnknownVertex(mv.to));
    }
    let mut cob = state.get(mv.from).ok_or(RuleError::EmptyOrigin(mv.from))?;

    let mut next = *state;
    next.set(mv.from, None);
    if topology.in_home(cob.color.opponent(), mv.to) {
        cob.upgraded = true;
    }
    next.set(mv.to, Some(cob));

    for &n in topology.adj(mv.to) {
        if let Some(mut other) = next.get(n) {
            if other.color != cob.color {
                other.color = cob.color;
                if topology.in_home(other.color.opponent(), n) {
                    other.upgraded = true;
                }
                next.set(n, Some(other));
            }
        }
    }

    Ok(next)
}

/// [`apply`], then toggle the side to move.
///
/// This is the successor constructor for the search engine and the commit
/// path for UI callers; each of them must advance the turn exactly once, so
/// both go through this wrapper rather than toggling by hand.
pub fn apply_and_advance(
    topology: &BoardTopology,
    state: &GameState,
    mv: Move,
) -> Result<GameState, RuleError> {
    let mut next = apply(topology, state, mv)?;
    next.turn = next.turn.opponent();
    Ok(next)
}
