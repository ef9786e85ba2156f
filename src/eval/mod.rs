//! Static and quick heuristic scoring.
//!
//! Sign convention is fixed across the crate: positive scores favor Black,
//! negative favor White. The search maximizer is therefore the Black-favoring
//! side.
//!
//! [`evaluate`] is the full static score with injected weights so difficulty
//! presets can vary scoring aggressiveness without touching the engine;
//! [`quick_evaluate`] is the cheap O(pieces) heuristic the search uses only
//! for move ordering. Both share the sign convention. At terminal states the
//! linear score is overridden by the [`WIN`] sentinel via [`terminal_score`].

use serde::{Deserialize, Serialize};

use crate::core::{Color, GameState};

/// Win sentinel, far outside any reachable linear score. Positive = Black
/// wins, negative = White wins.
pub const WIN: f32 = 100_000.0;

/// Relative counting mass of an upgraded piece (a base piece counts 1).
const UPGRADED_MASS: f32 = 1.5;

/// Tunable evaluation coefficients, injected as configuration rather than
/// hardcoded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Weight of the material balance (upgraded pieces count 1.5).
    pub material: f32,
    /// Weight of the upgraded-piece count balance.
    pub upgrade: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 97.0,
            upgrade: 117.0,
        }
    }
}

impl EvalWeights {
    /// Create a config with a custom material weight.
    #[must_use]
    pub fn with_material(mut self, weight: f32) -> Self {
        self.material = weight;
        self
    }

    /// Create a config with a custom upgrade weight.
    #[must_use]
    pub fn with_upgrade(mut self, weight: f32) -> Self {
        self.upgrade = weight;
        self
    }
}

/// Full static score of a position. Positive favors Black.
///
/// `material × (massBlack − massWhite) + upgrade × (upgradedBlack − upgradedWhite)`
/// where a base piece has mass 1 and an upgraded piece 1.5.
#[must_use]
pub fn evaluate(state: &GameState, weights: &EvalWeights) -> f32 {
    let mut material = 0.0;
    let mut upgrades = 0.0;
    for (_, cob) in state.pieces() {
        let sign = cob.color.sign();
        material += sign * if cob.upgraded { UPGRADED_MASS } else { 1.0 };
        if cob.upgraded {
            upgrades += sign;
        }
    }
    weights.material * material + weights.upgrade * upgrades
}

/// Cheap move-ordering heuristic: ±1 per piece, ±0.5 extra when upgraded.
/// Same sign convention as [`evaluate`]; never used for final scores.
#[must_use]
pub fn quick_evaluate(state: &GameState) -> f32 {
    state
        .pieces()
        .map(|(_, cob)| cob.color.sign() * if cob.upgraded { UPGRADED_MASS } else { 1.0 })
        .sum()
}

/// Score of a terminal state: the [`WIN`] sentinel signed for the winner.
///
/// A color without pieces has lost; with pieces on both sides, the side to
/// move has no legal reply and loses. Callers check
/// [`is_terminal`](crate::rules::is_terminal) first; for non-terminal states
/// this still returns the stalled-side reading but is meaningless.
#[must_use]
pub fn terminal_score(state: &GameState) -> f32 {
    if state.count(Color::White) == 0 {
        WIN
    } else if state.count(Color::Black) == 0 {
        -WIN
    } else if state.turn == Color::White {
        // White to move with no reply: White loses.
        WIN
    } else {
        -WIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cob, VertexId};

    fn v(id: u8) -> VertexId {
        VertexId::new(id)
    }

    #[test]
    fn test_material_sign_convention() {
        // Two base White, one upgraded Black:
        // material = 1.5 - 2.0 = -0.5, upgrades = 1.
        let state = GameState::builder(Color::White)
            .place(v(14), Cob::new(Color::White))
            .unwrap()
            .place(v(15), Cob::new(Color::White))
            .unwrap()
            .place(v(5), Cob::upgraded(Color::Black))
            .unwrap()
            .build();
        let weights = EvalWeights::default();
        let expected = 97.0 * -0.5 + 117.0;
        assert_eq!(evaluate(&state, &weights), expected);
    }

    #[test]
    fn test_weights_are_injected() {
        let state = GameState::builder(Color::White)
            .place(v(5), Cob::new(Color::Black))
            .unwrap()
            .build();
        let weights = EvalWeights::default().with_material(10.0).with_upgrade(0.0);
        assert_eq!(evaluate(&state, &weights), 10.0);
    }

    #[test]
    fn test_quick_evaluate_shares_sign() {
        let state = GameState::builder(Color::White)
            .place(v(14), Cob::new(Color::White))
            .unwrap()
            .place(v(5), Cob::upgraded(Color::Black))
            .unwrap()
            .build();
        assert_eq!(quick_evaluate(&state), 0.5);
        assert!(quick_evaluate(&state) * evaluate(&state, &EvalWeights::default()) >= 0.0);
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let state = GameState::empty(Color::White);
        assert_eq!(evaluate(&state, &EvalWeights::default()), 0.0);
        assert_eq!(quick_evaluate(&state), 0.0);
    }

    #[test]
    fn test_terminal_overrides_linear_score() {
        // Only Black pieces: linear score is positive but finite; terminal
        // score is the full WIN sentinel.
        let state = GameState::builder(Color::White)
            .place(v(5), Cob::new(Color::Black))
            .unwrap()
            .build();
        assert_eq!(terminal_score(&state), WIN);
        assert!(evaluate(&state, &EvalWeights::default()) < WIN);
    }

    #[test]
    fn test_stalled_side_loses() {
        // Both colors have pieces, neither can move (base pieces on their
        // far rows); the side to move takes the loss.
        let stuck = |turn| {
            GameState::builder(turn)
                .place(v(0), Cob::new(Color::White))
                .unwrap()
                .place(v(21), Cob::new(Color::Black))
                .unwrap()
                .build()
        };
        assert_eq!(terminal_score(&stuck(Color::White)), WIN);
        assert_eq!(terminal_score(&stuck(Color::Black)), -WIN);
    }

    #[test]
    fn test_weights_serde_round_trip() {
        let weights = EvalWeights::default().with_material(42.0);
        let json = serde_json::to_string(&weights).unwrap();
        let back: EvalWeights = serde_json::from_str(&json).unwrap();
        assert_eq!(weights, back);
    }
}
