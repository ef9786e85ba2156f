//! Property tests over randomly generated positions.

use proptest::prelude::*;

use cobweb::{
    apply, apply_and_advance, evaluate, is_terminal, legal_moves, terminal_score, BoardTopology,
    Cob, Color, EvalWeights, GameState, Search, SearchConfig, VertexId,
};

/// Random position: a handful of pieces on distinct vertices plus a side to
/// move. Built through the builder so every generated state is one the public
/// API can produce.
fn arb_state() -> impl Strategy<Value = GameState> {
    (
        prop::collection::hash_map(0u8..22, (any::<bool>(), any::<bool>()), 2..10),
        any::<bool>(),
    )
        .prop_map(|(placements, black_to_move)| {
            let turn = if black_to_move {
                Color::Black
            } else {
                Color::White
            };
            let mut builder = GameState::builder(turn);
            for (vertex, (black, upgraded)) in placements {
                let color = if black { Color::Black } else { Color::White };
                let cob = if upgraded {
                    Cob::upgraded(color)
                } else {
                    Cob::new(color)
                };
                // Vertices are distinct keys, so placement cannot collide.
                builder = builder.place(VertexId::new(vertex), cob).unwrap();
            }
            builder.build()
        })
}

fn minimax(
    topology: &BoardTopology,
    state: &GameState,
    depth: u32,
    maximizing: bool,
    weights: &EvalWeights,
) -> f32 {
    if is_terminal(topology, state) {
        return terminal_score(state);
    }
    if depth == 0 {
        return evaluate(state, weights);
    }
    let mut best = if maximizing {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    };
    for mv in legal_moves(topology, state) {
        let Ok(successor) = apply_and_advance(topology, state, mv) else {
            continue;
        };
        let score = minimax(topology, &successor, depth - 1, !maximizing, weights);
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }
    best
}

proptest! {
    /// Flips recolor pieces in place; applying any legal move never changes
    /// the number of pieces on the board.
    #[test]
    fn prop_apply_conserves_piece_count(state in arb_state()) {
        let topology = BoardTopology::standard();
        for mv in legal_moves(&topology, &state) {
            let next = apply(&topology, &state, mv).unwrap();
            prop_assert_eq!(next.piece_count(), state.piece_count());
        }
    }

    /// `apply` is pure: the input state is unchanged and repeating the call
    /// yields an identical successor.
    #[test]
    fn prop_apply_is_pure(state in arb_state()) {
        let topology = BoardTopology::standard();
        if let Some(&mv) = legal_moves(&topology, &state).first() {
            let before = state;
            let first = apply(&topology, &state, mv).unwrap();
            let second = apply(&topology, &state, mv).unwrap();
            prop_assert_eq!(state, before);
            prop_assert_eq!(first, second);
        }
    }

    /// Every generated move is edge-adjacent, starts from a piece of the
    /// side to move, lands on an empty vertex and respects direction for
    /// base pieces.
    #[test]
    fn prop_legal_moves_are_well_formed(state in arb_state()) {
        let topology = BoardTopology::standard();
        for mv in legal_moves(&topology, &state) {
            let cob = state.get(mv.from);
            prop_assert!(cob.is_some());
            let cob = cob.unwrap();
            prop_assert_eq!(cob.color, state.turn);
            prop_assert!(state.get(mv.to).is_none());
            prop_assert!(topology.adjacent(mv.from, mv.to).unwrap());
            if !cob.upgraded {
                prop_assert!(topology.is_forward(cob.color, mv.from, mv.to).unwrap());
            }
        }
    }

    /// After a move every piece that entered the opponent's home base is
    /// upgraded, whatever its history.
    #[test]
    fn prop_no_base_piece_rests_in_opponent_home_after_entering(state in arb_state()) {
        let topology = BoardTopology::standard();
        for mv in legal_moves(&topology, &state) {
            let next = apply(&topology, &state, mv).unwrap();
            if let Some(cob) = next.get(mv.to) {
                if topology.in_home(cob.color.opponent(), mv.to) {
                    prop_assert!(cob.upgraded);
                }
            }
        }
    }

    /// With the cache disabled, the alpha-beta root score equals exhaustive
    /// minimax.
    #[test]
    fn prop_alphabeta_equals_minimax(state in arb_state(), maximizing in any::<bool>()) {
        let topology = BoardTopology::standard();
        let weights = EvalWeights::default();
        let mut search = Search::new(SearchConfig::default().with_cache_capacity(0));
        let result = search.best_move(&topology, &state, 2, maximizing);
        let expected = minimax(&topology, &state, 2, maximizing, &weights);
        prop_assert_eq!(result.score, expected);
    }

    /// The evaluation is antisymmetric in color: recoloring every piece and
    /// the turn negates the score.
    #[test]
    fn prop_evaluation_is_antisymmetric(state in arb_state()) {
        let weights = EvalWeights::default();
        let mut mirrored = GameState::builder(state.turn.opponent());
        for (vertex, cob) in state.pieces() {
            let flipped = Cob {
                color: cob.color.opponent(),
                upgraded: cob.upgraded,
            };
            mirrored = mirrored.place(vertex, flipped).unwrap();
        }
        let mirrored = mirrored.build();
        prop_assert_eq!(evaluate(&state, &weights), -evaluate(&mirrored, &weights));
    }
}
