//! Structural zobrist hashing of game states.
//!
//! Every (vertex, color, upgraded) combination and the side to move get an
//! independent random key; a state's hash is the XOR of the keys of its
//! occupied slots plus the turn key. XOR is order-independent, and
//! `GameState` iterates in canonical index order anyway, so identical logical
//! states hash identically no matter how they were built, which is the equality
//! guarantee the transposition cache depends on.
//!
//! Keys are generated from a seeded ChaCha8 stream and owned by the engine
//! instance; there is no global key table.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::core::{Color, GameState, VERTEX_COUNT};

/// Zobrist key table: `[vertex][color][upgraded]` plus a side-to-move key.
#[derive(Clone, Debug)]
pub struct ZobristKeys {
    piece: [[[u64; 2]; 2]; VERTEX_COUNT],
    side: u64,
}

impl ZobristKeys {
    /// Generate the key table from a seed. The same seed always produces the
    /// same table.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut piece = [[[0u64; 2]; 2]; VERTEX_COUNT];
        for slot in piece.iter_mut() {
            for color in slot.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }
        Self {
            piece,
            side: rng.gen(),
        }
    }

    /// Canonical hash of a state: order-independent over occupied vertices,
    /// plus the side to move.
    #[must_use]
    pub fn hash(&self, state: &GameState) -> u64 {
        let mut h = 0u64;
        for (v, cob) in state.pieces() {
            h ^= self.piece[v.index()][cob.color.index()][usize::from(cob.upgraded)];
        }
        if state.turn == Color::Black {
            h ^= self.side;
        }
        h
    }
}
