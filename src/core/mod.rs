//! Core board types: vertices, topology, pieces, states, moves, errors.
//!
//! This module contains the fundamental building blocks of the rules engine.
//! Everything here is immutable or `Copy`; the only construction-time work is
//! folding the fixed edge list into the adjacency index.

pub mod error;
pub mod moves;
pub mod piece;
pub mod state;
pub mod topology;
pub mod vertex;

pub use error::RuleError;
pub use moves::{Move, MoveList};
pub use piece::{Cob, Color};
pub use state::{GameState, GameStateBuilder};
pub use topology::BoardTopology;
pub use vertex::{VertexId, VERTEX_COUNT};
