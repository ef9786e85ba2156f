//! Piece colors and the Cob piece type.
//!
//! A *Cob* is a game piece: a color plus a one-way `upgraded` promotion flag.
//! Upgraded Cobs move in any direction; base Cobs only move forward. The flag
//! is set when a Cob enters the opponent's home base and is never cleared.

use serde::{Deserialize, Serialize};

/// Piece color. White plays up the board (decreasing rank), Black down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Index for per-color tables (White = 0, Black = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Evaluation sign: positive scores favor Black.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Color::White => -1.0,
            Color::Black => 1.0,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A game piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cob {
    pub color: Color,
    /// One-way promotion flag: set on entering the opponent's home base,
    /// never cleared by game rules.
    pub upgraded: bool,
}

impl Cob {
    /// Create a base (non-upgraded) Cob.
    #[must_use]
    pub const fn new(color: Color) -> Self {
        Self {
            color,
            upgraded: false,
        }
    }

    /// Create an upgraded Cob.
    #[must_use]
    pub const fn upgraded(color: Color) -> Self {
        Self {
            color,
            upgraded: true,
        }
    }
}
