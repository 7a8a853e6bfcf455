use crate::chess::{ParseSquareError, Promotion, Square};
use derive_more::{Deref, Display, Error, From};
use std::str::FromStr;
use tracing::instrument;

/// A move of a piece between two [`Square`]s.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[cfg_attr(test, filter(#self.0 != #self.1))]
#[display(fmt = "{} {}", _0, _1)]
pub struct Move(pub Square, pub Square);

impl Move {
    /// The square the piece moves from.
    #[inline]
    pub fn whence(&self) -> Square {
        self.0
    }

    /// The square the piece moves to.
    #[inline]
    pub fn whither(&self) -> Square {
        self.1
    }
}

/// The reason why parsing [`Move`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseMoveError {
    #[display(fmt = "failed to parse move, expected two squares separated by whitespace")]
    #[from(ignore)]
    InvalidShape,
    #[display(fmt = "failed to parse move; {}", _0)]
    InvalidSquare(ParseSquareError),
}

impl FromStr for Move {
    type Err = ParseMoveError;

    #[instrument(err)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();

        match (tokens.next(), tokens.next(), tokens.next()) {
            (Some(a), Some(b), None) => Ok(Move(a.parse()?, b.parse()?)),
            _ => Err(ParseMoveError::InvalidShape),
        }
    }
}

/// How a [`Move`] relocates a piece.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum MoveKind {
    #[display(fmt = "movement")]
    Movement,
    #[display(fmt = "capture")]
    Capture,
    #[display(fmt = "castle")]
    Castle,
    #[display(fmt = "en passant")]
    EnPassant,
}

/// A [`Move`] annotated with its [`MoveKind`] and [`Promotion`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Deref)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", _0, _2)]
pub struct MoveContext(#[deref] pub Move, pub MoveKind, pub Promotion);

impl MoveContext {
    /// How this move relocates the piece.
    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.1
    }

    /// The promotion this move carries, if any.
    #[inline]
    pub fn promotion(&self) -> Promotion {
        self.2
    }
}
