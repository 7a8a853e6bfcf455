use derive_more::{Display, Error};
use std::{ops::Sub, str::FromStr};

/// A column on the chess board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum File {
    #[display(fmt = "a")]
    A,
    #[display(fmt = "b")]
    B,
    #[display(fmt = "c")]
    C,
    #[display(fmt = "d")]
    D,
    #[display(fmt = "e")]
    E,
    #[display(fmt = "f")]
    F,
    #[display(fmt = "g")]
    G,
    #[display(fmt = "h")]
    H,
}

impl File {
    pub const ALL: [Self; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// Returns an iterator over [`File`]s, from a to h.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        Self::ALL.into_iter()
    }

    /// This file's column index, from 0 for a to 7 for h.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The [`File`] at a column index, if it is on the board.
    #[inline]
    pub fn from_index(i: i8) -> Option<Self> {
        usize::try_from(i).ok().and_then(|i| Self::ALL.get(i).copied())
    }
}

impl Sub for File {
    type Output = i8;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self as i8 - rhs as i8
    }
}

/// The reason why parsing [`File`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error)]
#[display(fmt = "failed to parse file, expected letter in the range `a..=h`")]
pub struct ParseFileError;

impl FromStr for File {
    type Err = ParseFileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "a" | "A" => Ok(File::A),
            "b" | "B" => Ok(File::B),
            "c" | "C" => Ok(File::C),
            "d" | "D" => Ok(File::D),
            "e" | "E" => Ok(File::E),
            "f" | "F" => Ok(File::F),
            "g" | "G" => Ok(File::G),
            "h" | "H" => Ok(File::H),
            _ => Err(ParseFileError),
        }
    }
}
