use crate::chess::{File, ParseFileError, ParseRankError, Rank};
use derive_more::{Display, Error, From};
use std::str::FromStr;

/// A square of the board.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
#[display(fmt = "{}{}", file, rank)]
pub struct Square {
    pub file: File,
    pub rank: Rank,
}

impl Square {
    /// Constructs [`Square`] from a pair of [`File`] and [`Rank`].
    #[inline]
    pub fn new(file: File, rank: Rank) -> Self {
        Square { file, rank }
    }

    /// This square's index in the range `0..64`, in rank-major order.
    #[inline]
    pub fn index(&self) -> usize {
        self.rank.index() * 8 + self.file.index()
    }

    /// The square displaced by `df` columns and `dr` rows, if on the board.
    #[inline]
    pub fn offset(&self, df: i8, dr: i8) -> Option<Self> {
        Some(Square {
            file: File::from_index(self.file as i8 + df)?,
            rank: Rank::from_index(self.rank as i8 + dr)?,
        })
    }

    /// Returns an iterator over all [`Square`]s, in rank-major order.
    #[inline]
    pub fn iter() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..64usize).map(|i| Square {
            file: File::ALL[i % 8],
            rank: Rank::ALL[i / 8],
        })
    }
}

/// The reason why parsing [`Square`] failed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash, Error, From)]
pub enum ParseSquareError {
    #[display(fmt = "failed to parse square; {}", _0)]
    InvalidFile(ParseFileError),
    #[display(fmt = "failed to parse square; {}", _0)]
    InvalidRank(ParseRankError),
}

impl FromStr for Square {
    type Err = ParseSquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let i = s.char_indices().nth(1).map_or_else(|| s.len(), |(i, _)| i);

        Ok(Square {
            file: s[..i].parse()?,
            rank: s[i..].parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn iter_enumerates_squares_by_index(sq: Square) {
        assert_eq!(Square::iter().nth(sq.index()), Some(sq));
    }

    #[proptest]
    fn offset_by_zero_is_an_identity(sq: Square) {
        assert_eq!(sq.offset(0, 0), Some(sq));
    }

    #[test]
    fn offset_stops_at_the_board_edge() {
        let a1 = Square::new(File::A, Rank::First);
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(0, -1), None);
        assert_eq!(a1.offset(1, 1), Some(Square::new(File::B, Rank::Second)));
    }

    #[proptest]
    fn parsing_printed_square_is_an_identity(sq: Square) {
        assert_eq!(sq.to_string().parse(), Ok(sq));
    }

    #[test]
    fn parsing_square_ignores_case() {
        assert_eq!("E2".parse(), Ok(Square::new(File::E, Rank::Second)));
        assert_eq!("e2".parse(), Ok(Square::new(File::E, Rank::Second)));
    }

    #[proptest]
    fn parsing_square_fails_if_file_invalid(
        #[filter(!('a'..='h').contains(&#c.to_ascii_lowercase()))] c: char,
        r: Rank,
    ) {
        assert_eq!(
            [c.to_string(), r.to_string()].concat().parse::<Square>(),
            Err(ParseFileError.into())
        );
    }

    #[proptest]
    fn parsing_square_fails_if_rank_invalid(f: File, #[filter(!('1'..='8').contains(&#c))] c: char) {
        assert_eq!(
            [f.to_string(), c.to_string()].concat().parse::<Square>(),
            Err(ParseRankError.into())
        );
    }

    #[proptest]
    fn parsing_square_fails_if_length_not_two(#[filter(#s.chars().count() != 2)] s: String) {
        assert_eq!(s.parse::<Square>().ok(), None);
    }
}
