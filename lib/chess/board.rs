use crate::chess::{Color, File, Piece, Rank, Role, Square};
use arrayvec::ArrayString;
use std::fmt::{self, Write as _};
use std::ops::Index;

/// The contents of one square of the board.
pub type Tile = Option<Piece>;

/// An 8x8 chess board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Board {
    tiles: [[Tile; 8]; 8],
}

impl Board {
    /// An empty [`Board`].
    #[inline]
    pub fn empty() -> Self {
        Board {
            tiles: [[None; 8]; 8],
        }
    }

    /// Places a piece on a vacant square.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self[sq].is_none());
        self.tiles[sq.rank.index()][sq.file.index()] = Some(piece);
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn take(&mut self, sq: Square) -> Tile {
        self.tiles[sq.rank.index()][sq.file.index()].take()
    }

    /// Finds the square occupied by a side's king.
    #[inline]
    pub fn king(&self, side: Color) -> Option<Square> {
        Square::iter().find(|&sq| {
            matches!(self[sq], Some(p) if p.color == side && p.role == Role::King)
        })
    }

    /// Returns an iterator over the pieces on the board and their squares.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::iter().filter_map(move |sq| self[sq].map(|p| (sq, p)))
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Board::empty();

        let back = [
            Role::Rook,
            Role::Knight,
            Role::Bishop,
            Role::Queen,
            Role::King,
            Role::Bishop,
            Role::Knight,
            Role::Rook,
        ];

        for (file, role) in File::ALL.into_iter().zip(back) {
            board.put(Square::new(file, Rank::First), Piece::new(Color::White, role));
            board.put(Square::new(file, Rank::Second), Piece::new(Color::White, Role::Pawn));
            board.put(Square::new(file, Rank::Seventh), Piece::new(Color::Black, Role::Pawn));
            board.put(Square::new(file, Rank::Eighth), Piece::new(Color::Black, role));
        }

        board
    }
}

impl Index<Square> for Board {
    type Output = Tile;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.tiles[sq.rank.index()][sq.file.index()]
    }
}

/// Prints the board as the piece placement field of a FEN record.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::iter().rev() {
            let mut row = ArrayString::<8>::new();
            let mut skip = 0;

            for file in File::iter() {
                match self[Square::new(file, rank)] {
                    None => skip += 1,
                    Some(p) => {
                        if skip > 0 {
                            row.push(char::from_digit(skip, 10).unwrap_or('8'));
                            skip = 0;
                        }

                        write!(row, "{}", p)?;
                    }
                }
            }

            if skip > 0 {
                row.push(char::from_digit(skip, 10).unwrap_or('8'));
            }

            f.write_str(&row)?;

            if rank != Rank::First {
                f.write_str("/")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_board_prints_the_standard_setup() {
        assert_eq!(
            Board::default().to_string(),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn empty_board_prints_empty_ranks() {
        assert_eq!(Board::empty().to_string(), "8/8/8/8/8/8/8/8");
    }

    #[test]
    fn put_and_take_relocate_pieces() {
        let mut board = Board::empty();
        let sq = Square::new(File::D, Rank::Fourth);
        let piece = Piece::new(Color::White, Role::Queen);

        board.put(sq, piece);
        assert_eq!(board[sq], Some(piece));
        assert_eq!(board.take(sq), Some(piece));
        assert_eq!(board[sq], None);
        assert_eq!(board.take(sq), None);
    }

    #[test]
    fn king_finds_the_side_to_search_for() {
        let board = Board::default();

        assert_eq!(
            board.king(Color::White),
            Some(Square::new(File::E, Rank::First))
        );

        assert_eq!(
            board.king(Color::Black),
            Some(Square::new(File::E, Rank::Eighth))
        );

        assert_eq!(Board::empty().king(Color::White), None);
    }

    #[test]
    fn iter_visits_every_piece() {
        assert_eq!(Board::default().iter().count(), 32);
        assert_eq!(Board::empty().iter().count(), 0);
    }
}
