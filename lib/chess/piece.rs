use crate::chess::{Color, Role};
use std::fmt;

/// A chess [piece][`Role`] of a certain [`Color`].
///
/// The `moved` flag is set the first time the piece relocates; the rules only
/// consult it to withdraw a pawn's two-square initial advance.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct Piece {
    pub color: Color,
    pub role: Role,
    pub moved: bool,
}

impl Piece {
    /// Constructs a [`Piece`] that has not moved yet.
    #[inline]
    pub fn new(color: Color, role: Role) -> Self {
        Piece {
            color,
            role,
            moved: false,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self.role {
            Role::Pawn => 'p',
            Role::Knight => 'n',
            Role::Bishop => 'b',
            Role::Rook => 'r',
            Role::Queen => 'q',
            Role::King => 'k',
        };

        match self.color {
            Color::White => write!(f, "{}", c.to_ascii_uppercase()),
            Color::Black => write!(f, "{}", c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn new_piece_has_not_moved(c: Color, r: Role) {
        let p = Piece::new(c, r);
        assert_eq!((p.color, p.role, p.moved), (c, r, false));
    }

    #[proptest]
    fn white_pieces_print_in_upper_case(r: Role) {
        let s = Piece::new(Color::White, r).to_string();
        assert_eq!(s, s.to_uppercase());
    }

    #[proptest]
    fn black_pieces_print_in_lower_case(r: Role) {
        let s = Piece::new(Color::Black, r).to_string();
        assert_eq!(s, s.to_lowercase());
    }

    #[test]
    fn pieces_print_as_fen_letters() {
        assert_eq!(Piece::new(Color::White, Role::King).to_string(), "K");
        assert_eq!(Piece::new(Color::Black, Role::Knight).to_string(), "n");
    }
}
