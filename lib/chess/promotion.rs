use crate::chess::Role;
use derive_more::Display;

/// A promotion specifier.
///
/// [`Promotion::None`] doubles as "no answer" when a selection strategy
/// declines to choose; the checker then falls back to the queen.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub enum Promotion {
    #[display(fmt = "")]
    None,
    #[display(fmt = "n")]
    Knight,
    #[display(fmt = "b")]
    Bishop,
    #[display(fmt = "r")]
    Rook,
    #[display(fmt = "q")]
    Queen,
}

impl From<Promotion> for Option<Role> {
    #[inline]
    fn from(p: Promotion) -> Self {
        match p {
            Promotion::None => None,
            Promotion::Knight => Some(Role::Knight),
            Promotion::Bishop => Some(Role::Bishop),
            Promotion::Rook => Some(Role::Rook),
            Promotion::Queen => Some(Role::Queen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn only_the_empty_promotion_has_no_role(p: Promotion) {
        assert_eq!(Option::<Role>::from(p).is_none(), p == Promotion::None);
    }

    #[test]
    fn promotion_never_yields_pawn_or_king() {
        for p in [
            Promotion::Knight,
            Promotion::Bishop,
            Promotion::Rook,
            Promotion::Queen,
        ] {
            let r = Option::<Role>::from(p);
            assert_ne!(r, Some(Role::Pawn));
            assert_ne!(r, Some(Role::King));
        }
    }
}
