use crate::chess::{
    Color, Move, MoveContext, MoveKind, Piece, Position, Promotion, Rank, Role, Square,
};
use crate::rules::{checkup, Checkup, RayTable};
use derive_more::{Display, Error};
use tracing::instrument;

/// Trait for types that choose what a pawn becomes on reaching the far rank.
///
/// Returning [`Promotion::None`] defers the choice, in which case the pawn
/// becomes a queen.
#[cfg_attr(test, mockall::automock)]
pub trait Promote {
    fn select(&self, pawn: Piece, whither: Square) -> Promotion;
}

/// A fixed promotion choice.
impl Promote for Promotion {
    #[inline]
    fn select(&self, _: Piece, _: Square) -> Promotion {
        *self
    }
}

/// The reason why a move was rejected.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum IllegalMove {
    #[display(fmt = "the move must relocate the piece to a different square")]
    NullMove,

    #[display(fmt = "there is no piece on {}", _0)]
    VacantOrigin(#[error(not(source))] Square),

    #[display(fmt = "the piece on {} belongs to the opponent", _0)]
    OpponentsPiece(#[error(not(source))] Square),

    #[display(fmt = "castling is not supported")]
    UnsupportedCastle,

    #[display(fmt = "the piece cannot reach the destination by {}", _0)]
    Unreachable(#[error(not(source))] MoveKind),

    #[display(fmt = "the {} is obstructed by another piece", _0)]
    Obstructed(#[error(not(source))] MoveKind),

    #[display(fmt = "capturing en passant on {} is no longer possible", _0)]
    ExpiredEnPassant(#[error(not(source))] Square),

    #[display(fmt = "the move leaves the king in check")]
    ExposedKing(#[error(not(source))] Vec<Square>),
}

/// The arbiter of the rules of movement and check.
#[derive(Debug)]
pub struct Arbiter<P> {
    rays: RayTable,
    promote: P,
}

impl<P: Promote> Arbiter<P> {
    pub fn new(promote: P) -> Self {
        Arbiter {
            rays: RayTable::new(),
            promote,
        }
    }

    /// The precomputed rays this arbiter judges by.
    #[inline]
    pub fn rays(&self) -> &RayTable {
        &self.rays
    }

    /// Inspects whether a side's king stands in check.
    #[inline]
    pub fn checkup(&self, pos: &Position, side: Color) -> Checkup {
        checkup(pos, side, &self.rays)
    }

    /// Decides whether a move is legal in a position.
    ///
    /// A legal move comes back annotated with how it relocates the piece and
    /// what the pawn promotes to, ready to [`apply`][Position::apply].
    #[instrument(level = "debug", skip(self, pos), err)]
    pub fn judge(&self, pos: &Position, m: Move) -> Result<MoveContext, IllegalMove> {
        if m.whence() == m.whither() {
            return Err(IllegalMove::NullMove);
        }

        let piece = pos[m.whence()].ok_or(IllegalMove::VacantOrigin(m.whence()))?;

        if piece.color != pos.turn {
            return Err(IllegalMove::OpponentsPiece(m.whence()));
        }

        let kind = match pos[m.whither()] {
            Some(p) if p.color == piece.color => return Err(IllegalMove::UnsupportedCastle),
            Some(_) => self.capture(pos, piece, m)?,
            None => self.relocate(pos, piece, m)?,
        };

        let promotion = if piece.role == Role::Pawn
            && matches!(m.whither().rank, Rank::First | Rank::Eighth)
        {
            match self.promote.select(piece, m.whither()) {
                Promotion::None => Promotion::Queen,
                p => p,
            }
        } else {
            Promotion::None
        };

        let mc = MoveContext(m, kind, promotion);

        let mut probe = pos.clone();
        probe.apply(&mc);

        match checkup(&probe, piece.color, &self.rays) {
            Checkup::Checked(by) => Err(IllegalMove::ExposedKing(by)),
            _ => Ok(mc),
        }
    }

    /// Vets a move onto a square held by the opponent.
    fn capture(&self, pos: &Position, piece: Piece, m: Move) -> Result<MoveKind, IllegalMove> {
        let ray = self
            .rays
            .attacks(piece, m.whence())
            .iter()
            .find(|ray| ray.contains(&m.whither()))
            .ok_or(IllegalMove::Unreachable(MoveKind::Capture))?;

        // The destination itself may be occupied, anything short of it not.
        for &sq in ray {
            if sq == m.whither() {
                break;
            }

            if pos[sq].is_some() {
                return Err(IllegalMove::Obstructed(MoveKind::Capture));
            }
        }

        Ok(MoveKind::Capture)
    }

    /// Vets a move onto a vacant square.
    fn relocate(&self, pos: &Position, piece: Piece, m: Move) -> Result<MoveKind, IllegalMove> {
        let movement = self.movement(pos, piece, m);

        if piece.role == Role::Pawn && movement.is_err() {
            let reaches = self
                .rays
                .captures(piece.color, m.whence())
                .iter()
                .any(|ray| ray.contains(&m.whither()));

            if reaches {
                return if pos.en_passant == Some(m.whither()) {
                    Ok(MoveKind::EnPassant)
                } else {
                    Err(IllegalMove::ExpiredEnPassant(m.whither()))
                };
            }
        }

        movement
    }

    fn movement(&self, pos: &Position, piece: Piece, m: Move) -> Result<MoveKind, IllegalMove> {
        let ray = self
            .rays
            .moves(piece, m.whence())
            .iter()
            .find(|ray| ray.contains(&m.whither()))
            .ok_or(IllegalMove::Unreachable(MoveKind::Movement))?;

        // A pawn that has already moved forfeits the two-square advance.
        if piece.role == Role::Pawn && piece.moved && ray.first() != Some(&m.whither()) {
            return Err(IllegalMove::Unreachable(MoveKind::Movement));
        }

        for &sq in ray {
            if pos[sq].is_some() {
                return Err(IllegalMove::Obstructed(MoveKind::Movement));
            }

            if sq == m.whither() {
                break;
            }
        }

        Ok(MoveKind::Movement)
    }
}
