use crate::chess::{Color, Piece, Position, Role, Square};
use crate::rules::{Ray, RayTable};

/// The verdict of a check inspection.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Checkup {
    /// The king is not attacked.
    Safe,
    /// The king is attacked from the listed squares.
    Checked(Vec<Square>),
    /// The side has no king on the board.
    Missing,
}

impl Checkup {
    #[inline]
    pub fn is_check(&self) -> bool {
        matches!(self, Checkup::Checked(_))
    }

    /// The squares the king is attacked from.
    #[inline]
    pub fn attackers(&self) -> &[Square] {
        match self {
            Checkup::Checked(attackers) => attackers,
            _ => &[],
        }
    }
}

/// Scans outward from the king along one family of rays and collects enemy
/// pieces of the threatening roles. The first occupied square ends each ray.
fn seek(
    pos: &Position,
    side: Color,
    rays: &[Ray],
    threats: &[Role],
    attackers: &mut Vec<Square>,
) {
    for ray in rays {
        for &sq in ray {
            if let Some(p) = pos[sq] {
                if p.color != side && threats.contains(&p.role) {
                    attackers.push(sq);
                }

                break;
            }
        }
    }
}

/// Inspects whether a side's king stands in check.
///
/// Every line of attack is scanned, so a double check reports both attackers.
pub fn checkup(pos: &Position, side: Color, rays: &RayTable) -> Checkup {
    let king = match pos.board.king(side) {
        Some(sq) => sq,
        None => return Checkup::Missing,
    };

    let mut attackers = Vec::new();

    let scans: [(Role, &[Role]); 4] = [
        (Role::Bishop, &[Role::Bishop, Role::Queen]),
        (Role::Rook, &[Role::Rook, Role::Queen]),
        (Role::Knight, &[Role::Knight]),
        (Role::King, &[Role::King]),
    ];

    for (scout, threats) in scans {
        let probe = Piece::new(side, scout);
        seek(pos, side, rays.moves(probe, king), threats, &mut attackers);
    }

    // A pawn gives check from exactly the squares the king's own pawn
    // would capture towards.
    seek(
        pos,
        side,
        rays.captures(side, king),
        &[Role::Pawn],
        &mut attackers,
    );

    if attackers.is_empty() {
        Checkup::Safe
    } else {
        Checkup::Checked(attackers)
    }
}
