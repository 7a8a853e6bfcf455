use crate::chess::{Color, File, Piece, Rank, Role, Square};

/// The squares reachable from some origin along one direction, nearest first.
pub type Ray = Vec<Square>;

/// How a kind of piece slides across the board.
struct Style {
    dirs: &'static [(i8, i8)],
    reach: usize,
}

const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

const AROUND: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const JUMPS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Style {
    fn movement(color: Color, role: Role) -> Self {
        match role {
            Role::Pawn => Style {
                dirs: match color {
                    Color::White => &[(0, 1)],
                    Color::Black => &[(0, -1)],
                },
                reach: 2,
            },

            Role::Knight => Style {
                dirs: &JUMPS,
                reach: 1,
            },

            Role::Bishop => Style {
                dirs: &DIAGONAL,
                reach: 7,
            },

            Role::Rook => Style {
                dirs: &ORTHOGONAL,
                reach: 7,
            },

            Role::Queen => Style {
                dirs: &AROUND,
                reach: 7,
            },

            Role::King => Style {
                dirs: &AROUND,
                reach: 1,
            },
        }
    }

    fn capture(color: Color) -> Self {
        Style {
            dirs: match color {
                Color::White => &[(-1, 1), (1, 1)],
                Color::Black => &[(-1, -1), (1, -1)],
            },
            reach: 1,
        }
    }
}

fn walk(style: &Style, whence: Square) -> Vec<Ray> {
    style
        .dirs
        .iter()
        .filter_map(|&(df, dr)| {
            let mut ray = Ray::new();
            let mut sq = whence;

            for _ in 0..style.reach {
                match sq.offset(df, dr) {
                    Some(next) => {
                        ray.push(next);
                        sq = next;
                    }

                    None => break,
                }
            }

            (!ray.is_empty()).then_some(ray)
        })
        .collect()
}

fn square(i: usize) -> Square {
    Square::new(File::ALL[i % 8], Rank::ALL[i / 8])
}

/// Precomputed rays for every piece on every square of an empty board.
///
/// Occupancy is not considered here; the legality checker truncates rays
/// against the position it inspects.
#[derive(Debug)]
pub struct RayTable {
    moves: [[[Vec<Ray>; 64]; 6]; 2],
    captures: [[Vec<Ray>; 64]; 2],
}

impl RayTable {
    pub fn new() -> Self {
        RayTable {
            moves: [Color::White, Color::Black].map(|color| {
                Role::ALL.map(|role| {
                    std::array::from_fn(|i| walk(&Style::movement(color, role), square(i)))
                })
            }),
            captures: [Color::White, Color::Black]
                .map(|color| std::array::from_fn(|i| walk(&Style::capture(color), square(i)))),
        }
    }

    /// The rays a piece may relocate along from `whence`.
    #[inline]
    pub fn moves(&self, piece: Piece, whence: Square) -> &[Ray] {
        &self.moves[piece.color as usize][piece.role as usize][whence.index()]
    }

    /// The rays a side's pawn captures along from `whence`.
    #[inline]
    pub fn captures(&self, side: Color, whence: Square) -> &[Ray] {
        &self.captures[side as usize][whence.index()]
    }

    /// The rays a piece attacks along, which for pawns differ from how they
    /// relocate.
    #[inline]
    pub fn attacks(&self, piece: Piece, whence: Square) -> &[Ray] {
        match piece.role {
            Role::Pawn => self.captures(piece.color, whence),
            _ => self.moves(piece, whence),
        }
    }
}

impl Default for RayTable {
    fn default() -> Self {
        RayTable::new()
    }
}
