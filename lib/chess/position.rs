use crate::chess::{Board, Color, MoveContext, MoveKind, Piece, Rank, Role, Square, Tile};
use std::fmt;
use std::ops::Index;

/// The state of a game of chess at some point in time.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Position {
    pub board: Board,
    pub turn: Color,
    /// The square a pawn skipped over on the previous move, if it advanced two
    /// squares. The only square an en passant capture may land on.
    pub en_passant: Option<Square>,
    pub captured: Vec<Piece>,
}

impl Position {
    /// Executes a move that has already been vetted.
    ///
    /// Expects `mc` to describe a move that is legal in this position, the
    /// behavior is otherwise unspecified.
    pub fn apply(&mut self, mc: &MoveContext) {
        let whence = mc.whence();
        let whither = mc.whither();

        debug_assert!(self[whence].is_some());
        let mut piece = match self.board.take(whence) {
            Some(p) => p,
            None => return,
        };

        match mc.kind() {
            MoveKind::Capture => {
                if let Some(victim) = self.board.take(whither) {
                    self.captured.push(victim);
                }
            }

            MoveKind::EnPassant => {
                let skipped = Square::new(whither.file, whence.rank);
                if let Some(victim) = self.board.take(skipped) {
                    self.captured.push(victim);
                }
            }

            MoveKind::Movement | MoveKind::Castle => {}
        }

        self.en_passant = match (piece.role, whither.rank - whence.rank) {
            (Role::Pawn, 2 | -2) => {
                let skipped = (whence.rank.index() + whither.rank.index()) / 2;
                Rank::from_index(skipped as i8).map(|r| Square::new(whence.file, r))
            }

            _ => None,
        };

        piece.moved = true;

        if let Some(role) = Option::<Role>::from(mc.promotion()) {
            piece.role = role;
        }

        self.board.put(whither, piece);
        self.turn = !self.turn;
    }
}

impl Default for Position {
    fn default() -> Self {
        Position {
            board: Board::default(),
            turn: Color::White,
            en_passant: None,
            captured: Vec::new(),
        }
    }
}

impl Index<Square> for Position {
    type Output = Tile;

    #[inline]
    fn index(&self, sq: Square) -> &Self::Output {
        &self.board[sq]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.board, self.turn)
    }
}
