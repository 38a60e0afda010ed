use smallvec::SmallVec;
use std::fmt;

/// Inline move buffer. A knight has at most eight jumps, so only opening
/// placements (any open cell) spill onto the heap.
pub type MoveList = SmallVec<[Move; 8]>;

/// Destination cell of a move, as `(row, col)`.
///
/// Coordinates are signed so that [`Move::NONE`] can be represented as
/// `(-1, -1)`, the "no move" answer of a player without legal moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i32,
    pub col: i32,
}

impl Move {
    /// Sentinel returned when no legal move exists.
    pub const NONE: Move = Move { row: -1, col: -1 };

    pub const fn new(row: i32, col: i32) -> Move {
        Move { row, col }
    }

    pub fn is_none(&self) -> bool {
        *self == Move::NONE
    }
}

impl From<(i32, i32)> for Move {
    fn from((row, col): (i32, i32)) -> Self {
        Move { row, col }
    }
}

impl From<Move> for (i32, i32) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
