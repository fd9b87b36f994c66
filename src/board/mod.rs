//! Board representation for peg gomoku

pub mod board;


// Re-exports
pub use board::Board;

use std::fmt;

/// Default board width
pub const DEFAULT_WIDTH: usize = 15;
/// Default board height
pub const DEFAULT_HEIGHT: usize = 15;

/// Smallest accepted board dimension (one full sequence must fit)
pub const MIN_BOARD_DIM: usize = 5;
/// Largest accepted board dimension
pub const MAX_BOARD_DIM: usize = 64;

/// Zero-based player index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(usize);

impl PlayerId {
    #[inline]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }

    /// Next player in turn order for `player_count` players
    #[inline]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId((self.0 + 1) % player_count)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Grid coordinates. `x` is the column, `y` the row.
///
/// Coordinates are signed so direction scans can step past the edge;
/// the board decides what is on or off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position `steps` cells away along `(dx, dy)`, or `None` if that
    /// falls outside the `i32` coordinate range
    #[inline]
    pub fn offset(self, (dx, dy): (i32, i32), steps: i32) -> Option<Pos> {
        let x = self.x.checked_add(dx.checked_mul(steps)?)?;
        let y = self.y.checked_add(dy.checked_mul(steps)?)?;
        Some(Pos::new(x, y))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering
impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}
