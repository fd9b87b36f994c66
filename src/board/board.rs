//! Board grid with per-cell peg ownership

use tracing::debug;

use super::{PlayerId, Pos};
use crate::error::GameError;

/// Fixed-size game board.
///
/// Cells are stored row-major; `None` marks an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if position lies on the board
    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    #[inline]
    fn index(&self, pos: Pos) -> Option<usize> {
        self.contains(pos)
            .then(|| pos.y as usize * self.width + pos.x as usize)
    }

    /// Occupant at position.
    ///
    /// Off-board positions read as empty; use [`Board::checked_occupant_at`]
    /// when out-of-range input should be reported.
    #[inline]
    pub fn occupant_at(&self, pos: Pos) -> Option<PlayerId> {
        self.index(pos).and_then(|idx| self.cells[idx])
    }

    /// Occupant at position, rejecting off-board coordinates
    pub fn checked_occupant_at(&self, pos: Pos) -> Result<Option<PlayerId>, GameError> {
        match self.index(pos) {
            Some(idx) => Ok(self.cells[idx]),
            None => Err(self.invalid(pos)),
        }
    }

    /// Check if position is an empty on-board cell
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        matches!(self.index(pos), Some(idx) if self.cells[idx].is_none())
    }

    /// Occupy an empty cell.
    ///
    /// An occupied cell is never overwritten.
    pub fn place(&mut self, pos: Pos, player: PlayerId) -> Result<(), GameError> {
        let idx = self.index(pos).ok_or_else(|| self.invalid(pos))?;
        if let Some(occupant) = self.cells[idx] {
            return Err(GameError::AlreadyOccupied { pos, occupant });
        }
        self.cells[idx] = Some(player);
        Ok(())
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        debug!(width = self.width, height = self.height, "clearing board");
        self.cells.iter_mut().for_each(|cell| *cell = None);
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if no cell is left
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Check if no peg has been placed
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Iterate over occupied cells in row-major order
    pub fn iter_occupied(&self) -> impl Iterator<Item = (Pos, PlayerId)> + '_ {
        let width = self.width;
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|player| (Pos::new((idx % width) as i32, (idx / width) as i32), player))
        })
    }

    fn invalid(&self, pos: Pos) -> GameError {
        GameError::InvalidCoordinates {
            pos,
            width: self.width,
            height: self.height,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_WIDTH, super::DEFAULT_HEIGHT)
    }
}
