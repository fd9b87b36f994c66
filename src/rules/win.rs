//! Sequence detection for peg gomoku
//!
//! A placement scores when it completes five or more same-owner pegs in a
//! row through the placed cell, along a row, a column or either diagonal.
//! Only the four cells on each side of the placement are examined, so runs
//! longer than nine are never measured in full; they still satisfy the
//! "five or more" condition.

use tracing::instrument;

use crate::board::{Board, PlayerId, Pos};

/// Pegs in a row needed to score
pub const SEQUENCE_LENGTH: usize = 5;

/// Cells examined on each side of the placement
const MAX_REACH: i32 = SEQUENCE_LENGTH as i32 - 1;

/// Line axes through a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along a row, `(1, 0)`
    Horizontal,
    /// Along a column, `(0, 1)`
    Vertical,
    /// `(1, 1)`
    Diagonal,
    /// `(1, -1)`
    AntiDiagonal,
}

impl Direction {
    /// All axes in scan order
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Unit step in the positive sense
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Horizontal => (1, 0),
            Direction::Vertical => (0, 1),
            Direction::Diagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// A completed run of pegs, ordered from the negative end to the positive end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub player: PlayerId,
    pub direction: Direction,
    pub positions: Vec<Pos>,
}

impl Sequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Check if position is part of the run
    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }
}

/// Count consecutive `player` pegs stepping away from `pos` along `delta`.
///
/// Stops at the first empty, foreign or off-board cell, or after
/// `MAX_REACH` steps.
#[inline]
fn count_from(board: &Board, pos: Pos, delta: (i32, i32), player: PlayerId) -> i32 {
    let mut count = 0;
    for step in 1..=MAX_REACH {
        let Some(next) = pos.offset(delta, step) else {
            break;
        };
        if board.occupant_at(next) != Some(player) {
            break;
        }
        count += 1;
    }
    count
}

/// Length of the run through `pos` along one axis, counting `pos` itself
#[inline]
pub fn run_length_through(board: &Board, pos: Pos, player: PlayerId, direction: Direction) -> usize {
    let (dx, dy) = direction.delta();
    let forward = count_from(board, pos, (dx, dy), player);
    let backward = count_from(board, pos, (-dx, -dy), player);
    (1 + forward + backward) as usize
}

/// Check whether a peg at `pos` completes a scoring sequence for `player`.
///
/// The cell at `pos` always counts as one, whatever it holds.
#[instrument(level = "trace", skip(board))]
pub fn has_winning_sequence_through(board: &Board, pos: Pos, player: PlayerId) -> bool {
    Direction::ALL
        .iter()
        .any(|&dir| run_length_through(board, pos, player, dir) >= SEQUENCE_LENGTH)
}

/// Find the first scoring sequence through `pos`, if any.
///
/// Same scan as [`has_winning_sequence_through`]; directions are tried in
/// [`Direction::ALL`] order.
pub fn find_sequence_through(board: &Board, pos: Pos, player: PlayerId) -> Option<Sequence> {
    for direction in Direction::ALL {
        let (dx, dy) = direction.delta();
        let backward = count_from(board, pos, (-dx, -dy), player);
        let forward = count_from(board, pos, (dx, dy), player);

        if (1 + forward + backward) as usize >= SEQUENCE_LENGTH {
            let positions = (-backward..=forward)
                .filter_map(|step| pos.offset((dx, dy), step))
                .collect();
            return Some(Sequence {
                player,
                direction,
                positions,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    fn board_with(cells: &[(i32, i32, PlayerId)]) -> Board {
        let mut board = Board::new(15, 15);
        for &(x, y, player) in cells {
            board.place(Pos::new(x, y), player).unwrap();
        }
        board
    }

    #[test]
    fn test_five_horizontal() {
        let board = board_with(&[(0, 0, P0), (1, 0, P0), (2, 0, P0), (3, 0, P0), (4, 0, P0)]);
        assert!(has_winning_sequence_through(&board, Pos::new(4, 0), P0));
        assert!(has_winning_sequence_through(&board, Pos::new(2, 0), P0));
        assert!(!has_winning_sequence_through(&board, Pos::new(4, 0), P1));
    }

    #[test]
    fn test_five_vertical() {
        let cells: Vec<_> = (3..8).map(|y| (9, y, P1)).collect();
        let board = board_with(&cells);
        assert!(has_winning_sequence_through(&board, Pos::new(9, 5), P1));
    }

    #[test]
    fn test_five_diagonal() {
        let cells: Vec<_> = (0..5).map(|i| (i, i, P0)).collect();
        let board = board_with(&cells);
        assert!(has_winning_sequence_through(&board, Pos::new(0, 0), P0));
    }

    #[test]
    fn test_five_anti_diagonal() {
        // (4, 8) down to (8, 4)
        let cells: Vec<_> = (0..5).map(|i| (4 + i, 8 - i, P1)).collect();
        let board = board_with(&cells);
        assert!(has_winning_sequence_through(&board, Pos::new(6, 6), P1));
    }

    #[test]
    fn test_four_in_row_not_win() {
        let cells: Vec<_> = (0..4).map(|x| (x, 9, P0)).collect();
        let board = board_with(&cells);
        for x in 0..4 {
            assert!(!has_winning_sequence_through(&board, Pos::new(x, 9), P0));
        }
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let cells: Vec<_> = (0..6).map(|x| (x, 9, P0)).collect();
        let board = board_with(&cells);
        assert!(has_winning_sequence_through(&board, Pos::new(5, 9), P0));
    }

    #[test]
    fn test_gap_breaks_sequence() {
        let board = board_with(&[(0, 0, P0), (1, 0, P0), (3, 0, P0), (4, 0, P0), (5, 0, P0)]);
        assert!(!has_winning_sequence_through(&board, Pos::new(4, 0), P0));
    }

    #[test]
    fn test_foreign_peg_breaks_sequence() {
        let board = board_with(&[
            (0, 0, P0),
            (1, 0, P0),
            (2, 0, P1),
            (3, 0, P0),
            (4, 0, P0),
            (5, 0, P0),
        ]);
        assert!(!has_winning_sequence_through(&board, Pos::new(3, 0), P0));
    }

    #[test]
    fn test_placed_cell_counts_as_baseline() {
        // Four pegs with the gap at (2, 0) still empty
        let board = board_with(&[(0, 0, P0), (1, 0, P0), (3, 0, P0), (4, 0, P0)]);
        assert!(has_winning_sequence_through(&board, Pos::new(2, 0), P0));
    }

    #[test]
    fn test_sequence_at_board_edge() {
        let mut board = Board::new(10, 10);
        for y in 5..10 {
            board.place(Pos::new(9, y), P0).unwrap();
        }
        assert!(has_winning_sequence_through(&board, Pos::new(9, 9), P0));
    }

    #[test]
    fn test_anti_diagonal_at_bottom_left_corner() {
        // (0, 9) up to (4, 5); the backward scan leaves the board below row 9
        let mut board = Board::new(10, 10);
        for i in 0..5 {
            board.place(Pos::new(i, 9 - i), P1).unwrap();
        }
        assert!(has_winning_sequence_through(&board, Pos::new(0, 9), P1));
        assert_eq!(
            run_length_through(&board, Pos::new(0, 9), P1, Direction::AntiDiagonal),
            5
        );

        let seq = find_sequence_through(&board, Pos::new(2, 7), P1).unwrap();
        assert_eq!(seq.direction, Direction::AntiDiagonal);
        assert_eq!(seq.positions.first(), Some(&Pos::new(0, 9)));
        assert_eq!(seq.positions.last(), Some(&Pos::new(4, 5)));
    }

    #[test]
    fn test_short_anti_diagonal_at_corner_not_win() {
        let mut board = Board::new(10, 10);
        for i in 1..5 {
            board.place(Pos::new(i, 9 - i), P0).unwrap();
        }
        assert!(!has_winning_sequence_through(&board, Pos::new(1, 8), P0));
        assert_eq!(
            run_length_through(&board, Pos::new(1, 8), P0, Direction::AntiDiagonal),
            4
        );
    }

    #[test]
    fn test_far_off_board_position_is_not_a_sequence() {
        let board = Board::new(15, 15);
        for pos in [
            Pos::new(i32::MAX, 0),
            Pos::new(i32::MIN, i32::MAX),
            Pos::new(0, i32::MIN),
            Pos::new(-100, 500),
        ] {
            assert!(!has_winning_sequence_through(&board, pos, P0));
            assert!(find_sequence_through(&board, pos, P0).is_none());
            for direction in Direction::ALL {
                assert_eq!(run_length_through(&board, pos, P0, direction), 1);
            }
        }
    }

    #[test]
    fn test_reach_is_capped() {
        let cells: Vec<_> = (0..12).map(|x| (x, 0, P0)).collect();
        let board = board_with(&cells);
        assert_eq!(run_length_through(&board, Pos::new(6, 0), P0, Direction::Horizontal), 9);
        assert_eq!(run_length_through(&board, Pos::new(0, 0), P0, Direction::Horizontal), 5);
        assert_eq!(run_length_through(&board, Pos::new(6, 0), P0, Direction::Vertical), 1);
    }

    #[test]
    fn test_empty_board_no_sequence() {
        let board = Board::new(15, 15);
        assert!(!has_winning_sequence_through(&board, Pos::new(7, 7), P0));
        assert!(find_sequence_through(&board, Pos::new(7, 7), P0).is_none());
    }

    #[test]
    fn test_find_sequence_positions_ordered() {
        let cells: Vec<_> = (2..7).map(|i| (i, 8 - i, P1)).collect();
        let board = board_with(&cells);

        let seq = find_sequence_through(&board, Pos::new(4, 4), P1).unwrap();
        assert_eq!(seq.player, P1);
        assert_eq!(seq.direction, Direction::AntiDiagonal);
        assert_eq!(
            seq.positions,
            vec![
                Pos::new(2, 6),
                Pos::new(3, 5),
                Pos::new(4, 4),
                Pos::new(5, 3),
                Pos::new(6, 2),
            ]
        );
        assert!(seq.contains(Pos::new(6, 2)));
        assert!(!seq.contains(Pos::new(7, 1)));
    }

    #[test]
    fn test_find_sequence_prefers_scan_order() {
        // Horizontal and vertical runs cross at (4, 4)
        let mut cells: Vec<_> = (0..5).map(|x| (x, 4, P0)).collect();
        cells.extend((0..4).map(|y| (4, y, P0)));
        let board = board_with(&cells);

        let seq = find_sequence_through(&board, Pos::new(4, 4), P0).unwrap();
        assert_eq!(seq.direction, Direction::Horizontal);
        assert_eq!(seq.len(), 5);
    }
}
