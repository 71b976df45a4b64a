//! Win and draw evaluation over occupancy bitmasks.

use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines as occupancy masks.
///
/// Bit `row * 3 + col` of a mask corresponds to the cell at
/// `(row, col)`, matching [`Board::mask`]. A mark wins when one of
/// these masks is fully set in its occupancy mask.
const WIN_MASKS: [u16; 8] = [
    0b000_000_111, // top row
    0b000_111_000, // middle row
    0b111_000_000, // bottom row
    0b001_001_001, // left column
    0b010_010_010, // middle column
    0b100_100_100, // right column
    0b100_010_001, // top-left to bottom-right diagonal
    0b001_010_100, // top-right to bottom-left diagonal
];

/// Evaluation of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Moves remain and no line is complete.
    InProgress,
    /// The mark holds a complete line.
    Won(Mark),
    /// All nine cells taken, no line complete.
    Draw,
}

impl Status {
    /// Converts a terminal status into an outcome.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Status::InProgress => None,
            Status::Won(mark) => Some(Outcome::Winner(mark)),
            Status::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The mark completed a line.
    Winner(Mark),
    /// The board filled with no complete line.
    Draw,
}

impl Outcome {
    /// Returns the winning mark, if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "Player {mark} wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Checks whether either mark holds a complete line.
#[instrument]
pub fn winner(board: &Board) -> Option<Mark> {
    for mark in [Mark::X, Mark::O] {
        let occupied = board.mask(mark);
        if WIN_MASKS.iter().any(|&line| occupied & line == line) {
            return Some(mark);
        }
    }
    None
}

/// Evaluates the board: win, draw, or still in progress.
#[instrument]
pub fn evaluate(board: &Board) -> Status {
    if let Some(mark) = winner(board) {
        Status::Won(mark)
    } else if board.is_full() {
        Status::Draw
    } else {
        Status::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::position::Position;
    use super::*;
    use strum::IntoEnumIterator;

    fn board_with(marked: &[Position], mark: Mark) -> Board {
        let mut board = Board::new();
        for &pos in marked {
            board.place(pos, mark).unwrap();
        }
        board
    }

    #[test]
    fn masks_cover_three_distinct_cells_each() {
        for mask in WIN_MASKS {
            assert_eq!(mask.count_ones(), 3);
            assert_eq!(mask & !0b111_111_111, 0);
        }
        let mut sorted = WIN_MASKS;
        sorted.sort_unstable();
        sorted.windows(2).for_each(|w| assert_ne!(w[0], w[1]));
    }

    #[test]
    fn every_line_of_three_wins() {
        let lines: [[Position; 3]; 8] = [
            [Position::TopLeft, Position::TopCenter, Position::TopRight],
            [Position::MiddleLeft, Position::Center, Position::MiddleRight],
            [
                Position::BottomLeft,
                Position::BottomCenter,
                Position::BottomRight,
            ],
            [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
            [
                Position::TopCenter,
                Position::Center,
                Position::BottomCenter,
            ],
            [
                Position::TopRight,
                Position::MiddleRight,
                Position::BottomRight,
            ],
            [Position::TopLeft, Position::Center, Position::BottomRight],
            [Position::TopRight, Position::Center, Position::BottomLeft],
        ];
        for line in lines {
            let board = board_with(&line, Mark::O);
            assert_eq!(winner(&board), Some(Mark::O), "line {line:?}");
        }
    }

    #[test]
    fn empty_board_is_in_progress() {
        assert_eq!(evaluate(&Board::new()), Status::InProgress);
    }

    #[test]
    fn two_in_a_row_is_not_a_win() {
        let board = board_with(&[Position::TopLeft, Position::TopCenter], Mark::X);
        assert_eq!(evaluate(&board), Status::InProgress);
    }

    #[test]
    fn full_board_without_line_is_a_draw() {
        // X O X
        // O O X
        // X X O
        let mut board = Board::new();
        for pos in Position::iter() {
            let mark = match pos.index() {
                0 | 2 | 5 | 6 | 7 => Mark::X,
                _ => Mark::O,
            };
            board.place(pos, mark).unwrap();
        }
        assert_eq!(evaluate(&board), Status::Draw);
    }
}
