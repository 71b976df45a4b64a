//! Moves as first-class values, and the rejection taxonomy.

use super::position::Position;
use super::types::Mark;
use serde::{Deserialize, Serialize};

/// A move: a mark placed at a position.
///
/// Moves are plain values, so they can be logged, compared in tests,
/// and reported back to the driver after the sequencer accepts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark being placed.
    pub mark: Mark,
    /// Where it lands.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}

/// Reasons a submitted move is rejected.
///
/// Every rejection leaves the game state untouched; the driver decides
/// whether to surface the message or silently ignore the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The targeted cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// No game is accepting moves (finished, or not yet started).
    #[display("Game is not accepting moves")]
    GameOver,

    /// The coordinates are off the board.
    #[display("Coordinates ({row}, {col}) are off the board")]
    InvalidCoordinate {
        /// Submitted row.
        row: usize,
        /// Submitted column.
        col: usize,
    },

    /// The active player produces its own moves.
    #[display("It's not a human player's turn")]
    NotHumanTurn,
}

impl std::error::Error for MoveError {}

/// Reasons a pre-game configuration change is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Players can only be changed before the game starts.
    #[display("Players cannot change while a game is running")]
    MatchRunning,
}

impl std::error::Error for SetupError {}
