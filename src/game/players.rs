//! Player variants and move selection.

use super::position::Position;
use super::types::{Board, Mark};
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How a seat produces its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerKind {
    /// Moves arrive from outside, one input event at a time.
    Human,
    /// Moves are sampled uniformly from the vacant cells.
    Robot,
}

impl PlayerKind {
    /// The other kind, backing the pre-game toggle.
    pub fn toggled(self) -> Self {
        match self {
            PlayerKind::Human => PlayerKind::Robot,
            PlayerKind::Robot => PlayerKind::Human,
        }
    }
}

impl std::fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "Human"),
            PlayerKind::Robot => write!(f, "Robot"),
        }
    }
}

/// A player: a mark plus the behavior producing its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    mark: Mark,
    kind: PlayerKind,
}

impl Player {
    /// Creates a player.
    pub fn new(mark: Mark, kind: PlayerKind) -> Self {
        Self { mark, kind }
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// How this player produces moves.
    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    /// Produces this player's next move.
    ///
    /// Human players never compute a move; they suspend until the
    /// driver supplies one through the sequencer's submit entry point.
    /// Robot players pick a uniformly random vacant cell, immediately
    /// and without I/O. The sequencer evaluates the board before
    /// asking, so a robot is never asked to move on a full board.
    #[instrument(skip(board))]
    pub fn choose_move(&self, board: &Board) -> Choice {
        match self.kind {
            PlayerKind::Human => Choice::Suspend,
            PlayerKind::Robot => match Position::vacant(board).choose(&mut rand::rng()) {
                Some(&position) => {
                    debug!(mark = %self.mark, %position, "robot chose cell");
                    Choice::Play(position)
                }
                None => Choice::Suspend,
            },
        }
    }
}

/// Result of asking a player for its move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// The player produced a move.
    Play(Position),
    /// The player waits for an external input event.
    Suspend,
}
