//! The turn sequencer: who moves next, and when the game ends.

use super::action::{Move, MoveError, SetupError};
use super::players::{Choice, Player, PlayerKind};
use super::position::Position;
use super::rules::{self, Outcome};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A seat at the table. `P1` plays X and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// First seat, playing X.
    P1,
    /// Second seat, playing O.
    P2,
}

impl Seat {
    /// The opposing seat.
    pub fn other(self) -> Self {
        match self {
            Seat::P1 => Seat::P2,
            Seat::P2 => Seat::P1,
        }
    }

    /// Index of this seat in the player pair.
    pub fn index(self) -> usize {
        match self {
            Seat::P1 => 0,
            Seat::P2 => 1,
        }
    }

    /// The mark this seat places.
    pub fn mark(self) -> Mark {
        match self {
            Seat::P1 => Mark::X,
            Seat::P2 => Mark::O,
        }
    }

    /// The seat holding the given mark.
    pub fn holding(mark: Mark) -> Self {
        match mark {
            Mark::X => Seat::P1,
            Mark::O => Seat::P2,
        }
    }
}

/// Phase of the turn sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Players may still be reconfigured; no moves accepted.
    NotStarted,
    /// A move is expected from the active seat.
    AwaitingMove {
        /// The seat expected to move.
        active: Seat,
    },
    /// Terminal; no further moves accepted.
    Over {
        /// How the game ended.
        outcome: Outcome,
    },
}

/// Result of advancing the sequencer one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The active player produced a move and it was applied.
    Played(Move),
    /// The active player waits for external input; nothing changed.
    Suspended,
}

/// Owns the board and the player pair, and sequences turns.
///
/// All game-state mutation funnels through [`Session::advance`] and
/// [`Session::submit_move`]; every entry point re-validates its input
/// rather than trusting the driver to pre-filter.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    players: [Player; 2],
    phase: Phase,
}

impl Session {
    /// Creates a session with the given seat kinds, P1 (X) first.
    pub fn new(kinds: [PlayerKind; 2]) -> Self {
        Self {
            board: Board::new(),
            players: [
                Player::new(Mark::X, kinds[0]),
                Player::new(Mark::O, kinds[1]),
            ],
            phase: Phase::NotStarted,
        }
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Both players, P1 (X) first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The player at the given seat.
    pub fn player(&self, seat: Seat) -> Player {
        self.players[seat.index()]
    }

    /// The seat expected to move, if a game is running.
    pub fn active_seat(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingMove { active } => Some(active),
            _ => None,
        }
    }

    /// The player expected to move, if a game is running.
    pub fn active_player(&self) -> Option<Player> {
        self.active_seat().map(|seat| self.player(seat))
    }

    /// Reconfigures a seat's kind before the game starts.
    ///
    /// # Errors
    ///
    /// Returns [`SetupError::MatchRunning`] once play has begun.
    #[instrument(skip(self))]
    pub fn set_player_kind(&mut self, seat: Seat, kind: PlayerKind) -> Result<(), SetupError> {
        if self.phase != Phase::NotStarted {
            warn!(?seat, "player change rejected while a game is running");
            return Err(SetupError::MatchRunning);
        }
        self.players[seat.index()] = Player::new(seat.mark(), kind);
        Ok(())
    }

    /// Starts the game, handing the first turn to seat P1.
    ///
    /// Ignored unless the sequencer is in `NotStarted`.
    #[instrument(skip(self))]
    pub fn start(&mut self) {
        if self.phase != Phase::NotStarted {
            warn!(phase = ?self.phase, "start ignored");
            return;
        }
        info!(players = ?self.players, "game started");
        self.phase = Phase::AwaitingMove { active: Seat::P1 };
    }

    /// Returns to the pre-game phase from any state, clearing the board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("game reset");
        self.board.reset();
        self.phase = Phase::NotStarted;
    }

    /// Asks the active player for its move and applies it if one is
    /// produced.
    ///
    /// A human seat yields [`Turn::Suspended`]: control returns to the
    /// event source, which later resumes play through
    /// [`Session::submit_move`]. A robot seat plays immediately.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] outside `AwaitingMove`.
    #[instrument(skip(self))]
    pub fn advance(&mut self) -> Result<Turn, MoveError> {
        let Phase::AwaitingMove { active } = self.phase else {
            return Err(MoveError::GameOver);
        };
        match self.player(active).choose_move(&self.board) {
            Choice::Suspend => Ok(Turn::Suspended),
            Choice::Play(position) => self.apply(active, position).map(Turn::Played),
        }
    }

    /// Applies an externally supplied move for a human turn.
    ///
    /// Validates everything regardless of what the driver filtered.
    ///
    /// # Errors
    ///
    /// [`MoveError::InvalidCoordinate`] for coordinates outside
    /// `[0, 3)`, [`MoveError::GameOver`] outside `AwaitingMove`,
    /// [`MoveError::NotHumanTurn`] when the active seat is a robot,
    /// and [`MoveError::CellOccupied`] for a taken cell.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<Move, MoveError> {
        let position =
            Position::from_row_col(row, col).ok_or(MoveError::InvalidCoordinate { row, col })?;
        let Phase::AwaitingMove { active } = self.phase else {
            return Err(MoveError::GameOver);
        };
        if self.player(active).kind() != PlayerKind::Human {
            return Err(MoveError::NotHumanTurn);
        }
        self.apply(active, position)
    }

    /// Places the active seat's mark and advances or terminates.
    fn apply(&mut self, active: Seat, position: Position) -> Result<Move, MoveError> {
        let mark = self.player(active).mark();
        self.board.place(position, mark)?;
        let mov = Move::new(mark, position);
        debug!(%mov, board = %self.board, "move accepted");

        self.phase = match rules::evaluate(&self.board).outcome() {
            None => Phase::AwaitingMove {
                active: active.other(),
            },
            Some(outcome) => {
                info!(%outcome, "game over");
                Phase::Over { outcome }
            }
        };
        Ok(mov)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new([PlayerKind::Human, PlayerKind::Human])
    }
}
