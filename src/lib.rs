//! Terminal tic-tac-toe with human and robot players.
//!
//! The game core is a self-contained rules engine: a board with
//! bitmask win detection, players as tagged variants (human or robot),
//! and a turn sequencer that owns all game-state mutation. The
//! terminal UI is a thin driver that forwards input events to the
//! sequencer and renders its state.
//!
//! # Example
//!
//! ```
//! use noughts::{Mark, Outcome, Phase, PlayerKind, Session};
//!
//! let mut session = Session::new([PlayerKind::Human, PlayerKind::Human]);
//! session.start();
//! session.submit_move(0, 0)?; // X
//! session.submit_move(1, 1)?; // O
//! session.submit_move(0, 1)?; // X
//! session.submit_move(2, 2)?; // O
//! session.submit_move(0, 2)?; // X completes the top row
//! assert_eq!(
//!     session.phase(),
//!     Phase::Over { outcome: Outcome::Winner(Mark::X) }
//! );
//! # Ok::<(), noughts::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod tui;

pub use game::{
    Board, Cell, Choice, Mark, Move, MoveError, Outcome, Phase, Player, PlayerKind, Position,
    Seat, Session, SetupError, Status, Turn, evaluate, winner,
};
pub use tui::run_tui;
