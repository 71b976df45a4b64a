//! Application state, key handling, and the status line.

use super::input;
use crate::game::{Outcome, Phase, PlayerKind, Position, Seat, Session, Turn};
use crossterm::event::KeyCode;
use tracing::{debug, warn};

/// Driver-side application state: the session plus presentation bits.
pub struct App {
    session: Session,
    cursor: Position,
    status_line: String,
}

impl App {
    /// Creates the app with the given seat kinds, P1 (X) first.
    pub fn new(kinds: [PlayerKind; 2]) -> Self {
        Self {
            session: Session::new(kinds),
            cursor: Position::Center,
            status_line: "Game is not started".to_string(),
        }
    }

    /// The game session, for rendering.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The cursor cell for arrow-key input.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// The status line text.
    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    /// True when the sequencer is waiting on a robot seat.
    pub fn robot_to_move(&self) -> bool {
        self.session
            .active_player()
            .is_some_and(|player| player.kind() == PlayerKind::Robot)
    }

    /// True when the sequencer is waiting on a human seat.
    pub fn human_to_move(&self) -> bool {
        self.session
            .active_player()
            .is_some_and(|player| player.kind() == PlayerKind::Human)
    }

    /// Plays one robot turn and refreshes the status line.
    pub fn play_robot_turn(&mut self) {
        match self.session.advance() {
            Ok(Turn::Played(_)) => self.refresh_status(),
            Ok(Turn::Suspended) => {}
            Err(err) => warn!(%err, "robot turn rejected"),
        }
    }

    /// Handles a key press. Returns true when the user asked to quit.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Char('s') => self.start(),
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('x') => self.toggle(Seat::P1),
            KeyCode::Char('o') => self.toggle(Seat::P2),
            KeyCode::Char(c) if c.is_ascii_digit() => self.submit_digit(c),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = input::move_cursor(self.cursor, key);
            }
            KeyCode::Enter => self.submit(self.cursor),
            _ => {}
        }
        false
    }

    fn start(&mut self) {
        self.session.start();
        self.refresh_status();
    }

    fn reset(&mut self) {
        self.session.reset();
        self.refresh_status();
    }

    fn toggle(&mut self, seat: Seat) {
        let kind = self.session.player(seat).kind().toggled();
        if let Err(err) = self.session.set_player_kind(seat, kind) {
            self.status_line = err.to_string();
        }
    }

    fn submit_digit(&mut self, c: char) {
        let Some(digit) = c.to_digit(10) else { return };
        let Some(position) = (digit as usize)
            .checked_sub(1)
            .and_then(Position::from_index)
        else {
            return;
        };
        self.submit(position);
    }

    fn submit(&mut self, position: Position) {
        match self.session.submit_move(position.row(), position.col()) {
            Ok(mov) => {
                debug!(%mov, "move submitted");
                self.refresh_status();
            }
            Err(err) => {
                debug!(%err, "move rejected");
                self.status_line = err.to_string();
            }
        }
    }

    fn refresh_status(&mut self) {
        self.status_line = match self.session.phase() {
            Phase::NotStarted => "Game is not started".to_string(),
            Phase::AwaitingMove { active } => {
                let player = self.session.player(active);
                format!("The turn of {} Player ({})", player.kind(), player.mark())
            }
            Phase::Over { outcome } => match outcome {
                Outcome::Winner(mark) => {
                    let player = self.session.player(Seat::holding(mark));
                    format!("The {} Player ({mark}) wins", player.kind())
                }
                Outcome::Draw => "Draw".to_string(),
            },
        };
    }
}
