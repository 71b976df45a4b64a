//! Sequencer transitions, rejections, and reset behavior.

use noughts::{
    Cell, Mark, MoveError, Outcome, Phase, PlayerKind, Position, Seat, Session, SetupError, Turn,
};

fn started_human_session() -> Session {
    let mut session = Session::new([PlayerKind::Human, PlayerKind::Human]);
    session.start();
    session
}

/// Drives X to a top-row win: X(0,0) O(1,1) X(0,1) O(2,2) X(0,2).
fn play_to_x_win(session: &mut Session) {
    for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
        session.submit_move(row, col).expect("legal move");
    }
    assert_eq!(
        session.phase(),
        Phase::Over {
            outcome: Outcome::Winner(Mark::X)
        }
    );
}

#[test]
fn start_hands_first_turn_to_x() {
    let mut session = Session::default();
    assert_eq!(session.phase(), Phase::NotStarted);
    session.start();
    assert_eq!(session.active_seat(), Some(Seat::P1));
    assert_eq!(
        session.active_player().map(|p| p.mark()),
        Some(Mark::X)
    );
}

#[test]
fn moves_rejected_before_start() {
    let mut session = Session::default();
    assert_eq!(session.submit_move(0, 0), Err(MoveError::GameOver));
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn turn_alternates_after_each_accepted_move() {
    let mut session = started_human_session();
    let moves = [(0, 0), (0, 1), (1, 1), (1, 0)];
    for (n, (row, col)) in moves.iter().enumerate() {
        assert_eq!(session.active_seat().map(Seat::index), Some(n % 2));
        session.submit_move(*row, *col).expect("legal move");
    }
    assert_eq!(
        session.active_seat().map(Seat::index),
        Some(moves.len() % 2)
    );
}

#[test]
fn occupied_cell_rejection_changes_nothing() {
    let mut session = started_human_session();
    session.submit_move(1, 1).expect("legal move");
    let before = session.board().clone();

    assert_eq!(
        session.submit_move(1, 1),
        Err(MoveError::CellOccupied(Position::Center))
    );
    assert_eq!(session.board(), &before);
    assert_eq!(session.active_seat(), Some(Seat::P2));
}

#[test]
fn out_of_range_coordinates_rejected() {
    let mut session = started_human_session();
    assert_eq!(
        session.submit_move(3, 0),
        Err(MoveError::InvalidCoordinate { row: 3, col: 0 })
    );
    assert_eq!(
        session.submit_move(0, 5),
        Err(MoveError::InvalidCoordinate { row: 0, col: 5 })
    );
    assert_eq!(session.active_seat(), Some(Seat::P1));
}

#[test]
fn moves_rejected_after_game_over() {
    let mut session = started_human_session();
    play_to_x_win(&mut session);
    let before = session.board().clone();

    assert_eq!(session.submit_move(2, 0), Err(MoveError::GameOver));
    assert_eq!(session.board(), &before);
}

#[test]
fn reset_from_mid_game_returns_to_not_started() {
    let mut session = started_human_session();
    session.submit_move(0, 0).expect("legal move");
    session.submit_move(1, 1).expect("legal move");

    session.reset();
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn reset_from_finished_game_returns_to_not_started() {
    let mut session = started_human_session();
    play_to_x_win(&mut session);

    session.reset();
    assert_eq!(session.phase(), Phase::NotStarted);
    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));

    // The cleared session accepts a fresh start.
    session.start();
    assert_eq!(session.active_seat(), Some(Seat::P1));
}

#[test]
fn player_kinds_locked_while_running() {
    let mut session = Session::default();
    session
        .set_player_kind(Seat::P2, PlayerKind::Robot)
        .expect("pre-game change");
    assert_eq!(session.player(Seat::P2).kind(), PlayerKind::Robot);
    assert_eq!(session.player(Seat::P2).mark(), Mark::O);

    session.start();
    assert_eq!(
        session.set_player_kind(Seat::P1, PlayerKind::Robot),
        Err(SetupError::MatchRunning)
    );
    assert_eq!(session.player(Seat::P1).kind(), PlayerKind::Human);
}

#[test]
fn submit_rejected_on_robot_turn() {
    let mut session = Session::new([PlayerKind::Robot, PlayerKind::Human]);
    session.start();

    assert_eq!(session.submit_move(0, 0), Err(MoveError::NotHumanTurn));
    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));
    assert_eq!(session.active_seat(), Some(Seat::P1));
}

#[test]
fn advance_suspends_on_human_turn() {
    let mut session = started_human_session();
    assert_eq!(session.advance(), Ok(Turn::Suspended));
    assert_eq!(session.active_seat(), Some(Seat::P1));
    assert!(session.board().cells().iter().all(|&c| c == Cell::Empty));
}

#[test]
fn advance_rejected_once_over() {
    let mut session = started_human_session();
    play_to_x_win(&mut session);
    assert_eq!(session.advance(), Err(MoveError::GameOver));
}
