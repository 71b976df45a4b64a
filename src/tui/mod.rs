//! Terminal driver: raw-mode lifecycle and the event loop.

mod app;
mod input;
mod ui;

use crate::game::PlayerKind;
use anyhow::Result;
use app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tokio::time::{Duration, sleep};
use tracing::{error, info};

/// Pacing delay before a robot move so the board stays readable.
const ROBOT_DELAY: Duration = Duration::from_millis(400);

/// Keyboard poll timeout per loop iteration.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Runs the terminal UI until the user quits.
pub async fn run_tui(kinds: [PlayerKind; 2]) -> Result<()> {
    info!(?kinds, "starting terminal ui");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, App::new(kinds)).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "event loop error");
    }
    res
}

/// Draws, handles keyboard input, and steps robot turns.
///
/// Human turns suspend here: the sequencer reports nothing to do, and
/// play resumes only when a key event reaches the app.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if app.handle_key(key.code) {
                    info!("user quit");
                    return Ok(());
                }
            }
        }

        if app.robot_to_move() {
            sleep(ROBOT_DELAY).await;
            app.play_robot_turn();
        }
    }
}
