//! Command-line interface.

use clap::{Parser, ValueEnum};
use noughts::PlayerKind;
use std::path::PathBuf;

/// Terminal tic-tac-toe with human and robot players.
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with human and robot players", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial player pairing, first seat (X) named first.
    #[arg(long, value_enum, default_value = "human-human")]
    pub pairing: Pairing,

    /// File receiving tracing output while the TUI owns the terminal.
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}

/// Quick-start player pairings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pairing {
    /// Both seats take keyboard input.
    HumanHuman,
    /// X takes keyboard input, O plays random moves.
    HumanRobot,
    /// X plays random moves, O takes keyboard input.
    RobotHuman,
    /// Both seats play random moves.
    RobotRobot,
}

impl Pairing {
    /// Seat kinds, first seat (X) first.
    pub fn kinds(self) -> [PlayerKind; 2] {
        match self {
            Pairing::HumanHuman => [PlayerKind::Human, PlayerKind::Human],
            Pairing::HumanRobot => [PlayerKind::Human, PlayerKind::Robot],
            Pairing::RobotHuman => [PlayerKind::Robot, PlayerKind::Human],
            Pairing::RobotRobot => [PlayerKind::Robot, PlayerKind::Robot],
        }
    }
}
