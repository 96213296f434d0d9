//! Command-line interface for the `tictactoe` binary.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (used only if it exists)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Name of the player holding X
    #[arg(long)]
    pub player_x: Option<String>,

    /// Name of the player holding O
    #[arg(long)]
    pub player_o: Option<String>,

    /// Skip the setup screen and start playing immediately
    #[arg(long)]
    pub quick_start: bool,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
