//! Tic-tac-toe - terminal binary.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Controller, SetupScreen, TuiConfig, init_logging, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = TuiConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?
        .with_overrides(cli.player_x, cli.player_o, cli.log_file);

    init_logging(config.log_file(), config.log_filter())?;
    info!(config = ?config, "Starting tic-tac-toe");

    let setup = SetupScreen::new(config.player_x().clone(), config.player_o().clone());
    let mut controller = Controller::new(setup);
    if cli.quick_start {
        controller.quick_start();
    }

    run_tui(&mut controller)
}
