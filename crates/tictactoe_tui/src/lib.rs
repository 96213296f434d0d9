//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **Screens**: setup (name entry) and game (board + result banner), each
//!   implementing [`Screen`]
//! - **Controller**: owns the screens and the terminal event loop
//! - **Config**: optional TOML file plus command-line overrides
//!
//! Game rules live in [`tictactoe_rules`]; this crate only renders state and
//! forwards input.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod controller;
mod input;
mod logging;
mod screen;
mod screens;
mod ui;

pub use cli::Cli;
pub use config::{ConfigError, TuiConfig};
pub use controller::{ActiveScreen, Controller, run_tui};
pub use logging::init_logging;
pub use screen::{Screen, ScreenTransition};
pub use screens::{GameScreen, SetupFocus, SetupScreen};
