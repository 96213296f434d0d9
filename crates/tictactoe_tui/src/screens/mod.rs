//! Screen implementations for the front-end state machine.

mod game;
mod setup;

pub use game::GameScreen;
pub use setup::{SetupFocus, SetupScreen};
