//! Tic-tac-toe rules - board model and turn-taking engine.
//!
//! # Architecture
//!
//! - **Board**: nine squares in row-major order, mutation and query only
//! - **Rules**: pure win and draw detection over a [`Board`]
//! - **Engine**: owns the two players, turn order and the game-over flag
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{RoundOutcome, RuleEngine};
//!
//! let mut engine = RuleEngine::new("Ada", "Grace");
//! assert_eq!(engine.play_round(4), Some(RoundOutcome::Continue));
//! // Occupied squares are rejected and the turn does not pass.
//! assert_eq!(engine.play_round(4), None);
//! assert_eq!(engine.current_player().name(), "Grace");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod player;
mod position;
pub mod rules;
mod types;

pub use engine::{RoundOutcome, RuleEngine};
pub use error::MarkError;
pub use player::{DEFAULT_PLAYER_NAMES, Player};
pub use position::Position;
pub use rules::{WIN_COMBINATIONS, check_winner, is_draw, is_full, winning_line};
pub use types::{BOARD_SIZE, Board, Marker, Square};
