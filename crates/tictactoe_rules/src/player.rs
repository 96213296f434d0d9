//! Named participants.

use crate::types::Marker;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Names used when a player leaves their name blank.
pub const DEFAULT_PLAYER_NAMES: [&str; 2] = ["Player 1", "Player 2"];

/// One of the two people at the board.
///
/// Created at game start and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name.
    #[new(into)]
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.marker)
    }
}
