//! Turn-taking rule engine.

use crate::player::Player;
use crate::rules::check_winner;
use crate::types::{Board, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// What a successful move led to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RoundOutcome {
    /// The game goes on with the other player.
    #[display("Continue")]
    Continue,
    /// The mover completed a line.
    #[display("{} wins", _0)]
    Win(Player),
    /// The board filled up without a winner.
    #[display("Tie")]
    Tie,
}

/// Tic-tac-toe game engine.
///
/// Owns the board, the two players and whose turn it is. Invalid moves are
/// refused without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEngine {
    board: Board,
    players: [Player; 2],
    current: usize,
    game_over: bool,
}

impl RuleEngine {
    /// Creates a new game between `first` (X) and `second` (O).
    #[instrument(skip(first, second))]
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        let mut engine = Self {
            board: Board::new(),
            players: [
                Player::new(String::new(), Marker::X),
                Player::new(String::new(), Marker::O),
            ],
            current: 0,
            game_over: false,
        };
        engine.init(first, second);
        engine
    }

    /// Starts a fresh game: new players, X to move, empty board.
    #[instrument(skip(self, first, second))]
    pub fn init(&mut self, first: impl Into<String>, second: impl Into<String>) {
        self.players = [Player::new(first, Marker::X), Player::new(second, Marker::O)];
        self.current = 0;
        self.game_over = false;
        self.board.reset();
        info!(
            player_x = %self.players[0].name(),
            player_o = %self.players[1].name(),
            "Game initialized"
        );
    }

    /// Plays the current player's marker at `index`.
    ///
    /// Returns `None` when the game is already over or the square is taken
    /// or off the board; the turn does not pass in that case. A move that
    /// both completes a line and fills the board is a win.
    #[instrument(skip(self), fields(player = %self.players[self.current]))]
    pub fn play_round(&mut self, index: usize) -> Option<RoundOutcome> {
        if self.game_over {
            debug!("Move ignored, game is over");
            return None;
        }

        let player = &self.players[self.current];
        if !self.board.set_mark(index, *player.marker()) {
            return None;
        }
        debug!(board = %self.board, "Mark placed");

        if check_winner(&self.board).is_some() {
            self.game_over = true;
            let outcome = RoundOutcome::Win(player.clone());
            info!(%outcome, "Game over");
            return Some(outcome);
        }

        if self.board.is_full() {
            self.game_over = true;
            info!(outcome = %RoundOutcome::Tie, "Game over");
            return Some(RoundOutcome::Tie);
        }

        self.switch_player();
        Some(RoundOutcome::Continue)
    }

    fn switch_player(&mut self) {
        self.current = 1 - self.current;
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Checks if the game has ended in a win or tie.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_assigns_markers() {
        let engine = RuleEngine::new("Ada", "Grace");
        assert_eq!(engine.players()[0].name(), "Ada");
        assert_eq!(*engine.players()[0].marker(), Marker::X);
        assert_eq!(engine.players()[1].name(), "Grace");
        assert_eq!(*engine.players()[1].marker(), Marker::O);
        assert_eq!(*engine.current_player().marker(), Marker::X);
        assert!(!engine.is_game_over());
    }

    #[test]
    fn test_turns_alternate() {
        let mut engine = RuleEngine::new("Ada", "Grace");
        assert_eq!(engine.play_round(0), Some(RoundOutcome::Continue));
        assert_eq!(engine.current_player().name(), "Grace");
        assert_eq!(engine.play_round(1), Some(RoundOutcome::Continue));
        assert_eq!(engine.current_player().name(), "Ada");
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut engine = RuleEngine::new("Ada", "Grace");
        engine.play_round(0);
        assert_eq!(engine.play_round(0), None);
        assert_eq!(engine.play_round(9), None);
        assert_eq!(engine.current_player().name(), "Grace");
    }

    #[test]
    fn test_init_resets_everything() {
        let mut engine = RuleEngine::new("Ada", "Grace");
        for index in [0, 3, 1, 4, 2] {
            engine.play_round(index);
        }
        assert!(engine.is_game_over());

        engine.init("Linus", "Ken");
        assert!(!engine.is_game_over());
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.current_player().name(), "Linus");
    }
}
