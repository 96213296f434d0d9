//! Screen trait and transition type for the front-end state machine.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

/// The result of handling an input event on a screen.
///
/// Screens return this from [`Screen::handle_key`] and
/// [`Screen::handle_mouse`] to drive the [`Controller`](crate::Controller).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen.
    Stay,
    /// Start a new game with the given names.
    StartGame {
        /// Name of the player holding X.
        player_x: String,
        /// Name of the player holding O.
        player_o: String,
    },
    /// Return to the setup screen, keeping the names typed there.
    GoToSetup,
    /// Exit the application.
    Quit,
}

/// Trait implemented by each screen.
///
/// Each screen owns its own state, renders its UI, and turns input into
/// transitions. `area` is the full terminal area the screen was last drawn
/// into, so mouse coordinates can be mapped back onto widgets.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition;

    /// Handles a mouse event.
    fn handle_mouse(&mut self, _mouse: MouseEvent, _area: Rect) -> ScreenTransition {
        ScreenTransition::Stay
    }
}
