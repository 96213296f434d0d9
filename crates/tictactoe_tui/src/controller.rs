//! Controller - the state machine driving the terminal UI.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::Rect,
};
use tracing::{debug, error, info, instrument};

use crate::screen::{Screen, ScreenTransition};
use crate::screens::{GameScreen, SetupScreen};

const POLL_INTERVAL: std::time::Duration = std::time::Duration::from_millis(100);

/// Which screen is in front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveScreen {
    /// Name entry.
    Setup,
    /// Board and result banner.
    Game,
}

/// Controller that owns both screens and routes input to the active one.
///
/// The setup screen lives for the whole session so restarting returns to
/// the names typed earlier.
#[derive(Debug)]
pub struct Controller {
    setup: SetupScreen,
    game: Option<GameScreen>,
    active: ActiveScreen,
}

impl Controller {
    /// Creates a controller showing `setup`.
    #[instrument(skip(setup))]
    pub fn new(setup: SetupScreen) -> Self {
        info!("Creating Controller");
        Self {
            setup,
            game: None,
            active: ActiveScreen::Setup,
        }
    }

    /// Returns the screen in front.
    pub fn active(&self) -> ActiveScreen {
        self.active
    }

    /// Returns the setup screen.
    pub fn setup(&self) -> &SetupScreen {
        &self.setup
    }

    /// Returns the running game, if one was started.
    pub fn game(&self) -> Option<&GameScreen> {
        self.game.as_ref()
    }

    /// Starts a game with whatever the setup screen currently holds.
    #[instrument(skip(self))]
    pub fn quick_start(&mut self) {
        let transition = self.setup.start();
        self.apply(transition);
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        match (self.active, &self.game) {
            (ActiveScreen::Game, Some(game)) => game.render(frame),
            _ => self.setup.render(frame),
        }
    }

    /// Routes one terminal event to the active screen.
    ///
    /// `area` is the terminal area of the last draw. Returns `false` once
    /// the user asked to quit.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event, area: Rect) -> bool {
        let transition = match event {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Release => ScreenTransition::Stay,
            Event::Key(key) => self.active_screen_mut().handle_key(key),
            Event::Mouse(mouse) => self.active_screen_mut().handle_mouse(mouse, area),
            _ => ScreenTransition::Stay,
        };
        self.apply(transition)
    }

    fn active_screen_mut(&mut self) -> &mut dyn Screen {
        match (self.active, &mut self.game) {
            (ActiveScreen::Game, Some(game)) => game as &mut dyn Screen,
            _ => &mut self.setup as &mut dyn Screen,
        }
    }

    fn apply(&mut self, transition: ScreenTransition) -> bool {
        match transition {
            ScreenTransition::Stay => {}
            ScreenTransition::StartGame { player_x, player_o } => {
                debug!(%player_x, %player_o, "Switching to game screen");
                self.game = Some(GameScreen::new(player_x, player_o));
                self.active = ActiveScreen::Game;
            }
            ScreenTransition::GoToSetup => {
                debug!("Switching to setup screen");
                self.active = ActiveScreen::Setup;
            }
            ScreenTransition::Quit => {
                info!("User quit");
                return false;
            }
        }
        true
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting event loop");
        loop {
            let area = terminal.draw(|f| self.render(f))?.area;

            if event::poll(POLL_INTERVAL)? {
                let event = event::read()?;
                if !self.handle_event(event, area) {
                    return Ok(());
                }
            }
        }
    }
}

/// Puts the terminal in raw mode, runs `controller`, and restores the
/// terminal whether or not the loop failed.
pub fn run_tui(controller: &mut Controller) -> Result<()> {
    enable_raw_mode()?;
    let mut terminal = restore_on_error(enter_terminal, abandon_terminal)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &res {
        error!(error = ?e, "Event loop error");
    }
    res
}

fn enter_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Best-effort undo of a partially entered terminal.
fn abandon_terminal() {
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        error!(error = ?e, "Failed to leave alternate screen");
    }
    if let Err(e) = disable_raw_mode() {
        error!(error = ?e, "Failed to disable raw mode");
    }
}

/// Runs `setup`, calling `restore` before handing back any error.
fn restore_on_error<T>(
    setup: impl FnOnce() -> Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    setup().inspect_err(|e| {
        error!(error = ?e, "Terminal setup failed");
        restore();
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_setup_failure_restores_terminal() {
        let restored = Cell::new(false);
        let res: Result<()> = restore_on_error(
            || Err(anyhow::anyhow!("no tty")),
            || restored.set(true),
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_setup_success_leaves_terminal() {
        let restored = Cell::new(false);
        let res = restore_on_error(|| Ok(7), || restored.set(true));
        assert_eq!(res.expect("setup succeeds"), 7);
        assert!(!restored.get());
    }
}
