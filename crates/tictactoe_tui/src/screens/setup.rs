//! Setup screen - enter both names and start the game.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_rules::{DEFAULT_PLAYER_NAMES, Marker};
use tracing::{debug, info, instrument};

use crate::input::left_click;
use crate::screen::{Screen, ScreenTransition};
use crate::ui::{center_rect, hit, marker_style};

/// Which widget on the setup screen receives typed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupFocus {
    /// Name field for the player holding X.
    #[default]
    PlayerX,
    /// Name field for the player holding O.
    PlayerO,
    /// The start button.
    Start,
}

impl SetupFocus {
    fn next(self) -> Self {
        match self {
            Self::PlayerX => Self::PlayerO,
            Self::PlayerO => Self::Start,
            Self::Start => Self::PlayerX,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::PlayerX => Self::Start,
            Self::PlayerO => Self::PlayerX,
            Self::Start => Self::PlayerO,
        }
    }
}

/// State for the setup screen.
///
/// Holds the raw text of both name fields. The text survives a round trip
/// through the game screen, so restarting shows what was typed before.
#[derive(Debug, Clone, Default, Getters)]
pub struct SetupScreen {
    inputs: [String; 2],
    focus: SetupFocus,
}

/// Widget rectangles of the setup screen.
struct SetupLayout {
    title: Rect,
    inputs: [Rect; 2],
    start: Rect,
    help: Rect,
}

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 15;

fn layout(area: Rect) -> SetupLayout {
    let form = center_rect(area, FORM_WIDTH, FORM_HEIGHT);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(form);
    let start = center_rect(chunks[3], 14, 3);
    SetupLayout {
        title: chunks[0],
        inputs: [chunks[1], chunks[2]],
        start,
        help: chunks[4],
    }
}

impl SetupScreen {
    /// Creates a setup screen with optional prefilled names.
    #[instrument]
    pub fn new(player_x: Option<String>, player_o: Option<String>) -> Self {
        debug!("Initializing SetupScreen");
        Self {
            inputs: [player_x.unwrap_or_default(), player_o.unwrap_or_default()],
            focus: SetupFocus::PlayerX,
        }
    }

    /// Names to play with: trimmed input, or the defaults when blank.
    pub fn resolved_names(&self) -> [String; 2] {
        [0, 1].map(|i| {
            let name = self.inputs[i].trim();
            if name.is_empty() {
                DEFAULT_PLAYER_NAMES[i].to_string()
            } else {
                name.to_string()
            }
        })
    }

    /// Builds the transition that starts a game with the current names.
    #[instrument(skip(self))]
    pub fn start(&self) -> ScreenTransition {
        let [player_x, player_o] = self.resolved_names();
        info!(%player_x, %player_o, "Starting game");
        ScreenTransition::StartGame { player_x, player_o }
    }

    fn focused_input(&mut self) -> Option<&mut String> {
        match self.focus {
            SetupFocus::PlayerX => Some(&mut self.inputs[0]),
            SetupFocus::PlayerO => Some(&mut self.inputs[1]),
            SetupFocus::Start => None,
        }
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, slot: usize, marker: Marker) {
        let focused = matches!(
            (self.focus, slot),
            (SetupFocus::PlayerX, 0) | (SetupFocus::PlayerO, 1)
        );
        let border = if focused {
            marker_style(marker)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let (text, text_style) = if self.inputs[slot].is_empty() && !focused {
            (DEFAULT_PLAYER_NAMES[slot], Style::default().fg(Color::DarkGray))
        } else {
            (self.inputs[slot].as_str(), Style::default().fg(Color::White))
        };

        let input = Paragraph::new(text).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!("Player {} name", marker)),
        );
        frame.render_widget(input, area);

        if focused {
            let typed = u16::try_from(self.inputs[slot].chars().count()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(1)
                .saturating_add(typed)
                .min(area.right().saturating_sub(2));
            frame.set_cursor_position((x, area.y + 1));
        }
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame))]
    fn render(&self, frame: &mut Frame) {
        let parts = layout(frame.area());

        let title = Paragraph::new("Tic-Tac-Toe")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, parts.title);

        self.render_input(frame, parts.inputs[0], 0, Marker::X);
        self.render_input(frame, parts.inputs[1], 1, Marker::O);

        let start_style = if self.focus == SetupFocus::Start {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        let start = Paragraph::new("Start")
            .style(start_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(start, parts.start);

        let help = Paragraph::new("Tab: Next field | Enter: Start | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, parts.help);
    }

    #[instrument(skip(self), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Enter => self.start(),
            KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                ScreenTransition::Stay
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.previous();
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                if let Some(input) = self.focused_input() {
                    input.pop();
                }
                ScreenTransition::Stay
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.focused_input() {
                    Some(input) => {
                        input.push(c);
                        ScreenTransition::Stay
                    }
                    None if c.eq_ignore_ascii_case(&'q') => ScreenTransition::Quit,
                    None => ScreenTransition::Stay,
                }
            }
            _ => ScreenTransition::Stay,
        }
    }

    #[instrument(skip(self, mouse))]
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> ScreenTransition {
        let Some((column, row)) = left_click(mouse) else {
            return ScreenTransition::Stay;
        };
        let parts = layout(area);
        if hit(parts.start, column, row) {
            return self.start();
        }
        if hit(parts.inputs[0], column, row) {
            self.focus = SetupFocus::PlayerX;
        } else if hit(parts.inputs[1], column, row) {
            self.focus = SetupFocus::PlayerO;
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{MouseButton, MouseEventKind};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(screen: &mut SetupScreen, text: &str) {
        for c in text.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_blank_names_fall_back_to_defaults() {
        let mut screen = SetupScreen::new(None, Some("   ".to_string()));
        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenTransition::StartGame {
                player_x: "Player 1".to_string(),
                player_o: "Player 2".to_string(),
            }
        );
    }

    #[test]
    fn test_typed_names_are_trimmed() {
        let mut screen = SetupScreen::default();
        type_text(&mut screen, "  Ada ");
        screen.handle_key(key(KeyCode::Tab));
        type_text(&mut screen, "Grace");

        assert_eq!(
            screen.handle_key(key(KeyCode::Enter)),
            ScreenTransition::StartGame {
                player_x: "Ada".to_string(),
                player_o: "Grace".to_string(),
            }
        );
        assert_eq!(screen.inputs()[0], "  Ada ");
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut screen = SetupScreen::new(Some("Adam".to_string()), None);
        screen.handle_key(key(KeyCode::Backspace));
        assert_eq!(screen.resolved_names()[0], "Ada");
    }

    #[test]
    fn test_focus_cycles() {
        let mut screen = SetupScreen::default();
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(*screen.focus(), SetupFocus::PlayerO);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(*screen.focus(), SetupFocus::Start);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(*screen.focus(), SetupFocus::PlayerX);
        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(*screen.focus(), SetupFocus::Start);
    }

    #[test]
    fn test_q_types_into_field_but_quits_from_button() {
        let mut screen = SetupScreen::default();
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Stay);
        assert_eq!(screen.inputs()[0], "q");

        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
    }

    #[test]
    fn test_very_long_name_renders() {
        let screen = SetupScreen::new(Some("a".repeat(65_534)), None);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(80, 30)).expect("test terminal");
        terminal
            .draw(|f| screen.render(f))
            .expect("draw succeeds");
        assert_eq!(screen.resolved_names()[0].len(), 65_534);
    }

    #[test]
    fn test_clicking_start_button() {
        let mut screen = SetupScreen::new(Some("Ada".to_string()), None);
        let area = Rect::new(0, 0, 80, 24);
        let start = layout(area).start;
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: start.x + 2,
            row: start.y + 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            screen.handle_mouse(click, area),
            ScreenTransition::StartGame {
                player_x: "Ada".to_string(),
                player_o: "Player 2".to_string(),
            }
        );
    }
}
