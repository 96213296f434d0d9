//! Game screen - the board, whose turn it is, and the result banner.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_rules::{Position, RoundOutcome, RuleEngine, winning_line};
use tracing::{debug, info, instrument};

use crate::input::{digit_position, left_click, move_cursor};
use crate::screen::{Screen, ScreenTransition};
use crate::ui::{BOARD_HEIGHT, cell_at, center_rect, hit, marker_style, render_board};

/// State for the game screen.
#[derive(Debug, Clone, Getters)]
pub struct GameScreen {
    engine: RuleEngine,
    cursor: Position,
    outcome: Option<RoundOutcome>,
}

/// Widget rectangles of the game screen.
struct GameLayout {
    title: Rect,
    players: Rect,
    board: Rect,
    result: Rect,
    restart: Rect,
    help: Rect,
}

fn layout(area: Rect) -> GameLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(area);
    GameLayout {
        title: chunks[0],
        players: chunks[1],
        board: chunks[2],
        result: chunks[3],
        restart: center_rect(chunks[4], 16, 3),
        help: chunks[5],
    }
}

impl GameScreen {
    /// Starts a new game between the two named players.
    #[instrument]
    pub fn new(player_x: String, player_o: String) -> Self {
        Self {
            engine: RuleEngine::new(player_x, player_o),
            cursor: Position::default(),
            outcome: None,
        }
    }

    /// Plays the current player's marker at `pos`.
    ///
    /// Input after the game has ended, and moves the engine refuses, leave
    /// the screen unchanged.
    #[instrument(skip(self))]
    pub fn play(&mut self, pos: Position) {
        if self.engine.is_game_over() {
            debug!("Game over, ignoring input");
            return;
        }
        self.cursor = pos;
        match self.engine.play_round(pos.to_index()) {
            Some(RoundOutcome::Continue) => {
                debug!(next = %self.engine.current_player(), "Turn passed");
            }
            Some(outcome) => {
                info!(%outcome, "Game finished");
                self.outcome = Some(outcome);
            }
            None => debug!(position = %pos, "Move refused"),
        }
    }

    /// Text of the result banner.
    pub fn message(&self) -> String {
        match &self.outcome {
            Some(RoundOutcome::Win(player)) => format!("{} wins!", player.name()),
            Some(RoundOutcome::Tie) => "It's a tie!".to_string(),
            Some(RoundOutcome::Continue) | None => {
                let player = self.engine.current_player();
                format!("{}'s turn ({})", player.name(), player.marker())
            }
        }
    }

    fn render_players(&self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (i, player) in self.engine.players().iter().enumerate() {
            let active = !self.engine.is_game_over()
                && self.engine.current_player().marker() == player.marker();
            let name_style = if active {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(Color::Gray)
            };
            if i > 0 {
                spans.push(Span::raw("    "));
            }
            spans.push(Span::raw(if active { "▶ " } else { "  " }));
            spans.push(Span::styled(player.marker().to_string(), marker_style(*player.marker())));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(player.name().clone(), name_style));
        }

        let players = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Players"));
        frame.render_widget(players, area);
    }
}

impl Screen for GameScreen {
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

        self.render_players(frame, parts.players);

        let cursor = (!self.engine.is_game_over()).then_some(self.cursor);
        render_board(
            frame,
            parts.board,
            self.engine.board(),
            cursor,
            winning_line(self.engine.board()),
        );

        let result_style = match &self.outcome {
            Some(RoundOutcome::Win(_)) => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            Some(RoundOutcome::Tie) => Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            _ => Style::default().fg(Color::White),
        };
        let result = Paragraph::new(self.message())
            .style(result_style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(result, parts.result);

        let restart = Paragraph::new("Restart (r)")
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(restart, parts.restart);

        let help = Paragraph::new("Click or 1-9: Play | ←↑↓→ + Enter: Play cursor | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(help, parts.help);
    }

    #[instrument(skip(self), fields(code = ?key.code))]
    fn handle_key(&mut self, key: KeyEvent) -> ScreenTransition {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => ScreenTransition::GoToSetup,
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.play(self.cursor);
                ScreenTransition::Stay
            }
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                ScreenTransition::Stay
            }
            code => {
                if let Some(pos) = digit_position(code) {
                    self.play(pos);
                }
                ScreenTransition::Stay
            }
        }
    }

    #[instrument(skip(self, mouse))]
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) -> ScreenTransition {
        let Some((column, row)) = left_click(mouse) else {
            return ScreenTransition::Stay;
        };
        let parts = layout(area);
        if hit(parts.restart, column, row) {
            return ScreenTransition::GoToSetup;
        }
        if let Some(pos) = cell_at(parts.board, column, row) {
            self.play(pos);
        }
        ScreenTransition::Stay
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyModifiers, MouseButton, MouseEventKind};
    use tictactoe_rules::{Marker, Square};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn game() -> GameScreen {
        GameScreen::new("Ada".to_string(), "Grace".to_string())
    }

    fn press_digits(screen: &mut GameScreen, digits: &str) {
        for c in digits.chars() {
            screen.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_digits_play_cells() {
        let mut screen = game();
        press_digits(&mut screen, "5");
        assert_eq!(
            screen.engine().board().get(4),
            Some(Square::Occupied(Marker::X))
        );
        assert_eq!(screen.message(), "Grace's turn (O)");
    }

    #[test]
    fn test_cursor_and_enter() {
        let mut screen = game();
        screen.handle_key(key(KeyCode::Up));
        screen.handle_key(key(KeyCode::Left));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(
            screen.engine().board().get(0),
            Some(Square::Occupied(Marker::X))
        );
    }

    #[test]
    fn test_win_banner() {
        let mut screen = game();
        press_digits(&mut screen, "14253");
        assert_eq!(screen.message(), "Ada wins!");
        assert!(screen.engine().is_game_over());

        // Further input is ignored once the game is over.
        let before = screen.engine().clone();
        press_digits(&mut screen, "9");
        assert_eq!(screen.engine(), &before);
    }

    #[test]
    fn test_tie_banner() {
        let mut screen = game();
        press_digits(&mut screen, "123457698");
        assert_eq!(screen.outcome(), &Some(RoundOutcome::Tie));
        assert_eq!(screen.message(), "It's a tie!");
    }

    #[test]
    fn test_restart_and_quit_keys() {
        let mut screen = game();
        assert_eq!(screen.handle_key(key(KeyCode::Char('r'))), ScreenTransition::GoToSetup);
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenTransition::Quit);
    }

    #[test]
    fn test_click_plays_cell() {
        let mut screen = game();
        let area = Rect::new(0, 0, 80, 30);
        let board = layout(area).board;
        let (column, row) = (0..area.height)
            .flat_map(|row| (0..area.width).map(move |column| (column, row)))
            .find(|&(column, row)| cell_at(board, column, row) == Some(Position::BottomRight))
            .expect("bottom-right cell on screen");
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(screen.handle_mouse(click, area), ScreenTransition::Stay);
        assert_eq!(
            screen.engine().board().get(8),
            Some(Square::Occupied(Marker::X))
        );
    }
}
