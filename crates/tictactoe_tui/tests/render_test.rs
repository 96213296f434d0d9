//! Render tests against an in-memory terminal.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect, style::Color};
use tictactoe_tui::{Controller, SetupScreen};

fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw_buffer(controller: &Controller) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 30)).expect("test terminal");
    terminal
        .draw(|f| controller.render(f))
        .expect("draw succeeds");
    terminal.backend().buffer().clone()
}

fn draw(controller: &Controller) -> String {
    buffer_text(&draw_buffer(controller))
}

fn press(controller: &mut Controller, code: KeyCode) {
    let area = Rect::new(0, 0, 80, 30);
    controller.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), area);
}

#[test]
fn test_setup_screen_shows_placeholders() {
    let controller = Controller::new(SetupScreen::default());
    let text = draw(&controller);
    assert!(text.contains("Player X name"));
    assert!(text.contains("Player O name"));
    assert!(text.contains("Start"));
    // The unfocused empty field shows its default name.
    assert!(text.contains("Player 2"));
}

#[test]
fn test_game_screen_shows_turn_and_marks() {
    let mut controller = Controller::new(SetupScreen::new(
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    ));
    controller.quick_start();
    press(&mut controller, KeyCode::Char('5'));

    let text = draw(&controller);
    assert!(text.contains("Ada"));
    assert!(text.contains("Grace's turn (O)"));
    assert!(text.contains('X'));
    assert!(text.contains("Restart"));
}

#[test]
fn test_tie_banner_rendered() {
    let mut controller = Controller::new(SetupScreen::default());
    controller.quick_start();
    for c in "123457698".chars() {
        press(&mut controller, KeyCode::Char(c));
    }

    let text = draw(&controller);
    assert!(text.contains("It's a tie!"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut controller = Controller::new(SetupScreen::default());
    controller.quick_start();
    press(&mut controller, KeyCode::Char('1'));

    let mut terminal = Terminal::new(TestBackend::new(10, 5)).expect("test terminal");
    terminal
        .draw(|f| controller.render(f))
        .expect("draw succeeds");
}

#[test]
fn test_active_player_marked_during_play() {
    let mut controller = Controller::new(SetupScreen::new(
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    ));
    controller.quick_start();
    assert!(draw(&controller).contains("▶ X Ada"));

    press(&mut controller, KeyCode::Char('5'));
    let text = draw(&controller);
    assert!(text.contains("▶ O Grace"));
    assert!(!text.contains("▶ X Ada"));
}

#[test]
fn test_win_highlights_line_and_clears_turn_marker() {
    let mut controller = Controller::new(SetupScreen::new(
        Some("Ada".to_string()),
        Some("Grace".to_string()),
    ));
    controller.quick_start();
    for c in "14253".chars() {
        press(&mut controller, KeyCode::Char(c));
    }

    let buffer = draw_buffer(&controller);
    let green_x = buffer
        .content()
        .iter()
        .filter(|cell| cell.symbol() == "X" && cell.bg == Color::Green)
        .count();
    assert_eq!(green_x, 3);

    let text = buffer_text(&buffer);
    assert!(text.contains("Ada wins!"));
    assert!(!text.contains('▶'));
}
