//! Tic-tac-toe board rendering and hit testing.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use tictactoe_rules::{Board, Position, Square};

use super::{center_rect, hit, marker_style};

/// Width of the rendered board in terminal columns.
pub const BOARD_WIDTH: u16 = 38;
/// Height of the rendered board in terminal rows.
pub const BOARD_HEIGHT: u16 = 11;

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;

/// Computes the nine cell rectangles, row-major, for a board centered in `area`.
pub fn cell_rects(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (c, cell) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = cell;
        }
    }
    cells
}

/// Maps a terminal coordinate to the board cell under it.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    cell_rects(area)
        .iter()
        .position(|&cell| hit(cell, column, row))
        .and_then(Position::from_index)
}

/// Renders the board with optional cursor and winning-line highlights.
pub fn render_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    cursor: Option<Position>,
    winning_line: Option<[usize; 3]>,
) {
    let cells = cell_rects(area);

    for (index, cell) in cells.iter().enumerate() {
        let square = board.get(index).unwrap_or_default();
        let (text, mut style) = match square {
            Square::Empty => (
                (index + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(marker) => (marker.to_string(), marker_style(marker)),
        };

        if winning_line.is_some_and(|line| line.contains(&index)) {
            style = style.bg(Color::Green).fg(Color::Black);
        } else if cursor.is_some_and(|pos| pos.to_index() == index) {
            style = style.bg(Color::White).fg(Color::Black);
        }

        // Vertically center the mark inside the 3-row cell.
        let lines = vec![
            Line::from(Span::styled(" ".repeat(cell.width as usize), style)),
            Line::from(Span::styled(text, style)),
            Line::from(Span::styled(" ".repeat(cell.width as usize), style)),
        ];
        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(paragraph, *cell);
    }

    render_grid(frame, &cells);
}

fn render_grid(frame: &mut Frame, cells: &[Rect; 9]) {
    let grid = Style::default().fg(Color::DarkGray);
    let bounds = frame.area();

    for row in 0..3 {
        for col in 0..2 {
            let cell = cells[row * 3 + col];
            let sep = Rect::new(cell.x + cell.width, cell.y, 1, cell.height).intersection(bounds);
            let bars = vec![Line::from("│"); sep.height as usize];
            frame.render_widget(Paragraph::new(bars).style(grid), sep);
        }
    }

    for row in 0..2 {
        let left = cells[row * 3];
        let right = cells[row * 3 + 2];
        let width = (right.x + right.width).saturating_sub(left.x);
        let sep = Rect::new(left.x, left.y + left.height, width, 1).intersection(bounds);
        frame.render_widget(
            Paragraph::new("─".repeat(sep.width as usize)).style(grid),
            sep,
        );
    }
}
