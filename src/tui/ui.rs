//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::app::App;
use crate::game::{Board, Player, Position, Square};
use crate::settings::Theme;

/// Colors used by the widgets, derived from the active theme.
struct Palette {
    background: Color,
    text: Color,
    title: Color,
    status: Color,
    dim: Color,
    x_mark: Color,
    o_mark: Color,
    cursor_bg: Color,
    cursor_fg: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                title: Color::Blue,
                status: Color::Magenta,
                dim: Color::Gray,
                x_mark: Color::Blue,
                o_mark: Color::Red,
                cursor_bg: Color::Black,
                cursor_fg: Color::White,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                title: Color::Cyan,
                status: Color::Yellow,
                dim: Color::DarkGray,
                x_mark: Color::LightBlue,
                o_mark: Color::LightRed,
                cursor_bg: Color::White,
                cursor_fg: Color::Black,
            },
        }
    }
}

/// Renders the whole screen: title, board, result log, and status line.
pub fn draw(frame: &mut Frame, app: &App) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();

    // Paint the themed background before anything else.
    let backdrop = Block::default().style(Style::default().bg(palette.background));
    frame.render_widget(backdrop, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + results
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(
            Style::default()
                .fg(palette.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(28)])
        .split(chunks[1]);

    draw_board(frame, main[0], app, &palette);
    draw_results(frame, main[1], app, &palette);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(palette.status))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.text).bg(palette.background)),
        );
    frame.render_widget(status, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let board_area = center_rect(area, 41, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (i, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, chunk, app, palette, i);
    }
    draw_separator(frame, rows[1], palette);
    draw_separator(frame, rows[3], palette);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for (i, chunk) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        draw_cell(frame, chunk, app, palette, Position::at(row, i));
    }
    draw_separator_vertical(frame, cols[1], palette);
    draw_separator_vertical(frame, cols[3], palette);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, palette: &Palette, pos: Position) {
    let (symbol, base_style) = cell_appearance(app.game().board(), pos, palette);

    let style = if pos == app.cursor() {
        base_style.bg(palette.cursor_bg).fg(palette.cursor_fg)
    } else {
        base_style
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);
    frame.render_widget(cell, area);
}

fn cell_appearance(board: &Board, pos: Position, palette: &Palette) -> (String, Style) {
    match board.get(pos) {
        // Empty squares show their 1-9 key binding.
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(palette.dim),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default()
                .fg(palette.x_mark)
                .add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default()
                .fg(palette.o_mark)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn draw_results(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let items: Vec<ListItem> = app
        .results()
        .entries()
        .iter()
        .map(|entry| ListItem::new(entry.as_str()))
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(palette.text).bg(palette.background))
        .block(
            Block::default()
                .title("Results")
                .borders(Borders::ALL)
                .style(Style::default().fg(palette.text)),
        );
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(palette.dim));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect, palette: &Palette) {
    let sep = Paragraph::new("│").style(Style::default().fg(palette.dim));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
