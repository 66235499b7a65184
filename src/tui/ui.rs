//! Stateless UI rendering.

use super::app::{ABOUT, App, Screen};
use oxo_engine::{Cell, Coord, Mode, Player, SIZE};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
};

/// Renders the whole screen.
pub fn draw<R>(frame: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Body
            Constraint::Length(3), // Status
            Constraint::Length(1), // Keys
        ])
        .split(frame.area());

    let title = Paragraph::new(
        Line::from("oxo - Tic Tac Toe")
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .centered(),
    );
    frame.render_widget(title, chunks[0]);

    match app.screen() {
        Screen::Settings => draw_settings(frame, chunks[1], app),
        Screen::Game => draw_board(frame, chunks[1], app),
    }

    let status = match app.message() {
        Some(message) => Line::from(message.to_string()).style(Style::default().fg(Color::Red)),
        None if app.show_about() => Line::from(ABOUT),
        None => Line::from(app.snapshot().status().clone()).style(Style::default().fg(Color::Yellow)),
    };
    let status = Paragraph::new(status.centered()).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let keys = match app.screen() {
        Screen::Settings => "x/o first mover  f friend  b bot  Enter start  q quit",
        Screen::Game => "arrows move  Enter place  1-9 place  n new game  s settings  a about  q quit",
    };
    frame.render_widget(
        Paragraph::new(Line::from(keys).style(Style::default().fg(Color::DarkGray)).centered()),
        chunks[3],
    );
}

fn draw_settings<R>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let draft = app.draft();
    let choice = |selected: bool, label: &'static str| {
        let marker = if selected { "(*) " } else { "( ) " };
        let style = if selected {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(Span::styled(format!("{}{}", marker, label), style))
    };

    let text = Text::from(vec![
        Line::from("Who moves first").style(Style::default().add_modifier(Modifier::UNDERLINED)),
        choice(draft.first_mover() == Player::X, "X first   [x]"),
        choice(draft.first_mover() == Player::O, "O first   [o]"),
        Line::from(""),
        Line::from("Game mode").style(Style::default().add_modifier(Modifier::UNDERLINED)),
        choice(draft.mode() == Mode::HumanVsHuman, "With a friend [f]"),
        choice(draft.mode() == Mode::HumanVsBot, "With the bot  [b]"),
    ]);

    let settings = Paragraph::new(text).block(Block::default().title("Settings").borders(Borders::ALL));
    frame.render_widget(settings, center_rect(area, 32, 9));
}

fn draw_board<R>(frame: &mut Frame, area: Rect, app: &App<R>) {
    let board_area = center_rect(area, 40, 11);

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

    for row in 0..SIZE {
        draw_row(frame, rows[row * 2], app, row);
        if row < SIZE - 1 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<R>(frame: &mut Frame, area: Rect, app: &App<R>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..SIZE {
        if let Some(coord) = Coord::new(row, col) {
            draw_cell(frame, cols[col * 2], app, coord);
        }
        if col < SIZE - 1 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell<R>(frame: &mut Frame, area: Rect, app: &App<R>, coord: Coord) {
    let (symbol, base_style) = match app.snapshot().state().board().get(coord) {
        Cell::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Cell::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if coord == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center the mark in the 3-line cell.
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(symbol, style)).centered(),
    ]);
    frame.render_widget(Paragraph::new(text), area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
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
