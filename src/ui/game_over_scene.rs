//! Game-over screen with the final score.

use super::game_common::{render_modal, render_status_bar};
use crate::runner::CameraShake;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

/// Field units per cell of modal displacement.
const SHAKE_UNITS_PER_CELL: f64 = 4.0;

pub fn render_game_over_scene(frame: &mut Frame, area: Rect, score: u64, shake: &CameraShake) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(7), Constraint::Length(2)])
        .split(inner);

    let (dx, dy) = shake.offset(&mut rand::thread_rng());
    let offset = (
        (dx / SHAKE_UNITS_PER_CELL).round() as i32,
        (dy / (SHAKE_UNITS_PER_CELL * 2.0)).round() as i32,
    );

    let lines = vec![
        Line::from(Span::styled(
            "GAME OVER",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("Score: {}", score),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Space to Restart",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    render_modal(frame, chunks[0], Color::Red, 32, offset, lines);

    render_status_bar(
        frame,
        chunks[1],
        "Crashed",
        Color::Red,
        &[("[Space/Enter]", "Restart"), ("[Esc]", "Quit")],
    );
}
