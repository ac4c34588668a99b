//! Title screen.

use super::game_common::{render_centered_prompt, render_modal, render_status_bar};
use crate::core::config::GameConfig;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear},
    Frame,
};

pub fn render_start_scene(frame: &mut Frame, area: Rect, config: &GameConfig, difficulty: &str) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Lane Runner ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightCyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3), Constraint::Length(2)])
        .split(inner);

    let lines = vec![
        Line::from(Span::styled(
            "L A N E   R U N N E R",
            Style::default()
                .fg(Color::LightCyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} lanes, {} mode",
            config.lane_count, difficulty
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("▄ ", Style::default().fg(Color::Rgb(220, 40, 40))),
            Span::raw("red barricades: jump over them"),
        ]),
        Line::from(vec![
            Span::styled("█ ", Style::default().fg(Color::Rgb(255, 120, 0))),
            Span::raw("orange blocks: change lane"),
        ]),
    ];
    render_modal(frame, chunks[0], Color::DarkGray, 44, (0, 0), lines);

    render_centered_prompt(frame, chunks[1], "[ Press Space to Start ]");

    render_status_bar(
        frame,
        chunks[2],
        "Ready",
        Color::LightCyan,
        &[("[Space/Enter]", "Start"), ("[Esc]", "Quit")],
    );
}
