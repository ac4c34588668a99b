//! Shared layout and widgets for the three scenes.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Layout areas returned by `create_game_layout`.
pub struct GameLayout {
    /// Play field, top left inside the outer border
    pub content: Rect,
    /// Two-line status bar under the play field
    pub status_bar: Rect,
    /// Info panel on the right, with its own border
    pub info_panel: Rect,
}

/// Outer border around the play field, a two-line status bar and the info
/// panel on the right:
///
/// ```text
/// ┌─ Lane Runner ───────────────────┬─ Info ──────┐
/// │ play field                      │ info panel  │
/// │                                 │             │
/// │ status / key hints              │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    content_min_height: u16,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, info_panel] = split2(
        inner,
        Direction::Horizontal,
        Constraint::Min(20),
        Constraint::Length(info_panel_width),
    );
    let [content, status_bar] = split2(
        left,
        Direction::Vertical,
        Constraint::Min(content_min_height),
        Constraint::Length(2),
    );

    GameLayout {
        content,
        status_bar,
        info_panel,
    }
}

fn split2(area: Rect, direction: Direction, first: Constraint, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([first, second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Status message on the first line, `(key, action)` hints on the second.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height == 0 {
        return;
    }
    let message_row = Rect { height: 1, ..area };
    frame.render_widget(
        Paragraph::new(status_text)
            .style(Style::default().fg(status_color))
            .alignment(Alignment::Center),
        message_row,
    );

    if area.height < 2 || controls.is_empty() {
        return;
    }
    let hints: Vec<Span> = controls
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let gap = if i == 0 { "" } else { "  " };
            [
                Span::raw(gap),
                Span::styled(*key, Style::default().fg(Color::White)),
                Span::styled(format!(" {}", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    let hint_row = Rect {
        y: area.y + 1,
        height: 1,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Line::from(hints)).alignment(Alignment::Center),
        hint_row,
    );
}

/// Info panel border. Returns the inner Rect.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A bordered, centred modal of `width` x `lines.len() + 2`, shifted by
/// `offset` cells (used for camera shake). Clipped to `area`.
pub fn render_modal(
    frame: &mut Frame,
    area: Rect,
    border_color: Color,
    width: u16,
    offset: (i32, i32),
    lines: Vec<Line>,
) {
    let width = width.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    if width < 4 || height < 3 {
        return;
    }

    let base_x = area.x + (area.width - width) / 2;
    let base_y = area.y + (area.height - height) / 2;
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    let x = (base_x as i32 + offset.0).clamp(area.x as i32, max_x as i32) as u16;
    let y = (base_y as i32 + offset.1).clamp(area.y as i32, max_y as i32) as u16;
    let modal = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// Bold white one-line prompt centred in `area`.
pub fn render_centered_prompt(frame: &mut Frame, area: Rect, prompt: &str) {
    if area.height < 3 || area.width < prompt.chars().count() as u16 {
        return;
    }
    let width = prompt.chars().count() as u16;
    let x = area.x + (area.width - width) / 2;
    let y = area.y + area.height / 2;

    let line = Paragraph::new(Line::from(Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(line, Rect::new(x, y, width, 1));
}

/// "Label: value" line in the info panel.
pub fn info_line<'a>(label: &'a str, value: String, value_color: Color) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}
