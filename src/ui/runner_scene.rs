//! Game-scene rendering.
//!
//! The field is drawn into a cell buffer in logical units scaled to the
//! terminal, then stamped row by row as Paragraph widgets so every cell can
//! carry its own colors.

use super::game_common::{
    create_game_layout, info_line, render_info_panel_frame, render_status_bar,
};
use crate::runner::collision::{obstacle_hitbox, player_hitbox, Hitbox};
use crate::runner::{ObstacleKind, RunnerGame};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LANE_MARKER: char = '│';
const BARRICADE_COLOR: Color = Color::Rgb(220, 40, 40);
const BLOCK_COLOR: Color = Color::Rgb(255, 120, 0);
const PLAYER_COLOR: Color = Color::LightYellow;
const PLAYER_JUMP_COLOR: Color = Color::White;

pub fn render_runner_scene(frame: &mut Frame, area: Rect, game: &RunnerGame, difficulty: &str) {
    let layout = create_game_layout(frame, area, " Lane Runner ", Color::LightCyan, 10, 22);

    let shake = game.shake.offset(&mut rand::thread_rng());
    render_play_field(frame, layout.content, game, shake);
    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game, difficulty);
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Maps logical field coordinates onto buffer cells.
struct FieldScale {
    x: f64,
    y: f64,
    width: usize,
    height: usize,
    /// Camera offset in field units.
    shake: (f64, f64),
}

impl FieldScale {
    fn col(&self, x: f64) -> i32 {
        ((x + self.shake.0) * self.x).floor() as i32
    }

    fn row(&self, y: f64) -> i32 {
        ((y + self.shake.1) * self.y).floor() as i32
    }

    /// Fill every cell the hitbox covers (at least one cell each way).
    fn fill(&self, buffer: &mut [Vec<Cell>], hitbox: &Hitbox, cell: Cell) {
        let left = self.col(hitbox.left());
        let right = self.col(hitbox.right()).max(left + 1);
        let top = self.row(hitbox.top());
        let bottom = self.row(hitbox.bottom()).max(top + 1);

        for row in top.max(0)..bottom.min(self.height as i32) {
            for col in left.max(0)..right.min(self.width as i32) {
                buffer[row as usize][col as usize] = cell;
            }
        }
    }
}

fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame, shake: (f64, f64)) {
    if area.height < 2 || area.width < 10 {
        return;
    }
    let config = &game.config;

    let width = area.width as usize;
    let height = area.height as usize;
    let mut buffer = vec![vec![Cell::default(); width]; height];
    let scale = FieldScale {
        x: width as f64 / config.field_width,
        y: height as f64 / config.field_height,
        width,
        height,
        shake,
    };

    // ── Lane markers ──────────────────────────────────────────────────
    for i in 1..config.lane_count {
        let col = scale.col(i as f64 * config.lane_width());
        if col < 0 || col >= width as i32 {
            continue;
        }
        for row in buffer.iter_mut() {
            row[col as usize] = Cell {
                ch: LANE_MARKER,
                fg: Color::Rgb(70, 75, 90),
                bg: Color::Reset,
            };
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────
    for obstacle in &game.obstacles {
        let (ch, fg) = match obstacle.kind {
            ObstacleKind::Barricade => ('▄', BARRICADE_COLOR),
            ObstacleKind::Block => ('█', BLOCK_COLOR),
        };
        scale.fill(
            &mut buffer,
            &obstacle_hitbox(obstacle, config),
            Cell {
                ch,
                fg,
                bg: Color::Reset,
            },
        );
    }

    // ── Player ────────────────────────────────────────────────────────
    let player_fg = if game.player.is_jumping() {
        PLAYER_JUMP_COLOR
    } else {
        PLAYER_COLOR
    };
    scale.fill(
        &mut buffer,
        &player_hitbox(&game.player, config),
        Cell {
            ch: '█',
            fg: player_fg,
            bg: Color::Reset,
        },
    );

    // ── Score (top-left) ──────────────────────────────────────────────
    let score_text = format!(" Score: {} ", game.session.display_score());
    for (i, ch) in score_text.chars().enumerate().take(width) {
        buffer[0][i] = Cell {
            ch,
            fg: Color::White,
            bg: Color::Rgb(30, 30, 40),
        };
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let row_area = Rect::new(area.x, area.y + row_idx as u16, area.width, 1);
        frame.render_widget(Paragraph::new(Line::from(spans)), row_area);
    }
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let status = if game.player.is_jumping() {
        "Airborne!"
    } else {
        "Run!"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightCyan,
        &[("[←/→]", "Lane"), ("[Space/↑]", "Jump"), ("[Esc]", "Quit")],
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame, difficulty: &str) {
    let inner = render_info_panel_frame(frame, area);
    let config = &game.config;
    let session = &game.session;

    let speed_span = session.speed_max() - config.speed_start;
    let speed_pct = if speed_span > 0.0 {
        ((session.speed - config.speed_start) / speed_span * 100.0).round() as u32
    } else {
        100
    };

    let lines: Vec<Line> = vec![
        info_line("Mode: ", difficulty.to_string(), Color::LightCyan),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.display_score().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        info_line(
            "Speed: ",
            format!("{:.0} ({}%)", session.speed, speed_pct),
            Color::White,
        ),
        info_line(
            "Lane: ",
            format!("{}/{}", game.player.lane + 1, config.lane_count),
            Color::White,
        ),
        info_line(
            "Cleared: ",
            game.barricades_cleared.to_string(),
            Color::White,
        ),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(PLAYER_COLOR)),
            Span::styled("You", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" ▄ ", Style::default().fg(BARRICADE_COLOR)),
            Span::styled("Barricade: jump", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" █ ", Style::default().fg(BLOCK_COLOR)),
            Span::styled("Block: dodge", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
