use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GameState, GameStatus, Position};
use crate::metrics::GameMetrics;

const BACKGROUND: Color = Color::Rgb(0x20, 0x20, 0x20);
const GRID_LINE: Color = Color::Rgb(0x30, 0x30, 0x30);
const SNAKE_HEAD: Color = Color::Rgb(0x3b, 0xd1, 0x6f);
const SNAKE_BODY: Color = Color::Rgb(0x2e, 0xa7, 0x5a);
const FOOD: Color = Color::Rgb(0xff, 0x64, 0x64);

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Status
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_stats(state, metrics), chunks[0]);

        // Two columns per cell plus the border
        let grid_width = (state.grid_width as u16).saturating_mul(2).saturating_add(2);
        let game_area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(grid_width)])
            .flex(Flex::Center)
            .split(chunks[1])[0];

        frame.render_widget(self.render_grid(state), game_area);
        frame.render_widget(self.render_status(state), chunks[2]);
        frame.render_widget(self.render_controls(), chunks[3]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let lines: Vec<Line> = (0..state.grid_height)
            .map(|y| {
                let spans: Vec<Span> = (0..state.grid_width)
                    .map(|x| self.cell_span(state, Position::new(x as i32, y as i32)))
                    .collect();
                Line::from(spans)
            })
            .collect();

        let border_color = match state.status {
            GameStatus::Running => Color::White,
            GameStatus::GameOver => Color::Red,
            GameStatus::Won => SNAKE_HEAD,
        };

        Paragraph::new(lines).style(Style::default().bg(BACKGROUND)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(" Snake "),
        )
    }

    fn cell_span(&self, state: &GameState, pos: Position) -> Span<'static> {
        if pos == state.snake.head() {
            Span::styled(
                "██",
                Style::default().fg(SNAKE_HEAD).add_modifier(Modifier::BOLD),
            )
        } else if state.is_occupied_by_snake(pos) {
            Span::styled("██", Style::default().fg(SNAKE_BODY))
        } else if state.food == Some(pos) {
            Span::styled("██", Style::default().fg(FOOD))
        } else {
            Span::styled("· ", Style::default().fg(GRID_LINE))
        }
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Steps: ", Style::default().fg(Color::Yellow)),
            Span::styled(state.steps.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.clock_label(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                metrics.high_score.max(state.score).to_string(),
                Style::default().fg(Color::White),
            ),
        ])];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM))
    }

    fn render_status(&self, state: &GameState) -> Paragraph<'_> {
        let style = match state.status {
            GameStatus::Running => Style::default().fg(Color::Gray),
            GameStatus::GameOver => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            GameStatus::Won => Style::default().fg(SNAKE_HEAD).add_modifier(Modifier::BOLD),
        };

        Paragraph::new(Line::from(Span::styled(state.status_message(), style)))
            .alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
