use super::maze::Maze;
use maze_battle::Position;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the maze with the player marker
pub fn draw_exploration_scene(frame: &mut Frame, area: Rect, maze: &Maze, player: Position) {
    let block = Block::default().borders(Borders::ALL).title("The Maze");

    let lines: Vec<Line> = maze
        .render_rows(player)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| match c {
                    '@' => Span::styled("@", Style::default().fg(Color::Cyan)),
                    '#' => Span::styled("#", Style::default().fg(Color::DarkGray)),
                    other => Span::raw(other.to_string()),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
