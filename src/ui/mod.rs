mod combat_scene;
mod exploration_scene;
pub mod maze;
mod stats_panel;

use maze::Maze;
use maze_battle::{Mode, Session};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

/// Main UI drawing function
pub fn draw_ui(frame: &mut Frame, session: &Session, maze: &Maze) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(12),   // Scene
            Constraint::Length(4), // Stats
            Constraint::Length(1), // Key hints
        ])
        .split(frame.size());

    match session.mode() {
        Mode::Exploration { position } => {
            exploration_scene::draw_exploration_scene(frame, chunks[0], maze, *position);
        }
        Mode::Combat(combat) => {
            combat_scene::draw_combat_scene(frame, chunks[0], combat);
        }
    }

    stats_panel::draw_stats_panel(frame, chunks[1], session.stats());
    draw_key_hints(frame, chunks[2], session);
}

fn draw_key_hints(frame: &mut Frame, area: Rect, session: &Session) {
    let hints = if session.is_in_combat() {
        "F fight | G guard | R run | Q quit"
    } else {
        "Arrows/WASD move | Q quit"
    };
    let style = Style::default().fg(Color::DarkGray);
    let paragraph = Paragraph::new(Line::from(hints)).style(style);
    frame.render_widget(paragraph, area);
}
