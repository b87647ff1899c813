use maze_battle::StatsSummary;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the level/HP/XP table
pub fn draw_stats_panel(frame: &mut Frame, area: Rect, stats: StatsSummary) {
    let text = stats.to_string();
    let mut rows = text.lines();

    let mut lines = Vec::new();
    if let Some(header) = rows.next() {
        lines.push(Line::from(Span::styled(
            header.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )));
    }
    lines.extend(rows.map(|row| Line::from(row.to_string())));

    let block = Block::default().borders(Borders::ALL).title("Stats");
    let panel = Paragraph::new(lines).block(block);
    frame.render_widget(panel, area);
}
