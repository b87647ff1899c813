use maze_battle::combat::{CombatAction, CombatStateMachine, TurnState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the battle: both HP bars, the narration log and the action bar
pub fn draw_combat_scene(frame: &mut Frame, area: Rect, combat: &CombatStateMachine) {
    let combat_block = Block::default().borders(Borders::ALL).title("Battle");

    let inner = combat_block.inner(area);
    frame.render_widget(combat_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Player HP bar
            Constraint::Length(3), // Enemy HP bar
            Constraint::Length(5), // Combat log
            Constraint::Length(3), // Actions
        ])
        .split(inner);

    draw_player_hp(frame, chunks[0], combat);
    draw_enemy_hp(frame, chunks[1], combat);
    draw_combat_log(frame, chunks[2], combat);
    draw_actions(frame, chunks[3], combat);
}

fn hp_color(ratio: f64) -> Color {
    if ratio > 0.66 {
        Color::Green
    } else if ratio > 0.33 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn draw_player_hp(frame: &mut Frame, area: Rect, combat: &CombatStateMachine) {
    let stats = combat.stats();
    let max_hp = combat.player_max_health().max(1);
    let hp_ratio = (stats.health as f64 / max_hp as f64).clamp(0.0, 1.0);

    let mut title = String::from("Player");
    if combat.is_guarding() {
        title.push_str(" (guarding)");
    }

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(title))
        .gauge_style(
            Style::default()
                .fg(hp_color(hp_ratio))
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("HP: {}/{}", stats.health, max_hp))
        .ratio(hp_ratio);

    frame.render_widget(gauge, area);
}

fn draw_enemy_hp(frame: &mut Frame, area: Rect, combat: &CombatStateMachine) {
    let enemy = combat.enemy();
    let hp_ratio = (enemy.current_hp as f64 / enemy.max_hp.max(1) as f64).clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Enemy"))
        .gauge_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .label(format!("{}: {}/{}", enemy.name, enemy.current_hp, enemy.max_hp))
        .ratio(hp_ratio);

    frame.render_widget(gauge, area);
}

fn draw_combat_log(frame: &mut Frame, area: Rect, combat: &CombatStateMachine) {
    let lines: Vec<Line> = combat
        .log()
        .entries()
        .map(|entry| {
            let color = if entry.is_player_action {
                Color::Cyan
            } else {
                Color::White
            };
            Line::from(Span::styled(entry.message.clone(), Style::default().fg(color)))
        })
        .collect();

    let block = Block::default().borders(Borders::ALL).title("Log");
    let log = Paragraph::new(lines).block(block);
    frame.render_widget(log, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, combat: &CombatStateMachine) {
    let line = match combat.state() {
        TurnState::PlayerTurn => {
            let mut spans = Vec::new();
            for action in CombatAction::all() {
                let label = action.label();
                spans.push(Span::styled(
                    format!("[{}]", &label[..1]),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                spans.push(Span::raw(format!("{}   ", &label[1..])));
            }
            Line::from(spans)
        }
        TurnState::EnemyTurn => Line::from(Span::styled(
            "The enemy is moving...",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
        TurnState::BattleOver => Line::from(Span::styled(
            "The battle is over.",
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    };

    let block = Block::default().borders(Borders::ALL).title("Actions");
    let actions = Paragraph::new(line).block(block);
    frame.render_widget(actions, area);
}
