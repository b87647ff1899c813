mod logging;
mod ui;

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use maze_battle::core::constants::{INPUT_POLL_MS, TICK_INTERVAL_MS};
use maze_battle::{CombatAction, GameConfig, GameError, Session};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use ui::draw_ui;
use ui::maze::Maze;

/// Explore the maze, survive the encounters.
#[derive(Debug, Parser)]
#[command(name = "maze-battle", version, about)]
struct Cli {
    /// JSON file overriding combat and encounter numbers
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for all random rolls
    #[arg(long)]
    seed: Option<u64>,

    /// Print the final progression as JSON on exit
    #[arg(long)]
    dump_state: bool,
}

fn main() -> Result<(), GameError> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    let config = GameConfig::load_or_default(cli.config.as_deref())?;
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = Session::new(config);
    let maze = Maze::default();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run_game(&mut terminal, &mut session, &maze, &mut rng);

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;

    let progression = session.progression();
    tracing::info!(?progression, "Session ended");
    if cli.dump_state {
        println!("{}", serde_json::to_string_pretty(&progression)?);
    }
    Ok(())
}

fn run_game<R: Rng>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
    maze: &Maze,
    rng: &mut R,
) -> Result<(), GameError> {
    let mut last_tick = Instant::now();

    loop {
        // A failed frame is dropped; the game keeps running
        if let Err(e) = terminal.draw(|frame| draw_ui(frame, session, maze)) {
            tracing::warn!(error = %e, "Failed to draw frame");
        }

        // Poll for input (50ms non-blocking)
        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                if key_event.kind == KeyEventKind::Press {
                    if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                        break;
                    }
                    handle_key(key_event, session, maze, rng);
                }
            }
        }

        // Session clock advances every 100ms
        let elapsed = last_tick.elapsed();
        if elapsed >= Duration::from_millis(TICK_INTERVAL_MS) {
            session.tick(elapsed.as_secs_f64());
            last_tick = Instant::now();
        }
    }

    Ok(())
}

fn handle_key<R: Rng>(key_event: KeyEvent, session: &mut Session, maze: &Maze, rng: &mut R) {
    if session.is_in_combat() {
        let action = match key_event.code {
            KeyCode::Char('f') | KeyCode::Char('F') => CombatAction::Fight,
            KeyCode::Char('g') | KeyCode::Char('G') => CombatAction::Guard,
            KeyCode::Char('r') | KeyCode::Char('R') => CombatAction::Run,
            _ => return,
        };
        session.combat_action(action, rng);
        return;
    }

    let Some(position) = session.exploration_position() else {
        return;
    };
    let (dx, dy) = match key_event.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => (0, -1),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => (0, 1),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => (-1, 0),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => (1, 0),
        _ => (0, 0),
    };

    // Any key press counts as an input tick for the encounter roll
    let next = maze.step(position, dx, dy);
    session.exploration_tick(true, next, rng);
}
