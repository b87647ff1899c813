// Tick and timing
pub const TICK_INTERVAL_MS: u64 = 100;
pub const INPUT_POLL_MS: u64 = 50;
pub const ENEMY_TURN_DELAY_SECONDS: f64 = 1.0;
pub const VICTORY_DELAY_SECONDS: f64 = 3.0;
pub const DEFEAT_RESTART_DELAY_SECONDS: f64 = 2.0;
// Slack for summed tick deltas that land a hair under a delay
pub const TIMER_EPSILON_SECONDS: f64 = 1e-9;

// Player
pub const PLAYER_MAX_HEALTH: u32 = 100;
pub const PLAYER_START_LEVEL: u32 = 1;
pub const PLAYER_ATTACK: u32 = 20;

// XP and leveling
pub const XP_TO_LEVEL_UP: u32 = 40;
pub const ENEMY_XP_REWARD: u32 = 20;

// Enemy archetype
pub const ENEMY_NAME: &str = "Maze Ghoul";
pub const ENEMY_MAX_HEALTH: u32 = 50;
pub const ENEMY_ATTACK: u32 = 15;

// Probabilities
pub const ENCOUNTER_CHANCE: f64 = 0.1;
pub const ESCAPE_CHANCE: f64 = 0.5;

// Narration
pub const COMBAT_LOG_CAPACITY: usize = 3;
