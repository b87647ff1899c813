//! Tuning configuration.

use super::constants::*;
use super::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// All combat and encounter numbers.
///
/// Missing fields in a config file fall back to the compiled-in defaults, so
/// `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Probability per input tick that an encounter starts
    pub encounter_chance: f64,
    /// Probability that Run succeeds
    pub escape_chance: f64,

    pub player_max_health: u32,
    pub player_attack: u32,
    pub xp_to_level_up: u32,
    pub enemy_xp_reward: u32,

    pub enemy_max_health: u32,
    pub enemy_attack: u32,

    /// Delay before the enemy acts after a player action
    pub enemy_turn_delay_seconds: f64,
    /// Delay between victory (or escape) and returning to exploration
    pub victory_delay_seconds: f64,
    /// Delay between defeat and the combat restart
    pub defeat_restart_delay_seconds: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            encounter_chance: ENCOUNTER_CHANCE,
            escape_chance: ESCAPE_CHANCE,
            player_max_health: PLAYER_MAX_HEALTH,
            player_attack: PLAYER_ATTACK,
            xp_to_level_up: XP_TO_LEVEL_UP,
            enemy_xp_reward: ENEMY_XP_REWARD,
            enemy_max_health: ENEMY_MAX_HEALTH,
            enemy_attack: ENEMY_ATTACK,
            enemy_turn_delay_seconds: ENEMY_TURN_DELAY_SECONDS,
            victory_delay_seconds: VICTORY_DELAY_SECONDS,
            defeat_restart_delay_seconds: DEFEAT_RESTART_DELAY_SECONDS,
        }
    }
}

impl GameConfig {
    /// Loads a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| GameError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&contents).map_err(|source| GameError::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config");
        Ok(config)
    }

    /// Loads `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
