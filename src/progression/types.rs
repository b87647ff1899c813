use crate::core::constants::{PLAYER_MAX_HEALTH, PLAYER_START_LEVEL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A cell in the exploration maze.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Player attributes that outlive a single combat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgression {
    pub level: u32,
    pub health: u32,
    pub experience: u32,
    pub last_position: Position,
}

impl Default for PlayerProgression {
    fn default() -> Self {
        Self {
            level: PLAYER_START_LEVEL,
            health: PLAYER_MAX_HEALTH,
            experience: 0,
            last_position: Position::ORIGIN,
        }
    }
}

impl PlayerProgression {
    pub fn stats(&self) -> StatsSummary {
        StatsSummary {
            level: self.level,
            health: self.health,
            experience: self.experience,
        }
    }
}

/// The level/HP/XP display feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub level: u32,
    pub health: u32,
    pub experience: u32,
}

impl fmt::Display for StatsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<8}{:<6}{:<6}{}", "Player", "Lvl", "HP", "Exp")?;
        write!(
            f,
            "{:<8}{:<6}{:<6}{}",
            "", self.level, self.health, self.experience
        )
    }
}
