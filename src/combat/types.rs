use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    pub max_hp: u32,
    pub current_hp: u32,
    pub damage: u32,
}

impl Enemy {
    pub fn new(name: String, max_hp: u32, damage: u32) -> Self {
        Self {
            name,
            current_hp: max_hp,
            max_hp,
            damage,
        }
    }

    /// The single enemy archetype found in the maze.
    pub fn maze_ghoul(max_hp: u32, damage: u32) -> Self {
        Self::new(ENEMY_NAME.to_string(), max_hp, damage)
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::maze_ghoul(ENEMY_MAX_HEALTH, ENEMY_ATTACK)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnState {
    PlayerTurn,
    EnemyTurn,
    BattleOver,
}

/// The three choices offered to the player each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatAction {
    Fight,
    Guard,
    Run,
}

impl CombatAction {
    pub fn all() -> [CombatAction; 3] {
        [CombatAction::Fight, CombatAction::Guard, CombatAction::Run]
    }

    pub fn label(self) -> &'static str {
        match self {
            CombatAction::Fight => "Fight",
            CombatAction::Guard => "Guard",
            CombatAction::Run => "Run",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatLogEntry {
    pub message: String,
    pub is_player_action: bool,
}

/// Rolling narration buffer; only the newest entries are kept.
#[derive(Debug, Clone)]
pub struct CombatLog {
    entries: VecDeque<CombatLogEntry>,
    capacity: usize,
}

impl Default for CombatLog {
    fn default() -> Self {
        Self::with_capacity(COMBAT_LOG_CAPACITY)
    }
}

impl CombatLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn append(&mut self, message: impl Into<String>, is_player_action: bool) {
        if self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CombatLogEntry {
            message: message.into(),
            is_player_action,
        });
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &CombatLogEntry> {
        self.entries.iter()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
