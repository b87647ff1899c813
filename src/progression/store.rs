use super::types::{PlayerProgression, Position};

/// The session's single progression record.
///
/// A [`crate::session::Session`] owns exactly one store and lends it to the
/// exploration and combat contexts, so there is no global instance.
#[derive(Debug, Clone, Default)]
pub struct ProgressionStore {
    progression: PlayerProgression,
}

impl ProgressionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_progression(progression: PlayerProgression) -> Self {
        Self { progression }
    }

    pub fn get(&self) -> PlayerProgression {
        tracing::debug!(
            level = self.progression.level,
            health = self.progression.health,
            experience = self.progression.experience,
            "Player stats retrieved"
        );
        self.progression
    }

    /// Overwrites level, health and experience. Position is untouched.
    pub fn save(&mut self, level: u32, health: u32, experience: u32) {
        self.progression.level = level;
        self.progression.health = health;
        self.progression.experience = experience;
        tracing::debug!(level, health, experience, "Player stats saved");
    }

    pub fn save_position(&mut self, position: Position) {
        self.progression.last_position = position;
        tracing::debug!(%position, "Player position saved");
    }

    pub fn last_position(&self) -> Position {
        self.progression.last_position
    }
}
