use crate::progression::{Position, ProgressionStore};
use crate::session::ModeTransition;
use rand::Rng;

/// Rolls for a random encounter on every input tick.
#[derive(Debug, Clone, Copy)]
pub struct EncounterTrigger {
    chance: f64,
}

impl EncounterTrigger {
    pub fn new(chance: f64) -> Self {
        Self { chance }
    }

    /// Processes one exploration tick.
    ///
    /// Only ticks with input roll. On a hit the current position is saved
    /// before the transition is returned, so returning from combat lands the
    /// player where the encounter started.
    pub fn on_tick<R: Rng>(
        &self,
        input_occurred: bool,
        position: Position,
        store: &mut ProgressionStore,
        rng: &mut R,
    ) -> Option<ModeTransition> {
        if !input_occurred {
            return None;
        }

        let roll: f64 = rng.gen();
        if roll >= self.chance {
            return None;
        }

        store.save_position(position);
        tracing::info!(%position, "Encounter started");
        Some(ModeTransition::EnterCombat)
    }
}
