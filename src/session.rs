//! Top-level play session: owns the progression store and switches between
//! exploration and combat.

use crate::combat::{CombatAction, CombatEvent, CombatStateMachine};
use crate::core::config::GameConfig;
use crate::exploration::EncounterTrigger;
use crate::progression::{PlayerProgression, Position, ProgressionStore, StatsSummary};
use rand::Rng;

/// A request from the core to switch presentation context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeTransition {
    EnterCombat,
    /// Back to the maze at the saved position
    ReturnToExploration { position: Position },
    /// Reload the battle from the saved progression with a fresh enemy
    RestartCombat,
}

#[derive(Debug, Clone)]
pub enum Mode {
    Exploration { position: Position },
    Combat(Box<CombatStateMachine>),
}

#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    store: ProgressionStore,
    encounter: EncounterTrigger,
    mode: Mode,
}

impl Session {
    pub fn new(config: GameConfig) -> Self {
        Self::with_store(config, ProgressionStore::new())
    }

    pub fn with_store(config: GameConfig, store: ProgressionStore) -> Self {
        let encounter = EncounterTrigger::new(config.encounter_chance);
        let position = store.last_position();
        Self {
            config,
            store,
            encounter,
            mode: Mode::Exploration { position },
        }
    }

    pub fn store(&self) -> &ProgressionStore {
        &self.store
    }

    pub fn progression(&self) -> PlayerProgression {
        self.store.get()
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn combat(&self) -> Option<&CombatStateMachine> {
        match &self.mode {
            Mode::Combat(machine) => Some(machine),
            Mode::Exploration { .. } => None,
        }
    }

    pub fn is_in_combat(&self) -> bool {
        self.combat().is_some()
    }

    /// Player position while exploring.
    pub fn exploration_position(&self) -> Option<Position> {
        match self.mode {
            Mode::Exploration { position } => Some(position),
            Mode::Combat(_) => None,
        }
    }

    /// Stats feed for the presentation layer. Mid-battle values come from the
    /// battle, which only writes them back to the store on a win or escape.
    pub fn stats(&self) -> StatsSummary {
        match &self.mode {
            Mode::Combat(machine) => machine.stats(),
            Mode::Exploration { .. } => self.store.get().stats(),
        }
    }

    /// One exploration tick. `position` is where the front end has put the
    /// player after processing this tick's input.
    pub fn exploration_tick<R: Rng>(
        &mut self,
        input_occurred: bool,
        position: Position,
        rng: &mut R,
    ) -> Option<ModeTransition> {
        let Mode::Exploration { position: current } = &mut self.mode else {
            return None;
        };
        *current = position;

        let transition = self
            .encounter
            .on_tick(input_occurred, position, &mut self.store, rng)?;
        self.apply(transition);
        Some(transition)
    }

    /// Forwards a player action to the battle. Outside combat this does nothing.
    pub fn combat_action<R: Rng>(&mut self, action: CombatAction, rng: &mut R) -> Vec<CombatEvent> {
        let Mode::Combat(machine) = &mut self.mode else {
            return Vec::new();
        };
        let events = machine.act(action, &mut self.store, rng);
        self.apply_transitions(&events);
        events
    }

    /// Advances the session clock by `delta_time` seconds.
    pub fn tick(&mut self, delta_time: f64) -> Vec<CombatEvent> {
        let Mode::Combat(machine) = &mut self.mode else {
            return Vec::new();
        };
        let events = machine.tick(delta_time);
        self.apply_transitions(&events);
        events
    }

    fn apply_transitions(&mut self, events: &[CombatEvent]) {
        for event in events {
            if let CombatEvent::Transition(transition) = event {
                self.apply(*transition);
            }
        }
    }

    fn apply(&mut self, transition: ModeTransition) {
        tracing::info!(?transition, "Mode transition");
        self.mode = match transition {
            ModeTransition::EnterCombat | ModeTransition::RestartCombat => Mode::Combat(Box::new(
                CombatStateMachine::start(&self.config, &self.store),
            )),
            ModeTransition::ReturnToExploration { .. } => Mode::Exploration {
                position: self.store.last_position(),
            },
        };
    }
}
