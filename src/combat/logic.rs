use super::types::{CombatAction, CombatLog, Enemy, TurnState};
use crate::core::config::GameConfig;
use crate::core::constants::TIMER_EPSILON_SECONDS;
use crate::progression::{Position, ProgressionStore, StatsSummary};
use crate::session::ModeTransition;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack {
        damage: u32,
        enemy_hp: u32,
    },
    /// Player took the guard stance for the coming enemy turn
    Guarded,
    /// Enemy attack nullified by the guard stance
    AttackBlocked,
    EscapeSucceeded,
    EscapeFailed,
    EnemyAttack {
        damage: u32,
        player_hp: u32,
    },
    EnemyDefeated {
        xp_gained: u32,
    },
    LeveledUp {
        new_level: u32,
    },
    PlayerDefeated,
    /// The combat context is finished and asks the session to switch mode
    Transition(ModeTransition),
}

/// A continuation that fires once its delay has elapsed on the session clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resumption {
    EnemyResolution,
    ReturnToExploration,
    RestartCombat,
}

#[derive(Debug, Clone, Copy)]
struct PendingResumption {
    resumption: Resumption,
    elapsed: f64,
    delay: f64,
}

impl PendingResumption {
    fn is_due(&self) -> bool {
        self.elapsed + TIMER_EPSILON_SECONDS >= self.delay
    }
}

/// Turn-based battle against a single enemy.
///
/// Player actions are accepted only in [`TurnState::PlayerTurn`]. Every
/// accepted action either ends the battle or moves to
/// [`TurnState::EnemyTurn`] and arms the enemy resolution, which fires from
/// [`CombatStateMachine::tick`] after the configured delay. Terminal outcomes
/// arm a second resumption that hands control back to the session.
#[derive(Debug, Clone)]
pub struct CombatStateMachine {
    config: GameConfig,
    state: TurnState,
    guarding: bool,
    enemy: Enemy,
    level: u32,
    health: u32,
    experience: u32,
    position: Position,
    pending: Option<PendingResumption>,
    log: CombatLog,
}

impl CombatStateMachine {
    /// Starts a fresh battle, loading the player from the store.
    pub fn start(config: &GameConfig, store: &ProgressionStore) -> Self {
        let progression = store.get();
        let enemy = Enemy::maze_ghoul(config.enemy_max_health, config.enemy_attack);
        tracing::info!(
            enemy = %enemy.name,
            level = progression.level,
            health = progression.health,
            "Battle started"
        );

        let mut log = CombatLog::default();
        log.append(format!("A {} blocks the path!", enemy.name), false);

        Self {
            config: config.clone(),
            state: TurnState::PlayerTurn,
            guarding: false,
            enemy,
            level: progression.level,
            health: progression.health.min(config.player_max_health),
            experience: progression.experience,
            position: progression.last_position,
            pending: None,
            log,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn is_guarding(&self) -> bool {
        self.guarding
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn player_max_health(&self) -> u32 {
        self.config.player_max_health
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn stats(&self) -> StatsSummary {
        StatsSummary {
            level: self.level,
            health: self.health,
            experience: self.experience,
        }
    }

    pub fn log(&self) -> &CombatLog {
        &self.log
    }

    pub fn pending_resumption(&self) -> Option<Resumption> {
        self.pending.map(|p| p.resumption)
    }

    /// Dispatches a player action. Ignored outside the player's turn.
    pub fn act<R: Rng>(
        &mut self,
        action: CombatAction,
        store: &mut ProgressionStore,
        rng: &mut R,
    ) -> Vec<CombatEvent> {
        match action {
            CombatAction::Fight => self.fight(store),
            CombatAction::Guard => self.guard(),
            CombatAction::Run => self.run(store, rng),
        }
    }

    pub fn fight(&mut self, store: &mut ProgressionStore) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.state != TurnState::PlayerTurn {
            return events;
        }

        let damage = self.config.player_attack;
        self.enemy.take_damage(damage);
        events.push(CombatEvent::PlayerAttack {
            damage,
            enemy_hp: self.enemy.current_hp,
        });
        self.narrate(
            format!("You strike the {} for {} damage.", self.enemy.name, damage),
            true,
        );

        if !self.enemy.is_alive() {
            self.state = TurnState::BattleOver;
            let xp_gained = self.config.enemy_xp_reward;
            events.push(CombatEvent::EnemyDefeated { xp_gained });
            self.narrate(
                format!("The {} is defeated! +{} XP", self.enemy.name, xp_gained),
                false,
            );
            self.gain_experience(xp_gained, &mut events);
            self.victory(store, "Victory! Returning to the maze...");
        } else {
            self.begin_enemy_turn();
        }

        events
    }

    pub fn guard(&mut self) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.state != TurnState::PlayerTurn {
            return events;
        }

        self.guarding = true;
        events.push(CombatEvent::Guarded);
        self.narrate("You raise your guard.", true);
        self.begin_enemy_turn();
        events
    }

    pub fn run<R: Rng>(&mut self, store: &mut ProgressionStore, rng: &mut R) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        if self.state != TurnState::PlayerTurn {
            return events;
        }

        let roll: f64 = rng.gen();
        if roll < self.config.escape_chance {
            self.state = TurnState::BattleOver;
            store.save_position(self.position);
            events.push(CombatEvent::EscapeSucceeded);
            self.narrate("You escaped successfully!", true);
            self.victory(store, "Returning to the maze...");
        } else {
            events.push(CombatEvent::EscapeFailed);
            self.narrate("Failed to escape!", true);
            self.begin_enemy_turn();
        }

        events
    }

    /// Advances the armed resumption by `delta_time` seconds.
    ///
    /// At most one resumption fires per call; a resumption armed while
    /// firing starts with its full delay.
    pub fn tick(&mut self, delta_time: f64) -> Vec<CombatEvent> {
        let mut events = Vec::new();
        let Some(pending) = self.pending.as_mut() else {
            return events;
        };

        pending.elapsed += delta_time;
        if !pending.is_due() {
            return events;
        }

        let resumption = pending.resumption;
        self.pending = None;
        tracing::debug!(?resumption, "Resumption fired");

        match resumption {
            Resumption::EnemyResolution => self.resolve_enemy_turn(&mut events),
            Resumption::ReturnToExploration => {
                events.push(CombatEvent::Transition(ModeTransition::ReturnToExploration {
                    position: self.position,
                }));
            }
            Resumption::RestartCombat => {
                events.push(CombatEvent::Transition(ModeTransition::RestartCombat));
            }
        }

        events
    }

    fn begin_enemy_turn(&mut self) {
        self.state = TurnState::EnemyTurn;
        self.schedule(
            Resumption::EnemyResolution,
            self.config.enemy_turn_delay_seconds,
        );
    }

    fn resolve_enemy_turn(&mut self, events: &mut Vec<CombatEvent>) {
        if self.guarding {
            self.guarding = false;
            events.push(CombatEvent::AttackBlocked);
            self.narrate(
                format!("You block the {}'s attack! No damage taken.", self.enemy.name),
                false,
            );
            self.state = TurnState::PlayerTurn;
            return;
        }

        let damage = self.enemy.damage;
        self.health = self.health.saturating_sub(damage);
        events.push(CombatEvent::EnemyAttack {
            damage,
            player_hp: self.health,
        });
        self.narrate(
            format!("The {} hits you for {} damage.", self.enemy.name, damage),
            false,
        );

        if self.health == 0 {
            self.state = TurnState::BattleOver;
            events.push(CombatEvent::PlayerDefeated);
            self.defeat();
        } else {
            self.state = TurnState::PlayerTurn;
        }
    }

    fn gain_experience(&mut self, amount: u32, events: &mut Vec<CombatEvent>) {
        self.experience += amount;
        tracing::debug!(amount, total = self.experience, "Experience gained");

        // One level-up per grant, even if the surplus is still above the threshold
        if self.experience >= self.config.xp_to_level_up {
            self.level_up(events);
        }
    }

    fn level_up(&mut self, events: &mut Vec<CombatEvent>) {
        self.level += 1;
        self.experience -= self.config.xp_to_level_up;
        self.health = self.config.player_max_health;
        events.push(CombatEvent::LeveledUp {
            new_level: self.level,
        });
        self.narrate(
            format!(
                "Level up! You reached level {}. HP restored to {}.",
                self.level, self.health
            ),
            false,
        );
    }

    fn victory(&mut self, store: &mut ProgressionStore, message: &str) {
        store.save(self.level, self.health, self.experience);
        self.narrate(message, false);
        tracing::info!(
            level = self.level,
            health = self.health,
            experience = self.experience,
            "Battle won"
        );
        self.schedule(
            Resumption::ReturnToExploration,
            self.config.victory_delay_seconds,
        );
    }

    fn defeat(&mut self) {
        self.narrate("You have been defeated... Restarting.", false);
        tracing::info!(level = self.level, "Player defeated");
        self.schedule(
            Resumption::RestartCombat,
            self.config.defeat_restart_delay_seconds,
        );
    }

    fn schedule(&mut self, resumption: Resumption, delay: f64) {
        tracing::debug!(?resumption, delay, "Resumption armed");
        self.pending = Some(PendingResumption {
            resumption,
            elapsed: 0.0,
            delay,
        });
    }

    fn narrate(&mut self, message: impl Into<String>, is_player_action: bool) {
        let message = message.into();
        tracing::info!(target: "narration", "{}", message);
        self.log.append(message, is_player_action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::PlayerProgression;
    use crate::test_support::ScriptedRng;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn new_battle() -> (CombatStateMachine, ProgressionStore) {
        let store = ProgressionStore::new();
        let machine = CombatStateMachine::start(&GameConfig::default(), &store);
        (machine, store)
    }

    fn battle_with(progression: PlayerProgression) -> (CombatStateMachine, ProgressionStore) {
        let store = ProgressionStore::with_progression(progression);
        let machine = CombatStateMachine::start(&GameConfig::default(), &store);
        (machine, store)
    }

    /// Runs the clock until the armed enemy resolution fires.
    fn finish_enemy_turn(machine: &mut CombatStateMachine) -> Vec<CombatEvent> {
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::EnemyResolution)
        );
        machine.tick(1.0)
    }

    #[test]
    fn test_start_loads_progression() {
        let (machine, _) = battle_with(PlayerProgression {
            level: 3,
            health: 70,
            experience: 10,
            last_position: Position::new(2, 5),
        });
        assert_eq!(machine.state(), TurnState::PlayerTurn);
        assert_eq!(machine.stats().level, 3);
        assert_eq!(machine.stats().health, 70);
        assert_eq!(machine.stats().experience, 10);
        assert_eq!(machine.position(), Position::new(2, 5));
        assert_eq!(machine.enemy().current_hp, 50);
        assert!(!machine.is_guarding());
        assert!(machine.pending_resumption().is_none());
    }

    #[test]
    fn test_fight_damages_enemy_and_arms_enemy_turn() {
        let (mut machine, mut store) = new_battle();
        let events = machine.fight(&mut store);

        assert_eq!(
            events,
            vec![CombatEvent::PlayerAttack {
                damage: 20,
                enemy_hp: 30
            }]
        );
        assert_eq!(machine.enemy().current_hp, 30);
        assert_eq!(machine.state(), TurnState::EnemyTurn);
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::EnemyResolution)
        );
    }

    #[test]
    fn test_enemy_health_drops_by_attack_each_fight() {
        let (mut machine, mut store) = new_battle();
        let mut previous = machine.enemy().current_hp;

        for _ in 0..2 {
            machine.fight(&mut store);
            assert_eq!(machine.enemy().current_hp, previous - 20);
            previous = machine.enemy().current_hp;
            finish_enemy_turn(&mut machine);
        }
    }

    #[test]
    fn test_actions_ignored_during_enemy_turn() {
        let (mut machine, mut store) = new_battle();
        let mut rng = ScriptedRng::new(&[0.0]);
        machine.fight(&mut store);

        let hp = machine.enemy().current_hp;
        assert!(machine.fight(&mut store).is_empty());
        assert!(machine.guard().is_empty());
        assert!(machine.run(&mut store, &mut rng).is_empty());

        assert_eq!(machine.enemy().current_hp, hp);
        assert!(!machine.is_guarding());
        assert_eq!(machine.state(), TurnState::EnemyTurn);
        assert_eq!(store.get(), PlayerProgression::default());
    }

    #[test]
    fn test_actions_ignored_after_battle_over() {
        let (mut machine, mut store) = new_battle();
        let mut rng = ScriptedRng::new(&[0.0]);
        machine.run(&mut store, &mut rng);
        assert_eq!(machine.state(), TurnState::BattleOver);

        assert!(machine.fight(&mut store).is_empty());
        assert!(machine.guard().is_empty());
        assert!(machine.run(&mut store, &mut rng).is_empty());
        assert_eq!(machine.enemy().current_hp, 50);
    }

    #[test]
    fn test_enemy_resolution_waits_for_delay() {
        let (mut machine, mut store) = new_battle();
        machine.fight(&mut store);

        assert!(machine.tick(0.5).is_empty());
        assert_eq!(machine.state(), TurnState::EnemyTurn);
        assert_eq!(machine.stats().health, 100);

        let events = machine.tick(0.5);
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                damage: 15,
                player_hp: 85
            }]
        );
        assert_eq!(machine.state(), TurnState::PlayerTurn);
        assert!(machine.pending_resumption().is_none());
    }

    /// Ticks at the front end's 100ms rate until just before `delay`, then
    /// returns the events of the tick that completes it.
    fn tick_through_delay(machine: &mut CombatStateMachine, delay: f64) -> Vec<CombatEvent> {
        let steps = (delay / 0.1).round() as usize;
        for step in 1..steps {
            assert!(
                machine.tick(0.1).is_empty(),
                "fired early at step {} of {}",
                step,
                steps
            );
        }
        machine.tick(0.1)
    }

    #[test]
    fn test_enemy_resolution_fires_after_ten_small_ticks() {
        let (mut machine, mut store) = new_battle();
        machine.fight(&mut store);

        let events = tick_through_delay(&mut machine, 1.0);
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                damage: 15,
                player_hp: 85
            }]
        );
        assert_eq!(machine.state(), TurnState::PlayerTurn);
    }

    #[test]
    fn test_victory_return_fires_after_small_ticks() {
        let (mut machine, mut store) = new_battle();
        let mut rng = ScriptedRng::new(&[0.0]);
        machine.run(&mut store, &mut rng);

        let events = tick_through_delay(&mut machine, 3.0);
        assert!(matches!(
            events.as_slice(),
            [CombatEvent::Transition(ModeTransition::ReturnToExploration { .. })]
        ));
        assert!(machine.pending_resumption().is_none());
    }

    #[test]
    fn test_defeat_restart_fires_after_small_ticks() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            health: 15,
            ..PlayerProgression::default()
        });
        machine.fight(&mut store);
        let events = tick_through_delay(&mut machine, 1.0);
        assert!(events.contains(&CombatEvent::PlayerDefeated));

        let events = tick_through_delay(&mut machine, 2.0);
        assert_eq!(
            events,
            vec![CombatEvent::Transition(ModeTransition::RestartCombat)]
        );
    }

    #[test]
    fn test_tick_without_pending_is_noop() {
        let (mut machine, _) = new_battle();
        assert!(machine.tick(10.0).is_empty());
        assert_eq!(machine.state(), TurnState::PlayerTurn);
    }

    #[test]
    fn test_guard_blocks_exactly_one_attack() {
        let (mut machine, mut store) = new_battle();

        let events = machine.guard();
        assert_eq!(events, vec![CombatEvent::Guarded]);
        assert!(machine.is_guarding());
        assert_eq!(machine.state(), TurnState::EnemyTurn);

        let events = finish_enemy_turn(&mut machine);
        assert_eq!(events, vec![CombatEvent::AttackBlocked]);
        assert!(!machine.is_guarding());
        assert_eq!(machine.stats().health, 100);
        assert_eq!(machine.state(), TurnState::PlayerTurn);

        machine.fight(&mut store);
        let events = finish_enemy_turn(&mut machine);
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                damage: 15,
                player_hp: 85
            }]
        );
    }

    #[test]
    fn test_guard_has_no_immediate_effect_on_health() {
        let (mut machine, _) = battle_with(PlayerProgression {
            health: 40,
            ..PlayerProgression::default()
        });
        machine.guard();
        assert_eq!(machine.stats().health, 40);
        assert_eq!(machine.enemy().current_hp, 50);
    }

    #[test]
    fn test_fight_kills_enemy_and_wins() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            last_position: Position::new(6, 1),
            ..PlayerProgression::default()
        });

        machine.fight(&mut store);
        finish_enemy_turn(&mut machine);
        machine.fight(&mut store);
        finish_enemy_turn(&mut machine);
        let events = machine.fight(&mut store);

        assert_eq!(
            events,
            vec![
                CombatEvent::PlayerAttack {
                    damage: 20,
                    enemy_hp: 0
                },
                CombatEvent::EnemyDefeated { xp_gained: 20 },
            ]
        );
        assert_eq!(machine.state(), TurnState::BattleOver);
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::ReturnToExploration)
        );

        // Victory persists the stats right away
        let saved = store.get();
        assert_eq!(saved.level, 1);
        assert_eq!(saved.health, 70);
        assert_eq!(saved.experience, 20);

        assert!(machine.tick(2.9).is_empty());
        let events = machine.tick(0.1);
        assert_eq!(
            events,
            vec![CombatEvent::Transition(ModeTransition::ReturnToExploration {
                position: Position::new(6, 1)
            })]
        );
        assert!(machine.pending_resumption().is_none());
    }

    #[test]
    fn test_kill_with_banked_xp_levels_up() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            experience: 20,
            health: 40,
            ..PlayerProgression::default()
        });

        for _ in 0..2 {
            machine.fight(&mut store);
            finish_enemy_turn(&mut machine);
        }
        let events = machine.fight(&mut store);

        assert!(events.contains(&CombatEvent::LeveledUp { new_level: 2 }));
        let saved = store.get();
        assert_eq!(saved.level, 2);
        assert_eq!(saved.experience, 0);
        assert_eq!(saved.health, 100);
    }

    #[test]
    fn test_two_grants_reach_exactly_one_level_up() {
        let (mut machine, _) = new_battle();
        let mut events = Vec::new();

        machine.gain_experience(20, &mut events);
        assert_eq!(machine.stats().level, 1);
        assert_eq!(machine.stats().experience, 20);
        assert!(events.is_empty());

        machine.gain_experience(20, &mut events);
        assert_eq!(events, vec![CombatEvent::LeveledUp { new_level: 2 }]);
        assert_eq!(machine.stats().level, 2);
        assert_eq!(machine.stats().experience, 0);
        assert_eq!(machine.stats().health, 100);
    }

    #[test]
    fn test_level_up_keeps_overflow_experience() {
        let (mut machine, _) = battle_with(PlayerProgression {
            experience: 30,
            ..PlayerProgression::default()
        });
        let mut events = Vec::new();
        machine.gain_experience(20, &mut events);
        assert_eq!(machine.stats().level, 2);
        assert_eq!(machine.stats().experience, 10);
    }

    #[test]
    fn test_large_grant_levels_up_only_once() {
        let (mut machine, _) = new_battle();
        let mut events = Vec::new();
        machine.gain_experience(100, &mut events);

        assert_eq!(events.len(), 1);
        assert_eq!(machine.stats().level, 2);
        // Surplus stays above the threshold until the next grant
        assert_eq!(machine.stats().experience, 60);
    }

    #[test]
    fn test_run_success_saves_and_returns() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            health: 55,
            last_position: Position::new(9, 9),
            ..PlayerProgression::default()
        });
        store.save_position(Position::ORIGIN);
        let mut rng = ScriptedRng::new(&[0.2]);

        let events = machine.run(&mut store, &mut rng);
        assert_eq!(events, vec![CombatEvent::EscapeSucceeded]);
        assert_eq!(machine.state(), TurnState::BattleOver);
        assert_eq!(store.last_position(), Position::new(9, 9));
        assert_eq!(store.get().health, 55);
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::ReturnToExploration)
        );

        let events = machine.tick(3.0);
        assert!(matches!(
            events.as_slice(),
            [CombatEvent::Transition(ModeTransition::ReturnToExploration { .. })]
        ));
    }

    #[test]
    fn test_run_failure_passes_turn_to_enemy() {
        let (mut machine, mut store) = new_battle();
        let mut rng = ScriptedRng::new(&[0.5]);

        let events = machine.run(&mut store, &mut rng);
        assert_eq!(events, vec![CombatEvent::EscapeFailed]);
        assert_eq!(machine.state(), TurnState::EnemyTurn);
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::EnemyResolution)
        );

        let events = finish_enemy_turn(&mut machine);
        assert_eq!(
            events,
            vec![CombatEvent::EnemyAttack {
                damage: 15,
                player_hp: 85
            }]
        );
    }

    #[test]
    fn test_run_escape_rate_is_half() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let trials = 10_000;
        let mut escapes = 0;

        for _ in 0..trials {
            let (mut machine, mut store) = new_battle();
            let events = machine.run(&mut store, &mut rng);
            if events == vec![CombatEvent::EscapeSucceeded] {
                escapes += 1;
            } else {
                assert_eq!(machine.state(), TurnState::EnemyTurn);
            }
        }

        let rate = escapes as f64 / trials as f64;
        assert!((0.47..0.53).contains(&rate), "escape rate {}", rate);
    }

    #[test]
    fn test_defeat_schedules_restart_without_saving() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            level: 2,
            health: 15,
            experience: 5,
            ..PlayerProgression::default()
        });
        let before = store.get();

        machine.fight(&mut store);
        let events = finish_enemy_turn(&mut machine);

        assert_eq!(
            events,
            vec![
                CombatEvent::EnemyAttack {
                    damage: 15,
                    player_hp: 0
                },
                CombatEvent::PlayerDefeated,
            ]
        );
        assert_eq!(machine.stats().health, 0);
        assert_eq!(machine.state(), TurnState::BattleOver);
        assert_eq!(
            machine.pending_resumption(),
            Some(Resumption::RestartCombat)
        );
        assert_eq!(store.get(), before);

        assert!(machine.tick(1.5).is_empty());
        let events = machine.tick(0.5);
        assert_eq!(
            events,
            vec![CombatEvent::Transition(ModeTransition::RestartCombat)]
        );
    }

    #[test]
    fn test_overkill_damage_saturates_health() {
        let (mut machine, mut store) = battle_with(PlayerProgression {
            health: 5,
            ..PlayerProgression::default()
        });
        machine.fight(&mut store);
        let events = finish_enemy_turn(&mut machine);
        assert!(events.contains(&CombatEvent::PlayerDefeated));
        assert_eq!(machine.stats().health, 0);
    }

    #[test]
    fn test_guard_prevents_lethal_hit() {
        let (mut machine, _) = battle_with(PlayerProgression {
            health: 15,
            ..PlayerProgression::default()
        });
        machine.guard();
        finish_enemy_turn(&mut machine);
        assert_eq!(machine.stats().health, 15);
        assert_eq!(machine.state(), TurnState::PlayerTurn);
    }

    #[test]
    fn test_narration_log_stays_bounded() {
        let (mut machine, mut store) = new_battle();
        assert_eq!(machine.log().len(), 1);

        for _ in 0..2 {
            machine.fight(&mut store);
            finish_enemy_turn(&mut machine);
            assert!(machine.log().len() <= 3);
        }
        machine.fight(&mut store);

        let messages = machine.log().messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2], "Victory! Returning to the maze...");
        assert!(messages[1].contains("defeated"));
    }

    #[test]
    fn test_act_dispatches() {
        let (mut machine, mut store) = new_battle();
        let mut rng = ScriptedRng::new(&[0.9]);
        let events = machine.act(CombatAction::Guard, &mut store, &mut rng);
        assert_eq!(events, vec![CombatEvent::Guarded]);
    }

    #[test]
    fn test_custom_config_numbers() {
        let config = GameConfig {
            player_attack: 50,
            enemy_xp_reward: 40,
            ..GameConfig::default()
        };
        let mut store = ProgressionStore::new();
        let mut machine = CombatStateMachine::start(&config, &store);

        let events = machine.fight(&mut store);
        assert!(events.contains(&CombatEvent::EnemyDefeated { xp_gained: 40 }));
        assert!(events.contains(&CombatEvent::LeveledUp { new_level: 2 }));
    }
}
