//! Game loop running the fixed turn pipeline:
//! - Update: player, enemies, items report status; bosses heal
//! - EnemyAction: living enemies act against the player
//! - Collection: items under the player are picked up
//! - SurvivalCheck: a dead player ends the run
//! - Movement: the player takes one random step
//!
//! The loop exclusively owns every entity and the run's only `SimRng`, so a
//! given seed always produces the same trace.

use combat::Combat;
use entities::{Character, Enemy, GameObject, Item, Movable, Player, Position, SimRng};
use error::SimError;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{Scenario, SimConfig, SpawnPolicy};
use crate::event_bus::{EventBus, GameEvent};
use crate::renderer::Renderer;
use crate::turn_system::{FinishReason, TurnPhase, TurnState, TurnSystem};

/// Final report of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub seed: u64,
    pub turns_played: u32,
    pub finish_reason: FinishReason,
    pub final_score: i32,
    pub final_health: i32,
    pub items_collected: u32,
    pub items_remaining: usize,
    pub enemies_remaining: usize,
}

/// What happened during one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    pub turn: u32,
    /// Health the player lost in the action phase.
    pub damage_taken: i32,
    /// Health bosses regained in the update phase.
    pub boss_healing: i32,
    pub spawned: usize,
    /// Names of items picked up, in collection order.
    pub collected: Vec<String>,
    /// Player position after movement; `None` when the player died.
    pub moved_to: Option<Position>,
    pub player_died: bool,
}

pub struct GameLoop {
    player: Player,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    rng: SimRng,
    config: SimConfig,
    turn_system: TurnSystem,
    event_bus: EventBus,
    items_collected: u32,
}

impl GameLoop {
    pub fn new(player: Player, enemies: Vec<Enemy>, items: Vec<Item>, config: SimConfig) -> Self {
        Self {
            player,
            enemies,
            items,
            rng: SimRng::new(config.seed),
            turn_system: TurnSystem::new(config.max_turns),
            config,
            event_bus: EventBus::new(),
            items_collected: 0,
        }
    }

    /// Build from a scenario. `config.max_turns` wins over `scenario.turns`.
    pub fn from_scenario(scenario: Scenario, config: SimConfig) -> Self {
        Self::new(scenario.player, scenario.enemies, scenario.items, config)
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn state(&self) -> TurnState {
        self.turn_system.state()
    }

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.event_bus.drain()
    }

    /// Run to completion, keeping every event on the bus.
    pub fn run(&mut self) -> Result<GameSummary, SimError> {
        while !self.turn_system.is_finished() {
            self.step()?;
        }
        self.summary()
    }

    /// Run to completion, handing events to `renderer` after every turn.
    pub fn run_with<R: Renderer + ?Sized>(
        &mut self,
        renderer: &mut R,
    ) -> Result<GameSummary, SimError> {
        while !self.turn_system.is_finished() {
            self.step()?;
            for event in self.event_bus.drain() {
                renderer.render(&event)?;
            }
        }
        let summary = self.summary()?;
        renderer.finish(&summary)?;
        Ok(summary)
    }

    /// Play one turn. Starts the run on first call.
    pub fn step(&mut self) -> Result<TurnOutcome, SimError> {
        if self.turn_system.state() == TurnState::NotStarted {
            self.start()?;
            if self.turn_system.is_finished() {
                self.publish_end()?;
                return Ok(TurnOutcome::default());
            }
        }

        let turn = self
            .turn_system
            .current_turn()
            .ok_or_else(|| SimError::invalid_transition(self.turn_system.state(), "next turn"))?;
        let mut outcome = TurnOutcome {
            turn,
            ..TurnOutcome::default()
        };
        self.event_bus.publish(GameEvent::TurnStarted { turn });
        debug!(turn, "turn started");

        self.turn_system.enter_phase(TurnPhase::Update)?;
        outcome.boss_healing = self.update_phase();

        self.turn_system.enter_phase(TurnPhase::EnemyAction)?;
        let health_before = self.player.health;
        outcome.spawned = self.enemy_action_phase();
        outcome.damage_taken = health_before.saturating_sub(self.player.health);

        self.turn_system.enter_phase(TurnPhase::Collection)?;
        outcome.collected = self.collection_phase();

        self.turn_system.enter_phase(TurnPhase::SurvivalCheck)?;
        if !self.player.is_alive() {
            info!(turn, health = self.player.health, "player died");
            self.event_bus.publish(GameEvent::PlayerDied {
                name: self.player.name.clone(),
                turn,
            });
            self.turn_system.finish_player_died()?;
            outcome.player_died = true;
            self.publish_end()?;
            return Ok(outcome);
        }

        self.turn_system.enter_phase(TurnPhase::Movement)?;
        outcome.moved_to = Some(self.movement_phase());

        self.turn_system.end_turn()?;
        if self.turn_system.is_finished() {
            self.publish_end()?;
        }
        Ok(outcome)
    }

    /// Final report. Fails until the run has finished.
    pub fn summary(&self) -> Result<GameSummary, SimError> {
        let finish_reason = self
            .turn_system
            .finish_reason()
            .ok_or_else(|| SimError::invalid_transition(self.turn_system.state(), "summary"))?;
        Ok(GameSummary {
            seed: self.rng.seed(),
            turns_played: self.turn_system.turns_played(),
            finish_reason,
            final_score: self.player.score,
            final_health: self.player.health,
            items_collected: self.items_collected,
            items_remaining: self.items.len(),
            enemies_remaining: self.enemies.len(),
        })
    }

    fn start(&mut self) -> Result<(), SimError> {
        self.turn_system.start()?;
        info!(
            seed = self.config.seed,
            max_turns = self.turn_system.max_turns(),
            enemies = self.enemies.len(),
            items = self.items.len(),
            "game started"
        );
        self.event_bus.publish(GameEvent::GameStarted {
            seed: self.config.seed,
            max_turns: self.turn_system.max_turns(),
        });
        Ok(())
    }

    fn publish_end(&mut self) -> Result<(), SimError> {
        let summary = self.summary()?;
        info!(
            reason = %summary.finish_reason,
            turns = summary.turns_played,
            score = summary.final_score,
            health = summary.final_health,
            events = self.event_bus.total_published(),
            "game ended"
        );
        self.event_bus.publish(GameEvent::GameEnded {
            reason: summary.finish_reason,
            turns_played: summary.turns_played,
            final_score: summary.final_score,
            final_health: summary.final_health,
        });
        Ok(())
    }

    fn publish_status<T: GameObject>(bus: &mut EventBus, entity: &T) {
        for message in entity.update() {
            bus.publish(GameEvent::Status {
                kind: entity.kind(),
                name: entity.name().to_string(),
                message,
            });
        }
    }

    /// Returns total boss healing.
    fn update_phase(&mut self) -> i32 {
        Self::publish_status(&mut self.event_bus, &self.player);

        let mut healed = 0;
        for enemy in &mut self.enemies {
            Self::publish_status(&mut self.event_bus, &*enemy);
            if enemy.is_boss() {
                let result = Combat::heal_self(enemy, &mut self.rng);
                healed = result.healed.saturating_add(healed);
                for message in result.logs {
                    self.event_bus.publish(GameEvent::Combat {
                        actor: enemy.name.clone(),
                        message,
                    });
                }
            }
        }

        for item in &self.items {
            Self::publish_status(&mut self.event_bus, item);
        }
        healed
    }

    /// Returns the number of enemies spawned.
    fn enemy_action_phase(&mut self) -> usize {
        let policy = self.config.spawn_policy;
        let roster_at_start = self.enemies.len();
        let mut pending: Vec<Enemy> = Vec::new();
        let mut spawned = 0;

        let mut idx = 0;
        loop {
            let bound = match policy {
                SpawnPolicy::Deferred => roster_at_start,
                SpawnPolicy::Live => self.enemies.len(),
            };
            if idx >= bound {
                break;
            }

            let enemy = &self.enemies[idx];
            idx += 1;
            if !enemy.is_alive() {
                continue;
            }

            let roster_len = self.enemies.len() + pending.len();
            let result = Combat::enemy_turn(enemy, &mut self.player, &mut self.rng, roster_len);
            for message in result.logs {
                self.event_bus.publish(GameEvent::Combat {
                    actor: enemy.name.clone(),
                    message,
                });
            }

            spawned += result.spawned.len();
            match policy {
                SpawnPolicy::Deferred => pending.extend(result.spawned),
                SpawnPolicy::Live => self.enemies.extend(result.spawned),
            }
        }

        self.enemies.append(&mut pending);
        debug!(spawned, roster = self.enemies.len(), "enemy action phase done");
        spawned
    }

    /// Returns names of collected items.
    fn collection_phase(&mut self) -> Vec<String> {
        let here = self.player.position;
        let (collected, remaining): (Vec<Item>, Vec<Item>) = std::mem::take(&mut self.items)
            .into_iter()
            .partition(|item| item.is_at(here));
        self.items = remaining;

        let mut names = Vec::with_capacity(collected.len());
        for item in collected {
            let score = self.player.collect(&item);
            self.items_collected += 1;
            debug!(item = %item.name, value = item.value, score, "item collected");
            self.event_bus.publish(GameEvent::ItemCollected {
                item: item.name.clone(),
                value: item.value,
                score,
            });
            names.push(item.name);
        }
        names
    }

    fn movement_phase(&mut self) -> Position {
        let dx = self.rng.step();
        let dy = self.rng.step();
        let position = self.player.move_by(dx, dy);
        self.event_bus.publish(GameEvent::PlayerMoved {
            name: self.player.name.clone(),
            position,
        });
        position
    }
}
