//! Builders for deterministic game setups shared by the integration tests.

#![allow(dead_code)]

use turn_sim::{BossAbilities, Enemy, GameLoop, Item, Player, SimConfig, SpawnPolicy};

/// Builder for test games with a fixed seed
pub struct TestGameBuilder {
    player: Player,
    enemies: Vec<Enemy>,
    items: Vec<Item>,
    config: SimConfig,
}

impl TestGameBuilder {
    pub fn new(seed: u64, turns: u32) -> Self {
        Self {
            player: Player::new("Test Player", 0, 0, 100),
            enemies: Vec::new(),
            items: Vec::new(),
            config: SimConfig::new(turns, seed),
        }
    }

    pub fn with_player(mut self, x: i32, y: i32, health: i32) -> Self {
        self.player = Player::new("Test Player", x, y, health);
        self
    }

    pub fn with_enemy(mut self, enemy: Enemy) -> Self {
        self.enemies.push(enemy);
        self
    }

    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.config = self.config.with_spawn_policy(policy);
        self
    }

    pub fn build(self) -> GameLoop {
        GameLoop::new(self.player, self.enemies, self.items, self.config)
    }
}

/// Boss that summons every turn and never special-attacks or heals.
pub fn summoning_boss(minion_damage: i32) -> Enemy {
    Enemy::new("Summoner", 5, 5, 80, 0).with_abilities(BossAbilities {
        special_threshold: 101,
        summon_threshold: 0,
        heal_max: 0,
        minion_damage,
        ..BossAbilities::default()
    })
}
