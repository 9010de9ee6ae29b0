//! Run configuration and scenario loading.
//!
//! A `Scenario` is the initial world (player, items, enemies, turn budget),
//! loadable from JSON. `SimConfig` holds the knobs for a single run.

use std::fs;
use std::path::Path;

use entities::{BossAbilities, Enemy, Item, Player};
use error::SimError;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

pub const DEFAULT_TURNS: u32 = 15;

/// When enemies summoned during the action phase first get to act.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SpawnPolicy {
    /// Iterate the roster as it stood at phase start; minions are merged
    /// after the phase and act from the next turn.
    #[default]
    Deferred,
    /// Iterate the growing roster; minions may act in the phase that
    /// spawned them.
    Live,
}

/// Knobs for a single run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    pub max_turns: u32,
    pub seed: u64,
    pub spawn_policy: SpawnPolicy,
}

impl SimConfig {
    pub fn new(max_turns: u32, seed: u64) -> Self {
        Self {
            max_turns,
            seed,
            spawn_policy: SpawnPolicy::default(),
        }
    }

    pub fn with_spawn_policy(mut self, spawn_policy: SpawnPolicy) -> Self {
        self.spawn_policy = spawn_policy;
        self
    }
}

impl Default for SimConfig {
    /// Default budget with a freshly drawn seed.
    fn default() -> Self {
        Self::new(DEFAULT_TURNS, rand::random())
    }
}

fn default_turns() -> u32 {
    DEFAULT_TURNS
}

/// Initial world for a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub player: Player,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub enemies: Vec<Enemy>,
    #[serde(default = "default_turns")]
    pub turns: u32,
}

impl Scenario {
    pub fn from_json_str(json: &str) -> Result<Self, SimError> {
        let scenario: Scenario = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_pretty(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject worlds the simulation cannot run meaningfully.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.turns == 0 {
            return Err(SimError::invalid_scenario("turn budget must be at least 1"));
        }
        if self.player.name.trim().is_empty() {
            return Err(SimError::invalid_scenario("player needs a name"));
        }
        if self.player.health <= 0 {
            return Err(SimError::invalid_scenario(format!(
                "player {} starts dead (health {})",
                self.player.name, self.player.health
            )));
        }
        if self.player.score < 0 {
            return Err(SimError::invalid_scenario("player score cannot start negative"));
        }
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(SimError::invalid_scenario("item needs a name"));
            }
            // Negative values would let the score go down.
            if item.value < 0 {
                return Err(SimError::invalid_scenario(format!(
                    "item {} has negative value {}",
                    item.name, item.value
                )));
            }
        }
        for enemy in &self.enemies {
            if enemy.name.trim().is_empty() {
                return Err(SimError::invalid_scenario("enemy needs a name"));
            }
            if let Some(abilities) = enemy.abilities() {
                if abilities.heal_max < 0 {
                    return Err(SimError::invalid_scenario(format!(
                        "boss {} has negative heal_max",
                        enemy.name
                    )));
                }
                if abilities.summon_amount > BossAbilities::MAX_SUMMON_AMOUNT {
                    return Err(SimError::invalid_scenario(format!(
                        "boss {} summons {} at once, at most {} allowed",
                        enemy.name,
                        abilities.summon_amount,
                        BossAbilities::MAX_SUMMON_AMOUNT
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for Scenario {
    /// One player, two swords and a trash can with a boss big brother.
    fn default() -> Self {
        Self {
            player: Player::new("Player", 1, 2, 250),
            items: vec![
                Item::new("Crooked sword", 2, 2, 20),
                Item::new("Great sword", 1, 5, 45),
            ],
            enemies: vec![
                Enemy::new("Trash can", 4, 4, 25, 0),
                Enemy::boss("Trash can on legs", 4, 4, 80, 8),
            ],
            turns: DEFAULT_TURNS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_default_scenario_is_valid() {
        let scenario = Scenario::default();
        scenario.validate().unwrap();
        assert_eq!(scenario.enemies.iter().filter(|e| e.is_boss()).count(), 1);
        assert_eq!(scenario.turns, 15);
    }

    #[test]
    fn test_minimal_json() {
        let scenario = Scenario::from_json_str(
            r#"{"player":{"name":"Hero","x":0,"y":0,"health":10}}"#,
        )
        .unwrap();
        assert!(scenario.items.is_empty());
        assert!(scenario.enemies.is_empty());
        assert_eq!(scenario.turns, DEFAULT_TURNS);
        assert_eq!(scenario.player.score, 0);
    }

    #[test]
    fn test_boss_defaults_from_json() {
        let scenario = Scenario::from_json_str(
            r#"{
                "player": {"name": "Hero", "x": 0, "y": 0, "health": 10},
                "enemies": [{"name": "Ogre", "x": 1, "y": 1, "health": 80, "damage": 8, "boss": {}}],
                "turns": 3
            }"#,
        )
        .unwrap();
        assert_eq!(scenario.enemies[0].abilities(), Some(&BossAbilities::default()));
    }

    #[test]
    fn test_rejects_bad_scenarios() {
        let mut scenario = Scenario::default();
        scenario.turns = 0;
        assert!(matches!(scenario.validate(), Err(SimError::InvalidScenario(_))));

        let mut scenario = Scenario::default();
        scenario.player.health = 0;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::default();
        scenario.items[0].value = -1;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::default();
        scenario.enemies[1].boss.as_mut().unwrap().heal_max = -1;
        assert!(scenario.validate().is_err());

        let mut scenario = Scenario::default();
        scenario.enemies[1].boss.as_mut().unwrap().summon_amount = u32::MAX;
        assert!(matches!(scenario.validate(), Err(SimError::InvalidScenario(_))));
        scenario.enemies[1].boss.as_mut().unwrap().summon_amount =
            BossAbilities::MAX_SUMMON_AMOUNT;
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_spawn_policy_names() {
        assert_eq!(SpawnPolicy::from_str("live").unwrap(), SpawnPolicy::Live);
        assert_eq!(SpawnPolicy::Deferred.to_string(), "deferred");
        assert_eq!(SimConfig::default().spawn_policy, SpawnPolicy::Deferred);
    }

    #[test]
    fn test_default_config_draws_seed() {
        let seeds: Vec<u64> = (0..4).map(|_| SimConfig::default().seed).collect();
        assert!(seeds.iter().any(|&s| s != seeds[0]));
        assert_eq!(SimConfig::default().max_turns, DEFAULT_TURNS);
    }
}
