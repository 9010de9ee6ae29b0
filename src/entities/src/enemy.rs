// src/entities/src/enemy.rs

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Character, EntityKind, GameObject, Movable, Position};

/// Extra abilities that turn a plain enemy into a boss.
///
/// Rolls are uniform integers in `0..=100`; an ability fires when the roll is
/// at or above its threshold, so `0` means always and `101` means never.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossAbilities {
    /// Damage multiplier of the special attack.
    pub special_multiplier: i32,
    pub special_threshold: u32,
    /// Upper bound of the per-turn self-heal roll (`0..=heal_max`).
    pub heal_max: i32,
    pub summon_threshold: u32,
    /// A successful summon spawns `summon_amount - 1` minions.
    pub summon_amount: u32,
    pub minion_health: i32,
    pub minion_damage: i32,
}

impl BossAbilities {
    pub const SPECIAL_MULTIPLIER: i32 = 3;
    pub const SPECIAL_THRESHOLD: u32 = 50;
    pub const HEAL_MAX: i32 = 2;
    pub const SUMMON_THRESHOLD: u32 = 95;
    pub const SUMMON_AMOUNT: u32 = 2;
    pub const MINION_HEALTH: i32 = 25;
    pub const MINION_DAMAGE: i32 = 0;
    /// Largest `summon_amount` a scenario may ask for.
    pub const MAX_SUMMON_AMOUNT: u32 = 64;

    /// Number of minions a successful summon produces.
    pub fn minions_per_summon(&self) -> u32 {
        self.summon_amount.saturating_sub(1)
    }
}

impl Default for BossAbilities {
    fn default() -> Self {
        Self {
            special_multiplier: Self::SPECIAL_MULTIPLIER,
            special_threshold: Self::SPECIAL_THRESHOLD,
            heal_max: Self::HEAL_MAX,
            summon_threshold: Self::SUMMON_THRESHOLD,
            summon_amount: Self::SUMMON_AMOUNT,
            minion_health: Self::MINION_HEALTH,
            minion_damage: Self::MINION_DAMAGE,
        }
    }
}

/// A hostile character. With `boss` set it is the Boss variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub name: String,
    #[serde(flatten)]
    pub position: Position,
    pub health: i32,
    pub damage: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boss: Option<BossAbilities>,
}

impl Enemy {
    pub fn new(name: impl Into<String>, x: i32, y: i32, health: i32, damage: i32) -> Self {
        Self {
            name: name.into(),
            position: Position::new(x, y),
            health,
            damage,
            boss: None,
        }
    }

    /// Boss with the default ability set.
    pub fn boss(name: impl Into<String>, x: i32, y: i32, health: i32, damage: i32) -> Self {
        Self::new(name, x, y, health, damage).with_abilities(BossAbilities::default())
    }

    pub fn with_abilities(mut self, abilities: BossAbilities) -> Self {
        self.boss = Some(abilities);
        self
    }

    pub fn is_boss(&self) -> bool {
        self.boss.is_some()
    }

    pub fn abilities(&self) -> Option<&BossAbilities> {
        self.boss.as_ref()
    }
}

impl GameObject for Enemy {
    fn name(&self) -> &str {
        &self.name
    }

    fn position(&self) -> Position {
        self.position
    }

    fn kind(&self) -> EntityKind {
        if self.is_boss() {
            EntityKind::Boss
        } else {
            EntityKind::Enemy
        }
    }

    fn update(&self) -> Vec<String> {
        vec![
            self.status_line(),
            format!("Enemy ready to attack with damage: {}", self.damage),
        ]
    }
}

impl Movable for Enemy {
    fn move_by(&mut self, dx: i32, dy: i32) -> Position {
        self.position = self.position.offset(dx, dy);
        self.position
    }
}

impl Character for Enemy {
    fn health(&self) -> i32 {
        self.health
    }

    fn health_mut(&mut self) -> &mut i32 {
        &mut self.health
    }
}

impl fmt::Display for Enemy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
