// src/combat/src/lib.rs
//! Damage application and boss abilities.
//!
//! Nothing here can fail: health has no floor and no cap beyond the range of
//! `i32`, where arithmetic saturates. Every roll comes from the caller's
//! `SimRng`.

pub mod boss;
pub mod combatant;

#[cfg(test)]
mod tests;

pub use crate::combatant::Combatant;

use entities::{Enemy, GameObject, SimRng};
use tracing::trace;

/// Handles combat interactions between entities
pub struct Combat;

impl Combat {
    /// Basic attack: `target.health -= attacker.damage`.
    pub fn attack<T: Combatant>(attacker: &Enemy, target: &mut T) -> CombatResult {
        let mut result = CombatResult::new();
        let damage = attacker.damage;
        target.take_damage(damage);
        result.damage_dealt = result.damage_dealt.saturating_add(damage);
        result.log(format!(
            "{} attacked {} for {} damage",
            attacker.name(),
            target.name(),
            damage
        ));
        result
    }

    /// Special attack: damage times the boss multiplier (3 unless overridden).
    pub fn special_attack<T: Combatant>(attacker: &Enemy, target: &mut T) -> CombatResult {
        let mut result = CombatResult::new();
        let multiplier = attacker
            .abilities()
            .map_or(entities::BossAbilities::SPECIAL_MULTIPLIER, |a| {
                a.special_multiplier
            });
        let damage = attacker.damage.saturating_mul(multiplier);
        target.take_damage(damage);
        result.damage_dealt = result.damage_dealt.saturating_add(damage);
        result.log(format!(
            "{} used special attack and dealt {} damage to {}",
            attacker.name(),
            damage,
            target.name()
        ));
        result
    }

    /// One enemy's action against the player.
    ///
    /// A boss rolls for its special attack and then always attempts a summon;
    /// anything else performs a basic attack. `roster_len` is the number of
    /// enemies known at the moment of acting and seeds minion names.
    pub fn enemy_turn<T: Combatant>(
        enemy: &Enemy,
        target: &mut T,
        rng: &mut SimRng,
        roster_len: usize,
    ) -> CombatResult {
        let Some(abilities) = enemy.abilities() else {
            return Self::attack(enemy, target);
        };

        let mut result = CombatResult::new();
        let roll = rng.roll_percent();
        trace!(boss = enemy.name(), roll, "special attack roll");
        if roll >= abilities.special_threshold {
            result.combine(Self::special_attack(enemy, target));
        }
        result.combine(Self::call_for_arms(enemy, roster_len, rng));
        result
    }
}

/// Outcome of one combat operation, with the trace lines it produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatResult {
    pub logs: Vec<String>,
    /// Total health removed from the target.
    pub damage_dealt: i32,
    /// Health restored to the acting entity.
    pub healed: i32,
    /// Enemies created by a summon, in spawn order.
    pub spawned: Vec<Enemy>,
}

impl CombatResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&mut self, message: String) {
        self.logs.push(message);
    }

    pub fn combine(&mut self, other: CombatResult) {
        self.logs.extend(other.logs);
        self.damage_dealt = self.damage_dealt.saturating_add(other.damage_dealt);
        self.healed = self.healed.saturating_add(other.healed);
        self.spawned.extend(other.spawned);
    }
}
