// src/combat/src/boss.rs
//! Boss-only abilities. Calling them on a plain enemy is a no-op.

use entities::{Enemy, GameObject, SimRng};
use tracing::{debug, trace};

use crate::{Combat, CombatResult, Combatant};

/// Name given to a summoned minion, numbered by roster size at spawn time.
pub fn minion_name(roster_len: usize) -> String {
    format!("Summoned minion {roster_len}")
}

impl Combat {
    /// Self-heal by a roll in `0..=heal_max`. Runs every turn during update.
    pub fn heal_self(boss: &mut Enemy, rng: &mut SimRng) -> CombatResult {
        let mut result = CombatResult::new();
        let Some(heal_max) = boss.abilities().map(|a| a.heal_max.max(0)) else {
            return result;
        };

        let healed = rng.random_range(0..=heal_max);
        trace!(boss = boss.name(), healed, "heal roll");
        if healed > 0 {
            boss.heal(healed);
            result.healed = result.healed.saturating_add(healed);
            result.log(format!("Enemy healed itself for: {healed} points"));
        }
        result
    }

    /// Summon allies on a roll at or above the summon threshold.
    ///
    /// Minions land on the boss's position offset by `-1..=1` per axis. They
    /// are returned in `spawned`; where they go is the caller's decision.
    pub fn call_for_arms(boss: &Enemy, roster_len: usize, rng: &mut SimRng) -> CombatResult {
        let mut result = CombatResult::new();
        let Some(abilities) = boss.abilities() else {
            return result;
        };

        let roll = rng.roll_percent();
        trace!(boss = boss.name(), roll, "summon roll");
        if roll < abilities.summon_threshold {
            return result;
        }

        for n in 0..abilities.minions_per_summon() as usize {
            let dx = rng.step();
            let dy = rng.step();
            let pos = boss.position.offset(dx, dy);
            let minion = Enemy::new(
                minion_name(roster_len + n),
                pos.x,
                pos.y,
                abilities.minion_health,
                abilities.minion_damage,
            );
            debug!(boss = boss.name(), minion = %minion.name, %pos, "minion summoned");
            result.log(format!("!WARNING! New enemy {} was summoned!", minion.name));
            result.spawned.push(minion);
        }
        result
    }
}
