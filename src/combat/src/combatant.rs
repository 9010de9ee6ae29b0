// src/combat/src/combatant.rs

use entities::{Character, Enemy, Player};

/// A character that can be hit and healed.
pub trait Combatant: Character {
    /// Subtract `amount` from health. No floor short of `i32::MIN`.
    fn take_damage(&mut self, amount: i32);

    /// Add `amount` to health. No cap short of `i32::MAX`.
    fn heal(&mut self, amount: i32);
}

impl Combatant for Player {
    fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }
}

impl Combatant for Enemy {
    fn take_damage(&mut self, amount: i32) {
        self.health = self.health.saturating_sub(amount);
    }

    fn heal(&mut self, amount: i32) {
        self.health = self.health.saturating_add(amount);
    }
}
