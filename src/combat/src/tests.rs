use super::*;
use crate::boss::minion_name;
use entities::{BossAbilities, Character, Player, Position};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn always() -> BossAbilities {
    BossAbilities {
        special_threshold: 0,
        summon_threshold: 0,
        ..BossAbilities::default()
    }
}

fn never() -> BossAbilities {
    BossAbilities {
        special_threshold: 101,
        summon_threshold: 101,
        heal_max: 0,
        ..BossAbilities::default()
    }
}

#[test]
fn test_basic_attack() {
    let enemy = Enemy::new("Rat", 0, 0, 10, 5);
    let mut player = Player::new("Hero", 0, 0, 1);

    let result = Combat::attack(&enemy, &mut player);
    assert_eq!(player.health, -4);
    assert_eq!(result.damage_dealt, 5);
    assert_eq!(result.logs, vec!["Rat attacked Hero for 5 damage".to_string()]);
}

#[test]
fn test_special_attack_triples_damage() {
    let boss = Enemy::boss("Ogre", 0, 0, 80, 8);
    let mut player = Player::new("Hero", 0, 0, 250);

    let result = Combat::special_attack(&boss, &mut player);
    assert_eq!(player.health, 226);
    assert_eq!(
        result.logs,
        vec!["Ogre used special attack and dealt 24 damage to Hero".to_string()]
    );
}

#[test]
fn test_plain_enemy_turn_is_basic_attack() {
    let enemy = Enemy::new("Rat", 0, 0, 10, 3);
    let mut player = Player::new("Hero", 0, 0, 10);
    let mut rng = SimRng::new(1);

    let result = Combat::enemy_turn(&enemy, &mut player, &mut rng, 1);
    assert_eq!(player.health, 7);
    assert!(result.spawned.is_empty());
}

#[test]
fn test_boss_turn_with_every_ability() {
    let boss = Enemy::new("Ogre", 4, 4, 80, 8).with_abilities(always());
    let mut player = Player::new("Hero", 0, 0, 250);
    let mut rng = SimRng::new(7);

    let result = Combat::enemy_turn(&boss, &mut player, &mut rng, 2);
    assert_eq!(player.health, 250 - 24);
    assert_eq!(result.spawned.len(), 1);

    let minion = &result.spawned[0];
    assert_eq!(minion.name, minion_name(2));
    assert_eq!(minion.health, BossAbilities::MINION_HEALTH);
    assert_eq!(minion.damage, BossAbilities::MINION_DAMAGE);
    assert!(!minion.is_boss());
    assert!((minion.position.x - 4).abs() <= 1);
    assert!((minion.position.y - 4).abs() <= 1);
    assert_eq!(
        result.logs.last().unwrap(),
        "!WARNING! New enemy Summoned minion 2 was summoned!"
    );
}

#[test]
fn test_boss_turn_with_no_ability() {
    let boss = Enemy::new("Ogre", 4, 4, 80, 8).with_abilities(never());
    let mut player = Player::new("Hero", 0, 0, 250);
    let mut rng = SimRng::new(7);

    let result = Combat::enemy_turn(&boss, &mut player, &mut rng, 2);
    // A boss never falls back to the basic attack.
    assert_eq!(player.health, 250);
    assert_eq!(result, CombatResult::new());
}

#[test]
fn test_summon_amount_controls_count() {
    let boss = Enemy::new("Ogre", 0, 0, 80, 8).with_abilities(BossAbilities {
        summon_amount: 4,
        ..always()
    });
    let mut rng = SimRng::new(3);

    let result = Combat::call_for_arms(&boss, 5, &mut rng);
    let names: Vec<_> = result.spawned.iter().map(|e| e.name.clone()).collect();
    assert_eq!(names, vec![minion_name(5), minion_name(6), minion_name(7)]);
}

#[test]
fn test_abilities_are_noop_on_plain_enemy() {
    let mut grunt = Enemy::new("Rat", 0, 0, 10, 3);
    let mut rng = SimRng::new(3);

    assert_eq!(Combat::heal_self(&mut grunt, &mut rng), CombatResult::new());
    assert_eq!(Combat::call_for_arms(&grunt, 1, &mut rng), CombatResult::new());
    assert_eq!(grunt.health, 10);
}

#[test]
fn test_heal_log_only_when_positive() {
    let mut boss = Enemy::new("Ogre", 0, 0, 80, 8).with_abilities(never());
    let mut rng = SimRng::new(3);
    let result = Combat::heal_self(&mut boss, &mut rng);
    assert_eq!(boss.health, 80);
    assert!(result.logs.is_empty());
}

#[test]
fn test_huge_damage_saturates() {
    let boss = Enemy::new("Titan", 0, 0, 80, 1_000_000_000).with_abilities(always());
    let mut player = Player::new("Hero", 0, 0, 250);

    let result = Combat::special_attack(&boss, &mut player);
    assert_eq!(result.damage_dealt, i32::MAX);
    assert_eq!(player.health, 250 - i32::MAX);

    Combat::attack(&boss, &mut player);
    assert_eq!(player.health, i32::MIN);
    assert!(!player.is_alive());

    let mut tank = Player::new("Tank", 0, 0, i32::MAX);
    tank.heal(5);
    assert_eq!(tank.health, i32::MAX);
}

#[test]
fn test_combine_accumulates() {
    let mut a = CombatResult::new();
    a.log("one".into());
    a.damage_dealt = 3;
    let mut b = CombatResult::new();
    b.log("two".into());
    b.damage_dealt = 4;
    b.healed = 2;
    b.spawned.push(Enemy::new("m", 0, 0, 1, 0));

    a.combine(b);
    assert_eq!(a.logs, vec!["one".to_string(), "two".to_string()]);
    assert_eq!(a.damage_dealt, 7);
    assert_eq!(a.healed, 2);
    assert_eq!(a.spawned.len(), 1);
}

proptest! {
    #[test]
    fn prop_attack_subtracts_exact_damage(health in -1000i32..1000, damage in 0i32..500) {
        let enemy = Enemy::new("E", 0, 0, 10, damage);
        let mut player = Player::new("P", 0, 0, health);
        Combat::attack(&enemy, &mut player);
        prop_assert_eq!(player.health(), health - damage);
    }

    #[test]
    fn prop_special_attack_subtracts_triple(health in -1000i32..1000, damage in 0i32..300) {
        let boss = Enemy::boss("B", 0, 0, 10, damage);
        let mut player = Player::new("P", 0, 0, health);
        Combat::special_attack(&boss, &mut player);
        prop_assert_eq!(player.health(), health - 3 * damage);
    }

    #[test]
    fn prop_heal_never_decreases(seed in any::<u64>(), health in -100i32..100) {
        let mut boss = Enemy::boss("B", 0, 0, health, 1);
        let mut rng = SimRng::new(seed);
        let result = Combat::heal_self(&mut boss, &mut rng);
        let gained = boss.health - health;
        prop_assert!((0..=2).contains(&gained));
        prop_assert_eq!(gained, result.healed);
    }

    #[test]
    fn prop_minions_spawn_adjacent(seed in any::<u64>(), x in -50i32..50, y in -50i32..50) {
        let boss = Enemy::new("B", x, y, 80, 8).with_abilities(always());
        let mut rng = SimRng::new(seed);
        let result = Combat::call_for_arms(&boss, 0, &mut rng);
        let origin = Position::new(x, y);
        for minion in &result.spawned {
            prop_assert!((minion.position.x - origin.x).abs() <= 1);
            prop_assert!((minion.position.y - origin.y).abs() <= 1);
        }
    }
}
