//! Built-in enemy skills and enemy definitions.
//!
//! Enemy skills are plain [`EnemySkill`] values: a slot predicate plus a fixed
//! modifier. The factories below cover the recurring patterns so enemy
//! tables read as data.

use battle_core::{
    CalculationContext, CardType, ContextPredicate, Enemy, EnemySkill, EnemyType, PowerModifier,
    SlotPredicate,
};

// ============================================================================
// Skill factories
// ============================================================================

/// Flat additive debuff on every slot.
pub fn weaken_all(amount: f64) -> EnemySkill {
    EnemySkill::new(
        "weaken_all",
        SlotPredicate::Always,
        PowerModifier::additive_debuff(amount),
    )
}

/// Multiplicative debuff on every slot.
pub fn intimidate(amount: f64) -> EnemySkill {
    EnemySkill::new(
        "intimidate",
        SlotPredicate::Always,
        PowerModifier::multiplicative_debuff(amount),
    )
}

/// Multiplicative debuff on cards of one type.
pub fn curse_type(card_type: CardType, amount: f64) -> EnemySkill {
    EnemySkill::new(
        format!("curse_{card_type}").as_str(),
        SlotPredicate::CardType(card_type),
        PowerModifier::multiplicative_debuff(amount),
    )
}

/// Additive debuff on the first card in line.
pub fn mark_first(amount: f64) -> EnemySkill {
    EnemySkill::new(
        "mark_first",
        SlotPredicate::First,
        PowerModifier::additive_debuff(amount),
    )
}

/// Additive debuff on the last card in line.
pub fn mark_last(amount: f64) -> EnemySkill {
    EnemySkill::new(
        "mark_last",
        SlotPredicate::Last,
        PowerModifier::additive_debuff(amount),
    )
}

/// Additive debuff on a fixed slot.
pub fn single_out(index: usize, amount: f64) -> EnemySkill {
    EnemySkill::new(
        "single_out",
        SlotPredicate::Index(index),
        PowerModifier::additive_debuff(amount),
    )
}

/// Additive debuff on cards whose base power is at most `threshold`.
pub fn crush_weak(threshold: f64, amount: f64) -> EnemySkill {
    EnemySkill::new(
        "crush_weak",
        SlotPredicate::BasePowerAtMost(threshold),
        PowerModifier::additive_debuff(amount),
    )
}

/// Multiplicative debuff on cards whose base power is at least `threshold`.
pub fn dampen_strong(threshold: f64, amount: f64) -> EnemySkill {
    EnemySkill::new(
        "dampen_strong",
        SlotPredicate::BasePowerAtLeast(threshold),
        PowerModifier::multiplicative_debuff(amount),
    )
}

/// Additive debuff on every slot once the player commits `count` or more cards.
pub fn punish_crowd(count: usize, amount: f64) -> EnemySkill {
    EnemySkill::new(
        "punish_crowd",
        SlotPredicate::Context(ContextPredicate::CardCountAtLeast(count)),
        PowerModifier::additive_debuff(amount),
    )
}

/// Additive debuff on every second slot (1, 3, 5, ...).
pub fn break_formation(amount: f64) -> EnemySkill {
    EnemySkill::new(
        "break_formation",
        SlotPredicate::Custom(odd_slot),
        PowerModifier::additive_debuff(amount),
    )
}

fn odd_slot(index: usize, _ctx: &CalculationContext<'_>) -> bool {
    index % 2 == 1
}

// ============================================================================
// Enemies
// ============================================================================

pub fn wolf_pack() -> Enemy {
    Enemy::new("wolf_pack", EnemyType::Beast, 6.0, 3)
}

pub fn bandit_captain() -> Enemy {
    Enemy::new("bandit_captain", EnemyType::Bandit, 12.0, 4).with_skill(mark_first(2.0))
}

pub fn wraith() -> Enemy {
    Enemy::new("wraith", EnemyType::Undead, 10.0, 3).with_skill(weaken_all(1.0))
}

pub fn lich() -> Enemy {
    Enemy::new("lich", EnemyType::Undead, 30.0, 6)
        .boss()
        .with_skill(curse_type(CardType::Magic, 0.5))
        .with_skill(weaken_all(1.0))
}

pub fn young_dragon() -> Enemy {
    Enemy::new("young_dragon", EnemyType::Dragon, 20.0, 5).with_skill(intimidate(0.25))
}

pub fn elder_dragon() -> Enemy {
    Enemy::new("elder_dragon", EnemyType::Dragon, 45.0, 7)
        .boss()
        .with_skill(intimidate(0.25))
        .with_skill(crush_weak(2.0, 2.0))
}

pub fn stone_golem() -> Enemy {
    Enemy::new("stone_golem", EnemyType::Golem, 15.0, 4).with_skill(dampen_strong(4.0, 0.5))
}

pub fn storm_elemental() -> Enemy {
    Enemy::new("storm_elemental", EnemyType::Elemental, 14.0, 4)
        .with_skill(break_formation(1.5))
        .with_skill(punish_crowd(4, 0.5))
}

/// Every built-in enemy, in catalog order.
pub fn builtin_enemies() -> Vec<Enemy> {
    vec![
        wolf_pack(),
        bandit_captain(),
        wraith(),
        lich(),
        young_dragon(),
        elder_dragon(),
        stone_golem(),
        storm_elemental(),
    ]
}

#[cfg(test)]
mod tests {
    use battle_core::{BattleCard, Battlefield, EncounterKind};

    use super::*;

    fn line(enemy: Enemy, powers: &[f64]) -> Battlefield {
        let mut battlefield = Battlefield::new(enemy, 0.0);
        for (i, &power) in powers.iter().enumerate() {
            battlefield
                .place_card(BattleCard::new(
                    format!("c{i}").as_str(),
                    CardType::Strength,
                    power,
                ))
                .unwrap();
        }
        battlefield
    }

    fn powers(battlefield: &Battlefield) -> Vec<f64> {
        battlefield.evaluate().slots.iter().map(|s| s.power).collect()
    }

    #[test]
    fn curse_type_names_the_type() {
        assert_eq!(curse_type(CardType::Magic, 0.5).id.as_str(), "curse_magic");
    }

    #[test]
    fn bosses_are_flagged() {
        assert_eq!(lich().encounter, EncounterKind::Boss);
        assert_eq!(wraith().encounter, EncounterKind::Wilderness);
    }

    #[test]
    fn break_formation_hits_odd_slots() {
        let enemy = Enemy::new("e", EnemyType::Elemental, 1.0, 9).with_skill(break_formation(1.0));
        assert_eq!(powers(&line(enemy, &[3.0, 3.0, 3.0, 3.0])), vec![3.0, 2.0, 3.0, 2.0]);
    }

    #[test]
    fn punish_crowd_waits_for_the_threshold() {
        let enemy = || Enemy::new("e", EnemyType::Elemental, 1.0, 9).with_skill(punish_crowd(3, 1.0));
        assert_eq!(powers(&line(enemy(), &[2.0, 2.0])), vec![2.0, 2.0]);
        assert_eq!(powers(&line(enemy(), &[2.0, 2.0, 2.0])), vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn crush_weak_and_dampen_strong_split_by_base_power() {
        let enemy = Enemy::new("e", EnemyType::Golem, 1.0, 9)
            .with_skill(crush_weak(2.0, 1.0))
            .with_skill(dampen_strong(4.0, 0.5));
        assert_eq!(powers(&line(enemy, &[2.0, 3.0, 4.0])), vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn marks_follow_the_line_edges() {
        let enemy = Enemy::new("e", EnemyType::Bandit, 1.0, 9)
            .with_skill(mark_first(1.0))
            .with_skill(mark_last(2.0))
            .with_skill(single_out(1, 0.5));
        assert_eq!(powers(&line(enemy, &[3.0, 3.0, 3.0])), vec![2.0, 2.5, 1.0]);
    }
}
