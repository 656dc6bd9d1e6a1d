//! Built-in card templates.
//!
//! Every constructor returns a fresh template; the deck owns its copies.
//! Cards whose skill is a [`SkillCalculator::Func`] exist only here, since
//! function pointers cannot be expressed in the RON catalogs.

use battle_core::{
    BattleCard, CalculationContext, CardType, ContextPredicate, EnemyType, PowerModifier,
    SkillCalculator, SkillEffect, SlotPredicate,
};

/// Plain 2-power strength card.
pub fn militia() -> BattleCard {
    BattleCard::new("militia", CardType::Strength, 2.0)
}

/// +1 to itself when fighting alongside another strength card.
pub fn swordsman() -> BattleCard {
    BattleCard::new("swordsman", CardType::Strength, 3.0).with_skill(
        "drilled",
        SkillCalculator::effect_self(PowerModifier::additive_buff(1.0)).when(
            ContextPredicate::TypeCountAtLeast {
                card_type: CardType::Strength,
                count: 2,
            },
        ),
    )
}

/// Shields both neighbours against 2 points of debuff.
pub fn shield_bearer() -> BattleCard {
    BattleCard::new("shield_bearer", CardType::Strength, 2.0).with_skill(
        "shield_wall",
        SkillCalculator::neighbours(PowerModifier::protection(2.0)),
    )
}

/// Doubles its own power against dragons.
pub fn dragon_slayer() -> BattleCard {
    BattleCard::new("dragon_slayer", CardType::Strength, 4.0).with_skill(
        "dragonbane",
        SkillCalculator::effect_self(PowerModifier::multiplicative_buff(1.0))
            .when(ContextPredicate::EnemyType(EnemyType::Dragon)),
    )
}

/// +1 to the card placed right after it.
pub fn scout() -> BattleCard {
    BattleCard::new("scout", CardType::Agility, 2.0).with_skill(
        "spotter",
        SkillCalculator::effect_indices([1], PowerModifier::additive_buff(1.0)),
    )
}

/// +2 to itself when it closes the line.
pub fn archer() -> BattleCard {
    BattleCard::new("archer", CardType::Agility, 3.0).with_skill(
        "volley",
        SkillCalculator::effect_self(PowerModifier::additive_buff(2.0))
            .when(ContextPredicate::OwnerIsLast),
    )
}

/// Gains its own slot index as additive power.
pub fn rogue() -> BattleCard {
    BattleCard::new("rogue", CardType::Agility, 1.0)
        .with_skill("ambush", SkillCalculator::func(ambush))
}

fn ambush(ctx: &CalculationContext<'_>) -> Vec<SkillEffect> {
    ctx.owner()
        .map(|owner| SkillEffect::new(owner, PowerModifier::additive_buff(owner as f64)))
        .into_iter()
        .collect()
}

/// +0.5 to every magic card, itself included.
pub fn apprentice() -> BattleCard {
    BattleCard::new("apprentice", CardType::Magic, 1.0).with_skill(
        "attunement",
        SkillCalculator::effect_all_if(
            SlotPredicate::CardType(CardType::Magic),
            PowerModifier::additive_buff(0.5),
        ),
    )
}

/// ×1.5 to every magic card.
pub fn archmage() -> BattleCard {
    BattleCard::new("archmage", CardType::Magic, 5.0).with_skill(
        "arcane_focus",
        SkillCalculator::effect_all_if(
            SlotPredicate::CardType(CardType::Magic),
            PowerModifier::multiplicative_buff(0.5),
        ),
    )
}

/// 1 point of protection for the whole line.
pub fn priest() -> BattleCard {
    BattleCard::new("priest", CardType::Magic, 2.0).with_skill(
        "blessing",
        SkillCalculator::effect_all(PowerModifier::protection(1.0)),
    )
}

/// +1 to every other card.
pub fn war_drummer() -> BattleCard {
    BattleCard::new("war_drummer", CardType::Strength, 1.0).with_skill(
        "cadence",
        SkillCalculator::effect_all_if(SlotPredicate::NotOwner, PowerModifier::additive_buff(1.0)),
    )
}

/// Adds 3 support power.
pub fn banner_knight() -> BattleCard {
    BattleCard::new("banner_knight", CardType::Strength, 3.0)
        .with_skill("rally", SkillCalculator::support_power(3.0))
}

/// Adds 2 support power once four cards are committed.
pub fn quartermaster() -> BattleCard {
    BattleCard::new("quartermaster", CardType::Agility, 1.0).with_skill(
        "supply_line",
        SkillCalculator::support_power(2.0).when(ContextPredicate::CardCountAtLeast(4)),
    )
}

/// Wards the whole line against 3 points of debuff, but only against the undead.
pub fn exorcist() -> BattleCard {
    BattleCard::new("exorcist", CardType::Magic, 3.0).with_skill(
        "sanctify",
        SkillCalculator::effect_all(PowerModifier::protection(3.0))
            .when(ContextPredicate::EnemyType(EnemyType::Undead)),
    )
}

/// +1 to itself for every other committed card.
pub fn berserker() -> BattleCard {
    BattleCard::new("berserker", CardType::Strength, 2.0)
        .with_skill("frenzy", SkillCalculator::func(frenzy))
}

fn frenzy(ctx: &CalculationContext<'_>) -> Vec<SkillEffect> {
    let allies = ctx.len().saturating_sub(1) as f64;
    ctx.owner()
        .map(|owner| SkillEffect::new(owner, PowerModifier::additive_buff(allies)))
        .into_iter()
        .collect()
}

/// Doubles whatever buffs its neighbours receive.
pub fn battle_sage() -> BattleCard {
    BattleCard::new("battle_sage", CardType::Magic, 2.0).with_skill(
        "inspiration",
        SkillCalculator::neighbours(PowerModifier::buff_boost(1.0)),
    )
}

/// Every built-in template, in catalog order.
pub fn builtin_cards() -> Vec<BattleCard> {
    vec![
        militia(),
        swordsman(),
        shield_bearer(),
        dragon_slayer(),
        scout(),
        archer(),
        rogue(),
        apprentice(),
        archmage(),
        priest(),
        war_drummer(),
        banner_knight(),
        quartermaster(),
        exorcist(),
        berserker(),
        battle_sage(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use battle_core::{Battlefield, Enemy};

    use super::*;

    fn fight(enemy_type: EnemyType, cards: Vec<BattleCard>) -> Battlefield {
        let mut battlefield = Battlefield::new(Enemy::new("dummy", enemy_type, 1.0, 9), 0.0);
        for card in cards {
            battlefield.place_card(card).unwrap();
        }
        battlefield
    }

    #[test]
    fn ids_are_unique() {
        let cards = builtin_cards();
        let ids: HashSet<_> = cards.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), cards.len());
    }

    #[test]
    fn rogue_scales_with_position() {
        let battlefield = fight(EnemyType::Beast, vec![militia(), militia(), militia(), rogue()]);
        assert_eq!(battlefield.calculated_power(3), Some(4.0));
    }

    #[test]
    fn berserker_counts_allies() {
        let battlefield = fight(EnemyType::Beast, vec![berserker(), militia(), militia()]);
        assert_eq!(battlefield.calculated_power(0), Some(4.0));
    }

    #[test]
    fn battle_sage_boosts_neighbour_buffs_only() {
        // scout → sage's right neighbour gets +1, boosted to +2
        let battlefield = fight(EnemyType::Beast, vec![scout(), militia(), battle_sage()]);
        assert_eq!(battlefield.calculated_power(1), Some(4.0));

        let unbuffed = fight(EnemyType::Beast, vec![militia(), battle_sage()]);
        assert_eq!(unbuffed.calculated_power(0), Some(2.0));
    }

    #[test]
    fn swordsman_needs_a_second_strength_card() {
        let alone = fight(EnemyType::Beast, vec![swordsman(), apprentice()]);
        assert_eq!(alone.calculated_power(0), Some(3.0));

        let paired = fight(EnemyType::Beast, vec![swordsman(), militia()]);
        assert_eq!(paired.calculated_power(0), Some(4.0));
    }

    #[test]
    fn quartermaster_supports_a_full_line() {
        let short = fight(EnemyType::Beast, vec![quartermaster(), militia()]);
        assert_eq!(short.evaluate().support_power, 0.0);

        let full = fight(
            EnemyType::Beast,
            vec![quartermaster(), militia(), militia(), militia()],
        );
        assert_eq!(full.evaluate().support_power, 2.0);
        assert_eq!(full.total_power(), 9.0);
    }
}
