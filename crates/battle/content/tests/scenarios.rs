//! End-to-end fights against the built-in tables.

use battle_content::{BattleContent, cards, enemies};
use battle_core::{
    BattleCard, BattleError, BattlePhase, BattlefieldError, CardOracle, CardType, Enemy,
    EnemyType, ErrorSeverity, PcgRng,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn plain(id: &str, power: f64) -> BattleCard {
    BattleCard::new(id, CardType::Strength, power)
}

#[test]
fn plain_cards_tie_and_fall_short() {
    let content = BattleContent::new(Default::default())
        .with_enemies([Enemy::new("sentinel", EnemyType::Golem, 10.0, 3)]);

    let mut tie = content.battlefield(&"sentinel".into()).unwrap();
    tie.place_card(plain("a", 5.0)).unwrap();
    tie.place_card(plain("b", 5.0)).unwrap();
    assert!(tie.can_beat());

    let mut short = content.battlefield(&"sentinel".into()).unwrap();
    short.place_card(plain("a", 5.0)).unwrap();
    assert!(!short.can_beat());
    assert_eq!(short.evaluate().margin(), -5.0);
}

#[test]
fn dragon_slayer_only_doubles_against_dragons() {
    let content = BattleContent::builtin();
    let slayer = content.require_card(&"dragon_slayer".into()).unwrap();

    let mut dragon = content.battlefield(&"young_dragon".into()).unwrap();
    dragon.place_card(slayer.clone()).unwrap();
    // 4 × (1 + 1.0 - 0.25)
    assert_eq!(dragon.calculated_power(0), Some(7.0));

    let mut beasts = content.battlefield(&"wolf_pack".into()).unwrap();
    beasts.place_card(slayer).unwrap();
    assert_eq!(beasts.calculated_power(0), Some(4.0));
}

#[test]
fn priest_and_exorcist_against_the_wraith() {
    init_tracing();
    let content = BattleContent::builtin();
    let mut battlefield = content.battlefield(&"wraith".into()).unwrap();
    battlefield.place_card(cards::militia()).unwrap();
    battlefield.place_card(cards::militia()).unwrap();
    assert_eq!(battlefield.total_power(), 2.0);

    battlefield.remove_card(1).unwrap();
    battlefield.place_card(cards::priest()).unwrap();
    // priest's protection 1 cancels the wraith's debuff everywhere
    assert_eq!(battlefield.total_power(), 4.0);

    battlefield.place_card(cards::exorcist()).unwrap();
    assert_eq!(battlefield.total_power(), 7.0);
    assert!(!battlefield.can_beat());
    assert!(!battlefield.can_place());
}

#[test]
fn shield_wall_protects_the_bandit_captains_mark() {
    let content = BattleContent::builtin();
    let mut battlefield = content.battlefield(&"bandit_captain".into()).unwrap();
    for card in [
        cards::swordsman(),
        cards::shield_bearer(),
        cards::banner_knight(),
        cards::militia(),
    ] {
        battlefield.place_card(card).unwrap();
    }

    let evaluation = battlefield.evaluate();
    let powers: Vec<f64> = evaluation.slots.iter().map(|s| s.power).collect();
    // swordsman: 3 + 1 (drilled), mark_first -2 fully blocked by shield_wall
    assert_eq!(powers, vec![4.0, 2.0, 3.0, 2.0]);
    assert_eq!(evaluation.support_power, 3.0);
    assert_eq!(evaluation.total_power, 14.0);
    assert!(evaluation.can_beat());

    let outcome = battlefield.beat().unwrap();
    assert_eq!(outcome.total_power, 14.0);
    assert_eq!(outcome.cards_committed, 4);
    assert_eq!(battlefield.phase(), BattlePhase::Won);
}

#[test]
fn lich_fight_loses_then_retreats() {
    init_tracing();
    let content = BattleContent::builtin();
    let mut battlefield = content.battlefield(&"lich".into()).unwrap();
    battlefield.place_card(cards::archmage()).unwrap();
    battlefield.place_card(cards::apprentice()).unwrap();

    let err = battlefield.beat().unwrap_err();
    assert!(matches!(err, BattlefieldError::InsufficientPower { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Recoverable);

    let returned = battlefield.rollback().unwrap();
    assert_eq!(returned.len(), 2);
    assert_eq!(battlefield.phase(), BattlePhase::Abandoned);
    assert_eq!(
        battlefield.place_card(cards::militia()).unwrap_err().error_code(),
        "BATTLEFIELD_CLOSED"
    );
}

#[test]
fn storm_elemental_breaks_odd_slots_and_punishes_crowds() {
    let content = BattleContent::builtin();
    let mut battlefield = content.battlefield(&"storm_elemental".into()).unwrap();
    for _ in 0..4 {
        battlefield.place_card(plain("c", 3.0)).unwrap();
    }
    let powers: Vec<f64> = battlefield.evaluate().slots.iter().map(|s| s.power).collect();
    assert_eq!(powers, vec![2.5, 1.0, 2.5, 1.0]);
}

#[test]
fn opened_packs_are_playable_and_deterministic() {
    let content = BattleContent::builtin();
    let first = content.open_pack("starter", &mut PcgRng::new(2024), 3).unwrap();
    let second = content.open_pack("starter", &mut PcgRng::new(2024), 3).unwrap();
    let ids = |cards: &[BattleCard]| cards.iter().map(|c| c.id.clone()).collect::<Vec<_>>();
    assert_eq!(ids(first.as_slice()), ids(second.as_slice()));

    let mut battlefield = content.battlefield(&"wolf_pack".into()).unwrap();
    for card in first {
        battlefield.place_card(card).unwrap();
    }
    assert!(battlefield.total_power() > 0.0);
}

#[test]
fn every_builtin_enemy_accepts_a_full_line() {
    let content = BattleContent::builtin();
    for enemy in enemies::builtin_enemies() {
        let mut battlefield = content.battlefield(&enemy.id).unwrap();
        while battlefield.can_place() {
            battlefield.place_card(cards::militia()).unwrap();
        }
        assert_eq!(battlefield.len(), enemy.card_slot);
        let err = battlefield.place_card(cards::militia()).unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
