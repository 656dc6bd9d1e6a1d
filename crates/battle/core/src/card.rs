//! Battle card templates.
//!
//! A [`BattleCard`] is an immutable template. The same [`CardId`] may appear
//! several times in a deck; quantity is tracked by the deck, not the card.

use crate::skill::SkillCalculator;

/// Card identifier (e.g. `"dragon_slayer"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CardId(pub String);

impl CardId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for CardId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Skill identifier, shared by card skills and enemy skills.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SkillId(pub String);

impl SkillId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SkillId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for SkillId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Card type tag, used as a predicate target by other skills.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CardType {
    Strength,
    Agility,
    Magic,
}

/// A calculator owned by a placed card.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCardSkill {
    pub id: SkillId,
    pub calculator: SkillCalculator,
}

impl BattleCardSkill {
    pub fn new(id: impl Into<SkillId>, calculator: SkillCalculator) -> Self {
        Self {
            id: id.into(),
            calculator,
        }
    }
}

/// Card template committed to a fight.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleCard {
    pub id: CardId,
    pub card_type: CardType,
    /// Base power, never negative.
    pub power: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skill: Option<BattleCardSkill>,
}

impl BattleCard {
    /// Creates a card without a skill. Negative power is clamped to zero.
    pub fn new(id: impl Into<CardId>, card_type: CardType, power: f64) -> Self {
        Self {
            id: id.into(),
            card_type,
            power: power.max(0.0),
            skill: None,
        }
    }

    /// Attaches a skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, id: impl Into<SkillId>, calculator: SkillCalculator) -> Self {
        self.skill = Some(BattleCardSkill::new(id, calculator));
        self
    }

    pub fn id(&self) -> &CardId {
        &self.id
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    pub fn skill(&self) -> Option<&BattleCardSkill> {
        self.skill.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PowerModifier;

    #[test]
    fn card_type_parses_case_insensitively() {
        assert_eq!("MAGIC".parse::<CardType>(), Ok(CardType::Magic));
        assert_eq!(CardType::Agility.to_string(), "agility");
        assert!("healer".parse::<CardType>().is_err());
    }

    #[test]
    fn negative_base_power_is_clamped() {
        let card = BattleCard::new("broken", CardType::Strength, -4.0);
        assert_eq!(card.power(), 0.0);
        assert!(card.skill().is_none());
    }

    #[test]
    fn skill_builder_attaches_calculator() {
        let card = BattleCard::new("squire", CardType::Strength, 2.0).with_skill(
            "squire_drill",
            SkillCalculator::effect_self(PowerModifier::additive_buff(1.0)),
        );
        let skill = card.skill().expect("skill attached");
        assert_eq!(skill.id.as_str(), "squire_drill");
        assert_eq!(card.id().to_string(), "squire");
    }
}
