//! Enemy definitions and enemy-side skills.

use crate::card::SkillId;
use crate::modifier::PowerModifier;
use crate::skill::{CalculationContext, SlotPredicate};

/// Enemy identifier (e.g. `"red_dragon"`).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnemyId(pub String);

impl EnemyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EnemyId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl core::fmt::Display for EnemyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Enemy type tag, used by card skills that only fire against some enemies.
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
pub enum EnemyType {
    Beast,
    Bandit,
    Undead,
    Dragon,
    Golem,
    Elemental,
}

/// The kind of map point a fight starts from.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EncounterKind {
    #[default]
    Wilderness,
    Boss,
}

/// A fixed modifier applied to every slot whose index satisfies `predicate`.
///
/// Enemy skills are evaluated with no owning slot, so owner-relative
/// predicates never match.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySkill {
    pub id: SkillId,
    pub predicate: SlotPredicate,
    pub modifier: PowerModifier,
}

impl EnemySkill {
    pub fn new(id: impl Into<SkillId>, predicate: SlotPredicate, modifier: PowerModifier) -> Self {
        Self {
            id: id.into(),
            predicate,
            modifier,
        }
    }

    /// Returns the modifier for `index`, if the skill applies there.
    pub fn modifier_for(&self, index: usize, ctx: &CalculationContext<'_>) -> Option<PowerModifier> {
        self.predicate
            .matches(index, ctx)
            .then_some(self.modifier)
    }
}

/// Enemy definition, immutable for the lifetime of a battle.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    pub id: EnemyId,
    pub enemy_type: EnemyType,
    /// Power the player's total is measured against.
    pub power: f64,
    /// Maximum cards the player may commit.
    pub card_slot: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub encounter: EncounterKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<EnemySkill>,
}

impl Enemy {
    pub fn new(id: impl Into<EnemyId>, enemy_type: EnemyType, power: f64, card_slot: usize) -> Self {
        Self {
            id: id.into(),
            enemy_type,
            power: power.max(0.0),
            card_slot,
            encounter: EncounterKind::Wilderness,
            skills: Vec::new(),
        }
    }

    /// Marks this enemy as a boss encounter (builder pattern).
    #[must_use]
    pub fn boss(mut self) -> Self {
        self.encounter = EncounterKind::Boss;
        self
    }

    /// Adds an enemy skill (builder pattern).
    #[must_use]
    pub fn with_skill(mut self, skill: EnemySkill) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn id(&self) -> &EnemyId {
        &self.id
    }

    pub fn enemy_type(&self) -> EnemyType {
        self.enemy_type
    }

    pub fn power(&self) -> f64 {
        self.power
    }

    pub fn card_slot(&self) -> usize {
        self.card_slot
    }

    pub fn encounter(&self) -> EncounterKind {
        self.encounter
    }

    pub fn skills(&self) -> &[EnemySkill] {
        &self.skills
    }
}
