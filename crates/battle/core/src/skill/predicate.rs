//! Predicates for conditional skills.
//!
//! [`SlotPredicate`] answers "does this slot qualify?" and drives
//! `EffectAllCondition` and enemy skills. [`ContextPredicate`] looks at the
//! whole context once and guards `Condition` calculators.

use crate::card::{CardId, CardType};
use crate::enemy::{EncounterKind, EnemyId, EnemyType};

use super::context::CalculationContext;

/// Escape hatch for slot predicates that don't fit the closed set.
pub type SlotPredicateFn = fn(usize, &CalculationContext<'_>) -> bool;

/// Escape hatch for context guards that don't fit the closed set.
pub type ContextPredicateFn = fn(&CalculationContext<'_>) -> bool;

/// Predicate over `(slot index, context)`.
///
/// Indices outside the placed card list never match. Owner-relative
/// variants never match when the context has no owner.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotPredicate {
    Always,
    Never,

    /// Card in the slot has this type.
    CardType(CardType),

    /// Card in the slot has this id.
    CardIs(CardId),

    /// The slot is the owner's own slot.
    IsOwner,

    /// Any slot other than the owner's.
    NotOwner,

    /// Slots strictly after the owner.
    AfterOwner,

    /// Slots strictly before the owner.
    BeforeOwner,

    /// Slots directly left or right of the owner.
    AdjacentToOwner,

    /// Exactly this slot index.
    Index(usize),

    /// The leftmost slot.
    First,

    /// The rightmost placed slot.
    Last,

    /// Card base power is at most this value.
    BasePowerAtMost(f64),

    /// Card base power is at least this value.
    BasePowerAtLeast(f64),

    /// Lifts a context-wide guard to every slot.
    Context(ContextPredicate),

    /// All predicates must hold.
    And(Vec<SlotPredicate>),

    /// Any predicate must hold.
    Or(Vec<SlotPredicate>),

    /// Predicate must not hold.
    Not(Box<SlotPredicate>),

    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(SlotPredicateFn),
}

impl SlotPredicate {
    pub fn matches(&self, index: usize, ctx: &CalculationContext<'_>) -> bool {
        let Some(card) = ctx.card(index) else {
            return false;
        };
        let owner = ctx.owner();

        match self {
            Self::Always => true,
            Self::Never => false,
            Self::CardType(card_type) => card.card_type == *card_type,
            Self::CardIs(id) => card.id == *id,
            Self::IsOwner => owner == Some(index),
            Self::NotOwner => owner.is_some_and(|owner| owner != index),
            Self::AfterOwner => owner.is_some_and(|owner| index > owner),
            Self::BeforeOwner => owner.is_some_and(|owner| index < owner),
            Self::AdjacentToOwner => owner.is_some_and(|owner| owner.abs_diff(index) == 1),
            Self::Index(target) => index == *target,
            Self::First => index == 0,
            Self::Last => index + 1 == ctx.len(),
            Self::BasePowerAtMost(limit) => card.power <= *limit,
            Self::BasePowerAtLeast(limit) => card.power >= *limit,
            Self::Context(guard) => guard.holds(ctx),
            Self::And(all) => all.iter().all(|p| p.matches(index, ctx)),
            Self::Or(any) => any.iter().any(|p| p.matches(index, ctx)),
            Self::Not(inner) => !inner.matches(index, ctx),
            Self::Custom(f) => f(index, ctx),
        }
    }

    /// Negates this predicate.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}

/// Predicate over the whole context.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContextPredicate {
    Always,
    Never,

    EnemyType(EnemyType),
    EnemyIs(EnemyId),
    EnemyPowerAtLeast(f64),
    Encounter(EncounterKind),

    CardCountAtLeast(usize),
    CardCountAtMost(usize),
    ContainsCard(CardId),
    TypeCountAtLeast { card_type: CardType, count: usize },

    /// Every placed card has this type (false on an empty board).
    AllOfType(CardType),

    OwnerIsFirst,
    OwnerIsLast,

    And(Vec<ContextPredicate>),
    Or(Vec<ContextPredicate>),
    Not(Box<ContextPredicate>),

    #[cfg_attr(feature = "serde", serde(skip))]
    Custom(ContextPredicateFn),
}

impl ContextPredicate {
    pub fn holds(&self, ctx: &CalculationContext<'_>) -> bool {
        let enemy = ctx.enemy();
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::EnemyType(enemy_type) => enemy.enemy_type == *enemy_type,
            Self::EnemyIs(id) => enemy.id == *id,
            Self::EnemyPowerAtLeast(power) => enemy.power >= *power,
            Self::Encounter(kind) => enemy.encounter == *kind,
            Self::CardCountAtLeast(count) => ctx.len() >= *count,
            Self::CardCountAtMost(count) => ctx.len() <= *count,
            Self::ContainsCard(id) => ctx.cards().iter().any(|card| card.id == *id),
            Self::TypeCountAtLeast { card_type, count } => ctx.count_of_type(*card_type) >= *count,
            Self::AllOfType(card_type) => {
                !ctx.is_empty() && ctx.cards().iter().all(|card| card.card_type == *card_type)
            }
            Self::OwnerIsFirst => ctx.owner() == Some(0),
            Self::OwnerIsLast => ctx.owner().is_some_and(|owner| owner + 1 == ctx.len()),
            Self::And(all) => all.iter().all(|p| p.holds(ctx)),
            Self::Or(any) => any.iter().any(|p| p.holds(ctx)),
            Self::Not(inner) => !inner.holds(ctx),
            Self::Custom(f) => f(ctx),
        }
    }

    /// Negates this predicate.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }
}
