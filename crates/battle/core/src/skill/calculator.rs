//! The closed set of skill calculators.

use crate::modifier::{PowerModifier, is_magnitude};

use super::context::CalculationContext;
use super::effect::{SkillEffect, SkillOutput};
use super::predicate::{ContextPredicate, SlotPredicate};

/// Escape hatch for skills that don't fit the closed variant set
/// (e.g. "power equal to my position index").
pub type SkillFn = fn(&CalculationContext<'_>) -> Vec<SkillEffect>;

/// Rule deciding which slots a skill affects and with what modifier.
///
/// | Variant | Targets |
/// |---|---|
/// | `EffectSelf` | the owner's slot |
/// | `EffectAll` | every placed slot |
/// | `EffectAllCondition` | every slot matching `predicate` |
/// | `EffectIndices` | `owner + delta` for each delta, out-of-range dropped |
/// | `Condition` | whatever `inner` targets, only if `guard` holds |
/// | `SupportPowerMultiplier` | none; adds `amount` to support power |
/// | `Func` | caller-defined |
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkillCalculator {
    EffectSelf {
        modifier: PowerModifier,
    },
    EffectAll {
        modifier: PowerModifier,
    },
    EffectAllCondition {
        predicate: SlotPredicate,
        modifier: PowerModifier,
    },
    EffectIndices {
        deltas: Vec<isize>,
        modifier: PowerModifier,
    },
    Condition {
        guard: ContextPredicate,
        inner: Box<SkillCalculator>,
    },
    SupportPowerMultiplier {
        amount: f64,
    },
    #[cfg_attr(feature = "serde", serde(skip))]
    Func(SkillFn),
}

impl SkillCalculator {
    pub fn effect_self(modifier: PowerModifier) -> Self {
        Self::EffectSelf { modifier }
    }

    pub fn effect_all(modifier: PowerModifier) -> Self {
        Self::EffectAll { modifier }
    }

    pub fn effect_all_if(predicate: SlotPredicate, modifier: PowerModifier) -> Self {
        Self::EffectAllCondition {
            predicate,
            modifier,
        }
    }

    pub fn effect_indices(deltas: impl Into<Vec<isize>>, modifier: PowerModifier) -> Self {
        Self::EffectIndices {
            deltas: deltas.into(),
            modifier,
        }
    }

    /// Left and right neighbours.
    pub fn neighbours(modifier: PowerModifier) -> Self {
        Self::effect_indices([-1, 1], modifier)
    }

    pub fn support_power(amount: f64) -> Self {
        Self::SupportPowerMultiplier {
            amount: amount.max(0.0),
        }
    }

    pub fn func(f: SkillFn) -> Self {
        Self::Func(f)
    }

    /// Wraps this calculator so it only fires when `guard` holds.
    #[must_use]
    pub fn when(self, guard: ContextPredicate) -> Self {
        Self::Condition {
            guard,
            inner: Box::new(self),
        }
    }

    /// Values that are not finite non-negative magnitudes, searched through
    /// nested `Condition`s. `Func` is opaque and never reports anything.
    pub fn invalid_magnitudes(&self) -> Vec<(&'static str, f64)> {
        match self {
            Self::EffectSelf { modifier }
            | Self::EffectAll { modifier }
            | Self::EffectAllCondition { modifier, .. }
            | Self::EffectIndices { modifier, .. } => modifier.invalid_fields().collect(),
            Self::Condition { inner, .. } => inner.invalid_magnitudes(),
            Self::SupportPowerMultiplier { amount } if !is_magnitude(*amount) => {
                vec![("amount", *amount)]
            }
            Self::SupportPowerMultiplier { .. } | Self::Func(_) => Vec::new(),
        }
    }

    /// Evaluates the calculator.
    ///
    /// `ctx` should carry the owning slot for owner-relative variants; without
    /// one they produce nothing. The result only ever references placed slots.
    pub fn calculate(&self, ctx: &CalculationContext<'_>) -> SkillOutput {
        if ctx.is_empty() {
            return SkillOutput::new();
        }

        let mut output = match self {
            Self::EffectSelf { modifier } => match ctx.owner() {
                Some(owner) => SkillOutput::from_effects(vec![SkillEffect::new(owner, *modifier)]),
                None => SkillOutput::new(),
            },
            Self::EffectAll { modifier } => SkillOutput::from_effects(
                (0..ctx.len())
                    .map(|slot| SkillEffect::new(slot, *modifier))
                    .collect(),
            ),
            Self::EffectAllCondition {
                predicate,
                modifier,
            } => SkillOutput::from_effects(
                (0..ctx.len())
                    .filter(|&slot| predicate.matches(slot, ctx))
                    .map(|slot| SkillEffect::new(slot, *modifier))
                    .collect(),
            ),
            Self::EffectIndices { deltas, modifier } => SkillOutput::from_effects(
                deltas
                    .iter()
                    .filter_map(|&delta| ctx.offset_from_owner(delta))
                    .map(|slot| SkillEffect::new(slot, *modifier))
                    .collect(),
            ),
            Self::Condition { guard, inner } => {
                if guard.holds(ctx) {
                    inner.calculate(ctx)
                } else {
                    SkillOutput::new()
                }
            }
            Self::SupportPowerMultiplier { amount } => SkillOutput::support(*amount),
            Self::Func(f) => SkillOutput::from_effects(f(ctx)),
        };

        output.retain_in_range(ctx.len());
        output
    }
}
