//! Calculator output.

use crate::modifier::PowerModifier;

/// A modifier bound to one card slot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillEffect {
    pub slot: usize,
    pub modifier: PowerModifier,
}

impl SkillEffect {
    pub fn new(slot: usize, modifier: PowerModifier) -> Self {
        Self { slot, modifier }
    }

    /// Combines the modifier into its slot's accumulator.
    ///
    /// Unknown slots are ignored.
    pub fn apply(&self, accumulators: &mut [PowerModifier]) {
        if let Some(accumulator) = accumulators.get_mut(self.slot) {
            *accumulator += self.modifier;
        }
    }
}

/// Everything a single calculator produced for one evaluation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillOutput {
    pub effects: Vec<SkillEffect>,
    /// Contribution to the team's support power, not attributable to any card.
    pub support_power: f64,
}

impl SkillOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_effects(effects: Vec<SkillEffect>) -> Self {
        Self {
            effects,
            support_power: 0.0,
        }
    }

    pub fn support(support_power: f64) -> Self {
        Self {
            effects: Vec::new(),
            support_power: support_power.max(0.0),
        }
    }

    pub fn push(&mut self, slot: usize, modifier: PowerModifier) {
        self.effects.push(SkillEffect::new(slot, modifier));
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty() && self.support_power == 0.0
    }

    /// Drops effects aimed at slots outside `0..len`.
    pub fn retain_in_range(&mut self, len: usize) {
        self.effects.retain(|effect| effect.slot < len);
    }

    /// Indices touched by this output, in production order.
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.effects.iter().map(|effect| effect.slot)
    }
}
