//! Power modifiers and their resolution into a final card power.
//!
//! A [`PowerModifier`] is a bag of magnitudes. Direction lives in the field
//! name, never in the sign: every constructor clamps its input to `>= 0`.
//! Modifiers aimed at the same slot are summed field by field, and only the
//! accumulated result is resolved:
//!
//! ```text
//! eff_add_debuff = max(0, additive_debuff - protection)
//! eff_mul_debuff = max(0, multiplicative_debuff - protection)
//! add_buff       = additive_buff       × (1 + buff_boost)
//! mul_buff       = multiplicative_buff × (1 + buff_boost)
//!
//! power = max(0, base + add_buff - eff_add_debuff) × max(0, 1 + mul_buff - eff_mul_debuff)
//! ```

use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// One adjustment to a card's power.
///
/// # Example
/// ```
/// # use battle_core::PowerModifier;
/// let modifier = PowerModifier::additive_buff(2.0)
///     .combine(PowerModifier::multiplicative_buff(0.5))
///     .combine(PowerModifier::additive_debuff(1.0));
///
/// // (4 + 2 - 1) × (1 + 0.5) = 7.5
/// assert_eq!(modifier.apply(4.0), 7.5);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PowerModifier {
    pub additive_buff: f64,
    pub additive_debuff: f64,
    pub multiplicative_buff: f64,
    pub multiplicative_debuff: f64,

    /// Dampens both debuff categories of the slot it lands on.
    pub protection: f64,

    /// Scales the slot's additive and multiplicative buffs by `1 + buff_boost`.
    /// Never touches base power or debuffs.
    pub buff_boost: f64,
}

impl PowerModifier {
    /// The identity modifier.
    pub const NONE: Self = Self {
        additive_buff: 0.0,
        additive_debuff: 0.0,
        multiplicative_buff: 0.0,
        multiplicative_debuff: 0.0,
        protection: 0.0,
        buff_boost: 0.0,
    };

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn additive_buff(value: f64) -> Self {
        Self::NONE.with_additive_buff(value)
    }

    pub fn additive_debuff(value: f64) -> Self {
        Self::NONE.with_additive_debuff(value)
    }

    pub fn multiplicative_buff(value: f64) -> Self {
        Self::NONE.with_multiplicative_buff(value)
    }

    pub fn multiplicative_debuff(value: f64) -> Self {
        Self::NONE.with_multiplicative_debuff(value)
    }

    pub fn protection(value: f64) -> Self {
        Self::NONE.with_protection(value)
    }

    pub fn buff_boost(value: f64) -> Self {
        Self::NONE.with_buff_boost(value)
    }

    pub fn with_additive_buff(mut self, value: f64) -> Self {
        self.additive_buff = magnitude(value);
        self
    }

    pub fn with_additive_debuff(mut self, value: f64) -> Self {
        self.additive_debuff = magnitude(value);
        self
    }

    pub fn with_multiplicative_buff(mut self, value: f64) -> Self {
        self.multiplicative_buff = magnitude(value);
        self
    }

    pub fn with_multiplicative_debuff(mut self, value: f64) -> Self {
        self.multiplicative_debuff = magnitude(value);
        self
    }

    pub fn with_protection(mut self, value: f64) -> Self {
        self.protection = magnitude(value);
        self
    }

    pub fn with_buff_boost(mut self, value: f64) -> Self {
        self.buff_boost = magnitude(value);
        self
    }

    /// Field-wise sum. Associative and commutative.
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        Self {
            additive_buff: self.additive_buff + other.additive_buff,
            additive_debuff: self.additive_debuff + other.additive_debuff,
            multiplicative_buff: self.multiplicative_buff + other.multiplicative_buff,
            multiplicative_debuff: self.multiplicative_debuff + other.multiplicative_debuff,
            protection: self.protection + other.protection,
            buff_boost: self.buff_boost + other.buff_boost,
        }
    }

    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Fields that are not finite non-negative magnitudes, with their values.
    ///
    /// Constructors always yield valid modifiers; deserialized ones may not.
    pub fn invalid_fields(&self) -> impl Iterator<Item = (&'static str, f64)> {
        [
            ("additive_buff", self.additive_buff),
            ("additive_debuff", self.additive_debuff),
            ("multiplicative_buff", self.multiplicative_buff),
            ("multiplicative_debuff", self.multiplicative_debuff),
            ("protection", self.protection),
            ("buff_boost", self.buff_boost),
        ]
        .into_iter()
        .filter(|&(_, value)| !is_magnitude(value))
    }

    pub fn is_valid(&self) -> bool {
        self.invalid_fields().next().is_none()
    }

    pub fn effective_additive_debuff(&self) -> f64 {
        (self.additive_debuff - self.protection).max(0.0)
    }

    pub fn effective_multiplicative_debuff(&self) -> f64 {
        (self.multiplicative_debuff - self.protection).max(0.0)
    }

    pub fn boosted_additive_buff(&self) -> f64 {
        self.additive_buff * (1.0 + self.buff_boost)
    }

    pub fn boosted_multiplicative_buff(&self) -> f64 {
        self.multiplicative_buff * (1.0 + self.buff_boost)
    }

    /// Resolve this (already accumulated) modifier against a base power.
    ///
    /// Both factors are floored at zero, so the result is never negative.
    pub fn apply(&self, base_power: f64) -> f64 {
        let additive =
            (base_power + self.boosted_additive_buff() - self.effective_additive_debuff()).max(0.0);
        let multiplier = (1.0 + self.boosted_multiplicative_buff()
            - self.effective_multiplicative_debuff())
        .max(0.0);
        additive * multiplier
    }
}

fn magnitude(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.max(0.0) }
}

/// Finite and `>= 0`.
pub fn is_magnitude(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl Add for PowerModifier {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.combine(other)
    }
}

impl AddAssign for PowerModifier {
    fn add_assign(&mut self, other: Self) {
        *self = self.combine(other);
    }
}

impl Sum for PowerModifier {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::NONE, Self::combine)
    }
}

impl<'a> Sum<&'a PowerModifier> for PowerModifier {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_identity() {
        assert!(PowerModifier::default().is_none());
        assert_eq!(PowerModifier::NONE.apply(6.5), 6.5);
    }

    #[test]
    fn negative_magnitudes_are_clamped() {
        let modifier = PowerModifier::additive_buff(-3.0).with_protection(f64::NAN);
        assert_eq!(modifier.additive_buff, 0.0);
        assert_eq!(modifier.protection, 0.0);
    }

    #[test]
    fn invalid_fields_reports_signed_and_nan_values() {
        assert!(PowerModifier::protection(2.0).is_valid());

        let raw = PowerModifier {
            protection: -2.0,
            buff_boost: f64::NAN,
            ..PowerModifier::NONE
        };
        let fields: Vec<&str> = raw.invalid_fields().map(|(name, _)| name).collect();
        assert_eq!(fields, vec!["protection", "buff_boost"]);
        assert!(!raw.is_valid());
        assert!(!is_magnitude(f64::INFINITY));
    }

    #[test]
    fn combine_is_field_wise_and_order_independent() {
        let a = PowerModifier::additive_buff(1.0).with_protection(0.5);
        let b = PowerModifier::multiplicative_debuff(0.25).with_buff_boost(1.0);
        let c = PowerModifier::additive_debuff(2.0);

        assert_eq!(a + b, b + a);
        assert_eq!((a + b) + c, a + (b + c));

        let total: PowerModifier = [a, b, c].iter().sum();
        assert_eq!(total.additive_buff, 1.0);
        assert_eq!(total.additive_debuff, 2.0);
        assert_eq!(total.multiplicative_debuff, 0.25);
        assert_eq!(total.protection, 0.5);
        assert_eq!(total.buff_boost, 1.0);
    }

    #[test]
    fn protection_dampens_each_debuff_category() {
        let modifier = PowerModifier::additive_debuff(3.0)
            .with_multiplicative_debuff(0.5)
            .with_protection(1.0);
        assert_eq!(modifier.effective_additive_debuff(), 2.0);
        assert_eq!(modifier.effective_multiplicative_debuff(), 0.0);
    }

    #[test]
    fn protection_never_becomes_a_buff() {
        let modifier = PowerModifier::additive_debuff(1.0).with_protection(999.0);
        assert_eq!(modifier.apply(5.0), 5.0);
        assert_eq!(PowerModifier::protection(10.0).apply(5.0), 5.0);
    }

    #[test]
    fn power_is_floored_at_zero() {
        assert_eq!(PowerModifier::additive_debuff(10.0).apply(3.0), 0.0);
        assert_eq!(PowerModifier::multiplicative_debuff(2.0).apply(3.0), 0.0);
        // Two negative factors must not multiply into a positive power.
        let both = PowerModifier::additive_debuff(10.0).with_multiplicative_debuff(2.0);
        assert_eq!(both.apply(3.0), 0.0);
    }

    #[test]
    fn buff_boost_scales_buffs_only() {
        let buffs = PowerModifier::additive_buff(2.0)
            .with_multiplicative_buff(0.5)
            .with_buff_boost(1.0);
        // (4 + 2×2) × (1 + 0.5×2) = 8 × 2
        assert_eq!(buffs.apply(4.0), 16.0);

        let debuffs = PowerModifier::additive_debuff(1.0).with_buff_boost(1.0);
        assert_eq!(debuffs.apply(4.0), 3.0);

        // Boost alone does nothing to base power.
        assert_eq!(PowerModifier::buff_boost(3.0).apply(4.0), 4.0);
    }
}
