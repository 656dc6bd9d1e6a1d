/// Battle configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Upper bound on slots regardless of what an enemy allows.
    /// Values above [`Self::MAX_CARD_SLOTS`] are clamped.
    pub card_slot_limit: usize,

    /// Flat support power granted by structures/terrain when a battlefield
    /// is created through [`crate::Battlefield::with_config`].
    pub base_support_power: f64,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Maximum number of cards a battlefield can ever hold.
    pub const MAX_CARD_SLOTS: usize = 9;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BASE_SUPPORT_POWER: f64 = 0.0;

    pub fn new() -> Self {
        Self {
            card_slot_limit: Self::MAX_CARD_SLOTS,
            base_support_power: Self::DEFAULT_BASE_SUPPORT_POWER,
        }
    }

    pub fn with_base_support_power(mut self, base_support_power: f64) -> Self {
        self.base_support_power = base_support_power.max(0.0);
        self
    }

    pub fn with_card_slot_limit(mut self, card_slot_limit: usize) -> Self {
        self.card_slot_limit = card_slot_limit;
        self
    }

    /// Slot capacity for a fight against an enemy allowing `enemy_card_slot` cards.
    pub fn capacity_for(&self, enemy_card_slot: usize) -> usize {
        enemy_card_slot
            .min(self.card_slot_limit)
            .min(Self::MAX_CARD_SLOTS)
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
