//! Battle resolution.
//!
//! A [`Battlefield`] holds the enemy, the base support power, and the cards
//! the player has committed. Evaluation is a pure read:
//!
//! 1. one empty [`PowerModifier`] accumulator per slot, support seeded with the base
//! 2. every card skill, owned by its slot, combined into the accumulators
//! 3. every enemy skill, checked against every slot
//! 4. each slot resolved once via [`PowerModifier::apply`]
//! 5. total = Σ slot powers + support
//!
//! Protection is resolved only after all contributions are summed, so the
//! order skills are evaluated in never changes the result.
//!
//! # Lifecycle
//!
//! ```text
//! Assembling ──beat()──▶ Won
//!     │
//!     └──rollback()──▶ Abandoned (cards handed back)
//! ```
//!
//! Both terminal phases reject further mutation.

use arrayvec::ArrayVec;
use tracing::{debug, info, trace, warn};

use crate::card::{BattleCard, CardId};
use crate::config::BattleConfig;
use crate::enemy::{EncounterKind, Enemy, EnemyId};
use crate::error::{BattleError, ErrorSeverity};
use crate::modifier::PowerModifier;
use crate::skill::CalculationContext;

/// Phase of a battlefield's lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattlePhase {
    /// Cards are being placed and removed.
    #[default]
    Assembling,
    /// The enemy was beaten. Terminal.
    Won,
    /// The player retreated and took the cards back. Terminal.
    Abandoned,
}

impl BattlePhase {
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Assembling)
    }
}

/// Errors reported by battlefield operations.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum BattlefieldError {
    #[error("battlefield is full ({capacity} slots)")]
    SlotsFull { capacity: usize },

    #[error("slot {index} is empty (battlefield holds {len} cards)")]
    SlotOutOfRange { index: usize, len: usize },

    #[error("total power {total} is below enemy power {required}")]
    InsufficientPower { total: f64, required: f64 },

    #[error("battlefield is {phase} and can no longer change")]
    Closed { phase: BattlePhase },
}

impl BattleError for BattlefieldError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientPower { .. } => ErrorSeverity::Recoverable,
            Self::SlotsFull { .. } | Self::SlotOutOfRange { .. } => ErrorSeverity::Validation,
            Self::Closed { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SlotsFull { .. } => "BATTLEFIELD_SLOTS_FULL",
            Self::SlotOutOfRange { .. } => "BATTLEFIELD_SLOT_OUT_OF_RANGE",
            Self::InsufficientPower { .. } => "BATTLEFIELD_INSUFFICIENT_POWER",
            Self::Closed { .. } => "BATTLEFIELD_CLOSED",
        }
    }
}

/// Resolved power of one slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotPower {
    pub index: usize,
    pub card_id: CardId,
    pub base_power: f64,
    /// Sum of every modifier that landed on this slot.
    pub modifier: PowerModifier,
    pub power: f64,
}

impl SlotPower {
    fn resolve(index: usize, card: &BattleCard, modifier: PowerModifier) -> Self {
        Self {
            index,
            card_id: card.id.clone(),
            base_power: card.power,
            modifier,
            power: modifier.apply(card.power),
        }
    }
}

/// Full breakdown of one evaluation, for display.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvaluation {
    pub slots: Vec<SlotPower>,
    /// Base support power plus every `SupportPowerMultiplier` contribution.
    pub support_power: f64,
    pub total_power: f64,
    pub enemy_power: f64,
}

impl BattleEvaluation {
    /// Ties favor the player.
    pub fn can_beat(&self) -> bool {
        self.total_power >= self.enemy_power
    }

    /// `total - enemy`; non-negative when the fight can be won.
    pub fn margin(&self) -> f64 {
        self.total_power - self.enemy_power
    }

    pub fn slot(&self, index: usize) -> Option<&SlotPower> {
        self.slots.get(index)
    }

    pub fn card_power(&self) -> f64 {
        self.slots.iter().map(|slot| slot.power).sum()
    }
}

/// Record of a committed victory, handed to the battle-flow controller.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub enemy: EnemyId,
    pub encounter: EncounterKind,
    pub total_power: f64,
    pub enemy_power: f64,
    pub cards_committed: usize,
}

/// Resolver instance for one fight.
#[derive(Clone, Debug)]
pub struct Battlefield {
    enemy: Enemy,
    base_support_power: f64,
    capacity: usize,
    cards: ArrayVec<BattleCard, { BattleConfig::MAX_CARD_SLOTS }>,
    phase: BattlePhase,
}

impl Battlefield {
    /// Creates a battlefield with the default slot limits.
    pub fn new(enemy: Enemy, base_support_power: f64) -> Self {
        Self::with_config(
            enemy,
            &BattleConfig::new().with_base_support_power(base_support_power),
        )
    }

    pub fn with_config(enemy: Enemy, config: &BattleConfig) -> Self {
        let capacity = config.capacity_for(enemy.card_slot);
        debug!(
            enemy = %enemy.id,
            enemy_power = enemy.power,
            capacity,
            base_support_power = config.base_support_power,
            "battlefield opened"
        );
        Self {
            enemy,
            base_support_power: config.base_support_power.max(0.0),
            capacity,
            cards: ArrayVec::new(),
            phase: BattlePhase::Assembling,
        }
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn base_support_power(&self) -> f64 {
        self.base_support_power
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cards(&self) -> &[BattleCard] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.capacity
    }

    pub fn phase(&self) -> BattlePhase {
        self.phase
    }

    /// True while the battlefield is assembling and has a free slot.
    pub fn can_place(&self) -> bool {
        !self.phase.is_terminal() && !self.is_full()
    }

    /// Places a card in the next free slot and returns its index.
    ///
    /// The caller must already have taken the card out of the deck.
    pub fn place_card(&mut self, card: BattleCard) -> Result<usize, BattlefieldError> {
        self.ensure_assembling()?;
        if self.is_full() {
            warn!(
                enemy = %self.enemy.id,
                card = %card.id,
                capacity = self.capacity,
                "placement rejected: battlefield full"
            );
            return Err(BattlefieldError::SlotsFull {
                capacity: self.capacity,
            });
        }

        let index = self.cards.len();
        info!(enemy = %self.enemy.id, card = %card.id, slot = index, "card placed");
        self.cards.push(card);
        Ok(index)
    }

    /// Removes the card at `index`, shifting later cards left.
    pub fn remove_card(&mut self, index: usize) -> Result<BattleCard, BattlefieldError> {
        self.ensure_assembling()?;
        if index >= self.cards.len() {
            return Err(BattlefieldError::SlotOutOfRange {
                index,
                len: self.cards.len(),
            });
        }

        let card = self.cards.remove(index);
        info!(enemy = %self.enemy.id, card = %card.id, slot = index, "card removed");
        Ok(card)
    }

    /// Snapshot handed to calculators and predicates.
    pub fn context(&self) -> CalculationContext<'_> {
        CalculationContext::new(&self.cards, &self.enemy)
    }

    /// Per-slot accumulated modifiers and the support-power total.
    fn accumulate(&self) -> (Vec<PowerModifier>, f64) {
        let ctx = self.context();
        let mut modifiers = vec![PowerModifier::NONE; self.cards.len()];
        let mut support_power = self.base_support_power;

        for (owner, card) in self.cards.iter().enumerate() {
            let Some(skill) = card.skill() else {
                continue;
            };
            let output = skill.calculator.calculate(&ctx.with_owner(owner));
            trace!(
                card = %card.id,
                skill = %skill.id,
                slots = ?output.slots().collect::<Vec<_>>(),
                support = output.support_power,
                "card skill evaluated"
            );
            for effect in &output.effects {
                effect.apply(&mut modifiers);
            }
            support_power += output.support_power;
        }

        for skill in self.enemy.skills() {
            for (slot, accumulator) in modifiers.iter_mut().enumerate() {
                if let Some(modifier) = skill.modifier_for(slot, &ctx) {
                    trace!(enemy = %self.enemy.id, skill = %skill.id, slot, "enemy skill applied");
                    *accumulator += modifier;
                }
            }
        }

        (modifiers, support_power)
    }

    /// Evaluates every skill and resolves the fight. Side-effect free.
    pub fn evaluate(&self) -> BattleEvaluation {
        let (modifiers, support_power) = self.accumulate();
        let slots: Vec<SlotPower> = self
            .cards
            .iter()
            .zip(modifiers)
            .enumerate()
            .map(|(index, (card, modifier))| SlotPower::resolve(index, card, modifier))
            .collect();

        let total_power = slots.iter().map(|slot| slot.power).sum::<f64>() + support_power;
        debug!(
            enemy = %self.enemy.id,
            cards = slots.len(),
            support_power,
            total_power,
            enemy_power = self.enemy.power,
            "battlefield evaluated"
        );

        BattleEvaluation {
            slots,
            support_power,
            total_power,
            enemy_power: self.enemy.power,
        }
    }

    /// Final power of the card at `index`.
    pub fn calculated_power(&self, index: usize) -> Option<f64> {
        self.evaluate().slot(index).map(|slot| slot.power)
    }

    pub fn total_power(&self) -> f64 {
        self.evaluate().total_power
    }

    /// Whether the committed cards can beat the enemy. Ties favor the player.
    pub fn can_beat(&self) -> bool {
        self.evaluate().can_beat()
    }

    /// Commits the victory. Only the phase changes; the cards stay in place
    /// for the caller to dispose of.
    pub fn beat(&mut self) -> Result<BattleOutcome, BattlefieldError> {
        self.ensure_assembling()?;
        let evaluation = self.evaluate();
        if !evaluation.can_beat() {
            return Err(BattlefieldError::InsufficientPower {
                total: evaluation.total_power,
                required: evaluation.enemy_power,
            });
        }

        self.phase = BattlePhase::Won;
        info!(
            enemy = %self.enemy.id,
            total_power = evaluation.total_power,
            enemy_power = evaluation.enemy_power,
            "enemy beaten"
        );
        Ok(BattleOutcome {
            enemy: self.enemy.id.clone(),
            encounter: self.enemy.encounter,
            total_power: evaluation.total_power,
            enemy_power: evaluation.enemy_power,
            cards_committed: self.cards.len(),
        })
    }

    /// Abandons the fight and hands every placed card back, in slot order.
    pub fn rollback(&mut self) -> Result<Vec<BattleCard>, BattlefieldError> {
        self.ensure_assembling()?;
        self.phase = BattlePhase::Abandoned;
        let cards: Vec<BattleCard> = self.cards.drain(..).collect();
        info!(enemy = %self.enemy.id, returned = cards.len(), "battle abandoned");
        Ok(cards)
    }

    /// Consumes the battlefield, yielding whatever cards are still placed.
    pub fn into_cards(self) -> Vec<BattleCard> {
        self.cards.into_iter().collect()
    }

    fn ensure_assembling(&self) -> Result<(), BattlefieldError> {
        if self.phase.is_terminal() {
            return Err(BattlefieldError::Closed { phase: self.phase });
        }
        Ok(())
    }
}
