//! Read-only snapshot handed to every calculator and predicate.

use crate::card::{BattleCard, CardType};
use crate::enemy::Enemy;

/// The placed cards, the enemy, and (for card skills) the owning slot.
///
/// Enemy skills are evaluated with `owner == None`.
#[derive(Clone, Copy, Debug)]
pub struct CalculationContext<'a> {
    cards: &'a [BattleCard],
    enemy: &'a Enemy,
    owner: Option<usize>,
}

impl<'a> CalculationContext<'a> {
    pub fn new(cards: &'a [BattleCard], enemy: &'a Enemy) -> Self {
        Self {
            cards,
            enemy,
            owner: None,
        }
    }

    /// Returns a copy of this context owned by the card at `owner`.
    #[must_use]
    pub fn with_owner(self, owner: usize) -> Self {
        Self {
            owner: Some(owner),
            ..self
        }
    }

    pub fn cards(&self) -> &'a [BattleCard] {
        self.cards
    }

    pub fn enemy(&self) -> &'a Enemy {
        self.enemy
    }

    pub fn owner(&self) -> Option<usize> {
        self.owner.filter(|&index| index < self.cards.len())
    }

    pub fn owner_card(&self) -> Option<&'a BattleCard> {
        self.owner().and_then(|index| self.cards.get(index))
    }

    pub fn card(&self, index: usize) -> Option<&'a BattleCard> {
        self.cards.get(index)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn contains_index(&self, index: usize) -> bool {
        index < self.cards.len()
    }

    /// `owner + delta`, if the result is a placed slot. Never wraps.
    pub fn offset_from_owner(&self, delta: isize) -> Option<usize> {
        self.owner()
            .and_then(|owner| owner.checked_add_signed(delta))
            .filter(|&index| self.contains_index(index))
    }

    pub fn count_of_type(&self, card_type: CardType) -> usize {
        self.cards
            .iter()
            .filter(|card| card.card_type == card_type)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnemyType;

    fn cards() -> Vec<BattleCard> {
        vec![
            BattleCard::new("a", CardType::Strength, 1.0),
            BattleCard::new("b", CardType::Magic, 2.0),
            BattleCard::new("c", CardType::Magic, 3.0),
        ]
    }

    #[test]
    fn offsets_never_wrap() {
        let cards = cards();
        let enemy = Enemy::new("wolf", EnemyType::Beast, 1.0, 3);
        let ctx = CalculationContext::new(&cards, &enemy).with_owner(0);

        assert_eq!(ctx.offset_from_owner(-1), None);
        assert_eq!(ctx.offset_from_owner(1), Some(1));
        assert_eq!(ctx.offset_from_owner(2), Some(2));
        assert_eq!(ctx.offset_from_owner(3), None);

        let last = ctx.with_owner(2);
        assert_eq!(last.offset_from_owner(1), None);
        assert_eq!(last.offset_from_owner(-2), Some(0));
    }

    #[test]
    fn owner_outside_cards_is_ignored() {
        let cards = cards();
        let enemy = Enemy::new("wolf", EnemyType::Beast, 1.0, 3);
        let ctx = CalculationContext::new(&cards, &enemy).with_owner(7);
        assert_eq!(ctx.owner(), None);
        assert_eq!(ctx.offset_from_owner(-6), None);
    }

    #[test]
    fn counts_types() {
        let cards = cards();
        let enemy = Enemy::new("wolf", EnemyType::Beast, 1.0, 3);
        let ctx = CalculationContext::new(&cards, &enemy);
        assert_eq!(ctx.count_of_type(CardType::Magic), 2);
        assert_eq!(ctx.count_of_type(CardType::Agility), 0);
    }
}
