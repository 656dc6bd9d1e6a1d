//! In-memory content tables.

use std::collections::HashMap;

use tracing::debug;

use battle_core::{
    BattleCard, BattleConfig, Battlefield, CardId, CardOracle, Enemy, EnemyId, EnemyOracle,
    Intner, OracleError,
};

use crate::cards::builtin_cards;
use crate::enemies::builtin_enemies;
use crate::packs::{CardPack, builtin_packs};

/// Card catalog, enemy catalog, packs, and battle configuration for one session.
///
/// Immutable once built; the battle-flow controller reads it through the
/// [`CardOracle`] and [`EnemyOracle`] seams.
#[derive(Clone, Debug, Default)]
pub struct BattleContent {
    config: BattleConfig,
    cards: HashMap<CardId, BattleCard>,
    enemies: HashMap<EnemyId, Enemy>,
    packs: HashMap<String, CardPack>,
}

impl BattleContent {
    /// Creates empty tables with the given configuration.
    pub fn new(config: BattleConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Every built-in card, enemy, and pack with the default configuration.
    pub fn builtin() -> Self {
        Self::new(BattleConfig::default())
            .with_cards(builtin_cards())
            .with_enemies(builtin_enemies())
            .with_packs(builtin_packs())
    }

    /// Inserts cards, replacing templates with the same id.
    #[must_use]
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = BattleCard>) -> Self {
        for card in cards {
            self.insert_card(card);
        }
        self
    }

    #[must_use]
    pub fn with_enemies(mut self, enemies: impl IntoIterator<Item = Enemy>) -> Self {
        for enemy in enemies {
            self.insert_enemy(enemy);
        }
        self
    }

    #[must_use]
    pub fn with_packs(mut self, packs: impl IntoIterator<Item = CardPack>) -> Self {
        for pack in packs {
            self.insert_pack(pack);
        }
        self
    }

    /// Returns the template previously stored under the same id, if any.
    pub fn insert_card(&mut self, card: BattleCard) -> Option<BattleCard> {
        self.cards.insert(card.id.clone(), card)
    }

    pub fn insert_enemy(&mut self, enemy: Enemy) -> Option<Enemy> {
        self.enemies.insert(enemy.id.clone(), enemy)
    }

    pub fn insert_pack(&mut self, pack: CardPack) -> Option<CardPack> {
        self.packs.insert(pack.id.clone(), pack)
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn cards(&self) -> impl Iterator<Item = &BattleCard> {
        self.cards.values()
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.values()
    }

    pub fn pack(&self, id: &str) -> Option<&CardPack> {
        self.packs.get(id)
    }

    pub fn packs(&self) -> impl Iterator<Item = &CardPack> {
        self.packs.values()
    }

    /// Pack entries whose card id has no template.
    pub fn dangling_pack_entries(&self) -> Vec<(&str, &CardId)> {
        self.packs
            .values()
            .flat_map(|pack| {
                pack.entries
                    .iter()
                    .filter(|entry| !self.cards.contains_key(&entry.card))
                    .map(move |entry| (pack.id.as_str(), &entry.card))
            })
            .collect()
    }

    /// Opens `count` cards from a pack and copies their templates.
    pub fn open_pack(
        &self,
        id: &str,
        rng: &mut impl Intner,
        count: usize,
    ) -> Result<Vec<BattleCard>, OracleError> {
        let pack = self
            .pack(id)
            .ok_or_else(|| OracleError::PackNotFound(id.to_string()))?;
        if pack.total_weight() == 0 {
            return Err(OracleError::EmptyPack(id.to_string()));
        }

        let cards = pack
            .open(rng, count)
            .iter()
            .map(|card_id| self.require_card(card_id))
            .collect::<Result<Vec<_>, _>>()?;
        debug!(pack = id, count = cards.len(), "pack opened");
        Ok(cards)
    }

    /// Opens a battlefield against a catalog enemy using the session config.
    pub fn battlefield(&self, enemy: &EnemyId) -> Result<Battlefield, OracleError> {
        let enemy = self.require_enemy(enemy)?;
        Ok(Battlefield::with_config(enemy, &self.config))
    }
}

impl CardOracle for BattleContent {
    fn card(&self, id: &CardId) -> Option<&BattleCard> {
        self.cards.get(id)
    }
}

impl EnemyOracle for BattleContent {
    fn enemy(&self, id: &EnemyId) -> Option<&Enemy> {
        self.enemies.get(id)
    }
}
