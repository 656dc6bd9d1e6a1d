//! Card catalog loader.

use std::path::Path;

use battle_core::BattleCard;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_magnitude, ensure_unique, read_file};

/// Card catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCatalog {
    pub cards: Vec<BattleCard>,
}

/// Loader for card templates from RON files.
pub struct CardLoader;

impl CardLoader {
    /// Load a card catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<BattleCard>> {
        let content = read_file(path)?;
        let cards = Self::parse(&content)?;
        info!(path = %path.display(), count = cards.len(), "loaded card catalog");
        Ok(cards)
    }

    /// Parse a card catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<BattleCard>> {
        let catalog: CardCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse card catalog RON: {}", e))?;
        ensure_unique("card", catalog.cards.iter().map(|card| &card.id))?;
        for card in &catalog.cards {
            Self::validate(card)?;
        }

        Ok(catalog.cards)
    }

    fn validate(card: &BattleCard) -> LoadResult<()> {
        ensure_magnitude(format_args!("Card '{}'", card.id), "power", card.power)?;
        if let Some(skill) = &card.skill {
            let owner = format!("Card '{}' skill '{}'", card.id, skill.id);
            for (field, value) in skill.calculator.invalid_magnitudes() {
                ensure_magnitude(&owner, field, value)?;
            }
        }
        Ok(())
    }
}
