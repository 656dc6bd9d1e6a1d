//! Content factory for building battle tables from data files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use battle_core::{BattleCard, BattleConfig, Enemy};
use tracing::info;

use crate::catalog::BattleContent;
use crate::loaders::{CardLoader, ConfigLoader, EnemyLoader, LoadResult, PackLoader};
use crate::packs::CardPack;

/// Content factory that loads all battle content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── cards.ron
/// ├── enemies.ron
/// └── packs.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// The data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load battle configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load card templates from `cards.ron`.
    pub fn load_cards(&self) -> LoadResult<Vec<BattleCard>> {
        CardLoader::load(&self.data_dir.join("cards.ron"))
    }

    /// Load enemy definitions from `enemies.ron`.
    pub fn load_enemies(&self) -> LoadResult<Vec<Enemy>> {
        EnemyLoader::load(&self.data_dir.join("enemies.ron"))
    }

    /// Load card packs from `packs.ron`.
    pub fn load_packs(&self) -> LoadResult<Vec<CardPack>> {
        PackLoader::load(&self.data_dir.join("packs.ron"))
    }

    /// Load every table and assemble a [`BattleContent`].
    ///
    /// Fails when a pack references a card the catalog doesn't define.
    pub fn load_content(&self) -> LoadResult<BattleContent> {
        let content = BattleContent::new(self.load_config()?)
            .with_cards(self.load_cards()?)
            .with_enemies(self.load_enemies()?)
            .with_packs(self.load_packs()?);
        Self::validate(&content)
            .with_context(|| format!("Invalid content in {}", self.data_dir.display()))?;
        Ok(content)
    }

    /// Load data files on top of the built-in tables.
    ///
    /// Loaded entries replace built-ins with the same id; built-in cards with
    /// function-pointer skills stay available.
    pub fn load_overlay(&self) -> LoadResult<BattleContent> {
        let builtin = BattleContent::builtin();
        let content = BattleContent::new(self.load_config()?)
            .with_cards(builtin.cards().cloned())
            .with_enemies(builtin.enemies().cloned())
            .with_packs(builtin.packs().cloned())
            .with_cards(self.load_cards()?)
            .with_enemies(self.load_enemies()?)
            .with_packs(self.load_packs()?);
        Self::validate(&content)
            .with_context(|| format!("Invalid content in {}", self.data_dir.display()))?;
        Ok(content)
    }

    fn validate(content: &BattleContent) -> LoadResult<()> {
        if let Some((pack, card)) = content.dangling_pack_entries().first() {
            anyhow::bail!("Pack '{}' references unknown card '{}'", pack, card);
        }
        info!(
            cards = content.cards().count(),
            enemies = content.enemies().count(),
            packs = content.packs().count(),
            "battle content ready"
        );
        Ok(())
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
