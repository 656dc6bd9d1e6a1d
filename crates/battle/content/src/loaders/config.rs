//! Battle configuration loader.

use std::path::Path;

use battle_core::BattleConfig;
use tracing::info;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`BattleConfig::default`].
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        let config = Self::parse(&content)?;
        info!(
            path = %path.display(),
            card_slot_limit = config.card_slot_limit,
            base_support_power = config.base_support_power,
            "loaded battle config"
        );
        Ok(config)
    }

    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        if config.base_support_power < 0.0 {
            anyhow::bail!(
                "base_support_power must not be negative (got {})",
                config.base_support_power
            );
        }

        Ok(config)
    }
}
