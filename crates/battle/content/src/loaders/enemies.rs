//! Enemy catalog loader.

use std::path::Path;

use battle_core::Enemy;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_magnitude, ensure_unique, read_file};

/// Enemy catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyCatalog {
    pub enemies: Vec<Enemy>,
}

/// Loader for enemy definitions from RON files.
pub struct EnemyLoader;

impl EnemyLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<Enemy>> {
        let content = read_file(path)?;
        let enemies = Self::parse(&content)?;
        info!(path = %path.display(), count = enemies.len(), "loaded enemy catalog");
        Ok(enemies)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<Enemy>> {
        let catalog: EnemyCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse enemy catalog RON: {}", e))?;
        ensure_unique("enemy", catalog.enemies.iter().map(|enemy| &enemy.id))?;
        for enemy in &catalog.enemies {
            Self::validate(enemy)?;
        }

        Ok(catalog.enemies)
    }

    fn validate(enemy: &Enemy) -> LoadResult<()> {
        ensure_magnitude(format_args!("Enemy '{}'", enemy.id), "power", enemy.power)?;
        for skill in &enemy.skills {
            let owner = format!("Enemy '{}' skill '{}'", enemy.id, skill.id);
            for (field, value) in skill.modifier.invalid_fields() {
                ensure_magnitude(&owner, field, value)?;
            }
        }
        Ok(())
    }
}
