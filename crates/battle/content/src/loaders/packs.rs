//! Card pack loader.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::loaders::{LoadResult, ensure_unique, read_file};
use crate::packs::CardPack;

/// Pack catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackCatalog {
    pub packs: Vec<CardPack>,
}

/// Loader for card packs from RON files.
pub struct PackLoader;

impl PackLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<CardPack>> {
        let content = read_file(path)?;
        let packs = Self::parse(&content)?;
        info!(path = %path.display(), count = packs.len(), "loaded card packs");
        Ok(packs)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<CardPack>> {
        let catalog: PackCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pack catalog RON: {}", e))?;
        ensure_unique("pack", catalog.packs.iter().map(|pack| &pack.id))?;

        Ok(catalog.packs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weighted_entries() {
        let packs = PackLoader::parse(
            r#"(packs: [
                (id: "mini", entries: [(card: "pike", weight: 2), (card: "bow", weight: 1)]),
                (id: "void"),
            ])"#,
        )
        .unwrap();
        assert_eq!(packs[0].total_weight(), 3);
        assert!(packs[1].entries.is_empty());
    }
}
