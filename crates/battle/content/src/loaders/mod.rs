//! Content loaders for reading battle data from files.
//!
//! Card and enemy catalogs plus packs are RON, the battle configuration is
//! TOML. Catalogs are validated on load: duplicate ids are rejected, and
//! every power and modifier field must be a finite non-negative magnitude.

pub mod cards;
pub mod config;
pub mod enemies;
pub mod factory;
pub mod packs;

pub use cards::{CardCatalog, CardLoader};
pub use config::ConfigLoader;
pub use enemies::{EnemyCatalog, EnemyLoader};
pub use factory::ContentFactory;
pub use packs::{PackCatalog, PackLoader};

use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::path::Path;

use battle_core::modifier::is_magnitude;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

/// Fails on the first id that appears twice.
pub(crate) fn ensure_unique<'a, K>(kind: &str, ids: impl IntoIterator<Item = &'a K>) -> LoadResult<()>
where
    K: Eq + Hash + Display + 'a,
{
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            anyhow::bail!("Duplicate {} id '{}'", kind, id);
        }
    }
    Ok(())
}

/// Fails unless `value` is a finite non-negative magnitude.
pub(crate) fn ensure_magnitude(owner: impl Display, field: &str, value: f64) -> LoadResult<()> {
    if !is_magnitude(value) {
        anyhow::bail!("{}: {} must be a non-negative number (got {})", owner, field, value);
    }
    Ok(())
}
