//! Static battle content and loaders.
//!
//! This crate houses the built-in battle tables and loaders for RON/TOML data files:
//! - Card templates (code, plus data-driven via RON)
//! - Enemy definitions and enemy-skill factories (code, plus RON)
//! - Weighted card packs (code, plus RON)
//! - Battle configuration (TOML)
//!
//! Content is read through the `battle-core` oracle traits and never appears
//! in battlefield state.

pub mod cards;
pub mod catalog;
pub mod enemies;
pub mod packs;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::BattleContent;
pub use packs::{CardPack, PackEntry};

#[cfg(feature = "loaders")]
pub use loaders::{CardLoader, ConfigLoader, ContentFactory, EnemyLoader, LoadResult, PackLoader};
