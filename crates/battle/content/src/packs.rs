//! Weighted card packs.
//!
//! A pack is a list of card ids with integer weights. Opening a pack draws
//! with replacement through an injected [`Intner`], so the same generator
//! state always yields the same cards.

use battle_core::{CardId, Intner};

/// One card a pack can yield.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackEntry {
    pub card: CardId,
    /// Relative draw weight. Zero-weight entries are never drawn.
    pub weight: u32,
}

/// A weighted card pack.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CardPack {
    pub id: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub entries: Vec<PackEntry>,
}

impl CardPack {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_entry(mut self, card: impl Into<CardId>, weight: u32) -> Self {
        self.entries.push(PackEntry {
            card: card.into(),
            weight,
        });
        self
    }

    pub fn total_weight(&self) -> u32 {
        self.entries
            .iter()
            .fold(0u32, |total, entry| total.saturating_add(entry.weight))
    }

    /// Draws one card id, or `None` when the pack has no weight.
    pub fn draw(&self, rng: &mut impl Intner) -> Option<&CardId> {
        let total = self.total_weight();
        if total == 0 {
            return None;
        }

        let mut roll = rng.intn(total);
        for entry in &self.entries {
            if roll < entry.weight {
                return Some(&entry.card);
            }
            roll -= entry.weight;
        }
        None
    }

    /// Draws `count` card ids with replacement.
    pub fn open(&self, rng: &mut impl Intner, count: usize) -> Vec<CardId> {
        (0..count)
            .map_while(|_| self.draw(rng).cloned())
            .collect()
    }
}

/// Built-in packs.
pub fn builtin_packs() -> Vec<CardPack> {
    vec![
        CardPack::new("starter")
            .with_entry("militia", 4)
            .with_entry("swordsman", 3)
            .with_entry("scout", 3)
            .with_entry("apprentice", 3)
            .with_entry("shield_bearer", 2)
            .with_entry("priest", 1),
        CardPack::new("veteran")
            .with_entry("archer", 3)
            .with_entry("war_drummer", 3)
            .with_entry("banner_knight", 2)
            .with_entry("rogue", 2)
            .with_entry("berserker", 2)
            .with_entry("quartermaster", 2)
            .with_entry("battle_sage", 1),
        CardPack::new("relic")
            .with_entry("dragon_slayer", 2)
            .with_entry("exorcist", 2)
            .with_entry("archmage", 1),
    ]
}

#[cfg(test)]
mod tests {
    use battle_core::PcgRng;

    use super::*;

    /// Replays a fixed roll sequence.
    struct Script(Vec<u32>);

    impl Intner for Script {
        fn intn(&mut self, n: u32) -> u32 {
            if self.0.is_empty() { 0 } else { self.0.remove(0) % n.max(1) }
        }
    }

    fn pack() -> CardPack {
        CardPack::new("test")
            .with_entry("a", 1)
            .with_entry("never", 0)
            .with_entry("b", 3)
    }

    #[test]
    fn draw_walks_cumulative_weights() {
        let pack = pack();
        assert_eq!(pack.total_weight(), 4);
        let drawn = pack.open(&mut Script(vec![0, 1, 3]), 3);
        let ids: Vec<&str> = drawn.iter().map(CardId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "b"]);
    }

    #[test]
    fn zero_weight_entries_are_never_drawn() {
        let pack = pack();
        let mut rng = PcgRng::new(11);
        assert!(pack.open(&mut rng, 200).iter().all(|id| id.as_str() != "never"));
    }

    #[test]
    fn empty_pack_yields_nothing() {
        let pack = CardPack::new("empty").with_entry("x", 0);
        assert!(pack.draw(&mut PcgRng::new(1)).is_none());
        assert!(pack.open(&mut PcgRng::new(1), 5).is_empty());
    }

    #[test]
    fn same_seed_same_pack() {
        let pack = &builtin_packs()[0];
        let left = pack.open(&mut PcgRng::new(99), 10);
        let right = pack.open(&mut PcgRng::new(99), 10);
        assert_eq!(left, right);
        assert_eq!(left.len(), 10);
    }
}
