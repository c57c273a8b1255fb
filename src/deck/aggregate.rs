//! Aggregated quantity tables.
//!
//! `DeckAggregate` is the second representation of the deck: per section,
//! a table from `(cid, art)` to the number of placements sharing that key.
//! It answers copy-limit and quantity queries in O(1) and is the shape the
//! storage boundary flattens into records.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::placement::Placement;
use super::section::{Section, SectionMap};
use crate::core::{ArtId, CardId};

/// One row of the aggregate: a card/artwork pair and its copy count
/// within a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateEntry {
    pub cid: CardId,
    pub art: ArtId,
    pub quantity: u32,
}

/// Per-section quantity tables keyed by `(cid, art)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeckAggregate {
    sections: SectionMap<FxHashMap<(CardId, ArtId), u32>>,
}

impl DeckAggregate {
    /// Create a new empty aggregate.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quantity of one card/artwork pair in a section.
    #[must_use]
    pub fn quantity(&self, section: Section, cid: CardId, art: ArtId) -> u32 {
        self.sections[section].get(&(cid, art)).copied().unwrap_or(0)
    }

    /// Quantity of a card in a section across all artwork variants.
    #[must_use]
    pub fn card_quantity(&self, section: Section, cid: CardId) -> u32 {
        self.sections[section]
            .iter()
            .filter(|((c, _), _)| *c == cid)
            .map(|(_, &q)| q)
            .sum()
    }

    /// Total copies of a card in the sections that count toward the copy
    /// limit (`main + extra + side`; trash excluded).
    #[must_use]
    pub fn limited_total(&self, cid: CardId) -> u32 {
        Section::ALL
            .iter()
            .filter(|s| s.counts_toward_limit())
            .map(|&s| self.card_quantity(s, cid))
            .sum()
    }

    /// Sum of all quantities in a section.
    #[must_use]
    pub fn section_total(&self, section: Section) -> u32 {
        self.sections[section].values().sum()
    }

    /// All rows of a section, sorted by `(cid, art)` for stable output.
    #[must_use]
    pub fn entries(&self, section: Section) -> Vec<AggregateEntry> {
        let mut rows: Vec<AggregateEntry> = self.sections[section]
            .iter()
            .map(|(&(cid, art), &quantity)| AggregateEntry { cid, art, quantity })
            .collect();
        rows.sort_by_key(|e| (e.cid, e.art));
        rows
    }

    /// Increment the count for one placement's key.
    pub fn add(&mut self, section: Section, cid: CardId, art: ArtId) {
        *self.sections[section].entry((cid, art)).or_insert(0) += 1;
    }

    /// Decrement the count for one placement's key, deleting the row at
    /// zero. Returns false if no row existed.
    pub fn remove(&mut self, section: Section, cid: CardId, art: ArtId) -> bool {
        match self.sections[section].get_mut(&(cid, art)) {
            Some(q) if *q > 1 => {
                *q -= 1;
                true
            }
            Some(_) => {
                self.sections[section].remove(&(cid, art));
                true
            }
            None => false,
        }
    }

    /// Incremental update for a batch of placements entering and leaving a
    /// section. Cheaper than a full re-derivation for single-placement
    /// operations.
    pub fn apply_delta(&mut self, section: Section, added: &[Placement], removed: &[Placement]) {
        for p in removed {
            self.remove(section, p.cid, p.art);
        }
        for p in added {
            self.add(section, p.cid, p.art);
        }
    }

    /// Rebuild one section's table from an ordered placement list.
    pub fn rebuild_section<'a>(
        &mut self,
        section: Section,
        placements: impl IntoIterator<Item = &'a Placement>,
    ) {
        let table = &mut self.sections[section];
        table.clear();
        for p in placements {
            *table.entry((p.cid, p.art)).or_insert(0) += 1;
        }
    }

    /// Remove all rows.
    pub fn clear(&mut self) {
        for (_, table) in self.sections.iter_mut() {
            table.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlacementId;

    fn placement(id: u64, cid: u32, art: u32) -> Placement {
        Placement::new(PlacementId::new(id), CardId::new(cid), ArtId::new(art))
    }

    #[test]
    fn test_add_and_quantity() {
        let mut agg = DeckAggregate::new();
        agg.add(Section::Main, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Main, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Main, CardId::new(1), ArtId::new(2));

        assert_eq!(agg.quantity(Section::Main, CardId::new(1), ArtId::DEFAULT), 2);
        assert_eq!(agg.quantity(Section::Main, CardId::new(1), ArtId::new(2)), 1);
        assert_eq!(agg.card_quantity(Section::Main, CardId::new(1)), 3);
        assert_eq!(agg.section_total(Section::Main), 3);
    }

    #[test]
    fn test_remove_deletes_row_at_zero() {
        let mut agg = DeckAggregate::new();
        agg.add(Section::Side, CardId::new(1), ArtId::DEFAULT);

        assert!(agg.remove(Section::Side, CardId::new(1), ArtId::DEFAULT));
        assert_eq!(agg.quantity(Section::Side, CardId::new(1), ArtId::DEFAULT), 0);
        assert!(agg.entries(Section::Side).is_empty());

        assert!(!agg.remove(Section::Side, CardId::new(1), ArtId::DEFAULT));
    }

    #[test]
    fn test_limited_total_excludes_trash() {
        let mut agg = DeckAggregate::new();
        agg.add(Section::Main, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Extra, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Side, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Trash, CardId::new(1), ArtId::DEFAULT);
        agg.add(Section::Trash, CardId::new(1), ArtId::DEFAULT);

        assert_eq!(agg.limited_total(CardId::new(1)), 3);
    }

    #[test]
    fn test_apply_delta() {
        let mut agg = DeckAggregate::new();
        agg.apply_delta(Section::Main, &[placement(1, 5, 0), placement(2, 5, 0)], &[]);
        assert_eq!(agg.card_quantity(Section::Main, CardId::new(5)), 2);

        agg.apply_delta(Section::Main, &[], &[placement(1, 5, 0)]);
        assert_eq!(agg.card_quantity(Section::Main, CardId::new(5)), 1);
    }

    #[test]
    fn test_rebuild_section() {
        let mut agg = DeckAggregate::new();
        agg.add(Section::Main, CardId::new(9), ArtId::DEFAULT);

        let placements = vec![placement(1, 5, 0), placement(2, 5, 0), placement(3, 6, 1)];
        agg.rebuild_section(Section::Main, &placements);

        assert_eq!(agg.quantity(Section::Main, CardId::new(9), ArtId::DEFAULT), 0);
        assert_eq!(agg.quantity(Section::Main, CardId::new(5), ArtId::new(0)), 2);
        assert_eq!(agg.quantity(Section::Main, CardId::new(6), ArtId::new(1)), 1);
        assert_eq!(agg.section_total(Section::Main), 3);
    }

    #[test]
    fn test_entries_sorted() {
        let mut agg = DeckAggregate::new();
        agg.add(Section::Main, CardId::new(7), ArtId::new(1));
        agg.add(Section::Main, CardId::new(3), ArtId::DEFAULT);
        agg.add(Section::Main, CardId::new(7), ArtId::DEFAULT);

        let rows = agg.entries(Section::Main);
        let keys: Vec<(u32, u32)> = rows.iter().map(|e| (e.cid.raw(), e.art.raw())).collect();
        assert_eq!(keys, vec![(3, 0), (7, 0), (7, 1)]);
    }
}
