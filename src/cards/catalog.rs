//! Card catalog for metadata lookup.
//!
//! The `CardCatalog` is the editor's read-only view of card metadata. It
//! answers eligibility questions for `add_card`/`move_card` and provides
//! the sort keys used by `sort`.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::kind::CardKind;
use crate::core::CardId;

/// Metadata for one card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEntry {
    /// Unique card identifier.
    pub cid: CardId,

    /// Card name (display and sort tie-break).
    pub name: String,

    /// Kind with kind-specific data.
    pub kind: CardKind,
}

impl CardEntry {
    /// Create a new catalog entry.
    #[must_use]
    pub fn new(cid: CardId, name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            cid,
            name: name.into(),
            kind,
        }
    }
}

/// Registry of card metadata keyed by `CardId`.
///
/// ## Example
///
/// ```
/// use deck_editor::cards::{CardCatalog, CardEntry, CardKind, MonsterFrame};
/// use deck_editor::core::CardId;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardEntry::new(
///     CardId::new(1),
///     "Blue-Eyes White Dragon",
///     CardKind::Monster {
///         frame: MonsterFrame::Normal,
///         level: 8,
///         race: "Dragon".into(),
///         attribute: "Light".into(),
///     },
/// ));
///
/// let found = catalog.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Blue-Eyes White Dragon");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardEntry>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card entry.
    ///
    /// Panics if an entry with the same ID already exists.
    pub fn register(&mut self, entry: CardEntry) {
        if self.cards.contains_key(&entry.cid) {
            panic!("Card {} already registered", entry.cid);
        }
        self.cards.insert(entry.cid, entry);
    }

    /// Get a card entry by ID.
    #[must_use]
    pub fn get(&self, cid: CardId) -> Option<&CardEntry> {
        self.cards.get(&cid)
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, cid: CardId) -> bool {
        self.cards.contains_key(&cid)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &CardEntry> {
        self.cards.values()
    }

    /// Find entries matching a predicate.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardEntry>
    where
        F: Fn(&CardEntry) -> bool,
    {
        self.cards.values().filter(move |c| predicate(c))
    }
}
