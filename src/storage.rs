//! Storage boundary: flat deck records and the persistence seam.
//!
//! Persistence itself is external; this module only defines the flattened,
//! storage-shaped form of the aggregate (one record per section/card/
//! artwork/quantity) and the `PersistenceGateway` trait callers implement
//! against their storage of choice. The save policy is last-write-wins and
//! a failed save never rolls back in-memory deck state.

use serde::{Deserialize, Serialize};

use crate::core::{ArtId, CardId, DeckNo};
use crate::deck::{DeckState, Section};
use crate::error::EditError;

/// One persisted row: a card/artwork pair's quantity in one section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRecord {
    pub section: Section,
    pub cid: CardId,
    pub art: ArtId,
    pub quantity: u32,
}

/// A whole persisted deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckInfo {
    /// Persisted deck identity.
    pub dno: DeckNo,

    /// Display name.
    pub name: String,

    /// Flattened content rows. Within a section, rows appear in order of
    /// first appearance in the display order, so a load reproduces a
    /// recognizable card order.
    pub records: Vec<DeckRecord>,
}

impl DeckInfo {
    /// Flatten a deck state into storage records.
    #[must_use]
    pub fn from_state(dno: DeckNo, name: impl Into<String>, state: &DeckState) -> Self {
        let mut records = Vec::new();
        for &section in &Section::ALL {
            let mut seen: Vec<(CardId, ArtId)> = Vec::new();
            for p in state.order().section(section) {
                if !seen.contains(&(p.cid, p.art)) {
                    seen.push((p.cid, p.art));
                }
            }
            for (cid, art) in seen {
                records.push(DeckRecord {
                    section,
                    cid,
                    art,
                    quantity: state.aggregate().quantity(section, cid, art),
                });
            }
        }
        Self {
            dno,
            name: name.into(),
            records,
        }
    }

    /// Total number of physical copies across all records.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.records.iter().map(|r| r.quantity as usize).sum()
    }
}

/// External persistence seam.
///
/// Implementations are free to be backed by anything (browser storage,
/// files, a server). Failures surface as
/// [`EditError::StorageSaveFailed`] and are retry-able; the in-memory deck
/// is never rolled back.
pub trait PersistenceGateway {
    /// Persist a deck.
    fn save(&mut self, deck: &DeckInfo) -> Result<(), EditError>;

    /// Load a deck by number.
    fn load(&mut self, dno: DeckNo) -> Result<DeckInfo, EditError>;
}
