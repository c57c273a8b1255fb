//! Identifier newtypes.
//!
//! Three kinds of identity matter in a deck editor:
//! - `CardId`: which card (the printed card, shared by all copies)
//! - `ArtId`: which artwork variant of that card
//! - `PlacementId`: one physical copy's slot in the deck
//!
//! `PlacementId` is the only reliable way to target a specific copy among
//! duplicates: it is assigned once when the copy is created and never
//! reused, regardless of how the copy is moved or reordered.

use serde::{Deserialize, Serialize};

/// Unique identifier for a card (the printed card, not a copy).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Identifier for an artwork variant of a card.
///
/// Source data frequently omits the variant; entry points normalize an
/// absent variant to [`ArtId::DEFAULT`] so the rest of the core never sees
/// an undefined value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ArtId(pub u32);

impl ArtId {
    /// The canonical artwork used when source data carries no variant.
    pub const DEFAULT: ArtId = ArtId(0);

    /// Create a new artwork ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Normalize an optional artwork to a defined value.
    #[must_use]
    pub fn normalize(art: Option<ArtId>) -> ArtId {
        art.unwrap_or(ArtId::DEFAULT)
    }
}

impl std::fmt::Display for ArtId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Art({})", self.0)
    }
}

/// Opaque handle for one physical card copy's slot.
///
/// Allocated monotonically by the editor, independent of section or
/// position, and never reused within an editing session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlacementId(pub u64);

impl PlacementId {
    /// Create a placement ID from a raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlacementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Placement({})", self.0)
    }
}

/// Identity of a persisted deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DeckNo(pub u32);

impl DeckNo {
    /// Create a new deck number.
    #[must_use]
    pub const fn new(no: u32) -> Self {
        Self(no)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for DeckNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Deck({})", self.0)
    }
}
