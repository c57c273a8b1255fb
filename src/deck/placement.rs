//! Placements - one physical card copy each.

use serde::{Deserialize, Serialize};

use crate::core::{ArtId, CardId, PlacementId};

/// One physical copy of a card in the deck.
///
/// The owning section is tracked by `DisplayOrder`, not here, so a
/// placement can never claim membership in two sections at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// Stable handle for this copy, assigned at creation and never reused.
    pub id: PlacementId,

    /// Which card this is a copy of.
    pub cid: CardId,

    /// Which artwork variant, always normalized to a defined value.
    pub art: ArtId,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(id: PlacementId, cid: CardId, art: ArtId) -> Self {
        Self { id, cid, art }
    }

    /// Whether this placement matches a card, optionally narrowed to one
    /// artwork variant.
    #[must_use]
    pub fn matches(&self, cid: CardId, art: Option<ArtId>) -> bool {
        self.cid == cid && art.map_or(true, |a| self.art == a)
    }
}
