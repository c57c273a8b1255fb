//! Deck content snapshots.
//!
//! A snapshot is a uuid-free capture of what the deck contains and in what
//! order. It deliberately excludes placement handles: a deck saved, thrown
//! away, and reloaded gets fresh handles but must still compare equal to
//! its own snapshot. The surrounding UI uses snapshot strings to drive
//! "unsaved changes" prompts; capture is synchronous, so an in-flight
//! asynchronous save can never observe a half-mutated deck.

use serde::{Deserialize, Serialize};

use crate::core::{ArtId, CardId};
use crate::deck::{DeckState, Section};

/// One section's cards in display order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
struct SectionCards {
    section: Section,
    cards: Vec<(CardId, ArtId)>,
}

/// Serializable capture of the deck's content.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSnapshot {
    sections: Vec<SectionCards>,
}

impl DeckSnapshot {
    /// Capture the current deck content.
    #[must_use]
    pub fn capture(state: &DeckState) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|&section| SectionCards {
                section,
                cards: state
                    .order()
                    .section(section)
                    .iter()
                    .map(|p| (p.cid, p.art))
                    .collect(),
            })
            .collect();
        Self { sections }
    }

    /// Encode the snapshot as a string.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("snapshot serialization cannot fail")
    }

    /// Decode a snapshot string.
    pub fn decode(encoded: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(encoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlacementId;
    use crate::deck::Placement;

    fn placement(id: u64, cid: u32) -> Placement {
        Placement::new(PlacementId::new(id), CardId::new(cid), ArtId::DEFAULT)
    }

    #[test]
    fn test_capture_ignores_placement_ids() {
        let mut a = DeckState::new();
        a.push(Section::Main, placement(1, 10));
        a.push(Section::Main, placement(2, 11));

        let mut b = DeckState::new();
        b.push(Section::Main, placement(77, 10));
        b.push(Section::Main, placement(78, 11));

        assert_eq!(DeckSnapshot::capture(&a), DeckSnapshot::capture(&b));
        assert_eq!(DeckSnapshot::capture(&a).encode(), DeckSnapshot::capture(&b).encode());
    }

    #[test]
    fn test_capture_is_order_sensitive() {
        let mut a = DeckState::new();
        a.push(Section::Main, placement(1, 10));
        a.push(Section::Main, placement(2, 11));

        let mut b = DeckState::new();
        b.push(Section::Main, placement(1, 11));
        b.push(Section::Main, placement(2, 10));

        assert_ne!(DeckSnapshot::capture(&a), DeckSnapshot::capture(&b));
    }

    #[test]
    fn test_encode_decode_round_trip() {
        let mut state = DeckState::new();
        state.push(Section::Extra, placement(1, 20));

        let snapshot = DeckSnapshot::capture(&state);
        let decoded = DeckSnapshot::decode(&snapshot.encode()).unwrap();
        assert_eq!(snapshot, decoded);
    }
}
