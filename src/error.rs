//! Editing error taxonomy.
//!
//! Every mutation operation reports expected validation failures through
//! `EditError` instead of panicking. A failed operation never mutates deck
//! state, so callers can surface the error to the UI and continue.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::deck::Section;

/// Errors returned by deck mutation operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
pub enum EditError {
    /// Adding or moving this card would exceed the cross-section copy limit.
    ///
    /// The limit counts `main + extra + side`; the trash section is exempt.
    #[error("copy limit reached for {cid}")]
    MaxCopiesReached {
        /// The card that hit the limit.
        cid: CardId,
    },

    /// The card is not eligible for the destination section.
    ///
    /// Extra-deck monsters cannot go to `main`; only extra-deck monsters
    /// can go to `extra`.
    #[error("{cid} cannot be placed in the {section} section")]
    InvalidSection {
        /// The rejected card.
        cid: CardId,
        /// The rejected destination.
        section: Section,
    },

    /// A target placement, anchor, or catalog entry does not exist.
    ///
    /// Harmless for `remove_card` (which treats a missing match as a no-op),
    /// a hard failure for position-based moves and reorders where the anchor
    /// is load-bearing.
    #[error("card not found")]
    CardNotFound,

    /// Surfaced by an external `PersistenceGateway`, never generated by the
    /// in-memory core. Save failures do not roll back deck state.
    #[error("deck save failed: {reason}")]
    StorageSaveFailed {
        /// Gateway-provided failure description.
        reason: String,
    },
}

/// Result alias used throughout the editing core.
pub type EditResult<T> = Result<T, EditError>;
