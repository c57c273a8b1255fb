//! # deck-editor
//!
//! A deck construction engine for collectible card games.
//!
//! ## Design Principles
//!
//! 1. **Dual Representation**: Every deck is held both as ordered
//!    placement lists (what the build screen renders) and as aggregated
//!    quantity tables (what rules and persistence consume). The two are
//!    kept consistent by construction; mutations go through `DeckState`.
//!
//! 2. **Commands, Not Snapshots**: Each completed mutation records an
//!    invertible command, giving unbounded undo/redo without copying the
//!    whole deck. Bulk permutations (shuffle, sort, positional moves)
//!    store before/after section lists, which are O(1) clones via `im`.
//!
//! 3. **Validate First**: Eligibility and the cross-section copy limit
//!    are checked before anything is touched, so a rejected operation
//!    leaves the deck exactly as it was.
//!
//! ## Modules
//!
//! - `core`: ID newtypes and the deterministic shuffle RNG
//! - `cards`: Card kinds and the card catalog
//! - `deck`: Sections, placements, display order, aggregate, sync
//! - `editor`: The `DeckEditor` controller and its mutation operations
//! - `history`: Command records and the undo/redo stack
//! - `snapshot`: UUID-free content snapshots for unsaved-change checks
//! - `storage`: Flattened deck records and the persistence seam

pub mod cards;
pub mod core;
pub mod deck;
pub mod editor;
pub mod error;
pub mod history;
pub mod snapshot;
pub mod storage;

pub use crate::cards::{CardCatalog, CardEntry, CardKind, MonsterFrame};
pub use crate::core::{ArtId, CardId, DeckNo, DeckRng, PlacementId};
pub use crate::deck::{AggregateEntry, DeckAggregate, DeckState, DisplayOrder, Placement, Section};
pub use crate::editor::{DeckEditor, COPY_LIMIT};
pub use crate::error::{EditError, EditResult};
pub use crate::history::{Command, CommandStack};
pub use crate::snapshot::DeckSnapshot;
pub use crate::storage::{DeckInfo, DeckRecord, PersistenceGateway};
