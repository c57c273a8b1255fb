//! Deck state: sections, placements, display order, aggregate, sync.

mod aggregate;
mod order;
mod placement;
mod section;
pub mod sort;
mod sync;

pub use aggregate::{AggregateEntry, DeckAggregate};
pub use order::DisplayOrder;
pub use placement::Placement;
pub use section::{Section, SectionMap};
pub use sync::{derive_aggregate, DeckState};
