//! The deck total order used by section sorting.
//!
//! Sort keys, in priority order:
//! 1. card kind: monster before spell before trap
//! 2. monster frame precedence: fusion, synchro, xyz, link, then the rest
//! 3. level/rank/link value, descending
//! 4. spell/trap effect subtype, ascending
//! 5. card name ascending, then card ID ascending
//!
//! Cards missing from the catalog sort after all known cards, by card ID.
//! Sorting is stable: placements with identical keys keep their relative
//! order.

use std::cmp::Ordering;

use crate::cards::{CardCatalog, CardEntry};
use crate::deck::Placement;

/// Compare two catalog entries by the deck total order.
#[must_use]
pub fn compare_entries(a: &CardEntry, b: &CardEntry) -> Ordering {
    a.kind
        .sort_rank()
        .cmp(&b.kind.sort_rank())
        .then_with(|| a.kind.frame_rank().cmp(&b.kind.frame_rank()))
        .then_with(|| b.kind.level().cmp(&a.kind.level()))
        .then_with(|| a.kind.effect().cmp(b.kind.effect()))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| a.cid.cmp(&b.cid))
}

/// Compare two placements, resolving their metadata through the catalog.
#[must_use]
pub fn compare_placements(catalog: &CardCatalog, a: &Placement, b: &Placement) -> Ordering {
    match (catalog.get(a.cid), catalog.get(b.cid)) {
        (Some(ea), Some(eb)) => compare_entries(ea, eb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cid.cmp(&b.cid),
    }
}
