//! Synchronizer: keeps the two deck representations consistent.
//!
//! `DeckState` owns both the ordered `DisplayOrder` and the aggregated
//! `DeckAggregate` and routes every mutation through methods that update
//! both before returning. Operations are synchronous and uninterruptible,
//! so no caller ever observes a half-updated pair.
//!
//! Single-placement operations take the incremental `apply_delta` path;
//! bulk operations (load, section restore) re-derive a section's table
//! with `derive_aggregate` / `rebuild_section`.

use im::Vector;

use super::aggregate::DeckAggregate;
use super::order::DisplayOrder;
use super::placement::Placement;
use super::section::Section;
use crate::core::{ArtId, CardId, PlacementId};

/// Fully recompute an aggregate from a display order.
#[must_use]
pub fn derive_aggregate(order: &DisplayOrder) -> DeckAggregate {
    let mut aggregate = DeckAggregate::new();
    for (section, placement) in order.iter_all() {
        aggregate.add(section, placement.cid, placement.art);
    }
    aggregate
}

/// The two synchronized deck representations.
#[derive(Clone, Debug, Default)]
pub struct DeckState {
    order: DisplayOrder,
    aggregate: DeckAggregate,
}

impl DeckState {
    /// Create a new empty deck state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The ordered representation.
    #[must_use]
    pub fn order(&self) -> &DisplayOrder {
        &self.order
    }

    /// The aggregated representation.
    #[must_use]
    pub fn aggregate(&self) -> &DeckAggregate {
        &self.aggregate
    }

    /// Append a placement to the end of a section.
    pub fn push(&mut self, section: Section, placement: Placement) {
        self.order.push(section, placement);
        self.aggregate.apply_delta(section, &[placement], &[]);
        self.debug_check(section);
    }

    /// Insert a placement at an index within a section.
    pub fn insert_at(&mut self, section: Section, index: usize, placement: Placement) {
        self.order.insert_at(section, index, placement);
        self.aggregate.apply_delta(section, &[placement], &[]);
        self.debug_check(section);
    }

    /// Insert a placement before an anchor (end when `None`).
    ///
    /// Returns the insertion index, or `None` when the anchor is missing
    /// (state unchanged).
    pub fn insert_before(
        &mut self,
        section: Section,
        placement: Placement,
        before: Option<PlacementId>,
    ) -> Option<usize> {
        let index = self.order.insert_before(section, placement, before)?;
        self.aggregate.apply_delta(section, &[placement], &[]);
        self.debug_check(section);
        Some(index)
    }

    /// Remove a placement, returning its former section, index, and data.
    pub fn remove(&mut self, id: PlacementId) -> Option<(Section, usize, Placement)> {
        let (section, index, placement) = self.order.remove(id)?;
        self.aggregate.apply_delta(section, &[], &[placement]);
        self.debug_check(section);
        Some((section, index, placement))
    }

    /// Remove the last placement in display order matching a card
    /// (optionally narrowed to one artwork). Returns the removed
    /// placement's former index and data.
    pub fn remove_last_match(
        &mut self,
        section: Section,
        cid: CardId,
        art: Option<ArtId>,
    ) -> Option<(usize, Placement)> {
        let id = self.order.last_match(section, cid, art)?.id;
        let (_, index, placement) = self.remove(id)?;
        Some((index, placement))
    }

    /// Move a placement within its section to sit immediately before an
    /// anchor (end when `None`). Pure permutation.
    ///
    /// Returns `(from_index, to_index)` in before/after coordinates, or
    /// `None` if the placement or anchor is missing from the section.
    pub fn reorder(
        &mut self,
        section: Section,
        id: PlacementId,
        before: Option<PlacementId>,
    ) -> Option<(usize, usize)> {
        let from_index = self.order.position(section, id)?;
        if before == Some(id) {
            // Moving a placement before itself is a no-op.
            return Some((from_index, from_index));
        }
        let anchor_index = match before {
            Some(anchor) => self.order.position(section, anchor)?,
            None => self.order.len(section),
        };
        // Index of the final resting position once the moved element is out
        // of the list.
        let to_index = if anchor_index > from_index {
            anchor_index - 1
        } else {
            anchor_index
        };
        self.order.shift(section, from_index, to_index);
        Some((from_index, to_index))
    }

    /// Move a placement within its section by index. Used by history
    /// replay, where positions are already known.
    pub fn shift(&mut self, section: Section, from_index: usize, to_index: usize) {
        self.order.shift(section, from_index, to_index);
    }

    /// Replace a section's order wholesale and re-derive its aggregate
    /// table. Used by shuffle/sort recording and snapshot restore.
    pub fn restore_section(&mut self, section: Section, placements: Vector<Placement>) {
        self.order.replace_section(section, placements);
        let list = self.order.section(section).clone();
        self.aggregate.rebuild_section(section, list.iter());
        self.debug_check(section);
    }

    /// Replace a section's order with a permutation of itself. The
    /// aggregate is untouched (shuffle and sort never change quantities).
    pub fn permute_section(&mut self, section: Section, placements: Vector<Placement>) {
        debug_assert_eq!(placements.len(), self.order.len(section));
        self.order.replace_section(section, placements);
        self.debug_check(section);
    }

    /// Drop all placements and rows.
    pub fn clear(&mut self) {
        self.order.clear();
        self.aggregate.clear();
    }

    /// Debug-build check of the per-section count invariant.
    fn debug_check(&self, section: Section) {
        debug_assert_eq!(
            self.aggregate.section_total(section) as usize,
            self.order.len(section),
            "aggregate out of sync with display order in {section}",
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PlacementId;

    fn placement(id: u64, cid: u32) -> Placement {
        Placement::new(PlacementId::new(id), CardId::new(cid), ArtId::DEFAULT)
    }

    fn synced(state: &DeckState) -> bool {
        Section::ALL.iter().all(|&s| {
            state.aggregate().section_total(s) as usize == state.order().len(s)
        })
    }

    #[test]
    fn test_push_updates_both() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 10));

        assert_eq!(state.order().len(Section::Main), 2);
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 2);
        assert!(synced(&state));
    }

    #[test]
    fn test_remove_updates_both() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 10));

        let removed = state.remove(PlacementId::new(1));
        assert_eq!(removed, Some((Section::Main, 0, placement(1, 10))));
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 1);
        assert!(synced(&state));
    }

    #[test]
    fn test_remove_last_match() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 11));
        state.push(Section::Main, placement(3, 10));

        let removed = state.remove_last_match(Section::Main, CardId::new(10), None);
        assert_eq!(removed, Some((2, placement(3, 10))));
        assert!(synced(&state));
    }

    #[test]
    fn test_reorder_before_anchor() {
        let mut state = DeckState::new();
        for i in 1..=4 {
            state.push(Section::Main, placement(i, i as u32));
        }

        // Move 4 before 2: [1, 4, 2, 3]
        let moved = state.reorder(Section::Main, PlacementId::new(4), Some(PlacementId::new(2)));
        assert_eq!(moved, Some((3, 1)));

        let ids: Vec<u64> = state.order().section(Section::Main).iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_reorder_to_end() {
        let mut state = DeckState::new();
        for i in 1..=3 {
            state.push(Section::Main, placement(i, i as u32));
        }

        let moved = state.reorder(Section::Main, PlacementId::new(1), None);
        assert_eq!(moved, Some((0, 2)));

        let ids: Vec<u64> = state.order().section(Section::Main).iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_reorder_missing_anchor() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 1));

        let moved = state.reorder(Section::Main, PlacementId::new(1), Some(PlacementId::new(9)));
        assert_eq!(moved, None);
    }

    #[test]
    fn test_reorder_before_self_is_noop() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 1));
        state.push(Section::Main, placement(2, 2));

        let moved = state.reorder(Section::Main, PlacementId::new(2), Some(PlacementId::new(2)));
        assert_eq!(moved, Some((1, 1)));
    }

    #[test]
    fn test_derive_aggregate() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 10));
        state.push(Section::Extra, placement(3, 20));

        let derived = derive_aggregate(state.order());
        assert_eq!(derived, *state.aggregate());
    }

    #[test]
    fn test_restore_section_resyncs_aggregate() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));

        let mut replacement = Vector::new();
        replacement.push_back(placement(2, 20));
        replacement.push_back(placement(3, 20));
        state.restore_section(Section::Main, replacement);

        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 0);
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(20)), 2);
        assert!(synced(&state));
    }

    #[test]
    fn test_permute_section_keeps_aggregate() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 11));

        let before = state.aggregate().clone();
        let mut reversed: Vec<Placement> = state.order().section(Section::Main).iter().copied().collect();
        reversed.reverse();
        state.permute_section(Section::Main, reversed.into_iter().collect());

        assert_eq!(*state.aggregate(), before);
        let ids: Vec<u64> = state.order().section(Section::Main).iter().map(|p| p.id.raw()).collect();
        assert_eq!(ids, vec![2, 1]);
    }
}
