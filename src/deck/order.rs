//! Display order: per-section ordered placement lists.
//!
//! `DisplayOrder` tracks where every placement lives and in what order.
//! It keeps two views:
//! - ordered lists per section (insertion order is the rendered order)
//! - a location index from placement ID to section
//!
//! The location index is the authority on membership, so a placement ID is
//! always in exactly one section (or absent entirely). Section lists are
//! `im::Vector`, which clones in O(1) - the undo history leans on this to
//! capture whole-section snapshots cheaply.

use im::Vector;
use rustc_hash::FxHashMap;

use super::placement::Placement;
use super::section::{Section, SectionMap};
use crate::core::{ArtId, CardId, PlacementId};

/// Per-section ordered placement lists with a placement location index.
#[derive(Clone, Debug, Default)]
pub struct DisplayOrder {
    /// Placement locations: id -> section.
    locations: FxHashMap<PlacementId, Section>,

    /// Ordered placement lists per section.
    sections: SectionMap<Vector<Placement>>,
}

impl DisplayOrder {
    /// Create a new empty display order.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a section's placements in display order.
    #[must_use]
    pub fn section(&self, section: Section) -> &Vector<Placement> {
        &self.sections[section]
    }

    /// Number of placements in a section.
    #[must_use]
    pub fn len(&self, section: Section) -> usize {
        self.sections[section].len()
    }

    /// Whether a section is empty.
    #[must_use]
    pub fn is_empty(&self, section: Section) -> bool {
        self.sections[section].is_empty()
    }

    /// Total number of placements across all sections.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.locations.len()
    }

    /// The section a placement is in.
    #[must_use]
    pub fn section_of(&self, id: PlacementId) -> Option<Section> {
        self.locations.get(&id).copied()
    }

    /// Whether the order tracks a placement.
    #[must_use]
    pub fn contains(&self, id: PlacementId) -> bool {
        self.locations.contains_key(&id)
    }

    /// Index of a placement within a section.
    #[must_use]
    pub fn position(&self, section: Section, id: PlacementId) -> Option<usize> {
        self.sections[section].iter().position(|p| p.id == id)
    }

    /// Get a placement by ID.
    #[must_use]
    pub fn get(&self, id: PlacementId) -> Option<&Placement> {
        let section = self.section_of(id)?;
        let index = self.position(section, id)?;
        self.sections[section].get(index)
    }

    /// Append a placement to the end of a section.
    ///
    /// Panics if the placement ID is already tracked.
    pub fn push(&mut self, section: Section, placement: Placement) {
        self.insert_at(section, self.sections[section].len(), placement);
    }

    /// Insert a placement at an index within a section (clamped to the
    /// section length).
    ///
    /// Panics if the placement ID is already tracked.
    pub fn insert_at(&mut self, section: Section, index: usize, placement: Placement) {
        if self.locations.contains_key(&placement.id) {
            panic!("{} already tracked", placement.id);
        }
        self.locations.insert(placement.id, section);
        let list = &mut self.sections[section];
        let index = index.min(list.len());
        list.insert(index, placement);
    }

    /// Insert a placement immediately before an anchor placement, or at the
    /// end of the section when the anchor is `None`.
    ///
    /// Returns the insertion index, or `None` if the anchor is not in the
    /// section (nothing is inserted).
    pub fn insert_before(
        &mut self,
        section: Section,
        placement: Placement,
        before: Option<PlacementId>,
    ) -> Option<usize> {
        let index = match before {
            Some(anchor) => self.position(section, anchor)?,
            None => self.sections[section].len(),
        };
        self.insert_at(section, index, placement);
        Some(index)
    }

    /// Remove a placement entirely.
    ///
    /// Returns the section, index, and placement, or `None` if untracked.
    pub fn remove(&mut self, id: PlacementId) -> Option<(Section, usize, Placement)> {
        let section = self.locations.remove(&id)?;
        let index = self
            .sections[section]
            .iter()
            .position(|p| p.id == id)
            .expect("location index out of sync with section list");
        let placement = self.sections[section].remove(index);
        Some((section, index, placement))
    }

    /// First placement in display order matching a card.
    #[must_use]
    pub fn first_match(&self, section: Section, cid: CardId) -> Option<&Placement> {
        self.sections[section].iter().find(|p| p.cid == cid)
    }

    /// Last placement in display order matching a card, optionally narrowed
    /// to one artwork variant.
    #[must_use]
    pub fn last_match(
        &self,
        section: Section,
        cid: CardId,
        art: Option<ArtId>,
    ) -> Option<&Placement> {
        self.sections[section]
            .iter()
            .rev()
            .find(|p| p.matches(cid, art))
    }

    /// Move a placement within its section from one index to another, where
    /// both indices are positions in the full section list. Pure
    /// permutation; the location index is untouched.
    pub fn shift(&mut self, section: Section, from_index: usize, to_index: usize) {
        if from_index == to_index {
            return;
        }
        let list = &mut self.sections[section];
        let placement = list.remove(from_index);
        let to_index = to_index.min(list.len());
        list.insert(to_index, placement);
    }

    /// Replace a section's ordered list wholesale, fixing up the location
    /// index for any placements entering or leaving the section.
    ///
    /// Only placements still located in this section are evicted from the
    /// index, so restoring several sections in sequence converges to a
    /// consistent index regardless of restore order.
    pub fn replace_section(&mut self, section: Section, placements: Vector<Placement>) {
        let old = std::mem::take(&mut self.sections[section]);
        for p in &old {
            if self.locations.get(&p.id) == Some(&section) {
                self.locations.remove(&p.id);
            }
        }
        for p in &placements {
            self.locations.insert(p.id, section);
        }
        self.sections[section] = placements;
    }

    /// Iterate over every placement with its section.
    pub fn iter_all(&self) -> impl Iterator<Item = (Section, &Placement)> {
        self.sections
            .iter()
            .flat_map(|(section, list)| list.iter().map(move |p| (section, p)))
    }

    /// Remove all placements.
    pub fn clear(&mut self) {
        self.locations.clear();
        for (_, list) in self.sections.iter_mut() {
            list.clear();
        }
    }
}
