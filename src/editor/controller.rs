//! The deck editor controller.
//!
//! `DeckEditor` is the single owner of the deck state. Every mutation
//! entry point validates first, then updates both representations through
//! `DeckState`, then records an invertible command - in that order, so a
//! rejected operation leaves no trace and a recorded command always
//! matches a completed state change.

use std::cmp::Ordering;
use std::sync::Arc;

use im::Vector;
use smallvec::SmallVec;
use tracing::debug;

use crate::cards::{CardCatalog, CardEntry};
use crate::core::{ArtId, CardId, DeckNo, DeckRng, PlacementId};
use crate::deck::{sort, AggregateEntry, DeckState, Placement, Section};
use crate::error::{EditError, EditResult};
use crate::history::{Command, CommandStack, SectionChange};
use crate::snapshot::DeckSnapshot;
use crate::storage::DeckInfo;

/// Maximum copies of one card across `main + extra + side`.
pub const COPY_LIMIT: u32 = 3;

/// Owns and mutates one deck being edited.
///
/// ## Example
///
/// ```
/// use std::sync::Arc;
/// use deck_editor::cards::{CardCatalog, CardEntry, CardKind};
/// use deck_editor::core::CardId;
/// use deck_editor::deck::Section;
/// use deck_editor::editor::DeckEditor;
///
/// let mut catalog = CardCatalog::new();
/// catalog.register(CardEntry::new(
///     CardId::new(1),
///     "Pot of Greed",
///     CardKind::Spell { effect: "Normal".into() },
/// ));
///
/// let mut editor = DeckEditor::new(Arc::new(catalog), 42);
/// editor.add_card(CardId::new(1), None, Section::Main).unwrap();
/// assert_eq!(editor.section_len(Section::Main), 1);
///
/// editor.undo();
/// assert_eq!(editor.section_len(Section::Main), 0);
/// ```
pub struct DeckEditor {
    catalog: Arc<CardCatalog>,
    state: DeckState,
    history: CommandStack,
    rng: DeckRng,
    next_placement: u64,
}

impl DeckEditor {
    /// Create an editor over an empty deck with a seeded shuffle RNG.
    #[must_use]
    pub fn new(catalog: Arc<CardCatalog>, seed: u64) -> Self {
        Self::with_rng(catalog, DeckRng::new(seed))
    }

    /// Create an editor with a caller-provided RNG.
    #[must_use]
    pub fn with_rng(catalog: Arc<CardCatalog>, rng: DeckRng) -> Self {
        Self {
            catalog,
            state: DeckState::new(),
            history: CommandStack::new(),
            rng,
            next_placement: 0,
        }
    }

    // === Mutations ===

    /// Add one copy of a card to the end of a section.
    ///
    /// Returns the fresh placement handle. Fails with `InvalidSection` when
    /// the card is not eligible for the section, `MaxCopiesReached` when
    /// the cross-section copy limit would be exceeded, and `CardNotFound`
    /// when the catalog has no entry for the card.
    pub fn add_card(
        &mut self,
        cid: CardId,
        art: Option<ArtId>,
        section: Section,
    ) -> EditResult<PlacementId> {
        let art = ArtId::normalize(art);
        let entry = self.catalog.get(cid).ok_or(EditError::CardNotFound)?;
        check_eligibility(entry, section)?;
        self.check_copy_limit(cid, section, None)?;

        let placement = self.alloc_placement(cid, art);
        self.state.push(section, placement);
        self.history.record(Command::Add { section, placement });
        debug!(%cid, %section, id = placement.id.raw(), "add card");
        Ok(placement.id)
    }

    /// Remove one copy of a card from a section.
    ///
    /// The *last* matching placement in display order is removed; `art`
    /// narrows the match to one artwork variant. A missing match is a
    /// harmless no-op returning `Ok(None)` and recording nothing.
    pub fn remove_card(
        &mut self,
        cid: CardId,
        section: Section,
        art: Option<ArtId>,
    ) -> EditResult<Option<PlacementId>> {
        let Some((index, placement)) = self.state.remove_last_match(section, cid, art) else {
            return Ok(None);
        };
        self.history.record(Command::Remove {
            section,
            index,
            placement,
        });
        debug!(%cid, %section, id = placement.id.raw(), "remove card");
        Ok(Some(placement.id))
    }

    /// Relocate one copy of a card to the end of another section, keeping
    /// its placement handle.
    ///
    /// When `id` is `None`, the *first* matching placement in `from` is
    /// chosen. Destination eligibility and the copy limit are re-validated
    /// with the moving copy no longer counted toward its source; on
    /// rejection the state is unchanged.
    pub fn move_card(
        &mut self,
        cid: CardId,
        from: Section,
        to: Section,
        id: Option<PlacementId>,
    ) -> EditResult<PlacementId> {
        let source = match id {
            Some(id) => {
                let placement = self.state.order().get(id).copied();
                match placement {
                    Some(p) if p.cid == cid && self.state.order().section_of(id) == Some(from) => p,
                    _ => return Err(EditError::CardNotFound),
                }
            }
            None => self
                .state
                .order()
                .first_match(from, cid)
                .copied()
                .ok_or(EditError::CardNotFound)?,
        };
        let entry = self.catalog.get(cid).ok_or(EditError::CardNotFound)?;
        check_eligibility(entry, to)?;
        self.check_copy_limit(cid, to, Some(from))?;

        let Some((_, from_index, placement)) = self.state.remove(source.id) else {
            return Err(EditError::CardNotFound);
        };
        self.state.push(to, placement);
        self.history.record(Command::Move {
            placement,
            from,
            from_index,
            to,
        });
        debug!(%cid, %from, %to, id = placement.id.raw(), "move card");
        Ok(placement.id)
    }

    /// Drag-and-drop primitive: relocate the placement at `source` from
    /// `from` into `to`, immediately before `before` (end of `to` when
    /// `None`).
    ///
    /// Runs the same eligibility and copy-limit checks as [`move_card`].
    /// A `before` anchor missing from `to` fails with `CardNotFound` and
    /// leaves both sections untouched.
    ///
    /// [`move_card`]: DeckEditor::move_card
    pub fn move_card_before(
        &mut self,
        from: Section,
        to: Section,
        source: PlacementId,
        before: Option<PlacementId>,
    ) -> EditResult<()> {
        let placement = self
            .state
            .order()
            .get(source)
            .copied()
            .ok_or(EditError::CardNotFound)?;
        if self.state.order().section_of(source) != Some(from) {
            return Err(EditError::CardNotFound);
        }
        if before == Some(source) {
            // Dropping a card onto its own slot changes nothing.
            return Ok(());
        }
        if let Some(anchor) = before {
            if self.state.order().section_of(anchor) != Some(to) {
                return Err(EditError::CardNotFound);
            }
        }
        let entry = self.catalog.get(placement.cid).ok_or(EditError::CardNotFound)?;
        check_eligibility(entry, to)?;
        self.check_copy_limit(placement.cid, to, Some(from))?;

        let before_from = self.state.order().section(from).clone();
        let before_to = self.state.order().section(to).clone();

        let Some((_, source_index, placement)) = self.state.remove(source) else {
            return Err(EditError::CardNotFound);
        };
        if self.state.insert_before(to, placement, before).is_none() {
            // The anchor was validated above; put the copy back untouched.
            self.state.insert_at(from, source_index, placement);
            return Err(EditError::CardNotFound);
        }

        let mut changes: SmallVec<[SectionChange; 2]> = SmallVec::new();
        changes.push(SectionChange {
            section: from,
            before: before_from,
            after: self.state.order().section(from).clone(),
        });
        if to != from {
            changes.push(SectionChange {
                section: to,
                before: before_to,
                after: self.state.order().section(to).clone(),
            });
        }
        self.history.record(Command::Sections { changes });
        debug!(%from, %to, id = placement.id.raw(), "positional move");
        Ok(())
    }

    /// Move a placement within its section to sit immediately before an
    /// anchor (end of the section when `None`). Pure permutation.
    ///
    /// A missing placement or anchor fails with `CardNotFound`.
    pub fn reorder(
        &mut self,
        section: Section,
        id: PlacementId,
        before: Option<PlacementId>,
    ) -> EditResult<()> {
        let (from_index, to_index) = self
            .state
            .reorder(section, id, before)
            .ok_or(EditError::CardNotFound)?;
        if from_index != to_index {
            self.history.record(Command::Reorder {
                section,
                id,
                from_index,
                to_index,
            });
            debug!(%section, id = id.raw(), from_index, to_index, "reorder");
        }
        Ok(())
    }

    /// Shuffle a section into a uniformly random order (Fisher-Yates).
    ///
    /// The pre-shuffle order survives only in the recorded command, so
    /// `undo` is the only way back.
    pub fn shuffle(&mut self, section: Section) {
        if self.state.order().len(section) < 2 {
            return;
        }
        let before = self.state.order().section(section).clone();
        let mut shuffled: Vec<Placement> = before.iter().copied().collect();
        self.rng.shuffle(&mut shuffled);
        let after: Vector<Placement> = shuffled.into_iter().collect();

        self.state.permute_section(section, after.clone());
        let mut changes: SmallVec<[SectionChange; 2]> = SmallVec::new();
        changes.push(SectionChange { section, before, after });
        self.history.record(Command::Sections { changes });
        debug!(%section, "shuffle");
    }

    /// Stable-sort a section by the deck total order (see [`deck::sort`]).
    ///
    /// Recording is skipped when the section is already sorted.
    ///
    /// [`deck::sort`]: crate::deck::sort
    pub fn sort(&mut self, section: Section) {
        let catalog = Arc::clone(&self.catalog);
        self.sort_section_by(section, |a, b| sort::compare_placements(&catalog, a, b));
    }

    /// Stable-sort a section with a caller-provided comparator.
    pub fn sort_section_by<F>(&mut self, section: Section, mut cmp: F)
    where
        F: FnMut(&Placement, &Placement) -> Ordering,
    {
        let before = self.state.order().section(section).clone();
        let mut sorted: Vec<Placement> = before.iter().copied().collect();
        sorted.sort_by(|a, b| cmp(a, b));
        let after: Vector<Placement> = sorted.into_iter().collect();
        if after == before {
            return;
        }

        self.state.permute_section(section, after.clone());
        let mut changes: SmallVec<[SectionChange; 2]> = SmallVec::new();
        changes.push(SectionChange { section, before, after });
        self.history.record(Command::Sections { changes });
        debug!(%section, "sort");
    }

    // === History ===

    /// Undo the most recent mutation. Returns false when there is nothing
    /// to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.state)
    }

    /// Redo the most recently undone mutation. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.state)
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// The command history.
    #[must_use]
    pub fn history(&self) -> &CommandStack {
        &self.history
    }

    // === Queries ===

    /// Placements of a section in display order.
    pub fn placements(&self, section: Section) -> impl Iterator<Item = &Placement> {
        self.state.order().section(section).iter()
    }

    /// Number of placements in a section.
    #[must_use]
    pub fn section_len(&self, section: Section) -> usize {
        self.state.order().len(section)
    }

    /// Quantity of a card in a section across all artwork variants.
    #[must_use]
    pub fn quantity(&self, section: Section, cid: CardId) -> u32 {
        self.state.aggregate().card_quantity(section, cid)
    }

    /// Quantity of one card/artwork pair in a section.
    #[must_use]
    pub fn art_quantity(&self, section: Section, cid: CardId, art: ArtId) -> u32 {
        self.state.aggregate().quantity(section, cid, art)
    }

    /// Aggregate rows of a section, sorted by card and artwork.
    #[must_use]
    pub fn aggregate_entries(&self, section: Section) -> Vec<AggregateEntry> {
        self.state.aggregate().entries(section)
    }

    /// The underlying deck state (both representations).
    #[must_use]
    pub fn state(&self) -> &DeckState {
        &self.state
    }

    /// The card catalog this editor resolves metadata against.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    // === Snapshots & persistence boundary ===

    /// Capture the deck content as a snapshot string.
    #[must_use]
    pub fn capture_snapshot(&self) -> String {
        DeckSnapshot::capture(&self.state).encode()
    }

    /// Whether the deck differs from a previously captured snapshot.
    #[must_use]
    pub fn has_unsaved_changes(&self, saved: &str) -> bool {
        self.capture_snapshot() != saved
    }

    /// Flatten the deck into its storage-shaped form.
    #[must_use]
    pub fn deck_info(&self, dno: DeckNo, name: impl Into<String>) -> DeckInfo {
        DeckInfo::from_state(dno, name, &self.state)
    }

    /// Replace the deck with persisted content.
    ///
    /// Placements get fresh handles; the command history is cleared.
    pub fn load(&mut self, info: &DeckInfo) {
        self.state.clear();
        self.history.clear();
        for record in &info.records {
            for _ in 0..record.quantity {
                let placement = self.alloc_placement(record.cid, record.art);
                self.state.push(record.section, placement);
            }
        }
        debug!(dno = info.dno.raw(), cards = self.state.order().total_len(), "load deck");
    }

    /// Empty the deck and clear the history.
    pub fn reset(&mut self) {
        self.state.clear();
        self.history.clear();
    }

    // === Internals ===

    fn alloc_placement(&mut self, cid: CardId, art: ArtId) -> Placement {
        self.next_placement += 1;
        Placement::new(PlacementId::new(self.next_placement), cid, art)
    }

    /// Copy-limit check for a copy entering `to`. For relocations,
    /// `moving_from` discounts the copy from its source section first.
    fn check_copy_limit(
        &self,
        cid: CardId,
        to: Section,
        moving_from: Option<Section>,
    ) -> EditResult<()> {
        if !to.counts_toward_limit() {
            return Ok(());
        }
        let mut total = self.state.aggregate().limited_total(cid);
        if moving_from.is_some_and(Section::counts_toward_limit) {
            total -= 1;
        }
        if total + 1 > COPY_LIMIT {
            return Err(EditError::MaxCopiesReached { cid });
        }
        Ok(())
    }
}

/// Section eligibility: extra-deck monsters only in `extra`, never in
/// `main`; `side` and `trash` take anything.
fn check_eligibility(entry: &CardEntry, section: Section) -> EditResult<()> {
    let allowed = match section {
        Section::Main => !entry.kind.is_extra_deck(),
        Section::Extra => entry.kind.is_extra_deck(),
        Section::Side | Section::Trash => true,
    };
    if allowed {
        Ok(())
    } else {
        Err(EditError::InvalidSection {
            cid: entry.cid,
            section,
        })
    }
}
