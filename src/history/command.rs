//! Invertible command records.
//!
//! Every successful mutation is recorded as a `Command` carrying enough
//! information to run backwards and forwards again. Cheaply invertible
//! operations (add, remove, move, reorder) store a minimal inverse;
//! positional moves, shuffles, and sorts store before/after section
//! snapshots, since their inverses are not cheaply expressible. Snapshots
//! are `im::Vector` clones, so capturing them is O(1).

use im::Vector;
use smallvec::SmallVec;

use crate::deck::{DeckState, Placement, Section};
use crate::core::PlacementId;

/// Before/after order of one section touched by a snapshot command.
#[derive(Clone, Debug)]
pub struct SectionChange {
    pub section: Section,
    pub before: Vector<Placement>,
    pub after: Vector<Placement>,
}

/// One recorded mutation with its inverse.
#[derive(Clone, Debug)]
pub enum Command {
    /// A placement was appended to the end of a section.
    Add { section: Section, placement: Placement },

    /// A placement was removed from a section at an index.
    Remove {
        section: Section,
        index: usize,
        placement: Placement,
    },

    /// A placement was relocated from one section (at an index) to the end
    /// of another.
    Move {
        placement: Placement,
        from: Section,
        from_index: usize,
        to: Section,
    },

    /// A placement was moved within its section. Indices are positions in
    /// the pre-move and post-move lists respectively.
    Reorder {
        section: Section,
        id: PlacementId,
        from_index: usize,
        to_index: usize,
    },

    /// One or two sections were rewritten wholesale (positional move,
    /// shuffle, sort).
    Sections {
        changes: SmallVec<[SectionChange; 2]>,
    },
}

impl Command {
    /// The mutation this record captures, for diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add_card",
            Command::Remove { .. } => "remove_card",
            Command::Move { .. } => "move_card",
            Command::Reorder { .. } => "reorder",
            Command::Sections { .. } => "sections",
        }
    }

    /// Apply the inverse of this command.
    pub fn undo(&self, state: &mut DeckState) {
        match self {
            Command::Add { placement, .. } => {
                let _removed = state.remove(placement.id);
                debug_assert!(_removed.is_some(), "undo add: placement missing");
            }
            Command::Remove {
                section,
                index,
                placement,
            } => {
                state.insert_at(*section, *index, *placement);
            }
            Command::Move {
                placement,
                from,
                from_index,
                ..
            } => {
                let _removed = state.remove(placement.id);
                debug_assert!(_removed.is_some(), "undo move: placement missing");
                state.insert_at(*from, *from_index, *placement);
            }
            Command::Reorder {
                section,
                from_index,
                to_index,
                ..
            } => {
                state.shift(*section, *to_index, *from_index);
            }
            Command::Sections { changes } => {
                for change in changes {
                    state.restore_section(change.section, change.before.clone());
                }
            }
        }
    }

    /// Re-apply the forward effect of this command.
    pub fn redo(&self, state: &mut DeckState) {
        match self {
            Command::Add { section, placement } => {
                state.push(*section, *placement);
            }
            Command::Remove { placement, .. } => {
                let _removed = state.remove(placement.id);
                debug_assert!(_removed.is_some(), "redo remove: placement missing");
            }
            Command::Move { placement, to, .. } => {
                let _removed = state.remove(placement.id);
                debug_assert!(_removed.is_some(), "redo move: placement missing");
                state.push(*to, *placement);
            }
            Command::Reorder {
                section,
                from_index,
                to_index,
                ..
            } => {
                state.shift(*section, *from_index, *to_index);
            }
            Command::Sections { changes } => {
                for change in changes {
                    state.restore_section(change.section, change.after.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtId, CardId, PlacementId};

    fn placement(id: u64, cid: u32) -> Placement {
        Placement::new(PlacementId::new(id), CardId::new(cid), ArtId::DEFAULT)
    }

    fn ids(state: &DeckState, section: Section) -> Vec<u64> {
        state.order().section(section).iter().map(|p| p.id.raw()).collect()
    }

    #[test]
    fn test_add_round_trip() {
        let mut state = DeckState::new();
        let p = placement(1, 10);
        state.push(Section::Main, p);

        let cmd = Command::Add { section: Section::Main, placement: p };

        cmd.undo(&mut state);
        assert!(ids(&state, Section::Main).is_empty());
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 0);

        cmd.redo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1]);
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 1);
    }

    #[test]
    fn test_remove_round_trip() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 11));
        state.push(Section::Main, placement(3, 12));

        let (index, removed) = state.remove_last_match(Section::Main, CardId::new(11), None).unwrap();
        let cmd = Command::Remove { section: Section::Main, index, placement: removed };

        cmd.undo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 2, 3]);

        cmd.redo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 3]);
    }

    #[test]
    fn test_move_round_trip() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 11));

        let (from, from_index, p) = state.remove(PlacementId::new(1)).unwrap();
        state.push(Section::Side, p);
        let cmd = Command::Move { placement: p, from, from_index, to: Section::Side };

        cmd.undo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 2]);
        assert!(ids(&state, Section::Side).is_empty());

        cmd.redo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![2]);
        assert_eq!(ids(&state, Section::Side), vec![1]);
    }

    #[test]
    fn test_reorder_round_trip() {
        let mut state = DeckState::new();
        for i in 1..=4 {
            state.push(Section::Main, placement(i, i as u32));
        }

        let (from_index, to_index) = state
            .reorder(Section::Main, PlacementId::new(4), Some(PlacementId::new(2)))
            .unwrap();
        assert_eq!(ids(&state, Section::Main), vec![1, 4, 2, 3]);

        let cmd = Command::Reorder {
            section: Section::Main,
            id: PlacementId::new(4),
            from_index,
            to_index,
        };

        cmd.undo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 2, 3, 4]);

        cmd.redo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_sections_round_trip_across_two_sections() {
        let mut state = DeckState::new();
        state.push(Section::Main, placement(1, 10));
        state.push(Section::Main, placement(2, 11));
        state.push(Section::Extra, placement(3, 20));

        let main_before = state.order().section(Section::Main).clone();
        let extra_before = state.order().section(Section::Extra).clone();

        // Relocate placement 1 from main to extra, front position.
        let (_, _, p) = state.remove(PlacementId::new(1)).unwrap();
        state.insert_at(Section::Extra, 0, p);

        let cmd = Command::Sections {
            changes: SmallVec::from_vec(vec![
                SectionChange {
                    section: Section::Main,
                    before: main_before,
                    after: state.order().section(Section::Main).clone(),
                },
                SectionChange {
                    section: Section::Extra,
                    before: extra_before,
                    after: state.order().section(Section::Extra).clone(),
                },
            ]),
        };

        cmd.undo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![1, 2]);
        assert_eq!(ids(&state, Section::Extra), vec![3]);
        assert_eq!(state.aggregate().card_quantity(Section::Main, CardId::new(10)), 1);
        assert_eq!(state.aggregate().card_quantity(Section::Extra, CardId::new(10)), 0);

        cmd.redo(&mut state);
        assert_eq!(ids(&state, Section::Main), vec![2]);
        assert_eq!(ids(&state, Section::Extra), vec![1, 3]);
        assert_eq!(state.aggregate().card_quantity(Section::Extra, CardId::new(10)), 1);
    }
}
