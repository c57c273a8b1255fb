//! Linear undo/redo history.

use tracing::debug;

use super::command::Command;
use crate::deck::DeckState;

/// A recorded command with its sequence number.
#[derive(Clone, Debug)]
pub struct CommandRecord {
    /// Monotone sequence number assigned at record time.
    pub seq: u64,

    /// The recorded mutation.
    pub command: Command,
}

/// Command history with undo and redo stacks.
///
/// Linear history: recording a new command while the redo stack is
/// non-empty discards the redo stack (no branching).
#[derive(Clone, Debug, Default)]
pub struct CommandStack {
    undo: Vec<CommandRecord>,
    redo: Vec<CommandRecord>,
    next_seq: u64,
}

impl CommandStack {
    /// Create a new empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed mutation, clearing any redoable future.
    ///
    /// Returns the assigned sequence number.
    pub fn record(&mut self, command: Command) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        if !self.redo.is_empty() {
            debug!(discarded = self.redo.len(), "clearing redo stack");
            self.redo.clear();
        }
        self.undo.push(CommandRecord { seq, command });
        seq
    }

    /// Undo the most recent command against the given state.
    ///
    /// Returns false if there is nothing to undo.
    pub fn undo(&mut self, state: &mut DeckState) -> bool {
        let Some(record) = self.undo.pop() else {
            return false;
        };
        debug!(seq = record.seq, op = record.command.name(), "undo");
        record.command.undo(state);
        self.redo.push(record);
        true
    }

    /// Redo the most recently undone command against the given state.
    ///
    /// Returns false if there is nothing to redo.
    pub fn redo(&mut self, state: &mut DeckState) -> bool {
        let Some(record) = self.redo.pop() else {
            return false;
        };
        debug!(seq = record.seq, op = record.command.name(), "redo");
        record.command.redo(state);
        self.undo.push(record);
        true
    }

    /// Whether an undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undoable commands.
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    /// Number of redoable commands.
    #[must_use]
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Drop all history, e.g. when a fresh deck is loaded.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ArtId, CardId, PlacementId};
    use crate::deck::{Placement, Section};

    fn add_command(state: &mut DeckState, id: u64, cid: u32) -> Command {
        let p = Placement::new(PlacementId::new(id), CardId::new(cid), ArtId::DEFAULT);
        state.push(Section::Main, p);
        Command::Add { section: Section::Main, placement: p }
    }

    #[test]
    fn test_undo_redo_cycle() {
        let mut state = DeckState::new();
        let mut stack = CommandStack::new();

        let cmd = add_command(&mut state, 1, 10);
        stack.record(cmd);
        assert!(stack.can_undo());
        assert!(!stack.can_redo());

        assert!(stack.undo(&mut state));
        assert_eq!(state.order().len(Section::Main), 0);
        assert!(stack.can_redo());
        assert!(!stack.can_undo());

        assert!(stack.redo(&mut state));
        assert_eq!(state.order().len(Section::Main), 1);
        assert!(stack.can_undo());
    }

    #[test]
    fn test_empty_stacks() {
        let mut state = DeckState::new();
        let mut stack = CommandStack::new();

        assert!(!stack.undo(&mut state));
        assert!(!stack.redo(&mut state));
    }

    #[test]
    fn test_new_record_clears_redo() {
        let mut state = DeckState::new();
        let mut stack = CommandStack::new();

        let cmd = add_command(&mut state, 1, 10);
        stack.record(cmd);
        stack.undo(&mut state);
        assert!(stack.can_redo());

        let cmd = add_command(&mut state, 2, 11);
        stack.record(cmd);
        assert!(!stack.can_redo());
        assert_eq!(stack.undo_depth(), 1);
    }

    #[test]
    fn test_sequence_numbers_monotone() {
        let mut state = DeckState::new();
        let mut stack = CommandStack::new();

        let c1 = add_command(&mut state, 1, 10);
        let c2 = add_command(&mut state, 2, 11);
        let s1 = stack.record(c1);
        let s2 = stack.record(c2);

        assert!(s2 > s1);
    }

    #[test]
    fn test_clear() {
        let mut state = DeckState::new();
        let mut stack = CommandStack::new();

        let cmd = add_command(&mut state, 1, 10);
        stack.record(cmd);
        stack.clear();

        assert!(!stack.can_undo());
        assert!(!stack.can_redo());
        assert_eq!(stack.undo_depth(), 0);
    }
}
