//! Command-based undo/redo history.

mod command;
mod stack;

pub use command::{Command, SectionChange};
pub use stack::{CommandRecord, CommandStack};
