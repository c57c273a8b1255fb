//! Deck editing session.

mod controller;

pub use controller::{DeckEditor, COPY_LIMIT};
