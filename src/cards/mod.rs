//! Card metadata: kinds, entries, and the catalog.

mod catalog;
mod kind;

pub use catalog::{CardCatalog, CardEntry};
pub use kind::{CardKind, MonsterFrame};
