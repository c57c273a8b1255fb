//! Core identifiers and RNG.

mod id;
mod rng;

pub use id::{ArtId, CardId, DeckNo, PlacementId};
pub use rng::DeckRng;
