//! Card kinds and derived deck rules.
//!
//! Cards are a tagged union discriminated by kind. Extra-deck eligibility
//! and sort precedence are derived by pattern-matching the variant instead
//! of probing optional fields.

use serde::{Deserialize, Serialize};

/// Frame of a monster card.
///
/// Fusion, Synchro, Xyz and Link monsters live in the extra deck; the
/// remaining frames are main-deck monsters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterFrame {
    Normal,
    Effect,
    Ritual,
    Pendulum,
    Fusion,
    Synchro,
    Xyz,
    Link,
}

impl MonsterFrame {
    /// Whether this frame belongs to the extra deck.
    #[must_use]
    pub const fn is_extra_deck(self) -> bool {
        matches!(
            self,
            MonsterFrame::Fusion | MonsterFrame::Synchro | MonsterFrame::Xyz | MonsterFrame::Link
        )
    }

    /// Sort precedence among monster frames: fusion before synchro before
    /// xyz before link before everything else.
    #[must_use]
    pub const fn sort_rank(self) -> u8 {
        match self {
            MonsterFrame::Fusion => 0,
            MonsterFrame::Synchro => 1,
            MonsterFrame::Xyz => 2,
            MonsterFrame::Link => 3,
            MonsterFrame::Normal
            | MonsterFrame::Effect
            | MonsterFrame::Ritual
            | MonsterFrame::Pendulum => 4,
        }
    }
}

/// Card kind with kind-specific data.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Monster card with frame, level (rank for xyz, link value for link),
    /// race and attribute.
    Monster {
        frame: MonsterFrame,
        level: u8,
        race: String,
        attribute: String,
    },
    /// Spell card with its effect subtype ("Normal", "Quick-Play", ...).
    Spell { effect: String },
    /// Trap card with its effect subtype.
    Trap { effect: String },
}

impl CardKind {
    /// Whether this card can only live in the extra deck.
    #[must_use]
    pub fn is_extra_deck(&self) -> bool {
        match self {
            CardKind::Monster { frame, .. } => frame.is_extra_deck(),
            CardKind::Spell { .. } | CardKind::Trap { .. } => false,
        }
    }

    /// Top-level sort precedence: monster before spell before trap.
    #[must_use]
    pub const fn sort_rank(&self) -> u8 {
        match self {
            CardKind::Monster { .. } => 0,
            CardKind::Spell { .. } => 1,
            CardKind::Trap { .. } => 2,
        }
    }

    /// Monster frame precedence; spells and traps all rank equal.
    #[must_use]
    pub fn frame_rank(&self) -> u8 {
        match self {
            CardKind::Monster { frame, .. } => frame.sort_rank(),
            CardKind::Spell { .. } | CardKind::Trap { .. } => 0,
        }
    }

    /// Level, rank, or link value; zero for spells and traps.
    #[must_use]
    pub fn level(&self) -> u8 {
        match self {
            CardKind::Monster { level, .. } => *level,
            CardKind::Spell { .. } | CardKind::Trap { .. } => 0,
        }
    }

    /// Effect subtype for spells and traps; empty for monsters.
    #[must_use]
    pub fn effect(&self) -> &str {
        match self {
            CardKind::Monster { .. } => "",
            CardKind::Spell { effect } | CardKind::Trap { effect } => effect,
        }
    }
}
