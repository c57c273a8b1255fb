//! Deck sections and per-section storage.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the four deck sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Main,
    Extra,
    Side,
    Trash,
}

impl Section {
    /// All sections, in canonical display order.
    pub const ALL: [Section; 4] = [Section::Main, Section::Extra, Section::Side, Section::Trash];

    /// Index into per-section arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Section::Main => 0,
            Section::Extra => 1,
            Section::Side => 2,
            Section::Trash => 3,
        }
    }

    /// Whether copies in this section count toward the cross-section copy
    /// limit. The trash is exempt.
    #[must_use]
    pub const fn counts_toward_limit(self) -> bool {
        !matches!(self, Section::Trash)
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Main => "main",
            Section::Extra => "extra",
            Section::Side => "side",
            Section::Trash => "trash",
        };
        write!(f, "{name}")
    }
}

/// Per-section data storage with O(1) access.
///
/// Backed by a fixed array with one entry per section.
///
/// ## Example
///
/// ```
/// use deck_editor::deck::{Section, SectionMap};
///
/// let mut sizes: SectionMap<usize> = SectionMap::with_default();
/// sizes[Section::Main] = 40;
/// assert_eq!(sizes[Section::Main], 40);
/// assert_eq!(sizes[Section::Side], 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionMap<T> {
    data: [T; 4],
}

impl<T> SectionMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Section) -> T) -> Self {
        Self {
            data: std::array::from_fn(|i| factory(Section::ALL[i])),
        }
    }

    /// Create a new map with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a section's data.
    #[must_use]
    pub fn get(&self, section: Section) -> &T {
        &self.data[section.index()]
    }

    /// Get a mutable reference to a section's data.
    pub fn get_mut(&mut self, section: Section) -> &mut T {
        &mut self.data[section.index()]
    }

    /// Iterate over (Section, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Section, &T)> {
        Section::ALL.iter().map(move |&s| (s, self.get(s)))
    }

    /// Iterate over (Section, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (Section, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (Section::ALL[i], v))
    }
}

impl<T: Default> Default for SectionMap<T> {
    fn default() -> Self {
        Self::with_default()
    }
}

impl<T> Index<Section> for SectionMap<T> {
    type Output = T;

    fn index(&self, section: Section) -> &T {
        self.get(section)
    }
}

impl<T> IndexMut<Section> for SectionMap<T> {
    fn index_mut(&mut self, section: Section) -> &mut T {
        self.get_mut(section)
    }
}
