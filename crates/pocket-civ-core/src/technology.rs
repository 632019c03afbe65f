//! Technologies and the per-player set of known technologies.
//!
//! Technologies form a simple ordered list rather than a tree: research
//! completes by chance and then moves on to the next unknown technology.

use serde::{Deserialize, Serialize};

/// A technology.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Technology {
    Agriculture,
    Pottery,
    Writing,
    Mathematics,
    Construction,
    Philosophy,
    Engineering,
    Education,
    Gunpowder,
    Industrialization,
}

impl Technology {
    pub const COUNT: usize = 10;

    pub const fn name(&self) -> &'static str {
        match self {
            Technology::Agriculture => "Agriculture",
            Technology::Pottery => "Pottery",
            Technology::Writing => "Writing",
            Technology::Mathematics => "Mathematics",
            Technology::Construction => "Construction",
            Technology::Philosophy => "Philosophy",
            Technology::Engineering => "Engineering",
            Technology::Education => "Education",
            Technology::Gunpowder => "Gunpowder",
            Technology::Industrialization => "Industrialization",
        }
    }

    /// Position in research order (0-9).
    pub const fn index(&self) -> usize {
        *self as usize
    }

    /// Technology at a research-order position.
    pub fn from_index(index: usize) -> Option<Technology> {
        Self::all().get(index).copied()
    }

    /// Get all technologies in research order.
    pub const fn all() -> &'static [Technology] {
        &[
            Technology::Agriculture,
            Technology::Pottery,
            Technology::Writing,
            Technology::Mathematics,
            Technology::Construction,
            Technology::Philosophy,
            Technology::Engineering,
            Technology::Education,
            Technology::Gunpowder,
            Technology::Industrialization,
        ]
    }
}

impl std::fmt::Display for Technology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Set of known technologies, stored as a bitset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechSet(u16);

impl TechSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn contains(&self, tech: Technology) -> bool {
        self.0 & (1 << tech.index()) != 0
    }

    /// Add a technology. Returns `true` if it was not already known.
    pub fn insert(&mut self, tech: Technology) -> bool {
        let known = self.contains(tech);
        self.0 |= 1 << tech.index();
        !known
    }

    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Whether every technology is known.
    pub const fn is_complete(&self) -> bool {
        self.len() == Technology::COUNT
    }

    /// Known technologies in research order.
    pub fn iter(&self) -> impl Iterator<Item = Technology> + '_ {
        Technology::all()
            .iter()
            .copied()
            .filter(move |t| self.contains(*t))
    }

    /// Unknown technologies in research order.
    pub fn missing(&self) -> impl Iterator<Item = Technology> + '_ {
        Technology::all()
            .iter()
            .copied()
            .filter(move |t| !self.contains(*t))
    }

    /// The first unknown technology after `after` in research order,
    /// wrapping around to the start. `None` once everything is known.
    pub fn next_unknown_after(&self, after: Technology) -> Option<Technology> {
        (1..=Technology::COUNT)
            .map(|step| (after.index() + step) % Technology::COUNT)
            .filter_map(Technology::from_index)
            .find(|t| !self.contains(*t))
    }

    /// The first unknown technology in research order.
    pub fn first_unknown(&self) -> Option<Technology> {
        self.missing().next()
    }
}

impl FromIterator<Technology> for TechSet {
    fn from_iter<I: IntoIterator<Item = Technology>>(iter: I) -> Self {
        let mut set = TechSet::new();
        for tech in iter {
            set.insert(tech);
        }
        set
    }
}
