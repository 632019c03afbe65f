//! Terrain types and resources for the game map.

use serde::{Deserialize, Serialize};

/// Base terrain type for a tile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Ocean,
    #[default]
    Plains,
    Desert,
    Mountains,
    Forest,
    Hills,
    Tundra,
    Jungle,
}

impl Terrain {
    /// Display name.
    pub const fn name(&self) -> &'static str {
        match self {
            Terrain::Ocean => "Ocean",
            Terrain::Plains => "Plains",
            Terrain::Desert => "Desert",
            Terrain::Mountains => "Mountains",
            Terrain::Forest => "Forest",
            Terrain::Hills => "Hills",
            Terrain::Tundra => "Tundra",
            Terrain::Jungle => "Jungle",
        }
    }

    /// Single-character map symbol.
    pub const fn symbol(&self) -> char {
        match self {
            Terrain::Ocean => '~',
            Terrain::Plains => '.',
            Terrain::Desert => 'd',
            Terrain::Mountains => '^',
            Terrain::Forest => '*',
            Terrain::Hills => 'h',
            Terrain::Tundra => 't',
            Terrain::Jungle => 'j',
        }
    }

    /// Whether land units can stand here and cities can be founded here.
    pub const fn is_passable(&self) -> bool {
        !matches!(self, Terrain::Ocean | Terrain::Mountains)
    }

    /// Get all terrain variants.
    pub const fn all() -> &'static [Terrain] {
        &[
            Terrain::Ocean,
            Terrain::Plains,
            Terrain::Desert,
            Terrain::Mountains,
            Terrain::Forest,
            Terrain::Hills,
            Terrain::Tundra,
            Terrain::Jungle,
        ]
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Special resources that can appear on tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Wheat,
    Fish,
    Gold,
    Iron,
    Horses,
}

impl Resource {
    pub const fn name(&self) -> &'static str {
        match self {
            Resource::Wheat => "Wheat",
            Resource::Fish => "Fish",
            Resource::Gold => "Gold",
            Resource::Iron => "Iron",
            Resource::Horses => "Horses",
        }
    }

    /// Get all resource variants.
    pub const fn all() -> &'static [Resource] {
        &[
            Resource::Wheat,
            Resource::Fish,
            Resource::Gold,
            Resource::Iron,
            Resource::Horses,
        ]
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passability() {
        assert!(!Terrain::Ocean.is_passable());
        assert!(!Terrain::Mountains.is_passable());
        let passable = Terrain::all().iter().filter(|t| t.is_passable()).count();
        assert_eq!(passable, 6);
    }

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols: Vec<char> = Terrain::all().iter().map(Terrain::symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), Terrain::all().len());
    }

    #[test]
    fn test_names() {
        assert_eq!(Terrain::Mountains.to_string(), "Mountains");
        assert_eq!(Resource::Horses.to_string(), "Horses");
        assert_eq!(Resource::all().len(), 5);
    }
}
