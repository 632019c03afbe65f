//! Game map structure with tiles and spatial queries.
//!
//! The map is a rectangular grid that wraps in both directions. Tiles refer
//! to the unit, city and owner occupying them by stable id, so the owning
//! player's collections can be reordered freely.

use crate::terrain::{Resource, Terrain};
use crate::types::{CityId, Coord, PlayerId, UnitId};
use serde::{Deserialize, Serialize};

/// Offsets of the eight surrounding tiles, scanned in this order.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// The game map containing all tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Map {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    tiles: Vec<Tile>,
}

impl Map {
    /// Create a map filled with a single terrain type (useful for testing).
    pub fn filled(width: u32, height: u32, terrain: Terrain) -> Self {
        Self {
            width,
            height,
            tiles: vec![Tile::new(terrain); width as usize * height as usize],
        }
    }

    /// Build a map from row-major tiles. Returns `None` when the tile count
    /// does not match the dimensions.
    pub fn from_tiles(width: u32, height: u32, tiles: Vec<Tile>) -> Option<Self> {
        (tiles.len() == width as usize * height as usize).then_some(Self {
            width,
            height,
            tiles,
        })
    }

    /// Check if a coordinate is within the map bounds.
    pub fn in_bounds(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| coord.y as usize * self.width as usize + coord.x as usize)
    }

    /// Get a tile at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).and_then(|i| self.tiles.get(i))
    }

    /// Get a mutable reference to a tile.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut Tile> {
        self.index(coord).and_then(move |i| self.tiles.get_mut(i))
    }

    /// Offset a coordinate, wrapping around both edges.
    pub fn wrap(&self, coord: Coord, dx: i32, dy: i32) -> Coord {
        let x = (i64::from(coord.x) + i64::from(dx)).rem_euclid(i64::from(self.width));
        let y = (i64::from(coord.y) + i64::from(dy)).rem_euclid(i64::from(self.height));
        Coord::new(x as u32, y as u32)
    }

    /// The distinct tiles surrounding a coordinate, excluding the coordinate
    /// itself (on very small maps several offsets wrap onto the same tile).
    pub fn neighbors(&self, coord: Coord) -> Vec<Coord> {
        let mut out = Vec::with_capacity(NEIGHBOR_OFFSETS.len());
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let c = self.wrap(coord, dx, dy);
            if c != coord && !out.contains(&c) {
                out.push(c);
            }
        }
        out
    }

    /// Whether a unit could move onto this tile right now.
    pub fn is_free_land(&self, coord: Coord) -> bool {
        self.get(coord)
            .is_some_and(|t| t.terrain.is_passable() && t.unit.is_none())
    }

    /// Count total tiles in the map.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of tiles owned by a player.
    pub fn count_owned_by(&self, player: PlayerId) -> usize {
        self.tiles.iter().filter(|t| t.owner == Some(player)).count()
    }

    /// Iterate over all tiles with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Tile)> {
        let width = self.width;
        self.tiles.iter().enumerate().map(move |(i, tile)| {
            let i = i as u32;
            (Coord::new(i % width, i / width), tile)
        })
    }
}

/// A single tile on the map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// Base terrain type.
    pub terrain: Terrain,
    /// Optional resource on this tile.
    pub resource: Option<Resource>,
    /// Has the tile been improved?
    pub improved: bool,
    /// City standing on this tile.
    pub city: Option<CityId>,
    /// Unit standing on this tile.
    pub unit: Option<UnitId>,
    /// Player who owns this tile.
    pub owner: Option<PlayerId>,
}

impl Tile {
    /// Create an empty tile of the given terrain.
    pub fn new(terrain: Terrain) -> Self {
        Self {
            terrain,
            ..Default::default()
        }
    }

    /// Set a resource on this tile.
    pub fn with_resource(mut self, resource: Resource) -> Self {
        self.resource = Some(resource);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_map() {
        let map = Map::filled(20, 15, Terrain::Plains);
        assert_eq!(map.tile_count(), 300);
        assert!(map.iter().all(|(_, t)| t.terrain == Terrain::Plains));
    }

    #[test]
    fn test_bounds() {
        let map = Map::filled(4, 3, Terrain::Plains);
        assert!(map.get(Coord::new(3, 2)).is_some());
        assert!(map.get(Coord::new(4, 0)).is_none());
        assert!(map.get(Coord::new(0, 3)).is_none());
    }

    #[test]
    fn test_wraparound() {
        let map = Map::filled(20, 15, Terrain::Plains);
        assert_eq!(map.wrap(Coord::new(0, 0), -1, -1), Coord::new(19, 14));
        assert_eq!(map.wrap(Coord::new(19, 14), 1, 1), Coord::new(0, 0));
        assert_eq!(map.wrap(Coord::new(5, 5), 0, 0), Coord::new(5, 5));
    }

    #[test]
    fn test_neighbors() {
        let map = Map::filled(20, 15, Terrain::Plains);
        let n = map.neighbors(Coord::new(0, 0));
        assert_eq!(n.len(), 8);
        assert!(n.contains(&Coord::new(19, 14)));
        assert!(!n.contains(&Coord::new(0, 0)));

        // A 2x2 map only has three other tiles.
        let tiny = Map::filled(2, 2, Terrain::Plains);
        assert_eq!(tiny.neighbors(Coord::new(0, 0)).len(), 3);
    }

    #[test]
    fn test_iter_coordinates_row_major() {
        let map = Map::filled(3, 2, Terrain::Plains);
        let coords: Vec<Coord> = map.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[0], Coord::new(0, 0));
        assert_eq!(coords[2], Coord::new(2, 0));
        assert_eq!(coords[3], Coord::new(0, 1));
    }

    #[test]
    fn test_free_land_and_ownership() {
        let mut map = Map::filled(3, 3, Terrain::Plains);
        map.get_mut(Coord::new(1, 1)).unwrap().terrain = Terrain::Ocean;
        map.get_mut(Coord::new(2, 2)).unwrap().unit = Some(7);
        map.get_mut(Coord::new(0, 0)).unwrap().owner = Some(1);

        assert!(!map.is_free_land(Coord::new(1, 1)));
        assert!(!map.is_free_land(Coord::new(2, 2)));
        assert!(map.is_free_land(Coord::new(0, 1)));
        assert_eq!(map.count_owned_by(1), 1);
        assert_eq!(map.count_owned_by(0), 0);
    }

    #[test]
    fn test_from_tiles_checks_size() {
        assert!(Map::from_tiles(2, 2, vec![Tile::default(); 3]).is_none());
        assert!(Map::from_tiles(2, 2, vec![Tile::default(); 4]).is_some());
    }
}
