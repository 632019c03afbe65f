//! Random map generation.

use crate::map::{Map, Tile};
use crate::settings::GameSettings;
use crate::terrain::{Resource, Terrain};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a map of `map_width x map_height` tiles.
///
/// Terrain is drawn uniformly from every terrain kind; each tile carries a
/// uniformly chosen resource with `resource_chance` percent probability.
/// Occupancy references all start empty.
pub fn generate_map<R: Rng + ?Sized>(settings: &GameSettings, rng: &mut R) -> Map {
    let count = settings.tile_count();
    let mut tiles = Vec::with_capacity(count);

    for _ in 0..count {
        let terrain = *Terrain::all()
            .choose(rng)
            .unwrap_or(&Terrain::Plains);
        let mut tile = Tile::new(terrain);
        if rng.gen_range(0..100) < settings.resource_chance {
            tile.resource = Resource::all().choose(rng).copied();
        }
        tiles.push(tile);
    }

    Map::from_tiles(settings.map_width, settings.map_height, tiles)
        .unwrap_or_else(|| Map::filled(settings.map_width, settings.map_height, Terrain::Plains))
}
