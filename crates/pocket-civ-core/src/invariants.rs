//! Game invariants - consistency checks that detect bugs.
//!
//! These should never trigger in a correctly implemented game. They compare
//! the map's occupancy references against the players' own collections.

use crate::game_state::GameState;
use crate::types::{CityId, UnitId};
use std::collections::HashMap;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl InvariantViolation {
    fn new(message: String) -> Self {
        Self { message }
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut unit_tiles: HashMap<UnitId, usize> = HashMap::new();
    let mut city_tiles: HashMap<CityId, usize> = HashMap::new();

    for (coord, tile) in state.map.iter() {
        if let Some(id) = tile.unit {
            *unit_tiles.entry(id).or_default() += 1;
            match state.players.iter().find_map(|p| p.unit(id)) {
                Some(unit) if unit.position != coord => {
                    violations.push(InvariantViolation::new(format!(
                        "Tile {} references unit {} which stands at {}",
                        coord, id, unit.position
                    )));
                }
                Some(_) => {}
                None => violations.push(InvariantViolation::new(format!(
                    "Tile {} references missing unit {}",
                    coord, id
                ))),
            }
            if !tile.terrain.is_passable() {
                violations.push(InvariantViolation::new(format!(
                    "Unit {} stands on impassable {} at {}",
                    id, tile.terrain, coord
                )));
            }
        }

        if let Some(id) = tile.city {
            *city_tiles.entry(id).or_default() += 1;
            match state.players.iter().find_map(|p| p.city(id)) {
                Some(city) if city.position != coord => {
                    violations.push(InvariantViolation::new(format!(
                        "Tile {} references city {} which stands at {}",
                        coord, id, city.position
                    )));
                }
                Some(city) if tile.owner != Some(city.owner) => {
                    violations.push(InvariantViolation::new(format!(
                        "City {} at {} is owned by player {} but the tile is not",
                        id, coord, city.owner
                    )));
                }
                Some(_) => {}
                None => violations.push(InvariantViolation::new(format!(
                    "Tile {} references missing city {}",
                    coord, id
                ))),
            }
        }
    }

    for player in &state.players {
        for unit in &player.units {
            if unit.owner != player.id {
                violations.push(InvariantViolation::new(format!(
                    "Unit {} listed by player {} but owned by {}",
                    unit.id, player.id, unit.owner
                )));
            }
            let seen = unit_tiles.get(&unit.id).copied().unwrap_or(0);
            if seen != 1 {
                violations.push(InvariantViolation::new(format!(
                    "Unit {} of player {} is referenced by {} tiles",
                    unit.id, player.id, seen
                )));
            }
        }
        for city in &player.cities {
            let seen = city_tiles.get(&city.id).copied().unwrap_or(0);
            if seen != 1 {
                violations.push(InvariantViolation::new(format!(
                    "City {} of player {} is referenced by {} tiles",
                    city.id, player.id, seen
                )));
            }
            if city.production_queue.len() > state.settings.max_production_queue {
                violations.push(InvariantViolation::new(format!(
                    "City {} queue holds {} items",
                    city.id,
                    city.production_queue.len()
                )));
            }
        }
        if player.units.len() > state.settings.max_units {
            violations.push(InvariantViolation::new(format!(
                "Player {} has {} units",
                player.id,
                player.units.len()
            )));
        }
        if player.cities.len() > state.settings.max_cities {
            violations.push(InvariantViolation::new(format!(
                "Player {} has {} cities",
                player.id,
                player.cities.len()
            )));
        }
    }

    violations
}
