//! City system - settlements, production, and growth.

use crate::types::{CityId, Coord, PlayerId};
use crate::unit::UnitType;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A city on the game map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    /// Unique identifier.
    pub id: CityId,
    /// Owning player.
    pub owner: PlayerId,
    /// City name.
    pub name: String,
    /// Location on the map.
    pub position: Coord,
    /// Current population.
    pub population: u32,
    /// Production stockpile.
    pub production: i32,
    /// Food accumulated.
    pub food: u32,
    /// Buildings constructed in this city, in completion order.
    pub buildings: Vec<BuildingType>,
    /// Pending construction jobs; the front entry is being worked on.
    pub production_queue: VecDeque<ProductionItem>,
    /// Work remaining on the front queue entry. Complete once it reaches 0.
    pub production_progress: i32,
}

impl City {
    /// Create a new city of population 1.
    pub fn new(id: CityId, owner: PlayerId, name: String, position: Coord) -> Self {
        Self {
            id,
            owner,
            name,
            position,
            population: 1,
            production: 0,
            food: 0,
            buildings: Vec::new(),
            production_queue: VecDeque::new(),
            production_progress: 0,
        }
    }

    /// Append an item to the production queue.
    ///
    /// Returns `false` if the queue already holds `max_len` items. Queuing
    /// onto an empty queue primes the progress counter with the item's cost.
    pub fn enqueue(&mut self, item: ProductionItem, max_len: usize) -> bool {
        if self.production_queue.len() >= max_len {
            return false;
        }
        if self.production_queue.is_empty() {
            self.production_progress = item.cost();
        }
        self.production_queue.push_back(item);
        true
    }

    /// Grow the city by `growth` citizens and harvest food for the year.
    pub fn grow(&mut self, growth: u32) {
        self.population += growth;
        self.food += self.population * 2;
    }

    /// Work on the production queue for one year.
    ///
    /// When the head entry has no work remaining it is dequeued and returned;
    /// progress is then primed with the next entry's cost. Otherwise `rate`
    /// points of work are applied. At most one entry completes per call.
    pub fn process_production(&mut self, rate: i32) -> Option<ProductionItem> {
        if self.production_queue.is_empty() {
            return None;
        }
        if self.production_progress > 0 {
            self.production_progress -= rate;
            return None;
        }

        let done = self.production_queue.pop_front();
        self.production_progress = self
            .production_queue
            .front()
            .map_or(0, ProductionItem::cost);
        done
    }

    /// Add a completed building.
    pub fn add_building(&mut self, building: BuildingType) {
        self.buildings.push(building);
    }

    /// Check if the city has a building.
    pub fn has_building(&self, building: BuildingType) -> bool {
        self.buildings.contains(&building)
    }

    /// Percent of the head entry already built (0-100).
    pub fn progress_percent(&self) -> i32 {
        match self.production_queue.front() {
            Some(item) => {
                let cost = item.cost().max(1);
                (100 * (cost - self.production_progress.max(0)) / cost).clamp(0, 100)
            }
            None => 0,
        }
    }
}

/// Something a city can build.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductionItem {
    Unit(UnitType),
    Building(BuildingType),
}

impl ProductionItem {
    /// Production cost.
    pub const fn cost(&self) -> i32 {
        match self {
            ProductionItem::Unit(unit) => unit.cost(),
            ProductionItem::Building(building) => building.cost(),
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            ProductionItem::Unit(unit) => unit.name(),
            ProductionItem::Building(building) => building.name(),
        }
    }
}

impl std::fmt::Display for ProductionItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Types of buildings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingType {
    Monument,
    Granary,
    Library,
    Temple,
    Barracks,
    Walls,
    University,
    Factory,
}

impl BuildingType {
    /// Production cost.
    pub const fn cost(&self) -> i32 {
        match self {
            BuildingType::Monument => 80,
            BuildingType::Granary => 100,
            BuildingType::Library => 120,
            BuildingType::Temple => 150,
            BuildingType::Barracks => 100,
            BuildingType::Walls => 200,
            BuildingType::University => 250,
            BuildingType::Factory => 300,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            BuildingType::Monument => "Monument",
            BuildingType::Granary => "Granary",
            BuildingType::Library => "Library",
            BuildingType::Temple => "Temple",
            BuildingType::Barracks => "Barracks",
            BuildingType::Walls => "Walls",
            BuildingType::University => "University",
            BuildingType::Factory => "Factory",
        }
    }

    /// Get all building types.
    pub const fn all() -> &'static [BuildingType] {
        &[
            BuildingType::Monument,
            BuildingType::Granary,
            BuildingType::Library,
            BuildingType::Temple,
            BuildingType::Barracks,
            BuildingType::Walls,
            BuildingType::University,
            BuildingType::Factory,
        ]
    }
}

impl std::fmt::Display for BuildingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
