//! Events describing what happened during a turn or a year.
//!
//! Game operations return these instead of printing, so any front end can
//! report them in its own way.

use crate::city::{BuildingType, ProductionItem};
use crate::technology::Technology;
use crate::types::{CityId, Coord, PlayerId, UnitId, Year};
use crate::unit::UnitType;
use serde::{Deserialize, Serialize};

/// Something that happened in the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The clock advanced at the end of a round.
    YearAdvanced { year: Year },
    /// A city finished a unit and placed it next to itself.
    UnitProduced {
        player: PlayerId,
        city: CityId,
        unit: UnitId,
        unit_type: UnitType,
        at: Coord,
    },
    /// A city finished a unit but had nowhere to put it; the job is lost.
    ProductionBlocked {
        player: PlayerId,
        city: CityId,
        unit_type: UnitType,
    },
    /// A city finished a building.
    BuildingCompleted {
        player: PlayerId,
        city: CityId,
        building: BuildingType,
    },
    /// A player learned a technology.
    TechResearched {
        player: PlayerId,
        tech: Technology,
        next: Option<Technology>,
    },
    /// A player changed research target.
    ResearchChanged { player: PlayerId, tech: Technology },
    /// A city queued a new job.
    ProductionQueued {
        player: PlayerId,
        city: CityId,
        item: ProductionItem,
    },
    /// A unit moved.
    UnitMoved {
        player: PlayerId,
        unit: UnitId,
        from: Coord,
        to: Coord,
    },
    /// A settler founded a new city.
    CityFounded {
        player: PlayerId,
        city: CityId,
        name: String,
        at: Coord,
    },
}

impl GameEvent {
    /// The player this event concerns, if any.
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::YearAdvanced { .. } => None,
            GameEvent::UnitProduced { player, .. }
            | GameEvent::ProductionBlocked { player, .. }
            | GameEvent::BuildingCompleted { player, .. }
            | GameEvent::TechResearched { player, .. }
            | GameEvent::ResearchChanged { player, .. }
            | GameEvent::ProductionQueued { player, .. }
            | GameEvent::UnitMoved { player, .. }
            | GameEvent::CityFounded { player, .. } => Some(*player),
        }
    }
}
