//! Error types for game operations.

use crate::settings::SettingsError;
use crate::technology::Technology;
use crate::types::{CityId, Coord, PlayerId, UnitId};
use thiserror::Error;

/// Reasons a game operation was rejected.
///
/// Rejections leave the game state untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid settings: {0}")]
    Settings(#[from] SettingsError),
    #[error("no valid starting position left for player {0}")]
    NoStartingPosition(PlayerId),
    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),
    #[error("no such unit: {0}")]
    UnknownUnit(UnitId),
    #[error("no such city: {0}")]
    UnknownCity(CityId),
    #[error("cannot move onto {terrain} at {at}")]
    ImpassableTerrain { at: Coord, terrain: &'static str },
    #[error("tile {0} is already occupied by another unit")]
    TileOccupied(Coord),
    #[error("no settler units available")]
    NoSettler,
    #[error("there is already a city at {0}")]
    CityAlreadyPresent(Coord),
    #[error("city name must be 1 to {max} characters")]
    InvalidCityName { max: usize },
    #[error("city limit of {0} reached")]
    CityLimitReached(usize),
    #[error("{0} is already researched")]
    TechAlreadyKnown(Technology),
    #[error("production queue is full ({0} items)")]
    ProductionQueueFull(usize),
    #[error("the game is over")]
    GameOver,
}
