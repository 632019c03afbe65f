//! Game settings and configuration.

use crate::types::Year;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Most players a game can hold (one per civilization).
pub const MAX_PLAYERS: u8 = 8;

/// Fewest players a game can hold.
pub const MIN_PLAYERS: u8 = 2;

/// Largest width or height a map may have.
pub const MAX_MAP_DIMENSION: u32 = 1024;

/// Start and end years must lie within this many years of 1 AD.
pub const MAX_CALENDAR_YEAR: i32 = 100_000;

/// Configuration for a game session.
///
/// Every field has a default, so a partial JSON document deserializes into
/// a complete configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Map width in tiles.
    pub map_width: u32,
    /// Map height in tiles.
    pub map_height: u32,
    /// Number of players (2-8).
    pub player_count: u8,
    /// How many of the players are human; the first `human_players` seats
    /// are human, the rest are AI.
    pub human_players: u8,
    /// Year the game starts in.
    pub start_year: Year,
    /// Once the clock reaches this year the game ends on score.
    pub end_year: Year,
    /// Years that pass each time every player has moved.
    pub year_step: i32,
    /// Percent chance per year that the current research completes.
    pub research_chance: u32,
    /// Percent chance that a generated tile carries a resource.
    pub resource_chance: u32,
    /// Production points applied to the head of each queue per year.
    pub production_rate: i32,
    /// Most cities a single player may hold.
    pub max_cities: usize,
    /// Most units a single player may hold.
    pub max_units: usize,
    /// Most entries in a city's production queue.
    pub max_production_queue: usize,
    /// Starting treasury.
    pub starting_gold: i32,
    /// Starting happiness.
    pub starting_happiness: i32,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            map_width: 20,
            map_height: 15,
            player_count: 4,
            human_players: 1,
            start_year: Year::bc(4000),
            end_year: Year::ad(2050),
            year_step: 10,
            research_chance: 30,
            resource_chance: 10,
            production_rate: 10,
            max_cities: 50,
            max_units: 100,
            max_production_queue: 5,
            starting_gold: 100,
            starting_happiness: 100,
        }
    }
}

impl GameSettings {
    /// Default settings for the given number of players.
    pub fn with_players(player_count: u8) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    /// Settings with every seat controlled by the AI.
    pub fn ai_only(player_count: u8) -> Self {
        Self {
            player_count,
            human_players: 0,
            ..Self::default()
        }
    }

    /// Validate settings and return the first problem found.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.player_count < MIN_PLAYERS {
            return Err(SettingsError::TooFewPlayers(self.player_count));
        }
        if self.player_count > MAX_PLAYERS {
            return Err(SettingsError::TooManyPlayers(self.player_count));
        }
        if self.human_players > self.player_count {
            return Err(SettingsError::TooManyHumans {
                humans: self.human_players,
                players: self.player_count,
            });
        }
        if self.map_width < 2 || self.map_height < 2 {
            return Err(SettingsError::MapTooSmall {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.map_width > MAX_MAP_DIMENSION || self.map_height > MAX_MAP_DIMENSION {
            return Err(SettingsError::MapTooLarge {
                width: self.map_width,
                height: self.map_height,
            });
        }
        if self.year_step <= 0 {
            return Err(SettingsError::NonPositiveYearStep(self.year_step));
        }
        for year in [self.start_year, self.end_year] {
            if !(-MAX_CALENDAR_YEAR..=MAX_CALENDAR_YEAR).contains(&year.0) {
                return Err(SettingsError::YearOutOfRange(year));
            }
        }
        if self.start_year >= self.end_year {
            return Err(SettingsError::EmptyCalendar {
                start: self.start_year,
                end: self.end_year,
            });
        }
        if self.production_rate <= 0 {
            return Err(SettingsError::NonPositiveProductionRate(self.production_rate));
        }
        if self.research_chance > 100 {
            return Err(SettingsError::ChanceOutOfRange(self.research_chance));
        }
        if self.resource_chance > 100 {
            return Err(SettingsError::ChanceOutOfRange(self.resource_chance));
        }
        if self.max_cities == 0 || self.max_units < 2 || self.max_production_queue == 0 {
            return Err(SettingsError::ZeroCapacity);
        }
        Ok(())
    }

    /// Total number of tiles on the map.
    pub fn tile_count(&self) -> usize {
        self.map_width as usize * self.map_height as usize
    }
}

/// Errors from invalid game settings.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("need at least {MIN_PLAYERS} players, got {0}")]
    TooFewPlayers(u8),
    #[error("at most {MAX_PLAYERS} players allowed, got {0}")]
    TooManyPlayers(u8),
    #[error("{humans} human players requested but only {players} seats")]
    TooManyHumans { humans: u8, players: u8 },
    #[error("map must be at least 2x2, got {width}x{height}")]
    MapTooSmall { width: u32, height: u32 },
    #[error("map may be at most {MAX_MAP_DIMENSION}x{MAX_MAP_DIMENSION}, got {width}x{height}")]
    MapTooLarge { width: u32, height: u32 },
    #[error("year step must be positive, got {0}")]
    NonPositiveYearStep(i32),
    #[error("year {0} is outside the playable calendar")]
    YearOutOfRange(Year),
    #[error("start year {start} is not before end year {end}")]
    EmptyCalendar { start: Year, end: Year },
    #[error("production rate must be positive, got {0}")]
    NonPositiveProductionRate(i32),
    #[error("percent chance must be within 0..=100, got {0}")]
    ChanceOutOfRange(u32),
    #[error("city, unit and queue limits must leave room for a starting position")]
    ZeroCapacity,
}
