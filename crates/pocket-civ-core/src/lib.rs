//! Pocket Civ Core Library
//!
//! This crate contains the core game logic for Pocket Civ, a small turn-based
//! strategy game played on a wrapping grid: players found cities, queue units
//! and buildings, research technologies and compete for a score or conquest
//! victory before the calendar runs out.
//!
//! # Design Principles
//!
//! - **No UI dependencies**: This crate is purely game logic
//! - **Deterministic**: A seeded RNG replays a game exactly
//! - **Serializable**: All state derives serde
//! - **Stable ids**: Tiles refer to units and cities by id, never by position
//!   in a collection

// Core modules
pub mod map;
pub mod terrain;
pub mod types;

// Game state modules
pub mod error;
pub mod game_state;
pub mod player;
pub mod settings;

// Map generation
pub mod mapgen;

// Units, cities and technology
pub mod city;
pub mod technology;
pub mod unit;

// Turn handling
pub mod ai;
pub mod events;

// Victory conditions
pub mod victory;

// Consistency checks
pub mod invariants;

// Re-exports for convenience
pub use city::{BuildingType, City, ProductionItem};
pub use error::GameError;
pub use events::GameEvent;
pub use game_state::{GameState, MAX_CITY_NAME_LEN};
pub use invariants::{check_invariants, InvariantViolation};
pub use map::{Map, Tile, NEIGHBOR_OFFSETS};
pub use mapgen::generate_map;
pub use player::{Civilization, Player, Standing};
pub use settings::{
    GameSettings, SettingsError, MAX_CALENDAR_YEAR, MAX_MAP_DIMENSION, MAX_PLAYERS, MIN_PLAYERS,
};
pub use technology::{TechSet, Technology};
pub use terrain::{Resource, Terrain};
pub use types::*;
pub use unit::{Unit, UnitStats, UnitType};
pub use victory::ScoreBreakdown;
