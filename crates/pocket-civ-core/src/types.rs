//! Core type aliases used throughout the crate.

use serde::{Deserialize, Serialize};

/// Player index (0-7).
pub type PlayerId = u8;

/// Unique identifier for a unit. Never reused within a game.
pub type UnitId = u64;

/// Unique identifier for a city. Never reused within a game.
pub type CityId = u64;

/// A position on the rectangular map grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A calendar year. Negative values are BC, positive values AD.
///
/// There is no year zero in the calendar, but the game clock steps through
/// it anyway; year 0 is displayed as "1 AD".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Year(pub i32);

impl Year {
    /// Create a year from a BC value (e.g. `Year::bc(4000)`).
    pub const fn bc(year: i32) -> Self {
        Self(-year)
    }

    /// Create a year from an AD value.
    pub const fn ad(year: i32) -> Self {
        Self(year)
    }

    /// Advance by a number of years, stopping at the end of the `i32` range.
    pub const fn advance(self, years: i32) -> Self {
        Self(self.0.saturating_add(years))
    }

    pub const fn is_bc(&self) -> bool {
        self.0 < 0
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_bc() {
            write!(f, "{} BC", -self.0)
        } else {
            write!(f, "{} AD", self.0.max(1))
        }
    }
}

/// Types of victory a player can achieve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VictoryType {
    /// Highest score when the end year is reached.
    Score,
    /// Last player holding any city.
    Conquest,
}

impl std::fmt::Display for VictoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VictoryType::Score => write!(f, "Score Victory"),
            VictoryType::Conquest => write!(f, "Conquest Victory"),
        }
    }
}
