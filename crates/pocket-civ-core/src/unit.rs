//! Unit system - military and civilian units.

use crate::types::{Coord, PlayerId, UnitId};
use serde::{Deserialize, Serialize};

/// Health every unit is created with.
pub const FULL_HEALTH: u32 = 100;

/// A unit on the game map.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier.
    pub id: UnitId,
    /// Owning player.
    pub owner: PlayerId,
    /// Type of unit.
    pub unit_type: UnitType,
    /// Current health (0-100).
    pub health: u32,
    /// Movement points per turn.
    pub movement: u32,
    /// Combat strength.
    pub strength: u32,
    /// Experience points earned.
    pub experience: u32,
    /// Current position on the map.
    pub position: Coord,
}

impl Unit {
    /// Create a new unit at full health with its type's base stats.
    pub fn new(id: UnitId, owner: PlayerId, unit_type: UnitType, position: Coord) -> Self {
        let stats = unit_type.stats();
        Self {
            id,
            owner,
            unit_type,
            health: FULL_HEALTH,
            movement: stats.movement,
            strength: stats.strength,
            experience: 0,
            position,
        }
    }

    /// Settlers found cities.
    pub fn is_settler(&self) -> bool {
        self.unit_type == UnitType::Settler
    }
}

/// Types of units available.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitType {
    Settler,
    Warrior,
    Archer,
    Swordsman,
    Knight,
    Musketeer,
    Cannon,
    Tank,
}

impl UnitType {
    /// Get the base stats for this unit type.
    pub const fn stats(&self) -> UnitStats {
        match self {
            UnitType::Settler => UnitStats::new(2, 0, 100),
            UnitType::Warrior => UnitStats::new(2, 10, 50),
            UnitType::Archer => UnitStats::new(2, 8, 60),
            UnitType::Swordsman => UnitStats::new(2, 12, 80),
            UnitType::Knight => UnitStats::new(3, 15, 120),
            UnitType::Musketeer => UnitStats::new(2, 18, 150),
            UnitType::Cannon => UnitStats::new(1, 25, 200),
            UnitType::Tank => UnitStats::new(3, 30, 300),
        }
    }

    /// Production cost.
    pub const fn cost(&self) -> i32 {
        self.stats().cost
    }

    pub const fn name(&self) -> &'static str {
        match self {
            UnitType::Settler => "Settler",
            UnitType::Warrior => "Warrior",
            UnitType::Archer => "Archer",
            UnitType::Swordsman => "Swordsman",
            UnitType::Knight => "Knight",
            UnitType::Musketeer => "Musketeer",
            UnitType::Cannon => "Cannon",
            UnitType::Tank => "Tank",
        }
    }

    /// Single-character map symbol. Lowercase where the uppercase letter is
    /// already taken (`C` marks cities).
    pub const fn symbol(&self) -> char {
        match self {
            UnitType::Settler => 'S',
            UnitType::Warrior => 'W',
            UnitType::Archer => 'A',
            UnitType::Swordsman => 's',
            UnitType::Knight => 'K',
            UnitType::Musketeer => 'M',
            UnitType::Cannon => 'c',
            UnitType::Tank => 'T',
        }
    }

    /// Get all unit types.
    pub const fn all() -> &'static [UnitType] {
        &[
            UnitType::Settler,
            UnitType::Warrior,
            UnitType::Archer,
            UnitType::Swordsman,
            UnitType::Knight,
            UnitType::Musketeer,
            UnitType::Cannon,
            UnitType::Tank,
        ]
    }
}

impl std::fmt::Display for UnitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Base statistics for a unit type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitStats {
    pub movement: u32,
    pub strength: u32,
    pub cost: i32,
}

impl UnitStats {
    pub const fn new(movement: u32, strength: u32, cost: i32) -> Self {
        Self {
            movement,
            strength,
            cost,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_creation() {
        let unit = Unit::new(1, 0, UnitType::Warrior, Coord::new(3, 4));
        assert_eq!(unit.health, FULL_HEALTH);
        assert_eq!(unit.movement, 2);
        assert_eq!(unit.strength, 10);
        assert_eq!(unit.experience, 0);
        assert_eq!(unit.position, Coord::new(3, 4));
        assert!(!unit.is_settler());
    }

    #[test]
    fn test_settler() {
        let unit = Unit::new(1, 0, UnitType::Settler, Coord::default());
        assert!(unit.is_settler());
        assert_eq!(unit.strength, 0);
    }

    #[test]
    fn test_costs() {
        assert_eq!(UnitType::Warrior.cost(), 50);
        assert_eq!(UnitType::Tank.cost(), 300);
        assert!(UnitType::all().iter().all(|u| u.cost() > 0));
    }

    #[test]
    fn test_symbols_avoid_city_marker() {
        assert!(UnitType::all().iter().all(|u| u.symbol() != 'C'));
    }
}
