//! Player state and civilization data.

use crate::city::City;
use crate::technology::{TechSet, Technology};
use crate::types::{CityId, PlayerId, UnitId};
use crate::unit::Unit;
use serde::{Deserialize, Serialize};

/// Relation score above which another player counts as friendly.
pub const FRIENDLY_THRESHOLD: i32 = 50;

/// Relation score below which another player counts as hostile.
pub const HOSTILE_THRESHOLD: i32 = -50;

/// A player in the game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Player index.
    pub id: PlayerId,
    /// Display name.
    pub name: String,
    /// Chosen civilization.
    pub civilization: Civilization,
    /// Cities this player holds.
    pub cities: Vec<City>,
    /// Units this player commands.
    pub units: Vec<Unit>,
    /// Known technologies.
    pub techs: TechSet,
    /// Currently researching technology; `None` once everything is known.
    pub researching: Option<Technology>,
    /// Current gold in treasury.
    pub gold: i32,
    /// Happiness of the population.
    pub happiness: i32,
    /// Is this player controlled by the AI?
    pub is_ai: bool,
    /// Relation score toward each player, indexed by player id.
    pub relations: Vec<i32>,
}

impl Player {
    /// Create a new player with no cities or units.
    ///
    /// Every player starts knowing Agriculture and researching Pottery.
    pub fn new(id: PlayerId, civilization: Civilization, is_ai: bool, player_count: u8) -> Self {
        let mut techs = TechSet::new();
        techs.insert(Technology::Agriculture);
        Self {
            id,
            name: civilization.name().to_string(),
            civilization,
            cities: Vec::new(),
            units: Vec::new(),
            techs,
            researching: Some(Technology::Pottery),
            gold: 0,
            happiness: 0,
            is_ai,
            relations: vec![0; usize::from(player_count)],
        }
    }

    /// Check if the player has researched a specific technology.
    pub fn has_tech(&self, tech: Technology) -> bool {
        self.techs.contains(tech)
    }

    /// Whether the player still holds at least one city.
    pub fn is_alive(&self) -> bool {
        !self.cities.is_empty()
    }

    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn city_mut(&mut self, id: CityId) -> Option<&mut City> {
        self.cities.iter_mut().find(|c| c.id == id)
    }

    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut Unit> {
        self.units.iter_mut().find(|u| u.id == id)
    }

    /// Remove a unit, preserving the order of the others.
    pub fn remove_unit(&mut self, id: UnitId) -> Option<Unit> {
        let index = self.units.iter().position(|u| u.id == id)?;
        Some(self.units.remove(index))
    }

    /// The first settler in command order.
    pub fn first_settler(&self) -> Option<&Unit> {
        self.units.iter().find(|u| u.is_settler())
    }

    /// Sum of all city populations.
    pub fn total_population(&self) -> u32 {
        self.cities.iter().map(|c| c.population).sum()
    }

    /// Relation score toward another player.
    pub fn relation_to(&self, other: PlayerId) -> i32 {
        self.relations.get(usize::from(other)).copied().unwrap_or(0)
    }

    /// Qualitative standing toward another player.
    pub fn standing_toward(&self, other: PlayerId) -> Standing {
        Standing::from_score(self.relation_to(other))
    }
}

/// Qualitative reading of a relation score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standing {
    Friendly,
    Neutral,
    Hostile,
}

impl Standing {
    pub const fn from_score(score: i32) -> Self {
        if score > FRIENDLY_THRESHOLD {
            Standing::Friendly
        } else if score < HOSTILE_THRESHOLD {
            Standing::Hostile
        } else {
            Standing::Neutral
        }
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Standing::Friendly => write!(f, "Friendly"),
            Standing::Neutral => write!(f, "Neutral"),
            Standing::Hostile => write!(f, "Hostile"),
        }
    }
}

/// The civilizations players lead. Player `i` plays civilization `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Civilization {
    Egypt,
    Greece,
    Rome,
    China,
    Persia,
    Inca,
    England,
    France,
}

impl Civilization {
    pub const fn name(&self) -> &'static str {
        match self {
            Civilization::Egypt => "Egypt",
            Civilization::Greece => "Greece",
            Civilization::Rome => "Rome",
            Civilization::China => "China",
            Civilization::Persia => "Persia",
            Civilization::Inca => "Inca",
            Civilization::England => "England",
            Civilization::France => "France",
        }
    }

    /// Civilization for a seat index.
    pub fn for_player(id: PlayerId) -> Option<Civilization> {
        Self::all().get(usize::from(id)).copied()
    }

    /// Get all predefined civilizations.
    pub const fn all() -> &'static [Civilization] {
        &[
            Civilization::Egypt,
            Civilization::Greece,
            Civilization::Rome,
            Civilization::China,
            Civilization::Persia,
            Civilization::Inca,
            Civilization::England,
            Civilization::France,
        ]
    }
}

impl std::fmt::Display for Civilization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
