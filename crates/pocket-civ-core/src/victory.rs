//! Scoring and victory condition checking.

use crate::game_state::GameState;
use crate::types::{PlayerId, VictoryType};
use serde::{Deserialize, Serialize};

/// Points per city held.
pub const POINTS_PER_CITY: u32 = 100;
/// Points per citizen across all cities.
pub const POINTS_PER_CITIZEN: u32 = 50;
/// Points per known technology.
pub const POINTS_PER_TECH: u32 = 50;
/// Points per owned tile.
pub const POINTS_PER_TILE: u32 = 5;

/// A player's score split into its components.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub cities: u32,
    pub population: u32,
    pub techs: u32,
    pub territory: u32,
    /// Weighted sum of the components.
    pub total: u32,
}

impl ScoreBreakdown {
    pub fn new(cities: u32, population: u32, techs: u32, territory: u32) -> Self {
        Self {
            cities,
            population,
            techs,
            territory,
            total: cities * POINTS_PER_CITY
                + population * POINTS_PER_CITIZEN
                + techs * POINTS_PER_TECH
                + territory * POINTS_PER_TILE,
        }
    }
}

/// Check for conquest victory: exactly one player still holds a city.
pub fn check_conquest(game: &GameState) -> Option<PlayerId> {
    let mut alive = game.players.iter().filter(|p| p.is_alive());
    match (alive.next(), alive.next()) {
        (Some(last), None) => Some(last.id),
        _ => None,
    }
}

/// The highest scoring player. Ties go to the lowest player id.
pub fn check_score_victory(game: &GameState) -> Option<PlayerId> {
    game.players
        .iter()
        .map(|p| (p.id, game.calculate_score(p.id)))
        .max_by(|a, b| a.1.cmp(&b.1).then(b.0.cmp(&a.0)))
        .map(|(id, _)| id)
}

/// Check every victory condition and return the winner if any.
///
/// Once the end year is reached the game ends on score; before that it ends
/// only by conquest.
pub fn evaluate(game: &GameState) -> Option<(PlayerId, VictoryType)> {
    if game.year >= game.settings.end_year {
        return check_score_victory(game).map(|p| (p, VictoryType::Score));
    }
    check_conquest(game).map(|p| (p, VictoryType::Conquest))
}
