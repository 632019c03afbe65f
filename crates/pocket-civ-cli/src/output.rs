//! Final result formatting.

use pocket_civ_core::GameState;
use serde::Serialize;

/// JSON-serializable game result.
#[derive(Debug, Serialize)]
pub struct JsonGameResult {
    /// Random seed used, if one was given.
    pub seed: Option<u64>,
    /// Winner player ID (null if the game did not finish).
    pub winner: Option<u8>,
    /// How the game was won.
    pub victory: Option<String>,
    /// Year the game ended in.
    pub final_year: String,
    /// Per-player results.
    pub players: Vec<JsonPlayerResult>,
}

/// JSON-serializable player result.
#[derive(Debug, Serialize)]
pub struct JsonPlayerResult {
    pub id: u8,
    pub civilization: String,
    pub score: u32,
    pub cities: usize,
    pub population: u32,
    pub techs: usize,
    pub units: usize,
}

impl JsonGameResult {
    pub fn from_game(game: &GameState, seed: Option<u64>) -> Self {
        Self {
            seed,
            winner: game.winner.map(|(id, _)| id),
            victory: game.winner.map(|(_, kind)| kind.to_string()),
            final_year: game.year.to_string(),
            players: game
                .players
                .iter()
                .map(|p| JsonPlayerResult {
                    id: p.id,
                    civilization: p.civilization.to_string(),
                    score: game.calculate_score(p.id),
                    cities: p.cities.len(),
                    population: p.total_population(),
                    techs: p.techs.len(),
                    units: p.units.len(),
                })
                .collect(),
        }
    }
}

/// Format the end of a game as human-readable text.
pub fn format_text(game: &GameState) -> String {
    let mut output = String::from("\nGame Over!\n");
    match game.winner {
        Some((id, kind)) => {
            let name = game
                .players
                .get(usize::from(id))
                .map_or("Unknown", |p| p.name.as_str());
            output.push_str(&format!("Winner: {} ({})\n", name, kind));
            output.push_str(&format!(
                "Year: {} | Score: {}\n",
                game.year,
                game.calculate_score(id)
            ));
        }
        None => {
            output.push_str(&format!("No winner ({})\n", game.year));
        }
    }

    output.push_str("\nFinal Scores:\n");
    output.push_str(&crate::render::render_scores(game));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use pocket_civ_core::{GameSettings, VictoryType, Year};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn finished_game() -> GameState {
        let mut rng = StdRng::seed_from_u64(5);
        let mut game = GameState::new(GameSettings::ai_only(2), &mut rng).unwrap();
        game.year = Year::ad(2050);
        game.players[1].cities[0].population = 4;
        game.check_game_over();
        game
    }

    #[test]
    fn test_text_result() {
        let game = finished_game();
        assert_eq!(game.winner, Some((1, VictoryType::Score)));
        let text = format_text(&game);
        assert!(text.contains("Winner: Greece (Score Victory)"));
        assert!(text.contains("Year: 2050 AD"));
        assert!(text.contains("Egypt: "));
    }

    #[test]
    fn test_json_result() {
        let game = finished_game();
        let result = JsonGameResult::from_game(&game, Some(5));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["winner"], 1);
        assert_eq!(json["victory"], "Score Victory");
        assert_eq!(json["final_year"], "2050 AD");
        assert_eq!(json["players"].as_array().unwrap().len(), 2);
        assert_eq!(json["players"][1]["population"], 4);
    }
}
