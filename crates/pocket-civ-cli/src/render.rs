//! Text rendering of the map, player status, cities and game events.

use pocket_civ_core::{
    City, CityId, Coord, GameEvent, GameState, Player, PlayerId, Technology, Year,
};

/// Symbol drawn for a tile holding a city.
pub const CITY_SYMBOL: char = 'C';

/// Draw the whole map, one symbol per tile separated by spaces.
///
/// A city hides any unit on its tile, and a unit hides the terrain.
pub fn render_map(game: &GameState) -> String {
    let mut out = String::from("World Map:\n");
    for y in 0..game.map.height {
        let row: Vec<String> = (0..game.map.width)
            .map(|x| tile_symbol(game, Coord::new(x, y)).to_string())
            .collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out.push_str("Legend: C city, S W A s K M c T units, . plains, ~ ocean, ^ mountains,\n");
    out.push_str("        * forest, h hills, d desert, t tundra, j jungle\n");
    out
}

fn tile_symbol(game: &GameState, at: Coord) -> char {
    let Some(tile) = game.map.get(at) else {
        return ' ';
    };
    if tile.city.is_some() {
        return CITY_SYMBOL;
    }
    game.unit_at(at)
        .map_or_else(|| tile.terrain.symbol(), |u| u.unit_type.symbol())
}

/// A player's treasury, research, holdings and relations.
pub fn render_status(game: &GameState, player: &Player) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} Status ({})\n", player.name, game.year));
    out.push_str(&format!("Score: {}\n", game.calculate_score(player.id)));
    out.push_str(&format!("Gold: {}\n", player.gold));
    out.push_str(&format!("Happiness: {}\n", player.happiness));
    out.push_str(&format!(
        "Researching: {}\n",
        research_label(player.researching)
    ));

    out.push_str(&format!("\nCities ({}):\n", player.cities.len()));
    for city in &player.cities {
        out.push_str(&format!("- {} (Pop: {})\n", city.name, city.population));
    }

    out.push_str(&format!("\nUnits ({}):\n", player.units.len()));
    for unit in &player.units {
        out.push_str(&format!("- {} at {}\n", unit.unit_type, unit.position));
    }

    out.push_str("\nTechnologies:\n");
    for tech in player.techs.iter() {
        out.push_str(&format!("- {}\n", tech));
    }

    out.push_str("\nRelations:\n");
    for other in game.players.iter().filter(|p| p.id != player.id) {
        out.push_str(&format!(
            "- {}: {} ({})\n",
            other.name,
            player.standing_toward(other.id),
            player.relation_to(other.id)
        ));
    }
    out
}

fn research_label(tech: Option<Technology>) -> String {
    tech.map_or_else(|| "nothing (all known)".to_string(), |t| t.to_string())
}

/// A city's vital statistics, buildings and production queue.
pub fn render_city(city: &City) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} at {}\n", city.name, city.position));
    out.push_str(&format!("Population: {}\n", city.population));
    out.push_str(&format!("Food: {}\n", city.food));

    if city.buildings.is_empty() {
        out.push_str("Buildings: none\n");
    } else {
        let names: Vec<&str> = city.buildings.iter().map(|b| b.name()).collect();
        out.push_str(&format!("Buildings: {}\n", names.join(", ")));
    }

    if city.production_queue.is_empty() {
        out.push_str("Production queue: empty\n");
    } else {
        out.push_str("Production queue:\n");
        for (i, item) in city.production_queue.iter().enumerate() {
            if i == 0 {
                out.push_str(&format!(
                    "{}. {} ({}% complete)\n",
                    i + 1,
                    item,
                    city.progress_percent()
                ));
            } else {
                let cost = item.cost();
                out.push_str(&format!("{}. {} (cost {})\n", i + 1, item, cost));
            }
        }
    }
    out
}

/// Every player's score, one per line.
pub fn render_scores(game: &GameState) -> String {
    let mut out = String::new();
    for player in &game.players {
        out.push_str(&format!(
            "{}: {}\n",
            player.name,
            game.calculate_score(player.id)
        ));
    }
    out
}

/// Banner printed when a player's turn begins.
pub fn turn_header(name: &str, year: Year) -> String {
    format!("\n======= {}'s Turn ({}) =======", name, year)
}

/// One-line description of an event.
pub fn describe_event(game: &GameState, event: &GameEvent) -> String {
    let name = |id: PlayerId| {
        game.players
            .get(usize::from(id))
            .map_or_else(|| format!("Player {}", id), |p| p.name.clone())
    };
    let city_name = |player: PlayerId, city: CityId| {
        game.players
            .get(usize::from(player))
            .and_then(|p| p.city(city))
            .map_or_else(|| format!("City {}", city), |c| c.name.clone())
    };

    match event {
        GameEvent::YearAdvanced { year } => format!("Year {}", year),
        GameEvent::UnitProduced {
            player,
            city,
            unit_type,
            at,
            ..
        } => format!(
            "{} produced a {} at {}",
            city_name(*player, *city),
            unit_type,
            at
        ),
        GameEvent::ProductionBlocked {
            player,
            city,
            unit_type,
        } => format!(
            "{} finished a {} but had no room to place it",
            city_name(*player, *city),
            unit_type
        ),
        GameEvent::BuildingCompleted {
            player,
            city,
            building,
        } => format!("{} built a {}", city_name(*player, *city), building),
        GameEvent::TechResearched { player, tech, .. } => {
            format!("{} researched {}", name(*player), tech)
        }
        GameEvent::ResearchChanged { player, tech } => {
            format!("{} started researching {}", name(*player), tech)
        }
        GameEvent::ProductionQueued { player, city, item } => format!(
            "{} started producing {}",
            city_name(*player, *city),
            item
        ),
        GameEvent::UnitMoved { player, to, .. } => {
            format!("{} moved a unit to {}", name(*player), to)
        }
        GameEvent::CityFounded { name: city, .. } => format!("Founded new city: {}", city),
    }
}
