//! Interactive turn handler for human players.

use crate::console::Console;
use crate::error::Result;
use crate::render::{describe_event, render_city, render_map, render_status};
use pocket_civ_core::{
    BuildingType, CityId, GameError, GameEvent, GameState, PlayerId, ProductionItem, UnitType,
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Entries of the main player menu, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuAction {
    ViewMap,
    ManageCities,
    MoveUnits,
    FoundCity,
    Research,
    ViewStatus,
    EndTurn,
}

impl MenuAction {
    pub const fn label(&self) -> &'static str {
        match self {
            MenuAction::ViewMap => "View Map",
            MenuAction::ManageCities => "Manage Cities",
            MenuAction::MoveUnits => "Move Units",
            MenuAction::FoundCity => "Found City",
            MenuAction::Research => "Research Technology",
            MenuAction::ViewStatus => "View Status",
            MenuAction::EndTurn => "End Turn",
        }
    }

    pub const fn all() -> &'static [MenuAction] {
        &[
            MenuAction::ViewMap,
            MenuAction::ManageCities,
            MenuAction::MoveUnits,
            MenuAction::FoundCity,
            MenuAction::Research,
            MenuAction::ViewStatus,
            MenuAction::EndTurn,
        ]
    }

    /// Action for a 1-based menu number.
    pub fn from_choice(choice: i64) -> Option<MenuAction> {
        let index = usize::try_from(choice.checked_sub(1)?).ok()?;
        Self::all().get(index).copied()
    }
}

/// Entries of the city submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CityAction {
    ProduceUnit,
    BuildBuilding,
    ViewCity,
    Back,
}

impl CityAction {
    const ALL: [CityAction; 4] = [
        CityAction::ProduceUnit,
        CityAction::BuildBuilding,
        CityAction::ViewCity,
        CityAction::Back,
    ];

    const fn label(&self) -> &'static str {
        match self {
            CityAction::ProduceUnit => "Produce Unit",
            CityAction::BuildBuilding => "Build Building",
            CityAction::ViewCity => "View City",
            CityAction::Back => "Back",
        }
    }
}

/// Run the menu for the current player until they end their turn.
pub fn play_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GameState,
) -> Result<()> {
    let player = game.current_player;
    loop {
        console.say("\nPlayer Menu:")?;
        console.list(MenuAction::all().iter().map(|a| a.label()))?;
        let choice = console.choose("Choose an action: ", 1, MenuAction::all().len() as i64)?;
        let Some(action) = MenuAction::from_choice(choice) else {
            continue;
        };
        debug!(player, ?action, "menu action");

        match action {
            MenuAction::ViewMap => console.say(render_map(game))?,
            MenuAction::ManageCities => manage_cities(console, game, player)?,
            MenuAction::MoveUnits => move_units(console, game, player)?,
            MenuAction::FoundCity => found_city(console, game, player)?,
            MenuAction::Research => research(console, game, player)?,
            MenuAction::ViewStatus => {
                let status = render_status(game, game.player(player)?);
                console.say(status)?;
            }
            MenuAction::EndTurn => {
                console.say("Ending turn...")?;
                return Ok(());
            }
        }
    }
}

/// Print the outcome of a game action. Rejections are shown, not propagated.
fn report<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &GameState,
    outcome: std::result::Result<GameEvent, GameError>,
) -> Result<()> {
    match outcome {
        Ok(event) => console.say(describe_event(game, &event)),
        Err(e) => console.say(format!("Cannot do that: {}", e)),
    }
}

fn manage_cities<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    player: PlayerId,
) -> Result<()> {
    let cities: Vec<(CityId, String)> = game
        .player(player)?
        .cities
        .iter()
        .map(|c| (c.id, format!("{} (Pop: {})", c.name, c.population)))
        .collect();
    if cities.is_empty() {
        return console.say("You have no cities!");
    }

    console.say("\nYour Cities:")?;
    console.list(cities.iter().map(|(_, label)| label))?;
    let choice = console.choose("Select a city (0 to go back): ", 0, cities.len() as i64)?;
    let Some((city, _)) = pick(&cities, choice) else {
        return Ok(());
    };
    let city = *city;

    loop {
        let name = game
            .player(player)?
            .city(city)
            .map(|c| c.name.clone())
            .unwrap_or_default();
        console.say(format!("\nManaging {}", name))?;
        console.list(CityAction::ALL.iter().map(|a| a.label()))?;
        let choice = console.choose("Choose an action: ", 1, CityAction::ALL.len() as i64)?;
        let Some(action) = pick(&CityAction::ALL, choice).copied() else {
            continue;
        };

        match action {
            CityAction::ProduceUnit => {
                console.say("\nAvailable Units:")?;
                console.list(
                    UnitType::all()
                        .iter()
                        .map(|u| format!("{} (cost {})", u, u.cost())),
                )?;
                let n = console.choose(
                    "Select a unit to produce (0 to cancel): ",
                    0,
                    UnitType::all().len() as i64,
                )?;
                if let Some(unit) = pick(UnitType::all(), n) {
                    let outcome =
                        game.enqueue_production(player, city, ProductionItem::Unit(*unit));
                    report(console, game, outcome)?;
                }
            }
            CityAction::BuildBuilding => {
                console.say("\nAvailable Buildings:")?;
                console.list(
                    BuildingType::all()
                        .iter()
                        .map(|b| format!("{} (cost {})", b, b.cost())),
                )?;
                let n = console.choose(
                    "Select a building to construct (0 to cancel): ",
                    0,
                    BuildingType::all().len() as i64,
                )?;
                if let Some(building) = pick(BuildingType::all(), n) {
                    let outcome = game.enqueue_production(
                        player,
                        city,
                        ProductionItem::Building(*building),
                    );
                    report(console, game, outcome)?;
                }
            }
            CityAction::ViewCity => {
                if let Some(c) = game.player(player)?.city(city) {
                    let view = render_city(c);
                    console.say(view)?;
                }
            }
            CityAction::Back => return Ok(()),
        }
    }
}

fn move_units<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    player: PlayerId,
) -> Result<()> {
    let units: Vec<_> = game
        .player(player)?
        .units
        .iter()
        .map(|u| (u.id, format!("{} at {}", u.unit_type, u.position)))
        .collect();
    if units.is_empty() {
        return console.say("You have no units!");
    }

    console.say("\nYour Units:")?;
    console.list(units.iter().map(|(_, label)| label))?;
    let choice = console.choose(
        "Select a unit to move (0 to go back): ",
        0,
        units.len() as i64,
    )?;
    let Some((unit, _)) = pick(&units, choice) else {
        return Ok(());
    };

    match console.ask_pair("Enter movement direction (dx dy): ")? {
        Some((dx, dy)) => {
            let outcome = game.move_unit(player, *unit, dx, dy);
            report(console, game, outcome)
        }
        None => console.say("Invalid direction."),
    }
}

fn found_city<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    player: PlayerId,
) -> Result<()> {
    if game.player(player)?.first_settler().is_none() {
        return console.say("You have no settler units!");
    }
    console.prompt("Enter name for new city: ")?;
    let name = console.read_line()?;
    let outcome = game.found_city(player, &name);
    report(console, game, outcome)
}

fn research<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    player: PlayerId,
) -> Result<()> {
    let available: Vec<_> = game.player(player)?.techs.missing().collect();
    if available.is_empty() {
        return console.say("Every technology is already known.");
    }

    console.say("\nAvailable Technologies:")?;
    console.list(available.iter())?;
    let choice = console.choose(
        "Select a technology to research (0 to cancel): ",
        0,
        available.len() as i64,
    )?;
    if let Some(tech) = pick(&available, choice) {
        let outcome = game.set_research(player, *tech);
        report(console, game, outcome)?;
    }
    Ok(())
}

/// Item for a 1-based choice; 0 or out of range gives `None`.
fn pick<T>(items: &[T], choice: i64) -> Option<&T> {
    let index = usize::try_from(choice.checked_sub(1)?).ok()?;
    items.get(index)
}
