//! Root game state containing all game data, and the rules that change it.

use crate::city::{City, ProductionItem};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::map::{Map, NEIGHBOR_OFFSETS};
use crate::mapgen::generate_map;
use crate::player::{Civilization, Player};
use crate::settings::GameSettings;
use crate::technology::Technology;
use crate::types::{CityId, Coord, PlayerId, UnitId, VictoryType, Year};
use crate::unit::{Unit, UnitType};
use crate::victory::{self, ScoreBreakdown};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Longest accepted city name, in characters.
pub const MAX_CITY_NAME_LEN: usize = 49;

/// The complete state of a game at any point in time.
///
/// Randomness is never stored here: every operation that needs it takes an
/// `Rng`, so a seeded generator replays a game exactly.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Game configuration (immutable after start).
    pub settings: GameSettings,
    /// Current calendar year.
    pub year: Year,
    /// The game map.
    pub map: Map,
    /// All players in seat order.
    pub players: Vec<Player>,
    /// Which player's turn it currently is.
    pub current_player: PlayerId,
    /// Victor (if game has ended).
    pub winner: Option<(PlayerId, VictoryType)>,
    /// Next available unit ID.
    pub next_unit_id: UnitId,
    /// Next available city ID.
    pub next_city_id: CityId,
}

impl GameState {
    /// Create a new game: generate the map and seat every player with a
    /// capital, a settler and a warrior.
    pub fn new<R: Rng + ?Sized>(settings: GameSettings, rng: &mut R) -> Result<Self, GameError> {
        settings.validate()?;
        let map = generate_map(&settings, rng);
        let mut game = Self::with_map(settings, map);
        game.create_players(rng)?;
        info!(
            players = game.players.len(),
            year = %game.year,
            "game created"
        );
        Ok(game)
    }

    /// Create a game on a prepared map without any players.
    pub fn with_map(settings: GameSettings, map: Map) -> Self {
        Self {
            year: settings.start_year,
            settings,
            map,
            players: Vec::new(),
            current_player: 0,
            winner: None,
            next_unit_id: 1,
            next_city_id: 1,
        }
    }

    /// Seat `player_count` players. The first `human_players` seats are
    /// human, the rest AI.
    pub fn create_players<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), GameError> {
        for id in 0..self.settings.player_count {
            self.add_player(id, rng)?;
        }
        Ok(())
    }

    fn add_player<R: Rng + ?Sized>(&mut self, id: PlayerId, rng: &mut R) -> Result<(), GameError> {
        let civilization = Civilization::for_player(id).ok_or(GameError::UnknownPlayer(id))?;
        let is_ai = id >= self.settings.human_players;
        let mut player = Player::new(id, civilization, is_ai, self.settings.player_count);
        player.gold = self.settings.starting_gold;
        player.happiness = self.settings.starting_happiness;

        let start = self
            .choose_starting_position(rng)
            .ok_or(GameError::NoStartingPosition(id))?;
        let mut around = self.map.neighbors(start);
        around.shuffle(rng);
        let escort = around
            .into_iter()
            .find(|c| self.map.is_free_land(*c))
            .ok_or(GameError::NoStartingPosition(id))?;

        let capital_id = self.allocate_city_id();
        player.cities.push(City::new(
            capital_id,
            id,
            format!("{} Capital", civilization.name()),
            start,
        ));
        if let Some(tile) = self.map.get_mut(start) {
            tile.city = Some(capital_id);
            tile.owner = Some(id);
        }
        self.players.push(player);

        self.spawn_unit(id, UnitType::Settler, start)?;
        self.spawn_unit(id, UnitType::Warrior, escort)?;
        debug!(player = id, %start, %escort, "player seated");
        Ok(())
    }

    /// Pick a random passable, empty tile that has at least one free
    /// passable neighbour for the starting warrior.
    fn choose_starting_position<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coord> {
        let candidates: Vec<Coord> = self
            .map
            .iter()
            .filter(|(_, t)| t.terrain.is_passable() && t.city.is_none() && t.unit.is_none())
            .map(|(c, _)| c)
            .filter(|c| self.map.neighbors(*c).iter().any(|n| self.map.is_free_land(*n)))
            .collect();
        candidates.choose(rng).copied()
    }

    /// Create a unit for a player on a tile and point the tile at it.
    fn spawn_unit(
        &mut self,
        owner: PlayerId,
        unit_type: UnitType,
        at: Coord,
    ) -> Result<UnitId, GameError> {
        let id = self.next_unit_id;
        let player = self
            .players
            .get_mut(usize::from(owner))
            .ok_or(GameError::UnknownPlayer(owner))?;
        player.units.push(Unit::new(id, owner, unit_type, at));
        if let Some(tile) = self.map.get_mut(at) {
            tile.unit = Some(id);
        }
        self.next_unit_id += 1;
        Ok(id)
    }

    /// Allocate a new city ID.
    fn allocate_city_id(&mut self) -> CityId {
        let id = self.next_city_id;
        self.next_city_id += 1;
        id
    }

    /// Get a player by ID.
    pub fn player(&self, id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .get(usize::from(id))
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Get a mutable player by ID.
    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player, GameError> {
        self.players
            .get_mut(usize::from(id))
            .ok_or(GameError::UnknownPlayer(id))
    }

    /// Get the player whose turn it is.
    pub fn current(&self) -> Result<&Player, GameError> {
        self.player(self.current_player)
    }

    /// The unit standing on a tile, if any.
    pub fn unit_at(&self, at: Coord) -> Option<&Unit> {
        let id = self.map.get(at)?.unit?;
        self.players.iter().find_map(|p| p.unit(id))
    }

    /// The city standing on a tile, if any.
    pub fn city_at(&self, at: Coord) -> Option<&City> {
        let tile = self.map.get(at)?;
        let id = tile.city?;
        match tile.owner {
            Some(owner) => self.players.get(usize::from(owner))?.city(id),
            None => self.players.iter().find_map(|p| p.city(id)),
        }
    }

    /// Check if the game has ended.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Reject actions once a winner has been declared.
    pub(crate) fn ensure_running(&self) -> Result<(), GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Player actions
    // ------------------------------------------------------------------

    /// Move a unit one step by `(dx, dy)`, wrapping around the map edges.
    pub fn move_unit(
        &mut self,
        player: PlayerId,
        unit: UnitId,
        dx: i32,
        dy: i32,
    ) -> Result<GameEvent, GameError> {
        self.ensure_running()?;
        let from = self
            .player(player)?
            .unit(unit)
            .ok_or(GameError::UnknownUnit(unit))?
            .position;
        let to = self.map.wrap(from, dx, dy);
        let tile = self.map.get(to).ok_or(GameError::UnknownUnit(unit))?;

        if !tile.terrain.is_passable() {
            return Err(GameError::ImpassableTerrain {
                at: to,
                terrain: tile.terrain.name(),
            });
        }
        if tile.unit.is_some_and(|other| other != unit) {
            return Err(GameError::TileOccupied(to));
        }

        if let Some(old) = self.map.get_mut(from) {
            if old.unit == Some(unit) {
                old.unit = None;
            }
        }
        if let Some(new) = self.map.get_mut(to) {
            new.unit = Some(unit);
        }
        if let Some(u) = self.player_mut(player)?.unit_mut(unit) {
            u.position = to;
        }

        debug!(player, unit, %from, %to, "unit moved");
        Ok(GameEvent::UnitMoved {
            player,
            unit,
            from,
            to,
        })
    }

    /// Found a city with the player's first settler, consuming the settler.
    pub fn found_city(&mut self, player: PlayerId, name: &str) -> Result<GameEvent, GameError> {
        self.ensure_running()?;
        let name = name.trim();
        if name.is_empty() || name.chars().count() > MAX_CITY_NAME_LEN {
            return Err(GameError::InvalidCityName {
                max: MAX_CITY_NAME_LEN,
            });
        }

        let max_cities = self.settings.max_cities;
        let owner = self.player(player)?;
        let settler = owner.first_settler().ok_or(GameError::NoSettler)?;
        let (settler_id, at) = (settler.id, settler.position);

        if self.map.get(at).is_some_and(|t| t.city.is_some()) {
            return Err(GameError::CityAlreadyPresent(at));
        }
        if owner.cities.len() >= max_cities {
            return Err(GameError::CityLimitReached(max_cities));
        }

        let city_id = self.allocate_city_id();
        if let Some(tile) = self.map.get_mut(at) {
            tile.city = Some(city_id);
            tile.owner = Some(player);
            if tile.unit == Some(settler_id) {
                tile.unit = None;
            }
        }
        let owner = self.player_mut(player)?;
        owner
            .cities
            .push(City::new(city_id, player, name.to_string(), at));
        owner.remove_unit(settler_id);

        info!(player, city = city_id, name, %at, "city founded");
        Ok(GameEvent::CityFounded {
            player,
            city: city_id,
            name: name.to_string(),
            at,
        })
    }

    /// Change a player's research target.
    pub fn set_research(
        &mut self,
        player: PlayerId,
        tech: Technology,
    ) -> Result<GameEvent, GameError> {
        self.ensure_running()?;
        let p = self.player_mut(player)?;
        if p.has_tech(tech) {
            return Err(GameError::TechAlreadyKnown(tech));
        }
        p.researching = Some(tech);
        debug!(player, %tech, "research target set");
        Ok(GameEvent::ResearchChanged { player, tech })
    }

    /// Append an item to a city's production queue.
    pub fn enqueue_production(
        &mut self,
        player: PlayerId,
        city: CityId,
        item: ProductionItem,
    ) -> Result<GameEvent, GameError> {
        self.ensure_running()?;
        let max_len = self.settings.max_production_queue;
        let c = self
            .player_mut(player)?
            .city_mut(city)
            .ok_or(GameError::UnknownCity(city))?;
        if !c.enqueue(item, max_len) {
            return Err(GameError::ProductionQueueFull(max_len));
        }
        debug!(player, city, %item, "production queued");
        Ok(GameEvent::ProductionQueued { player, city, item })
    }

    // ------------------------------------------------------------------
    // Turn flow
    // ------------------------------------------------------------------

    /// Pass play to the next seat. When play wraps around to the first seat
    /// the year ends and its events are returned. Does nothing once the game
    /// is over.
    pub fn finish_turn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        if self.is_over() {
            return Vec::new();
        }
        let seats = self.players.len().max(1);
        let next = (usize::from(self.current_player) + 1) % seats;
        self.current_player = PlayerId::try_from(next).unwrap_or(0);
        if self.current_player == 0 {
            self.end_year(rng)
        } else {
            Vec::new()
        }
    }

    /// Year-end processing: advance the clock, grow cities, work production
    /// queues and roll for research.
    pub fn end_year<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<GameEvent> {
        self.year = self.year.advance(self.settings.year_step);
        info!(year = %self.year, "year advanced");
        let mut events = vec![GameEvent::YearAdvanced { year: self.year }];

        for index in 0..self.players.len() {
            self.update_cities(index, rng, &mut events);
            self.update_research(index, rng, &mut events);
        }
        events
    }

    fn update_cities<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        let rate = self.settings.production_rate;
        let city_count = self.players[index].cities.len();

        for ci in 0..city_count {
            let growth = rng.gen_range(0..=1);
            let city = &mut self.players[index].cities[ci];
            city.grow(growth);
            let Some(item) = city.process_production(rate) else {
                continue;
            };
            let (city_id, owner, at) = (city.id, city.owner, city.position);

            match item {
                ProductionItem::Unit(unit_type) => {
                    events.push(self.deliver_unit(owner, city_id, at, unit_type));
                }
                ProductionItem::Building(building) => {
                    self.players[index].cities[ci].add_building(building);
                    info!(player = owner, city = city_id, %building, "building completed");
                    events.push(GameEvent::BuildingCompleted {
                        player: owner,
                        city: city_id,
                        building,
                    });
                }
            }
        }
    }

    /// Place a finished unit on the first free land tile around its city.
    fn deliver_unit(
        &mut self,
        owner: PlayerId,
        city: CityId,
        city_at: Coord,
        unit_type: UnitType,
    ) -> GameEvent {
        let blocked = GameEvent::ProductionBlocked {
            player: owner,
            city,
            unit_type,
        };
        let at_capacity = self
            .players
            .get(usize::from(owner))
            .map_or(true, |p| p.units.len() >= self.settings.max_units);
        let spot = NEIGHBOR_OFFSETS
            .iter()
            .map(|(dx, dy)| self.map.wrap(city_at, *dx, *dy))
            .find(|c| *c != city_at && self.map.is_free_land(*c));

        match (at_capacity, spot) {
            (false, Some(at)) => match self.spawn_unit(owner, unit_type, at) {
                Ok(unit) => {
                    info!(player = owner, city, %unit_type, %at, "unit produced");
                    GameEvent::UnitProduced {
                        player: owner,
                        city,
                        unit,
                        unit_type,
                        at,
                    }
                }
                Err(_) => blocked,
            },
            _ => {
                warn!(player = owner, city, %unit_type, "no room for produced unit");
                blocked
            }
        }
    }

    fn update_research<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
        events: &mut Vec<GameEvent>,
    ) {
        let chance = self.settings.research_chance;
        let player = &mut self.players[index];
        let Some(target) = player.researching else {
            return;
        };
        if rng.gen_range(0..100) >= chance {
            return;
        }

        player.techs.insert(target);
        let next = player.techs.next_unknown_after(target);
        player.researching = next;
        info!(player = player.id, tech = %target, "technology researched");
        events.push(GameEvent::TechResearched {
            player: player.id,
            tech: target,
            next,
        });
    }

    // ------------------------------------------------------------------
    // Scoring and victory
    // ------------------------------------------------------------------

    /// Score of a player: `100*cities + 50*population + 50*techs + 5*tiles`.
    pub fn calculate_score(&self, player: PlayerId) -> u32 {
        self.score_breakdown(player).map_or(0, |s| s.total)
    }

    /// Score of a player split into its components.
    pub fn score_breakdown(&self, player: PlayerId) -> Option<ScoreBreakdown> {
        let p = self.players.get(usize::from(player))?;
        Some(ScoreBreakdown::new(
            p.cities.len() as u32,
            p.total_population(),
            p.techs.len() as u32,
            self.map.count_owned_by(player) as u32,
        ))
    }

    /// Decide whether the game is over, recording the winner if so.
    pub fn check_game_over(&mut self) -> Option<(PlayerId, VictoryType)> {
        if self.winner.is_none() {
            self.winner = victory::evaluate(self);
            if let Some((player, kind)) = self.winner {
                info!(player, %kind, year = %self.year, "game over");
            }
        }
        self.winner
    }
}
