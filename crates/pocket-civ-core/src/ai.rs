//! Randomized computer opponent.
//!
//! The AI keeps every idle city busy with a random unit or building, wanders
//! each unit one random step and now and then retargets research to the
//! earliest technology it is missing.

use crate::city::{BuildingType, ProductionItem};
use crate::error::GameError;
use crate::events::GameEvent;
use crate::game_state::GameState;
use crate::types::{CityId, PlayerId, UnitId};
use crate::unit::UnitType;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Probability that an idle city queues a unit rather than a building.
pub const UNIT_CHANCE: f64 = 0.5;

/// Probability per turn that research is retargeted.
pub const RETARGET_CHANCE: f64 = 0.5;

/// An order the AI has decided on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AiOrder {
    Produce { city: CityId, item: ProductionItem },
    Step { unit: UnitId, dx: i32, dy: i32 },
    Retarget,
}

/// Play the current player's turn as the AI.
pub fn take_turn<R: Rng + ?Sized>(
    game: &mut GameState,
    rng: &mut R,
) -> Result<Vec<GameEvent>, GameError> {
    game.ensure_running()?;
    let player = game.current_player;
    let orders = plan(game, player, rng)?;
    let mut events = Vec::with_capacity(orders.len());

    for order in orders {
        match order {
            AiOrder::Produce { city, item } => {
                events.push(game.enqueue_production(player, city, item)?);
            }
            AiOrder::Step { unit, dx, dy } => match game.move_unit(player, unit, dx, dy) {
                Ok(event) => events.push(event),
                Err(GameError::ImpassableTerrain { .. } | GameError::TileOccupied(_)) => {
                    debug!(player, unit, dx, dy, "ai step blocked");
                }
                Err(e) => return Err(e),
            },
            AiOrder::Retarget => {
                let first = game.player(player)?.techs.first_unknown();
                if let Some(tech) = first {
                    events.push(game.set_research(player, tech)?);
                }
            }
        }
    }

    debug!(player, actions = events.len(), "ai turn finished");
    Ok(events)
}

fn plan<R: Rng + ?Sized>(
    game: &GameState,
    player: PlayerId,
    rng: &mut R,
) -> Result<Vec<AiOrder>, GameError> {
    let p = game.player(player)?;
    let mut orders = Vec::new();

    for city in p.cities.iter().filter(|c| c.production_queue.is_empty()) {
        let item = if rng.gen_bool(UNIT_CHANCE) {
            UnitType::all().choose(rng).copied().map(ProductionItem::Unit)
        } else {
            BuildingType::all()
                .choose(rng)
                .copied()
                .map(ProductionItem::Building)
        };
        if let Some(item) = item {
            orders.push(AiOrder::Produce {
                city: city.id,
                item,
            });
        }
    }

    for unit in &p.units {
        orders.push(AiOrder::Step {
            unit: unit.id,
            dx: rng.gen_range(-1..=1),
            dy: rng.gen_range(-1..=1),
        });
    }

    if rng.gen_bool(RETARGET_CHANCE) {
        orders.push(AiOrder::Retarget);
    }
    Ok(orders)
}
