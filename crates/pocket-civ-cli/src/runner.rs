//! The game loop: alternate AI and human turns until someone wins.

use crate::console::Console;
use crate::error::Result;
use crate::menu;
use crate::render::{describe_event, turn_header};
use pocket_civ_core::{ai, GameEvent, GameState, PlayerId, VictoryType, MAX_PLAYERS, MIN_PLAYERS};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// Player count used when the prompt gets an unusable answer.
pub const DEFAULT_PLAYER_COUNT: u8 = 4;

/// Ask how many players will take part. Anything outside 2-8 falls back to
/// [`DEFAULT_PLAYER_COUNT`].
pub fn prompt_player_count<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<u8> {
    let answer = console.ask_int(&format!(
        "Enter number of players ({}-{}): ",
        MIN_PLAYERS, MAX_PLAYERS
    ))?;
    match answer.and_then(|n| u8::try_from(n).ok()) {
        Some(n) if (MIN_PLAYERS..=MAX_PLAYERS).contains(&n) => Ok(n),
        _ => {
            console.say(format!(
                "Invalid number of players. Using default {} players.",
                DEFAULT_PLAYER_COUNT
            ))?;
            Ok(DEFAULT_PLAYER_COUNT)
        }
    }
}

/// Play until the game is over and return the winner.
pub fn run_game<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    rng: &mut G,
) -> Result<(PlayerId, VictoryType)> {
    loop {
        if let Some(winner) = game.check_game_over() {
            return Ok(winner);
        }
        play_one_turn(console, game, rng)?;
    }
}

/// Play the current player's turn, then pass play on and report the year
/// end if one happened.
pub fn play_one_turn<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    game: &mut GameState,
    rng: &mut G,
) -> Result<()> {
    let current = game.current()?;
    let (name, is_ai) = (current.name.clone(), current.is_ai);
    console.say(turn_header(&name, game.year))?;

    if is_ai {
        console.say(format!("{} (AI) is thinking...", name))?;
        let events = ai::take_turn(game, rng)?;
        report_ai_turn(console, game, &name, &events)?;
    } else {
        menu::play_turn(console, game)?;
    }

    let events = game.finish_turn(rng);
    if !events.is_empty() {
        info!(year = %game.year, events = events.len(), "year report");
    }
    for event in &events {
        console.say(describe_event(game, event))?;
    }
    Ok(())
}

/// Print what the AI decided. Unit moves are summarized as a count.
fn report_ai_turn<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    game: &GameState,
    name: &str,
    events: &[GameEvent],
) -> Result<()> {
    let mut moves = 0;
    for event in events {
        if matches!(event, GameEvent::UnitMoved { .. }) {
            moves += 1;
        } else {
            console.say(describe_event(game, event))?;
        }
    }
    if moves > 0 {
        console.say(format!("{} moved {} unit(s)", name, moves))?;
    }
    Ok(())
}
