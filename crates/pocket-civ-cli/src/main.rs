//! Pocket Civ - play a small civilization game in the terminal.

use clap::{Parser, ValueEnum};
use pocket_civ_cli::config::{parse_year, resolve_settings, Overrides};
use pocket_civ_cli::output::{format_text, JsonGameResult};
use pocket_civ_cli::runner::{prompt_player_count, run_game};
use pocket_civ_cli::{CliError, Console};
use pocket_civ_core::{GameState, Year};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

/// Pocket Civ - lead a civilization from 4000 BC to the modern era
#[derive(Parser, Debug)]
#[command(name = "pocket-civ")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players (2-8). Asked interactively when omitted.
    #[arg(short, long)]
    players: Option<u8>,

    /// Number of human players; 0 lets the AI play every seat
    #[arg(long)]
    humans: Option<u8>,

    /// Random seed (default: random)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON settings file; missing fields keep their defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Year the game ends in, e.g. 2050, 1500AD or 500BC
    #[arg(long, value_parser = parse_year)]
    end_year: Option<Year>,

    /// Output format for the final result
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Suppress turn-by-turn output (only when no human is playing)
    #[arg(short, long)]
    quiet: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for the final result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run(args: Args) -> Result<(), CliError> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    println!("Welcome to Pocket Civ!");
    println!("Lead your civilization from ancient times to the modern era.");

    let players = match args.players {
        Some(n) => Some(n),
        None if args.config.is_none() => Some(prompt_player_count(&mut console)?),
        None => None,
    };
    let overrides = Overrides {
        players,
        humans: args.humans,
        end_year: args.end_year,
    };
    let settings = resolve_settings(args.config.as_deref(), &overrides)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut game = GameState::new(settings, &mut rng)?;
    tracing::info!(
        players = game.players.len(),
        humans = game.settings.human_players,
        seed = ?args.seed,
        "starting game"
    );

    if args.quiet && game.settings.human_players == 0 {
        let mut silent = Console::new(io::empty(), io::sink());
        run_game(&mut silent, &mut game, &mut rng)?;
    } else {
        if args.quiet {
            tracing::warn!("--quiet ignored while human players are seated");
        }
        run_game(&mut console, &mut game, &mut rng)?;
    }

    let mut stdout = io::stdout();
    match args.format {
        OutputFormat::Text => write!(stdout, "{}", format_text(&game))?,
        OutputFormat::Json => {
            let result = JsonGameResult::from_game(&game, args.seed);
            writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::InputClosed) => {
            eprintln!("Input closed, leaving the game.");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
