//! Pocket Civ terminal front end.
//!
//! The binary in `main.rs` is a thin wrapper: argument parsing and logging
//! setup live there, while everything that talks to the player lives here so
//! it can be driven from scripted input.
//!
//! # Modules
//!
//! - [`config`]: Settings from defaults, a JSON file and command line flags
//! - [`console`]: Prompting and line input over any reader and writer
//! - [`menu`]: The human player's turn menu
//! - [`render`]: Text views of the map, status, cities and events
//! - [`runner`]: The game loop
//! - [`output`]: Final result as text or JSON

pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod output;
pub mod render;
pub mod runner;

pub use console::Console;
pub use error::{CliError, Result};
