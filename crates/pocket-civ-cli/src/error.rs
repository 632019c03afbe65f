//! Error types for the terminal front end.

use pocket_civ_core::GameError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors that end a session.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to encode result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, CliError>;
