//! Error types for setup and console I/O.
//!
//! Only two things can go wrong in a game of Pig: the game cannot be set up
//! (bad player count, no randomness), or the console stops working. Invalid
//! decision input is not an error here; the engine re-prompts for it.
//! Quitting is not an error either; it travels as a `SessionEnd::Quit` value.

use thiserror::Error;

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Fatal problems detected before any game state exists.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("number of players must be at least 1, got {0}")]
    InvalidPlayerCount(i64),

    #[error("at most 255 players are supported, got {0}")]
    TooManyPlayers(i64),

    #[error("no source of randomness available: {0}")]
    Randomness(String),
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("setup error: {0}")]
    Setup(#[from] SetupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
