//! # rust-pig
//!
//! The dice game Pig for one or more players at a text prompt.
//!
//! ## Rules
//!
//! On your turn you roll a six-sided die as often as you like. Every face
//! but 1 is added to your turn total. Roll a 1 and the turn ends with
//! nothing banked. Hold instead and the turn total joins your score. The
//! first player to 100 or more, checked between turns, wins.
//!
//! ## Architecture
//!
//! - **Explicit state**: `TurnEngine` owns the `GameState` and the die.
//!   Nothing is global, so a turn is a function of the roster, the faces
//!   rolled, and the lines typed.
//!
//! - **Quit is a value**: quitting travels back as `SessionEnd::Quit`; the
//!   binary is the only place that exits.
//!
//! - **I/O behind a trait**: the engine talks to a `Table`. The console
//!   implementation renders text; tests script one.
//!
//! ## Modules
//!
//! - `core`: players, roster, dice, RNG, configuration, state
//! - `engine`: turn state machine, game loop, replay session
//! - `console`: text rendering over any reader/writer
//! - `error`: setup and I/O errors

pub mod core;
pub mod engine;
pub mod console;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    Die, GameConfig, GameRng, GameState, Player, PlayerId, PlayerRoster, RandomDie,
    RosterSnapshot, ScriptedDie, WINNING_SCORE,
};

pub use crate::engine::{
    Decision, GameEvent, GameOutcome, SessionEnd, Table, Turn, TurnEngine, TurnOutcome,
    TurnState,
};

pub use crate::console::TerminalTable;

pub use crate::error::{Error, Result, SetupError};

/// Build an engine from a validated config: seeded die if a seed was given,
/// OS entropy otherwise.
pub fn setup(config: &GameConfig) -> std::result::Result<TurnEngine<RandomDie>, SetupError> {
    let player_count = config.validate()?;
    let roster = PlayerRoster::new(player_count)?;
    let die = match config.seed {
        Some(seed) => RandomDie::seeded(seed),
        None => RandomDie::from_entropy()?,
    };
    log::info!(
        "seated {} player(s), die seed {}, playing to {}",
        player_count,
        die.seed(),
        config.winning_score
    );
    Ok(TurnEngine::with_state(
        GameState::with_winning_score(roster, config.winning_score),
        die,
    ))
}
