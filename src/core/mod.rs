//! Core game types: players, roster, dice, RNG, configuration, state.
//!
//! These are the building blocks the turn engine works on. None of them do
//! any I/O.

pub mod player;
pub mod roster;
pub mod rng;
pub mod die;
pub mod config;
pub mod state;

pub use player::{Player, PlayerId};
pub use roster::{PlayerRoster, RosterSnapshot, MAX_PLAYERS};
pub use rng::GameRng;
pub use die::{Die, RandomDie, ScriptedDie, BUST_FACE, MAX_FACE, MIN_FACE};
pub use config::{GameConfig, DEFAULT_PLAYER_COUNT, WINNING_SCORE};
pub use state::GameState;
