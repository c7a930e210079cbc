//! Game configuration.
//!
//! Built from command-line flags in the binary, or directly in tests.
//! `validate` turns a raw player count into a checked `usize` so nothing
//! downstream ever sees an empty or oversized roster.

use serde::{Deserialize, Serialize};

use super::roster::MAX_PLAYERS;
use crate::error::SetupError;

/// Score that ends the game when reached or exceeded.
pub const WINNING_SCORE: u32 = 100;

/// Players seated when no count is given.
pub const DEFAULT_PLAYER_COUNT: i64 = 2;

/// Setup parameters for a Pig session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Requested number of players. Signed so bad input can be reported
    /// rather than rejected by the parser.
    pub player_count: i64,

    /// Seed for the die. `None` draws one from OS entropy.
    pub seed: Option<u64>,

    /// Score that ends a game.
    pub winning_score: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: DEFAULT_PLAYER_COUNT,
            seed: None,
            winning_score: WINNING_SCORE,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player_count(mut self, count: i64) -> Self {
        self.player_count = count;
        self
    }

    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Checked player count.
    pub fn validate(&self) -> Result<usize, SetupError> {
        match self.player_count {
            n if n < 1 => Err(SetupError::InvalidPlayerCount(n)),
            n if n > MAX_PLAYERS as i64 => Err(SetupError::TooManyPlayers(n)),
            n => Ok(n as usize),
        }
    }
}
