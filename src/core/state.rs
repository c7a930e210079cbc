//! Game state: the roster and whether the game has been decided.
//!
//! The game is over exactly when some player's score has reached the
//! winning score. `concluded` caches that once the outer loop notices, so
//! callers inspecting state after a game don't have to recompute it.

use super::config::WINNING_SCORE;
use super::player::Player;
use super::roster::PlayerRoster;

/// Everything that persists between turns.
#[derive(Clone, Debug)]
pub struct GameState {
    pub roster: PlayerRoster,
    winning_score: u32,
    concluded: bool,
}

impl GameState {
    /// Fresh game to `WINNING_SCORE`.
    #[must_use]
    pub fn new(roster: PlayerRoster) -> Self {
        Self::with_winning_score(roster, WINNING_SCORE)
    }

    #[must_use]
    pub fn with_winning_score(roster: PlayerRoster, winning_score: u32) -> Self {
        Self {
            roster,
            winning_score,
            concluded: false,
        }
    }

    #[must_use]
    pub fn winning_score(&self) -> u32 {
        self.winning_score
    }

    /// True iff any player's score is at or above the winning score.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.roster.any_reached(self.winning_score)
    }

    /// Whether the outer loop has declared this game finished.
    #[must_use]
    pub fn is_concluded(&self) -> bool {
        self.concluded
    }

    pub(crate) fn conclude(&mut self) {
        self.concluded = true;
    }

    /// Winner of a finished game, `None` while play continues.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        self.is_game_over().then(|| self.roster.leader())
    }

    /// Zero all scores and start again with the first player.
    pub fn reset(&mut self) {
        self.roster.reset_all();
        self.concluded = false;
    }
}
