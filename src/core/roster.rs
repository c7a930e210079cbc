//! Ordered players and the turn cursor.
//!
//! Insertion order is turn order. The cursor always indexes a valid player:
//! the roster can't be built empty, and advancing wraps modulo its size.

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerId};
use crate::error::SetupError;

/// Largest roster `PlayerId` can address.
pub const MAX_PLAYERS: usize = u8::MAX as usize;

/// Players in turn order plus whose turn it is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerRoster {
    players: Vec<Player>,
    cursor: usize,
}

impl PlayerRoster {
    /// Seat `player_count` players named `Player 1` .. `Player N`.
    pub fn new(player_count: usize) -> Result<Self, SetupError> {
        if player_count > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(player_count as i64));
        }
        Self::with_names(PlayerId::all(player_count).map(PlayerId::default_name))
    }

    /// Seat players with the given names, in order.
    pub fn with_names<I, S>(names: I) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(SetupError::InvalidPlayerCount(0));
        }
        if names.len() > MAX_PLAYERS {
            return Err(SetupError::TooManyPlayers(names.len() as i64));
        }

        let players = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Player::new(PlayerId::new(i as u8), name))
            .collect();

        Ok(Self { players, cursor: 0 })
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current(&self) -> &Player {
        &self.players[self.cursor]
    }

    pub(crate) fn current_mut(&mut self) -> &mut Player {
        &mut self.players[self.cursor]
    }

    /// Pass the turn to the next player, wrapping after the last.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.players.len();
    }

    /// Zero every score and give the turn back to the first player.
    pub fn reset_all(&mut self) {
        self.players.iter_mut().for_each(Player::reset_score);
        self.cursor = 0;
    }

    /// Highest scorer. Ties go to whoever sits first in turn order.
    #[must_use]
    pub fn leader(&self) -> &Player {
        self.players
            .iter()
            .reduce(|best, p| if p.score() > best.score() { p } else { best })
            .unwrap_or(&self.players[0])
    }

    /// Add banked points to the current player's score.
    pub fn bank_current(&mut self, points: u32) {
        self.current_mut().bank(points);
    }

    /// True once any player's score reaches `threshold`.
    #[must_use]
    pub fn any_reached(&self, threshold: u32) -> bool {
        self.players.iter().any(|p| p.score() >= threshold)
    }

    #[must_use]
    pub fn cursor(&self) -> PlayerId {
        PlayerId::new(self.cursor as u8)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false: a roster is never built empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Scores in turn order.
    #[must_use]
    pub fn scores(&self) -> Vec<u32> {
        self.players.iter().map(Player::score).collect()
    }

    /// Read-only copy of the roster for logs and inspection.
    #[must_use]
    pub fn snapshot(&self) -> RosterSnapshot {
        RosterSnapshot {
            players: self.players.clone(),
            current: self.cursor(),
        }
    }

    #[cfg(test)]
    pub(crate) fn set_score(&mut self, player: PlayerId, score: u32) {
        let p = &mut self.players[player.index()];
        p.reset_score();
        p.bank(score);
    }
}

/// Serializable view of a roster at one point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterSnapshot {
    pub players: Vec<Player>,
    pub current: PlayerId,
}

impl std::fmt::Display for RosterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let scores: Vec<String> = self.players.iter().map(ToString::to_string).collect();
        write!(f, "[{}] current: {}", scores.join(", "), self.current)
    }
}
