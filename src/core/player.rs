//! Player identification and per-player score.
//!
//! ## PlayerId
//!
//! Type-safe player identifier supporting 1-255 players. The id doubles as
//! the player's seat in turn order.
//!
//! ## Player
//!
//! A display name plus a banked score. Scores only ever grow during a game
//! and go back to zero when a new game starts.

use serde::{Deserialize, Serialize};

/// Player identifier supporting 1-255 players.
///
/// Player indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    ///
    /// ```
    /// use rust_pig::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(3).collect();
    /// assert_eq!(players, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// Default display name: seats are numbered from 1 for humans.
    #[must_use]
    pub fn default_name(self) -> String {
        format!("Player {}", self.index() + 1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index() + 1)
    }
}

/// A seated player and their banked score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    score: u32,
}

impl Player {
    /// Create a player with a zero score.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Add banked points. Saturates rather than wrapping.
    pub(crate) fn bank(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub(crate) fn reset_score(&mut self) {
        self.score = 0;
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} points", self.name, self.score)
    }
}
