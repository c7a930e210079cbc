//! Events the engine announces to the table.

use crate::core::Player;

/// Something that happened at the table.
///
/// Events carry owned copies of what they describe so a table can keep them
/// (for transcripts) without borrowing the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A new game is starting.
    GameStarted,

    /// The die came up `face`.
    Rolled { name: String, face: u8 },

    /// A scoring roll: the running turn total and the player's banked score.
    TurnTotal {
        name: String,
        turn_total: u32,
        score: u32,
    },

    /// Rolled the bust face; `forfeited` points are lost.
    Busted { name: String, forfeited: u32 },

    /// Input that wasn't a recognized decision.
    InvalidDecision { input: String },

    /// Turn total banked; `score` is the new total.
    Held { name: String, score: u32 },

    /// The active player quit. Nothing else happens after this.
    Quit,

    /// Someone reached the winning score.
    GameOver {
        winner: Player,
        standings: Vec<Player>,
    },

    /// The session ended because the players declined another game.
    Farewell,
}
