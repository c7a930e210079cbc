//! The I/O seam between the engine and whoever is playing.
//!
//! The engine never touches stdin or stdout. It asks a `Table` for raw
//! input lines and tells it about events; parsing and all game rules stay on
//! the engine side.

use super::event::GameEvent;
use crate::core::Player;
use crate::error::Result;

/// Source of player input and sink for game events.
///
/// ## Implementation Notes
///
/// - `read_decision` / `read_replay`: return `Ok(None)` at end of input
/// - `announce`: called in the order events happen; must not reorder
pub trait Table {
    /// Ask the active player what to do with `turn_total` at stake.
    fn read_decision(&mut self, player: &Player, turn_total: u32) -> Result<Option<String>>;

    /// Ask whether to play another game.
    fn read_replay(&mut self) -> Result<Option<String>>;

    /// Report an event.
    fn announce(&mut self, event: &GameEvent) -> Result<()>;
}
