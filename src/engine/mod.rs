//! Turn resolution and game-loop control.
//!
//! - `decision`: parsing roll/hold/quit input
//! - `turn`: the single-turn state machine
//! - `game`: `TurnEngine`, which runs turns, games and replay sessions
//! - `table`: the I/O trait the engine talks through
//! - `event`: what the engine announces

pub mod decision;
pub mod event;
pub mod game;
pub mod table;
pub mod turn;

pub use decision::{wants_replay, Decision, InvalidDecision};
pub use event::GameEvent;
pub use game::{GameOutcome, SessionEnd, TurnEngine};
pub use table::Table;
pub use turn::{Turn, TurnOutcome, TurnState};
