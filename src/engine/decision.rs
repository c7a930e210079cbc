//! Player decisions parsed from free-text input.
//!
//! Input is trimmed and matched case-insensitively. `r` rolls, `h` holds,
//! and `q`, `quit` or `exit` quit. Anything else is an `InvalidDecision`,
//! which the engine answers with a re-prompt.

use std::str::FromStr;

use thiserror::Error;

/// What the active player chose after a scoring roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Roll again, risking the turn total.
    Roll,
    /// Bank the turn total and end the turn.
    Hold,
    /// Leave the game immediately.
    Quit,
}

/// Input that isn't one of the recognized decision tokens.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unrecognized decision {0:?}")]
pub struct InvalidDecision(pub String);

impl FromStr for Decision {
    type Err = InvalidDecision;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" => Ok(Decision::Roll),
            "h" => Ok(Decision::Hold),
            "q" | "quit" | "exit" => Ok(Decision::Quit),
            _ => Err(InvalidDecision(s.trim().to_string())),
        }
    }
}

/// Whether a reply to the replay prompt means "yes".
///
/// Only `y` counts, in either case. Everything else, including `yes`,
/// ends the session.
#[must_use]
pub fn wants_replay(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case("y")
}
