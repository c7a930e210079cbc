//! Single-turn state machine.
//!
//! ```text
//!            roll != 1                 Roll
//! Rolling ─────────────► AwaitingDecision ───► Rolling
//!    │                      │        │
//!    │ roll == 1            │ Hold   │ Quit
//!    ▼                      ▼        ▼
//!  Busted                 Banked    Quit
//! ```
//!
//! `Turn` only tracks the transitions and the running total. Touching the
//! roster (banking points) is the engine's job once the turn reports
//! `Banked`.

use super::decision::Decision;
use crate::core::{PlayerId, BUST_FACE};

/// Where a turn is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// About to roll.
    Rolling,
    /// Rolled a scoring face, waiting for roll/hold/quit.
    AwaitingDecision,
    /// Held: the turn total goes to the player's score.
    Banked,
    /// Rolled the bust face: the turn total is discarded.
    Busted,
    /// The player quit the game.
    Quit,
}

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// `points` were added to the player's score.
    Banked { points: u32 },
    /// `forfeited` points were lost to the bust face.
    Busted { forfeited: u32 },
    /// The player asked to leave; the game stops here.
    Quit,
}

/// One player's turn in progress.
#[derive(Clone, Debug)]
pub struct Turn {
    player: PlayerId,
    state: TurnState,
    turn_total: u32,
    rolls: Vec<u8>,
}

impl Turn {
    /// Start a turn for `player` in `Rolling` with nothing at stake.
    #[must_use]
    pub fn new(player: PlayerId) -> Self {
        Self {
            player,
            state: TurnState::Rolling,
            turn_total: 0,
            rolls: Vec::new(),
        }
    }

    #[must_use]
    pub fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Sum of the scoring rolls so far.
    #[must_use]
    pub fn turn_total(&self) -> u32 {
        self.turn_total
    }

    /// Every face rolled this turn, bust included.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Feed a die face. Only legal while `Rolling`.
    pub fn apply_roll(&mut self, face: u8) -> TurnState {
        assert_eq!(self.state, TurnState::Rolling, "Rolled outside of Rolling");
        self.rolls.push(face);

        self.state = if face == BUST_FACE {
            TurnState::Busted
        } else {
            self.turn_total += u32::from(face);
            TurnState::AwaitingDecision
        };
        self.state
    }

    /// Feed the player's choice. Only legal while `AwaitingDecision`.
    pub fn apply_decision(&mut self, decision: Decision) -> TurnState {
        assert_eq!(
            self.state,
            TurnState::AwaitingDecision,
            "Decided outside of AwaitingDecision"
        );

        self.state = match decision {
            Decision::Roll => TurnState::Rolling,
            Decision::Hold => TurnState::Banked,
            Decision::Quit => TurnState::Quit,
        };
        self.state
    }

    /// The outcome once the turn is over, `None` while it's still going.
    #[must_use]
    pub fn outcome(&self) -> Option<TurnOutcome> {
        match self.state {
            TurnState::Banked => Some(TurnOutcome::Banked {
                points: self.turn_total,
            }),
            TurnState::Busted => Some(TurnOutcome::Busted {
                forfeited: self.turn_total,
            }),
            TurnState::Quit => Some(TurnOutcome::Quit),
            TurnState::Rolling | TurnState::AwaitingDecision => None,
        }
    }
}
