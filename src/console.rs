//! Text console: renders events and prompts as lines of text.
//!
//! Generic over the reader and writer so games can be played against
//! stdin/stdout or against in-memory buffers.

use std::io::{self, BufRead, StdinLock, Stdout, Write};

use crate::core::Player;
use crate::engine::{GameEvent, Table};
use crate::error::Result;

pub const DECISION_PROMPT: &str = "Roll again (r), hold (h), or quit (q/quit/exit)? ";
pub const REPLAY_PROMPT: &str = "\nWould you like to play another game? (y/n): ";
pub const INVALID_DECISION: &str =
    "Invalid input. Please enter 'r' to roll, 'h' to hold, or 'q' to quit.";

/// A `Table` backed by a line reader and a writer.
pub struct TerminalTable<R, W> {
    input: R,
    output: W,
}

impl TerminalTable<StdinLock<'static>, Stdout> {
    /// Table on the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalTable<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect a transcript.
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        // Bytes, not `read_line`: a line that isn't UTF-8 is bad input for
        // the engine to reject, not an I/O failure.
        let mut buf = Vec::new();
        match self.input.read_until(b'\n', &mut buf)? {
            0 => Ok(None),
            _ => Ok(Some(String::from_utf8_lossy(&buf).into_owned())),
        }
    }
}

impl<R: BufRead, W: Write> Table for TerminalTable<R, W> {
    fn read_decision(&mut self, _player: &Player, _turn_total: u32) -> Result<Option<String>> {
        self.prompt(DECISION_PROMPT)
    }

    fn read_replay(&mut self) -> Result<Option<String>> {
        self.prompt(REPLAY_PROMPT)
    }

    fn announce(&mut self, event: &GameEvent) -> Result<()> {
        let out = &mut self.output;
        match event {
            GameEvent::GameStarted => writeln!(out, "\nWelcome to the game of Pig!\n")?,
            GameEvent::Rolled { name, face } => writeln!(out, "\n{} rolled a {}", name, face)?,
            GameEvent::TurnTotal {
                name,
                turn_total,
                score,
            } => writeln!(out, "Turn total: {}, {}: {} points", turn_total, name, score)?,
            GameEvent::Busted { name, .. } => writeln!(out, "{} scores nothing this turn.", name)?,
            GameEvent::InvalidDecision { .. } => writeln!(out, "{}", INVALID_DECISION)?,
            GameEvent::Held { name, score } => {
                writeln!(out, "{} holds. Total score: {}", name, score)?
            }
            GameEvent::Quit => writeln!(out, "Thanks for playing! Exiting the game.")?,
            GameEvent::GameOver { winner, standings } => {
                writeln!(out, "\n{} wins with {} points!", winner.name(), winner.score())?;
                writeln!(out, "\nFinal Scores:")?;
                for player in standings {
                    writeln!(out, "{}", player)?;
                }
            }
            GameEvent::Farewell => writeln!(out, "Thanks for playing!")?,
        }
        out.flush()?;
        Ok(())
    }
}
