//! Turn engine: plays turns, games and replay sessions.
//!
//! The engine owns the `GameState` and the die, so a turn is a function of
//! (roster, die faces, decision lines) and nothing else. Quitting is a value
//! (`TurnOutcome::Quit` → `GameOutcome::Quit` → `SessionEnd::Quit`) carried
//! back to the caller, which decides how to exit. Nothing touches the roster
//! after a quit.

use log::{debug, info, trace};

use super::decision::{wants_replay, Decision};
use super::event::GameEvent;
use super::table::Table;
use super::turn::{Turn, TurnOutcome, TurnState};
use crate::core::{Die, GameState, Player, PlayerId, PlayerRoster};
use crate::error::Result;

/// How a game ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    /// Someone reached the winning score.
    Finished { winner: PlayerId, scores: Vec<u32> },
    /// A player quit mid-turn.
    Quit,
}

/// How a session (one or more games) ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    /// Players declined another game after `games_played` complete games.
    Finished { games_played: u32 },
    /// A player quit mid-turn.
    Quit,
}

/// Drives turns against a `GameState` with a die.
pub struct TurnEngine<D: Die> {
    state: GameState,
    die: D,
}

impl<D: Die> TurnEngine<D> {
    /// Engine for a fresh game to the default winning score.
    pub fn new(roster: PlayerRoster, die: D) -> Self {
        Self::with_state(GameState::new(roster), die)
    }

    pub fn with_state(state: GameState, die: D) -> Self {
        Self { state, die }
    }

    /// Read-only view of the game.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take back the state and die.
    pub fn into_parts(self) -> (GameState, D) {
        (self.state, self.die)
    }

    /// Play the current player's turn to its end. Does not advance the cursor.
    pub fn play_turn<T: Table>(&mut self, table: &mut T) -> Result<TurnOutcome> {
        let player = self.state.roster.current().clone();
        debug!("turn start: {}", self.state.roster.snapshot());

        let mut turn = Turn::new(player.id());
        loop {
            if let Some(outcome) = turn.outcome() {
                return Ok(outcome);
            }

            // Rolling
            let face = self.die.roll();
            trace!("{} rolled {}", player.name(), face);
            table.announce(&GameEvent::Rolled {
                name: player.name().to_string(),
                face,
            })?;

            if turn.apply_roll(face) == TurnState::Busted {
                let forfeited = turn.turn_total();
                info!(
                    "{} busted after rolling {:?}, forfeiting {}",
                    player.name(),
                    turn.rolls(),
                    forfeited
                );
                table.announce(&GameEvent::Busted {
                    name: player.name().to_string(),
                    forfeited,
                })?;
                continue;
            }

            table.announce(&GameEvent::TurnTotal {
                name: player.name().to_string(),
                turn_total: turn.turn_total(),
                score: player.score(),
            })?;

            // AwaitingDecision
            let decision = self.request_decision(table, &player, turn.turn_total())?;
            turn.apply_decision(decision);
            match turn.outcome() {
                Some(TurnOutcome::Banked { points }) => {
                    self.state.roster.bank_current(points);
                    let score = self.state.roster.current().score();
                    info!("{} banked {}, now at {}", player.name(), points, score);
                    table.announce(&GameEvent::Held {
                        name: player.name().to_string(),
                        score,
                    })?;
                }
                Some(TurnOutcome::Quit) => {
                    info!("{} quit the game", player.name());
                    table.announce(&GameEvent::Quit)?;
                }
                _ => {}
            }
        }
    }

    /// Play a turn, then pass to the next player unless the game was quit.
    pub fn take_turn<T: Table>(&mut self, table: &mut T) -> Result<TurnOutcome> {
        let outcome = self.play_turn(table)?;
        if outcome != TurnOutcome::Quit {
            self.state.roster.advance();
        }
        Ok(outcome)
    }

    /// Play turns until someone reaches the winning score.
    ///
    /// The winning score is only checked between turns, so one big hold can
    /// carry a score well past it.
    pub fn play_game<T: Table>(&mut self, table: &mut T) -> Result<GameOutcome> {
        table.announce(&GameEvent::GameStarted)?;

        while !self.state.is_game_over() {
            if self.take_turn(table)? == TurnOutcome::Quit {
                return Ok(GameOutcome::Quit);
            }
        }

        self.state.conclude();
        let winner = self.state.roster.leader().clone();
        let standings: Vec<Player> = self.state.roster.iter().cloned().collect();
        info!("game over: {}", self.state.roster.snapshot());

        table.announce(&GameEvent::GameOver {
            winner: winner.clone(),
            standings,
        })?;

        Ok(GameOutcome::Finished {
            winner: winner.id(),
            scores: self.state.roster.scores(),
        })
    }

    /// Play games until the players decline a replay or someone quits.
    pub fn run_session<T: Table>(&mut self, table: &mut T) -> Result<SessionEnd> {
        let mut games_played = 0;
        loop {
            if self.play_game(table)? == GameOutcome::Quit {
                return Ok(SessionEnd::Quit);
            }
            games_played += 1;

            let again = table.read_replay()?.is_some_and(|line| wants_replay(&line));
            if !again {
                table.announce(&GameEvent::Farewell)?;
                return Ok(SessionEnd::Finished { games_played });
            }

            self.state.reset();
            info!("starting game {}", games_played + 1);
        }
    }

    /// Ask until the input parses. End of input counts as quitting.
    fn request_decision<T: Table>(
        &self,
        table: &mut T,
        player: &Player,
        turn_total: u32,
    ) -> Result<Decision> {
        loop {
            let Some(line) = table.read_decision(player, turn_total)? else {
                info!("input closed, treating as quit");
                return Ok(Decision::Quit);
            };

            match line.parse::<Decision>() {
                Ok(decision) => return Ok(decision),
                Err(e) => {
                    debug!("{}", e);
                    table.announce(&GameEvent::InvalidDecision { input: e.0 })?;
                }
            }
        }
    }
}
