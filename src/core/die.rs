//! Six-sided dice.
//!
//! `Die` is the seam the turn engine rolls through. `RandomDie` is the real
//! thing; `ScriptedDie` replays a fixed list of faces so a game can be
//! reproduced exactly.

use std::collections::VecDeque;

use super::rng::GameRng;
use crate::error::SetupError;

/// Lowest face on the die.
pub const MIN_FACE: u8 = 1;
/// Highest face on the die.
pub const MAX_FACE: u8 = 6;
/// The face that busts a turn.
pub const BUST_FACE: u8 = 1;

/// Anything that can be rolled for a face in `MIN_FACE..=MAX_FACE`.
pub trait Die {
    fn roll(&mut self) -> u8;
}

/// Fair die: every face equally likely, rolls independent.
#[derive(Clone, Debug)]
pub struct RandomDie {
    rng: GameRng,
}

impl RandomDie {
    /// Die with a fixed seed, for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Die seeded from OS entropy.
    pub fn from_entropy() -> Result<Self, SetupError> {
        Ok(Self {
            rng: GameRng::from_entropy()?,
        })
    }

    /// Seed of the underlying stream.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Die for RandomDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range_inclusive(MIN_FACE, MAX_FACE)
    }
}

/// Die that returns a fixed sequence of faces.
///
/// Panics once the script runs out: a game asking for more rolls than were
/// scripted is a broken scenario, not something to paper over.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDie {
    faces: VecDeque<u8>,
}

impl ScriptedDie {
    /// Script the given faces, rolled front to back.
    ///
    /// ```
    /// use rust_pig::core::{Die, ScriptedDie};
    ///
    /// let mut die = ScriptedDie::new([6, 5]);
    /// assert_eq!(die.roll(), 6);
    /// assert_eq!(die.roll(), 5);
    /// assert!(die.is_exhausted());
    /// ```
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        let faces: VecDeque<u8> = faces.into_iter().collect();
        assert!(
            faces.iter().all(|f| (MIN_FACE..=MAX_FACE).contains(f)),
            "Scripted faces must be in 1..=6"
        );
        Self { faces }
    }

    /// Faces not yet rolled.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.faces.is_empty()
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        self.faces.pop_front().expect("Scripted die ran out of faces")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_die_in_range() {
        let mut die = RandomDie::seeded(42);
        for _ in 0..1000 {
            let face = die.roll();
            assert!((MIN_FACE..=MAX_FACE).contains(&face));
        }
    }

    #[test]
    fn test_random_die_hits_every_face() {
        let mut die = RandomDie::seeded(3);
        let mut seen = [false; 6];
        for _ in 0..600 {
            seen[(die.roll() - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_seeded_dice_agree() {
        let mut a = RandomDie::seeded(99);
        let mut b = RandomDie::seeded(99);
        let seq_a: Vec<_> = (0..50).map(|_| a.roll()).collect();
        let seq_b: Vec<_> = (0..50).map(|_| b.roll()).collect();
        assert_eq!(seq_a, seq_b);
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_scripted_die_order() {
        let mut die = ScriptedDie::new([5, 4, 1]);
        assert_eq!(die.remaining(), 3);
        assert_eq!(die.roll(), 5);
        assert_eq!(die.roll(), 4);
        assert_eq!(die.roll(), 1);
        assert!(die.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "Scripted faces must be in 1..=6")]
    fn test_scripted_die_rejects_bad_face() {
        let _ = ScriptedDie::new([7]);
    }

    #[test]
    #[should_panic(expected = "Scripted die ran out of faces")]
    fn test_scripted_die_exhausted() {
        let mut die = ScriptedDie::new([]);
        die.roll();
    }
}
