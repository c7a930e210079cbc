//! Seedable random number generation for dice.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Fallible entropy**: Seeding from the OS reports failure as a
//!   `SetupError` instead of panicking mid-game
//!
//! ```
//! use rust_pig::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_inclusive(1, 6), b.gen_range_inclusive(1, 6));
//! ```

use rand::rngs::OsRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::SetupError;

/// Seedable RNG backing the die.
///
/// Uses ChaCha8 for speed while maintaining cryptographic quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system's entropy source.
    ///
    /// The drawn seed is kept so a game can be replayed from the log.
    pub fn from_entropy() -> Result<Self, SetupError> {
        let mut bytes = [0u8; 8];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| SetupError::Randomness(e.to_string()))?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `low..=high`.
    pub fn gen_range_inclusive(&mut self, low: u8, high: u8) -> u8 {
        self.inner.gen_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_inclusive(1, 6), rng2.gen_range_inclusive(1, 6));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.gen_range_inclusive(1, 6)).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.gen_range_inclusive(1, 6)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_bounds() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let v = rng.gen_range_inclusive(1, 6);
            assert!((1..=6).contains(&v));
        }
    }

    #[test]
    fn test_from_entropy_keeps_seed() {
        let rng = GameRng::from_entropy().unwrap();
        let mut a = rng.clone();
        let mut b = GameRng::new(rng.seed());
        assert_eq!(a.gen_range_inclusive(1, 6), b.gen_range_inclusive(1, 6));
    }
}
