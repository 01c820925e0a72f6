//! Secure randomness for the password generator.
//!
//! The generator is written against the [`RandomSource`] trait so tests can
//! drive it with a scripted sequence while production code uses the
//! platform CSPRNG.

use ring::rand::{SecureRandom, SystemRandom};

/// A uniform randomness source producing floats in `[0,1)`.
pub trait RandomSource {
    /// Returns the next uniform value in `[0,1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniform index in `[0, bound)` via `floor(next * bound)`.
    ///
    /// `bound` must be non-zero.
    fn pick_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "pick_index called with zero bound");
        let index = (self.next_f64() * bound as f64).floor() as usize;
        // floor of a value below `bound` can still land on `bound` after
        // the float multiply rounds up at the top of the range
        index.min(bound - 1)
    }
}

/// Production randomness source backed by `ring`'s `SystemRandom`.
pub struct SystemRandomSource {
    rng: SystemRandom,
}

impl SystemRandomSource {
    /// Creates a new source over the platform CSPRNG.
    pub fn new() -> Self {
        Self {
            rng: SystemRandom::new(),
        }
    }
}

impl Default for SystemRandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandomSource {
    /// Maps 64 CSPRNG bits to a float in `[0,1)` using the top 53 bits,
    /// so every representable value is equally likely and 1.0 is never
    /// produced.
    fn next_f64(&mut self) -> f64 {
        let mut bytes = [0u8; 8];
        self.rng
            .fill(&mut bytes)
            .expect("Failed to generate random bytes");
        let value = u64::from_le_bytes(bytes) >> 11;
        value as f64 / (1u64 << 53) as f64
    }
}
