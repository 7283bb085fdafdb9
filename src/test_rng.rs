//! Draw-counting RNG wrapper for validation-ordering tests.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Wraps a seeded [`StdRng`] and counts every draw passed through.
/// Lets tests assert that validation failures consume zero randomness.
pub struct CountingRng {
    inner: StdRng,
    draws: usize,
}

impl CountingRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            draws: 0,
        }
    }

    /// Number of low-level draws consumed so far.
    pub fn draws(&self) -> usize {
        self.draws
    }
}

impl RngCore for CountingRng {
    fn next_u32(&mut self) -> u32 {
        self.draws += 1;
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.draws += 1;
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.draws += 1;
        self.inner.fill_bytes(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.draws += 1;
        self.inner.try_fill_bytes(dest)
    }
}
