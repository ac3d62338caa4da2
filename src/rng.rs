//! Seedable random stream for scenario runs.
//!
//! Each scenario run owns its own `SimRng`, so independent scenarios stay
//! independent and reproducible. Long "epoch" runs can reseed the stream at
//! a fixed slot boundary; the fresh seed is drawn from the stream itself
//! rather than from process-wide random state.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random stream for one scenario run
#[derive(Debug, Clone)]
pub struct SimRng {
    inner: ChaCha8Rng,
    reseed_interval_slots: Option<u64>,
}

impl SimRng {
    /// Creates a deterministic stream from an explicit seed
    pub fn seeded(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed), reseed_interval_slots: None }
    }

    /// Creates a stream seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self { inner: ChaCha8Rng::from_entropy(), reseed_interval_slots: None }
    }

    /// Enables the periodic epoch reseed. An interval of `None` or zero
    /// slots disables it.
    pub fn with_reseed_interval(mut self, interval_slots: Option<u64>) -> Self {
        self.reseed_interval_slots = interval_slots.filter(|i| *i > 0);
        self
    }

    /// Called by the driver at the top of every slot. Reseeds the stream
    /// when the slot index sits on a configured reseed boundary (slot 0 is
    /// skipped: the stream was just seeded).
    pub fn advance_slot(&mut self, slot_index: u64) {
        if let Some(interval) = self.reseed_interval_slots {
            if slot_index > 0 && slot_index % interval == 0 {
                let seed = self.inner.gen::<u64>();
                self.inner = ChaCha8Rng::seed_from_u64(seed);
            }
        }
    }
}

impl RngCore for SimRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
