//! Seeded RNG for the few random decisions the simulator makes.
//!
//! Command execution itself is fully deterministic; randomness is only used
//! for scenery placement, which must still be reproducible from the run seed
//! so two hosts rendering the same config see the same city.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
