//! Deterministic simulation RNG.
//!
//! # Determinism strategy
//!
//! The automaton draws every random number — scheduling shuffle, velocity
//! gate, destination sampling, uniform placement — from one [`SimRng`] that it
//! owns.  Seeding that RNG with the same value and building the automaton the
//! same way reproduces a run tick for tick.
//!
//! Draw order is part of the contract: the shuffle happens before any agent
//! is queried, and agents are queried in shuffled order.  Adding a draw
//! anywhere in the tick changes every later outcome.

use rand::distributions::Distribution;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// The automaton's single injectable random source.
///
/// Used only from the single-threaded tick loop; never shared.
#[derive(Clone, Debug)]
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p`.
    ///
    /// `p` must lie in `[0, 1]`; out-of-range values panic rather than being
    /// clamped.  Pedestrian velocities are validated on the way in.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p)
    }

    /// Draw one sample from `dist`.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, dist: &D) -> T {
        dist.sample(&mut self.0)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
