//! RNG trait abstraction for the simulation
//!
//! Every stochastic decision (maze carving, mutation, food placement,
//! collision jitter) draws from a `SimRng` handed in by the caller, so a
//! seeded generator reproduces a whole run.

/// Random number generator trait for the simulation
pub trait SimRng {
    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Generate random f32 in [min, max). Returns `min` for an empty range.
    fn gen_range_f32(&mut self, min: f32, max: f32) -> f32;

    /// Generate random index in [0, len). Returns 0 when `len` is 0.
    fn gen_index(&mut self, len: usize) -> usize;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Symmetric draw in [-magnitude, magnitude)
    fn gen_symmetric(&mut self, magnitude: f32) -> f32 {
        let magnitude = magnitude.abs();
        self.gen_range_f32(-magnitude, magnitude)
    }
}

// Blanket implementation for any type implementing rand::Rng
// This covers seeded Xoshiro generators as well as thread_rng()
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }

    fn gen_range_f32(&mut self, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rand::Rng::gen_range(self, min..max)
    }

    fn gen_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::Rng::gen_range(self, 0..len)
    }
}
