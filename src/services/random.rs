//! Random selection capability
//!
//! Greeting and tip responses pick one element uniformly at random. The
//! source is injected so tests and seeded deployments get repeatable output.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform index selection.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource: Send + Sync {
    /// Returns an index in `0..len`. Callers never pass zero.
    fn pick(&self, len: usize) -> usize;
}

/// Thread-local generator, one independent draw per call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Seeded generator shared across callers.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        self.rng.lock().gen_range(0..len)
    }
}

/// Chooses a random element of `items` through `source`.
///
/// Out-of-range indices from a misbehaving source wrap around instead of panicking.
pub fn choose<'a, T: ?Sized>(source: &dyn RandomSource, items: &[&'a T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = source.pick(items.len()) % items.len();
    Some(items[index])
}

/// Builds the process random source: seeded when a seed is configured.
pub fn create_random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}
