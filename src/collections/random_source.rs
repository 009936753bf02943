//! Pseudo-random sources used by the sequence randomizer.
//!
//! Two implementations of [`RandomSource`] are provided:
//! - [`ThreadRandom`]: a per-thread `StdRng`, created lazily on first use and
//!   seeded from freshly generated UUIDs. Each thread owns its generator, so
//!   concurrent callers never contend or share state.
//! - [`SeededRandom`]: a caller-owned generator, for reproducible sequences
//!   and for injecting a known source into tests.
//!
//! # Examples
//!
//! ```
//! use streamliner::collections::{RandomSource, SeededRandom, ThreadRandom};
//!
//! let value = ThreadRandom.next_int(0, 10);
//! assert!(value < 10);
//!
//! let mut first = SeededRandom::from_seed(42);
//! let mut second = SeededRandom::from_seed(42);
//! assert_eq!(first.next_int(0, 1000), second.next_int(0, 1000));
//! ```

use std::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Returns an integer uniformly distributed over `[min, max)`.
    ///
    /// # Panics
    ///
    /// The provided implementations panic when `min >= max`, since the range
    /// is empty. The sampling functions only draw from non-empty ranges.
    fn next_int(&mut self, min: usize, max: usize) -> usize;
}

thread_local! {
    static THREAD_RNG: RefCell<StdRng> = RefCell::new(uuid_seeded_rng());
}

/// Builds a generator seeded from two v4 UUIDs (256 bits, 244 of them random).
fn uuid_seeded_rng() -> StdRng {
    let mut seed = <StdRng as SeedableRng>::Seed::default();
    seed[..16].copy_from_slice(Uuid::new_v4().as_bytes());
    seed[16..].copy_from_slice(Uuid::new_v4().as_bytes());
    log::trace!("Seeded generator for thread {:?}", std::thread::current().id());
    StdRng::from_seed(seed)
}

/// A `RandomSource` backed by a thread-local generator.
///
/// This type does not store the generator itself; it reaches the calling
/// thread's instance on every draw.
#[derive(Default, Clone, Copy, Debug)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        THREAD_RNG.with(|rng| rng.borrow_mut().random_range(min..max))
    }
}

/// A `RandomSource` that owns its generator.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    /// Creates a generator seeded from fresh UUIDs.
    pub fn new() -> Self {
        Self { rng: uuid_seeded_rng() }
    }

    /// Creates a generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for SeededRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SeededRandom {
    fn next_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.random_range(min..max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thread_random_stays_in_range() {
        let mut source = ThreadRandom;
        for _ in 0..1000 {
            let value = source.next_int(5, 8);
            assert!((5..8).contains(&value), "value {} out of range", value);
        }
    }

    #[test]
    fn test_single_value_range() {
        assert_eq!(ThreadRandom.next_int(3, 4), 3);
        assert_eq!(SeededRandom::from_seed(1).next_int(0, 1), 0);
    }

    #[test]
    #[should_panic]
    fn test_empty_range_panics() {
        ThreadRandom.next_int(5, 5);
    }

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut first = SeededRandom::from_seed(7);
        let mut second = SeededRandom::from_seed(7);
        let a: Vec<usize> = (0..32).map(|_| first.next_int(0, 1_000_000)).collect();
        let b: Vec<usize> = (0..32).map(|_| second.next_int(0, 1_000_000)).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_threads_get_independent_generators() {
        let draws: Vec<Vec<usize>> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    (0..16)
                        .map(|_| ThreadRandom.next_int(0, usize::MAX))
                        .collect::<Vec<usize>>()
                })
            })
            .collect::<Vec<_>>()
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect();
        for i in 0..draws.len() {
            for j in i + 1..draws.len() {
                assert_ne!(draws[i], draws[j], "threads {} and {} produced the same stream", i, j);
            }
        }
    }
}
