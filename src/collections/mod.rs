// Collection helpers
//
// This module provides random selection, sampling and shuffling over generic
// sequences, and null-aware sequence comparison.

pub mod random_source;
pub mod sampling;
pub mod sequence;

pub use random_source::{RandomSource, SeededRandom, ThreadRandom};
pub use sampling::{
    pick_random, pick_random_iter, pick_random_iter_with, pick_random_with,
    sample, sample_with, shuffle, shuffle_with, SequenceRandomizer
};
pub use sequence::{nullable_sequence_eq, IndexedSequence};
