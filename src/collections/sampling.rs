//! Uniform random pick, sampling without replacement and in-place shuffling.
//!
//! Every operation comes in two flavours: a plain function that draws from
//! the calling thread's generator ([`ThreadRandom`]) and a `_with` variant
//! taking an explicit [`RandomSource`]. The [`SequenceRandomizer`] trait
//! exposes the plain flavour as methods on any [`IndexedSequence`].
//!
//! # Examples
//!
//! ```
//! use streamliner::collections::SequenceRandomizer;
//!
//! let mut numbers = vec![1, 2, 3, 4, 5];
//!
//! let picked = *numbers.pick_random()?;
//! assert!(numbers.contains(&picked));
//!
//! let sample = numbers.sample(2)?;
//! assert_eq!(sample.len(), 2);
//! assert_ne!(sample[0], sample[1]);
//!
//! numbers.shuffle()?;
//! numbers.sort();
//! assert_eq!(numbers, [1, 2, 3, 4, 5]);
//! # Ok::<(), streamliner::StreamlinerError>(())
//! ```

use std::collections::HashSet;

use super::random_source::{RandomSource, ThreadRandom};
use super::sequence::IndexedSequence;
use crate::{Result, StreamlinerError};

fn empty_source_error() -> StreamlinerError {
    StreamlinerError::invalid_argument("Source cannot be null or empty.")
}

fn out_of_range_error(index: usize, len: usize) -> StreamlinerError {
    StreamlinerError::invalid_argument(format!(
        "Random source returned index {} for a sequence of length {}",
        index, len
    ))
}

/// Returns one element chosen with probability `1/n`.
///
/// # Errors
///
/// Returns `InvalidArgument` if the sequence is empty.
pub fn pick_random<S>(sequence: &S) -> Result<&S::Item>
where
    S: IndexedSequence + ?Sized,
{
    pick_random_with(&mut ThreadRandom, sequence)
}

/// Same as [`pick_random`], drawing from `rng`.
pub fn pick_random_with<'a, S, R>(rng: &mut R, sequence: &'a S) -> Result<&'a S::Item>
where
    S: IndexedSequence + ?Sized,
    R: RandomSource + ?Sized,
{
    let len = sequence.len();
    if len == 0 {
        return Err(empty_source_error());
    }
    let index = rng.next_int(0, len);
    sequence.get(index).ok_or_else(|| out_of_range_error(index, len))
}

/// Picks one element from a forward-only iterable.
///
/// The input is materialized first to learn its length.
///
/// # Examples
///
/// ```
/// use streamliner::collections::pick_random_iter;
///
/// let word = pick_random_iter("alpha beta gamma".split(' '))?;
/// assert!(["alpha", "beta", "gamma"].contains(&word));
/// # Ok::<(), streamliner::StreamlinerError>(())
/// ```
pub fn pick_random_iter<I: IntoIterator>(items: I) -> Result<I::Item> {
    pick_random_iter_with(&mut ThreadRandom, items)
}

/// Same as [`pick_random_iter`], drawing from `rng`.
pub fn pick_random_iter_with<I, R>(rng: &mut R, items: I) -> Result<I::Item>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    let mut items: Vec<I::Item> = items.into_iter().collect();
    let len = items.len();
    if len == 0 {
        return Err(empty_source_error());
    }
    let index = rng.next_int(0, len);
    if index >= len {
        return Err(out_of_range_error(index, len));
    }
    Ok(items.swap_remove(index))
}

/// Returns `count` elements taken from distinct positions of `sequence`.
///
/// Every subset of size `count` is equally likely; the order of the result
/// is unspecified. A `count` of zero yields an empty vector.
///
/// # Errors
///
/// Returns `InvalidArgument` if the sequence is empty, or if `count` is not
/// strictly smaller than its length. To take every element in random order,
/// use [`shuffle`] instead.
pub fn sample<S>(sequence: &S, count: usize) -> Result<Vec<S::Item>>
where
    S: IndexedSequence + ?Sized,
    S::Item: Clone,
{
    sample_with(&mut ThreadRandom, sequence, count)
}

/// Same as [`sample`], drawing from `rng`.
pub fn sample_with<S, R>(rng: &mut R, sequence: &S, count: usize) -> Result<Vec<S::Item>>
where
    S: IndexedSequence + ?Sized,
    S::Item: Clone,
    R: RandomSource + ?Sized,
{
    let len = sequence.len();
    if len == 0 {
        return Err(StreamlinerError::invalid_argument("List cannot be null or empty."));
    }
    if count >= len {
        return Err(StreamlinerError::invalid_argument(format!(
            "Count {} must be smaller than the list length {}. Use shuffle instead.",
            count, len
        )));
    }

    // Rejection sampling: expected O(count) draws while count << len.
    let mut indexes = HashSet::with_capacity(count);
    while indexes.len() < count {
        indexes.insert(rng.next_int(0, len));
    }

    indexes
        .into_iter()
        .map(|index| sequence.get(index).cloned().ok_or_else(|| out_of_range_error(index, len)))
        .collect()
}

/// Shuffles `sequence` in place with Fisher–Yates and returns it.
///
/// # Errors
///
/// Returns `InvalidArgument` if the sequence is empty.
pub fn shuffle<S>(sequence: &mut S) -> Result<&mut S>
where
    S: IndexedSequence + ?Sized,
{
    shuffle_with(&mut ThreadRandom, sequence)
}

/// Same as [`shuffle`], drawing from `rng`.
pub fn shuffle_with<'a, S, R>(rng: &mut R, sequence: &'a mut S) -> Result<&'a mut S>
where
    S: IndexedSequence + ?Sized,
    R: RandomSource + ?Sized,
{
    let mut n = sequence.len();
    if n == 0 {
        return Err(StreamlinerError::invalid_argument("List cannot be null or empty."));
    }
    while n > 1 {
        let k = rng.next_int(0, n);
        n -= 1;
        if k > n {
            return Err(out_of_range_error(k, n + 1));
        }
        sequence.swap(n, k);
    }
    Ok(sequence)
}

/// Method-call access to the randomizer for every [`IndexedSequence`].
pub trait SequenceRandomizer: IndexedSequence {
    /// See [`pick_random`].
    fn pick_random(&self) -> Result<&Self::Item> {
        pick_random(self)
    }

    /// See [`sample`].
    fn sample(&self, count: usize) -> Result<Vec<Self::Item>>
    where
        Self::Item: Clone,
    {
        sample(self, count)
    }

    /// See [`shuffle`].
    fn shuffle(&mut self) -> Result<&mut Self> {
        shuffle(self)
    }
}

impl<S: IndexedSequence + ?Sized> SequenceRandomizer for S {}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::collections::SeededRandom;

    /// Replays a fixed list of draws.
    struct ScriptedSource(VecDeque<usize>);

    impl ScriptedSource {
        fn new(draws: &[usize]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl RandomSource for ScriptedSource {
        fn next_int(&mut self, min: usize, max: usize) -> usize {
            let value = self.0.pop_front().expect("script exhausted");
            assert!(value >= min && value < max, "scripted {} outside [{}, {})", value, min, max);
            value
        }
    }

    #[test]
    fn test_pick_random_returns_member() {
        let list = vec![1, 2, 3, 4, 5];
        for _ in 0..100 {
            let item = pick_random(&list).unwrap();
            assert!(list.contains(item));
        }
    }

    #[test]
    fn test_pick_random_five_tries_show_two_values() {
        let list = vec![1, 2, 3, 4, 5];
        let distinct_in_five =
            || (0..5).map(|_| *list.pick_random().unwrap()).collect::<HashSet<i32>>().len();
        // a single round repeats one value with probability 1/625
        assert!((0..3).any(|_| distinct_in_five() >= 2));
    }

    #[test]
    fn test_pick_random_is_uniform() {
        let list = [0usize, 1, 2, 3];
        let mut rng = SeededRandom::from_seed(2024);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            counts[*pick_random_with(&mut rng, &list).unwrap()] += 1;
        }
        for (value, count) in counts.iter().enumerate() {
            assert!((9_400..10_600).contains(count), "value {} picked {} times", value, count);
        }
    }

    #[test]
    fn test_pick_random_single_element() {
        assert_eq!(pick_random(&["only"]).unwrap(), &"only");
        assert_eq!(pick_random_iter(Some(7)).unwrap(), 7);
    }

    #[test]
    fn test_pick_random_empty_fails() {
        let empty: Vec<u8> = Vec::new();
        assert!(pick_random(&empty).unwrap_err().is_invalid_argument());
        assert!(pick_random_iter(std::iter::empty::<u8>()).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_pick_random_iter_uses_drawn_position() {
        let mut rng = ScriptedSource::new(&[2]);
        let picked = pick_random_iter_with(&mut rng, vec!["a", "b", "c", "d"]).unwrap();
        assert_eq!(picked, "c");
    }

    #[test]
    fn test_pick_random_with_duplicates_in_source() {
        let list = [1, 2, 1, 3, 4];
        for _ in 0..50 {
            assert!([1, 2, 3, 4].contains(pick_random(&list[..]).unwrap()));
        }
    }

    #[test]
    fn test_sample_returns_distinct_positions() {
        let list: Vec<usize> = (0..20).collect();
        for count in 0..20 {
            let result = sample(&list, count).unwrap();
            assert_eq!(result.len(), count);
            let distinct: HashSet<_> = result.iter().collect();
            assert_eq!(distinct.len(), count, "duplicate position in {:?}", result);
            assert!(result.iter().all(|item| list.contains(item)));
        }
    }

    #[test]
    fn test_sample_example() {
        let list = vec![1, 2, 3, 4, 5];
        let result = list.sample(2).unwrap();
        assert_eq!(result.len(), 2);
        assert_ne!(result[0], result[1]);
        assert!(result.iter().all(|item| (1..=5).contains(item)));
    }

    #[test]
    fn test_sample_rejects_repeated_draws() {
        let list = ['a', 'b', 'c', 'd'];
        let mut rng = ScriptedSource::new(&[3, 3, 3, 1]);
        let mut result = sample_with(&mut rng, &list, 2).unwrap();
        result.sort();
        assert_eq!(result, ['b', 'd']);
    }

    #[test]
    fn test_sample_zero_count() {
        assert!(sample(&[1, 2, 3], 0).unwrap().is_empty());
        assert!(sample(&["solo"], 0).unwrap().is_empty());
    }

    #[test]
    fn test_sample_invalid_arguments() {
        let list = vec![1, 2, 3];
        assert!(sample(&list, 3).unwrap_err().is_invalid_argument());
        assert!(sample(&list, 10).unwrap_err().is_invalid_argument());
        assert!(sample(&["solo"], 1).unwrap_err().is_invalid_argument());
        assert!(sample(&Vec::<i32>::new(), 0).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_sample_is_uniform_over_subsets() {
        // C(4, 2) = 6 subsets, 6_000 expected hits each.
        let list = [0u8, 1, 2, 3];
        let mut rng = SeededRandom::from_seed(99);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..36_000 {
            let mut subset = sample_with(&mut rng, &list, 2).unwrap();
            subset.sort();
            *counts.entry(subset).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (subset, count) in counts {
            assert!((5_400..6_600).contains(&count), "subset {:?} drawn {} times", subset, count);
        }
    }

    #[test]
    fn test_shuffle_follows_fisher_yates_swaps() {
        // n=4 draws 0: swap(3,0); n=3 draws 2: swap(2,2); n=2 draws 0: swap(1,0)
        let mut list = vec![1, 2, 3, 4];
        let mut rng = ScriptedSource::new(&[0, 2, 0]);
        shuffle_with(&mut rng, &mut list).unwrap();
        assert_eq!(list, [2, 4, 3, 1]);
        assert!(rng.0.is_empty());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let original: Vec<i32> = (1..=15).collect();
        let mut shuffled = original.clone();
        shuffled.shuffle().unwrap();
        assert_eq!(shuffled.len(), original.len());
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_changes_order() {
        let original: Vec<i32> = (1..=15).collect();
        let changed = (0..20)
            .filter(|_| {
                let mut copy = original.clone();
                shuffle(&mut copy).unwrap();
                copy != original
            })
            .count();
        assert!(changed >= 19, "only {} of 20 shuffles changed the order", changed);
    }

    #[test]
    fn test_shuffle_returns_same_sequence() {
        let mut deque: VecDeque<char> = "abcdef".chars().collect();
        let returned = shuffle(&mut deque).unwrap();
        returned.push_back('g');
        assert_eq!(deque.len(), 7);
        assert_eq!(deque.back(), Some(&'g'));
    }

    #[test]
    fn test_shuffle_single_and_empty() {
        let mut single = [42];
        assert_eq!(shuffle(&mut single).unwrap(), &[42]);

        let mut empty: [u8; 0] = [];
        assert!(shuffle(&mut empty).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_shuffle_is_uniform_over_permutations() {
        let mut rng = SeededRandom::from_seed(5);
        let mut counts = std::collections::HashMap::new();
        for _ in 0..60_000 {
            let mut list = ['a', 'b', 'c'];
            shuffle_with(&mut rng, &mut list).unwrap();
            *counts.entry(list).or_insert(0usize) += 1;
        }
        assert_eq!(counts.len(), 6);
        for (permutation, count) in counts {
            assert!((9_400..10_600).contains(&count), "{:?} produced {} times", permutation, count);
        }
    }
}
