//! Capability interface over finite, indexable collections.
//!
//! [`IndexedSequence`] is what the randomizer needs from a container: its
//! length, read access by position and an in-place swap. It is implemented
//! for slices, arrays, `Vec` and `VecDeque`.

use std::collections::VecDeque;

/// A finite collection with positional access.
pub trait IndexedSequence {
    type Item;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`, or `None` when out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Swaps the elements at positions `a` and `b`.
    ///
    /// Both positions must be in bounds.
    fn swap(&mut self, a: usize, b: usize);
}

impl<T> IndexedSequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        <[T]>::swap(self, a, b)
    }
}

impl<T, const N: usize> IndexedSequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> IndexedSequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b)
    }
}

impl<T> IndexedSequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b)
    }
}

/// Compares two optional sequences element by element.
///
/// Two absent sequences are equal; an absent and a present one are not.
///
/// # Examples
///
/// ```
/// use streamliner::collections::nullable_sequence_eq;
///
/// assert!(nullable_sequence_eq(Some(vec![1, 2, 3]), Some([1, 2, 3])));
/// assert!(!nullable_sequence_eq(Some(vec![3, 1, 2]), Some(vec![1, 2, 3])));
/// assert!(nullable_sequence_eq(None::<Vec<i32>>, None::<Vec<i32>>));
/// assert!(!nullable_sequence_eq(Some(vec![1]), None::<Vec<i32>>));
/// ```
pub fn nullable_sequence_eq<I, J>(first: Option<I>, second: Option<J>) -> bool
where
    I: IntoIterator,
    J: IntoIterator,
    I::Item: PartialEq<J::Item>,
{
    match (first, second) {
        (None, None) => true,
        (Some(first), Some(second)) => first.into_iter().eq(second),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap_ends<S: IndexedSequence + ?Sized>(sequence: &mut S) {
        let last = sequence.len() - 1;
        sequence.swap(0, last);
    }

    #[test]
    fn test_capability_on_each_container() {
        let mut vec = vec![1, 2, 3];
        swap_ends(&mut vec);
        assert_eq!(vec, [3, 2, 1]);

        let mut array = [1, 2, 3];
        swap_ends(&mut array);
        assert_eq!(array, [3, 2, 1]);

        let mut deque: VecDeque<_> = [1, 2, 3].into_iter().collect();
        swap_ends(&mut deque);
        assert_eq!(deque, [3, 2, 1]);

        let mut backing = [1, 2, 3, 4];
        swap_ends(&mut backing[1..]);
        assert_eq!(backing, [1, 4, 3, 2]);
    }

    #[test]
    fn test_get_and_len() {
        let vec = vec!['a', 'b'];
        assert_eq!(IndexedSequence::len(&vec), 2);
        assert_eq!(IndexedSequence::get(&vec, 1), Some(&'b'));
        assert_eq!(IndexedSequence::get(&vec, 2), None);
        assert!(IndexedSequence::is_empty(&Vec::<char>::new()));
    }

    #[test]
    fn test_nullable_sequence_eq() {
        let cases = [
            (None, None, true),
            (Some(vec![1, 2, 3]), Some(vec![1, 2, 3]), true),
            (Some(vec![3, 1, 2]), Some(vec![1, 2, 3]), false),
            (Some(vec![1, 2]), Some(vec![1, 2, 3]), false),
            (Some(vec![]), Some(vec![]), true),
            (Some(vec![1]), None, false),
            (None, Some(vec![1]), false),
        ];
        for (first, second, expected) in cases {
            assert_eq!(
                nullable_sequence_eq(first.clone(), second.clone()),
                expected,
                "nullable_sequence_eq({:?}, {:?})",
                first,
                second
            );
        }
    }
}
