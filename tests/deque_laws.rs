//! Property-based tests for the ring buffer and the deque built on it.
//!
//! Every sequence of operations is replayed against `std::collections::VecDeque`
//! as a model, checking that the logical contents always agree and that the
//! buffer never holds more elements than it has slots.

#![cfg(feature = "collections")]

use fpqueues::collections::{CircularArray, Deque};
use fpqueues::control::Maybe;
use proptest::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Compact,
    Resize(usize),
}

fn operation_strategy() -> impl Strategy<Value = Operation> {
    prop_oneof![
        4 => any::<i32>().prop_map(Operation::PushBack),
        4 => any::<i32>().prop_map(Operation::PushFront),
        2 => Just(Operation::PopBack),
        2 => Just(Operation::PopFront),
        1 => Just(Operation::Compact),
        1 => (0usize..8).prop_map(Operation::Resize),
    ]
}

// =============================================================================
// Ring Invariant
// =============================================================================

proptest! {
    /// The array matches a VecDeque model after every operation.
    #[test]
    fn prop_circular_array_matches_model(operations in prop::collection::vec(operation_strategy(), 0..200)) {
        let mut array = CircularArray::new();
        let mut model = VecDeque::new();

        for operation in operations {
            match operation {
                Operation::PushBack(value) => {
                    array.push_back(value);
                    model.push_back(value);
                }
                Operation::PushFront(value) => {
                    array.push_front(value);
                    model.push_front(value);
                }
                Operation::PopBack => prop_assert_eq!(array.pop_back(), model.pop_back()),
                Operation::PopFront => prop_assert_eq!(array.pop_front(), model.pop_front()),
                Operation::Compact => array.compact(),
                Operation::Resize(extra) => array.resize(extra),
            }

            prop_assert!(array.len() <= array.capacity());
            prop_assert!(array.capacity() >= 2);
            prop_assert_eq!(array.len(), model.len());
            prop_assert!(array.iter().eq(model.iter()));
            prop_assert!(array.iter().rev().eq(model.iter().rev()));
            prop_assert_eq!(array.peek_front(), model.front());
            prop_assert_eq!(array.peek_back(), model.back());
        }
    }

    /// Random access agrees with the model at every logical index.
    #[test]
    fn prop_indexing_matches_model(
        front in prop::collection::vec(any::<i16>(), 0..20),
        back in prop::collection::vec(any::<i16>(), 0..20),
    ) {
        let mut array = CircularArray::with_capacity(3);
        let mut model = VecDeque::new();
        for value in &back {
            array.push_back(*value);
            model.push_back(*value);
        }
        for value in &front {
            array.push_front(*value);
            model.push_front(*value);
        }

        for (index, expected) in model.iter().enumerate() {
            prop_assert_eq!(array.get(index), Ok(expected));
        }
        prop_assert!(array.get(model.len()).is_err());
    }

    /// Pushing n elements from the minimum capacity grows the buffer only a
    /// logarithmic number of times.
    #[test]
    fn prop_growth_count_is_logarithmic(count in 1usize..2000) {
        let mut array = CircularArray::new();
        let mut growths = 0u32;
        for value in 0..count {
            let before = array.capacity();
            array.push_back(value);
            if array.capacity() != before {
                prop_assert_eq!(array.capacity(), before * 2);
                growths += 1;
            }
        }
        prop_assert!(growths <= count.ilog2() + 1);
    }

    /// Compaction never changes the logical contents.
    #[test]
    fn prop_compact_preserves_contents(values in prop::collection::vec(any::<i32>(), 0..64), pops in 0usize..64) {
        let mut array: CircularArray<i32> = values.iter().copied().collect();
        for _ in 0..pops {
            array.pop_front();
        }
        let before = array.clone();
        array.compact();
        prop_assert_eq!(array.capacity(), before.len().max(2));
        prop_assert_eq!(array, before);
    }
}

// =============================================================================
// Deque Properties
// =============================================================================

proptest! {
    /// Pushing absent values never changes a deque.
    #[test]
    fn prop_absent_pushes_are_no_ops(
        values in prop::collection::vec(any::<i32>(), 0..32),
        absent in 0usize..8,
    ) {
        let mut deque: Deque<i32> = values.into_iter().collect();
        let before = deque.clone();
        for _ in 0..absent {
            deque.push_back_maybe(Maybe::Nothing);
            deque.push_front_maybe(None);
        }
        prop_assert_eq!(deque, before);
    }

    /// The deque keeps exactly the present values, in order.
    #[test]
    fn prop_from_options_keeps_present_values(values in prop::collection::vec(any::<Option<i32>>(), 0..64)) {
        let deque = Deque::from_options(values.clone());
        let expected: Vec<i32> = values.into_iter().flatten().collect();
        prop_assert_eq!(deque.iter().copied().collect::<Vec<_>>(), expected);
    }

    /// Mutating a clone leaves the original untouched.
    #[test]
    fn prop_clone_independence(values in prop::collection::vec(any::<i32>(), 0..32), extra in any::<i32>()) {
        let original: Deque<i32> = values.iter().copied().collect();
        let mut copy = original.clone();
        copy.push_back(extra);
        copy.pop_front();
        prop_assert_eq!(original.iter().copied().collect::<Vec<_>>(), values);
    }

    /// merge_map yields `sources * shortest` elements; exhaust_map yields all.
    #[test]
    fn prop_merge_and_exhaust_lengths(lengths in prop::collection::vec(0usize..10, 1..8)) {
        let deque: Deque<usize> = lengths.iter().copied().collect();
        let expand = |&n: &usize| (0..n).collect::<Deque<usize>>();

        let shortest = lengths.iter().copied().min().unwrap_or(0);
        let total: usize = lengths.iter().sum();

        prop_assert_eq!(deque.merge_map(expand).len(), lengths.len() * shortest);
        prop_assert_eq!(deque.exhaust_map(expand).len(), total);
    }

    /// exhaust_map and flat_map hold the same multiset of elements.
    #[test]
    fn prop_exhaust_map_is_a_permutation_of_flat_map(lengths in prop::collection::vec(0usize..6, 0..6)) {
        let deque: Deque<usize> = lengths.into_iter().collect();
        let expand = |&n: &usize| (0..n).map(|k| n * 10 + k).collect::<Deque<usize>>();

        let mut exhausted: Vec<usize> = deque.exhaust_map(expand).into_iter().collect();
        let mut flattened: Vec<usize> = deque.flat_map(expand).into_iter().collect();
        exhausted.sort_unstable();
        flattened.sort_unstable();
        prop_assert_eq!(exhausted, flattened);
    }
}
