//! Integration tests for `CircularArray<T>`.

#![cfg(feature = "collections")]

use fpqueues::DataStructureError;
use fpqueues::collections::CircularArray;
use rstest::rstest;
use std::collections::HashSet;

fn contents<T: Clone>(array: &CircularArray<T>) -> Vec<T> {
    array.iter().cloned().collect()
}

// =============================================================================
// Growth
// =============================================================================

#[rstest]
fn three_pushes_into_capacity_two_grow_once() {
    let mut array = CircularArray::with_capacity(2);
    array.push_back(1);
    array.push_back(2);
    array.push_back(3);

    assert_eq!(array.capacity(), 4);
    assert_eq!(contents(&array), vec![1, 2, 3]);
    assert_eq!(array.pop_front(), Some(1));
    assert_eq!(contents(&array), vec![2, 3]);
}

#[rstest]
fn growth_is_doubling() {
    let mut array = CircularArray::with_capacity(2);
    let mut capacities = vec![array.capacity()];
    for value in 0..100 {
        array.push_back(value);
        if capacities.last() != Some(&array.capacity()) {
            capacities.push(array.capacity());
        }
    }
    assert_eq!(capacities, vec![2, 4, 8, 16, 32, 64, 128]);
}

#[rstest]
fn popping_never_shrinks() {
    let mut array: CircularArray<i32> = (0..30).collect();
    let capacity = array.capacity();
    while array.pop_back().is_some() {}
    assert_eq!(array.capacity(), capacity);
}

// =============================================================================
// Mixed Operations
// =============================================================================

#[rstest]
fn alternating_ends_keep_order() {
    let mut array = CircularArray::new();
    for value in 1..=5 {
        array.push_back(value);
        array.push_front(-value);
    }
    assert_eq!(contents(&array), vec![-5, -4, -3, -2, -1, 1, 2, 3, 4, 5]);
    assert_eq!(array.peek_front(), Some(&-5));
    assert_eq!(array.peek_back(), Some(&5));
}

#[rstest]
fn clone_keeps_layout_and_is_independent() {
    let mut original = CircularArray::with_capacity(5);
    original.push_back(1);
    original.push_front(0);
    let mut copy = original.clone();
    assert_eq!(copy.capacity(), original.capacity());

    copy.push_back(2);
    assert_eq!(contents(&original), vec![0, 1]);
    assert_eq!(contents(&copy), vec![0, 1, 2]);
}

#[rstest]
fn get_mut_edits_in_place() {
    let mut array: CircularArray<String> = ["a", "b"].into_iter().map(String::from).collect();
    if let Ok(element) = array.get_mut(1) {
        element.push('!');
    }
    assert_eq!(contents(&array), vec!["a".to_string(), "b!".to_string()]);
}

#[rstest]
#[case(0, 0)]
#[case(3, 3)]
#[case(10, 3)]
fn out_of_range_access_reports_index_and_length(#[case] index: usize, #[case] length: usize) {
    let array: CircularArray<i32> = (0..i32::try_from(length).unwrap_or(0)).collect();
    assert_eq!(
        array.get(index),
        Err(DataStructureError::IndexOutOfBounds { index, length })
    );
}

// =============================================================================
// Equality and Hashing
// =============================================================================

#[rstest]
fn equal_arrays_hash_alike_regardless_of_layout() {
    let mut wrapped = CircularArray::with_capacity(4);
    wrapped.push_back(3);
    wrapped.push_front(2);
    wrapped.push_front(1);
    let linear: CircularArray<i32> = (1..=3).collect();

    let mut set = HashSet::new();
    set.insert(wrapped);
    assert!(set.contains(&linear));
}

#[rstest]
fn arrays_with_different_lengths_differ() {
    let short: CircularArray<i32> = (1..=2).collect();
    let long: CircularArray<i32> = (1..=3).collect();
    assert_ne!(short, long);
}
