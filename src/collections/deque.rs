//! Double-ended queue with absent-value filtering.
//!
//! [`Deque`] wraps a [`CircularArray`] and exposes a queue/stack API that
//! never hands out the ring buffer's internals. Pops and peeks return
//! [`Maybe`] instead of panicking on an empty deque, and the bulk push
//! operations silently drop absent values.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::collections::Deque;
//! use fpqueues::control::Maybe;
//!
//! let mut deque: Deque<i32> = Deque::new();
//! deque.push_back_all([None, Some(5), None, Some(6)]);
//!
//! assert_eq!(deque.len(), 2);
//! assert_eq!(deque.pop_front(), Maybe::Some(5));
//! assert_eq!(deque.pop_front(), Maybe::Some(6));
//! assert_eq!(deque.pop_front(), Maybe::Nothing);
//! ```

use std::fmt;

use super::circular_array::{self, CircularArray};
use crate::control::Maybe;
use crate::interleave::{exhaust, merge};
use crate::typeclass::{Foldable, FunctorMut, MonadMut, Semigroup, TypeConstructor};

/// A double-ended queue backed by a growable ring buffer.
///
/// Two deques are equal when they hold equal elements in the same order,
/// whatever their capacities. `Clone` produces an independent deque.
///
/// # Complexity
///
/// | Operation         | Complexity     |
/// |-------------------|----------------|
/// | `push_front/back` | O(1) amortized |
/// | `pop_front/back`  | O(1)           |
/// | `peek_front/back` | O(1)           |
/// | `len`             | O(1)           |
/// | `clone`           | O(n)           |
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Deque<T> {
    buffer: CircularArray<T>,
}

impl<T> Deque<T> {
    /// Creates an empty deque.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: CircularArray::new(),
        }
    }

    /// Creates an empty deque with room for `capacity` elements.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: CircularArray::with_capacity(capacity),
        }
    }

    /// Creates a deque from possibly absent values, keeping only the present
    /// ones in their original order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let deque = Deque::from_options([Some(1), None, Some(3)]);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn from_options<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Maybe<T>>,
    {
        let mut deque = Self::new();
        deque.push_back_all(values);
        deque
    }

    // =========================================================================
    // Push Operations
    // =========================================================================

    /// Pushes an element onto the back.
    #[inline]
    pub fn push_back(&mut self, element: T) {
        self.buffer.push_back(element);
    }

    /// Pushes an element onto the front.
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.buffer.push_front(element);
    }

    /// Pushes a possibly absent value onto the back; absence is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::control::Maybe;
    ///
    /// let mut deque = Deque::new();
    /// deque.push_back_maybe(Maybe::Some(1));
    /// deque.push_back_maybe(None);
    /// assert_eq!(deque.len(), 1);
    /// ```
    pub fn push_back_maybe(&mut self, value: impl Into<Maybe<T>>) {
        if let Maybe::Some(element) = value.into() {
            self.buffer.push_back(element);
        }
    }

    /// Pushes a possibly absent value onto the front; absence is a no-op.
    pub fn push_front_maybe(&mut self, value: impl Into<Maybe<T>>) {
        if let Maybe::Some(element) = value.into() {
            self.buffer.push_front(element);
        }
    }

    /// Pushes every present value onto the back, in order.
    pub fn push_back_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Maybe<T>>,
    {
        for value in values {
            self.push_back_maybe(value);
        }
    }

    /// Pushes every present value onto the front, in order.
    ///
    /// Each value is pushed in turn, so the last one ends up at the front.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let mut deque = Deque::from_options([Some(9)]);
    /// deque.push_front_all([Some(1), None, Some(2)]);
    /// assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![2, 1, 9]);
    /// ```
    pub fn push_front_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Maybe<T>>,
    {
        for value in values {
            self.push_front_maybe(value);
        }
    }

    // =========================================================================
    // Pop and Peek Operations
    // =========================================================================

    /// Removes and returns the back element, or `Nothing` if empty.
    #[inline]
    pub fn pop_back(&mut self) -> Maybe<T> {
        self.buffer.pop_back().into()
    }

    /// Removes and returns the front element, or `Nothing` if empty.
    #[inline]
    pub fn pop_front(&mut self) -> Maybe<T> {
        self.buffer.pop_front().into()
    }

    /// Returns the back element without removing it.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Maybe<&T> {
        self.buffer.peek_back().into()
    }

    /// Returns the front element without removing it.
    #[inline]
    #[must_use]
    pub fn peek_front(&self) -> Maybe<&T> {
        self.buffer.peek_front().into()
    }

    // =========================================================================
    // Size and Capacity
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the capacity of the underlying buffer.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Returns the fraction of the underlying buffer in use.
    #[inline]
    #[must_use]
    pub const fn load_factor(&self) -> f64 {
        self.buffer.load_factor()
    }

    /// Compacts the buffer, then reserves `extra` free slots.
    #[inline]
    pub fn resize(&mut self, extra: usize) {
        self.buffer.resize(extra);
    }

    /// Shrinks the buffer to fit the elements.
    #[inline]
    pub fn compact(&mut self) {
        self.buffer.compact();
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Returns an iterator from front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> circular_array::Iter<'_, T> {
        self.buffer.iter()
    }

    // =========================================================================
    // Functional Combinators
    // =========================================================================

    /// Builds a new deque by applying `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let deque: Deque<i32> = (1..=3).collect();
    /// let squares = deque.map(|n| n * n);
    /// assert_eq!(squares.iter().copied().collect::<Vec<_>>(), vec![1, 4, 9]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> Deque<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Builds a new deque from the present results of `function`.
    ///
    /// Elements for which `function` returns `None` are dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let deque: Deque<i32> = (1..=6).collect();
    /// let halves = deque.map_optional(|n| (n % 2 == 0).then_some(n / 2));
    /// assert_eq!(halves.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    /// ```
    pub fn map_optional<U, F, M>(&self, function: F) -> Deque<U>
    where
        F: FnMut(&T) -> M,
        M: Into<Maybe<U>>,
    {
        Deque::from_options(self.iter().map(function))
    }

    /// Applies `function` to every element and concatenates the resulting
    /// deques left to right.
    pub fn flat_map<U, F>(&self, function: F) -> Deque<U>
    where
        F: FnMut(&T) -> Deque<U>,
    {
        self.iter().flat_map(function).collect()
    }

    /// Applies `function` to every element and interleaves the resulting
    /// deques round-robin, stopping as soon as one of them runs out.
    ///
    /// The output holds `len() * shortest` elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let deque: Deque<usize> = (1..=3).collect();
    /// let merged = deque.merge_map(|&n| (0..n).map(|k| n * 10 + k).collect());
    /// assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
    /// ```
    pub fn merge_map<U, F>(&self, function: F) -> Deque<U>
    where
        F: FnMut(&T) -> Deque<U>,
    {
        merge(self.iter().map(function)).collect()
    }

    /// Applies `function` to every element and interleaves the resulting
    /// deques round-robin until all of them run out.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    ///
    /// let deque: Deque<usize> = (1..=3).collect();
    /// let exhausted = deque.exhaust_map(|&n| (0..n).map(|k| n * 10 + k).collect());
    /// assert_eq!(
    ///     exhausted.iter().copied().collect::<Vec<_>>(),
    ///     vec![10, 20, 30, 21, 31, 32]
    /// );
    /// ```
    pub fn exhaust_map<U, F>(&self, function: F) -> Deque<U>
    where
        F: FnMut(&T) -> Deque<U>,
    {
        exhaust(self.iter().map(function)).collect()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = circular_array::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;
    type IntoIter = circular_array::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for Deque<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "><")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
                write!(formatter, " {element}")?;
            } else {
                write!(formatter, " | {element}")?;
            }
        }
        write!(formatter, "{}><", if first { "  " } else { " " })
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Deque<T> {
    type Inner = T;
    type WithType<B> = Deque<B>;
}

impl<T> FunctorMut for Deque<T> {
    fn fmap_mut<B, F>(self, function: F) -> Deque<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> Deque<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> MonadMut for Deque<T> {
    fn flat_map_mut<B, F>(self, function: F) -> Deque<B>
    where
        F: FnMut(T) -> Deque<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Foldable for Deque<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

/// Concatenation: the elements of `other` follow those of `self`.
impl<T> Semigroup for Deque<T> {
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn contents<T: Clone>(deque: &Deque<T>) -> Vec<T> {
        deque.iter().cloned().collect()
    }

    #[rstest]
    fn test_push_and_pop_both_ends() {
        let mut deque = Deque::new();
        deque.push_back(2);
        deque.push_front(1);
        deque.push_back(3);
        assert_eq!(deque.peek_front(), Maybe::Some(&1));
        assert_eq!(deque.peek_back(), Maybe::Some(&3));
        assert_eq!(deque.pop_back(), Maybe::Some(3));
        assert_eq!(deque.pop_front(), Maybe::Some(1));
        assert_eq!(deque.pop_front(), Maybe::Some(2));
        assert_eq!(deque.pop_front(), Maybe::Nothing);
        assert_eq!(deque.pop_back(), Maybe::Nothing);
    }

    #[rstest]
    fn test_absent_values_are_dropped() {
        let mut deque: Deque<i32> = Deque::new();
        deque.push_back_all([None, Some(5), None, Some(6)]);
        assert_eq!(contents(&deque), vec![5, 6]);
        deque.push_front_maybe(Maybe::Nothing);
        deque.push_back_maybe(None);
        assert_eq!(deque.len(), 2);
    }

    #[rstest]
    fn test_clone_is_independent() {
        let original: Deque<i32> = (1..=3).collect();
        let mut copy = original.clone();
        copy.push_back(4);
        copy.pop_front();
        assert_eq!(contents(&original), vec![1, 2, 3]);
        assert_eq!(contents(&copy), vec![2, 3, 4]);
    }

    #[rstest]
    fn test_equality_ignores_capacity() {
        let mut spacious = Deque::with_capacity(64);
        spacious.push_back(1);
        spacious.push_back(2);
        let tight: Deque<i32> = [1, 2].into_iter().collect();
        assert_eq!(spacious, tight);
    }

    #[rstest]
    fn test_resize_and_load_factor() {
        let mut deque: Deque<i32> = (0..4).collect();
        deque.resize(4);
        assert_eq!(deque.capacity(), 8);
        assert!((deque.load_factor() - 0.5).abs() < f64::EPSILON);
        deque.compact();
        assert_eq!(deque.capacity(), 4);
    }

    #[rstest]
    fn test_flat_map_concatenates_in_order() {
        let deque: Deque<usize> = (1..=3).collect();
        let repeated = deque.flat_map(|&n| std::iter::repeat_n(n, n).collect());
        assert_eq!(contents(&repeated), vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    fn test_merge_map_stops_at_shortest() {
        let deque: Deque<usize> = [3, 1, 2].into_iter().collect();
        let merged = deque.merge_map(|&n| (0..n).collect());
        assert_eq!(merged.len(), 3);
        assert_eq!(contents(&merged), vec![0, 0, 0]);
    }

    #[rstest]
    fn test_exhaust_map_keeps_everything() {
        let deque: Deque<usize> = [3, 1, 2].into_iter().collect();
        let exhausted = deque.exhaust_map(|&n| (0..n).collect());
        assert_eq!(contents(&exhausted), vec![0, 0, 0, 1, 1, 2]);
    }

    #[rstest]
    #[case(vec![], "><  ><")]
    #[case(vec![5], ">< 5 ><")]
    #[case(vec![5, 4], ">< 5 | 4 ><")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let deque: Deque<i32> = elements.into_iter().collect();
        assert_eq!(deque.to_string(), expected);
    }

    #[rstest]
    fn test_semigroup_concatenates() {
        let left: Deque<i32> = (1..=2).collect();
        let right: Deque<i32> = (3..=4).collect();
        assert_eq!(contents(&left.combine(right)), vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn test_fold_right_visits_back_to_front() {
        let deque: Deque<&str> = ["a", "b", "c"].into_iter().collect();
        let joined = deque.fold_right(String::new(), |element, mut accumulator| {
            accumulator.push_str(element);
            accumulator
        });
        assert_eq!(joined, "cba");
    }
}
