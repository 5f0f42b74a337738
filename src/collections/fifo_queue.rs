//! First-in, first-out queue.

use std::fmt;

use super::circular_array::{self, CircularArray};
use crate::control::Maybe;
use crate::typeclass::{Foldable, FunctorMut, MonadMut, TypeConstructor};

/// A FIFO queue: elements leave in the order they were pushed.
///
/// # Examples
///
/// ```rust
/// use fpqueues::collections::FifoQueue;
/// use fpqueues::control::Maybe;
///
/// let mut queue = FifoQueue::new();
/// queue.push_all([Some(1), None, Some(2)]);
/// queue.push(3);
///
/// assert_eq!(queue.peek_next_out(), Maybe::Some(&1));
/// assert_eq!(queue.peek_last_in(), Maybe::Some(&3));
/// assert_eq!(queue.to_string(), "<< 1 < 2 < 3 <<");
/// assert_eq!(queue.pop(), Maybe::Some(1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FifoQueue<T> {
    buffer: CircularArray<T>,
}

impl<T> FifoQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: CircularArray::new(),
        }
    }

    /// Adds an element at the back of the queue.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.buffer.push_back(element);
    }

    /// Adds every present value at the back of the queue, in order.
    pub fn push_all<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Maybe<T>>,
    {
        for value in values {
            if let Maybe::Some(element) = value.into() {
                self.buffer.push_back(element);
            }
        }
    }

    /// Removes the oldest element.
    #[inline]
    pub fn pop(&mut self) -> Maybe<T> {
        self.buffer.pop_front().into()
    }

    /// Returns the element the next `pop` will remove.
    #[inline]
    #[must_use]
    pub fn peek_next_out(&self) -> Maybe<&T> {
        self.buffer.peek_front().into()
    }

    /// Returns the most recently pushed element.
    #[inline]
    #[must_use]
    pub fn peek_last_in(&self) -> Maybe<&T> {
        self.buffer.peek_back().into()
    }

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the queue is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates from the next element out to the last element in.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> circular_array::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Builds a new queue by applying `function` to every element, keeping
    /// the order.
    pub fn map<U, F>(&self, function: F) -> FifoQueue<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }
}

impl<T> Default for FifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for FifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for FifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for FifoQueue<T> {
    type Item = T;
    type IntoIter = circular_array::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FifoQueue<T> {
    type Item = &'a T;
    type IntoIter = circular_array::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for FifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for FifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "<<")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
                write!(formatter, " {element}")?;
            } else {
                write!(formatter, " < {element}")?;
            }
        }
        write!(formatter, "{}<<", if first { "  " } else { " " })
    }
}

impl<T> TypeConstructor for FifoQueue<T> {
    type Inner = T;
    type WithType<B> = FifoQueue<B>;
}

impl<T> FunctorMut for FifoQueue<T> {
    fn fmap_mut<B, F>(self, function: F) -> FifoQueue<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> FifoQueue<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> MonadMut for FifoQueue<T> {
    fn flat_map_mut<B, F>(self, function: F) -> FifoQueue<B>
    where
        F: FnMut(T) -> FifoQueue<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Foldable for FifoQueue<T> {
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
