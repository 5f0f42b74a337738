//! Last-in, first-out queue (stack).

use std::fmt;

use super::circular_array::{self, CircularArray};
use crate::control::Maybe;
use crate::typeclass::{Foldable, FunctorMut, MonadMut, TypeConstructor};

/// A LIFO queue: `pop` returns the most recently pushed element.
///
/// Iteration runs from the oldest element to the newest.
///
/// # Examples
///
/// ```rust
/// use fpqueues::collections::LifoQueue;
/// use fpqueues::control::Maybe;
///
/// let mut stack = LifoQueue::new();
/// stack.push_all([Some(1), None, Some(2), Some(3)]);
///
/// assert_eq!(stack.to_string(), "|| 1 > 2 > 3 ><");
/// assert_eq!(stack.pop(), Maybe::Some(3));
/// assert_eq!(stack.peek(), Maybe::Some(&2));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct LifoQueue<T> {
    buffer: CircularArray<T>,
}

impl<T> LifoQueue<T> {
    /// Creates an empty queue.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            buffer: CircularArray::new(),
        }
    }

    /// Pushes an element on top.
    #[inline]
    pub fn push(&mut self, element: T) {
        self.buffer.push_back(element);
    }

    /// Pushes every present value, in order; the last one ends up on top.
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

    /// Removes the element on top.
    #[inline]
    pub fn pop(&mut self) -> Maybe<T> {
        self.buffer.pop_back().into()
    }

    /// Returns the element on top without removing it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> Maybe<&T> {
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

    /// Iterates from the oldest element to the one on top.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> circular_array::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Builds a new queue by applying `function` to every element.
    pub fn map<U, F>(&self, function: F) -> LifoQueue<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }
}

impl<T> Default for LifoQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects oldest first: the last element yielded ends up on top.
impl<T> FromIterator<T> for LifoQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for LifoQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.buffer.extend(iter);
    }
}

impl<T> IntoIterator for LifoQueue<T> {
    type Item = T;
    type IntoIter = circular_array::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a LifoQueue<T> {
    type Item = &'a T;
    type IntoIter = circular_array::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for LifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LifoQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "||")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
                write!(formatter, " {element}")?;
            } else {
                write!(formatter, " > {element}")?;
            }
        }
        write!(formatter, "{}><", if first { "  " } else { " " })
    }
}

impl<T> TypeConstructor for LifoQueue<T> {
    type Inner = T;
    type WithType<B> = LifoQueue<B>;
}

impl<T> FunctorMut for LifoQueue<T> {
    fn fmap_mut<B, F>(self, function: F) -> LifoQueue<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> LifoQueue<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> MonadMut for LifoQueue<T> {
    fn flat_map_mut<B, F>(self, function: F) -> LifoQueue<B>
    where
        F: FnMut(T) -> LifoQueue<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Foldable for LifoQueue<T> {
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

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_pops_in_reverse_push_order() {
        let mut stack: LifoQueue<i32> = (1..=3).collect();
        stack.push(4);
        let popped: Vec<i32> = std::iter::from_fn(|| stack.pop().into_option()).collect();
        assert_eq!(popped, vec![4, 3, 2, 1]);
        assert!(stack.is_empty());
    }

    #[rstest]
    fn test_peek_does_not_remove() {
        let mut stack = LifoQueue::new();
        stack.push('x');
        assert_eq!(stack.peek(), Maybe::Some(&'x'));
        assert_eq!(stack.len(), 1);
    }

    #[rstest]
    #[case(vec![], "||  ><")]
    #[case(vec![1, 2, 3], "|| 1 > 2 > 3 ><")]
    fn test_display(#[case] elements: Vec<i32>, #[case] expected: &str) {
        let stack: LifoQueue<i32> = elements.into_iter().collect();
        assert_eq!(stack.to_string(), expected);
    }

    #[rstest]
    fn test_iter_is_oldest_first() {
        let mut stack = LifoQueue::new();
        stack.push_all([Some(1), None, Some(2)]);
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
    }
}
