//! Foldable type class - folding over data structures.
//!
//! A `Foldable` can be traversed front to back and reduced to a single
//! summary value. Every container in this crate is foldable: the collections
//! fold over their elements, `Maybe` over zero or one value, and the
//! left-biased `Either` over its `Left` value only.
//!
//! # Consistency
//!
//! For an associative `f`, `fold_left` and `fold_right` agree:
//!
//! ```text
//! fa.fold_left(init, f) == fa.fold_right(init, flip(f))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::collections::Deque;
//! use fpqueues::typeclass::Foldable;
//!
//! let deque: Deque<i32> = [1, 2, 3, 4, 5].into_iter().collect();
//! assert_eq!(deque.fold_left(0, |total, n| total + n), 15);
//! ```

use super::higher::TypeConstructor;

/// A type class for data structures that can be folded to a summary value.
///
/// # Required Methods
///
/// - `fold_left`: left-associative fold
/// - `fold_right`: right-associative fold
/// - `length`: number of elements visited by a fold
///
/// # Provided Methods
///
/// - `reduce`: fold without a seed, using the first element instead
/// - `is_empty`: whether a fold would visit nothing
pub trait Foldable: TypeConstructor {
    /// Folds the structure from left to right with an accumulator.
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, Self::Inner) -> B;

    /// Folds the structure from right to left with an accumulator.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::typeclass::Foldable;
    ///
    /// let deque: Deque<&str> = ["a", "b", "c"].into_iter().collect();
    /// let joined = deque.fold_right(String::new(), |element, text| text + element);
    /// assert_eq!(joined, "cba");
    /// ```
    fn fold_right<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(Self::Inner, B) -> B;

    /// Returns the number of elements a fold would visit.
    fn length(&self) -> usize;

    /// Folds left using the first element as the seed.
    ///
    /// Returns `None` when there is nothing to fold.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::typeclass::Foldable;
    ///
    /// let deque: Deque<i32> = [3, 1, 4].into_iter().collect();
    /// assert_eq!(deque.reduce(|left, right| left.max(right)), Some(4));
    ///
    /// let empty: Deque<i32> = Deque::new();
    /// assert_eq!(empty.reduce(|left, right| left + right), None);
    /// ```
    fn reduce<F>(self, mut function: F) -> Option<Self::Inner>
    where
        Self: Sized,
        F: FnMut(Self::Inner, Self::Inner) -> Self::Inner,
    {
        self.fold_left(None, |accumulator, element| match accumulator {
            None => Some(element),
            Some(accumulated) => Some(function(accumulated, element)),
        })
    }

    /// Returns `true` when a fold would visit no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.length() == 0
    }
}
