//! Monad type classes - sequencing dependent computations.
//!
//! As with the functors, there is a single-shot flavour and a per-element
//! flavour:
//!
//! - [`Monad`]: `Maybe` and the left-biased `Either`. The continuation runs
//!   at most once.
//! - [`MonadMut`]: the collections. The continuation runs once per element
//!   and every result is spliced into the output. Besides the sequential
//!   `flat_map_mut`, two round-robin variants are provided:
//!   [`MonadMut::merge_map_mut`] and [`MonadMut::exhaust_map_mut`].
//!
//! # Laws
//!
//! ## Left Identity
//!
//! ```text
//! pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity
//!
//! ```text
//! m.flat_map(pure) == m
//! ```
//!
//! ## Associativity
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```

use super::functor::{Functor, FunctorMut};
use crate::interleave::{exhaust, merge};

/// A type class for single-value containers supporting monadic bind.
///
/// # Examples
///
/// ```rust
/// use fpqueues::control::Maybe;
/// use fpqueues::typeclass::Monad;
///
/// let halve = |n: i32| if n % 2 == 0 { Maybe::Some(n / 2) } else { Maybe::Nothing };
///
/// assert_eq!(Maybe::Some(8).flat_map(halve), Maybe::Some(4));
/// assert_eq!(Maybe::Some(7).flat_map(halve), Maybe::Nothing);
/// ```
pub trait Monad: Functor {
    /// Chains a computation that itself returns a container of this kind.
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> Self::WithType<B>;

    /// Alias for [`flat_map`](Self::flat_map), following Rust's naming.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: FnOnce(Self::Inner) -> Self::WithType<B>,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Maybe;
    /// use fpqueues::typeclass::Monad;
    ///
    /// assert_eq!(Maybe::Some(5).then(Maybe::Some("hello")), Maybe::Some("hello"));
    /// assert_eq!(Maybe::<i32>::Nothing.then(Maybe::Some("hello")), Maybe::Nothing);
    /// ```
    #[inline]
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.flat_map(|_| next)
    }
}

/// A type class for collections supporting monadic bind over every element.
///
/// Only [`flat_map_mut`](Self::flat_map_mut) is required; the round-robin
/// variants are derived from iteration and collection.
///
/// # Examples
///
/// ```rust
/// use fpqueues::collections::Deque;
/// use fpqueues::typeclass::MonadMut;
///
/// let deque: Deque<i32> = [1, 2].into_iter().collect();
/// let spread = deque.flat_map_mut(|n| [n, n * 10].into_iter().collect());
/// assert_eq!(spread.iter().copied().collect::<Vec<_>>(), vec![1, 10, 2, 20]);
/// ```
pub trait MonadMut: FunctorMut {
    /// Applies `function` to each element and concatenates the results left
    /// to right.
    fn flat_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> Self::WithType<B>;

    /// Applies `function` to each element and interleaves the results
    /// round-robin, stopping as soon as the first of them is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::typeclass::MonadMut;
    ///
    /// let deque: Deque<usize> = [1, 2, 3].into_iter().collect();
    /// let merged = deque.merge_map_mut(|n| (0..n).collect());
    /// assert_eq!(merged.iter().copied().collect::<Vec<_>>(), vec![0, 0, 0]);
    /// ```
    fn merge_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized + IntoIterator<Item = Self::Inner>,
        Self::WithType<B>: IntoIterator<Item = B> + FromIterator<B>,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        merge(self.into_iter().map(function)).collect()
    }

    /// Applies `function` to each element and interleaves the results
    /// round-robin until every one of them is exhausted.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::typeclass::MonadMut;
    ///
    /// let deque: Deque<usize> = [1, 2, 3].into_iter().collect();
    /// let exhausted = deque.exhaust_map_mut(|n| (0..n).collect());
    /// assert_eq!(exhausted.iter().copied().collect::<Vec<_>>(), vec![0, 0, 0, 1, 1, 2]);
    /// ```
    fn exhaust_map_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized + IntoIterator<Item = Self::Inner>,
        Self::WithType<B>: IntoIterator<Item = B> + FromIterator<B>,
        F: FnMut(Self::Inner) -> Self::WithType<B>,
    {
        exhaust(self.into_iter().map(function)).collect()
    }
}
