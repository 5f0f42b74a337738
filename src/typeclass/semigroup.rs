//! Semigroup type class - types with an associative binary operation.
//!
//! `Either::merge_map` relies on this to append to the right channel, which
//! is typically an accumulating log or error message.
//!
//! # Laws
//!
//! ## Associativity
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::typeclass::Semigroup;
//!
//! let hello = String::from("Hello, ");
//! let world = String::from("World!");
//! assert_eq!(hello.combine(world), "Hello, World!");
//!
//! assert_eq!(vec![1, 2].combine(vec![3, 4]), vec![1, 2, 3, 4]);
//! ```

/// A type class for types with an associative binary operation.
pub trait Semigroup {
    /// Combines two values into one. The operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Combines two values by reference, cloning both.
    #[must_use]
    fn combine_ref(&self, other: &Self) -> Self
    where
        Self: Clone,
    {
        self.clone().combine(other.clone())
    }

    /// Combines every element of an iterator, left to right.
    ///
    /// Returns `None` if the iterator is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::typeclass::Semigroup;
    ///
    /// let words = vec!["a".to_string(), "b".to_string(), "c".to_string()];
    /// assert_eq!(String::combine_all(words), Some("abc".to_string()));
    /// assert_eq!(String::combine_all(Vec::new()), None);
    /// ```
    fn combine_all<I>(iterator: I) -> Option<Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self>,
    {
        iterator.into_iter().reduce(Self::combine)
    }
}

impl Semigroup for String {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

impl Semigroup for () {
    #[inline]
    fn combine(self, (): Self) -> Self {}
}
