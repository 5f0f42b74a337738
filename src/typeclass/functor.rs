//! Functor type classes - mapping over container values.
//!
//! Two flavours exist because of how Rust closures are called:
//!
//! - [`Functor`] for containers holding at most one value (`Maybe`, `Either`).
//!   The mapping function runs at most once, so `FnOnce` suffices.
//! - [`FunctorMut`] for the collections, where the function runs once per
//!   element and therefore has to be `FnMut`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::control::Maybe;
//! use fpqueues::typeclass::Functor;
//!
//! let some_value = Maybe::Some(5);
//! assert_eq!(some_value.fmap(|n| n.to_string()), Maybe::Some("5".to_string()));
//!
//! let nothing: Maybe<i32> = Maybe::Nothing;
//! assert_eq!(nothing.fmap(|n| n.to_string()), Maybe::Nothing);
//! ```

use super::higher::TypeConstructor;

/// A type class for containers of at most one value that can be mapped over.
///
/// # Examples
///
/// ```rust
/// use fpqueues::control::Either;
/// use fpqueues::typeclass::Functor;
///
/// let left: Either<i32, String> = Either::Left(21);
/// assert_eq!(left.fmap(|n| n * 2), Either::Left(42));
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the functor.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies a function to a reference of the value inside the functor,
    /// leaving the original untouched.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the value inside the functor with a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Maybe;
    /// use fpqueues::typeclass::Functor;
    ///
    /// assert_eq!(Maybe::Some(5).replace("replaced"), Maybe::Some("replaced"));
    /// assert_eq!(Maybe::<i32>::Nothing.replace("replaced"), Maybe::Nothing);
    /// ```
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }
}

/// A type class for multi-element containers that can be mapped over.
///
/// Mapping always produces a new container; the element order is preserved.
///
/// # Examples
///
/// ```rust
/// use fpqueues::collections::Deque;
/// use fpqueues::typeclass::FunctorMut;
///
/// let deque: Deque<i32> = [1, 2, 3].into_iter().collect();
/// let doubled = deque.fmap_mut(|n| n * 2);
/// assert_eq!(doubled.iter().copied().collect::<Vec<_>>(), vec![2, 4, 6]);
/// ```
pub trait FunctorMut: TypeConstructor {
    /// Applies a function to each element, consuming the container.
    fn fmap_mut<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnMut(Self::Inner) -> B;

    /// Applies a function to a reference of each element.
    fn fmap_ref_mut<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnMut(&Self::Inner) -> B;

    /// Collects the running results of a left fold into a container of the
    /// same kind, starting with `seed` itself.
    ///
    /// The result holds one more element than `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::Deque;
    /// use fpqueues::typeclass::FunctorMut;
    ///
    /// let deque: Deque<i32> = [1, 2, 3, 4].into_iter().collect();
    /// let sums = deque.accumulate(0, |total, n| total + n);
    /// assert_eq!(sums.iter().copied().collect::<Vec<_>>(), vec![0, 1, 3, 6, 10]);
    /// ```
    fn accumulate<B, F>(self, seed: B, mut function: F) -> Self::WithType<B>
    where
        Self: Sized + IntoIterator<Item = Self::Inner>,
        Self::WithType<B>: FromIterator<B>,
        B: Clone,
        F: FnMut(&B, Self::Inner) -> B,
    {
        let mut current = seed.clone();
        std::iter::once(seed)
            .chain(self.into_iter().map(move |element| {
                current = function(&current, element);
                current.clone()
            }))
            .collect()
    }
}
