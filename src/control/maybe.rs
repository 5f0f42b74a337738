//! Maybe type - a value that may or may not be present.
//!
//! `Maybe<T>` makes "value or nothing" explicit. It is returned by every
//! pop and peek in [`crate::collections`], so that running out of data is an
//! ordinary value rather than an error.
//!
//! Absence is a dedicated variant, [`Maybe::Nothing`]. No data value doubles
//! as a sentinel, so a `Maybe<Option<T>>` or a `Maybe<()>` can hold any value
//! of its element type. Converting from an `Option<T>` maps `None` to
//! `Nothing`, which is how "absent" inputs are filtered throughout the crate.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::control::Maybe;
//!
//! let present = Maybe::Some(21);
//! assert_eq!(present.map(|n| n * 2).get_or(0), 42);
//!
//! let absent: Maybe<i32> = Maybe::new(None);
//! assert!(absent.is_nothing());
//! assert_eq!(absent.get_or(-1), -1);
//! ```

use std::fmt;

use super::either::Either;
use crate::typeclass::{Foldable, Functor, Monad, Semigroup, TypeConstructor};

/// A value that is either present (`Some`) or absent (`Nothing`).
///
/// Equality compares wrapped values: two `Nothing`s are equal, and a `Some`
/// is never equal to `Nothing`.
///
/// # Examples
///
/// ```rust
/// use fpqueues::control::Maybe;
///
/// assert_eq!(Maybe::Some(1), Maybe::new(Some(1)));
/// assert_eq!(Maybe::<i32>::Nothing, Maybe::new(None));
/// assert_ne!(Maybe::Some(1), Maybe::Nothing);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Some(T),
    /// The absence of a value.
    Nothing,
}

impl<T> Maybe<T> {
    /// Creates a `Maybe` from an optional value. `None` yields `Nothing`.
    #[inline]
    pub fn new(value: Option<T>) -> Self {
        value.map_or(Self::Nothing, Self::Some)
    }

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Returns `1` for `Some` and `0` for `Nothing`.
    #[inline]
    pub const fn len(&self) -> usize {
        match self {
            Self::Some(_) => 1,
            Self::Nothing => 0,
        }
    }

    /// Returns `true` for `Nothing`. Same as [`is_nothing`](Self::is_nothing).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.is_nothing()
    }

    /// Applies a function to the contained value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Maybe;
    ///
    /// assert_eq!(Maybe::Some(4).map(|n| n + 1), Maybe::Some(5));
    /// assert_eq!(Maybe::<i32>::Nothing.map(|n| n + 1), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Applies a function whose result may itself be absent.
    ///
    /// An absent result collapses into `Nothing`; absence is never wrapped
    /// as a present value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Maybe;
    ///
    /// let checked_half = |n: i32| (n % 2 == 0).then_some(n / 2);
    /// assert_eq!(Maybe::Some(8).map_optional(checked_half), Maybe::Some(4));
    /// assert_eq!(Maybe::Some(7).map_optional(checked_half), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn map_optional<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Option<U>,
    {
        match self {
            Self::Some(value) => Maybe::new(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that returns a `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Maybe;
    ///
    /// let reciprocal = |n: f64| if n == 0.0 { Maybe::Nothing } else { Maybe::Some(1.0 / n) };
    /// assert_eq!(Maybe::Some(4.0).flat_map(reciprocal), Maybe::Some(0.25));
    /// assert_eq!(Maybe::Some(0.0).flat_map(reciprocal), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the contained value, or `default` if absent.
    #[inline]
    pub fn get_or(self, default: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value, or computes one if absent.
    #[inline]
    pub fn get_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::Nothing => default(),
        }
    }

    /// Returns `self` if present, otherwise `alternative`.
    #[inline]
    #[must_use]
    pub fn or(self, alternative: Self) -> Self {
        match self {
            Self::Some(_) => self,
            Self::Nothing => alternative,
        }
    }

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts from `&mut Maybe<T>` to `Maybe<&mut T>`.
    #[inline]
    pub const fn as_mut(&mut self) -> Maybe<&mut T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts into the standard library's `Option`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Returns an iterator over the zero or one contained value.
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.as_ref().into_option().into_iter()
    }

    /// Converts into a left-biased [`Either`]: `Some(value)` becomes
    /// `Left(value)`, `Nothing` becomes `Right(right)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::{Either, Maybe};
    ///
    /// assert_eq!(Maybe::Some(1).to_either("missing"), Either::Left(1));
    /// assert_eq!(Maybe::<i32>::Nothing.to_either("missing"), Either::Right("missing"));
    /// ```
    #[inline]
    pub fn to_either<R>(self, right: R) -> Either<T, R> {
        Either::new(self.into_option(), right)
    }
}

impl<T: Clone> Maybe<&T> {
    /// Maps a `Maybe<&T>` to a `Maybe<T>` by cloning the contents.
    #[inline]
    pub fn cloned(self) -> Maybe<T> {
        self.map(T::clone)
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(formatter, "Some({value})"),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        Self::new(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for Maybe<T> {
    type Inner = T;
    type WithType<B> = Maybe<B>;
}

impl<T> Functor for Maybe<T> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&T) -> B,
    {
        self.as_ref().map(function)
    }
}

impl<T> Monad for Maybe<T> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(T) -> Maybe<B>,
    {
        Self::flat_map(self, function)
    }
}

impl<T> Foldable for Maybe<T> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        match self {
            Self::Some(value) => function(init, value),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        match self {
            Self::Some(value) => function(value, init),
            Self::Nothing => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}

impl<T: Semigroup> Semigroup for Maybe<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Self::Some(left), Self::Some(right)) => Self::Some(left.combine(right)),
            (present @ Self::Some(_), Self::Nothing) | (Self::Nothing, present) => present,
        }
    }
}
