//! Either type - a left-biased union of a primary and an alternate value.
//!
//! `Either<L, R>` holds exactly one of `Left(L)` or `Right(R)`. This crate
//! treats it as **left-biased**: `Left` is the primary (success) channel that
//! `map` and `flat_map` operate on, while `Right` carries an alternate value,
//! typically an error message or a log that callers accumulate with
//! [`Either::merge_map`].
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::control::Either;
//!
//! // An absent left candidate selects the right channel.
//! let parsed: Either<i32, String> = Either::new("42".parse().ok(), "not a number".to_string());
//! assert_eq!(parsed.map(|n| n + 1), Either::Left(43));
//!
//! let failed: Either<i32, String> = Either::new("x".parse().ok(), "not a number".to_string());
//! assert_eq!(failed.map(|n| n + 1), Either::Right("not a number".to_string()));
//! ```

use std::fmt;
use std::hash::Hash;

use super::maybe::Maybe;
use crate::typeclass::{Foldable, Functor, Monad, Semigroup, TypeConstructor};

/// A value that is either a primary `Left(L)` or an alternate `Right(R)`.
///
/// # Type Parameters
///
/// * `L` - The type of the primary (left) value
/// * `R` - The type of the alternate (right) value
///
/// Equality holds only between two `Left`s or two `Right`s with equal
/// contents; a `Left` is never equal to a `Right`.
///
/// # Examples
///
/// ```rust
/// use fpqueues::control::Either;
///
/// let success: Either<i32, String> = Either::Left(42);
/// let failure: Either<i32, String> = Either::Right("error".to_string());
///
/// assert_eq!(success.map(|x| x * 2), Either::Left(84));
/// assert_eq!(failure.map(|x| x * 2), Either::Right("error".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The primary variant, operated on by the left-biased combinators.
    Left(L),
    /// The alternate variant, conventionally an error or a log.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction and Type Checking
    // =========================================================================

    /// Creates a `Left` from a present candidate, falling back to `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// assert_eq!(Either::new(Some(1), "fallback"), Either::Left(1));
    /// assert_eq!(Either::<i32, _>::new(None, "fallback"), Either::Right("fallback"));
    /// ```
    #[inline]
    pub fn new(left: Option<L>, right: R) -> Self {
        left.map_or_else(|| Self::Right(right), Self::Left)
    }

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Returns the left value as a [`Maybe`], consuming the either.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::{Either, Maybe};
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Maybe::Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns the right value as a [`Maybe`], consuming the either.
    #[inline]
    pub fn right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Returns the right value, or `Nothing` if this is a `Left`.
    ///
    /// The right-channel counterpart of [`get_or`](Self::get_or).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::{Either, Maybe};
    ///
    /// let failed: Either<i32, &str> = Either::new(None, "oops");
    /// assert_eq!(failed.map_right(str::len).get_right(), Maybe::Some(4));
    /// assert_eq!(Either::<i32, &str>::Left(1).get_right(), Maybe::Nothing);
    /// ```
    #[inline]
    pub fn get_right(self) -> Maybe<R> {
        self.right()
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Returns the left value, or `default` if this is a `Right`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Left(3).get_or(0), 3);
    /// assert_eq!(Either::<i32, &str>::Right("oops").get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, default: L) -> L {
        match self {
            Self::Left(value) => value,
            Self::Right(_) => default,
        }
    }

    /// Converts into a [`Maybe`] of the left value, dropping any right value.
    #[inline]
    pub fn to_maybe(self) -> Maybe<L> {
        self.left()
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Applies a function to the left value.
    ///
    /// A `Right` is returned unchanged.
    #[inline]
    pub fn map<U, F>(self, function: F) -> Either<U, R>
    where
        F: FnOnce(L) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function whose result may be absent to the left value.
    ///
    /// If the function yields `None`, the result switches to the right
    /// channel holding `right`. A `Right` is returned unchanged and `right`
    /// is discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let below_42 = |n: i32| (n < 42).then_some(n);
    ///
    /// let small: Either<i32, &str> = Either::Left(6);
    /// assert_eq!(small.map_optional(below_42, "too big"), Either::Left(6));
    ///
    /// let large: Either<i32, &str> = Either::Left(50);
    /// assert_eq!(large.map_optional(below_42, "too big"), Either::Right("too big"));
    ///
    /// let failed: Either<i32, &str> = Either::Right("err");
    /// assert_eq!(failed.map_optional(below_42, "err2"), Either::Right("err"));
    /// ```
    #[inline]
    pub fn map_optional<U, F>(self, function: F, right: R) -> Either<U, R>
    where
        F: FnOnce(L) -> Option<U>,
    {
        match self {
            Self::Left(value) => Either::new(function(value), right),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to the right value.
    ///
    /// A `Left` is returned unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.map_right(|s| s.len()), Either::Right(5));
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.map_right(|s: String| s.len()), Either::Left(42));
    /// ```
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Applies one of two functions depending on the variant.
    #[inline]
    pub fn bimap<T, U, F, G>(self, left_function: F, right_function: G) -> Either<T, U>
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(left_function(value)),
            Self::Right(value) => Either::Right(right_function(value)),
        }
    }

    // =========================================================================
    // Chaining Operations
    // =========================================================================

    /// Chains a computation on the left value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let checked_div = |n: i32| {
    ///     if n == 0 { Either::Right("division by zero") } else { Either::Left(100 / n) }
    /// };
    ///
    /// assert_eq!(Either::Left(4).flat_map(checked_div), Either::Left(25));
    /// assert_eq!(Either::Left(0).flat_map(checked_div), Either::Right("division by zero"));
    /// ```
    #[inline]
    pub fn flat_map<U, F>(self, function: F) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation on the left value, replacing any right value
    /// that comes out with `right`.
    ///
    /// The tag produced by `function` is preserved; only the contents of a
    /// `Right` are overridden. A `Right` input becomes `Right(right)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let fail = |_: i32| Either::<i32, &str>::Right("low level detail");
    /// assert_eq!(
    ///     Either::Left(1).flat_map_replacing_right(fail, "lookup failed"),
    ///     Either::Right("lookup failed")
    /// );
    ///
    /// let succeed = |n: i32| Either::<i32, &str>::Left(n + 1);
    /// assert_eq!(Either::Left(1).flat_map_replacing_right(succeed, "unused"), Either::Left(2));
    /// ```
    #[inline]
    pub fn flat_map_replacing_right<U, F>(self, function: F, right: R) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(value) => function(value).map_right(|_| right),
            Self::Right(_) => Either::Right(right),
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Eliminates the `Either` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.fold(|x| x.to_string(), |s| s), "42");
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the `Left` and `Right` variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }
}

impl<L, R: Semigroup> Either<L, R> {
    /// Chains a computation on the left value, appending `suffix` to any
    /// right value that comes out.
    ///
    /// Where [`flat_map_replacing_right`](Self::flat_map_replacing_right)
    /// overwrites the right channel, this accumulates into it, which suits
    /// error or log messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::control::Either;
    ///
    /// let parse = |text: String| -> Either<i32, String> {
    ///     Either::new(text.parse().ok(), format!("cannot parse {text:?}"))
    /// };
    ///
    /// let bad: Either<String, String> = Either::Left("x".to_string());
    /// assert_eq!(
    ///     bad.merge_map(parse, " while reading config".to_string()),
    ///     Either::Right("cannot parse \"x\" while reading config".to_string())
    /// );
    ///
    /// let earlier: Either<String, String> = Either::Right("io error".to_string());
    /// assert_eq!(
    ///     earlier.merge_map(parse, "; skipped".to_string()),
    ///     Either::Right("io error; skipped".to_string())
    /// );
    /// ```
    #[inline]
    pub fn merge_map<U, F>(self, function: F, suffix: R) -> Either<U, R>
    where
        F: FnOnce(L) -> Either<U, R>,
    {
        match self {
            Self::Left(value) => function(value).map_right(|right| right.combine(suffix)),
            Self::Right(value) => Either::Right(value.combine(suffix)),
        }
    }
}

/// Builds a `Left` from a present candidate, or a `Right` holding `right`.
///
/// # Examples
///
/// ```rust
/// use fpqueues::control::{Either, left};
///
/// assert_eq!(left(Some(1), "none"), Either::Left(1));
/// assert_eq!(left::<i32, _>(None, "none"), Either::Right("none"));
/// ```
#[inline]
pub fn left<L, R>(value: Option<L>, right: R) -> Either<L, R> {
    Either::new(value, right)
}

/// Builds a `Right` holding `value`.
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

/// Converts a [`Maybe`] into a left-biased [`Either`], using `right` when the
/// value is absent.
#[inline]
pub fn maybe_to_either<L, R>(maybe: Maybe<L>, right: R) -> Either<L, R> {
    maybe.to_either(right)
}

/// Converts an [`Either`] into a [`Maybe`] of its left value.
#[inline]
pub fn either_to_maybe<L, R>(either: Either<L, R>) -> Maybe<L> {
    either.to_maybe()
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left({value})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// Result Conversions
// =============================================================================

impl<L, R> From<Result<L, R>> for Either<L, R> {
    /// `Ok(value)` becomes `Left(value)` and `Err(error)` becomes
    /// `Right(error)`, matching the left bias.
    #[inline]
    fn from(result: Result<L, R>) -> Self {
        match result {
            Ok(value) => Self::Left(value),
            Err(error) => Self::Right(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<L, R> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Ok(value),
            Either::Right(value) => Err(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = L;
    type WithType<B> = Either<B, R>;
}

impl<L, R: Clone> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Either<B, R>
    where
        F: FnOnce(&L) -> B,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value.clone()),
        }
    }
}

impl<L, R: Clone> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<B, R>
    where
        F: FnOnce(L) -> Either<B, R>,
    {
        Self::flat_map(self, function)
    }
}

impl<L, R> Foldable for Either<L, R> {
    #[inline]
    fn fold_left<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(B, L) -> B,
    {
        match self {
            Self::Left(value) => function(init, value),
            Self::Right(_) => init,
        }
    }

    #[inline]
    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(L, B) -> B,
    {
        match self {
            Self::Left(value) => function(value, init),
            Self::Right(_) => init,
        }
    }

    #[inline]
    fn length(&self) -> usize {
        usize::from(self.is_left())
    }
}
