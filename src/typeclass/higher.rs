//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Deque<_>` directly.
//! The [`TypeConstructor`] trait works around this with a generic associated
//! type, which lets [`Functor`](super::Functor) and friends describe
//! "the same container, holding a different element type".
//!
//! # Example
//!
//! ```rust
//! use fpqueues::collections::Deque;
//! use fpqueues::typeclass::TypeConstructor;
//!
//! fn rebuild<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let numbers: Deque<i32> = [1, 2, 3].into_iter().collect();
//! let strings: Deque<String> = rebuild(numbers);
//! assert!(strings.is_empty());
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: the element type the constructor is currently applied to.
/// - `WithType<B>`: the same constructor applied to `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` is `F` itself.
///
/// Single-value containers (`Maybe`, `Either`) and the mutable collections in
/// [`crate::collections`] implement this trait next to their definitions.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}
