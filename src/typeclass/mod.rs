//! Type class traits shared by every container in this crate.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`] / [`FunctorMut`]: mapping over one value / every element
//! - [`Monad`] / [`MonadMut`]: sequencing, including the round-robin
//!   `merge_map_mut` and `exhaust_map_mut` combinators
//! - [`Foldable`]: reducing a structure to a summary value
//! - [`Semigroup`]: associative combination, used for accumulating the right
//!   channel of an [`Either`](crate::control::Either)
//!
//! These traits provide the default functional vocabulary (`map`,
//! `flat_map`, `merge_map`, `exhaust_map`, `reduce`, `accumulate`) once, so
//! that each data structure only implements the primitive pieces.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::collections::Deque;
//! use fpqueues::typeclass::{Foldable, FunctorMut};
//!
//! let deque: Deque<i32> = [1, 2, 3].into_iter().collect();
//! let squares = deque.fmap_mut(|n| n * n);
//! assert_eq!(squares.fold_left(0, |total, n| total + n), 14);
//! ```

mod foldable;
mod functor;
mod higher;
mod monad;
mod semigroup;

pub use foldable::Foldable;
pub use functor::{Functor, FunctorMut};
pub use higher::TypeConstructor;
pub use monad::{Monad, MonadMut};
pub use semigroup::Semigroup;
