//! # fpqueues
//!
//! Functional-style queues and containers for Rust.
//!
//! ## Overview
//!
//! - **Collections**: a growable [`CircularArray`](collections::CircularArray)
//!   ring buffer and the queues built on it: a double-ended
//!   [`Deque`](collections::Deque), a [`FifoQueue`](collections::FifoQueue),
//!   a [`LifoQueue`](collections::LifoQueue), plus a fixed-size
//!   [`ConstantLengthArray`](collections::ConstantLengthArray)
//! - **Control Structures**: [`Maybe`](control::Maybe) for optional values and
//!   a left-biased [`Either`](control::Either)
//! - **Type Classes**: Functor, Monad, Foldable and Semigroup traits shared by
//!   all of the above
//! - **Interleaving**: round-robin [`merge`](interleave::merge) and
//!   [`exhaust`](interleave::exhaust) over several iterators
//!
//! Absent values never enter a collection: APIs that accept
//! [`Maybe`](control::Maybe) or `Option` values silently skip `Nothing`.
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: `Maybe` and `Either`
//! - `collections`: The ring buffer and the queues
//! - `serde`: Serialization support
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fpqueues::prelude::*;
//!
//! let mut deque: Deque<i32> = Deque::new();
//! deque.push_back_all([Some(1), None, Some(2)]);
//! deque.push_front(0);
//!
//! assert_eq!(deque.to_string(), ">< 0 | 1 | 2 ><");
//! assert_eq!(deque.pop_back(), Maybe::Some(2));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fpqueues::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::DataStructureError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "collections")]
    pub use crate::collections::*;
}

pub mod error;
pub mod interleave;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "collections")]
pub mod collections;

pub use error::DataStructureError;
