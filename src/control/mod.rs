//! Optional and alternative values.
//!
//! - [`Maybe`]: a value that may be absent
//! - [`Either`]: a left-biased union of a primary and an alternate value
//!
//! Both plug into the type classes in [`crate::typeclass`] and convert into
//! each other via [`maybe_to_either`] and [`either_to_maybe`].

mod either;
mod maybe;

pub use either::{Either, either_to_maybe, left, maybe_to_either, right};
pub use maybe::Maybe;
