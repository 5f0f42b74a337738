//! Error types for the data structures in this crate.
//!
//! Running out of data is not an error here: popping or peeking an empty
//! structure yields [`Maybe::Nothing`](crate::control::Maybe). The errors in
//! this module are reserved for programmer misuse, such as indexing past the
//! end of a structure, and for constructions that cannot be satisfied.

use std::fmt;

/// Represents the errors that the data structures in this crate can report.
///
/// # Examples
///
/// ```rust
/// use fpqueues::DataStructureError;
///
/// let error = DataStructureError::IndexOutOfBounds { index: 5, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "index out of bounds: index 5 is not below length 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataStructureError {
    /// An explicit index fell outside `0..length`.
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of elements stored when the access happened.
        length: usize,
    },
    /// A structure was configured in a way that cannot be satisfied.
    InvalidConfiguration {
        /// A short description of what was missing or inconsistent.
        reason: &'static str,
    },
    /// Two fixed length structures were combined element-wise but their
    /// lengths differ.
    SizeMismatch {
        /// Length of the left hand side.
        left: usize,
        /// Length of the right hand side.
        right: usize,
    },
}

impl DataStructureError {
    /// Builds an [`IndexOutOfBounds`](Self::IndexOutOfBounds) error.
    #[inline]
    pub(crate) const fn out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Builds an [`InvalidConfiguration`](Self::InvalidConfiguration) error.
    #[inline]
    pub(crate) const fn invalid_configuration(reason: &'static str) -> Self {
        Self::InvalidConfiguration { reason }
    }
}

impl fmt::Display for DataStructureError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length: 0 } => write!(
                formatter,
                "index out of bounds: index {index} requested from an empty data structure"
            ),
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index out of bounds: index {index} is not below length {length}"
            ),
            Self::InvalidConfiguration { reason } => {
                write!(formatter, "invalid configuration: {reason}")
            }
            Self::SizeMismatch { left, right } => write!(
                formatter,
                "size mismatch: left hand side has length {left} but right hand side has length {right}"
            ),
        }
    }
}

impl std::error::Error for DataStructureError {}
