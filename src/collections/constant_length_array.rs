//! Fixed-length array with fill-on-construction.
//!
//! A [`ConstantLengthArray`] keeps the length it was built with. Operations
//! that would change it ([`ConstantLengthArray::set_length`]) are explicit and
//! take a fill value for any new slots.
//!
//! Arrays are created through [`ConstantLengthArrayBuilder`]. The builder
//! takes the initial data, an optional signed target length and at least one
//! fill source used to pad the data up to that length:
//!
//! - a positive length pads (or truncates) at the end,
//! - a negative length pads (or truncates) at the start,
//! - fill elements are drawn from the fill iterator first, then the fill
//!   value is repeated forever.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::collections::ConstantLengthArray;
//!
//! let padded = ConstantLengthArray::builder()
//!     .data([Some(1), None, Some(2)])
//!     .length(-5)
//!     .fill_value(0)
//!     .build()?;
//! assert_eq!(padded.to_string(), "[|0, 0, 0, 1, 2|]");
//!
//! let truncated = ConstantLengthArray::builder()
//!     .data([Some(1), Some(2), Some(3)])
//!     .length(2)
//!     .fill_value(0)
//!     .build()?;
//! assert_eq!(truncated.to_string(), "[|1, 2|]");
//! # Ok::<(), fpqueues::DataStructureError>(())
//! ```

use std::fmt;
use std::ops::{Add, Index, IndexMut};

use super::circular_array::{self, CircularArray};
use crate::control::Maybe;
use crate::error::DataStructureError;
use crate::typeclass::{Foldable, FunctorMut, TypeConstructor};

/// An array whose length does not change unless explicitly requested.
///
/// Absent values are never stored: the builder drops them from the initial
/// data and pads with fill elements instead.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ConstantLengthArray<T> {
    buffer: CircularArray<T>,
}

/// Builder for [`ConstantLengthArray`].
///
/// At least one of [`fill_iterator`](Self::fill_iterator) and
/// [`fill_value`](Self::fill_value) must be given, even if no padding turns
/// out to be needed.
pub struct ConstantLengthArrayBuilder<'a, T> {
    data: Vec<T>,
    length: Option<isize>,
    fill_iterator: Option<Box<dyn Iterator<Item = T> + 'a>>,
    fill_value: Option<T>,
}

impl<'a, T> ConstantLengthArrayBuilder<'a, T> {
    /// Appends initial data; absent values are skipped.
    #[must_use]
    pub fn data<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Maybe<T>>,
    {
        self.data.extend(
            values
                .into_iter()
                .filter_map(|value| value.into().into_option()),
        );
        self
    }

    /// Sets the target length.
    ///
    /// The sign selects the side that is padded or truncated: positive acts
    /// on the end, negative on the start. Without a target length the array
    /// keeps the length of its data.
    #[must_use]
    pub const fn length(mut self, length: isize) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets an iterator whose elements are used for padding first.
    #[must_use]
    pub fn fill_iterator<I>(mut self, fill: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        self.fill_iterator = Some(Box::new(fill.into_iter()));
        self
    }

    /// Sets the value used for padding once the fill iterator, if any, runs
    /// out.
    #[must_use]
    pub fn fill_value(mut self, value: T) -> Self {
        self.fill_value = Some(value);
        self
    }

    /// Builds the array.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::InvalidConfiguration`] if neither a fill
    /// iterator nor a fill value was given, or if the fill iterator runs out
    /// before the target length is reached and there is no fill value.
    pub fn build(self) -> Result<ConstantLengthArray<T>, DataStructureError>
    where
        T: Clone,
    {
        let Self {
            data,
            length,
            mut fill_iterator,
            fill_value,
        } = self;

        if fill_iterator.is_none() && fill_value.is_none() {
            return Err(DataStructureError::invalid_configuration(
                "a fill iterator or a fill value is required",
            ));
        }

        let mut buffer: CircularArray<T> = data.into_iter().collect();
        if let Some(length) = length {
            let next_fill = || {
                fill_iterator
                    .as_mut()
                    .and_then(Iterator::next)
                    .or_else(|| fill_value.clone())
            };
            adjust_length(&mut buffer, length, next_fill)?;
        }
        Ok(ConstantLengthArray { buffer })
    }
}

/// Pads or truncates `buffer` to `length.unsigned_abs()` elements, acting on
/// the end for positive lengths and on the start for negative ones.
fn adjust_length<T, F>(
    buffer: &mut CircularArray<T>,
    length: isize,
    mut next_fill: F,
) -> Result<(), DataStructureError>
where
    F: FnMut() -> Option<T>,
{
    let current = buffer.len();
    let target = length.unsigned_abs();
    let at_start = length < 0;
    let side = if at_start { "start" } else { "end" };

    if target > current {
        log::debug!(
            "padding constant length array from {current} to {target} elements at the {side}"
        );
        for _ in current..target {
            let element = next_fill().ok_or(DataStructureError::invalid_configuration(
                "the fill iterator ran out before the requested length was reached",
            ))?;
            if at_start {
                buffer.push_front(element);
            } else {
                buffer.push_back(element);
            }
        }
    } else if target < current {
        log::debug!(
            "truncating constant length array from {current} to {target} elements at the {side}"
        );
        for _ in target..current {
            if at_start {
                buffer.pop_front();
            } else {
                buffer.pop_back();
            }
        }
    }
    Ok(())
}

impl<T> ConstantLengthArray<T> {
    /// Starts building an array.
    #[must_use]
    pub fn builder<'a>() -> ConstantLengthArrayBuilder<'a, T> {
        ConstantLengthArrayBuilder {
            data: Vec::new(),
            length: None,
            fill_iterator: None,
            fill_value: None,
        }
    }

    /// Returns the length.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the array has length zero.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, DataStructureError> {
        self.buffer.get(index)
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DataStructureError> {
        self.buffer.get_mut(index)
    }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, element: T) -> Result<T, DataStructureError> {
        self.buffer.set(index, element)
    }

    /// Pads with `fill` or truncates to `length.unsigned_abs()` elements.
    ///
    /// A positive length acts on the end, a negative one on the start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::ConstantLengthArray;
    ///
    /// let mut array: ConstantLengthArray<i32> = (1..=3).collect();
    /// array.set_length(-2, 0);
    /// assert_eq!(array.to_string(), "[|2, 3|]");
    /// array.set_length(4, 0);
    /// assert_eq!(array.to_string(), "[|2, 3, 0, 0|]");
    /// ```
    pub fn set_length(&mut self, length: isize, fill: T)
    where
        T: Clone,
    {
        let result = adjust_length(&mut self.buffer, length, || Some(fill.clone()));
        debug_assert!(result.is_ok());
    }

    /// Reverses the elements in place.
    #[inline]
    pub fn reverse(&mut self) {
        self.buffer.reverse();
    }

    /// Returns an iterator over the elements.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> circular_array::Iter<'_, T> {
        self.buffer.iter()
    }

    /// Builds an array of the same length by applying `function` to every
    /// element.
    pub fn map<U, F>(&self, function: F) -> ConstantLengthArray<U>
    where
        F: FnMut(&T) -> U,
    {
        self.iter().map(function).collect()
    }

    /// Adds two arrays element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::SizeMismatch`] if the lengths differ.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::ConstantLengthArray;
    /// use fpqueues::DataStructureError;
    ///
    /// let left: ConstantLengthArray<i32> = [1, 2].into_iter().collect();
    /// let right: ConstantLengthArray<i32> = [10, 20].into_iter().collect();
    /// assert_eq!(left.clone().try_add(right)?.to_string(), "[|11, 22|]");
    ///
    /// let short: ConstantLengthArray<i32> = [1].into_iter().collect();
    /// assert_eq!(
    ///     left.try_add(short),
    ///     Err(DataStructureError::SizeMismatch { left: 2, right: 1 })
    /// );
    /// # Ok::<(), DataStructureError>(())
    /// ```
    pub fn try_add<U>(
        self,
        other: ConstantLengthArray<U>,
    ) -> Result<ConstantLengthArray<T::Output>, DataStructureError>
    where
        T: Add<U>,
    {
        if self.len() != other.len() {
            return Err(DataStructureError::SizeMismatch {
                left: self.len(),
                right: other.len(),
            });
        }
        Ok(self
            .into_iter()
            .zip(other)
            .map(|(left, right)| left + right)
            .collect())
    }
}

/// Collects the elements as they come, with no padding.
impl<T> FromIterator<T> for ConstantLengthArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            buffer: iter.into_iter().collect(),
        }
    }
}

impl<T> Index<usize> for ConstantLengthArray<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.buffer[index]
    }
}

impl<T> IndexMut<usize> for ConstantLengthArray<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buffer[index]
    }
}

impl<T> IntoIterator for ConstantLengthArray<T> {
    type Item = T;
    type IntoIter = circular_array::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.buffer.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ConstantLengthArray<T> {
    type Item = &'a T;
    type IntoIter = circular_array::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for ConstantLengthArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for ConstantLengthArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[|")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "|]")
    }
}

impl<T> TypeConstructor for ConstantLengthArray<T> {
    type Inner = T;
    type WithType<B> = ConstantLengthArray<B>;
}

impl<T> FunctorMut for ConstantLengthArray<T> {
    fn fmap_mut<B, F>(self, function: F) -> ConstantLengthArray<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> ConstantLengthArray<B>
    where
        F: FnMut(&T) -> B,
    {
        self.map(function)
    }
}

impl<T> Foldable for ConstantLengthArray<T> {
    fn fold_left<B, F>(self, init: B, function: F) -> B
    where
        F: FnMut(B, T) -> B,
    {
        self.into_iter().fold(init, function)
    }

    fn fold_right<B, F>(self, init: B, mut function: F) -> B
    where
        F: FnMut(T, B) -> B,
    {
        self.into_iter()
            .rev()
            .fold(init, |accumulator, element| function(element, accumulator))
    }

    #[inline]
    fn length(&self) -> usize {
        self.len()
    }
}
