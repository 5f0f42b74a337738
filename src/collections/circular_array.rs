//! Growable circular array (ring buffer).
//!
//! [`CircularArray`] is the storage engine behind every queue in this crate.
//! Live elements occupy the physical slots `front, front + 1, ..., front + len - 1`
//! taken modulo the capacity; every other slot is empty.
//!
//! # Complexity
//!
//! | Operation           | Complexity       |
//! |---------------------|------------------|
//! | `push_front/back`   | O(1) amortized   |
//! | `pop_front/back`    | O(1)             |
//! | `peek_front/back`   | O(1)             |
//! | `get` / `set`       | O(1)             |
//! | `grow` / `compact`  | O(capacity)      |
//!
//! Capacity only shrinks when [`CircularArray::compact`] or
//! [`CircularArray::resize`] is called; popping never reallocates.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::collections::CircularArray;
//!
//! let mut array = CircularArray::with_capacity(2);
//! array.push_back(1);
//! array.push_back(2);
//! array.push_back(3);
//!
//! assert_eq!(array.capacity(), 4);
//! assert_eq!(array.pop_front(), Some(1));
//! assert_eq!(array.iter().copied().collect::<Vec<_>>(), vec![2, 3]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

use crate::error::DataStructureError;
use crate::typeclass::{Foldable, FunctorMut, MonadMut, TypeConstructor};

/// Smallest capacity a circular array ever has.
pub const MINIMUM_CAPACITY: usize = 2;

static_assertions::const_assert!(MINIMUM_CAPACITY >= 2);

/// A double-ended ring buffer that doubles its capacity when full.
///
/// Empty slots are represented internally and never handed out: every
/// accessor returns either a real element or an absent `Option`.
///
/// Equality and hashing look only at the logical sequence of elements, so two
/// arrays with different capacities or offsets compare equal when they hold
/// the same elements in the same order. `Clone` keeps the physical layout.
///
/// # Examples
///
/// ```rust
/// use fpqueues::collections::CircularArray;
///
/// let mut array: CircularArray<i32> = (1..=3).collect();
/// array.push_front(0);
///
/// assert_eq!(array[0], 0);
/// assert_eq!(array.to_string(), "(|0, 1, 2, 3|)");
/// ```
#[derive(Clone)]
pub struct CircularArray<T> {
    slots: Vec<Option<T>>,
    count: usize,
    front: usize,
    rear: usize,
}

impl<T> CircularArray<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates an empty circular array with the minimum capacity.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(MINIMUM_CAPACITY)
    }

    /// Creates an empty circular array with room for `capacity` elements.
    ///
    /// Capacities below the minimum of 2 are rounded up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::CircularArray;
    ///
    /// assert_eq!(CircularArray::<i32>::with_capacity(0).capacity(), 2);
    /// assert_eq!(CircularArray::<i32>::with_capacity(10).capacity(), 10);
    /// ```
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(MINIMUM_CAPACITY);
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            count: 0,
            front: 0,
            rear: capacity - 1,
        }
    }

    // =========================================================================
    // Size and Capacity
    // =========================================================================

    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the array holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if the next push will grow the array.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns the number of slots, live or empty.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the fraction of slots in use, in `[0, 1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::CircularArray;
    ///
    /// let mut array = CircularArray::with_capacity(4);
    /// array.push_back('a');
    /// assert!((array.load_factor() - 0.25).abs() < f64::EPSILON);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    // =========================================================================
    // Push / Pop / Peek
    // =========================================================================

    /// Appends an element at the rear, growing first if the array is full.
    pub fn push_back(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.rear = self.wrap_add(self.rear, 1);
        self.slots[self.rear] = Some(element);
        self.count += 1;
    }

    /// Prepends an element at the front, growing first if the array is full.
    pub fn push_front(&mut self, element: T) {
        if self.is_full() {
            self.grow();
        }
        self.front = self.wrap_sub(self.front, 1);
        self.slots[self.front] = Some(element);
        self.count += 1;
    }

    /// Removes and returns the element at the rear, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let element = self.slots[self.rear].take();
        self.rear = self.wrap_sub(self.rear, 1);
        self.count -= 1;
        element
    }

    /// Removes and returns the element at the front, or `None` if empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let element = self.slots[self.front].take();
        self.front = self.wrap_add(self.front, 1);
        self.count -= 1;
        element
    }

    /// Returns the element at the rear without removing it.
    #[inline]
    #[must_use]
    pub fn peek_back(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.rear].as_ref()
        }
    }

    /// Returns the element at the front without removing it.
    #[inline]
    #[must_use]
    pub fn peek_front(&self) -> Option<&T> {
        if self.is_empty() {
            None
        } else {
            self.slots[self.front].as_ref()
        }
    }

    // =========================================================================
    // Random Access
    // =========================================================================

    /// Returns the element at logical `index`, counted from the front.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::CircularArray;
    /// use fpqueues::DataStructureError;
    ///
    /// let array: CircularArray<i32> = (10..13).collect();
    /// assert_eq!(array.get(2), Ok(&12));
    /// assert_eq!(
    ///     array.get(3),
    ///     Err(DataStructureError::IndexOutOfBounds { index: 3, length: 3 })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<&T, DataStructureError> {
        let position = self.physical_index(index)?;
        self.slots[position]
            .as_ref()
            .ok_or_else(|| DataStructureError::out_of_bounds(index, self.count))
    }

    /// Returns a mutable reference to the element at logical `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, DataStructureError> {
        let position = self.physical_index(index)?;
        let length = self.count;
        self.slots[position]
            .as_mut()
            .ok_or_else(|| DataStructureError::out_of_bounds(index, length))
    }

    /// Replaces the element at logical `index`, returning the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`DataStructureError::IndexOutOfBounds`] if `index >= len()`;
    /// the array is left unchanged.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, DataStructureError> {
        let position = self.physical_index(index)?;
        self.slots[position]
            .replace(element)
            .ok_or_else(|| DataStructureError::out_of_bounds(index, self.count))
    }

    // =========================================================================
    // Capacity Management
    // =========================================================================

    /// Doubles the capacity, moving the elements to the start of storage.
    ///
    /// Called automatically by the push operations when the array is full.
    pub fn grow(&mut self) {
        let old_capacity = self.capacity();
        self.relinearize(old_capacity * 2);
        log::trace!(
            "circular array grew from {old_capacity} to {} slots holding {} elements",
            self.capacity(),
            self.count
        );
    }

    /// Shrinks the capacity to the number of elements, never below 2.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = CircularArray::with_capacity(16);
    /// array.extend([1, 2, 3]);
    /// array.compact();
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn compact(&mut self) {
        let old_capacity = self.capacity();
        self.relinearize(self.count.max(MINIMUM_CAPACITY));
        log::trace!(
            "circular array compacted from {old_capacity} to {} slots",
            self.capacity()
        );
    }

    /// Compacts, then adds `extra` empty slots of headroom.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fpqueues::collections::CircularArray;
    ///
    /// let mut array: CircularArray<i32> = (0..5).collect();
    /// array.resize(3);
    /// assert_eq!(array.capacity(), 8);
    /// assert_eq!(array.len(), 5);
    /// ```
    pub fn resize(&mut self, extra: usize) {
        let old_capacity = self.capacity();
        self.relinearize(self.count.max(MINIMUM_CAPACITY) + extra);
        log::trace!(
            "circular array resized from {old_capacity} to {} slots ({extra} spare requested)",
            self.capacity()
        );
    }

    /// Removes every element, keeping the current capacity.
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.count = 0;
        self.front = 0;
        self.rear = self.capacity() - 1;
    }

    /// Reverses the order of the elements in place.
    pub fn reverse(&mut self) {
        let capacity = self.capacity();
        self.relinearize(capacity);
        self.slots[..self.count].reverse();
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator from front to rear.
    ///
    /// The iterator is double-ended; use `.rev()` to read from rear to front.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> Iter<'_, T> {
        Iter {
            array: self,
            head: 0,
            tail: self.count,
        }
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    #[inline]
    fn wrap_add(&self, position: usize, offset: usize) -> usize {
        (position + offset) % self.capacity()
    }

    #[inline]
    fn wrap_sub(&self, position: usize, offset: usize) -> usize {
        let capacity = self.capacity();
        (position + capacity - offset % capacity) % capacity
    }

    fn physical_index(&self, index: usize) -> Result<usize, DataStructureError> {
        if index < self.count {
            Ok(self.wrap_add(self.front, index))
        } else {
            Err(DataStructureError::out_of_bounds(index, self.count))
        }
    }

    /// Moves the live elements to slots `0..count` of a storage of
    /// `new_capacity` slots.
    fn relinearize(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.count.max(MINIMUM_CAPACITY));
        self.slots.rotate_left(self.front);
        self.slots.truncate(self.count);
        self.slots.resize_with(new_capacity, || None);
        self.front = 0;
        self.rear = (self.count + new_capacity - 1) % new_capacity;
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for CircularArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collects into an array with two spare slots beyond the element count.
impl<T> FromIterator<T> for CircularArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slots: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let count = slots.len();
        let capacity = count + MINIMUM_CAPACITY;
        slots.resize_with(capacity, || None);
        Self {
            slots,
            count,
            front: 0,
            rear: (count + capacity - 1) % capacity,
        }
    }
}

impl<T> Extend<T> for CircularArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> Index<usize> for CircularArray<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> IndexMut<usize> for CircularArray<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T: PartialEq> PartialEq for CircularArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for CircularArray<T> {}

impl<T: Hash> Hash for CircularArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.count.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for CircularArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for CircularArray<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(|")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "|)")
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Borrowing iterator over a [`CircularArray`], front to rear.
pub struct Iter<'a, T> {
    array: &'a CircularArray<T>,
    head: usize,
    tail: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        let position = self.array.wrap_add(self.array.front, self.head);
        self.head += 1;
        self.array.slots[position].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.tail - self.head;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.head == self.tail {
            return None;
        }
        self.tail -= 1;
        let position = self.array.wrap_add(self.array.front, self.tail);
        self.array.slots[position].as_ref()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            array: self.array,
            head: self.head,
            tail: self.tail,
        }
    }
}

/// Owning iterator over a [`CircularArray`], front to rear.
pub struct IntoIter<T> {
    array: CircularArray<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.array.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.array.len(), Some(self.array.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.array.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for CircularArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter { array: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<T> TypeConstructor for CircularArray<T> {
    type Inner = T;
    type WithType<B> = CircularArray<B>;
}

impl<T> FunctorMut for CircularArray<T> {
    fn fmap_mut<B, F>(self, function: F) -> CircularArray<B>
    where
        F: FnMut(T) -> B,
    {
        self.into_iter().map(function).collect()
    }

    fn fmap_ref_mut<B, F>(&self, function: F) -> CircularArray<B>
    where
        F: FnMut(&T) -> B,
    {
        self.iter().map(function).collect()
    }
}

impl<T> MonadMut for CircularArray<T> {
    fn flat_map_mut<B, F>(self, function: F) -> CircularArray<B>
    where
        F: FnMut(T) -> CircularArray<B>,
    {
        self.into_iter().flat_map(function).collect()
    }
}

impl<T> Foldable for CircularArray<T> {
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
        self.count
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CircularArray<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CircularArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> CircularArrayVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CircularArrayVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CircularArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(elements.into_iter().collect())
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CircularArray<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CircularArrayVisitor::new())
    }
}

static_assertions::assert_impl_all!(CircularArray<i32>: Send, Sync, Clone);

// =============================================================================
// Tests
// =============================================================================
