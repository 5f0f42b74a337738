//! Round-robin interleaving of several iterators.
//!
//! Both adapters visit their sources in order, taking one element from each
//! in turn. They differ in what happens when a source runs dry:
//!
//! - [`Merge`] stops as soon as any source is exhausted. A round that cannot
//!   be completed is dropped entirely, so the output length is always
//!   `sources * shortest`.
//! - [`Exhaust`] drops the exhausted source and keeps cycling through the
//!   others until every source is exhausted. No element is lost.
//!
//! # Examples
//!
//! ```rust
//! use fpqueues::interleave::{exhaust, merge};
//!
//! let merged: Vec<i32> = merge(vec![vec![1, 2, 3], vec![10, 20]]).collect();
//! assert_eq!(merged, vec![1, 10, 2, 20]);
//!
//! let exhausted: Vec<i32> = exhaust(vec![vec![1, 2, 3], vec![10, 20]]).collect();
//! assert_eq!(exhausted, vec![1, 10, 2, 20, 3]);
//! ```

use std::iter::FusedIterator;

use smallvec::SmallVec;

/// Inline capacity for the list of sources. Most merges combine only a
/// handful of streams.
const INLINE_SOURCES: usize = 4;

/// Creates a [`Merge`] over the given sources.
pub fn merge<I>(sources: I) -> Merge<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Merge {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        round: SmallVec::new().into_iter(),
        finished: false,
    }
}

/// Creates an [`Exhaust`] over the given sources.
pub fn exhaust<I>(sources: I) -> Exhaust<<I::Item as IntoIterator>::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    Exhaust {
        sources: sources.into_iter().map(IntoIterator::into_iter).collect(),
        position: 0,
    }
}

/// Round-robin merge that stops when the first source is exhausted.
///
/// Created by [`merge`].
pub struct Merge<I: Iterator> {
    sources: SmallVec<[I; INLINE_SOURCES]>,
    round: smallvec::IntoIter<[I::Item; INLINE_SOURCES]>,
    finished: bool,
}

impl<I: Iterator> Iterator for Merge<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(item) = self.round.next() {
            return Some(item);
        }
        if self.finished || self.sources.is_empty() {
            return None;
        }

        let mut round = SmallVec::with_capacity(self.sources.len());
        for source in &mut self.sources {
            if let Some(item) = source.next() {
                round.push(item);
            } else {
                self.finished = true;
                return None;
            }
        }
        self.round = round.into_iter();
        self.round.next()
    }
}

impl<I: Iterator> FusedIterator for Merge<I> {}

/// Round-robin merge that continues until every source is exhausted.
///
/// Created by [`exhaust`].
pub struct Exhaust<I> {
    sources: SmallVec<[I; INLINE_SOURCES]>,
    position: usize,
}

impl<I: Iterator> Iterator for Exhaust<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.sources.is_empty() {
            if self.position >= self.sources.len() {
                self.position = 0;
            }
            if let Some(item) = self.sources[self.position].next() {
                self.position += 1;
                return Some(item);
            }
            self.sources.remove(self.position);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut low = 0_usize;
        let mut high = Some(0_usize);
        for source in &self.sources {
            let (source_low, source_high) = source.size_hint();
            low = low.saturating_add(source_low);
            high = match (high, source_high) {
                (Some(total), Some(extra)) => total.checked_add(extra),
                _ => None,
            };
        }
        (low, high)
    }
}

impl<I: Iterator> FusedIterator for Exhaust<I> {}
