use std::cmp::Ordering;
use std::ops::{Range, RangeBounds};

use super::RingVector;
use super::index::{self, SplitRange};
use crate::storage::Storage;
use crate::util::result::ResultExtension;

impl<T, S: Storage<T>> RingVector<T, S> {
    /// Returns the logical index of the first element in `range` that is equal to `item`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let ring: RingVector<_> = [3, 1, 4, 1, 5].into_iter().collect();
    /// assert_eq!(ring.index_of(.., &1), Some(1));
    /// assert_eq!(ring.index_of(2.., &1), Some(3));
    /// assert_eq!(ring.index_of(.., &9), None);
    /// ```
    #[track_caller]
    pub fn index_of<R: RangeBounds<usize>>(&self, range: R, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.index_of_by(range, |value| value == item)
    }

    /// Returns the logical index of the first element in `range` that matches `pred`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    #[track_caller]
    pub fn index_of_by<R, F>(&self, range: R, mut pred: F) -> Option<usize>
    where
        R: RangeBounds<usize>,
        F: FnMut(&T) -> bool,
    {
        let (_, split) = self.split(range);
        let (primary, wrapped) = self.runs(&split);

        if let Some(pos) = primary.iter().position(&mut pred) {
            return Some(self.to_logical(split.primary.start + pos));
        }
        let pos = wrapped.iter().position(pred)?;
        Some(self.to_logical(split.wrapped.start + pos))
    }

    /// Returns the logical index of the last element in `range` that is equal to `item`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    #[track_caller]
    pub fn last_index_of<R: RangeBounds<usize>>(&self, range: R, item: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.last_index_of_by(range, |value| value == item)
    }

    /// Returns the logical index of the last element in `range` that matches `pred`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    #[track_caller]
    pub fn last_index_of_by<R, F>(&self, range: R, mut pred: F) -> Option<usize>
    where
        R: RangeBounds<usize>,
        F: FnMut(&T) -> bool,
    {
        let (_, split) = self.split(range);
        let (primary, wrapped) = self.runs(&split);

        if let Some(pos) = wrapped.iter().rposition(&mut pred) {
            return Some(self.to_logical(split.wrapped.start + pos));
        }
        let pos = primary.iter().rposition(pred)?;
        Some(self.to_logical(split.primary.start + pos))
    }

    /// Returns true if any element of the RingVector is equal to `item`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        let (primary, wrapped) = self.as_slices();
        primary.contains(item) || wrapped.contains(item)
    }

    /// Binary searches a sorted `range` for `item`.
    ///
    /// Returns [`Ok`] with the logical index of a matching element, or [`Err`] with the logical
    /// index where `item` could be inserted to keep the range sorted. If several elements match,
    /// any one of them may be returned.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::fixed(6);
    /// ring.extend([30, 40, 50]);
    /// ring.push_back(20);
    /// ring.push_back(10);
    /// assert!(ring.is_wrapped());
    ///
    /// assert_eq!(ring.binary_search(.., &10), Ok(0));
    /// assert_eq!(ring.binary_search(.., &40), Ok(3));
    /// assert_eq!(ring.binary_search(.., &25), Err(2));
    /// assert_eq!(ring.binary_search(.., &99), Err(5));
    /// ```
    #[track_caller]
    pub fn binary_search<R: RangeBounds<usize>>(&self, range: R, item: &T) -> Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_by(range, |value| value.cmp(item))
    }

    /// Binary searches a sorted `range` with a key extraction function. See
    /// [`binary_search`](RingVector::binary_search).
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    #[track_caller]
    pub fn binary_search_by_key<R, K, F>(&self, range: R, key: &K, mut f: F) -> Result<usize, usize>
    where
        R: RangeBounds<usize>,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.binary_search_by(range, |value| f(value).cmp(key))
    }

    /// Binary searches a sorted `range` with a comparator, which returns the ordering of each
    /// element relative to the target. See [`binary_search`](RingVector::binary_search).
    ///
    /// The primary and wrapped runs are searched separately, the wrapped one only if the target
    /// doesn't land inside the primary one.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    #[track_caller]
    pub fn binary_search_by<R, F>(&self, range: R, mut f: F) -> Result<usize, usize>
    where
        R: RangeBounds<usize>,
        F: FnMut(&T) -> Ordering,
    {
        let (range, split) = self.split(range);
        let (primary, wrapped) = self.runs(&split);

        match primary.binary_search_by(&mut f) {
            Ok(pos) => return Ok(self.to_logical(split.primary.start + pos)),
            Err(pos) if pos < primary.len() => return Err(range.start + pos),
            Err(_) => (),
        }
        match wrapped.binary_search_by(f) {
            Ok(pos) => Ok(self.to_logical(split.wrapped.start + pos)),
            Err(pos) => Err(range.start + primary.len() + pos),
        }
    }

    /// Resolves `range` into logical indices and the absolute runs they cover.
    #[track_caller]
    fn split<R: RangeBounds<usize>>(&self, range: R) -> (Range<usize>, SplitRange) {
        let range = index::check_range(range, self.len()).throw();
        let split = SplitRange::new(self.tail, self.cap(), range.start, range.len());
        (range, split)
    }

    fn runs(&self, split: &SplitRange) -> (&[T], &[T]) {
        debug_assert!(split.len() <= self.len());
        // SAFETY: split always comes from a checked range of live elements.
        unsafe { (self.slice(split.primary.clone()), self.slice(split.wrapped.clone())) }
    }
}
