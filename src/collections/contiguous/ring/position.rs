//! Insertion and removal at arbitrary logical indices.
//!
//! Both directions work the same way: decide which side of the position has fewer elements, then
//! slide only that side across the gap. Slides are done in chunks, each of which is a single
//! [`ptr::copy`] that never crosses the end of the Block on either its source or its destination.

use std::mem;
use std::ops::RangeBounds;
use std::ptr;

use super::RingVector;
use super::growth::Side;
use super::index::{self, SplitRange};
use crate::storage::Storage;
#[doc(inline)]
pub use crate::util::error::InsertError;
use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds, ReserveError};
use crate::util::option::OptionExtension;
use crate::util::result::ResultExtension;

impl<T, S: Storage<T>> RingVector<T, S> {
    /// Inserts `value` at `index`, moving whichever side of it is shorter by one slot.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the RingVector, or if the RingVector can't
    /// make room for another element.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = [1, 2, 4, 5].into_iter().collect();
    /// ring.insert(2, 3);
    /// assert_eq!(ring, [1, 2, 3, 4, 5]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking on a failure. The
    /// value is dropped if it can't be inserted.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }

        if index == len {
            self.try_reserve(1)?;
            // SAFETY: One slot has just been reserved on the front side.
            unsafe { self.push_front_unchecked(value) };
        } else if index == 0 {
            self.try_reserve_back(1)?;
            // SAFETY: One slot has just been reserved on the back side.
            unsafe { self.push_back_unchecked(value) };
        } else {
            self.open_gap(index, 1)?;
            // SAFETY: open_gap left the slot at index uninitialized and inside the ring.
            unsafe { self.block.slot(self.to_absolute(index)).write(value) };
        }
        Ok(())
    }

    /// Inserts every item of `values` at `index`, keeping their order. The elements after `index`
    /// (or before it, if there are fewer of them) are moved exactly once.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length of the RingVector, or if the RingVector can't
    /// make room for the new elements.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = "adef".chars().collect();
    /// ring.insert_range(1, "bc".chars());
    /// assert_eq!(ring.iter().collect::<String>(), "abcdef");
    /// ```
    #[track_caller]
    pub fn insert_range<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) {
        self.try_insert_range(index, values).throw()
    }

    /// Inserts every item of `values` at `index`, returning an [`Err`] rather than panicking on a
    /// failure. Nothing is inserted if an [`Err`] is returned.
    pub fn try_insert_range<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<(), InsertError> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len }.into());
        }

        // Gathering the values first means the gap is opened once, at its final size, and no user
        // code runs while the ring has uninitialized slots inside it.
        let mut staged: RingVector<T> = values.into_iter().collect();
        let count = staged.len();
        self.open_gap(index, count)?;

        for offset in 0..count {
            // SAFETY: staged holds exactly count elements.
            let value = unsafe { staged.pop_back().unreachable() };
            // SAFETY: open_gap left the slots from index to index + count uninitialized.
            unsafe { self.block.slot(self.to_absolute(index + offset)).write(value) };
        }
        Ok(())
    }

    /// Removes the element at `index` and returns it, closing the gap from the shorter side.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = (0..5).collect();
    /// assert_eq!(ring.remove(3), 3);
    /// assert_eq!(ring, [0, 1, 2, 4]);
    /// ```
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] rather than panicking if
    /// `index` is out of bounds.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let slot = self.checked_slot(index)?;
        // SAFETY: The slot holds a live element, which close_gap forgets about without dropping.
        let value = unsafe { slot.read() };
        // SAFETY: The slot at index was just moved out of.
        unsafe { self.close_gap(index, 1) };
        Ok(value)
    }

    /// Drops every element in `range`.
    ///
    /// # Panics
    /// Panics if `range` is out of bounds of the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = (0..8).collect();
    /// ring.remove_range(2..5);
    /// assert_eq!(ring, [0, 1, 5, 6, 7]);
    /// ring.remove_range(..=1);
    /// assert_eq!(ring, [5, 6, 7]);
    /// ```
    #[track_caller]
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) {
        self.try_remove_range(range).throw()
    }

    /// Drops every element in `range`, returning an [`Err`] rather than panicking if `range` is out
    /// of bounds.
    pub fn try_remove_range<R: RangeBounds<usize>>(
        &mut self,
        range: R,
    ) -> Result<(), RangeOutOfBounds> {
        let len = self.len();
        let range = index::check_range(range, len)?;
        let count = range.len();

        if range.start == 0 {
            return self.try_remove_back(count);
        }
        if range.end == len {
            return self.try_remove_front(count);
        }

        let split = SplitRange::new(self.tail, self.cap(), range.start, count);
        let head_virtual = self.head_virtual;
        // If a destructor panics, everything from the range onwards is leaked rather than dropped
        // twice.
        self.head_virtual = self.tail + range.start;
        // SAFETY: The slots in split hold live elements that the ring no longer counts.
        unsafe { self.drop_slots(split) };
        self.head_virtual = head_virtual;
        // SAFETY: Every slot of the range has just been dropped.
        unsafe { self.close_gap(range.start, count) };
        Ok(())
    }

    /// Swaps the elements at indices `a` and `b`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds of the RingVector.
    #[track_caller]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.try_swap(a, b).throw()
    }

    /// Swaps the elements at indices `a` and `b`, returning an [`Err`] rather than panicking if
    /// either index is out of bounds.
    pub fn try_swap(&mut self, a: usize, b: usize) -> Result<(), IndexOutOfBounds> {
        let a = self.checked_slot(a)?;
        let b = self.checked_slot(b)?;
        // SAFETY: Both slots hold live elements. ptr::swap allows them to be the same slot.
        unsafe { ptr::swap(a, b) };
        Ok(())
    }

    /// Replaces the element at `index` with `value`, returning the old element.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RingVector.
    #[track_caller]
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Replaces the element at `index` with `value`, returning the old element or an [`Err`] if
    /// `index` is out of bounds.
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.try_get_mut(index)?, value))
    }

    /// Makes room for `count` uninitialized slots at logical `index`, moving whichever side of
    /// `index` has fewer elements. The gap is counted as part of the ring afterwards, so the caller
    /// must fill it before anything else can observe the ring.
    pub(crate) fn open_gap(&mut self, index: usize, count: usize) -> Result<(), ReserveError> {
        debug_assert!(index <= self.len());
        if count == 0 {
            return Ok(());
        }

        let len = self.len();
        if index < len - index {
            self.reserve_side(Side::Back, count)?;
            let old_tail = self.tail;
            self.tail = index::wrap_back(old_tail, count, self.cap());
            self.head_virtual = self.tail + len + count;
            // SAFETY: The back side has room for count more slots, which the first index elements
            // are moved into.
            unsafe { self.slide_back(old_tail, count, index) };
        } else {
            self.reserve_side(Side::Front, count)?;
            let src = self.to_absolute(index);
            // SAFETY: The front side has room for count more slots, which the last len - index
            // elements are moved into.
            unsafe { self.slide_front(src, count, len - index) };
            self.head_virtual += count;
        }
        Ok(())
    }

    /// Removes `count` slots at logical `index` from the ring, moving whichever side of them has
    /// fewer elements.
    ///
    /// # Safety
    /// The slots must no longer hold values that need dropping, either because they were moved
    /// out or already dropped.
    pub(crate) unsafe fn close_gap(&mut self, index: usize, count: usize) {
        debug_assert!(index + count <= self.len());
        let after = self.len() - index - count;

        if index <= after {
            // SAFETY: The first index elements are moved onto the gap, freeing count slots at the
            // tail.
            unsafe { self.slide_front(self.tail, count, index) };
            self.advance_tail(count);
        } else {
            let src = self.to_absolute(index + count);
            // SAFETY: The last after elements are moved onto the gap, freeing count slots at the
            // head.
            unsafe { self.slide_back(src, count, after) };
            self.head_virtual -= count;
            self.normalize_if_empty();
        }
    }

    /// Moves the `count` values starting at absolute slot `src` towards the start of the Block by
    /// `by` slots, wrapping around slot 0 where needed.
    ///
    /// # Safety
    /// `count + by` must be no greater than the capacity and the destination slots not covered by
    /// the source must hold nothing that needs dropping.
    unsafe fn slide_back(&mut self, src: usize, by: usize, count: usize) {
        let cap = self.cap();
        let dst = index::wrap_back(src, by, cap);
        let mut done = 0;

        // Lowest logical position first, so no source is overwritten before it has been read.
        while done < count {
            let s = index::wrap(src + done, cap);
            let d = index::wrap(dst + done, cap);
            let n = (count - done).min(cap - s).min(cap - d);
            // SAFETY: Both runs are within the Block and ptr::copy tolerates overlap.
            unsafe { ptr::copy(self.block.slot(s).cast_const(), self.block.slot(d), n) };
            done += n;
        }
    }

    /// Moves the `count` values starting at absolute slot `src` towards the end of the Block by
    /// `by` slots, wrapping past the last slot where needed.
    ///
    /// # Safety
    /// As for [`slide_back`](RingVector::slide_back).
    unsafe fn slide_front(&mut self, src: usize, by: usize, count: usize) {
        let cap = self.cap();
        let mut left = count;

        // Highest logical position first, for the same reason as slide_back.
        while left > 0 {
            let s_end = index::wrap(src + left - 1, cap) + 1;
            let d_end = index::wrap(src + by + left - 1, cap) + 1;
            let n = left.min(s_end).min(d_end);
            // SAFETY: Both runs end within the Block and ptr::copy tolerates overlap.
            unsafe {
                ptr::copy(self.block.slot(s_end - n).cast_const(), self.block.slot(d_end - n), n)
            };
            left -= n;
        }
    }
}
