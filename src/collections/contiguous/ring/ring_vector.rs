use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Index, IndexMut, Range};
use std::ptr;
use std::slice;

use log::debug;

use super::index::{self, SplitRange};
use super::{Growth, Iter, IterMut};
use crate::collections::contiguous::Block;
use crate::storage::{Heap, Storage};
#[doc(inline)]
pub use crate::util::error::{IndexOutOfBounds, RangeOutOfBounds};
use crate::util::result::ResultExtension;

/// A double-ended, growable collection stored in a single [`Block`] that is addressed with
/// wraparound arithmetic, so that elements can be added or removed at either end without moving
/// the rest.
///
/// # Layout
/// Two cursors describe which slots are live:
/// - `tail`: the absolute slot of the element at logical index `0`.
/// - `head_virtual`: `tail + len`, never reduced modulo the capacity. Once it passes the end of
///   the Block, the live elements continue from slot `0` and the ring is said to be wrapped.
///
/// Logical index `i` therefore lives in slot `(tail + i) % cap`.
///
/// The two ends are named after the cursors that move when they change: the **front** is the high
/// end (logical index `len - 1`, grown through `head_virtual`) and the **back** is the low end
/// (logical index `0`, grown through `tail`). So [`push_front`](RingVector::push_front) appends and
/// [`push_back`](RingVector::push_back) prepends, as far as logical indices are concerned.
///
/// # Storage
/// Blocks come from a [`Storage`] provider chosen at construction, [`Heap`] unless stated
/// otherwise. How the ring grows once its Block is full is decided by its [`Growth`] policy.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the RingVector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items being inserted or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_front/back` | `O(1)`*, `O(n)` |
/// | `pop_front/back` | `O(1)` |
/// | `remove_front/back` | `O(m)` |
/// | `insert` | `O(min(i, n-i))`*, `O(n)` |
/// | `insert_range` | `O(m + min(i, n-i))`*, `O(n+m)` |
/// | `remove` | `O(min(i, n-i))` |
/// | `remove_range` | `O(m + min(i, n-i-m))` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `index_of` | `O(n)` |
/// | `binary_search` | `O(log n)` |
///
/// \* If the RingVector doesn't have room for the new elements, it is reshaped in `O(n)`.
///
/// \** If the RingVector has room for the additional elements already, `reserve` is `O(1)`.
pub struct RingVector<T, S: Storage<T> = Heap> {
    pub(crate) block: Block<T>,
    pub(crate) tail: usize,
    pub(crate) head_virtual: usize,
    pub(crate) growth: Growth,
    pub(crate) storage: S,
}

impl<T> RingVector<T> {
    /// Creates a new RingVector with length and capacity 0. Memory will be allocated when the
    /// first element is added.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let ring: RingVector<u8> = RingVector::new();
    /// assert_eq!(ring.len(), 0);
    /// assert_eq!(ring.cap(), 0);
    /// ```
    pub const fn new() -> RingVector<T> {
        Self::new_in(Heap)
    }

    /// Creates a new RingVector with capacity exactly equal to the provided value.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let ring: RingVector<u8> = RingVector::with_cap(5);
    /// assert_eq!(ring.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> RingVector<T> {
        Self::with_cap_in(cap, Heap)
    }

    /// Creates an empty RingVector that adopts `block` as its storage.
    pub const fn from_block(block: Block<T>) -> RingVector<T> {
        Self::from_block_in(block, Heap)
    }

    /// Creates a RingVector of exactly `cap` slots that never reallocates. See [`Growth::Fixed`].
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::fixed(2);
    /// assert_eq!(ring.try_push_front('a'), Ok(()));
    /// assert_eq!(ring.try_push_front('b'), Ok(()));
    /// assert_eq!(ring.try_push_front('c'), Err('c'));
    /// ```
    pub fn fixed(cap: usize) -> RingVector<T> {
        Self::with_cap(cap).with_growth(Growth::Fixed)
    }
}

impl<T, S: Storage<T>> RingVector<T, S> {
    /// Creates a new, unallocated RingVector that will take its storage from `storage`.
    pub const fn new_in(storage: S) -> RingVector<T, S> {
        Self::from_block_in(Block::empty(), storage)
    }

    /// Creates a new RingVector with a Block of at least `cap` slots from `storage`.
    pub fn with_cap_in(cap: usize, mut storage: S) -> RingVector<T, S> {
        let block = storage.acquire(cap);
        Self::from_block_in(block, storage)
    }

    /// Creates an empty RingVector that adopts `block` as its storage. The Block will eventually be
    /// released to `storage`.
    pub const fn from_block_in(block: Block<T>, storage: S) -> RingVector<T, S> {
        RingVector {
            block,
            tail: 0,
            head_virtual: 0,
            growth: Growth::Exponential,
            storage,
        }
    }

    /// Replaces the growth policy of the RingVector.
    pub const fn with_growth(mut self, growth: Growth) -> RingVector<T, S> {
        self.growth = growth;
        self
    }

    /// Returns the length of the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let ring: RingVector<_> = (1_u8..=3).collect();
    /// assert_eq!(ring.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.head_virtual - self.tail
    }

    /// Returns true if the RingVector contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.head_virtual == self.tail
    }

    /// Returns the number of slots in the current Block.
    pub const fn cap(&self) -> usize {
        self.block.size()
    }

    /// Returns the absolute slot of the element at logical index 0.
    pub const fn tail(&self) -> usize {
        self.tail
    }

    /// Returns the virtual head: `tail + len`, without wrapping.
    pub const fn head_virtual(&self) -> usize {
        self.head_virtual
    }

    /// Returns the absolute slot one past the last element, wrapped into the Block.
    pub const fn head(&self) -> usize {
        index::wrap(self.head_virtual, self.cap())
    }

    /// Returns true if the live elements cross the end of the Block and continue from slot 0.
    pub const fn is_wrapped(&self) -> bool {
        self.head_virtual > self.cap()
    }

    /// Returns the growth policy of the RingVector.
    pub const fn growth(&self) -> Growth {
        self.growth
    }

    /// Returns the storage provider of the RingVector.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns a reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RingVector.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at `index`, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let slot = self.checked_slot(index)?;
        // SAFETY: checked_slot only returns slots holding live elements.
        Ok(unsafe { &*slot })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// The same functionality can be achieved using the [`IndexMut`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the RingVector.
    #[track_caller]
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the element at `index`, returning an [`Err`] on a failure
    /// rather than panicking.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let slot = self.checked_slot(index)?;
        // SAFETY: checked_slot only returns slots holding live elements and &mut self guarantees
        // exclusive access.
        Ok(unsafe { &mut *slot })
    }

    /// Returns a reference to the element at the front (the last logical index), if it exists.
    pub fn front(&self) -> Option<&T> {
        self.try_get(self.len().checked_sub(1)?).ok()
    }

    /// Returns a mutable reference to the element at the front, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(self.len().checked_sub(1)?).ok()
    }

    /// Returns a reference to the element at the back (logical index 0), if it exists.
    pub fn back(&self) -> Option<&T> {
        self.try_get(0).ok()
    }

    /// Returns a mutable reference to the element at the back, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.try_get_mut(0).ok()
    }

    /// Adds the provided value at the front of the RingVector, growing first if there is no room.
    ///
    /// # Panics
    /// Panics if the RingVector has [`Growth::Fixed`] and is full, or if growing would exceed
    /// [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::new();
    /// ring.push_front(1);
    /// ring.push_front(2);
    /// assert_eq!(ring, [1, 2]);
    /// ```
    #[track_caller]
    pub fn push_front(&mut self, value: T) {
        self.reserve(1);
        // SAFETY: One slot has just been reserved on the front side.
        unsafe { self.push_front_unchecked(value) }
    }

    /// Adds the provided value at the front of the RingVector, handing it back if the ring can't
    /// make room for it.
    pub fn try_push_front(&mut self, value: T) -> Result<(), T> {
        if self.try_reserve(1).is_err() {
            return Err(value);
        }
        // SAFETY: One slot has just been reserved on the front side.
        unsafe { self.push_front_unchecked(value) }
        Ok(())
    }

    /// Adds the provided value at the back of the RingVector, growing first if there is no room.
    ///
    /// # Panics
    /// Panics if the RingVector has [`Growth::Fixed`] and is full, or if growing would exceed
    /// [`isize::MAX`] bytes.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::new();
    /// ring.push_back(1);
    /// ring.push_back(2);
    /// assert_eq!(ring, [2, 1]);
    /// ```
    #[track_caller]
    pub fn push_back(&mut self, value: T) {
        self.reserve_back(1);
        // SAFETY: One slot has just been reserved on the back side.
        unsafe { self.push_back_unchecked(value) }
    }

    /// Adds the provided value at the back of the RingVector, handing it back if the ring can't
    /// make room for it.
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if self.try_reserve_back(1).is_err() {
            return Err(value);
        }
        // SAFETY: One slot has just been reserved on the back side.
        unsafe { self.push_back_unchecked(value) }
        Ok(())
    }

    /// Removes the element at the front and returns it, if the RingVector isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = (0..3).collect();
    /// assert_eq!(ring.pop_front(), Some(2));
    /// assert_eq!(ring.pop_front(), Some(1));
    /// assert_eq!(ring.pop_front(), Some(0));
    /// assert_eq!(ring.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.head_virtual -= 1;
        let slot = index::wrap(self.head_virtual, self.cap());
        // SAFETY: The slot held the last live element, which is now outside of the ring and
        // effectively moved out of it.
        let value = unsafe { self.block.slot(slot).read() };
        self.normalize_if_empty();
        Some(value)
    }

    /// Removes the element at the back and returns it, if the RingVector isn't empty.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring: RingVector<_> = (0..3).collect();
    /// assert_eq!(ring.pop_back(), Some(0));
    /// assert_eq!(ring.pop_back(), Some(1));
    /// assert_eq!(ring.pop_back(), Some(2));
    /// assert_eq!(ring.pop_back(), None);
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        // SAFETY: The slot at tail holds the first live element, which is moved out before the
        // tail is advanced past it.
        let value = unsafe { self.block.slot(self.tail).read() };
        self.advance_tail(1);
        Some(value)
    }

    /// Drops `count` elements from the front of the RingVector.
    ///
    /// # Panics
    /// Panics if `count` is greater than the length of the RingVector.
    #[track_caller]
    pub fn remove_front(&mut self, count: usize) {
        self.try_remove_front(count).throw()
    }

    /// Drops `count` elements from the front of the RingVector, returning an [`Err`] rather than
    /// panicking if there aren't that many.
    pub fn try_remove_front(&mut self, count: usize) -> Result<(), RangeOutOfBounds> {
        let len = self.len();
        if count > len {
            return Err(RangeOutOfBounds { start: 0, end: count, len });
        }

        let split = SplitRange::new(self.tail, self.cap(), len - count, count);
        self.head_virtual -= count;
        self.normalize_if_empty();
        // SAFETY: The slots held live elements, which are no longer part of the ring.
        unsafe { self.drop_slots(split) };
        Ok(())
    }

    /// Drops `count` elements from the back of the RingVector.
    ///
    /// # Panics
    /// Panics if `count` is greater than the length of the RingVector.
    #[track_caller]
    pub fn remove_back(&mut self, count: usize) {
        self.try_remove_back(count).throw()
    }

    /// Drops `count` elements from the back of the RingVector, returning an [`Err`] rather than
    /// panicking if there aren't that many.
    pub fn try_remove_back(&mut self, count: usize) -> Result<(), RangeOutOfBounds> {
        let len = self.len();
        if count > len {
            return Err(RangeOutOfBounds { start: 0, end: count, len });
        }

        let split = SplitRange::new(self.tail, self.cap(), 0, count);
        self.advance_tail(count);
        // SAFETY: The slots held live elements, which are no longer part of the ring.
        unsafe { self.drop_slots(split) };
        Ok(())
    }

    /// Drops elements from the front until only `len` remain. Does nothing if the RingVector is
    /// already that short.
    pub fn truncate(&mut self, len: usize) {
        if let Some(excess) = self.len().checked_sub(len) {
            // Can't fail, excess is at most the current length.
            let _ = self.try_remove_front(excess);
        }
    }

    /// Drops every element, keeping the current Block.
    pub fn clear(&mut self) {
        let split = SplitRange::new(self.tail, self.cap(), 0, self.len());
        self.tail = 0;
        self.head_virtual = 0;
        // SAFETY: The slots held live elements, which are no longer part of the ring.
        unsafe { self.drop_slots(split) };
    }

    /// Drops every element and hands the Block back to the storage provider, leaving the
    /// RingVector unallocated.
    pub fn release(&mut self) {
        self.clear();
        if !self.block.is_empty() {
            debug!("ring released its {}-slot block", self.cap());
            let block = mem::take(&mut self.block);
            self.storage.release(block);
        }
    }

    /// Returns the live elements as two slices: the primary run starting at the tail, and the run
    /// that wraps around to the start of the Block (empty unless the ring is wrapped).
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::with_cap(4);
    /// ring.extend([1, 2, 3, 4]);
    /// for _ in 0..3 {
    ///     ring.pop_back();
    /// }
    /// // Only slot 3 is in use, so the new element wraps around to slot 0.
    /// ring.push_front(5);
    /// assert_eq!(ring.as_slices(), (&[4][..], &[5][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let split = SplitRange::new(self.tail, self.cap(), 0, self.len());
        // SAFETY: Both runs are live elements of the ring.
        unsafe { (self.slice(split.primary), self.slice(split.wrapped)) }
    }

    /// Returns the live elements as two mutable slices. See [`RingVector::as_slices`].
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let split = SplitRange::new(self.tail, self.cap(), 0, self.len());
        // SAFETY: Both runs are live elements of the ring and never overlap, so handing out two
        // mutable slices doesn't alias.
        unsafe { (self.slice_mut(split.primary), self.slice_mut(split.wrapped)) }
    }

    /// Returns an iterator over the elements from the back (logical index 0) to the front.
    pub fn iter(&self) -> Iter<'_, T> {
        let (primary, wrapped) = self.as_slices();
        Iter::new(primary, wrapped)
    }

    /// Returns an iterator over mutable references to the elements from the back to the front.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (primary, wrapped) = self.as_mut_slices();
        IterMut::new(primary, wrapped)
    }

    /// Clones the elements into `destination` in logical order, returning false without writing
    /// anything if `destination` is shorter than the RingVector.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let ring: RingVector<_> = (1..=3).collect();
    /// let mut dest = [0; 4];
    /// assert!(ring.try_copy_to(&mut dest));
    /// assert_eq!(dest, [1, 2, 3, 0]);
    /// assert!(!ring.try_copy_to(&mut [0; 2]));
    /// ```
    pub fn try_copy_to(&self, destination: &mut [T]) -> bool
    where
        T: Clone,
    {
        if destination.len() < self.len() {
            return false;
        }

        let (primary, wrapped) = self.as_slices();
        let (dest_primary, rest) = destination.split_at_mut(primary.len());
        dest_primary.clone_from_slice(primary);
        rest[..wrapped.len()].clone_from_slice(wrapped);
        true
    }

    /// Maps a logical index to the absolute slot that holds it.
    pub(crate) const fn to_absolute(&self, index: usize) -> usize {
        index::wrap(self.tail + index, self.cap())
    }

    /// Maps an absolute slot to the logical index it holds.
    pub(crate) const fn to_logical(&self, abs: usize) -> usize {
        index::to_logical(abs, self.tail, self.cap())
    }

    /// Returns a pointer to the live element at `index`, or an [`Err`] if there isn't one.
    pub(crate) fn checked_slot(&self, index: usize) -> Result<*mut T, IndexOutOfBounds> {
        let len = self.len();
        if index < len {
            // SAFETY: to_absolute always returns a slot inside the Block.
            Ok(unsafe { self.block.slot(self.to_absolute(index)) })
        } else {
            Err(IndexOutOfBounds { index, len })
        }
    }

    /// Moves the tail forward by `count` live elements, wrapping it back into the Block.
    pub(crate) const fn advance_tail(&mut self, count: usize) {
        debug_assert!(count <= self.len());
        self.tail += count;
        if self.tail >= self.cap() && self.cap() != 0 {
            self.tail -= self.cap();
            self.head_virtual -= self.cap();
        }
        self.normalize_if_empty();
    }

    /// Moves the cursors of an empty ring back to the start of the Block.
    pub(crate) const fn normalize_if_empty(&mut self) {
        if self.tail == self.head_virtual {
            self.tail = 0;
            self.head_virtual = 0;
        }
    }

    /// Borrows a run of slots as a slice.
    ///
    /// # Safety
    /// Every slot in `range` must hold a live element and `range` must lie within the Block (an
    /// empty range may start one past the end).
    pub(crate) unsafe fn slice(&self, range: Range<usize>) -> &[T] {
        // SAFETY: The caller guarantees that the slots are initialized and within the Block.
        unsafe { slice::from_raw_parts(self.block.slot(range.start), range.len()) }
    }

    /// Mutably borrows a run of slots as a slice.
    ///
    /// # Safety
    /// As for [`RingVector::slice`]. Additionally the returned slice must not overlap with any
    /// other live borrow of the Block.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn slice_mut(&self, range: Range<usize>) -> &mut [T] {
        // SAFETY: The caller guarantees that the slots are initialized, within the Block and not
        // otherwise borrowed.
        unsafe { slice::from_raw_parts_mut(self.block.slot(range.start), range.len()) }
    }

    /// Drops the values in both runs of `split` in place.
    ///
    /// # Safety
    /// Every slot in `split` must hold an initialized value that the ring no longer counts as
    /// live. If a destructor panics, the remaining values are leaked.
    pub(crate) unsafe fn drop_slots(&mut self, split: SplitRange) {
        if !mem::needs_drop::<T>() {
            return;
        }
        // SAFETY: The caller guarantees that the values are initialized and no longer reachable
        // through the ring, so each is dropped exactly once.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.block.slot(split.primary.start),
                split.primary.len(),
            ));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.block.slot(split.wrapped.start),
                split.wrapped.len(),
            ));
        }
    }

    /// Writes `value` into the front slot without checking for room.
    ///
    /// # Safety
    /// The front side must have at least one free slot, as after `reserve(1)`.
    pub(crate) unsafe fn push_front_unchecked(&mut self, value: T) {
        debug_assert!(self.len() < self.cap());
        // SAFETY: The caller guarantees that the slot at head is free.
        unsafe { self.block.slot(self.head()).write(value) };
        self.head_virtual += 1;
    }

    /// Writes `value` into the slot before the tail without checking for room.
    ///
    /// # Safety
    /// The back side must have at least one free slot, as after `reserve_back(1)`.
    pub(crate) unsafe fn push_back_unchecked(&mut self, value: T) {
        debug_assert!(self.len() < self.cap());
        let len = self.len();
        self.tail = index::wrap_back(self.tail, 1, self.cap());
        self.head_virtual = self.tail + len + 1;
        // SAFETY: The caller guarantees that the slot before the old tail is free.
        unsafe { self.block.slot(self.tail).write(value) };
    }

    /// Asserts every cursor invariant of the ring.
    #[cfg(test)]
    pub(crate) fn verify_cursors(&self) {
        assert!(self.tail <= self.head_virtual, "tail passed head_virtual");
        assert!(self.len() <= self.cap(), "more live elements than slots");
        assert!(
            self.tail < self.cap() || (self.tail == 0 && self.head_virtual == 0),
            "tail outside of the block"
        );
        assert_eq!(
            self.as_slices().0.len() + self.as_slices().1.len(),
            self.len(),
            "slices don't cover the live elements"
        );
    }
}

impl<T, S: Storage<T>> Index<usize> for RingVector<T, S> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T, S: Storage<T>> IndexMut<usize> for RingVector<T, S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T, S: Storage<T>> Extend<T> for RingVector<T, S> {
    /// Pushes every item onto the front, so that they keep their order at the end of the ring.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // A refused reservation is reported by the pushes themselves.
        let _ = self.try_reserve(iter.size_hint().0);

        for item in iter {
            self.push_front(item);
        }
    }
}

impl<'a, T: Copy + 'a, S: Storage<T>> Extend<&'a T> for RingVector<T, S> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for RingVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = RingVector::new();
        ring.extend(iter);
        ring
    }
}

impl<T> Default for RingVector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Storage<T>> Drop for RingVector<T, S> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<T: Clone, S: Storage<T> + Clone> Clone for RingVector<T, S> {
    fn clone(&self) -> Self {
        let mut ring = RingVector::with_cap_in(self.cap(), self.storage.clone())
            .with_growth(self.growth);

        for value in self.iter() {
            // SAFETY: The new ring has at least as many slots as self has elements.
            unsafe { ring.push_front_unchecked(value.clone()) }
        }

        ring
    }
}

impl<T, S, S2> PartialEq<RingVector<T, S2>> for RingVector<T, S>
where
    T: PartialEq,
    S: Storage<T>,
    S2: Storage<T>,
{
    fn eq(&self, other: &RingVector<T, S2>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq, S: Storage<T>> Eq for RingVector<T, S> {}

impl<T: PartialEq, S: Storage<T>> PartialEq<[T]> for RingVector<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: PartialEq, S: Storage<T>, const N: usize> PartialEq<[T; N]> for RingVector<T, S> {
    fn eq(&self, other: &[T; N]) -> bool {
        *self == other[..]
    }
}

impl<T: Hash, S: Storage<T>> Hash for RingVector<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self.iter() {
            value.hash(state);
        }
    }
}

impl<T: Debug, S: Storage<T>> Debug for RingVector<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingVector")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("tail", &self.tail)
            .field("head_virtual", &self.head_virtual)
            .finish()
    }
}

impl<T: Debug, S: Storage<T>> Display for RingVector<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
