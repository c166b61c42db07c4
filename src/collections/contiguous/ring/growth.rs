use std::cmp;
use std::mem;
use std::ptr;

use derive_more::IsVariant;
use log::debug;

use super::RingVector;
use super::index::SplitRange;
use crate::collections::contiguous::Block;
use crate::storage::Storage;
#[doc(inline)]
pub use crate::util::error::{CapacityExceeded, CapacityOverflow, ReserveError};
use crate::util::result::ResultExtension;

const GROWTH_FACTOR: usize = 2;

/// How a [`RingVector`] makes room once its Block can't take any more elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Growth {
    /// Reshape into a Block at least twice as large, moving the elements to its start. The first
    /// Block is exactly as large as the first reservation asks for.
    #[default]
    Exponential,
    /// Never reallocate. Reservations that would need more slots than the Block has fail with
    /// [`CapacityExceeded`]; any other reservation is satisfied by wrapping into free slots.
    Fixed,
}

/// The end of a ring that a reservation is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Front,
    Back,
}

impl<T, S: Storage<T>> RingVector<T, S> {
    /// Ensures that `additional` more elements can be added at the front without reallocating.
    ///
    /// # Panics
    /// Panics if the RingVector has [`Growth::Fixed`] and doesn't have enough slots, or if the
    /// new Block would exceed [`isize::MAX`] bytes.
    #[track_caller]
    pub fn reserve(&mut self, additional: usize) {
        self.try_reserve(additional).throw()
    }

    /// Ensures that `additional` more elements can be added at the front without reallocating,
    /// returning an [`Err`] rather than panicking if the ring can't grow that far.
    ///
    /// A reservation fits when the Block has enough free slots and either the ring is already
    /// wrapped or there are `additional` free slots after the head without wrapping. When the ring
    /// isn't wrapped and the free slots are on the far side of the Block, an exponential ring only
    /// wraps into them if it would stay at most half full; otherwise it reshapes into a Block at
    /// least twice as large.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::with_cap(4);
    /// ring.extend([1, 2, 3, 4]);
    /// assert_eq!(ring.pop_back(), Some(1));
    ///
    /// // Slot 0 is free, but wrapping into it would leave the ring 4/4 full.
    /// ring.push_front(5);
    /// assert!(ring.cap() >= 5);
    /// assert_eq!(ring, [2, 3, 4, 5]);
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.reserve_side(Side::Front, additional)
    }

    /// Ensures that `additional` more elements can be added at the back without reallocating.
    ///
    /// # Panics
    /// Panics if the RingVector has [`Growth::Fixed`] and doesn't have enough slots, or if the
    /// new Block would exceed [`isize::MAX`] bytes.
    #[track_caller]
    pub fn reserve_back(&mut self, additional: usize) {
        self.try_reserve_back(additional).throw()
    }

    /// Ensures that `additional` more elements can be added at the back without reallocating,
    /// returning an [`Err`] rather than panicking if the ring can't grow that far. The same rules
    /// as [`try_reserve`](RingVector::try_reserve) apply, with the free slots before the tail
    /// taking the place of those after the head.
    pub fn try_reserve_back(&mut self, additional: usize) -> Result<(), ReserveError> {
        self.reserve_side(Side::Back, additional)
    }

    /// Reshapes the RingVector into a Block of exactly its length. A fixed ring keeps its Block.
    pub fn shrink_to_fit(&mut self) {
        if self.growth.is_fixed() || self.len() == self.cap() {
            return;
        }

        if self.is_empty() {
            self.release();
        } else {
            self.move_to(self.len());
        }
    }

    /// Moves the elements so that they occupy one contiguous run of the Block, without
    /// reallocating, and returns that run.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::RingVector;
    /// let mut ring = RingVector::fixed(4);
    /// ring.extend([1, 2, 3]);
    /// ring.push_back(0);
    /// assert!(ring.is_wrapped());
    ///
    /// assert_eq!(ring.make_contiguous(), &[0, 1, 2, 3]);
    /// assert_eq!(ring.tail(), 0);
    /// assert_eq!(ring.cap(), 4);
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [T] {
        if self.is_wrapped() {
            // Rotating the whole Block brings the tail to slot 0 and lines the wrapped run up
            // behind the primary one. Free slots are moved as well, but they hold nothing.
            self.block.as_uninit_slice_mut().rotate_left(self.tail);
            self.head_virtual = self.len();
            self.tail = 0;
        }

        let range = self.tail..self.head_virtual;
        // SAFETY: The ring isn't wrapped, so every live element is in tail..head_virtual.
        unsafe { self.slice_mut(range) }
    }

    pub(crate) fn reserve_side(
        &mut self,
        side: Side,
        additional: usize,
    ) -> Result<(), ReserveError> {
        let required = self.len().checked_add(additional).ok_or(CapacityOverflow)?;
        if self.fits(side, additional, required) {
            return Ok(());
        }

        match self.growth {
            Growth::Fixed => {
                debug!("fixed ring of {} slots refused room for {required} elements", self.cap());
                Err(CapacityExceeded { required, cap: self.cap() }.into())
            },
            Growth::Exponential => self.reshape(additional, required),
        }
    }

    fn fits(&self, side: Side, additional: usize, required: usize) -> bool {
        let cap = self.cap();
        if required > cap {
            return false;
        }
        // Any free slot can be used without breaking contiguity that doesn't exist anyway.
        if self.is_wrapped() || self.is_empty() || self.growth.is_fixed() {
            return true;
        }

        let room = match side {
            Side::Front => cap - self.head_virtual,
            Side::Back => self.tail,
        };
        room >= additional || required <= cap / 2
    }

    /// Grows into a new Block with room for `additional` more elements, unwrapping the contents.
    fn reshape(&mut self, additional: usize, required: usize) -> Result<(), ReserveError> {
        let max = Block::<T>::max_size();
        if required > max {
            return Err(CapacityOverflow.into());
        }

        let new_cap = match self.cap() {
            0 => additional,
            cap => cmp::max(cap.saturating_mul(GROWTH_FACTOR), cap.saturating_add(additional))
                .min(max),
        };

        self.move_to(new_cap);
        Ok(())
    }

    /// Moves every element, in logical order, to the start of a new Block of at least `size`
    /// slots and releases the old Block.
    ///
    /// # Panics
    /// Panics if the storage provider hands out a Block smaller than `size`, which would mean the
    /// provider is broken.
    pub(crate) fn move_to(&mut self, size: usize) {
        debug_assert!(size >= self.len());
        let len = self.len();
        let old_cap = self.cap();

        let block = self.storage.acquire(size);
        assert!(
            block.size() >= size,
            "storage provider returned a {}-slot block when {size} were requested",
            block.size()
        );

        let split = SplitRange::new(self.tail, old_cap, 0, len);
        // SAFETY: The runs hold the live elements of the old Block, and the new Block has room for
        // all of them. The two Blocks are different allocations.
        unsafe {
            ptr::copy_nonoverlapping(
                self.block.slot(split.primary.start).cast_const(),
                block.slot(0),
                split.primary.len(),
            );
            ptr::copy_nonoverlapping(
                self.block.slot(split.wrapped.start).cast_const(),
                block.slot(split.primary.len()),
                split.wrapped.len(),
            );
        }

        // The old Block now only holds moved-out bits.
        let old = mem::replace(&mut self.block, block);
        self.storage.release(old);
        self.tail = 0;
        self.head_virtual = len;

        debug!("ring reshaped from {old_cap} to {} slots holding {len} elements", self.cap());
    }
}
