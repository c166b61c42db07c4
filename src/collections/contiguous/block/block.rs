use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::mem::MaybeUninit;
use std::ptr::NonNull;
use std::slice;

use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

const MAX_BYTES: usize = isize::MAX as usize;

/// A fixed number of uninitialized slots on the heap. Similar to a `Box<[MaybeUninit<T>]>`.
///
/// A Block never tracks which of its slots hold values, so dropping one only frees the memory.
/// Whoever writes into the slots is responsible for dropping what they wrote before the Block goes
/// away. Memory returned by [`Block::new_uninit`] is never zeroed.
///
/// Zero-sized types never allocate: a Block of any size for a ZST is a dangling pointer with a
/// size attached.
pub struct Block<T> {
    pub(crate) ptr: NonNull<MaybeUninit<T>>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Block<T> {
    /// Creates a Block with no slots. Nothing is allocated.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::Block;
    /// let block: Block<u8> = Block::empty();
    /// assert_eq!(block.size(), 0);
    /// ```
    pub const fn empty() -> Block<T> {
        Block {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Allocates a Block with exactly `size` uninitialized slots.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::Block;
    /// let block: Block<u64> = Block::new_uninit(12);
    /// assert_eq!(block.size(), 12);
    /// ```
    pub fn new_uninit(size: usize) -> Block<T> {
        Self::try_new_uninit(size).throw()
    }

    /// Allocates a Block with exactly `size` uninitialized slots, returning an [`Err`] rather than
    /// panicking if the layout would exceed [`isize::MAX`] bytes.
    pub fn try_new_uninit(size: usize) -> Result<Block<T>, CapacityOverflow> {
        if size > Self::max_size() {
            return Err(CapacityOverflow);
        }
        let layout = Self::make_layout(size)?;

        Ok(Block {
            ptr: Self::make_ptr(layout),
            size,
            _phantom: PhantomData,
        })
    }

    /// Returns the number of slots in the Block.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the Block has no slots.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// The largest number of slots a Block of `T` can have. Zero-sized types are held to
    /// [`isize::MAX`] slots as well, so that two cursors into a Block never overflow a `usize`.
    pub const fn max_size() -> usize {
        match size_of::<T>() {
            0 => MAX_BYTES,
            elem => MAX_BYTES / elem,
        }
    }

    /// Views every slot of the Block, initialized or not.
    pub fn as_uninit_slice(&self) -> &[MaybeUninit<T>] {
        // SAFETY: The pointer is valid and aligned for size slots of MaybeUninit<T>, which has no
        // validity requirements of its own.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    /// Mutably views every slot of the Block, initialized or not.
    pub fn as_uninit_slice_mut(&mut self) -> &mut [MaybeUninit<T>] {
        // SAFETY: As above, and the &mut self receiver guarantees exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }

    /// Returns a raw pointer to the slot at `index`.
    ///
    /// # Safety
    /// `index` must be less than or equal to the size of the Block. The pointer is only valid
    /// for reads if the slot has been initialized.
    pub(crate) unsafe fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.size);
        // SAFETY: The caller guarantees that index is within (or one past) the allocation.
        unsafe { self.ptr.add(index).as_ptr().cast() }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of slots of type `T`.
    pub(crate) fn make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<MaybeUninit<T>>(size).map_err(|_| CapacityOverflow)
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    fn make_ptr(layout: Layout) -> NonNull<MaybeUninit<T>> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T> Default for Block<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Drop for Block<T> {
    fn drop(&mut self) {
        // The layout was valid when the Block was created and the size hasn't changed since.
        let Ok(layout) = Self::make_layout(self.size) else { return };

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

// SAFETY: A Block uniquely owns its allocation, so it can be sent between threads whenever the
// values written into it can be.
unsafe impl<T: Send> Send for Block<T> {}
// SAFETY: Block's safe API only exposes its slots through &self / &mut self, so no interior
// mutability occurs.
unsafe impl<T: Sync> Sync for Block<T> {}

impl<T> Debug for Block<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Block")
            .field("size", &self.size)
            .finish()
    }
}
