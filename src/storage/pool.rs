use std::fmt::{self, Debug, Formatter};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::trace;

use super::Storage;
use crate::collections::contiguous::{Block, RingVector};

const SIZE_CLASSES: usize = usize::BITS as usize;

/// A thread-safe pool of [`Block`]s binned by power-of-two size class.
///
/// Renting rounds the request up to the next power of two and reuses a retained Block of that
/// size if there is one. Returned Blocks are kept for the next renter, up to `retain_per_class`
/// per size class; anything beyond that (or any Block whose size isn't a power of two) is freed.
///
/// A Pool is shared between rings through [`Pooled`] handles.
///
/// # Examples
/// ```
/// # use ring_vector::collections::contiguous::RingVector;
/// # use ring_vector::storage::Pool;
/// let pooled = Pool::shared(4);
///
/// let mut ring = RingVector::new_in(pooled.clone());
/// ring.extend(0_u32..5);
/// assert_eq!(ring.cap(), 8);
///
/// // Dropping the ring hands its Block back to the pool ...
/// drop(ring);
/// assert_eq!(pooled.pool().retained_in_class(8), 1);
///
/// // ... where the next ring that needs 8 slots picks it up.
/// let ring = RingVector::<u32, _>::with_cap_in(6, pooled.clone());
/// assert_eq!(ring.cap(), 8);
/// assert_eq!(pooled.pool().retained_in_class(8), 0);
/// ```
pub struct Pool<T> {
    shelves: Mutex<[RingVector<Block<T>>; SIZE_CLASSES]>,
    retain_per_class: usize,
}

impl<T> Pool<T> {
    /// Creates an empty Pool that keeps at most `retain_per_class` returned Blocks of each size.
    pub fn new(retain_per_class: usize) -> Pool<T> {
        Pool {
            shelves: Mutex::new(std::array::from_fn(|_| RingVector::new())),
            retain_per_class,
        }
    }

    /// Creates a Pool and wraps it in a [`Pooled`] handle ready to be given to rings.
    pub fn shared(retain_per_class: usize) -> Pooled<T> {
        Pooled::new(Arc::new(Pool::new(retain_per_class)))
    }

    /// Returns the number of Blocks kept per size class.
    pub const fn retain_per_class(&self) -> usize {
        self.retain_per_class
    }

    /// Returns the total number of Blocks currently waiting to be rented.
    pub fn retained(&self) -> usize {
        self.shelves().iter().map(RingVector::len).sum()
    }

    /// Returns the number of Blocks of exactly `size` slots waiting to be rented.
    pub fn retained_in_class(&self, size: usize) -> usize {
        if !size.is_power_of_two() {
            return 0;
        }
        self.shelves()[size.trailing_zeros() as usize].len()
    }

    /// Frees every retained Block.
    pub fn clear(&self) {
        for shelf in self.shelves().iter_mut() {
            shelf.release();
        }
    }

    /// Rents a Block with at least `min_size` slots.
    ///
    /// # Panics
    /// Panics if a Block of `min_size` slots would exceed [`isize::MAX`] bytes.
    pub fn rent(&self, min_size: usize) -> Block<T> {
        if min_size == 0 {
            return Block::empty();
        }

        let class_size = match min_size.checked_next_power_of_two() {
            Some(size) if size <= Block::<T>::max_size() => size,
            // Rounding up would overflow, so this request can't be pooled.
            _ => {
                trace!("pool: {min_size} slots can't be rounded to a size class, allocating");
                return Block::new_uninit(min_size);
            },
        };

        let reused = self.shelves()[class_size.trailing_zeros() as usize].pop_front();
        match reused {
            Some(block) => {
                trace!("pool: reused {class_size}-slot block for a request of {min_size}");
                block
            },
            None => {
                trace!("pool: allocated {class_size}-slot block for a request of {min_size}");
                Block::new_uninit(class_size)
            },
        }
    }

    /// Hands a Block back to the Pool, which either keeps it for reuse or frees it.
    pub fn give_back(&self, block: Block<T>) {
        let size = block.size();
        if !size.is_power_of_two() {
            trace!("pool: freed {size}-slot block outside of any size class");
            return;
        }

        let mut shelves = self.shelves();
        let shelf = &mut shelves[size.trailing_zeros() as usize];
        if shelf.len() < self.retain_per_class {
            shelf.push_front(block);
            trace!("pool: retained {size}-slot block ({} in class)", shelf.len());
        } else {
            trace!("pool: freed {size}-slot block, class is full");
        }
    }

    pub(super) fn shelves(&self) -> MutexGuard<'_, [RingVector<Block<T>>; SIZE_CLASSES]> {
        // A panic while the lock is held can't leave a shelf half-updated, so poisoning is
        // ignored.
        self.shelves.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Debug for Pool<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pool")
            .field("retained", &self.retained())
            .field("retain_per_class", &self.retain_per_class)
            .finish()
    }
}

/// A cloneable handle to a shared [`Pool`], usable as a ring's [`Storage`].
pub struct Pooled<T> {
    pool: Arc<Pool<T>>,
}

impl<T> Pooled<T> {
    /// Wraps an existing shared Pool.
    pub const fn new(pool: Arc<Pool<T>>) -> Pooled<T> {
        Pooled { pool }
    }

    /// Returns the Pool behind this handle.
    pub const fn pool(&self) -> &Arc<Pool<T>> {
        &self.pool
    }
}

impl<T> Storage<T> for Pooled<T> {
    fn acquire(&mut self, min_size: usize) -> Block<T> {
        self.pool.rent(min_size)
    }

    fn release(&mut self, block: Block<T>) {
        self.pool.give_back(block);
    }
}

impl<T> Clone for Pooled<T> {
    fn clone(&self) -> Self {
        Pooled::new(Arc::clone(&self.pool))
    }
}

impl<T> Debug for Pooled<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pooled").field(&self.pool).finish()
    }
}
