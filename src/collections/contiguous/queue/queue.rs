use std::fmt::{self, Debug, Formatter};

use derive_more::IsVariant;
use log::trace;

use crate::collections::contiguous::ring::{IntoIter, Iter};
use crate::collections::contiguous::{Growth, RingVector};
use crate::storage::{Heap, Storage};

/// What a bounded [`RingQueue`] does with a new element once it is full.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Overflow {
    /// Hand the new element back to the caller.
    #[default]
    Reject,
    /// Evict the oldest element to make room for the new one.
    Overwrite,
}

/// A first-in first-out queue backed by a [`RingVector`].
///
/// Elements are enqueued at the front of the ring and dequeued from its back, so both operations
/// are `O(1)` and the ring only ever reshapes when an unbounded queue outgrows its Block.
///
/// A queue is either unbounded, growing like any other RingVector, or bounded to a fixed number
/// of slots with an [`Overflow`] policy deciding what happens once they are all taken.
///
/// # Examples
/// ```
/// # use ring_vector::collections::contiguous::{Overflow, RingQueue};
/// let mut recent = RingQueue::bounded(3, Overflow::Overwrite);
/// for i in 1..=4 {
///     recent.enqueue(i).unwrap();
/// }
///
/// assert_eq!(recent.peek(), Some(&2));
/// assert_eq!(recent.peek_newest(), Some(&4));
/// assert_eq!(recent.dequeue(), Some(2));
/// ```
pub struct RingQueue<T, S: Storage<T> = Heap> {
    pub(crate) ring: RingVector<T, S>,
    pub(crate) overflow: Option<Overflow>,
}

impl<T> RingQueue<T> {
    /// Creates a new, unbounded RingQueue without allocating.
    pub const fn new() -> RingQueue<T> {
        RingQueue::new_in(Heap)
    }

    /// Creates a new, unbounded RingQueue with room for `cap` elements before its first reshape.
    pub fn with_cap(cap: usize) -> RingQueue<T> {
        RingQueue {
            ring: RingVector::with_cap(cap),
            overflow: None,
        }
    }

    /// Creates a RingQueue that holds at most `cap` elements, handling any more according to
    /// `overflow`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn bounded(cap: usize, overflow: Overflow) -> RingQueue<T> {
        RingQueue::bounded_in(cap, overflow, Heap)
    }
}

impl<T, S: Storage<T>> RingQueue<T, S> {
    /// Creates a new, unbounded RingQueue that takes its storage from `storage`.
    pub const fn new_in(storage: S) -> RingQueue<T, S> {
        RingQueue {
            ring: RingVector::new_in(storage),
            overflow: None,
        }
    }

    /// Creates a bounded RingQueue that takes its storage from `storage`. See
    /// [`RingQueue::bounded`].
    ///
    /// The bound is the size of the Block that `storage` hands out, which may be larger than `cap`.
    pub fn bounded_in(cap: usize, overflow: Overflow, storage: S) -> RingQueue<T, S> {
        RingQueue {
            ring: RingVector::with_cap_in(cap, storage).with_growth(Growth::Fixed),
            overflow: Some(overflow),
        }
    }

    /// Adds `value` as the newest element of the queue.
    ///
    /// Returns `Ok(None)` if the value was added with room to spare, and `Ok(Some(evicted))` if a
    /// bounded queue with [`Overflow::Overwrite`] had to evict its oldest element first. The value
    /// is handed back as an [`Err`] if the queue can't take it: a full queue with
    /// [`Overflow::Reject`], a queue with no slots at all, or an unbounded queue that can't grow.
    ///
    /// # Examples
    /// ```
    /// # use ring_vector::collections::contiguous::{Overflow, RingQueue};
    /// let mut queue = RingQueue::bounded(1, Overflow::Reject);
    /// assert_eq!(queue.enqueue('a'), Ok(None));
    /// assert_eq!(queue.enqueue('b'), Err('b'));
    /// ```
    pub fn enqueue(&mut self, value: T) -> Result<Option<T>, T> {
        let evicted = match self.overflow {
            Some(Overflow::Overwrite) if self.is_full() => {
                trace!("queue of {} slots evicted its oldest element", self.cap());
                self.ring.pop_back()
            },
            _ => None,
        };

        self.ring.try_push_front(value).map(|()| evicted)
    }

    /// Removes and returns the oldest element of the queue.
    pub fn dequeue(&mut self) -> Option<T> {
        self.ring.pop_back()
    }

    /// Returns a reference to the oldest element of the queue, the next to be dequeued.
    pub fn peek(&self) -> Option<&T> {
        self.ring.back()
    }

    /// Returns a reference to the newest element of the queue.
    pub fn peek_newest(&self) -> Option<&T> {
        self.ring.front()
    }

    /// Returns the number of elements in the queue.
    pub const fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns true if the queue has no elements.
    pub const fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns true if the queue can't take another element without growing, evicting or
    /// rejecting.
    pub const fn is_full(&self) -> bool {
        self.ring.len() == self.ring.cap()
    }

    /// Returns the number of slots in the queue's Block.
    pub const fn cap(&self) -> usize {
        self.ring.cap()
    }

    /// Returns the overflow policy of a bounded queue, or [`None`] if the queue is unbounded.
    pub const fn overflow(&self) -> Option<Overflow> {
        self.overflow
    }

    /// Returns an iterator over the elements, from the oldest to the newest.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Drops every element, keeping the Block.
    pub fn clear(&mut self) {
        self.ring.clear()
    }

    /// Borrows the underlying ring, with the oldest element at logical index 0.
    pub const fn as_ring(&self) -> &RingVector<T, S> {
        &self.ring
    }

    /// Consumes the queue, returning the underlying ring.
    pub fn into_ring(self) -> RingVector<T, S> {
        self.ring
    }
}

impl<T> Default for RingQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, S: Storage<T> + Clone> Clone for RingQueue<T, S> {
    fn clone(&self) -> Self {
        RingQueue {
            ring: self.ring.clone(),
            overflow: self.overflow,
        }
    }
}

impl<T> From<RingVector<T>> for RingQueue<T> {
    /// Wraps an existing ring as an unbounded queue, with the element at logical index 0 as the
    /// oldest.
    fn from(ring: RingVector<T>) -> Self {
        RingQueue {
            ring: ring.with_growth(Growth::Exponential),
            overflow: None,
        }
    }
}

impl<T> FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        RingQueue::from(iter.into_iter().collect::<RingVector<T>>())
    }
}

impl<T, S: Storage<T>> IntoIterator for RingQueue<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.ring.into_iter()
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a RingQueue<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Debug, S: Storage<T>> Debug for RingQueue<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingQueue")
            .field("contents", &self.iter())
            .field("cap", &self.cap())
            .field("overflow", &self.overflow)
            .finish()
    }
}
