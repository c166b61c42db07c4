//! Storage providers for [`RingVector`](crate::collections::contiguous::RingVector).
//!
//! A ring never allocates by itself. Whenever it needs a bigger [`Block`] it asks its provider to
//! [`acquire`](Storage::acquire) one, moves its elements across and then
//! [`release`](Storage::release)s the old one. Which provider a ring uses is picked when it is
//! constructed:
//! - [`Heap`], the default, allocates exactly what is asked for and frees on release.
//! - [`Pooled`] rents power-of-two sized blocks from a shared [`Pool`], so rings that grow and
//!   shrink repeatedly can recycle each other's memory.
#![warn(missing_docs)]

mod heap;
#[cfg(feature = "pool")]
mod pool;
mod tests;

pub use heap::*;
#[cfg(feature = "pool")]
pub use pool::*;

use crate::collections::contiguous::Block;

/// A source of [`Block`]s.
///
/// Implementors may return a Block larger than requested, but never a smaller one. The contents
/// of an acquired Block are unspecified: callers must not assume any slot is initialized or
/// zeroed. Released Blocks hold no live values, only memory.
pub trait Storage<T> {
    /// Returns a Block with at least `min_size` slots.
    ///
    /// # Panics
    /// May panic if a Block of `min_size` slots would exceed [`isize::MAX`] bytes.
    fn acquire(&mut self, min_size: usize) -> Block<T>;

    /// Takes back a Block that is no longer in use. The caller must not touch the Block again.
    fn release(&mut self, block: Block<T>);
}
