//! A module containing [`Block`], the unit of storage that rings are built on.
//!
//! A Block is handed out by a [`Storage`](crate::storage::Storage) provider, owned by exactly one
//! [`RingVector`](super::RingVector) at a time and handed back to the same provider once the ring
//! is done with it.
//!
//! [`Block`] is also re-exported under the parent module.

mod block;
mod tests;

pub use block::*;
