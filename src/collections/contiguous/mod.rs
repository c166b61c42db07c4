//! Contiguous collection types built on [`Block`]s: [`RingVector`] for a double-ended sequence
//! with arbitrary-position insertion and removal, and [`RingQueue`] for a FIFO view over one.
#![warn(missing_docs)]

pub mod block;
pub mod queue;
pub mod ring;

#[doc(inline)]
pub use block::Block;
#[doc(inline)]
pub use queue::{Overflow, RingQueue};
#[doc(inline)]
pub use ring::{Growth, RingVector};
