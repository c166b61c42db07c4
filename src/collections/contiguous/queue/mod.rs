//! A module containing [`RingQueue`], a first-in first-out view over a
//! [`RingVector`](super::RingVector), and the [`Overflow`] policy for bounded queues.
//!
//! [`RingQueue`] and [`Overflow`] are also re-exported under the parent module.

mod queue;
mod tests;

pub use queue::*;
