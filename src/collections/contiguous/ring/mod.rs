//! A module containing [`RingVector`] and associated types.
//!
//! The ring is split over several files by concern:
//! - Construction, end operations, views and trait impls live with the type itself.
//! - [`Growth`] and the reservation rules that decide between wrapping and reshaping.
//! - Insertion and removal at arbitrary positions.
//! - Linear and binary search over logical ranges.
//!
//! Borrowed iteration goes through [`Iter`] and [`IterMut`], which chain the (at most two)
//! contiguous runs of the ring. [`IntoIter`] drains an owned ring from the back.
//!
//! [`RingVector`] and [`Growth`] are also re-exported under the parent module.

mod growth;
mod index;
mod iter;
mod model_tests;
mod position;
mod ring_vector;
mod search;

pub use growth::*;
pub use iter::*;
pub use position::*;
pub use ring_vector::*;
