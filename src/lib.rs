//! This crate is a growable ring buffer, [`RingVector`](collections::contiguous::RingVector), with
//! the API of a list: indexing, insertion and removal anywhere, search and binary search.
//!
//! # Purpose
//! A [`Vec`] is great at the end it grows from and bad at the other. A plain ring buffer is great
//! at both ends but usually stops there. This crate is what happens when you keep going and give
//! the ring everything a list has, while making sure each operation only moves the elements it
//! really has to.
//!
//! # Method
//! Elements live in a single [`Block`](collections::contiguous::Block) of slots. Two cursors, the
//! tail and the *virtual* head, say which slots are live. The head is never wrapped back into the
//! Block, which means the length is always just `head - tail` and "is the ring wrapped?" is just
//! `head > cap`. Every operation that touches a range of logical indices splits it into at most
//! two contiguous runs and handles each with plain slice or pointer operations.
//!
//! # Error Handling
//! Errors are handled the same way throughout: each fallible operation has a `try_` variant that
//! returns a strongly typed [`Result`], and a panicking variant that reports the error's message
//! for callers who know better. Errors are structs implementing [`Error`](std::error::Error),
//! grouped into enums for operations that can fail in more than one way.
//!
//! # Storage
//! Rings don't allocate by themselves. They get Blocks from a [`Storage`](storage::Storage)
//! provider, which is plain heap allocation by default. With the `pool` feature (on by default)
//! rings can instead share a [`Pool`](storage::Pool) of recycled power-of-two Blocks.
//!
//! # Logging
//! The crate logs through the [`log`] facade: reshapes and releases at `debug`, pool traffic at
//! `trace`. Nothing is printed unless the application installs a logger.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming, and on `log` for diagnostics.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod storage;

pub(crate) mod util;
