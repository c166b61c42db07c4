//! Collection types.
//!
//! # Purpose
//! Everything here is built around a single idea: a fixed run of slots addressed with wraparound
//! arithmetic, so that a sequence can grow and shrink at both ends without moving its elements.
//!
//! # Method
//! Unlike [`Vec`], a ring's elements aren't one slice, so nothing here implements
//! [`Deref<Target = [T]>`](std::ops::Deref). The slice-like API is written out by hand and always
//! handles the two runs either side of the wrap point.

pub mod contiguous;
