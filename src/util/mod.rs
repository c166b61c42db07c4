#![warn(missing_docs)]

pub mod alloc;
pub mod error;
pub mod option;
pub mod panic;
pub mod result;
