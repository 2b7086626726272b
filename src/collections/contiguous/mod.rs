//! Contiguous collection types. [`Array`] is a fixed-size allocation, used directly for a Deque's
//! map and buffers, while [`Vector`] adds a length and amortized growth on top of it.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
