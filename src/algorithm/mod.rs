//! Generic algorithms, split into:
//! - [`category`]: Cursor capability levels and the traits which describe them.
//! - [`base`]: Comparing, filling and copying ranges.
//! - [`heap`]: Binary heaps over slices, which back the `PriorityQueue` adapter.
//! - [`compare`]: Orderings for the heap algorithms.
#![warn(missing_docs)]

pub mod base;
pub mod category;
pub mod compare;
pub mod heap;

#[doc(inline)]
pub use base::*;
#[doc(inline)]
pub use category::{
    BidirectionalCursor, Category, ForwardCursor, InputCursor, RandomAccessCursor, advance,
    distance,
};
#[doc(inline)]
pub use compare::*;
#[doc(inline)]
pub use heap::*;
