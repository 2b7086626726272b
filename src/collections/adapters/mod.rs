//! Containers which restrict an underlying sequence to a single access pattern. [`Stack`] and
//! [`Queue`] sit on any sequence implementing [`StackSequence`] or [`QueueSequence`], while
//! [`PriorityQueue`] keeps a [`Vector`](crate::collections::contiguous::Vector) as a binary heap.
#![warn(missing_docs)]

mod priority_queue;
mod queue;
mod sequence;
mod stack;
mod tests;

#[doc(inline)]
pub use priority_queue::*;
#[doc(inline)]
pub use queue::*;
#[doc(inline)]
pub use sequence::*;
#[doc(inline)]
pub use stack::*;
