//! Segmented collection types, storing elements in a series of fixed-size buffers. Primarily
//! revolves around [`Deque`] and its accompanying [`Position`] type.
//!
//! A Deque is made up of three parts:
//! - Buffers, each holding [`buffer_size::<T>()`](buffer_size) elements.
//! - The map, a table of slots that each own at most one buffer. The buffers holding elements
//!   always occupy a contiguous run of slots, the active range.
//! - A begin and end [`Position`], which are `(node, cur)` pairs addressing a slot of the map and
//!   an element within its buffer.

mod buffer;
mod deque;
mod iter;
mod map;
mod position;
mod tests;

pub use buffer::*;
pub use deque::*;
pub use iter::*;
pub use position::*;
