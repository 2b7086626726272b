//! Various general-purpose collection types.
//!
//! # Purpose
//! [`Deque`](segmented::Deque) is the centerpiece here: a double-ended queue built from a map of
//! fixed-size buffers. The contiguous types support it and the adapters are built on top of it.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves me from writing some of the more repetitive functionality. Deque can't, because its
//! elements aren't contiguous, so it provides its own [`Position`](segmented::Position) based
//! access instead.

#[cfg(feature = "adapters")]
pub mod adapters;
pub mod contiguous;
pub mod segmented;
