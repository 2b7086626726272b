//! This crate is my attempt at writing a segmented double-ended queue, along with the handful of
//! containers and algorithms that usually sit around one in a standard library.
//!
//! # Purpose
//! This repo / crate is a project that I'm working on as a learning experience. A deque is the
//! one standard container that needs a real data structure behind it: a map of fixed-size buffers,
//! positions that know how to hop between them and a growth policy that works at both ends. Writing
//! it properly is the point, everything else here exists to support or consume it.
//!
//! # Layout
//! - [`collections::segmented`]: The [`Deque`](collections::segmented::Deque) itself, its
//!   [`Position`](collections::segmented::Position)s and iterators.
//! - [`collections::contiguous`]: [`Array`](collections::contiguous::Array) and
//!   [`Vector`](collections::contiguous::Vector), which the Deque uses for its map, its buffers and
//!   for staging values before they are committed.
//! - `collections::adapters`: `Stack`, `Queue` and `PriorityQueue`, thin wrappers over the
//!   above. Enabled by the `adapters` feature.
//! - [`algorithm`]: Cursor categories, heap algorithms and a few range algorithms.
//!
//! # Error Handling
//! Specifically for a standard library, it is more ergonomic for functions to panic in some cases,
//! because users don't want to be forced to handle an error every time they invoke a method. For
//! example, imagine having to handle the possibility of a capacity overflow every time you push
//! into a Deque. So every fallible operation comes in two forms: `try_x`, which returns a
//! [`Result`], and `x`, which panics (or calls [`handle_alloc_error`](std::alloc::handle_alloc_error)
//! when the allocator gives up).
//!
//! When this crate employs errors via [`Result`]s, it does so in a method that is strongly typed,
//! using enums for static dispatch rather than dynamic, with structs (often ZSTs) that implement
//! [`Error`](std::error::Error).
//!
//! Operations which can run user code part way through (cloning, closures passed to `emplace`)
//! either leave the container exactly as it was when that code panics, or at least leave it valid.
//! Each method notes which one it provides.
//!
//! # Dependencies
//! I'm not going to go and use [`Vec`] or [`VecDeque`](std::collections::VecDeque) to write
//! anything here. The only dependency is a set of derive macros, because they're helpful and remove
//! the need for some very repetitive programming.

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod collections;

pub(crate) mod util;
