use std::mem::MaybeUninit;

use crate::collections::contiguous::Array;

/// The number of map slots allocated for a new [`Deque`](super::Deque), before accounting for the
/// buffers it needs up front.
pub const INIT_MAP_SIZE: usize = 8;

/// The number of elements held by each buffer of a [`Deque<T>`](super::Deque).
///
/// Small types get roughly a page worth of elements per buffer, types of 256 bytes or more get
/// 16. Zero-sized types never allocate, so their buffers are simply 4096 elements long.
///
/// # Examples
/// ```
/// # use segmented_std::collections::segmented::buffer_size;
/// assert_eq!(buffer_size::<u8>(), 4096);
/// assert_eq!(buffer_size::<u64>(), 512);
/// assert_eq!(buffer_size::<[u8; 300]>(), 16);
/// ```
pub const fn buffer_size<T>() -> usize {
    match size_of::<T>() {
        0 => 4096,
        size if size < 256 => 4096 / size,
        _ => 16,
    }
}

/// A single fixed-size block of element storage. Which elements are initialized is tracked by the
/// owning Deque's begin and end positions, never by the buffer itself.
pub(crate) type Buffer<T> = Array<MaybeUninit<T>>;
