//! Binary heap algorithms over slices. A slice is a heap when no element is ordered before either
//! of its children, the children of `i` being `2i + 1` and `2i + 2`. The top of the heap is index
//! 0.
//!
//! These only ever swap elements, so a panicking comparison leaves the slice a permutation of
//! what it was.

use super::Compare;

/// Moves the last element of `heap` up into place, assuming everything before it is already a
/// heap.
pub fn push_heap<T, C: Compare<T>>(heap: &mut [T], compare: &C) {
    let Some(mut hole) = heap.len().checked_sub(1) else { return; };

    while hole > 0 {
        let parent = (hole - 1) / 2;
        if !compare.less(&heap[parent], &heap[hole]) { break; }

        heap.swap(parent, hole);
        hole = parent;
    }
}

/// Moves the top of `heap` to the end, then restores the heap over every element before it.
pub fn pop_heap<T, C: Compare<T>>(heap: &mut [T], compare: &C) {
    let len = heap.len();
    if len <= 1 { return; }

    heap.swap(0, len - 1);
    sift_down(&mut heap[..len - 1], 0, compare);
}

/// Rearranges `heap` into a heap in `O(n)`.
///
/// # Examples
/// ```
/// # use segmented_std::algorithm::{is_heap, make_heap, Less};
/// let mut values = [3, 1, 4, 1, 5, 9, 2, 6];
/// make_heap(&mut values, &Less);
/// assert!(is_heap(&values, &Less));
/// assert_eq!(values[0], 9);
/// ```
pub fn make_heap<T, C: Compare<T>>(heap: &mut [T], compare: &C) {
    for hole in (0..heap.len() / 2).rev() {
        sift_down(heap, hole, compare);
    }
}

/// Turns a heap into a slice sorted in ascending order according to `compare`.
pub fn sort_heap<T, C: Compare<T>>(heap: &mut [T], compare: &C) {
    for end in (1..heap.len()).rev() {
        heap.swap(0, end);
        sift_down(&mut heap[..end], 0, compare);
    }
}

/// Returns true if `heap` satisfies the heap property.
pub fn is_heap<T, C: Compare<T>>(heap: &[T], compare: &C) -> bool {
    (1..heap.len()).all(|child| !compare.less(&heap[(child - 1) / 2], &heap[child]))
}

fn sift_down<T, C: Compare<T>>(heap: &mut [T], mut hole: usize, compare: &C) {
    let len = heap.len();

    loop {
        let left = 2 * hole + 1;
        if left >= len { break; }

        let right = left + 1;
        let child = if right < len && compare.less(&heap[left], &heap[right]) {
            right
        } else {
            left
        };

        if !compare.less(&heap[hole], &heap[child]) { break; }

        heap.swap(hole, child);
        hole = child;
    }
}
