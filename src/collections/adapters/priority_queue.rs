use std::fmt::{self, Debug, Formatter};
use std::mem;

use crate::algorithm::{Compare, Less, make_heap, pop_heap, push_heap, sort_heap};
use crate::collections::contiguous::Vector;

/// A queue which always pops the element ordered last by `C`, which is the greatest element for
/// the default [`Less`]. Elements are stored in a [`Vector`] arranged as a binary heap.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the PriorityQueue.
///
/// | Method | Complexity |
/// |-|-|
/// | `top` | `O(1)` |
/// | `push` | `O(log n)`*, `O(n)` |
/// | `pop` | `O(log n)` |
/// | `from_iter` | `O(n)` |
/// | `into_sorted_vector` | `O(n log n)` |
///
/// \* amortized, while the backing Vector isn't reallocating.
///
/// # Examples
/// ```
/// # use segmented_std::algorithm::Greater;
/// # use segmented_std::collections::adapters::PriorityQueue;
/// let mut max: PriorityQueue<_> = [3, 1, 4, 1, 5].into_iter().collect();
/// assert_eq!(max.pop(), Some(5));
/// assert_eq!(max.top(), Some(&4));
///
/// let mut min = PriorityQueue::with_compare(Greater);
/// min.extend([3, 1, 4]);
/// assert_eq!(min.pop(), Some(1));
/// ```
pub struct PriorityQueue<T, C = Less> {
    pub(crate) heap: Vector<T>,
    pub(crate) compare: C,
}

impl<T, C: Compare<T> + Default> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue with the default ordering.
    pub fn new() -> PriorityQueue<T, C> {
        PriorityQueue::with_compare(C::default())
    }
}

impl<T, C: Compare<T>> PriorityQueue<T, C> {
    /// Creates a new, empty PriorityQueue which orders elements with `compare`.
    pub fn with_compare(compare: C) -> PriorityQueue<T, C> {
        PriorityQueue {
            heap: Vector::new(),
            compare,
        }
    }

    /// Creates a PriorityQueue from the elements of `vector`, rearranging them into a heap.
    pub fn from_vector(mut vector: Vector<T>, compare: C) -> PriorityQueue<T, C> {
        make_heap(&mut vector, &compare);
        PriorityQueue {
            heap: vector,
            compare,
        }
    }

    /// Returns the number of elements in the PriorityQueue.
    pub const fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if the PriorityQueue contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns a reference to the element that will be popped next, if it exists.
    pub fn top(&self) -> Option<&T> {
        self.heap.first()
    }

    /// Adds the provided value to the PriorityQueue.
    pub fn push(&mut self, value: T) {
        self.heap.push(value);
        push_heap(&mut self.heap, &self.compare);
    }

    /// Constructs a value with `f` and adds it to the PriorityQueue.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) {
        self.push(f());
    }

    /// Removes the top element and returns it, if the PriorityQueue isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        pop_heap(&mut self.heap, &self.compare);
        self.heap.pop()
    }

    /// Drops every element in the PriorityQueue.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Swaps the contents and orderings of self and `other`.
    pub fn swap_with(&mut self, other: &mut PriorityQueue<T, C>) {
        mem::swap(self, other);
    }

    /// Returns the ordering used by the PriorityQueue.
    pub const fn compare(&self) -> &C {
        &self.compare
    }

    /// Consumes the PriorityQueue, returning its elements sorted so that the top is last.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::adapters::PriorityQueue;
    /// let queue: PriorityQueue<_> = [2, 3, 1].into_iter().collect();
    /// assert_eq!(&*queue.into_sorted_vector(), &[1, 2, 3]);
    /// ```
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        sort_heap(&mut self.heap, &self.compare);
        self.heap
    }

    /// Consumes the PriorityQueue, returning its elements in heap order.
    pub fn into_vector(self) -> Vector<T> {
        self.heap
    }
}

impl<T, C: Compare<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityQueue::from_vector(iter.into_iter().collect(), C::default())
    }
}

impl<T, C: Compare<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.heap.reserve(iter.size_hint().0);

        for value in iter {
            self.push(value);
        }
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        PriorityQueue {
            heap: self.heap.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T: Debug, C> Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &&*self.heap)
            .field("len", &self.heap.len())
            .finish()
    }
}
