use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::QueueSequence;
use crate::collections::segmented::Deque;

/// A first in, first out adapter over a [`QueueSequence`], which is a [`Deque`] unless otherwise
/// specified. Elements are pushed to the back and popped from the front.
///
/// # Examples
/// ```
/// # use segmented_std::collections::adapters::Queue;
/// let mut queue = Queue::<_>::new();
/// queue.push('a');
/// queue.push('b');
/// assert_eq!(queue.front(), Some(&'a'));
/// assert_eq!(queue.back(), Some(&'b'));
/// assert_eq!(queue.pop(), Some('a'));
/// ```
pub struct Queue<T, S = Deque<T>> {
    pub(crate) seq: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, S: QueueSequence<Item = T>> Queue<T, S> {
    /// Creates a new, empty Queue.
    pub fn new() -> Queue<T, S> {
        Queue::from_sequence(S::default())
    }

    /// Creates a Queue from an existing sequence. The front of the sequence is the first to be
    /// popped.
    pub fn from_sequence(seq: S) -> Queue<T, S> {
        Queue {
            seq,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Queue.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns true if the Queue contains no elements.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns a reference to the element that will be popped next, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.seq.front()
    }

    /// Returns a mutable reference to the element that will be popped next, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.seq.front_mut()
    }

    /// Returns a reference to the most recently pushed element, if it exists.
    pub fn back(&self) -> Option<&T> {
        self.seq.back()
    }

    /// Returns a mutable reference to the most recently pushed element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    /// Pushes the provided value onto the back of the Queue.
    pub fn push(&mut self, value: T) {
        self.seq.push_back(value);
    }

    /// Constructs a value with `f` at the back of the Queue, returning a reference to it.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.seq.emplace_back_with(f)
    }

    /// Removes the front element and returns it, if the Queue isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_front()
    }

    /// Drops every element in the Queue.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Swaps the contents of self and `other`.
    pub fn swap_with(&mut self, other: &mut Queue<T, S>) {
        mem::swap(&mut self.seq, &mut other.seq);
    }

    /// Returns the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<T, S: QueueSequence<Item = T>> Default for Queue<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: QueueSequence<Item = T> + FromIterator<T>> FromIterator<T> for Queue<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue::from_sequence(iter.into_iter().collect())
    }
}

impl<T, S: QueueSequence<Item = T> + Extend<T>> Extend<T> for Queue<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.seq.extend(iter);
    }
}

impl<T, S: Clone> Clone for Queue<T, S> {
    fn clone(&self) -> Self {
        Queue {
            seq: self.seq.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, S: PartialEq> PartialEq for Queue<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, S: Eq> Eq for Queue<T, S> {}

impl<T, S: PartialOrd> PartialOrd for Queue<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, S: Ord> Ord for Queue<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.cmp(&other.seq)
    }
}

impl<T, S: Hash> Hash for Queue<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seq.hash(state);
    }
}

impl<T, S: Debug> Debug for Queue<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue").field("seq", &self.seq).finish()
    }
}
