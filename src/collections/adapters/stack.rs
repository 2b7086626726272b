use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem;

use super::StackSequence;
use crate::collections::segmented::Deque;

/// A last in, first out adapter over a [`StackSequence`], which is a [`Deque`] unless otherwise
/// specified. Only the back of the sequence is ever accessed.
///
/// # Examples
/// ```
/// # use segmented_std::collections::adapters::Stack;
/// # use segmented_std::collections::contiguous::Vector;
/// let mut stack = Stack::<_>::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.pop(), Some(2));
///
/// let mut stack: Stack<u8, Vector<u8>> = Stack::new();
/// stack.push(3);
/// assert_eq!(stack.top(), Some(&3));
/// ```
pub struct Stack<T, S = Deque<T>> {
    pub(crate) seq: S,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T, S: StackSequence<Item = T>> Stack<T, S> {
    /// Creates a new, empty Stack.
    pub fn new() -> Stack<T, S> {
        Stack::from_sequence(S::default())
    }

    /// Creates a Stack from an existing sequence. The back of the sequence becomes the top.
    pub fn from_sequence(seq: S) -> Stack<T, S> {
        Stack {
            seq,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Stack.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns true if the Stack contains no elements.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Returns a reference to the most recently pushed element, if it exists.
    pub fn top(&self) -> Option<&T> {
        self.seq.back()
    }

    /// Returns a mutable reference to the most recently pushed element, if it exists.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.seq.back_mut()
    }

    /// Pushes the provided value onto the top of the Stack.
    pub fn push(&mut self, value: T) {
        self.seq.push_back(value);
    }

    /// Constructs a value with `f` on the top of the Stack, returning a reference to it.
    pub fn emplace_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.seq.emplace_back_with(f)
    }

    /// Removes the top element and returns it, if the Stack isn't empty.
    pub fn pop(&mut self) -> Option<T> {
        self.seq.pop_back()
    }

    /// Drops every element in the Stack.
    pub fn clear(&mut self) {
        self.seq.clear();
    }

    /// Swaps the contents of self and `other`.
    pub fn swap_with(&mut self, other: &mut Stack<T, S>) {
        mem::swap(&mut self.seq, &mut other.seq);
    }

    /// Returns the underlying sequence.
    pub fn into_inner(self) -> S {
        self.seq
    }
}

impl<T, S: StackSequence<Item = T>> Default for Stack<T, S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: StackSequence<Item = T> + FromIterator<T>> FromIterator<T> for Stack<T, S> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from_sequence(iter.into_iter().collect())
    }
}

impl<T, S: StackSequence<Item = T> + Extend<T>> Extend<T> for Stack<T, S> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.seq.extend(iter);
    }
}

impl<T, S: Clone> Clone for Stack<T, S> {
    fn clone(&self) -> Self {
        Stack {
            seq: self.seq.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<T, S: PartialEq> PartialEq for Stack<T, S> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl<T, S: Eq> Eq for Stack<T, S> {}

impl<T, S: PartialOrd> PartialOrd for Stack<T, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.seq.partial_cmp(&other.seq)
    }
}

impl<T, S: Ord> Ord for Stack<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.seq.cmp(&other.seq)
    }
}

impl<T, S: Hash> Hash for Stack<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seq.hash(state);
    }
}

impl<T, S: Debug> Debug for Stack<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("seq", &self.seq).finish()
    }
}
