use crate::collections::contiguous::Vector;
use crate::collections::segmented::Deque;
use crate::util::option::OptionExtension;

/// The operations shared by every sequence an adapter can be built on. Only the back of the
/// sequence is accessed.
pub trait Sequence: Default {
    /// The type of element held by the sequence.
    type Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every element in the sequence.
    fn clear(&mut self);

    /// Returns a reference to the last element, if it exists.
    fn back(&self) -> Option<&Self::Item>;

    /// Returns a mutable reference to the last element, if it exists.
    fn back_mut(&mut self) -> Option<&mut Self::Item>;

    /// Adds the provided value to the back of the sequence.
    fn push_back(&mut self, value: Self::Item);

    /// Constructs a value with `f` at the back of the sequence, returning a reference to it.
    fn emplace_back_with<F: FnOnce() -> Self::Item>(&mut self, f: F) -> &mut Self::Item;
}

/// A [`Sequence`] which can remove from the back, as required by
/// [`Stack`](super::Stack).
pub trait StackSequence: Sequence {
    /// Removes the last element and returns it, if the sequence isn't empty.
    fn pop_back(&mut self) -> Option<Self::Item>;
}

/// A [`Sequence`] which can also access and remove from the front, as required by
/// [`Queue`](super::Queue).
pub trait QueueSequence: Sequence {
    /// Returns a reference to the first element, if it exists.
    fn front(&self) -> Option<&Self::Item>;

    /// Returns a mutable reference to the first element, if it exists.
    fn front_mut(&mut self) -> Option<&mut Self::Item>;

    /// Removes the first element and returns it, if the sequence isn't empty.
    fn pop_front(&mut self) -> Option<Self::Item>;
}

impl<T> Sequence for Deque<T> {
    type Item = T;

    fn len(&self) -> usize {
        Deque::len(self)
    }

    fn clear(&mut self) {
        Deque::clear(self)
    }

    fn back(&self) -> Option<&T> {
        Deque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        Deque::back_mut(self)
    }

    fn push_back(&mut self, value: T) {
        Deque::push_back(self, value)
    }

    fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        Deque::emplace_back_with(self, f)
    }
}

impl<T> StackSequence for Deque<T> {
    fn pop_back(&mut self) -> Option<T> {
        Deque::pop_back(self)
    }
}

impl<T> QueueSequence for Deque<T> {
    fn front(&self) -> Option<&T> {
        Deque::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        Deque::front_mut(self)
    }

    fn pop_front(&mut self) -> Option<T> {
        Deque::pop_front(self)
    }
}

// Vector can't remove from the front in constant time, so it only backs stacks.
impl<T> Sequence for Vector<T> {
    type Item = T;

    fn len(&self) -> usize {
        Vector::len(self)
    }

    fn clear(&mut self) {
        Vector::clear(self)
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }

    fn push_back(&mut self, value: T) {
        self.push(value)
    }

    fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.push(f());
        // SAFETY: A value was just pushed, so there is a last element.
        unsafe { self.last_mut().unreachable() }
    }
}

impl<T> StackSequence for Vector<T> {
    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }
}
