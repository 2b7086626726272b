use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::map::BufferMap;
use super::{Deque, Position};

impl<T> Deque<T> {
    /// Returns an iterator over references to the elements of the Deque, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            map: &self.map,
            front: self.begin,
            back: self.end,
            _phantom: PhantomData,
        }
    }

    /// Returns an iterator over mutable references to the elements of the Deque, front to back.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            map: &self.map,
            front: self.begin,
            back: self.end,
            _phantom: PhantomData,
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            deque: self,
        }
    }
}

/// An owned iterator over the elements of a [`Deque`]. Buffers are released as they are emptied.
pub struct IntoIter<T> {
    // Popping from the held Deque already frees each buffer once it is empty.
    pub(crate) deque: Deque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.deque.len()
    }
}

impl<T: Debug> Debug for IntoIter<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.deque.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Deque<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A borrowed iterator over the elements of a [`Deque`]. `nth` and `nth_back` jump directly to the
/// requested element.
pub struct Iter<'a, T> {
    pub(crate) map: &'a BufferMap<T>,
    pub(crate) front: Position<T>,
    pub(crate) back: Position<T>,
    pub(crate) _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        // SAFETY: front is before back, so it refers to an initialized element which outlives 'a.
        let value = unsafe { &*self.map.slot_ptr(self.front) };
        self.front.inc();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }

        self.front += n as isize;
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        self.back.dec();
        // SAFETY: The decremented back is at or after front, so it refers to an initialized
        // element.
        Some(unsafe { &*self.map.slot_ptr(self.back) })
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }

        self.back -= n as isize;
        self.next_back()
    }
}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {
    fn len(&self) -> usize {
        (self.back - self.front) as usize
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            map: self.map,
            front: self.front,
            back: self.back,
            _phantom: PhantomData,
        }
    }
}

impl<'a, T: Debug> Debug for Iter<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> IntoIterator for &'a mut Deque<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// A mutable borrowed iterator over the elements of a [`Deque`].
pub struct IterMut<'a, T> {
    // The map is only ever read, element access goes through the raw buffer pointers. Each
    // position is yielded once, so no two references alias.
    pub(crate) map: &'a BufferMap<T>,
    pub(crate) front: Position<T>,
    pub(crate) back: Position<T>,
    pub(crate) _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        // SAFETY: front is before back, so it refers to an initialized element. The Deque is
        // borrowed mutably for 'a and this position is never yielded again.
        let value = unsafe { &mut *self.map.slot_ptr(self.front) };
        self.front.inc();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.front = self.back;
            return None;
        }

        self.front += n as isize;
        self.next()
    }

    fn count(self) -> usize {
        self.len()
    }

    fn last(mut self) -> Option<Self::Item> {
        self.next_back()
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back { return None; }

        self.back.dec();
        // SAFETY: As for next, from the other end.
        Some(unsafe { &mut *self.map.slot_ptr(self.back) })
    }

    fn nth_back(&mut self, n: usize) -> Option<Self::Item> {
        if n >= self.len() {
            self.back = self.front;
            return None;
        }

        self.back -= n as isize;
        self.next_back()
    }
}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {
    fn len(&self) -> usize {
        (self.back - self.front) as usize
    }
}
