use std::iter::FusedIterator;
use std::mem::MaybeUninit;
use std::ptr;

use super::Array;
#[allow(unused)]
use crate::collections::contiguous::Vector;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size;
        IntoIter {
            arr: self.forget_init(),
            start: 0,
            end: size,
        }
    }
}

/// An owned type for owned iteration over an [`Array`] or [`Vector`]. See [`Array::into_iter`] and
/// [`Vector::into_iter`].
///
/// Values in `start..end` are initialized, everything else has already been moved out. The
/// allocation itself is released when the iterator is dropped.
pub struct IntoIter<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for i in self.start..self.end {
            // SAFETY: Values in start..end haven't been yielded yet and are initialized.
            unsafe { self.arr[i].assume_init_drop() }
        }
        // arr only holds MaybeUninit values, so dropping it just deallocates.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            // SAFETY: start is within the initialized range. It is incremented immediately, so the
            // value is effectively moved out of the Array.
            let value = unsafe { ptr::read(&self.arr[self.start]).assume_init() };
            self.start += 1;
            Some(value)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len(), Some(self.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start < self.end {
            self.end -= 1;
            // SAFETY: The newly decremented end is within the initialized range and is no longer
            // considered initialized.
            let value = unsafe { ptr::read(&self.arr[self.end]).assume_init() };
            Some(value)
        } else {
            None
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

// Just use the iter and iter_mut definitions provided by Deref<Target=[T]>.
