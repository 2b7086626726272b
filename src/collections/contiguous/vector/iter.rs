use std::mem::ManuallyDrop;
use std::ptr;

use super::Vector;
#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let vec = ManuallyDrop::new(self);
        IntoIter {
            // SAFETY: vec is never dropped, so ownership of the Array moves into the iterator
            // without any spare capacity being released first.
            arr: unsafe { ptr::read(&vec.arr) },
            start: 0,
            end: vec.len,
        }
    }
}
