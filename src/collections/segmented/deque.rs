use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::iter;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr;

use super::map::{BufferMap, End};
use super::{Position, buffer_size};
use crate::algorithm::base;
use crate::algorithm::category::Category;
use crate::collections::contiguous::Vector;
#[doc(inline)]
pub use crate::util::error::{IndexOrReserveError, IndexOutOfBounds, ReserveError};
use crate::util::result::{ReserveResultExtension, ResultExtension};

/// A double-ended queue, storing its elements in a series of fixed-size buffers which are
/// referenced by a central map.
///
/// Growing at either end only ever allocates new buffers, elements are never moved to make room.
/// When the map itself runs out of slots it is replaced by one at least twice the size, with the
/// active buffers moved into the middle so that there is room to grow on both sides. A map that is
/// mostly empty is recentered in place instead. Inserting or removing in the middle shifts
/// whichever side has fewer elements.
///
/// Locations within a Deque are described by [`Position`]s, which support constant time
/// arithmetic across buffer boundaries.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Deque.
/// - `i`: The index of the item in question.
/// - `k`: The number of items being inserted or removed.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push_front/back` | `O(1)`* |
/// | `pop_front/back` | `O(1)` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `insert_n` | `O(min(i, n-i) + k)` |
/// | `erase_range` | `O(min(i, n-i) + k)` |
/// | `clear` | `O(n)` |
///
/// \* When a push needs a new buffer, the map may also be reallocated which takes time proportional
/// to the number of buffers, `O(n / buffer_size)`. Map reallocations at least double its size, so
/// this is amortized to `O(1)`.
///
/// # Panic Safety
/// Pushes, emplaces and insertions either complete or leave the Deque exactly as it was. Values are
/// produced (or cloned into a staging [`Vector`]) after any capacity has been reserved but before
/// any element is moved. Other mutating operations only guarantee that the Deque is left valid,
/// for example a panicking [`Drop`] implementation can cause elements to be leaked.
pub struct Deque<T> {
    pub(crate) map: BufferMap<T>,
    pub(crate) begin: Position<T>,
    pub(crate) end: Position<T>,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Deque<T> {
    /// Creates a new Deque with no elements. No memory is allocated until the first element is
    /// added.
    pub const fn new() -> Deque<T> {
        Deque {
            map: BufferMap::null(),
            begin: Position::new(0, 0),
            end: Position::new(0, 0),
            _phantom: PhantomData,
        }
    }

    /// Creates a new Deque with enough buffers to push `cap` elements to the back without
    /// allocating. Even with a `cap` of 0, one buffer is allocated.
    ///
    /// # Panics
    /// Panics if the memory layout of the map or a buffer would exceed [`isize::MAX`].
    pub fn with_cap(cap: usize) -> Deque<T> {
        Self::try_with_cap(cap).throw_alloc()
    }

    /// The fallible counterpart of [`Deque::with_cap`].
    pub fn try_with_cap(cap: usize) -> Result<Deque<T>, ReserveError> {
        let mut deque = Deque::new();
        deque.try_map_init(cap)?;
        Ok(deque)
    }

    /// Creates a new Deque containing `count` values, each produced by calling `f`.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let mut next = 0;
    /// let deque = Deque::repeat_with(|| { next += 1; next }, 4);
    /// assert_eq!(deque, Deque::from([1, 2, 3, 4]));
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(mut f: F, count: usize) -> Deque<T> {
        let mut deque = Deque::with_cap(count);
        for _ in 0..count {
            deque.push_back(f());
        }
        deque
    }

    /// Returns the number of elements in the Deque.
    pub fn len(&self) -> usize {
        (self.end - self.begin) as usize
    }

    /// Returns true if the Deque contains no elements.
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }

    /// Returns the largest number of elements a Deque of `T` could theoretically hold.
    pub const fn max_size(&self) -> usize {
        match size_of::<T>() {
            0 => usize::MAX,
            size => isize::MAX as usize / size,
        }
    }

    /// Returns the number of buffers currently allocated, including any that are reserved outside
    /// of the active range.
    pub fn buffer_count(&self) -> usize {
        self.map.buffer_count()
    }

    /// Returns the number of slots in the map. This is 0 for a Deque that has never allocated.
    pub const fn map_size(&self) -> usize {
        self.map.size()
    }

    /// Returns the Position of the first element, or [`end`](Deque::end) if the Deque is empty.
    pub const fn begin(&self) -> Position<T> {
        self.begin
    }

    /// Returns the Position one past the last element.
    pub const fn end(&self) -> Position<T> {
        self.end
    }

    /// Returns the Position of the element at `index`. An `index` equal to the length gives
    /// [`end`](Deque::end).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length.
    pub fn position(&self, index: usize) -> Position<T> {
        if index > self.len() {
            Err(IndexOutOfBounds { index, len: self.len() }).throw()
        }
        self.begin + index as isize
    }

    /// Returns the index of `pos`, if it is within `begin()..=end()`.
    pub fn index_of_position(&self, pos: Position<T>) -> Option<usize> {
        if self.begin <= pos && pos <= self.end {
            Some((pos - self.begin) as usize)
        } else {
            None
        }
    }

    /// Returns a reference to the element at `pos`, if it refers to an element.
    pub fn get_at(&self, pos: Position<T>) -> Option<&T> {
        if self.begin <= pos && pos < self.end {
            // SAFETY: pos is within the active range, so it refers to an initialized element.
            Some(unsafe { &*self.map.slot_ptr(pos) })
        } else {
            None
        }
    }

    /// Returns a mutable reference to the element at `pos`, if it refers to an element.
    pub fn get_at_mut(&mut self, pos: Position<T>) -> Option<&mut T> {
        if self.begin <= pos && pos < self.end {
            // SAFETY: pos is within the active range, and self is borrowed mutably.
            Some(unsafe { &mut *self.map.slot_ptr(pos) })
        } else {
            None
        }
    }

    /// Returns a reference to the element at `index`, if it exists.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.try_get(index).ok()
    }

    /// Returns a mutable reference to the element at `index`, if it exists.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.try_get_mut(index).ok()
    }

    /// Returns a reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let deque = Deque::from(['a', 'b']);
    /// assert_eq!(deque.try_get(1), Ok(&'b'));
    /// assert!(deque.try_get(2).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is less than len, so the position is within the active range.
        Ok(unsafe { &*self.map.slot_ptr(self.begin + index as isize) })
    }

    /// Returns a mutable reference to the element at `index`, or an [`IndexOutOfBounds`] error.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index is less than len, so the position is within the active range.
        Ok(unsafe { &mut *self.map.slot_ptr(self.begin + index as isize) })
    }

    /// Returns a reference to the first element, if it exists.
    pub fn front(&self) -> Option<&T> {
        self.get_at(self.begin)
    }

    /// Returns a mutable reference to the first element, if it exists.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_at_mut(self.begin)
    }

    /// Returns a reference to the last element, if it exists.
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() { return None; }
        self.get_at(self.end - 1)
    }

    /// Returns a mutable reference to the last element, if it exists.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() { return None; }
        self.get_at_mut(self.end - 1)
    }

    /// Ensures that `extra` elements can be pushed to the front without allocating.
    ///
    /// # Panics
    /// Panics if the memory layout of the map or a buffer would exceed [`isize::MAX`].
    pub fn reserve_front(&mut self, extra: usize) {
        self.try_reserve_front(extra).throw_alloc()
    }

    /// The fallible counterpart of [`Deque::reserve_front`]. On an [`Err`], no elements have been
    /// moved.
    pub fn try_reserve_front(&mut self, extra: usize) -> Result<(), ReserveError> {
        self.try_require_capacity(extra, End::Front)
    }

    /// Ensures that `extra` elements can be pushed to the back without allocating.
    ///
    /// # Panics
    /// Panics if the memory layout of the map or a buffer would exceed [`isize::MAX`].
    pub fn reserve_back(&mut self, extra: usize) {
        self.try_reserve_back(extra).throw_alloc()
    }

    /// The fallible counterpart of [`Deque::reserve_back`]. On an [`Err`], no elements have been
    /// moved.
    pub fn try_reserve_back(&mut self, extra: usize) -> Result<(), ReserveError> {
        self.try_require_capacity(extra, End::Back)
    }

    /// Adds the provided value to the front of the Deque.
    ///
    /// # Panics
    /// Panics if the memory layout of the map or a buffer would exceed [`isize::MAX`].
    pub fn push_front(&mut self, value: T) {
        self.try_push_front(value).throw_alloc()
    }

    /// Adds the provided value to the front of the Deque, returning an [`Err`] and dropping the
    /// value if a new buffer was needed and couldn't be allocated.
    pub fn try_push_front(&mut self, value: T) -> Result<(), ReserveError> {
        self.try_emplace_front_with(|| value).map(|_| ())
    }

    /// Adds the provided value to the back of the Deque.
    ///
    /// # Panics
    /// Panics if the memory layout of the map or a buffer would exceed [`isize::MAX`].
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).throw_alloc()
    }

    /// Adds the provided value to the back of the Deque, returning an [`Err`] and dropping the
    /// value if a new buffer was needed and couldn't be allocated.
    pub fn try_push_back(&mut self, value: T) -> Result<(), ReserveError> {
        self.try_emplace_back_with(|| value).map(|_| ())
    }

    /// Constructs a value with `f` directly in front of the first element, returning a reference
    /// to it. If `f` panics, the Deque is unchanged.
    ///
    /// # Panics
    /// Panics if `f` panics or if the memory layout of the map or a buffer would exceed
    /// [`isize::MAX`].
    pub fn emplace_front_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.try_emplace_front_with(f).throw_alloc()
    }

    /// The fallible counterpart of [`Deque::emplace_front_with`]. `f` isn't called if the
    /// required capacity couldn't be allocated.
    pub fn try_emplace_front_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, ReserveError> {
        self.try_require_capacity(1, End::Front)?;
        let value = f();

        let mut new_begin = self.begin;
        new_begin.dec();

        // SAFETY: Capacity for one more element has been ensured, so the buffer at new_begin
        // exists and the slot is unused.
        unsafe {
            let slot = self.map.slot_ptr(new_begin);
            slot.write(value);
            self.begin = new_begin;
            Ok(&mut *slot)
        }
    }

    /// Constructs a value with `f` directly after the last element, returning a reference to it.
    /// If `f` panics, the Deque is unchanged.
    ///
    /// # Panics
    /// Panics if `f` panics or if the memory layout of the map or a buffer would exceed
    /// [`isize::MAX`].
    pub fn emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> &mut T {
        self.try_emplace_back_with(f).throw_alloc()
    }

    /// The fallible counterpart of [`Deque::emplace_back_with`]. `f` isn't called if the required
    /// capacity couldn't be allocated.
    pub fn try_emplace_back_with<F: FnOnce() -> T>(&mut self, f: F) -> Result<&mut T, ReserveError> {
        self.try_require_capacity(1, End::Back)?;
        let value = f();

        // SAFETY: end always refers to an unused slot in an existing buffer, and capacity for one
        // more element means that the buffer after it exists if end moves into it.
        unsafe {
            let slot = self.map.slot_ptr(self.end);
            slot.write(value);
            self.end.inc();
            Ok(&mut *slot)
        }
    }

    /// Constructs a value with `f` and inserts it at `pos`, returning the Position of the new
    /// element. If `f` panics, the Deque is unchanged.
    ///
    /// # Panics
    /// Panics if `pos` isn't within `begin()..=end()`, if `f` panics or if the memory layout of
    /// the map or a buffer would exceed [`isize::MAX`].
    pub fn emplace_at_with<F: FnOnce() -> T>(&mut self, pos: Position<T>, f: F) -> Position<T> {
        let index = self.expect_index_of(pos);
        let value = f();
        self.try_splice(index, iter::once(value)).throw_alloc()
    }

    /// Removes the first element and returns it, if the Deque isn't empty. If this empties the
    /// first buffer, it is released.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() { return None; }

        let old_begin = self.begin;
        // SAFETY: The Deque isn't empty, so begin refers to an initialized element. begin is
        // moved past it immediately, so it is no longer considered initialized.
        let value = unsafe { self.map.slot_ptr(self.begin).read() };
        self.begin.inc();
        self.release_front(old_begin);

        Some(value)
    }

    /// Removes the last element and returns it, if the Deque isn't empty. If this empties the
    /// last buffer, it is released.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() { return None; }

        let old_end = self.end;
        self.end.dec();
        // SAFETY: The Deque wasn't empty, so the decremented end refers to an initialized element
        // which is now outside of the active range.
        let value = unsafe { self.map.slot_ptr(self.end).read() };
        self.release_back(old_end);

        Some(value)
    }

    /// Inserts `value` at `index`, shifting whichever side of it holds fewer elements.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length or if the memory layout of the map or a buffer
    /// would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let mut deque = Deque::from([0, 1, 2, 3]);
    /// deque.insert(1, 99);
    /// assert_eq!(deque, Deque::from([0, 99, 1, 2, 3]));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Position<T> {
        match self.try_insert(index, value) {
            Ok(pos) => pos,
            Err(IndexOrReserveError::IndexOutOfBounds(error)) => Err(error).throw(),
            Err(IndexOrReserveError::Reserve(error)) => Err(error).throw_alloc(),
        }
    }

    /// Inserts `value` at `index`, returning the Position of the new element. On an [`Err`], the
    /// Deque is unchanged and `value` is dropped.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<Position<T>, IndexOrReserveError> {
        self.check_insert_index(index)?;
        Ok(self.try_splice(index, iter::once(value))?)
    }

    /// Inserts `value` at `pos`, returning the Position of the new element.
    ///
    /// # Panics
    /// Panics if `pos` isn't within `begin()..=end()` or if the memory layout of the map or a
    /// buffer would exceed [`isize::MAX`].
    pub fn insert_at(&mut self, pos: Position<T>, value: T) -> Position<T> {
        let index = self.expect_index_of(pos);
        self.try_splice(index, iter::once(value)).throw_alloc()
    }

    /// Inserts `count` clones of `value` at `index`, returning the Position of the first one. All
    /// clones are made before the Deque is modified, so a panicking [`Clone`] leaves it unchanged.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, if cloning panics or if the memory layout of
    /// the map or a buffer would exceed [`isize::MAX`].
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Position<T>
    where
        T: Clone,
    {
        self.check_insert_index(index).throw();
        let staged = Self::stage(iter::repeat_n(value, count));
        self.try_splice(index, staged.into_iter()).throw_alloc()
    }

    /// Inserts every item of `values` at `index`, in order, returning the Position of the first
    /// one. The items are collected before the Deque is modified, so a panicking iterator leaves
    /// it unchanged.
    ///
    /// # Panics
    /// Panics if `index` is greater than the length, if iteration panics or if the memory layout
    /// of the map or a buffer would exceed [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let mut deque = Deque::from([1, 5]);
    /// deque.insert_iter(1, 2..5);
    /// assert_eq!(deque, Deque::from([1, 2, 3, 4, 5]));
    /// ```
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, values: I) -> Position<T> {
        self.check_insert_index(index).throw();
        let staged = Self::stage(values.into_iter());
        self.try_splice(index, staged.into_iter()).throw_alloc()
    }

    /// Removes and returns the element at `index`, closing the gap from whichever side holds
    /// fewer elements.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes and returns the element at `index`, or returns an [`IndexOutOfBounds`] error.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index)?;
        let len = self.len();

        // SAFETY: index is in bounds so the element is initialized. The gap is closed before self
        // is accessible again.
        unsafe {
            let value = self.map.slot_ptr(self.begin + index as isize).read();
            self.close_gap(index, 1, if index < len / 2 { End::Front } else { End::Back });
            Ok(value)
        }
    }

    /// Drops the element at `pos`, returning the Position of the element that followed it.
    ///
    /// # Panics
    /// Panics if `pos` doesn't refer to an element.
    pub fn erase(&mut self, pos: Position<T>) -> Position<T> {
        let index = self.expect_index_of(pos);
        drop(self.remove(index));
        self.begin + index as isize
    }

    /// Drops every element in `first..last`, returning the Position of the element that followed
    /// them. Erasing everything is the same as [`clear`](Deque::clear).
    ///
    /// The elements are moved out and the Deque is made consistent before any of them are
    /// dropped.
    ///
    /// # Panics
    /// Panics if either position is outside of `begin()..=end()` or if `first` is after `last`.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let mut deque: Deque<_> = (0..10).collect();
    /// let next = deque.erase_range(deque.position(2), deque.position(8));
    /// assert_eq!(deque.get_at(next), Some(&8));
    /// assert_eq!(deque, Deque::from([0, 1, 8, 9]));
    /// ```
    pub fn erase_range(&mut self, first: Position<T>, last: Position<T>) -> Position<T> {
        let index = self.expect_index_of(first);
        let last_index = self.expect_index_of(last);
        let len = self.len();

        let Some(count) = last_index.checked_sub(index) else {
            panic!("Range start {index} is after its end {last_index}!");
        };

        if count == len {
            self.clear();
            return self.end;
        }
        if count == 0 { return first; }

        let mut doomed = Vector::with_cap(count);
        let mut pos = first;
        for _ in 0..count {
            // SAFETY: pos is within first..last, which is inside the active range. doomed has
            // capacity for exactly count elements.
            unsafe { doomed.push_unchecked(self.map.slot_ptr(pos).read()) }
            pos.inc();
        }

        // SAFETY: The elements in the gap have been moved into doomed.
        unsafe {
            self.close_gap(
                index,
                count,
                if index < (len - count) / 2 { End::Front } else { End::Back },
            );
        }

        drop(doomed);
        self.begin + index as isize
    }

    /// Drops every element in the Deque, releasing all buffers apart from the one holding the
    /// first position. The map is kept, with the remaining buffer moved to its center so that
    /// either end can grow without reallocating it.
    pub fn clear(&mut self) {
        if self.map.is_null() { return; }

        let old_end = self.end;
        self.end = self.begin;
        // SAFETY: The elements between begin and old_end were initialized and are no longer part
        // of the active range.
        unsafe { self.drop_range(self.begin, old_end) }
        self.shrink_to_fit();

        let center = (self.map.size() - 1) / 2;
        self.map.slots.swap(self.begin.node, center);
        self.begin = Position::new(center, 0);
        self.end = self.begin;
    }

    /// Drops every element after the first `len`. Does nothing if the Deque isn't longer than
    /// `len`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len() { return; }

        let old_end = self.end;
        self.end = self.begin + len as isize;
        // SAFETY: The elements between the new end and old_end were initialized and are no longer
        // part of the active range.
        unsafe { self.drop_range(self.end, old_end) }
        self.release_back(old_end);
    }

    /// Resizes the Deque to `len`, either by truncating it or by appending clones of `value`.
    pub fn resize(&mut self, len: usize, value: T)
    where
        T: Clone,
    {
        match len.checked_sub(self.len()) {
            Some(0) => {},
            Some(extra) => { self.insert_n(self.len(), extra, value); },
            None => self.truncate(len),
        }
    }

    /// Resizes the Deque to `len`, either by truncating it or by appending values produced by `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut f: F) {
        match len.checked_sub(self.len()) {
            Some(0) => {},
            Some(extra) => {
                self.reserve_back(extra);
                for _ in 0..extra {
                    self.push_back(f());
                }
            },
            None => self.truncate(len),
        }
    }

    /// Resizes the Deque to `len`, either by truncating it or by appending default values.
    pub fn resize_default(&mut self, len: usize)
    where
        T: Default,
    {
        self.resize_with(len, T::default);
    }

    /// Releases every buffer outside of the active range.
    pub fn shrink_to_fit(&mut self) {
        if self.map.is_null() { return; }
        self.map.destroy_buffers_outside(self.begin.node, self.end.node);
    }

    /// Swaps the contents of self and `other`. No elements are moved.
    pub fn swap_with(&mut self, other: &mut Deque<T>) {
        mem::swap(self, other);
    }

    /// Moves the contents of self into a new Deque, leaving self empty without a map.
    pub fn take(&mut self) -> Deque<T> {
        mem::take(self)
    }

    /// Moves every element of `other` to the back of self, leaving `other` empty.
    pub fn append(&mut self, other: &mut Deque<T>) {
        self.extend(other.take());
    }

    /// Replaces the contents of the Deque with `count` clones of `value`. Existing elements are
    /// assigned to rather than dropped and recreated.
    pub fn assign_n(&mut self, count: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len();
        if count > len {
            base::fill(self.iter_mut(), &value);
            self.insert_n(len, count - len, value);
        } else {
            base::fill(self.iter_mut().take(count), &value);
            self.truncate(count);
        }
    }

    /// Replaces the contents of the Deque with the items of `values`. Existing elements are
    /// assigned to, then the Deque is either truncated or extended with the remaining items.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let mut deque: Deque<_> = (0..10).collect();
    /// deque.assign([7, 8, 9]);
    /// assert_eq!(deque, Deque::from([7, 8, 9]));
    /// ```
    pub fn assign<I: IntoIterator<Item = T>>(&mut self, values: I) {
        let mut values = values.into_iter();
        let written = base::copy(values.by_ref(), self.iter_mut());

        if written < self.len() {
            self.truncate(written);
        } else {
            self.extend(values);
        }
    }

    /// Checks the structural invariants of the Deque, panicking if any don't hold.
    #[cfg(test)]
    pub(crate) fn verify_invariants(&self) {
        let buf = buffer_size::<T>();

        if self.map.is_null() {
            assert_eq!(self.begin, self.end, "A Deque without a map can't hold elements.");
            return;
        }

        assert!(self.begin <= self.end, "begin is after end.");
        assert!(self.begin.cur < buf && self.end.cur < buf, "A position left its buffer.");
        assert!(self.end.node < self.map.size(), "end is outside of the map.");
        assert_eq!(
            self.len() as isize,
            buf as isize * (self.end.node as isize - self.begin.node as isize)
                + self.end.cur as isize
                - self.begin.cur as isize,
        );

        for node in self.begin.node..=self.end.node {
            assert!(self.map.slots[node].is_some(), "Slot {node} in the active range is empty.");
        }
    }

    /// Collects `values` into a staging Vector, reserving up front when the length is known.
    fn stage<I: Iterator<Item = T>>(values: I) -> Vector<T> {
        let mut staged = match Category::of_size_hint(values.size_hint()) {
            Category::Input => Vector::new(),
            _ => Vector::with_cap(values.size_hint().0),
        };

        for value in values {
            staged.push(value);
        }

        staged
    }

    /// Moves `values` into the Deque at `index`, shifting whichever side holds fewer elements
    /// first. Returns the Position of the first new element.
    ///
    /// `values` has to yield exactly its reported length without panicking, which is why it is
    /// only ever a single value or a staged Vector. On an [`Err`], the Deque is unchanged and the
    /// values are dropped.
    fn try_splice<I: ExactSizeIterator<Item = T>>(
        &mut self,
        index: usize,
        values: I,
    ) -> Result<Position<T>, ReserveError> {
        let count = values.len();
        let len = self.len();
        if count == 0 { return Ok(self.begin + index as isize); }

        if index < len - index {
            self.try_require_capacity(count, End::Front)?;
            let old_begin = self.begin;
            let new_begin = old_begin - count as isize;
            let start = new_begin + index as isize;

            // SAFETY: Capacity for count elements at the front has been ensured, so every slot
            // from new_begin is inside an existing buffer. The elements before index are moved
            // to the front, leaving the gap at start uninitialized for the new values.
            unsafe {
                self.shift(old_begin, new_begin, index);
                self.write_all(start, values);
            }

            self.begin = new_begin;
            Ok(start)
        } else {
            self.try_require_capacity(count, End::Back)?;
            let start = self.begin + index as isize;

            // SAFETY: Capacity for count elements at the back has been ensured. The elements from
            // index onwards are moved to the back, leaving the gap at start uninitialized for the
            // new values.
            unsafe {
                self.shift(start, start + count as isize, len - index);
                self.write_all(start, values);
            }

            self.end += count as isize;
            Ok(start)
        }
    }

    /// Closes the gap of `count` elements at `index`, by moving the elements on the given side
    /// over it and releasing any buffers that are no longer used.
    ///
    /// # Safety
    /// The elements in the gap have to have been moved out or dropped already.
    unsafe fn close_gap(&mut self, index: usize, count: usize, side: End) {
        let len = self.len();

        match side {
            End::Front => {
                let old_begin = self.begin;
                self.begin = old_begin + count as isize;
                // SAFETY: Both ranges are within the old active range.
                unsafe { self.shift(old_begin, self.begin, index) }
                self.release_front(old_begin);
            },
            End::Back => {
                let old_end = self.end;
                let gap = self.begin + index as isize;
                // SAFETY: Both ranges are within the old active range.
                unsafe { self.shift(gap + count as isize, gap, len - index - count) }
                self.end = old_end - count as isize;
                self.release_back(old_end);
            },
        }
    }

    /// Moves `count` elements starting at `from` so that they start at `to`, copying whole runs
    /// within a buffer at a time. Overlapping ranges are handled.
    ///
    /// # Safety
    /// Both ranges have to be inside existing buffers. Elements at `from` are considered moved,
    /// whatever was at `to` is overwritten without being dropped.
    unsafe fn shift(&mut self, from: Position<T>, to: Position<T>, count: usize) {
        if count == 0 || from == to { return; }
        let buf = buffer_size::<T>();

        if to < from {
            let (mut src, mut dst, mut left) = (from, to, count);

            while left > 0 {
                let run = left.min(buf - src.cur).min(buf - dst.cur);
                // SAFETY: run never passes the end of either buffer. Moving towards the front
                // from the start means that no unread element is overwritten.
                unsafe { ptr::copy(self.map.slot_ptr(src), self.map.slot_ptr(dst), run) }

                src += run as isize;
                dst += run as isize;
                left -= run;
            }
        } else {
            let (mut src, mut dst, mut left) = (from + count as isize, to + count as isize, count);

            while left > 0 {
                // A cur of 0 is the end of the previous buffer.
                let src_run = if src.cur == 0 { buf } else { src.cur };
                let dst_run = if dst.cur == 0 { buf } else { dst.cur };
                let run = left.min(src_run).min(dst_run);

                src -= run as isize;
                dst -= run as isize;
                // SAFETY: As above, but moving towards the back from the end.
                unsafe { ptr::copy(self.map.slot_ptr(src), self.map.slot_ptr(dst), run) }

                left -= run;
            }
        }
    }

    /// Writes every item of `values` to consecutive slots starting at `pos`.
    ///
    /// # Safety
    /// Every slot written to has to be inside an existing buffer, and is overwritten without being
    /// dropped.
    unsafe fn write_all<I: Iterator<Item = T>>(&mut self, mut pos: Position<T>, values: I) {
        for value in values {
            // SAFETY: The caller guarantees that the slot exists.
            unsafe { self.map.slot_ptr(pos).write(value) }
            pos.inc();
        }
    }

    /// Drops the elements in `first..last` in place, one buffer-sized run at a time.
    ///
    /// # Safety
    /// Every element in the range has to be initialized, and is considered uninitialized after
    /// this.
    unsafe fn drop_range(&mut self, mut first: Position<T>, last: Position<T>) {
        while first < last {
            let run = if first.node == last.node {
                last.cur - first.cur
            } else {
                buffer_size::<T>() - first.cur
            };

            // SAFETY: The run is contained in a single buffer and initialized.
            unsafe {
                ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.map.slot_ptr(first), run));
            }

            first += run as isize;
        }
    }

    fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index >= self.len() {
            Err(IndexOutOfBounds { index, len: self.len() })
        } else {
            Ok(())
        }
    }

    fn check_insert_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        if index > self.len() {
            Err(IndexOutOfBounds { index, len: self.len() })
        } else {
            Ok(())
        }
    }

    fn expect_index_of(&self, pos: Position<T>) -> usize {
        match self.index_of_position(pos) {
            Some(index) => index,
            None => panic!("{pos:?} is outside of the Deque!"),
        }
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        if self.map.is_null() { return; }
        // SAFETY: Every element in the active range is initialized. The map and buffers are freed
        // when self.map is dropped.
        unsafe { self.drop_range(self.begin, self.end) }
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Deque<T> {
    /// Creates a new Deque containing `count` clones of `value`.
    pub fn repeat(value: T, count: usize) -> Deque<T> {
        let mut deque = Deque::with_cap(count);
        deque.extend(iter::repeat_n(value, count));
        deque
    }
}

impl<T: Default> Deque<T> {
    /// Creates a new Deque containing `count` default values.
    pub fn repeat_default(count: usize) -> Deque<T> {
        Deque::repeat_with(T::default, count)
    }
}

impl<T> Index<usize> for Deque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T> IndexMut<usize> for Deque<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();

        if Category::of_size_hint(iter.size_hint()).is_sized() {
            self.reserve_back(iter.size_hint().0);
        }

        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Deque<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();

        let mut deque = match Category::of_size_hint(iter.size_hint()) {
            Category::Input => Deque::with_cap(0),
            _ => Deque::with_cap(iter.size_hint().0),
        };

        deque.extend(iter);
        deque
    }
}

impl<T, const N: usize> From<[T; N]> for Deque<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        let written = base::copy_cloned(source.iter(), self.iter_mut());

        if written < self.len() {
            self.truncate(written);
        } else {
            self.extend(source.iter().skip(written).cloned());
        }
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && base::equal(self, other)
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T: PartialOrd> PartialOrd for Deque<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        base::lexicographical_partial_compare(self, other)
    }
}

impl<T: Ord> Ord for Deque<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        base::lexicographical_compare(self, other)
    }
}

impl<T: Hash> Hash for Deque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deque")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .field("buffers", &self.buffer_count())
            .field("map_size", &self.map_size())
            .finish()
    }
}

impl<T: Debug> Display for Deque<T> {
    /// Formats the elements grouped by the buffer that holds them, e.g. `[0, 1, 2][3, 4]`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() { return write!(f, "[]"); }

        let mut node = self.begin.node;
        let mut pos = self.begin;
        write!(f, "[")?;

        for value in self {
            if pos.node != node {
                node = pos.node;
                write!(f, "][")?;
            } else if pos != self.begin {
                write!(f, ", ")?;
            }
            write!(f, "{value:?}")?;
            pos.inc();
        }

        write!(f, "]")
    }
}

