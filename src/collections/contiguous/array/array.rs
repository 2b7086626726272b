use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocError, CapacityOverflow, ReserveError};
use crate::util::result::ReserveResultExtension;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// Every allocating constructor comes in two forms: one returning a [`ReserveError`] and one
/// which panics on capacity overflow or defers to [`alloc::handle_alloc_error`]. Containers built
/// on top of Array use the fallible forms so that a failed growth step can be unwound before it is
/// reported.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `new_uninit` | `O(1)` |
/// | `repeat_with` | `O(n)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* The global allocator may be able to grow the allocation in place.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::contiguous::Array;
    /// let arr = Array::repeat_with(|| 'a', 3);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0. No memory is allocated.
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).throw_alloc()
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`, returning an [`Err`]
    /// rather than panicking or aborting if the memory can't be provided.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, ReserveError> {
        let layout = Array::<MaybeUninit<T>>::try_make_layout(size)?;
        let ptr = Array::<MaybeUninit<T>>::try_make_ptr(layout)?;

        Ok(Array {
            ptr,
            size,
            _phantom: PhantomData,
        })
    }

    /// Creates a new Array containing `count` values, each produced by calling `f`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::contiguous::Array;
    /// let mut next = 0;
    /// let arr = Array::repeat_with(|| { next += 2; next }, 3);
    /// assert_eq!(&*arr, &[2, 4, 6]);
    /// ```
    pub fn repeat_with<F: FnMut() -> T>(f: F, count: usize) -> Array<T> {
        Self::try_repeat_with(f, count).throw_alloc()
    }

    /// The fallible counterpart of [`Array::repeat_with`].
    pub fn try_repeat_with<F: FnMut() -> T>(
        mut f: F,
        count: usize,
    ) -> Result<Array<T>, ReserveError> {
        let arr = Self::try_new_uninit(count)?;

        for i in 0..count {
            // SAFETY: count * size_of::<T>() <= isize::MAX is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe { arr.ptr.add(i).write(MaybeUninit::new(f())) }
        }

        // SAFETY: All values have been initialized by f.
        Ok(unsafe { arr.assume_init() })
    }

    /// Decomposes an `Array<T>` into its raw components, a [`NonNull<T>`] pointer to the contained
    /// data and a [`usize`] representing the size. The caller becomes responsible for the
    /// allocation, which can be reclaimed with [`Array::from_parts`].
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let ret = (self.ptr, self.size);
        mem::forget(self);
        ret
    }

    /// Creates an `Array<T>` from its raw components.
    ///
    /// # Safety
    /// `ptr` needs to be allocated in the global allocator with the layout of `[T; size]` (or be
    /// dangling for a zero-sized layout) and refer to `size` properly initialized values of `T`.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`, so that it can be reallocated. Values stay
    /// where they are but will no longer be dropped.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> has the same layout as T and any T is a valid MaybeUninit<T>.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    pub(crate) fn try_make_layout(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// The layout of an existing allocation, which was already checked when it was created.
    pub(crate) fn layout_for(size: usize) -> Layout {
        match Self::try_make_layout(size) {
            Ok(layout) => layout,
            Err(_) => unreachable!(),
        }
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    pub(crate) fn try_make_ptr(layout: Layout) -> Result<NonNull<T>, AllocError> {
        if layout.size() == 0 {
            Ok(NonNull::dangling())
        } else {
            // SAFETY: Zero-sized layouts have been guarded against.
            NonNull::new(unsafe { alloc::alloc(layout).cast() }).ok_or(AllocError { layout })
        }
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: The caller guarantees that every value is initialized, and MaybeUninit<T> has the
        // same layout as T.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Reallocate the Array to have size equal to `new_size`, with new locations uninitialized.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`].
    pub fn realloc(&mut self, new_size: usize) {
        self.try_realloc(new_size).throw_alloc()
    }

    /// Reallocate the Array to have size equal to `new_size`. On an [`Err`], self is left exactly
    /// as it was: the old allocation is still owned and valid.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), ReserveError> {
        let new_ptr = match (self.size, new_size) {
            // Zero-sized types never allocate, keep the dangling pointer and just track the size.
            (_, _) if size_of::<T>() == 0 => self.ptr,
            (old, new) if old == new => return Ok(()),
            (0, _) => {
                let layout = Self::try_make_layout(new_size)?;
                Self::try_make_ptr(layout)?
            },
            (_, 0) => {
                // SAFETY: The current allocation was made with this layout, which isn't zero-sized.
                unsafe {
                    alloc::dealloc(self.ptr.as_ptr().cast(), Self::layout_for(self.size));
                }
                NonNull::dangling()
            },
            (_, _) => {
                let old_layout = Self::layout_for(self.size);
                // Layout::array guarantees that the new size is <= isize::MAX.
                let new_layout = Self::try_make_layout(new_size)?;

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_layout.size()).cast()
                };

                NonNull::new(raw_ptr).ok_or(AllocError { layout: new_layout })?
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: All values of the Array are initialized and the slice covers exactly the owned
        // allocation.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.ptr.as_ptr(), self.size));
        }

        let layout = Self::layout_for(self.size);
        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for Deref, and the borrow checker prevents any other access for the lifetime
        // of the returned slice.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        let mut source = self.iter();
        Array::repeat_with(
            // SAFETY: repeat_with calls the closure exactly size times.
            || unsafe { source.next().unwrap_unchecked().clone() },
            self.size,
        )
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Hash> Hash for Array<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (**self).hash(state);
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&**self)
            .field("size", &self.size)
            .finish()
    }
}
