use std::fmt::{self, Debug, Formatter};

/// A strict weak ordering over `T`, used to decide which element of a heap is on top.
///
/// With [`Less`], the greatest element is on top of a heap. [`Greater`] reverses that.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` is ordered before `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders values by [`Ord`], ascending. Heaps built with it are max-heaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Less;

impl<T: Ord + ?Sized> Compare<T> for Less {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders values by [`Ord`], descending. Heaps built with it are min-heaps.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Greater;

impl<T: Ord + ?Sized> Compare<T> for Greater {
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

/// Adapts a closure returning whether its first argument is ordered before its second.
///
/// # Examples
/// ```
/// # use segmented_std::algorithm::{Compare, FnCompare};
/// let by_len = FnCompare(|a: &&str, b: &&str| a.len() < b.len());
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnCompare<F>(
    /// The wrapped closure.
    pub F,
);

impl<T: ?Sized, F: Fn(&T, &T) -> bool> Compare<T> for FnCompare<F> {
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<F> Debug for FnCompare<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCompare").finish_non_exhaustive()
    }
}
