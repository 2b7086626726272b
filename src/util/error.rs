use std::alloc::Layout;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was outside of the elements held by a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The requested index.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The memory required by a request would exceed [`isize::MAX`] bytes.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;

/// The global allocator returned null for a request of the contained [`Layout`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllocError {
    /// The layout that couldn't be allocated.
    pub layout: Layout,
}

impl Display for AllocError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Allocation of {} bytes failed!", self.layout.size())
    }
}

impl Error for AllocError {}

/// Any failure while growing storage: either the size calculation overflowed or the allocator
/// couldn't provide the memory.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum ReserveError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocError`].
    AllocError(AllocError),
}

/// Either an [`IndexOutOfBounds`] or a [`ReserveError`], for insertions which check both.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq, From, TryInto, IsVariant)]
pub enum IndexOrReserveError {
    /// See [`IndexOutOfBounds`].
    IndexOutOfBounds(IndexOutOfBounds),
    /// See [`ReserveError`].
    Reserve(ReserveError),
}

impl From<CapacityOverflow> for IndexOrReserveError {
    fn from(value: CapacityOverflow) -> Self {
        IndexOrReserveError::Reserve(value.into())
    }
}

impl From<AllocError> for IndexOrReserveError {
    fn from(value: AllocError) -> Self {
        IndexOrReserveError::Reserve(value.into())
    }
}
