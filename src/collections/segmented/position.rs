use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::buffer_size;
use crate::algorithm::category::{
    BidirectionalCursor, Category, ForwardCursor, InputCursor, RandomAccessCursor,
};

/// A location within a [`Deque<T>`](super::Deque), stored as a map slot (`node`) and an offset into
/// the buffer held by that slot (`cur`).
///
/// Positions are plain values: they don't borrow the Deque they were created from and are only
/// meaningful while that Deque isn't modified. Reading through a Position is done with
/// [`Deque::get_at`](super::Deque::get_at).
///
/// The first and last bounds of the buffer are implicit, `0` and [`buffer_size::<T>()`], so
/// moving between buffers never leaves them stale. Every arithmetic operation keeps
/// `cur < buffer_size::<T>()`, the one past the end position of a full buffer is instead the first
/// position of the next one.
///
/// # Time Complexity
/// All operations are `O(1)`, including offsets and distances that cross any number of buffers.
pub struct Position<T> {
    pub(crate) node: usize,
    pub(crate) cur: usize,
    pub(crate) _phantom: PhantomData<fn() -> T>,
}

impl<T> Position<T> {
    pub(crate) const fn new(node: usize, cur: usize) -> Position<T> {
        Position {
            node,
            cur,
            _phantom: PhantomData,
        }
    }

    /// Returns the index of the map slot holding the buffer this position is in.
    pub const fn node(&self) -> usize {
        self.node
    }

    /// Returns the offset of this position from the start of its buffer.
    pub const fn cur_in_buffer(&self) -> usize {
        self.cur
    }

    /// Moves to the next position, hopping to the start of the next buffer at the end of this one.
    pub fn inc(&mut self) {
        self.cur += 1;
        if self.cur == buffer_size::<T>() {
            self.node += 1;
            self.cur = 0;
        }
    }

    /// Moves to the previous position, hopping to the end of the previous buffer at the start of
    /// this one.
    pub fn dec(&mut self) {
        if self.cur == 0 {
            self.node -= 1;
            self.cur = buffer_size::<T>();
        }
        self.cur -= 1;
    }

    /// Moves by `n` positions, backwards for negative values.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::collections::segmented::Deque;
    /// let deque: Deque<u64> = (0..2000).collect();
    /// let mut pos = deque.begin();
    /// pos.offset(1500);
    /// assert_eq!(deque.get_at(pos), Some(&1500));
    /// pos.offset(-1499);
    /// assert_eq!(deque.get_at(pos), Some(&1));
    /// ```
    pub fn offset(&mut self, n: isize) {
        let buf = buffer_size::<T>() as isize;
        let offset = n + self.cur as isize;

        if (0..buf).contains(&offset) {
            self.cur = offset as usize;
        } else {
            // Floor division, so that negative offsets land in the correct earlier buffer.
            let node_offset = if offset > 0 {
                offset / buf
            } else {
                -((-offset - 1) / buf) - 1
            };

            self.node = self.node.wrapping_add_signed(node_offset);
            self.cur = (offset - node_offset * buf) as usize;
        }
    }

    /// Returns the signed number of positions from `other` to self.
    pub fn distance_from(&self, other: &Position<T>) -> isize {
        let buf = buffer_size::<T>() as isize;
        buf * (self.node as isize - other.node as isize) + self.cur as isize - other.cur as isize
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> Add<isize> for Position<T> {
    type Output = Position<T>;

    fn add(mut self, rhs: isize) -> Self::Output {
        self.offset(rhs);
        self
    }
}

impl<T> AddAssign<isize> for Position<T> {
    fn add_assign(&mut self, rhs: isize) {
        self.offset(rhs);
    }
}

impl<T> Sub<isize> for Position<T> {
    type Output = Position<T>;

    fn sub(mut self, rhs: isize) -> Self::Output {
        self.offset(-rhs);
        self
    }
}

impl<T> SubAssign<isize> for Position<T> {
    fn sub_assign(&mut self, rhs: isize) {
        self.offset(-rhs);
    }
}

impl<T> Sub for Position<T> {
    type Output = isize;

    fn sub(self, rhs: Self) -> Self::Output {
        self.distance_from(&rhs)
    }
}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        self.node == other.node && self.cur == other.cur
    }
}

impl<T> Eq for Position<T> {}

impl<T> PartialOrd for Position<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Position<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.node, self.cur).cmp(&(other.node, other.cur))
    }
}

impl<T> Hash for Position<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node.hash(state);
        self.cur.hash(state);
    }
}

impl<T> Debug for Position<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Position")
            .field("node", &self.node)
            .field("cur", &self.cur)
            .finish()
    }
}

impl<T> InputCursor for Position<T> {
    const CATEGORY: Category = Category::RandomAccess;

    fn step_forward(&mut self) {
        self.inc();
    }

    fn distance_to(&self, last: &Self) -> usize {
        last.distance_from(self).max(0) as usize
    }
}

impl<T> ForwardCursor for Position<T> {}

impl<T> BidirectionalCursor for Position<T> {
    fn step_back(&mut self) {
        self.dec();
    }

    fn advance_by(&mut self, n: isize) {
        self.offset(n);
    }
}

impl<T> RandomAccessCursor for Position<T> {
    fn offset_from(&self, other: &Self) -> isize {
        self.distance_from(other)
    }
}
