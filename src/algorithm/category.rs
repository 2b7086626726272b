use derive_more::{Display, IsVariant};

/// The capability level of a cursor, ordered so that every category can do everything the
/// categories below it can.
///
/// | Category | Capabilities |
/// |-|-|
/// | `Input` | Single pass, forward only. |
/// | `Forward` | Multiple passes over the same range. |
/// | `Bidirectional` | Stepping backwards. |
/// | `RandomAccess` | Jumping and measuring distance in `O(1)`. |
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Category {
    /// Read once, front to back.
    Input,
    /// Read any number of times, front to back.
    Forward,
    /// Read in either direction.
    Bidirectional,
    /// Read in any order.
    RandomAccess,
}

impl Category {
    /// Classifies a Rust [`Iterator`] from its [`size_hint`](Iterator::size_hint). An exact hint
    /// means the length is known before iterating, which is all a bulk insertion needs from a
    /// forward range. Anything else has to be treated as a single pass input range.
    ///
    /// # Examples
    /// ```
    /// # use segmented_std::algorithm::Category;
    /// assert_eq!(Category::of_size_hint((0..10).size_hint()), Category::Forward);
    /// assert_eq!(Category::of_size_hint((0..10).filter(|i| i % 2 == 0).size_hint()), Category::Input);
    /// ```
    pub const fn of_size_hint(hint: (usize, Option<usize>)) -> Category {
        match hint {
            (lower, Some(upper)) if lower == upper => Category::Forward,
            _ => Category::Input,
        }
    }

    /// Returns true if a range of this category can be measured before it is consumed.
    pub fn is_sized(self) -> bool {
        !self.is_input()
    }
}

/// A position within a sequence which can be moved forwards.
///
/// Cursors are compared for equality to detect the end of a range, rather than returning
/// [`None`] like an [`Iterator`].
pub trait InputCursor: Clone + PartialEq {
    /// The most capable category the implementor supports.
    const CATEGORY: Category = Category::Input;

    /// Moves the cursor to the next position.
    fn step_forward(&mut self);

    /// Returns the number of steps needed to move from self to `last`. The default walks the range
    /// one step at a time. Random access cursors override this with a constant time calculation.
    ///
    /// `last` has to be reachable from self, otherwise this never returns.
    fn distance_to(&self, last: &Self) -> usize {
        let mut cursor = self.clone();
        let mut count = 0;

        while cursor != *last {
            cursor.step_forward();
            count += 1;
        }

        count
    }
}

/// A cursor which can pass over the same range multiple times.
pub trait ForwardCursor: InputCursor {}

/// A cursor which can be moved in both directions.
pub trait BidirectionalCursor: ForwardCursor {
    /// Moves the cursor to the previous position.
    fn step_back(&mut self);

    /// Moves the cursor by `n` positions, backwards for negative values. The default takes `|n|`
    /// steps. Random access cursors override this with a constant time jump.
    fn advance_by(&mut self, n: isize) {
        if n >= 0 {
            for _ in 0..n {
                self.step_forward();
            }
        } else {
            for _ in 0..n.unsigned_abs() {
                self.step_back();
            }
        }
    }
}

/// A cursor which can jump to any position and measure signed distances in constant time.
pub trait RandomAccessCursor: BidirectionalCursor + Ord {
    /// Returns the signed number of positions from `other` to self.
    fn offset_from(&self, other: &Self) -> isize;
}

/// Returns the number of positions in `first..last`, using the fastest method the cursor supports.
pub fn distance<C: InputCursor>(first: &C, last: &C) -> usize {
    first.distance_to(last)
}

/// Moves `cursor` by `n` positions, using the fastest method the cursor supports.
pub fn advance<C: BidirectionalCursor>(cursor: &mut C, n: isize) {
    cursor.advance_by(n)
}
