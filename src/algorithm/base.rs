use std::cmp::Ordering;

/// Returns true if both ranges have the same length and every pair of elements is equal.
///
/// # Examples
/// ```
/// # use segmented_std::algorithm::equal;
/// assert!(equal(&[1, 2, 3], &[1, 2, 3]));
/// assert!(!equal(&[1, 2, 3], &[1, 2]));
/// ```
pub fn equal<A, B, I, J>(first: I, second: J) -> bool
where
    A: PartialEq<B>,
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => if a != b { return false; },
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Compares two ranges element by element, the first unequal pair decides the result. A range
/// which is a prefix of the other is less than it.
///
/// # Examples
/// ```
/// # use std::cmp::Ordering;
/// # use segmented_std::algorithm::lexicographical_compare;
/// assert_eq!(lexicographical_compare(&[1, 2], &[1, 3]), Ordering::Less);
/// assert_eq!(lexicographical_compare(&[1, 2, 0], &[1, 2]), Ordering::Greater);
/// ```
pub fn lexicographical_compare<T, I, J>(first: I, second: J) -> Ordering
where
    T: Ord,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => match a.cmp(&b) {
                Ordering::Equal => {},
                ordering => return ordering,
            },
            (Some(_), None) => return Ordering::Greater,
            (None, Some(_)) => return Ordering::Less,
            (None, None) => return Ordering::Equal,
        }
    }
}

/// The [`PartialOrd`] counterpart of [`lexicographical_compare`], returning [`None`] as soon as a
/// pair of elements can't be compared.
pub fn lexicographical_partial_compare<T, I, J>(first: I, second: J) -> Option<Ordering>
where
    T: PartialOrd,
    I: IntoIterator<Item = T>,
    J: IntoIterator<Item = T>,
{
    let mut first = first.into_iter();
    let mut second = second.into_iter();

    loop {
        match (first.next(), second.next()) {
            (Some(a), Some(b)) => match a.partial_cmp(&b)? {
                Ordering::Equal => {},
                ordering => return Some(ordering),
            },
            (Some(_), None) => return Some(Ordering::Greater),
            (None, Some(_)) => return Some(Ordering::Less),
            (None, None) => return Some(Ordering::Equal),
        }
    }
}

/// Overwrites every slot in `dest` with a clone of `value`.
pub fn fill<'a, T, O>(dest: O, value: &T)
where
    T: Clone + 'a,
    O: IntoIterator<Item = &'a mut T>,
{
    for slot in dest {
        slot.clone_from(value);
    }
}

/// Moves values from `source` into the existing slots of `dest`, stopping when either runs out.
/// Returns the number of values written.
///
/// `dest` is checked first, so no value is taken from `source` unless there is a slot for it. This
/// allows the rest of a `source` passed [`by_ref`](Iterator::by_ref) to be used afterwards.
pub fn copy<'a, T, I, O>(source: I, dest: O) -> usize
where
    T: 'a,
    I: IntoIterator<Item = T>,
    O: IntoIterator<Item = &'a mut T>,
{
    let mut count = 0;
    for (slot, value) in dest.into_iter().zip(source) {
        *slot = value;
        count += 1;
    }
    count
}

/// Clones values from `source` into the existing slots of `dest` with [`Clone::clone_from`],
/// allowing the slots to reuse their resources. Returns the number of values written.
pub fn copy_cloned<'a, 'b, T, I, O>(source: I, dest: O) -> usize
where
    T: Clone + 'a + 'b,
    I: IntoIterator<Item = &'b T>,
    O: IntoIterator<Item = &'a mut T>,
{
    let mut count = 0;
    for (slot, value) in dest.into_iter().zip(source) {
        slot.clone_from(value);
        count += 1;
    }
    count
}
