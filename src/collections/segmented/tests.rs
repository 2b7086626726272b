#![cfg(test)]

use std::cell::Cell;
use std::hash::{BuildHasher, RandomState};
use std::rc::Rc;

use super::*;
use crate::algorithm::category::{advance, distance};
use crate::util::alloc::{CountedDrop, PanicOnClone, ZeroSizedType};
use crate::util::panic::assert_panics;

fn contents<T: Copy>(deque: &Deque<T>) -> crate::collections::contiguous::Vector<T> {
    deque.iter().copied().collect()
}

#[test]
fn test_basic_scenario() {
    let mut deque = Deque::new();
    for i in 1..=5 {
        deque.push_back(i);
    }
    deque.push_front(0);
    assert_eq!(*contents(&deque), [0, 1, 2, 3, 4, 5]);

    deque.pop_back();
    deque.pop_back();
    assert_eq!(*contents(&deque), [0, 1, 2, 3]);

    deque.insert(1, 99);
    assert_eq!(*contents(&deque), [0, 99, 1, 2, 3]);

    deque.erase(deque.position(0));
    assert_eq!(*contents(&deque), [99, 1, 2, 3]);

    assert_eq!(deque.front(), Some(&99));
    assert_eq!(deque.back(), Some(&3));
    deque.verify_invariants();
}

#[test]
fn test_lazy_allocation() {
    let mut deque = Deque::<u32>::new();
    assert_eq!(deque.map_size(), 0, "A new Deque shouldn't allocate a map.");
    assert_eq!(deque.buffer_count(), 0);
    assert_eq!(deque.pop_front(), None);
    assert_eq!(deque.pop_back(), None);
    assert_eq!(deque.iter().next(), None);
    deque.clear();
    deque.verify_invariants();

    deque.push_back(1);
    assert_eq!(deque.map_size(), INIT_MAP_SIZE);
    assert_eq!(deque.buffer_count(), 1);
    deque.push_front(0);
    assert_eq!(deque.buffer_count(), 2, "The first position was at the start of its buffer.");
    deque.verify_invariants();
}

#[test]
fn test_empty_range_allocates_one_buffer() {
    let deque: Deque<u32> = (0..0).collect();
    assert!(deque.is_empty());
    assert_eq!(deque.len(), 0);
    assert_eq!(deque.buffer_count(), 1, "Exactly one buffer should be allocated.");
    deque.verify_invariants();

    let deque: Deque<u32> = (0..10).filter(|_| false).collect();
    assert_eq!(deque.buffer_count(), 1);
    deque.verify_invariants();
}

#[test]
fn test_fifo_and_lifo_at_both_ends() {
    let buf = buffer_size::<u64>() as u64;
    let mut deque = Deque::new();

    for i in 0..buf * 5 {
        deque.push_back(i);
        deque.push_front(u64::MAX - i);
        assert_eq!(deque.back(), Some(&i));
        assert_eq!(deque.front(), Some(&(u64::MAX - i)));
    }
    assert_eq!(deque.len() as u64, buf * 10);
    deque.verify_invariants();

    for i in (0..buf * 5).rev() {
        assert_eq!(deque.pop_back(), Some(i));
        assert_eq!(deque.pop_front(), Some(u64::MAX - i));
        deque.verify_invariants();
    }
    assert!(deque.is_empty());
    assert_eq!(deque.buffer_count(), 1, "Emptied buffers should be released while popping.");
}

#[test]
fn test_map_growth_and_recentering() {
    let mut deque = Deque::<u64>::new();
    let mut map_sizes = 0;
    let mut last_size = 0;

    for i in 0..100_000 {
        deque.push_back(i);
        if deque.map_size() != last_size {
            assert!(
                deque.map_size() >= last_size * 2,
                "Map reallocation should at least double the size."
            );
            last_size = deque.map_size();
            map_sizes += 1;

            assert!(deque.begin().node() > 0, "The active range should be recentered.");
            deque.verify_invariants();
        }
    }

    assert!(map_sizes < 20, "Growth should happen a logarithmic number of times.");
    assert_eq!(deque.len(), 100_000);
    assert!(deque.iter().copied().eq(0..100_000));

    let mut deque = Deque::<u64>::new();
    for i in 0..100_000 {
        deque.push_front(i);
    }
    deque.verify_invariants();
    assert!(deque.iter().copied().eq((0..100_000).rev()));
}

#[test]
fn test_position_arithmetic() {
    let buf = buffer_size::<u64>() as isize;
    let mut deque: Deque<u64> = (0..5000).collect();
    // Move begin away from the start of its buffer.
    for i in 1..=3 {
        deque.push_front(u64::MAX - i);
    }
    let begin = deque.begin();
    assert_eq!(begin.cur_in_buffer(), buf as usize - 3);

    for k in [0, 1, 2, 3, 4, buf - 1, buf, buf + 1, 2 * buf, 3 * buf + 7, 5002] {
        let pos = begin + k;
        assert_eq!(pos - k, begin, "Offsetting by {k} should round trip.");
        assert_eq!(pos - begin, k);
        assert_eq!(deque.index_of_position(pos), Some(k as usize));
        assert!(pos.cur_in_buffer() < buf as usize);
    }

    let mut pos = deque.begin() + 2003;
    assert_eq!(deque.get_at(pos), Some(&2000));
    pos -= 1500;
    assert_eq!(deque.get_at(pos), Some(&500));
    pos += buf + 1;
    assert_eq!(deque.get_at(pos), Some(&(500 + buf as u64 + 1)));
    pos += -(buf + 1);
    assert_eq!(deque.get_at(pos), Some(&500));

    let mut walker = deque.end();
    for i in (0..deque.len()).rev() {
        walker.dec();
        assert_eq!(walker, deque.position(i));
    }
    assert_eq!(walker, deque.begin());
    walker.inc();
    assert_eq!(walker, deque.position(1));

    assert_eq!(distance(&deque.begin(), &deque.end()), deque.len());
    let mut pos = deque.end();
    advance(&mut pos, -(deque.len() as isize));
    assert_eq!(pos, deque.begin());

    assert!(deque.begin() < deque.end());
    assert!(deque.position(600) > deque.position(599));
    assert_eq!(deque.get_at(deque.end()), None);
    assert_eq!(deque.index_of_position(deque.end() + 1), None);
}

#[test]
fn test_access() {
    let mut deque: Deque<_> = (0..1000).collect();

    assert_eq!(deque[0], 0);
    assert_eq!(deque[999], 999);
    deque[500] = 5000;
    assert_eq!(deque.get(500), Some(&5000));
    assert_eq!(deque.get(1000), None);
    *deque.get_mut(1).unwrap() = 10;
    *deque.front_mut().unwrap() = -1;
    *deque.back_mut().unwrap() = -2;
    assert_eq!(deque.try_get(1), Ok(&10));
    assert_eq!(
        deque.try_get(1000),
        Err(IndexOutOfBounds { index: 1000, len: 1000 })
    );
    assert_eq!(deque.front(), Some(&-1));
    assert_eq!(deque.back(), Some(&-2));

    assert_panics!({
        let deque: Deque<i32> = (0..10).collect();
        let _value = deque[10];
    });
    assert_panics!({
        let deque: Deque<i32> = (0..10).collect();
        deque.position(11);
    });
}

#[test]
fn test_insert_shifts_shorter_side() {
    let mut deque: Deque<u64> = (0..100).collect();

    let end = deque.end();
    deque.insert(10, 1000);
    assert_eq!(deque.end(), end, "Inserting near the front should move the front.");

    let begin = deque.begin();
    deque.insert(95, 2000);
    assert_eq!(deque.begin(), begin, "Inserting near the back should move the back.");

    let expected = (0..10).chain([1000]).chain(10..94).chain([2000]).chain(94..100);
    assert!(deque.iter().copied().eq(expected));
    deque.verify_invariants();

    let pos = deque.insert_at(deque.end(), 3000);
    assert_eq!(deque.get_at(pos), Some(&3000));
    let pos = deque.insert_at(deque.begin(), 4000);
    assert_eq!(pos, deque.begin());

    assert!(deque.try_insert(deque.len() + 1, 0).unwrap_err().is_index_out_of_bounds());
    deque.verify_invariants();
}

#[test]
fn test_bulk_insert_across_buffers() {
    let buf = buffer_size::<u32>() as u32;

    for index in [0, 1, buf - 1, buf, 2 * buf + 5, 3 * buf] {
        let mut deque: Deque<u32> = (0..3 * buf).collect();

        let pos = deque.insert_n(index as usize, buf as usize + 3, u32::MAX);
        assert_eq!(deque.index_of_position(pos), Some(index as usize));
        deque.verify_invariants();

        let expected = (0..index)
            .chain(std::iter::repeat_n(u32::MAX, buf as usize + 3))
            .chain(index..3 * buf);
        assert!(deque.iter().copied().eq(expected), "insert_n at {index} failed.");

        let mut deque: Deque<u32> = (0..3 * buf).collect();
        deque.insert_iter(index as usize, (0..50).map(|i| i + 10_000).filter(|i| i % 2 == 0));
        deque.verify_invariants();

        let expected = (0..index).chain((10_000..10_050).step_by(2)).chain(index..3 * buf);
        assert!(deque.iter().copied().eq(expected), "insert_iter at {index} failed.");
    }

    let mut deque = Deque::new();
    deque.insert_iter(0, 0..10);
    assert_eq!(*contents(&deque), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let pos = deque.insert_n(5, 0, 0);
    assert_eq!(deque.index_of_position(pos), Some(5));
    assert_eq!(deque.len(), 10);
}

#[test]
fn test_remove_and_erase() {
    let buf = buffer_size::<u32>() as u32;
    let mut deque: Deque<u32> = (0..4 * buf).collect();

    assert_eq!(deque.remove(0), 0);
    assert_eq!(deque.remove(deque.len() - 1), 4 * buf - 1);
    assert_eq!(deque.remove(buf as usize), buf + 1);
    assert_eq!(deque.try_remove(deque.len()), Err(IndexOutOfBounds {
        index: deque.len(),
        len: deque.len(),
    }));
    deque.verify_invariants();

    let expected = (1..=buf).chain(buf + 2..4 * buf - 1);
    assert!(deque.iter().copied().eq(expected));

    let mut deque: Deque<u32> = (0..4 * buf).collect();
    let buffers = deque.buffer_count();
    let next = deque.erase_range(deque.position(10), deque.position(2 * buf as usize + 10));
    assert_eq!(deque.get_at(next), Some(&(2 * buf + 10)));
    assert!(deque.buffer_count() < buffers, "Emptied buffers should be released.");
    deque.verify_invariants();
    assert!(deque.iter().copied().eq((0..10).chain(2 * buf + 10..4 * buf)));

    let next = deque.erase_range(deque.position(deque.len() - 5), deque.end());
    assert_eq!(next, deque.end());
    let next = deque.erase_range(deque.position(3), deque.position(3));
    assert_eq!(next, deque.position(3));
    deque.verify_invariants();

    assert_panics!({
        let mut deque: Deque<u32> = (0..10).collect();
        deque.erase_range(deque.position(5), deque.position(2));
    });
    assert_panics!({
        let mut deque: Deque<u32> = (0..10).collect();
        deque.erase(deque.end());
    });
}

#[test]
fn test_erase_everything_keeps_one_buffer() {
    let mut deque: Deque<u64> = (0..10_000).collect();
    let map_size = deque.map_size();

    deque.erase_range(deque.begin(), deque.end());
    assert!(deque.is_empty());
    assert_eq!(deque.buffer_count(), 1);
    deque.verify_invariants();

    deque.push_back(1);
    assert_eq!(deque.map_size(), map_size, "Pushing after clearing shouldn't reallocate the map.");
    assert_eq!(deque.buffer_count(), 1);
}

#[test]
fn test_clear_recenters_the_remaining_buffer() {
    let buf = buffer_size::<u64>();
    let mut deque = Deque::<u64>::with_cap(0);
    let start = deque.begin().node();

    // Fill up to the very last slot of the map, then empty it from the front.
    let last = deque.map_size() - 1;
    for i in 0..((last - start) * buf + buf - 1) as u64 {
        deque.push_back(i);
    }
    assert_eq!(deque.end().node(), last);
    assert_eq!(deque.end().cur_in_buffer(), buf - 1);
    while deque.pop_front().is_some() {}
    assert_eq!(deque.begin(), deque.end());
    assert_eq!(deque.begin().node(), last);

    deque.erase_range(deque.begin(), deque.end());
    deque.verify_invariants();
    assert_eq!(deque.begin().node(), (deque.map_size() - 1) / 2);
    assert_eq!(deque.begin().cur_in_buffer(), 0);

    let map_size = deque.map_size();
    deque.push_back(1);
    deque.push_front(0);
    assert_eq!(deque.map_size(), map_size, "Pushing after emptying shouldn't reallocate the map.");
    assert_eq!(*contents(&deque), [0, 1]);

    while deque.pop_back().is_some() {}
    deque.clear();
    assert_eq!(deque.buffer_count(), 1);
    assert_eq!(deque.begin().node(), (map_size - 1) / 2);
    deque.push_front(2);
    assert_eq!(deque.map_size(), map_size);
    deque.verify_invariants();
}

#[test]
fn test_queue_usage_keeps_map_size() {
    let mut deque: Deque<u64> = (0..10).collect();
    let map_size = deque.map_size();

    for i in 10..200_000 {
        deque.push_back(i);
        assert_eq!(deque.pop_front(), Some(i - 10));
    }
    assert_eq!(deque.map_size(), map_size, "A bounded queue shouldn't keep growing its map.");
    assert!(deque.buffer_count() <= 3);
    assert!(deque.iter().copied().eq(199_990..200_000));
    deque.verify_invariants();

    let mut deque: Deque<u64> = (0..10).rev().collect();
    for i in 10..200_000 {
        deque.push_front(i);
        assert_eq!(deque.pop_back(), Some(i - 10));
    }
    assert_eq!(deque.map_size(), map_size);
    assert!(deque.buffer_count() <= 3);
    assert!(deque.iter().copied().eq((199_990..200_000).rev()));
    deque.verify_invariants();
}

#[test]
fn test_recentering_reserves_requested_buffers() {
    let buf = buffer_size::<u64>();
    let mut deque = Deque::<u64>::with_cap(0);
    let map_size = deque.map_size();

    // Walk ten elements along until the back enters the last slot of the map.
    let mut next = 0;
    while deque.len() < 10 {
        deque.push_back(next);
        next += 1;
    }
    while deque.end().node() < map_size - 1 {
        deque.push_back(next);
        deque.pop_front();
        next += 1;
    }
    let before = contents(&deque);

    deque.reserve_back(buf);
    assert_eq!(deque.map_size(), map_size, "A mostly empty map should be reused.");
    assert!(deque.end().node() < map_size - 1, "The active range should have moved.");
    assert_eq!(contents(&deque), before);
    deque.verify_invariants();

    let reserved = deque.buffer_count();
    for _ in 0..buf {
        deque.push_back(next);
        next += 1;
    }
    assert_eq!(deque.buffer_count(), reserved, "Reserved buffers should be used before allocating.");
    assert_eq!(deque.map_size(), map_size);
    assert!(deque.iter().take(10).eq(before.iter()));
    deque.verify_invariants();

    while deque.begin().node() > 0 {
        deque.push_front(0);
    }
    deque.reserve_front(buf);
    deque.verify_invariants();
    assert!(deque.iter().rev().take(buf).copied().eq((next - buf as u64..next).rev()));
}

#[test]
fn test_drop_counts() {
    let counter = CountedDrop::new(0);
    let deque = Deque::repeat(counter.clone(), 2000);
    // repeat moves the original into the last element.
    assert_eq!(counter.take(), 0);
    drop(deque);
    assert_eq!(counter.take(), 2000);

    let mut deque = Deque::repeat_with(|| counter.clone(), 2000);
    deque.truncate(1500);
    assert_eq!(counter.take(), 500);
    deque.erase_range(deque.position(100), deque.position(1100));
    assert_eq!(counter.take(), 1000);
    drop(deque.remove(250));
    assert_eq!(counter.take(), 1);
    deque.clear();
    assert_eq!(counter.take(), 499);

    let deque = Deque::repeat_with(|| counter.clone(), 2000);
    let mut iter = deque.into_iter();
    drop(iter.next());
    drop(iter.next_back());
    drop(iter);
    assert_eq!(counter.take(), 2000);
}

#[test]
fn test_panicking_clone_leaves_deque_unchanged() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let mut deque: Deque<_> = (0..100).map(|i| PanicOnClone::new(i, &budget)).collect();
    let begin = deque.begin();
    let end = deque.end();

    budget.set(5);
    assert_panics!({
        deque.insert_n(50, 10, PanicOnClone::new(1000, &budget));
    });
    assert_eq!(deque.begin(), begin);
    assert_eq!(deque.end(), end);
    assert!(deque.iter().map(|value| value.value).eq(0..100));

    assert_panics!({
        deque.emplace_back_with(|| panic!("constructor failed"));
    });
    assert_panics!({
        deque.emplace_front_with(|| panic!("constructor failed"));
    });
    assert_eq!(deque.len(), 100);
    deque.verify_invariants();

    budget.set(usize::MAX);
    let value = deque.emplace_back_with(|| PanicOnClone::new(100, &budget));
    value.value += 1;
    assert_eq!(deque.back().map(|value| value.value), Some(101));
}

#[test]
fn test_failed_reservation_leaves_deque_unchanged() {
    let mut deque: Deque<u8> = (0..10).collect();
    let map_size = deque.map_size();

    assert!(deque.try_reserve_back(usize::MAX).is_err());
    assert!(deque.try_reserve_front(usize::MAX).is_err());
    assert_eq!(deque.map_size(), map_size);
    assert_eq!(*contents(&deque), [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    deque.verify_invariants();
}

#[test]
fn test_reserve_and_shrink() {
    let buf = buffer_size::<u16>();
    let mut deque = Deque::<u16>::new();

    deque.reserve_back(buf * 3);
    deque.reserve_front(buf * 2);
    let buffers = deque.buffer_count();
    assert!(buffers >= 6);

    for i in 0..(buf * 3) as u16 {
        deque.push_back(i);
    }
    assert_eq!(deque.buffer_count(), buffers, "Reserved buffers should be used.");
    deque.verify_invariants();

    deque.shrink_to_fit();
    assert!(deque.buffer_count() < buffers);
    deque.verify_invariants();
}

#[test]
fn test_assignment() {
    let mut a: Deque<_> = (0..10).collect();
    let b: Deque<_> = (100..103).collect();

    a.clone_from(&b);
    assert_eq!(a.len(), 3);
    assert_eq!(a, b);
    a.verify_invariants();

    let c: Deque<_> = (0..5000).collect();
    a.clone_from(&c);
    assert_eq!(a, c);

    a.assign_n(3, 7);
    assert_eq!(*contents(&a), [7, 7, 7]);
    a.assign_n(5, 8);
    assert_eq!(*contents(&a), [8, 8, 8, 8, 8]);

    a.assign(0..2);
    assert_eq!(*contents(&a), [0, 1]);
    a.assign((0..2000).filter(|i| i % 2 == 1));
    assert!(a.iter().copied().eq((1..2000).step_by(2)));
    a.verify_invariants();

    let mut taken = a.take();
    assert_eq!(a.map_size(), 0, "A moved from Deque shouldn't hold a map.");
    assert!(a.is_empty());
    assert_eq!(taken.len(), 1000);

    a.swap_with(&mut taken);
    assert_eq!(a.len(), 1000);
    assert!(taken.is_empty());

    let mut other: Deque<_> = (0..10).collect();
    a.append(&mut other);
    assert_eq!(a.len(), 1010);
    assert!(other.is_empty());
    assert_eq!(a.back(), Some(&9));
}

#[test]
fn test_resize() {
    let mut deque = Deque::from([1, 2, 3]);

    deque.resize(6, 0);
    assert_eq!(*contents(&deque), [1, 2, 3, 0, 0, 0]);
    deque.resize(2, 0);
    assert_eq!(*contents(&deque), [1, 2]);

    let mut next = 10;
    deque.resize_with(4, || { next += 1; next });
    assert_eq!(*contents(&deque), [1, 2, 11, 12]);
    deque.resize_default(5);
    assert_eq!(*contents(&deque), [1, 2, 11, 12, 0]);

    let deque = Deque::<u8>::repeat_default(3);
    assert_eq!(*contents(&deque), [0, 0, 0]);
    assert_eq!(deque.max_size(), isize::MAX as usize);
}

#[test]
fn test_iterators() {
    let mut deque: Deque<u64> = (0..3000).collect();

    let mut iter = deque.iter();
    assert_eq!(iter.len(), 3000);
    assert_eq!(iter.nth(1000), Some(&1000));
    assert_eq!(iter.nth_back(999), Some(&2000));
    assert_eq!(iter.len(), 999);
    assert_eq!(iter.next(), Some(&1001));
    assert_eq!(iter.next_back(), Some(&1999));
    assert_eq!(iter.nth(5000), None);
    assert_eq!(iter.next(), None);

    assert!(deque.iter().rev().copied().eq((0..3000).rev()));
    assert_eq!(deque.iter().skip(2500).count(), 500);
    assert_eq!(deque.iter().last(), Some(&2999));

    for value in deque.iter_mut() {
        *value *= 2;
    }
    assert_eq!(deque.iter_mut().nth(10).copied(), Some(20));
    assert_eq!(deque.iter_mut().rev().nth(0).copied(), Some(5998));

    let collected: Deque<_> = deque.into_iter().rev().collect();
    assert_eq!(collected.front(), Some(&5998));
}

#[test]
fn test_comparison_and_hash() {
    let a = Deque::from([1, 2, 3]);
    let b = Deque::from([1, 2, 4]);
    let c = Deque::from([1, 2]);

    assert!(a < b);
    assert!(c < a);
    assert!(a > c);
    assert!(a != b);
    assert_eq!(a, a.clone());
    assert_eq!(a.cmp(&a.clone()), std::cmp::Ordering::Equal);

    // Equal contents in different buffer layouts are still equal.
    let mut d = Deque::new();
    for i in (1..=3).rev() {
        d.push_front(i);
    }
    assert_eq!(a, d);

    let state = RandomState::new();
    assert_eq!(state.hash_one(&a), state.hash_one(&d));
}

#[test]
fn test_formatting() {
    let deque = Deque::from([1, 2, 3]);
    assert_eq!(format!("{deque}"), "[1, 2, 3]");
    assert_eq!(
        format!("{deque:?}"),
        format!("Deque {{ contents: [1, 2, 3], len: 3, buffers: 1, map_size: {INIT_MAP_SIZE} }}")
    );

    let mut deque: Deque<[u8; 300]> = Deque::new();
    assert_eq!(format!("{deque}"), "[]");
    for i in 0..17 {
        deque.push_back([i; 300]);
    }
    let display = format!("{deque}");
    assert_eq!(display.matches("][").count(), 1, "Elements should be grouped by buffer.");
}

#[test]
fn test_large_and_zero_sized_types() {
    assert_eq!(buffer_size::<[u8; 300]>(), 16);
    let mut deque: Deque<[u64; 40]> = Deque::new();
    for i in 0..100 {
        deque.push_back([i; 40]);
    }
    deque.insert(3, [1000; 40]);
    assert_eq!(deque[3], [1000; 40]);
    assert_eq!(deque.remove(50), [49; 40]);
    deque.verify_invariants();

    let mut deque = Deque::new();
    for _ in 0..10_000 {
        deque.push_back(ZeroSizedType);
        deque.push_front(ZeroSizedType);
    }
    assert_eq!(deque.len(), 20_000);
    deque.insert(500, ZeroSizedType);
    deque.erase_range(deque.position(10), deque.position(9000));
    assert_eq!(deque.len(), 20_001 - 8990);
    deque.verify_invariants();
    assert_eq!(deque.iter().count(), deque.len());
}
