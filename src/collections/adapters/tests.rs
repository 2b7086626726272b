#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::algorithm::{FnCompare, Greater, Less, is_heap};
use crate::collections::contiguous::Vector;
use crate::collections::segmented::Deque;
use crate::util::alloc::{CountedDrop, PanicOnClone};
use crate::util::panic::assert_panics;

#[test]
fn test_stack_lifo() {
    let mut stack = Stack::<_>::new();
    assert!(stack.is_empty());
    assert_eq!(stack.top(), None);
    assert_eq!(stack.pop(), None);

    for i in 0..100 {
        stack.push(i);
    }
    assert_eq!(stack.len(), 100);
    assert_eq!(stack.top(), Some(&99));

    *stack.top_mut().unwrap() = -1;
    assert_eq!(stack.pop(), Some(-1));

    for i in (0..99).rev() {
        assert_eq!(stack.pop(), Some(i));
    }
    assert!(stack.is_empty());
}

#[test]
fn test_stack_over_vector() {
    let mut stack: Stack<String, Vector<String>> = Stack::new();
    stack.push(String::from("a"));
    stack.emplace_with(|| String::from("b")).push('c');

    assert_eq!(stack.top().map(String::as_str), Some("bc"));
    assert_eq!(stack.pop().as_deref(), Some("bc"));
    assert_eq!(stack.pop().as_deref(), Some("a"));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_stack_from_sequence() {
    let deque = Deque::from([1, 2, 3]);
    let mut stack = Stack::from_sequence(deque);
    assert_eq!(stack.top(), Some(&3));

    stack.extend([4, 5]);
    assert_eq!(stack.pop(), Some(5));

    let deque = stack.into_inner();
    assert_eq!(deque, Deque::from([1, 2, 3, 4]));
}

#[test]
fn test_stack_comparison() {
    let a: Stack<i32> = [1, 2, 3].into_iter().collect();
    let b: Stack<i32> = [1, 2, 4].into_iter().collect();
    let c = a.clone();

    assert_eq!(a, c);
    assert_ne!(a, b);
    assert!(a < b);
    assert_eq!(format!("{:?}", a), format!("Stack {{ seq: {:?} }}", a.seq));
}

#[test]
fn test_stack_swap_and_clear() {
    let mut a: Stack<i32> = [1, 2].into_iter().collect();
    let mut b: Stack<i32> = [3].into_iter().collect();

    a.swap_with(&mut b);
    assert_eq!(a.top(), Some(&3));
    assert_eq!(b.len(), 2);

    b.clear();
    assert!(b.is_empty());
    b.push(7);
    assert_eq!(b.pop(), Some(7));
}

#[test]
fn test_queue_fifo() {
    let mut queue = Queue::<_>::new();
    assert_eq!(queue.front(), None);
    assert_eq!(queue.back(), None);
    assert_eq!(queue.pop(), None);

    for i in 0..10_000 {
        queue.push(i);
    }
    assert_eq!(queue.len(), 10_000);
    assert_eq!(queue.front(), Some(&0));
    assert_eq!(queue.back(), Some(&9_999));

    for i in 0..5_000 {
        assert_eq!(queue.pop(), Some(i));
    }

    *queue.front_mut().unwrap() += 1;
    *queue.back_mut().unwrap() += 1;
    assert_eq!(queue.pop(), Some(5_001));
    assert_eq!(queue.back(), Some(&10_000));
}

#[test]
fn test_queue_interleaved() {
    let mut queue = Queue::<_>::new();
    let mut next_out = 0;
    let mut next_in = 0;

    for round in 0..50 {
        for _ in 0..round % 7 + 1 {
            queue.push(next_in);
            next_in += 1;
        }
        for _ in 0..round % 5 {
            if let Some(value) = queue.pop() {
                assert_eq!(value, next_out);
                next_out += 1;
            }
        }
        assert_eq!(queue.len(), next_in - next_out);
    }
}

#[test]
fn test_queue_emplace_and_housekeeping() {
    let mut queue: Queue<Vector<u8>> = Queue::default();
    queue.emplace_with(Vector::new).push(1);
    queue.emplace_with(|| Vector::from_iter([2, 3]));

    assert_eq!(queue.front().map(|v| &**v), Some(&[1][..]));
    assert_eq!(queue.back().map(|v| v.len()), Some(2));

    let mut other = Queue::new();
    queue.swap_with(&mut other);
    assert!(queue.is_empty());
    assert_eq!(other.len(), 2);

    let deque = other.into_inner();
    assert_eq!(deque.len(), 2);
}

#[test]
fn test_queue_drops_elements() {
    let counter = CountedDrop::new(0);
    let mut queue = Queue::<_>::new();
    for _ in 0..10 {
        queue.push(counter.clone());
    }

    drop(queue.pop());
    assert_eq!(*counter.borrow(), 1);

    queue.clear();
    assert_eq!(*counter.borrow(), 10);
}

#[test]
fn test_queue_panicking_emplace() {
    let mut queue: Queue<i32> = [1, 2, 3].into_iter().collect();

    assert_panics!({
        queue.emplace_with(|| panic!("constructor failed"));
    });

    assert_eq!(queue.len(), 3);
    assert_eq!(queue.back(), Some(&3));
}

#[test]
fn test_priority_queue_max() {
    let mut queue = PriorityQueue::<_>::new();
    for value in [5, 1, 8, 3, 9, 2, 8] {
        queue.push(value);
        assert!(is_heap(&queue.heap, &Less));
    }

    assert_eq!(queue.len(), 7);
    assert_eq!(queue.top(), Some(&9));

    let mut popped = Vector::new();
    while let Some(value) = queue.pop() {
        popped.push(value);
        assert!(is_heap(&queue.heap, &Less));
    }
    assert_eq!(*popped, [9, 8, 8, 5, 3, 2, 1]);
    assert_eq!(queue.top(), None);
}

#[test]
fn test_priority_queue_min() {
    let mut queue = PriorityQueue::with_compare(Greater);
    queue.extend([5, 1, 8, 3]);
    queue.emplace_with(|| 0);

    assert_eq!(queue.top(), Some(&0));
    assert_eq!(queue.pop(), Some(0));
    assert_eq!(queue.pop(), Some(1));
    assert_eq!(queue.pop(), Some(3));
}

#[test]
fn test_priority_queue_closure() {
    let by_len = FnCompare(|a: &&str, b: &&str| a.len() < b.len());
    let mut queue = PriorityQueue::with_compare(by_len);
    queue.extend(["a", "abc", "ab"]);

    assert_eq!(queue.pop(), Some("abc"));
    assert_eq!(queue.pop(), Some("ab"));
    assert_eq!(queue.pop(), Some("a"));
}

#[test]
fn test_priority_queue_from_iter() {
    let queue: PriorityQueue<_> = (0..100).rev().chain(0..100).collect();
    assert_eq!(queue.len(), 200);
    assert!(is_heap(&queue.heap, &Less));

    let sorted = queue.clone().into_sorted_vector();
    assert!(sorted.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(sorted[199], 99);

    let heap = queue.into_vector();
    assert_eq!(heap[0], 99);
}

#[test]
fn test_priority_queue_from_vector() {
    let queue = PriorityQueue::from_vector(Vector::from_iter([1, 7, 3]), Greater);
    assert_eq!(queue.top(), Some(&1));
    assert_eq!(*queue.compare(), Greater);
}

#[test]
fn test_priority_queue_clear_and_swap() {
    let counter = CountedDrop::new(0);
    let by_count = FnCompare(|_: &CountedDrop, _: &CountedDrop| false);
    let mut queue = PriorityQueue::with_compare(by_count);
    queue.extend(std::iter::repeat_n(counter.clone(), 4));

    let mut other = PriorityQueue::with_compare(by_count);
    queue.swap_with(&mut other);
    assert!(queue.is_empty());
    assert_eq!(other.len(), 4);

    other.clear();
    assert_eq!(*counter.borrow(), 4);
}

#[test]
fn test_priority_queue_panicking_clone() {
    let budget = Rc::new(Cell::new(usize::MAX));
    let mut queue = PriorityQueue::with_compare(FnCompare(
        |a: &PanicOnClone, b: &PanicOnClone| a.value < b.value,
    ));
    for value in 0..10 {
        queue.push(PanicOnClone::new(value, &budget));
    }

    budget.set(3);
    assert_panics!({
        let _copy = queue.clone();
    });

    assert_eq!(queue.len(), 10);
    assert_eq!(queue.top().map(|top| top.value), Some(9));
}
