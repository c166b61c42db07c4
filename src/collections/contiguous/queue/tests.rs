#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

use super::*;
use crate::collections::contiguous::RingVector;
use crate::util::alloc::CountedDrop;
use crate::util::panic::log_prelude;

#[test]
fn test_unbounded_fifo_order() {
    let mut queue = RingQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.overflow(), None);

    for i in 0..20 {
        assert_eq!(queue.enqueue(i), Ok(None), "An unbounded queue should always take a value.");
    }
    assert_eq!(queue.len(), 20);
    assert_eq!(queue.peek(), Some(&0));
    assert_eq!(queue.peek_newest(), Some(&19));

    for i in 0..20 {
        assert_eq!(queue.dequeue(), Some(i), "Values should come out in the order they went in.");
    }
    assert_eq!(queue.dequeue(), None);
}

#[test]
fn test_steady_state_doesnt_grow_forever() {
    log_prelude!();
    let mut queue = RingQueue::with_cap(8);

    for i in 0..3 {
        queue.enqueue(i).unwrap();
    }
    for i in 3..1_000 {
        queue.enqueue(i).unwrap();
        assert_eq!(queue.dequeue(), Some(i - 3));
    }

    assert_eq!(queue.len(), 3);
    assert_eq!(
        queue.cap(), 8,
        "A queue that stays under half full should keep wrapping around its Block."
    );
}

#[test]
fn test_bounded_reject() {
    let mut queue = RingQueue::bounded(2, Overflow::Reject);
    assert_eq!(queue.enqueue("a"), Ok(None));
    assert_eq!(queue.enqueue("b"), Ok(None));
    assert!(queue.is_full());
    assert_eq!(queue.enqueue("c"), Err("c"), "A full rejecting queue should hand values back.");

    assert_eq!(queue.dequeue(), Some("a"));
    assert_eq!(queue.enqueue("c"), Ok(None));
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), ["b", "c"]);
    assert_eq!(queue.cap(), 2, "A bounded queue should never reshape.");
}

#[test]
fn test_bounded_overwrite() {
    let mut queue = RingQueue::bounded(3, Overflow::Overwrite);
    for i in 0..3 {
        assert_eq!(queue.enqueue(i), Ok(None));
    }

    assert_eq!(queue.enqueue(3), Ok(Some(0)), "The oldest value should be evicted.");
    assert_eq!(queue.enqueue(4), Ok(Some(1)));
    assert_eq!(queue.peek(), Some(&2));
    assert_eq!(queue.peek_newest(), Some(&4));
    assert!(queue.as_ring().is_wrapped());
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [2, 3, 4]);
}

#[test]
fn test_overwrite_with_no_slots() {
    let mut queue = RingQueue::bounded(0, Overflow::Overwrite);
    assert_eq!(
        queue.enqueue(7), Err(7),
        "A queue without slots can't evict its way to room."
    );
    assert!(queue.is_empty());
}

#[test]
fn test_evicted_values_are_returned_not_dropped() {
    let drops = Rc::new(Cell::new(0));
    let mut queue = RingQueue::bounded(2, Overflow::Overwrite);

    for id in 0..2 {
        queue.enqueue(CountedDrop::new(id, &drops)).unwrap();
    }
    let evicted = queue.enqueue(CountedDrop::new(2, &drops)).unwrap();
    assert_eq!(drops.get(), 0, "Eviction should hand the value over rather than dropping it.");
    assert_eq!(evicted.map(|value| value.id), Some(0));
    assert_eq!(drops.get(), 1);

    queue.clear();
    assert_eq!(drops.get(), 3);
    assert_eq!(queue.cap(), 2, "Clearing should keep the Block.");
}

#[test]
fn test_conversions() {
    let ring: RingVector<_> = (0..4).collect();
    let mut queue = RingQueue::from(ring);
    assert_eq!(queue.dequeue(), Some(0), "Logical index 0 should be the oldest element.");

    let queue: RingQueue<_> = (10..13).collect();
    assert_eq!(queue.clone().into_ring(), [10, 11, 12]);
    assert_eq!(format!("{:?}", queue.iter()), "[10, 11, 12]");
    assert_eq!((&queue).into_iter().sum::<i32>(), 33);
}
