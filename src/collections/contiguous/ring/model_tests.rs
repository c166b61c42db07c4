//! Tests that drive a [`RingVector`] and a [`VecDeque`] through the same operations and check that
//! they never disagree. The ring's logical index 0 is the deque's front, so the ring's
//! `push_front` is the deque's `push_back` and so on.
#![cfg(test)]

use std::collections::VecDeque;

use proptest::prelude::*;

use super::*;

const FIXED_CAP: usize = 8;

#[derive(Debug, Clone)]
enum Op {
    PushFront(i32),
    PushBack(i32),
    PopFront,
    PopBack,
    Insert(u8, i32),
    InsertRange(u8, Vec<i32>),
    Remove(u8),
    RemoveRange(u8, u8),
    Get(u8),
    Truncate(u8),
    MakeContiguous,
    ShrinkToFit,
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i32>().prop_map(Op::PushFront),
        4 => any::<i32>().prop_map(Op::PushBack),
        2 => Just(Op::PopFront),
        3 => Just(Op::PopBack),
        2 => (any::<u8>(), any::<i32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => (any::<u8>(), prop::collection::vec(any::<i32>(), 0..5))
            .prop_map(|(i, v)| Op::InsertRange(i, v)),
        2 => any::<u8>().prop_map(Op::Remove),
        1 => (any::<u8>(), any::<u8>()).prop_map(|(a, b)| Op::RemoveRange(a, b)),
        2 => any::<u8>().prop_map(Op::Get),
        1 => any::<u8>().prop_map(Op::Truncate),
        1 => Just(Op::MakeContiguous),
        1 => Just(Op::ShrinkToFit),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both collections and checks that they agree on its result. `fixed` says
/// whether the ring may refuse to grow, in which case the deque is left alone too.
fn apply(
    ring: &mut RingVector<i32>,
    dq: &mut VecDeque<i32>,
    op: Op,
    fixed: bool,
) -> Result<(), TestCaseError> {
    let full = fixed && dq.len() == FIXED_CAP;
    // Indices are allowed one past the end so that out of bounds access is exercised too.
    let index = |i: u8, len: usize| i as usize % (len + 2);

    match op {
        Op::PushFront(v) => {
            let res = ring.try_push_front(v);
            if full {
                prop_assert_eq!(res, Err(v));
            } else {
                prop_assert_eq!(res, Ok(()));
                dq.push_back(v);
            }
        },
        Op::PushBack(v) => {
            let res = ring.try_push_back(v);
            if full {
                prop_assert_eq!(res, Err(v));
            } else {
                prop_assert_eq!(res, Ok(()));
                dq.push_front(v);
            }
        },
        Op::PopFront => prop_assert_eq!(ring.pop_front(), dq.pop_back()),
        Op::PopBack => prop_assert_eq!(ring.pop_back(), dq.pop_front()),
        Op::Insert(i, v) => {
            let i = index(i, dq.len());
            let res = ring.try_insert(i, v);
            if i > dq.len() {
                prop_assert!(matches!(res, Err(InsertError::IndexOutOfBounds(_))));
            } else if full {
                prop_assert!(matches!(res, Err(InsertError::CapacityExceeded(_))));
            } else {
                prop_assert_eq!(res, Ok(()));
                dq.insert(i, v);
            }
        },
        Op::InsertRange(i, values) => {
            let i = index(i, dq.len());
            let fits = !fixed || dq.len() + values.len() <= FIXED_CAP;
            let res = ring.try_insert_range(i, values.iter().copied());
            if i > dq.len() {
                prop_assert!(res.is_err());
            } else if !fits {
                prop_assert!(matches!(res, Err(InsertError::CapacityExceeded(_))));
            } else {
                prop_assert_eq!(res, Ok(()));
                for (offset, v) in values.into_iter().enumerate() {
                    dq.insert(i + offset, v);
                }
            }
        },
        Op::Remove(i) => {
            let i = index(i, dq.len());
            prop_assert_eq!(ring.try_remove(i).ok(), dq.remove(i));
        },
        Op::RemoveRange(a, b) => {
            let (a, b) = (index(a, dq.len()), index(b, dq.len()));
            let res = ring.try_remove_range(a..b);
            if a <= b && b <= dq.len() {
                prop_assert_eq!(res, Ok(()));
                dq.drain(a..b);
            } else {
                prop_assert_eq!(res, Err(RangeOutOfBounds { start: a, end: b, len: dq.len() }));
            }
        },
        Op::Get(i) => {
            let i = index(i, dq.len());
            prop_assert_eq!(ring.try_get(i).ok(), dq.get(i));
        },
        Op::Truncate(len) => {
            let len = index(len, dq.len());
            ring.truncate(len);
            dq.truncate(len);
        },
        Op::MakeContiguous => {
            let cap = ring.cap();
            prop_assert_eq!(&*ring.make_contiguous(), &*dq.make_contiguous());
            prop_assert_eq!(ring.cap(), cap);
        },
        Op::ShrinkToFit => {
            ring.shrink_to_fit();
            if !fixed {
                prop_assert_eq!(ring.cap(), ring.len());
            }
        },
        Op::Clear => {
            ring.clear();
            dq.clear();
        },
    }

    ring.verify_cursors();
    prop_assert_eq!(ring.len(), dq.len());
    prop_assert!(ring.iter().eq(dq.iter()));
    prop_assert!(ring.iter().rev().eq(dq.iter().rev()));
    prop_assert_eq!(ring.back(), dq.front());
    prop_assert_eq!(ring.front(), dq.back());
    if fixed {
        prop_assert_eq!(ring.cap(), FIXED_CAP);
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_growable_matches_vecdeque(
        cap in 0_usize..6,
        ops in prop::collection::vec(op(), 1..200),
    ) {
        let mut ring = RingVector::with_cap(cap);
        let mut dq = VecDeque::new();
        for op in ops {
            apply(&mut ring, &mut dq, op, false)?;
        }
    }

    #[test]
    fn prop_fixed_matches_vecdeque(ops in prop::collection::vec(op(), 1..200)) {
        let mut ring = RingVector::fixed(FIXED_CAP);
        let mut dq = VecDeque::new();
        for op in ops {
            apply(&mut ring, &mut dq, op, true)?;
        }
    }

    #[test]
    fn prop_search_matches_slice(
        mut values in prop::collection::vec(-50_i32..50, 0..24),
        spare in 0_usize..8,
        shift in 0_usize..32,
        target in -60_i32..60,
        start in 0_usize..24,
    ) {
        values.sort();
        let len = values.len();
        let cap = len + spare + 1;

        // Walk a placeholder around a fixed Block so that the contents straddle its end for some
        // shifts. An empty ring would snap back to slot 0, hence the placeholder.
        let mut ring = RingVector::fixed(cap);
        ring.push_front(0);
        for _ in 0..shift % cap {
            ring.push_front(0);
            ring.pop_back();
        }
        ring.extend(values.iter().copied());
        ring.pop_back();
        prop_assert_eq!(ring.len(), len);

        let start = start.min(len);
        let slice = &values[start..];

        prop_assert_eq!(
            ring.index_of(start.., &target),
            slice.iter().position(|&v| v == target).map(|i| i + start)
        );
        prop_assert_eq!(
            ring.last_index_of(start.., &target),
            slice.iter().rposition(|&v| v == target).map(|i| i + start)
        );
        prop_assert_eq!(ring.contains(&target), values.contains(&target));

        match ring.binary_search(start.., &target) {
            Ok(i) => prop_assert_eq!(values[i], target),
            Err(i) => {
                prop_assert!(!slice.contains(&target));
                prop_assert_eq!(i, start + slice.partition_point(|&v| v < target));
            },
        }
    }

    #[test]
    fn prop_copy_to_round_trips(
        values in prop::collection::vec(any::<i32>(), 0..32),
        pops in 0_usize..16,
    ) {
        let mut ring: RingVector<_> = values.iter().copied().collect();
        let mut dq: VecDeque<_> = values.into_iter().collect();
        for _ in 0..pops {
            ring.pop_back();
            dq.pop_front();
            if let Some(v) = dq.front().copied() {
                ring.push_front(v);
                dq.push_back(v);
            }
        }

        let mut exact = vec![0; ring.len()];
        prop_assert!(ring.try_copy_to(&mut exact));
        prop_assert!(exact.iter().eq(dq.iter()));

        if !ring.is_empty() {
            let mut short = vec![0; ring.len() - 1];
            prop_assert!(!ring.try_copy_to(&mut short));
        }
    }
}

#[test]
fn test_random_insert_remove() {
    let mut ring = RingVector::new();
    let size = 2_000;
    for value in 1..=size {
        if value % 2 == 0 {
            ring.push_front(value);
        } else {
            ring.push_back(value);
        }
    }

    for _ in 0..20_000 {
        let from = rand::random_range(0..size);
        let to = rand::random_range(0..size - 1);
        let value = ring.remove(from);
        ring.insert(to, value);
    }
    ring.verify_cursors();

    let mut sorted: Vec<usize> = ring.into_iter().collect();
    sorted.sort();
    for (idx, value) in (1..=size).enumerate() {
        assert_eq!(sorted[idx], value);
    }
}

#[test]
fn test_random_range_churn() {
    let mut ring = RingVector::with_cap(16);
    let mut dq = VecDeque::new();

    for round in 0..2_000 {
        let len = dq.len();
        if len < 4 || rand::random_range(0..3) > 0 {
            let index = rand::random_range(0..=len);
            let count = rand::random_range(1..6);
            ring.insert_range(index, round..round + count);
            for (offset, value) in (round..round + count).enumerate() {
                dq.insert(index + offset, value);
            }
        } else {
            let start = rand::random_range(0..len);
            let end = rand::random_range(start..=len);
            ring.remove_range(start..end);
            dq.drain(start..end);
        }
        ring.verify_cursors();
        assert!(ring.iter().eq(dq.iter()), "Round {round} left the ring out of step.");
    }
}
