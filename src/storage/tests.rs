#![cfg(test)]

use super::*;
use crate::collections::contiguous::RingVector;
use crate::util::panic::log_prelude;

#[test]
fn test_heap_is_exact() {
    let mut heap = Heap;
    let block: Block<u16> = heap.acquire(7);
    assert_eq!(block.size(), 7, "Heap should allocate exactly what was asked for.");
    heap.release(block);

    let block: Block<u16> = heap.acquire(0);
    assert!(block.is_empty(), "A zero-slot request shouldn't allocate.");
}

#[test]
fn test_ring_grows_through_heap() {
    let mut ring = RingVector::new_in(Heap);
    ring.push_front(1_u8);
    assert_eq!(ring.cap(), 1, "The first Block should be exactly as large as requested.");
    ring.push_front(2);
    assert_eq!(ring.cap(), 2);
    ring.push_front(3);
    assert_eq!(ring.cap(), 4);
}

#[cfg(feature = "pool")]
mod pooled {
    use std::panic::{self, AssertUnwindSafe};
    use std::thread;

    use super::*;

    #[test]
    fn test_rent_rounds_up() {
        let pool = Pool::<u64>::new(2);
        assert_eq!(pool.rent(5).size(), 8);
        assert_eq!(pool.rent(8).size(), 8);
        assert_eq!(pool.rent(1).size(), 1);
        assert!(pool.rent(0).is_empty());
    }

    #[test]
    fn test_give_back_and_reuse() {
        log_prelude!();
        let pool = Pool::<u64>::new(2);

        let block = pool.rent(12);
        let ptr = block.ptr;
        pool.give_back(block);
        assert_eq!(pool.retained_in_class(16), 1);
        assert_eq!(pool.retained(), 1);

        let block = pool.rent(9);
        assert_eq!(block.ptr, ptr, "A retained Block of the right class should be reused.");
        assert_eq!(pool.retained(), 0);
        pool.give_back(block);
    }

    #[test]
    fn test_retention_limit() {
        let pool = Pool::<u8>::new(2);
        let blocks = [pool.rent(4), pool.rent(4), pool.rent(3)];
        for block in blocks {
            pool.give_back(block);
        }

        assert_eq!(
            pool.retained_in_class(4), 2,
            "Blocks beyond the retention limit should be freed."
        );
        pool.clear();
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn test_odd_sizes_are_freed() {
        let pool = Pool::<u8>::new(4);
        pool.give_back(Block::new_uninit(6));
        pool.give_back(Block::empty());
        assert_eq!(pool.retained(), 0, "Blocks outside every size class shouldn't be kept.");
        assert_eq!(pool.retained_in_class(6), 0);
    }

    #[test]
    fn test_rings_share_blocks() {
        let pooled = Pool::shared(1);

        let mut first = RingVector::new_in(pooled.clone());
        first.extend(0..3);
        assert_eq!(first.cap(), 4);
        first.shrink_to_fit();
        assert_eq!(first.cap(), 4, "A pooled Block rounds the exact fit back up.");
        drop(first);

        let mut second = RingVector::new_in(pooled.clone());
        second.push_front(10);
        second.reserve(3);
        assert_eq!(second.cap(), 4);
        assert_eq!(pooled.pool().retained(), 1, "The 1-slot Block should be back in the pool.");

        let clone = second.clone();
        assert_eq!(clone, [10]);
        assert_eq!(clone.cap(), 4);
    }

    #[test]
    fn test_survives_poisoning() {
        let pool = Pool::<u32>::new(2);
        pool.give_back(pool.rent(4));

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _shelves = pool.shelves();
            panic!("panicking while the shelves are locked");
        }));
        assert!(result.is_err());

        assert_eq!(pool.retained(), 1, "A poisoned lock shouldn't lose retained Blocks.");
        let block = pool.rent(3);
        assert_eq!(block.size(), 4);
        assert_eq!(pool.retained(), 0);
        pool.give_back(block);
        assert_eq!(pool.retained_in_class(4), 1);
    }

    #[test]
    fn test_pool_across_threads() {
        let pooled = Pool::<usize>::shared(8);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let pooled = pooled.clone();
                thread::spawn(move || {
                    for round in 0..50 {
                        let mut ring = RingVector::new_in(pooled.clone());
                        ring.extend(0..(round % 10 + t));
                        assert_eq!(ring.len(), round % 10 + t);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert!(pooled.pool().retained() <= 8 * usize::BITS as usize);
    }
}
