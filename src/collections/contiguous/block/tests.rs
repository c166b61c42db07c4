#![cfg(test)]

use super::*;
use crate::util::alloc::ZeroSizedType;
use crate::util::error::CapacityOverflow;

#[test]
fn test_empty_block() {
    let block = Block::<u32>::empty();
    assert_eq!(block.size(), 0);
    assert!(block.is_empty());
    assert!(block.as_uninit_slice().is_empty());
}

#[test]
fn test_slots_are_writable() {
    let mut block = Block::<usize>::new_uninit(8);
    assert_eq!(block.size(), 8);

    for (i, slot) in block.as_uninit_slice_mut().iter_mut().enumerate() {
        slot.write(i * 10);
    }

    for i in 0..8 {
        // SAFETY: Every slot was written above.
        let value = unsafe { block.slot(i).read() };
        assert_eq!(value, i * 10, "Slots should read back what was written.");
    }
}

#[test]
fn test_zst_support() {
    let block = Block::<ZeroSizedType>::new_uninit(1_000_000);
    assert_eq!(block.size(), 1_000_000);
    assert_eq!(
        Block::<ZeroSizedType>::max_size(), isize::MAX as usize,
        "A ZST Block should be held to isize::MAX slots."
    );
}

#[test]
fn test_capacity_overflow() {
    assert_eq!(
        Block::<u64>::try_new_uninit(usize::MAX).unwrap_err(),
        CapacityOverflow,
        "Layouts larger than isize::MAX should be rejected."
    );
    assert_eq!(Block::<u64>::max_size(), isize::MAX as usize / 8);
}
