use super::Storage;
use crate::collections::contiguous::Block;

/// The default provider. Every acquire is a fresh allocation of exactly the requested size and
/// every release frees the memory straight away.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Heap;

impl<T> Storage<T> for Heap {
    fn acquire(&mut self, min_size: usize) -> Block<T> {
        if min_size == 0 {
            Block::empty()
        } else {
            Block::new_uninit(min_size)
        }
    }

    fn release(&mut self, block: Block<T>) {
        drop(block);
    }
}
