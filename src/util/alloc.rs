#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZeroSizedType;

/// A value that bumps a shared counter when dropped, for checking that a ring drops each element
/// exactly once.
#[derive(Debug)]
pub struct CountedDrop {
    pub id: usize,
    drops: Rc<Cell<usize>>,
}

impl CountedDrop {
    pub fn new(id: usize, drops: &Rc<Cell<usize>>) -> CountedDrop {
        CountedDrop {
            id,
            drops: Rc::clone(drops),
        }
    }

    pub fn counter() -> Rc<Cell<usize>> {
        Rc::new(Cell::new(0))
    }
}

impl Clone for CountedDrop {
    fn clone(&self) -> Self {
        CountedDrop::new(self.id, &self.drops)
    }
}

impl PartialEq for CountedDrop {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
