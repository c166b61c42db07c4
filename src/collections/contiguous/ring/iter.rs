use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::slice;

use super::RingVector;
use crate::storage::Storage;

/// A borrowed iterator over a [`RingVector`], from the back (logical index 0) to the front. See
/// [`RingVector::iter`].
pub struct Iter<'a, T> {
    pub(crate) primary: slice::Iter<'a, T>,
    pub(crate) wrapped: slice::Iter<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(primary: &'a [T], wrapped: &'a [T]) -> Iter<'a, T> {
        Iter {
            primary: primary.iter(),
            wrapped: wrapped.iter(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.primary.next().or_else(|| self.wrapped.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }

    fn fold<B, F: FnMut(B, Self::Item) -> B>(self, init: B, mut f: F) -> B {
        let acc = self.primary.fold(init, &mut f);
        self.wrapped.fold(acc, f)
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.wrapped.next_back().or_else(|| self.primary.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.primary.len() + self.wrapped.len()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            primary: self.primary.clone(),
            wrapped: self.wrapped.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// A borrowed iterator over mutable references to the elements of a [`RingVector`]. See
/// [`RingVector::iter_mut`].
pub struct IterMut<'a, T> {
    pub(crate) primary: slice::IterMut<'a, T>,
    pub(crate) wrapped: slice::IterMut<'a, T>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(primary: &'a mut [T], wrapped: &'a mut [T]) -> IterMut<'a, T> {
        IterMut {
            primary: primary.iter_mut(),
            wrapped: wrapped.iter_mut(),
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.primary.next().or_else(|| self.wrapped.next())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.wrapped.next_back().or_else(|| self.primary.next_back())
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {
    fn len(&self) -> usize {
        self.primary.len() + self.wrapped.len()
    }
}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.primary.as_slice())
            .entries(self.wrapped.as_slice())
            .finish()
    }
}

/// An owned iterator over the elements of a [`RingVector`], from the back to the front. See
/// [`RingVector::into_iter`].
///
/// Any elements that haven't been yielded are dropped along with the iterator, and the Block goes
/// back to the ring's storage provider.
pub struct IntoIter<T, S: Storage<T>> {
    pub(crate) ring: RingVector<T, S>,
}

impl<T, S: Storage<T>> Iterator for IntoIter<T, S> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring.pop_back()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.ring.len(), Some(self.ring.len()))
    }
}

impl<T, S: Storage<T>> DoubleEndedIterator for IntoIter<T, S> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.ring.pop_front()
    }
}

impl<T, S: Storage<T>> ExactSizeIterator for IntoIter<T, S> {
    fn len(&self) -> usize {
        self.ring.len()
    }
}

impl<T, S: Storage<T>> FusedIterator for IntoIter<T, S> {}

impl<T: Debug, S: Storage<T>> Debug for IntoIter<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.ring.iter()).finish()
    }
}

impl<T, S: Storage<T>> IntoIterator for RingVector<T, S> {
    type Item = T;

    type IntoIter = IntoIter<T, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { ring: self }
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a RingVector<T, S> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: Storage<T>> IntoIterator for &'a mut RingVector<T, S> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
