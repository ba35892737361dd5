use core::array;
use core::iter::{FusedIterator, Take};
use core::slice;

use crate::vec::FixVec;

/// Owning iterator over the live elements of a [`FixVec`].
///
/// Created by [`into_iter`](IntoIterator::into_iter) on a `FixVec` by
/// value. Live elements are moved out; stale slots past the length fence
/// are dropped with the iterator without being yielded.
///
/// This iterator implements `Clone` when `T` does.
#[derive(Clone)]
pub struct IntoIter<T, const N: usize> {
    inner: Take<array::IntoIter<T, N>>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> IntoIterator for FixVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> IntoIter<T, N> {
        let (data, len) = self.into_parts();
        IntoIter {
            inner: data.into_iter().take(len),
        }
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixVec<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
