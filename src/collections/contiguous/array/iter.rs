use std::iter::FusedIterator;
use std::mem::MaybeUninit;

use super::Array;
#[allow(unused)]
use crate::collections::contiguous::Vector;

impl<T> IntoIterator for Array<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let size = self.size;
        IntoIter::from_buffer(self.forget_init(), size)
    }
}

/// Owned iteration over an [`Array`] or a [`Vector`], from either end. See [`Array::into_iter`]
/// and [`Vector::into_iter`].
pub struct IntoIter<T> {
    buf: Array<MaybeUninit<T>>,
    // Only buf[start..end] is still initialized.
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Takes over `buf`, of which the first `len` elements must be initialized.
    pub(crate) fn from_buffer(buf: Array<MaybeUninit<T>>, len: usize) -> IntoIter<T> {
        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }

    /// Moves the element at `index` out of the buffer.
    ///
    /// # Safety
    /// `index` must be in `start..end`, and must be excluded from that range straight after.
    unsafe fn take(&mut self, index: usize) -> T {
        // SAFETY: Guaranteed by the caller.
        unsafe { self.buf[index].assume_init_read() }
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in &mut self.buf[self.start..self.end] {
            // SAFETY: Every slot in the range is initialized and hasn't been yielded.
            unsafe { slot.assume_init_drop() }
        }
        // The buffer itself is freed when buf drops, without touching the elements again.
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.start += 1;
        // SAFETY: start - 1 was the front of the range and has just left it.
        Some(unsafe { self.take(self.start - 1) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.end - self.start;
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.start == self.end {
            return None;
        }
        self.end -= 1;
        // SAFETY: end was the back of the range and has just left it.
        Some(unsafe { self.take(self.end) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
