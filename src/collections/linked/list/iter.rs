use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{LinkedList, Link, NodePtr};

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

/// Owned iteration over a [`LinkedList`], from either end. Anything left unyielded is dropped
/// along with the iterator.
pub struct IntoIter<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.try_pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len, Some(self.list.len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.try_pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// The part shared by both borrowing iterators: the unvisited window of the list.
///
/// `len` is what keeps the two ends from crossing, because `front` and `back` are never cleared
/// when they meet.
struct Window<T> {
    front: Link<T>,
    back: Link<T>,
    len: usize,
}

impl<T> Window<T> {
    fn over(list: &LinkedList<T>) -> Window<T> {
        Window {
            front: list.head,
            back: list.tail,
            len: list.len,
        }
    }

    fn take_front(&mut self) -> Option<NodePtr<T>> {
        if self.len == 0 {
            return None;
        }
        let node = self.front?;
        self.front = node.next();
        self.len -= 1;
        Some(node)
    }

    fn take_back(&mut self) -> Option<NodePtr<T>> {
        if self.len == 0 {
            return None;
        }
        let node = self.back?;
        self.back = node.prev();
        self.len -= 1;
        Some(node)
    }
}

impl<T> Clone for Window<T> {
    fn clone(&self) -> Self {
        Window {
            front: self.front,
            back: self.back,
            len: self.len,
        }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            window: Window::over(self),
            _phantom: PhantomData,
        }
    }
}

/// Borrowing iteration over a [`LinkedList`], from either end.
pub struct Iter<'a, T> {
    window: Window<T>,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.window.take_front().map(NodePtr::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.window.len, Some(self.window.len))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(NodePtr::value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            window: self.window.clone(),
            _phantom: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        IterMut {
            window: Window::over(self),
            _phantom: PhantomData,
        }
    }
}

/// Mutable borrowing iteration over a [`LinkedList`], from either end.
pub struct IterMut<'a, T> {
    window: Window<T>,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        // Each node leaves the window once, so no value is lent out twice.
        self.window.take_front().map(NodePtr::value_mut)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.window.len, Some(self.window.len))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.window.take_back().map(NodePtr::value_mut)
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}
