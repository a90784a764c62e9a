use std::iter::FusedIterator;
use std::mem;

use super::{Branch, Node, OrderedSet};
use crate::collections::contiguous::Vector;

impl<T, C> IntoIterator for OrderedSet<T, C> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let root = mem::replace(&mut self.root, Branch(None));
        IntoIter::new(root, mem::take(&mut self.len))
    }
}

/// Owned, in-order iteration over an [`OrderedSet`].
pub struct IntoIter<T> {
    // Nodes whose left subtree has already been detached, deepest on top.
    pub(crate) pending: Vector<Box<Node<T>>>,
    pub(crate) len: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Branch<T>, len: usize) -> IntoIter<T> {
        let mut iter = IntoIter {
            pending: Vector::new(),
            len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut branch: Branch<T>) {
        while let Some(mut node) = branch.0.take() {
            branch = mem::replace(&mut node.left, Branch(None));
            self.pending.push(node);
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        let Node { right, value, .. } = *node;
        self.descend_left(right);
        self.len -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // Dropping the pending nodes directly would recurse through their right subtrees.
        for node in self.pending.iter_mut() {
            node.right.free();
        }
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<'a, T, C> IntoIterator for &'a OrderedSet<T, C> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowed, in-order iteration over an [`OrderedSet`].
pub struct Iter<'a, T> {
    // Nodes that still need to be yielded, along with their right subtree. Deepest on top.
    pub(crate) pending: Vector<&'a Node<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, len: usize) -> Iter<'a, T> {
        let mut iter = Iter {
            pending: Vector::new(),
            len,
        };
        iter.descend_left(root);
        iter
    }

    fn descend_left(&mut self, mut branch: &'a Branch<T>) {
        while let Some(node) = branch.as_deref() {
            self.pending.push(node);
            branch = &node.left;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pending.pop()?;
        self.descend_left(&node.right);
        self.len -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            pending: self.pending.clone(),
            len: self.len,
        }
    }
}
