use std::ops::{Deref, DerefMut};

use crate::util::alloc;
use crate::util::error::AllocError;

pub(crate) struct Branch<T>(pub Option<Box<Node<T>>>);

pub(crate) struct Node<T> {
    pub left: Branch<T>,
    pub right: Branch<T>,
    pub value: T,
}

impl<T> Node<T> {
    /// Allocates a node with no children.
    pub fn try_leaf(value: T) -> Result<Box<Node<T>>, AllocError> {
        alloc::try_box(Node {
            left: Branch(None),
            right: Branch(None),
            value,
        })
    }
}

impl<T> Branch<T> {
    /// Frees every node below this branch without recursing. Each node with a left child is
    /// rotated right until the leftmost node has none, at which point it is dropped and its right
    /// subtree takes its place.
    pub fn free(&mut self) {
        let mut curr = self.0.take();

        while let Some(mut node) = curr {
            curr = match node.left.0.take() {
                Some(mut left) => {
                    node.left.0 = left.right.0.take();
                    left.right.0 = Some(node);
                    Some(left)
                },
                None => node.right.0.take(),
            };
        }
    }
}

impl<T> Deref for Branch<T> {
    type Target = Option<Box<Node<T>>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Branch<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
