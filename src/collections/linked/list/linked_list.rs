use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

use super::{Iter, IterMut, Link, Node, NodePtr};
use crate::util::error::{CapacityOverflow, EmptyCollection, IndexOutOfBounds};
use crate::util::fmt::DebugIter;
use crate::util::result::ResultExtension;

/// A list with links in both directions.
///
/// The list owns every node; `head` and `tail` point at the ends and each node points at both of
/// its neighbours. Either both ends are set and `len` is non-zero, or neither is and `len` is zero.
///
/// Popping from an empty LinkedList is treated as a bug in the caller and panics, unlike the
/// contiguous collections which report an error. [`try_pop_front`](LinkedList::try_pop_front) and
/// [`try_pop_back`](LinkedList::try_pop_back) are available where emptiness is expected.
///
/// # Cost
/// With `n` elements, where `i` is the position being looked up:
///
/// | Operation | Cost |
/// |-|-|
/// | `front`, `back`, `len` | `O(1)` |
/// | `push_*`, `pop_*` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains`, `index_of`, `clear` | `O(n)` |
///
/// Linked lists spend most of any `O(i)` or `O(n)` operation waiting on cache misses, so
/// [`Vector`](crate::collections::contiguous::Vector) is usually the better choice unless the
/// `O(1)` operations at both ends are what matters.
pub struct LinkedList<T> {
    pub(crate) head: Link<T>,
    pub(crate) tail: Link<T>,
    pub(crate) len: usize,
    pub(crate) _phantom: PhantomData<Box<Node<T>>>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list. Nothing is allocated until the first push.
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            head: None,
            tail: None,
            len: 0,
            _phantom: PhantomData,
        }
    }

    /// The number of elements in the list.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The first element, or [`None`] for an empty list.
    pub fn front(&self) -> Option<&T> {
        self.head.map(NodePtr::value)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.map(NodePtr::value_mut)
    }

    /// The last element, or [`None`] for an empty list.
    pub fn back(&self) -> Option<&T> {
        self.tail.map(NodePtr::value)
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.tail.map(NodePtr::value_mut)
    }

    /// Links `value` in as the new head.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::alloc(value, None, self.head);
        match self.head {
            Some(old_head) => old_head.set_prev(Some(node)),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    /// Links `value` in as the new tail.
    ///
    /// # Panics
    /// Panics if the length would overflow a [`usize`].
    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodePtr::alloc(value, self.tail, None);
        match self.tail {
            Some(old_tail) => old_tail.set_next(Some(node)),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Removes the first element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::linked::LinkedList;
    /// let mut list: LinkedList<_> = (1..=3).collect();
    /// assert_eq!(list.pop_front(), 1);
    /// assert_eq!(list.pop_front(), 2);
    /// assert_eq!(list.pop_front(), 3);
    /// assert!(std::panic::catch_unwind(move || list.pop_front()).is_err());
    /// ```
    pub fn pop_front(&mut self) -> T {
        self.try_pop_front().ok_or(EmptyCollection).throw()
    }

    /// Removes the last element from the list and returns it.
    ///
    /// # Panics
    /// Panics if the list is empty.
    pub fn pop_back(&mut self) -> T {
        self.try_pop_back().ok_or(EmptyCollection).throw()
    }

    /// Unlinks the head and returns its value, or [`None`] for an empty list.
    pub fn try_pop_front(&mut self) -> Option<T> {
        let node = self.head?.reclaim();

        self.head = node.next;
        match self.head {
            Some(new_head) => new_head.set_prev(None),
            None => self.tail = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// Unlinks the tail and returns its value, or [`None`] for an empty list.
    pub fn try_pop_back(&mut self) -> Option<T> {
        let node = self.tail?.reclaim();

        self.tail = node.prev;
        match self.tail {
            Some(new_tail) => new_tail.set_next(None),
            None => self.head = None,
        }
        self.len -= 1;

        Some(node.value)
    }

    /// The element at `index`, also reachable through `list[index]`.
    ///
    /// # Panics
    /// Panics with [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// The element at `index`, seeking from whichever end is closer.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.checked_seek(index).map(NodePtr::value)
    }

    /// # Panics
    /// Panics with [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.checked_seek(index).map(NodePtr::value_mut)
    }

    /// Moves every element of `other` onto the back of this list by relinking the ends, without
    /// allocating.
    ///
    /// # Panics
    /// Panics if the combined length overflows a [`usize`].
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let len = self.len.checked_add(other.len).ok_or(CapacityOverflow).throw();

        let (Some(other_head), Some(other_tail)) = (other.head.take(), other.tail.take()) else {
            return;
        };
        other.len = 0;

        match self.tail {
            Some(tail) => {
                tail.set_next(Some(other_head));
                other_head.set_prev(Some(tail));
            },
            None => self.head = Some(other_head),
        }
        self.tail = Some(other_tail);
        self.len = len;
    }

    /// Frees every node front to back, leaving the list empty.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        self.tail = None;
        self.len = 0;

        while let Some(node) = link {
            link = node.reclaim().next;
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    /// Finds the node at `index` by walking from the nearer end.
    pub(crate) fn seek(&self, index: usize) -> Option<NodePtr<T>> {
        if index >= self.len {
            return None;
        }

        if index < self.len / 2 {
            let mut node = self.head?;
            for _ in 0..index {
                node = node.next()?;
            }
            Some(node)
        } else {
            let mut node = self.tail?;
            for _ in index + 1..self.len {
                node = node.prev()?;
            }
            Some(node)
        }
    }

    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        self.seek(index)
            .ok_or(IndexOutOfBounds { index, len: self.len })
            .logged("LinkedList get")
    }

    /// Walks the list in both directions, asserting that every prev link mirrors a next link.
    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        let Some(first) = self.head else {
            assert!(self.tail.is_none(), "An empty list shouldn't have a tail.");
            assert_eq!(self.len, 0, "An empty list should have length 0.");
            return;
        };

        assert!(first.prev().is_none(), "The head shouldn't have a previous node.");
        let mut count = 1;
        let mut last = first;
        while let Some(following) = last.next() {
            assert!(following.prev() == Some(last), "Each next node should link back.");
            last = following;
            count += 1;
        }
        assert!(self.tail == Some(last), "The last node reached should be the tail.");
        assert_eq!(count, self.len, "The stored length should match the node count.");
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// Returns the index of the first element equal to `item`.
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|element| element == item)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.iter().any(|element| element == item)
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

// SAFETY: The list owns every node exclusively, so sending it sends every T.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: Shared access to the list only ever produces shared references to T.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // The length prefix keeps nested lists from colliding.
        self.len.hash(state);
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedList")
            .field("contents", &DebugIter::new(self.iter()))
            .field("len", &self.len)
            .finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    /// Renders as `(a) -> (b) -> (c)`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, value) in self.iter().enumerate() {
            if index != 0 {
                write!(f, " -> ")?;
            }
            write!(f, "({value:?})")?;
        }
        Ok(())
    }
}
