use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodePtr<T>>;

pub(crate) struct Node<T> {
    pub value: T,
    pub prev: Link<T>,
    pub next: Link<T>,
}

/// A copyable pointer to a node owned by a [`LinkedList`](super::LinkedList).
///
/// Nodes are allocated through [`Box`], so that [`reclaim`](NodePtr::reclaim) can move the value
/// back off of the heap. Every other method assumes that the node is still live, which the list
/// guarantees for every pointer reachable from its head or tail.
pub(crate) struct NodePtr<T>(NonNull<Node<T>>);

impl<T> NodePtr<T> {
    /// Moves `value` onto the heap as an unlinked node.
    pub fn alloc(value: T, prev: Link<T>, next: Link<T>) -> NodePtr<T> {
        NodePtr(NonNull::from(Box::leak(Box::new(Node { value, prev, next }))))
    }

    /// Frees the node, handing back its contents. Any copy of this pointer dangles afterwards.
    pub fn reclaim(self) -> Node<T> {
        // SAFETY: The pointer came from Box::leak in alloc and is reclaimed at most once, because
        // the list unlinks a node before reclaiming it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    /// The returned lifetime is unbounded; callers tie it to a borrow of the list.
    pub const fn value<'a>(self) -> &'a T {
        // SAFETY: The node is live and only shared references exist while the list is borrowed
        // immutably.
        unsafe { &(*self.0.as_ptr()).value }
    }

    /// The returned lifetime is unbounded; callers tie it to a mutable borrow of the list and never
    /// produce two references to the same value.
    pub const fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: The node is live and the list is borrowed mutably.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub const fn prev(self) -> Link<T> {
        // SAFETY: The node is live. Links are Copy, so no reference escapes.
        unsafe { (*self.0.as_ptr()).prev }
    }

    pub const fn next(self) -> Link<T> {
        // SAFETY: As above.
        unsafe { (*self.0.as_ptr()).next }
    }

    pub fn set_prev(self, prev: Link<T>) {
        // SAFETY: The node is live and no reference to its links is held across this write.
        unsafe { (*self.0.as_ptr()).prev = prev }
    }

    pub fn set_next(self, next: Link<T>) {
        // SAFETY: As above.
        unsafe { (*self.0.as_ptr()).next = next }
    }
}

impl<T> Clone for NodePtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodePtr<T> {}

impl<T> PartialEq for NodePtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
