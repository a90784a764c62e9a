use std::fmt::{self, Debug, Formatter};

/// An owning reference to the first node of a chain, or the rest of one.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single entry in a bucket's chain. Each node owns the next one.
pub(crate) struct Node<K, V> {
    pub key: K,
    pub value: V,
    pub next: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub const fn new(key: K, value: V) -> Node<K, V> {
        Node {
            key,
            value,
            next: None,
        }
    }
}

/// Drops every node of the chain starting at `link` without recursing, so a single bucket holding
/// a long chain of collisions can't exhaust the stack.
pub(crate) fn free_chain<K, V>(mut link: Link<K, V>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<K: Debug, V: Debug> Debug for Node<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}: {:?})", self.key, self.value)
    }
}
