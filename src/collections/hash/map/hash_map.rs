use std::borrow::Borrow;
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use log::trace;

use super::node::{self, Link, Node};
use super::{Iter, IterMut, Keys, Values, ValuesMut};
use crate::collections::contiguous::Array;
use crate::collections::hash::{DefaultHashing, FnHashing, HashStrategy};
use crate::util::alloc;
use crate::util::error::{AllocError, CapacityOverflow};
use crate::util::result::ResultExtension;

/// The number of buckets allocated by [`HashMap::new`].
pub const INITIAL_CAP: usize = 16;

pub const GROWTH_FACTOR: usize = 2;

/// The map grows before adding a new key once `len / cap >= LOAD_FACTOR_NUMERATOR /
/// LOAD_FACTOR_DENOMINATOR`.
pub const LOAD_FACTOR_NUMERATOR: usize = 3;
pub const LOAD_FACTOR_DENOMINATOR: usize = 4;

/// A map of keys to values using separate chaining: every bucket holds a singly linked chain of
/// the entries whose hash lands in it.
///
/// Hashing and key equality come from the strategy `S`. The default, [`DefaultHashing`], uses
/// the [`HashKey`](crate::collections::hash::HashKey) implementation of the key, while
/// [`HashMap::with_functions`] accepts any pair of functions that agree with each other.
///
/// Before a new key is inserted into a map that has reached the 3/4 load factor, the bucket
/// array doubles and every entry is moved to its new bucket. Rehashing pushes each entry onto the
/// head of its new chain, so entries sharing a bucket can come out in a different order
/// afterwards. Updating an existing key never resizes and removal never shrinks.
///
/// It is a logic error for a key to be modified in a way that changes its hash while it is in the
/// map. Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of entries in the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `put` | `O(1)`*, `O(n)` |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `clear` | `O(n)` |
///
/// \* Average case with a hash that spreads keys evenly. Every key in the same bucket has to be
/// compared, so many collisions degrade these towards `O(n)`. `put` is also `O(n)` whenever it
/// resizes.
pub struct HashMap<K, V, S = DefaultHashing> {
    pub(crate) buckets: Array<Link<K, V>>,
    pub(crate) len: usize,
    pub(crate) strategy: S,
}

impl<K, V> HashMap<K, V> {
    /// Creates an empty HashMap with [`INITIAL_CAP`] buckets, using [`DefaultHashing`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::hash::HashMap;
    /// let mut ages = HashMap::new();
    /// ages.put("alice", 32);
    /// assert_eq!(ages.get("alice"), Some(&32));
    /// assert_eq!(ages.cap(), 16);
    /// ```
    pub fn new() -> HashMap<K, V> {
        HashMap::with_strategy(DefaultHashing)
    }

    /// Creates an empty HashMap with `cap` buckets, using [`DefaultHashing`]. A map always has at
    /// least one bucket, so a `cap` of zero is treated as one.
    pub fn with_cap(cap: usize) -> HashMap<K, V> {
        HashMap::with_cap_and_strategy(cap, DefaultHashing)
    }
}

impl<K, V, H, E> HashMap<K, V, FnHashing<H, E>>
where
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
{
    /// Creates an empty HashMap which hashes keys with `hash` and compares them with `equal`.
    ///
    /// The functions must be consistent: `equal(a, b)` implies `hash(a) == hash(b)`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::hash::HashMap;
    /// let mut map = HashMap::with_functions(
    ///     |key: &String| key.to_lowercase().len() as u64,
    ///     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
    /// );
    /// map.put(String::from("Key"), 1);
    /// assert_eq!(map.put(String::from("KEY"), 2), Some(1));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn with_functions(hash: H, equal: E) -> HashMap<K, V, FnHashing<H, E>> {
        HashMap::with_strategy(FnHashing::new(hash, equal))
    }
}

impl<K, V, S> HashMap<K, V, S> {
    /// Creates an empty HashMap with [`INITIAL_CAP`] buckets and the provided `strategy`.
    pub fn with_strategy(strategy: S) -> HashMap<K, V, S> {
        HashMap::with_cap_and_strategy(INITIAL_CAP, strategy)
    }

    /// Creates an empty HashMap with `cap` buckets (at least one) and the provided `strategy`.
    ///
    /// # Panics
    /// Panics if the bucket array can't be allocated.
    pub fn with_cap_and_strategy(cap: usize, strategy: S) -> HashMap<K, V, S> {
        HashMap {
            buckets: Array::repeat_default(cmp::max(cap, 1)),
            len: 0,
            strategy,
        }
    }

    /// Returns the number of entries in the HashMap.
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the HashMap contains no entries.
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the hashing strategy used by this HashMap.
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Removes every entry from the HashMap, keeping its capacity.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            node::free_chain(bucket.take());
        }
        self.len = 0;
    }

    /// Returns an iterator over the entries of the HashMap, bucket by bucket.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            chain: None,
            len: self.len,
        }
    }

    /// Returns an iterator over the entries of the HashMap with mutable access to the values.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            chain: None,
            len: self.len,
        }
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Returns the index of the bucket that `key` belongs in: its hash modulo the capacity.
    pub fn bucket_index<Q>(&self, key: &Q) -> usize
    where
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        // The result is less than cap, which is itself a usize.
        (self.strategy.hash(key) % self.cap() as u64) as usize
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q is a borrowed form of K. The strategy must hash and compare both the same way.
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        self.find(key).map(|node| (&node.key, &node.value))
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no value for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        self.find(key).map(|node| &node.value)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no value for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        self.find_mut(key).map(|node| &mut node.value)
    }

    /// Returns true if the HashMap contains an entry for `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        self.find(key).is_some()
    }

    /// Removes the entry for `key` from its chain, returning the key and value if it existed.
    /// The capacity is never reduced.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        let index = self.bucket_index(key);
        let strategy = &self.strategy;

        // Walk the links rather than the nodes, so that the link to the matching node (either the
        // bucket head or the previous node's next) can be rewritten in place.
        let mut link = &mut self.buckets[index];
        while link.as_ref().is_some_and(|node| !strategy.equal(node.key.borrow(), key)) {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;

        Some((removed.key, removed.value))
    }

    /// Removes the entry for `key`, returning its value if it existed.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::hash::HashMap;
    /// let mut map: HashMap<u32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
    /// assert_eq!(map.remove(&1), Some('a'));
    /// assert_eq!(map.remove(&1), None);
    /// assert!(!map.contains(&1));
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    pub(crate) fn find<Q>(&self, key: &Q) -> Option<&Node<K, V>>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        let mut link = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(node) = link {
            if self.strategy.equal(node.key.borrow(), key) {
                return Some(node);
            }
            link = node.next.as_deref();
        }
        None
    }

    pub(crate) fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Node<K, V>>
    where
        K: Borrow<Q>,
        S: HashStrategy<Q>,
        Q: ?Sized,
    {
        let index = self.bucket_index(key);
        let strategy = &self.strategy;

        let mut link = self.buckets[index].as_deref_mut();
        while let Some(node) = link {
            if strategy.equal(node.key.borrow(), key) {
                return Some(node);
            }
            link = node.next.as_deref_mut();
        }
        None
    }

    /// Returns true if adding one more key should first grow the bucket array.
    pub(crate) const fn is_loaded(&self) -> bool {
        self.len.saturating_mul(LOAD_FACTOR_DENOMINATOR)
            >= self.cap().saturating_mul(LOAD_FACTOR_NUMERATOR)
    }
}

impl<K, V, S: HashStrategy<K>> HashMap<K, V, S> {
    /// Associates `value` with `key`, returning the previous value if the key was already
    /// present. An existing key keeps its original instance and only the value is replaced.
    ///
    /// # Panics
    /// Panics if the HashMap needs to grow or allocate a node and the memory can't be obtained.
    /// See [`try_put`](HashMap::try_put) to handle this instead.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// assert_eq!(map.put(7_i32, "seven"), None);
    /// assert_eq!(map.put(7_i32, "SEVEN"), Some("seven"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        self.try_put(key, value).throw()
    }

    /// Associates `value` with `key`, returning the previous value if the key was already
    /// present.
    ///
    /// If a new key can't be inserted because memory can't be allocated, the error is returned and
    /// the map is left unchanged. The key and value are dropped in that case.
    pub fn try_put(&mut self, key: K, value: V) -> Result<Option<V>, AllocError> {
        if let Some(existing) = self.get_mut(&key) {
            return Ok(Some(mem::replace(existing, value)));
        }

        // The node comes first, so a failure on either allocation leaves the capacity alone too.
        let mut node = alloc::try_box(Node::new(key, value))?;
        if self.is_loaded() {
            self.try_grow()?;
        }

        let index = self.bucket_index(&node.key);
        let bucket = &mut self.buckets[index];
        node.next = bucket.take();
        *bucket = Some(node);
        self.len += 1;

        Ok(None)
    }

    /// Doubles the bucket array and moves every node into its new bucket. The new array is
    /// allocated before anything moves, so failure leaves the map untouched.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocError> {
        let new_cap = self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?;
        let mut old = mem::replace(&mut self.buckets, Array::try_repeat_with(new_cap, || None)?);

        trace!("HashMap grew from {} to {} buckets with {} entries", old.size(), new_cap, self.len);

        for bucket in old.iter_mut() {
            let mut link = bucket.take();
            while let Some(mut node) = link {
                link = node.next.take();

                let index = self.bucket_index(&node.key);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }

        Ok(())
    }
}

impl<K, V, S: Default> Default for HashMap<K, V, S> {
    fn default() -> Self {
        HashMap::with_strategy(S::default())
    }
}

impl<K, V, S> Drop for HashMap<K, V, S> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K: Clone, V: Clone, S: Clone> Clone for HashMap<K, V, S> {
    /// Clones every chain node for node, so the clone has the same capacity and iteration order.
    fn clone(&self) -> Self {
        let mut buckets: Array<Link<K, V>> = Array::repeat_default(self.cap());

        for (source, target) in self.buckets.iter().zip(buckets.iter_mut()) {
            let mut tail = target;
            let mut link = source.as_deref();
            while let Some(node) = link {
                let copy = tail.insert(Box::new(Node::new(node.key.clone(), node.value.clone())));
                tail = &mut copy.next;
                link = node.next.as_deref();
            }
        }

        HashMap {
            buckets,
            len: self.len,
            strategy: self.strategy.clone(),
        }
    }
}

impl<K, V: PartialEq, S: HashStrategy<K>> PartialEq for HashMap<K, V, S> {
    /// Two maps are equal if they hold the same keys, each mapped to an equal value. Capacity and
    /// iteration order are ignored.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len
            && self.iter().all(|(key, value)| other.get(key).is_some_and(|v| v == value))
    }
}

impl<K, V: Eq, S: HashStrategy<K>> Eq for HashMap<K, V, S> {}

impl<K, V, S: HashStrategy<K>> FromIterator<(K, V)> for HashMap<K, V, S>
where
    S: Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = HashMap::default();
        map.extend(iter);
        map
    }
}

impl<K, V, S: HashStrategy<K>> Extend<(K, V)> for HashMap<K, V, S> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K: Debug, V: Debug, S> Debug for HashMap<K, V, S> {
    /// Prints every non-empty bucket with its chain, head first.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HashMap (len {}, cap {})", self.len, self.cap())?;

        for (index, bucket) in self.buckets.iter().enumerate() {
            let mut link = bucket.as_deref();
            if link.is_none() {
                continue;
            }

            write!(f, "\n[{index}]")?;
            while let Some(node) = link {
                write!(f, " -> {node:?}")?;
                link = node.next.as_deref();
            }
        }

        Ok(())
    }
}

impl<K: Debug, V: Debug, S> Display for HashMap<K, V, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{key:?}: {value:?}")?;
        }
        write!(f, "}}")
    }
}
