use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};

use super::{Branch, Iter, Node};
use crate::collections::binary_tree::order::{Comparator, FnOrder, NaturalOrder};
use crate::collections::contiguous::Vector;
use crate::collections::traits::set::Set;
use crate::util::error::{AllocError, CapacityOverflow};
use crate::util::result::ResultExtension;

/// A set of unique values, stored in an unbalanced binary search tree ordered by a
/// [`Comparator`].
///
/// Values that compare [`Less`](Ordering::Less) than a node are stored to its left, and every
/// other value to its right. Nothing rebalances the tree, so inserting values in sorted order
/// produces a tree shaped like a list. Insertion, membership and teardown all walk the tree
/// iteratively, so even that shape can't exhaust the stack.
///
/// The set algebra methods ([`union`](OrderedSet::union),
/// [`intersection`](OrderedSet::intersection), [`difference`](OrderedSet::difference)) build
/// entirely new sets from the in-order sequences of their operands. Borrowing equivalents that
/// don't allocate are provided by the [`Set`] trait.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the OrderedSet.
/// - `h`: The height of the tree, `log2 n` on average and `n` at worst.
/// - `m`: The number of items in the other set.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `len` | `O(1)` |
/// | `flatten` | `O(n)` |
/// | `union` | `O((n+m) h)` |
/// | `intersection` | `O(n (h+h'))` |
/// | `power_set` | `O(2^n n h)` |
/// | `cartesian_product` | `O(n m)` |
/// | `clear` | `O(n)` |
pub struct OrderedSet<T, C = NaturalOrder> {
    pub(crate) root: Branch<T>,
    pub(crate) len: usize,
    pub(crate) order: C,
}

impl<T: Ord> OrderedSet<T> {
    /// Creates an empty set ordered by `T`'s [`Ord`] implementation.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::binary_tree::OrderedSet;
    /// let mut set = OrderedSet::new();
    /// assert!(set.add(3));
    /// assert!(set.add(1));
    /// assert!(!set.add(3));
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.to_string(), "{ 1 3 }");
    /// ```
    pub const fn new() -> OrderedSet<T> {
        OrderedSet::with_comparator(NaturalOrder)
    }
}

impl<T, F, E> OrderedSet<T, FnOrder<F, E>>
where
    F: Fn(&T, &T) -> Ordering,
    E: Fn(&T, &T) -> bool,
{
    /// Creates an empty set ordered by `compare`, with membership decided by `equal`.
    /// `equal(a, b)` must imply that `compare(a, b)` returns [`Ordering::Equal`].
    pub const fn with_functions(compare: F, equal: E) -> OrderedSet<T, FnOrder<F, E>> {
        OrderedSet::with_comparator(FnOrder::new(compare, equal))
    }
}

impl<T, C> OrderedSet<T, C> {
    /// Creates an empty set ordered by the provided [`Comparator`].
    pub const fn with_comparator(order: C) -> OrderedSet<T, C> {
        OrderedSet {
            root: Branch(None),
            len: 0,
            order,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the comparator used to order this set.
    pub const fn comparator(&self) -> &C {
        &self.order
    }

    /// Drops every value, leaving the set empty.
    pub fn clear(&mut self) {
        self.root.free();
        self.len = 0;
    }

    /// Returns an iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root, self.len)
    }

    /// Collects references to every value in ascending order.
    pub fn flatten(&self) -> Vector<&T> {
        let mut flat = Vector::with_cap(self.len);
        flat.extend(self.iter());
        flat
    }

    /// Pairs every value of this set with every value of `other`, both in ascending order, with
    /// this set's values varying slowest.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::binary_tree::OrderedSet;
    /// let numbers: OrderedSet<_> = [1, 2].into_iter().collect();
    /// let letters: OrderedSet<_> = ['a', 'b'].into_iter().collect();
    /// assert_eq!(
    ///     numbers.cartesian_product(&letters).as_ref(),
    ///     &[(&1, &'a'), (&1, &'b'), (&2, &'a'), (&2, &'b')],
    /// );
    /// ```
    pub fn cartesian_product<'a, 'b, U, D>(
        &'a self,
        other: &'b OrderedSet<U, D>,
    ) -> Vector<(&'a T, &'b U)> {
        let mut pairs = Vector::with_cap(self.len.saturating_mul(other.len));
        for a in self.iter() {
            pairs.extend(other.iter().map(|b| (a, b)));
        }
        pairs
    }
}

impl<T, C: Comparator<T>> OrderedSet<T, C> {
    /// Adds `value` to the set, returning true if it wasn't already present.
    ///
    /// # Panics
    /// Panics if the new node can't be allocated.
    pub fn add(&mut self, value: T) -> bool {
        self.try_add(value).throw()
    }

    /// Adds `value` to the set, returning `Ok(true)` if it wasn't already present.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the new node can't be allocated, in which case the set is
    /// unchanged and `value` is dropped.
    pub fn try_add(&mut self, value: T) -> Result<bool, AllocError> {
        if self.contains(&value) {
            return Ok(false);
        }

        let order = &self.order;
        let mut place = &mut self.root.0;

        while let Some(node) = place {
            place = match order.compare(&value, &node.value) {
                Ordering::Less => &mut node.left.0,
                _ => &mut node.right.0,
            };
        }

        *place = Some(Node::try_leaf(value)?);
        self.len += 1;
        Ok(true)
    }

    /// Returns true if a value equal to `value` is in the set.
    pub fn contains(&self, value: &T) -> bool {
        let mut branch = &self.root.0;

        while let Some(node) = branch {
            if self.order.equal(value, &node.value) {
                return true;
            }

            branch = match self.order.compare(value, &node.value) {
                Ordering::Less => &node.left.0,
                _ => &node.right.0,
            };
        }

        false
    }

    /// Returns true if every value of this set is also in `other`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Self) -> bool {
        Set::is_subset(self, other)
    }

    /// Returns true if both sets have the same length and this one is a subset of `other`.
    pub fn is_equal(&self, other: &Self) -> bool {
        Set::is_equal(self, other)
    }
}

impl<T: Clone, C: Comparator<T> + Clone> OrderedSet<T, C> {
    /// Creates a new set containing every value in either set. (`self ∪ other`)
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::binary_tree::OrderedSet;
    /// let a: OrderedSet<_> = [1, 2, 3].into_iter().collect();
    /// let b: OrderedSet<_> = [3, 4].into_iter().collect();
    /// assert_eq!(a.union(&b).to_string(), "{ 1 2 3 4 }");
    /// assert_eq!(a.intersection(&b).to_string(), "{ 3 }");
    /// assert_eq!(a.difference(&b).to_string(), "{ 1 2 }");
    /// ```
    pub fn union(&self, other: &Self) -> Self {
        self.collect_from(self.iter().chain(other.iter()))
    }

    /// Creates a new set containing the values of this set that are also in `other`.
    /// (`self ∩ other`)
    pub fn intersection(&self, other: &Self) -> Self {
        self.collect_from(self.iter().filter(|value| other.contains(value)))
    }

    /// Creates a new set containing the values of this set that aren't in `other`.
    /// (`self \ other`)
    pub fn difference(&self, other: &Self) -> Self {
        self.collect_from(self.iter().filter(|value| !other.contains(value)))
    }

    /// Creates every subset of this set. Subset `i` holds the values whose positions in ascending
    /// order are set bits of `i`, so the empty set comes first and the full set last.
    ///
    /// # Panics
    /// Panics if `2^len` doesn't fit in a [`usize`] or the subsets can't be allocated.
    pub fn power_set(&self) -> Vector<Self> {
        self.try_power_set().throw()
    }

    /// Creates every subset of this set, as [`power_set`](OrderedSet::power_set) does.
    ///
    /// # Errors
    /// Returns [`AllocError::CapacityOverflow`] if `2^len` doesn't fit in a [`usize`], or another
    /// [`AllocError`] if the subsets can't be allocated.
    pub fn try_power_set(&self) -> Result<Vector<Self>, AllocError> {
        let count = u32::try_from(self.len)
            .ok()
            .and_then(|len| 1_usize.checked_shl(len))
            .ok_or(CapacityOverflow)?;

        let flat = self.flatten();
        let mut subsets = Vector::new();
        subsets.try_reserve(count)?;

        for mask in 0..count {
            let mut subset = OrderedSet::with_comparator(self.order.clone());
            for (index, value) in flat.iter().enumerate() {
                if mask & (1 << index) != 0 {
                    subset.try_add((*value).clone())?;
                }
            }
            subsets.try_push(subset)?;
        }

        Ok(subsets)
    }

    fn collect_from<'a, I>(&self, values: I) -> Self
    where
        I: Iterator<Item = &'a T>,
        T: 'a,
    {
        let mut set = OrderedSet::with_comparator(self.order.clone());
        for value in values {
            set.add(value.clone());
        }
        set
    }
}

impl<T, C: Comparator<T>> Set<T> for OrderedSet<T, C> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool {
        OrderedSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        OrderedSet::iter(self)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T, C: Comparator<T> + Default> Default for OrderedSet<T, C> {
    fn default() -> Self {
        OrderedSet::with_comparator(C::default())
    }
}

impl<T, C> Drop for OrderedSet<T, C> {
    fn drop(&mut self) {
        self.root.free();
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for OrderedSet<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = OrderedSet::default();
        set.extend(iter);
        set
    }
}

impl<T, C: Comparator<T>> Extend<T> for OrderedSet<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Clone, C: Comparator<T> + Clone> Clone for OrderedSet<T, C> {
    /// Reproduces the exact shape of the tree by adding values in pre-order.
    fn clone(&self) -> Self {
        let mut set = OrderedSet::with_comparator(self.order.clone());
        let mut pending: Vector<&Node<T>> = Vector::new();
        pending.extend(self.root.as_deref());

        while let Some(node) = pending.pop() {
            set.add(node.value.clone());
            pending.extend(node.right.as_deref());
            pending.extend(node.left.as_deref());
        }

        set
    }
}

impl<T, C: Comparator<T>> PartialEq for OrderedSet<T, C> {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal(other)
    }
}

impl<T, C: Comparator<T>> Eq for OrderedSet<T, C> {}

impl<T: Debug, C> Debug for OrderedSet<T, C> {
    /// Draws the tree sideways, one node per line in ascending order, so left children sit above
    /// their parent and right children below. Each line carries the node's depth and a `┌` or `└`
    /// for a left or right child.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "OrderedSet (len {})", self.len)?;

        // Walked with an explicit stack, like Iter, because the tree may be as tall as it is long.
        let mut pending: Vector<(&Node<T>, usize, &str)> = Vector::new();
        let mut next = (self.root.as_deref(), 0, "");
        loop {
            while let (Some(node), depth, side) = next {
                pending.push((node, depth, side));
                next = (node.left.as_deref(), depth + 1, "┌ ");
            }

            let Some((node, depth, side)) = pending.pop() else {
                return Ok(());
            };
            write!(f, "\n[{depth}] {side}({:?})", node.value)?;
            next = (node.right.as_deref(), depth + 1, "└ ");
        }
    }
}

impl<T: Debug, C> Display for OrderedSet<T, C> {
    /// Renders the values in ascending order, as `{ 1 2 3 }`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ")?;
        for value in self.iter() {
            write!(f, "{value:?} ")?;
        }
        write!(f, "}}")
    }
}
