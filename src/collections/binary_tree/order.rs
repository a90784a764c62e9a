//! Orderings for [`OrderedSet`](super::OrderedSet).
//!
//! A [`Comparator`] bundles a three-way comparison with an equality predicate. The two must agree
//! in one direction: whenever `equal(a, b)` holds, `compare(a, b)` must return
//! [`Ordering::Equal`]. Breaking this doesn't cause undefined behavior, but membership results
//! become meaningless.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Formatter};

pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Defaults to `compare(a, b) == Ordering::Equal`.
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

/// The ordering given by [`Ord`], with equality given by [`Eq`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// An ordering made of a caller supplied comparison function and equality predicate. Used for
/// element types without an [`Ord`] implementation, or to order them differently.
///
/// # Examples
/// ```
/// # use stl_containers::collections::binary_tree::{FnOrder, OrderedSet};
/// let mut set = OrderedSet::with_comparator(FnOrder::new(
///     |a: &f64, b: &f64| a.total_cmp(b),
///     |a: &f64, b: &f64| a == b,
/// ));
/// set.add(2.5);
/// set.add(-1.0);
/// assert!(set.contains(&2.5));
/// assert_eq!(set.flatten().as_ref(), &[&-1.0, &2.5]);
/// ```
#[derive(Clone, Copy)]
pub struct FnOrder<F, E> {
    compare: F,
    equal: E,
}

impl<F, E> FnOrder<F, E> {
    pub const fn new(compare: F, equal: E) -> FnOrder<F, E> {
        FnOrder {
            compare,
            equal,
        }
    }
}

impl<T, F, E> Comparator<T> for FnOrder<F, E>
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
    E: Fn(&T, &T) -> bool,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.compare)(a, b)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        (self.equal)(a, b)
    }
}

impl<F, E> Debug for FnOrder<F, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnOrder").finish_non_exhaustive()
    }
}
