//! The [`Set`] trait, and the lazy iterators that it provides for set algebra.

use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

/// A collection of unique values with a membership test. Everything else in this trait is built
/// from [`contains`](Set::contains) and [`iter`](Set::iter), so the provided methods work for any
/// set, whatever its storage.
///
/// The `*_iter` methods are lazy and borrow both operands. Set types may also provide eager
/// versions that build a new set.
pub trait Set<T>: Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    fn contains(&self, item: &T) -> bool;

    /// Returns an iterator over all elements in the set, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Yields the items of `self` that aren't in `other`. (`self \ other`)
    fn difference_iter<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Membership::new(self.iter(), other)
    }

    /// Yields the items of `self` that are also in `other`. (`self ∩ other`)
    fn intersection_iter<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Membership::new(self.iter(), other)
    }

    /// Yields every item of `self`, then the items of `other` not already yielded.
    /// (`self ∪ other`)
    fn union_iter<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        self.iter().chain(other.difference_iter(self))
    }

    /// Yields the items in exactly one of the two sets. (`self △ other`)
    fn symmetric_difference_iter<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T> {
        self.difference_iter(other).chain(other.difference_iter(self))
    }

    /// Consumes both sets, yielding the items of `self` that aren't in `other`.
    fn into_difference(self, other: Self) -> IntoDifference<Self, T>
    where
        Self: IntoIterator<Item = T>,
    {
        IntoMembership::new(self.into_iter(), other)
    }

    /// Consumes both sets, yielding the items of `self` that are also in `other`.
    fn into_intersection(self, other: Self) -> IntoIntersection<Self, T>
    where
        Self: IntoIterator<Item = T>,
    {
        IntoMembership::new(self.into_iter(), other)
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if both sets hold the same elements.
    fn is_equal(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

pub type Difference<'a, S, T> = Membership<'a, S, T, false>;
pub type Intersection<'a, S, T> = Membership<'a, S, T, true>;
pub type Union<'a, S, T> = Chain<<S as Set<T>>::Iter<'a>, Difference<'a, S, T>>;
pub type SymmetricDifference<'a, S, T> = Chain<Difference<'a, S, T>, Difference<'a, S, T>>;

pub type IntoDifference<S, T> = IntoMembership<S, T, false>;
pub type IntoIntersection<S, T> = IntoMembership<S, T, true>;

/// Borrowed items of one set, kept when their membership in `other` is `INSIDE`.
pub struct Membership<'a, S: Set<T>, T: 'a, const INSIDE: bool> {
    inner: S::Iter<'a>,
    other: &'a S,
}

impl<'a, S: Set<T>, T: 'a, const INSIDE: bool> Membership<'a, S, T, INSIDE> {
    fn new(inner: S::Iter<'a>, other: &'a S) -> Self {
        Membership { inner, other }
    }
}

impl<'a, S: Set<T>, T: 'a, const INSIDE: bool> Iterator for Membership<'a, S, T, INSIDE> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = self.other;
        self.inner.find(|item| other.contains(item) == INSIDE)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a, const INSIDE: bool> FusedIterator for Membership<'a, S, T, INSIDE>
where
    S::Iter<'a>: FusedIterator,
{}

/// Owned items of one set, kept when their membership in `other` is `INSIDE`.
pub struct IntoMembership<S: Set<T> + IntoIterator<Item = T>, T, const INSIDE: bool> {
    inner: S::IntoIter,
    other: S,
    _phantom: PhantomData<T>,
}

impl<S: Set<T> + IntoIterator<Item = T>, T, const INSIDE: bool> IntoMembership<S, T, INSIDE> {
    fn new(inner: S::IntoIter, other: S) -> Self {
        IntoMembership {
            inner,
            other,
            _phantom: PhantomData,
        }
    }
}

impl<S: Set<T> + IntoIterator<Item = T>, T, const INSIDE: bool> Iterator
    for IntoMembership<S, T, INSIDE>
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let other = &self.other;
        self.inner.find(|item| other.contains(item) == INSIDE)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}
