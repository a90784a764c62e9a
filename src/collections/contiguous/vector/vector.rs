use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use log::{debug, warn};

use crate::collections::contiguous::Array;
use crate::util::error::{AllocError, CapacityOverflow, IndexOutOfBounds, InsertError};
use crate::util::result::ResultExtension;

/// The capacity of a Vector after its first allocation, and the floor for shrinking.
pub const MIN_CAP: usize = 4;

pub const GROWTH_FACTOR: usize = 2;

/// A Vector shrinks once its length falls to `cap / SHRINK_DIVISOR` or below.
pub const SHRINK_DIVISOR: usize = 4;

/// A growable contiguous buffer, stored in an [`Array<T>`] of possibly uninitialized slots.
///
/// Capacity grows geometrically from [`MIN_CAP`] by [`GROWTH_FACTOR`] whenever a value is added
/// to a full Vector, and halves (never below [`MIN_CAP`]) once removals leave it no more than a
/// quarter full. Emptying the Vector entirely doesn't shrink it.
///
/// # Cost
/// With `n` elements, where `i` is the position being changed:
///
/// | Operation | Cost |
/// |-|-|
/// | `get` | `O(1)` |
/// | `set` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `contains` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, a reallocation is `O(n)`.
///
/// \** Free when the capacity is already there.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the first
    /// value is added.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub const fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates an empty Vector that can take `cap` values before it first reallocates.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the current capacity of the Vector.
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Appends `value`, growing first if the Vector is full.
    ///
    /// If the Vector is full and can't grow, the value is dropped and a warning is logged. Use
    /// [`try_push`](Vector::try_push) to observe the failure.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if let Err(err) = self.try_push(value) {
            warn!("Vector push discarded its value: {err}");
        }
    }

    /// Appends `value`, growing first if the Vector is full.
    ///
    /// # Errors
    /// Returns an [`AllocError`] if the Vector was full and couldn't grow. The value is dropped in
    /// that case and the Vector is unchanged.
    pub fn try_push(&mut self, value: T) -> Result<(), AllocError> {
        if self.len == self.cap() {
            self.try_grow()?;
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
        Ok(())
    }

    /// Appends `value` without checking for room.
    ///
    /// # Safety
    /// It is up to the caller to ensure that `len < cap`, using methods like
    /// [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap). Using this method on a
    /// Vector without enough capacity is undefined behavior.
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: The caller guarantees that len is a valid slot.
        let slot = unsafe { self.arr.get_unchecked_mut(self.len) };
        slot.write(value);
        self.len += 1;
    }

    /// Takes the last value, or [`None`] if the Vector is empty. The Vector may shrink
    /// afterwards.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: The old last slot was initialized and is now outside of len.
        let value = unsafe { self.arr[self.len].assume_init_read() };

        self.shrink_if_sparse();
        Some(value)
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the value is initialized.
        Ok(unsafe { self.arr[index].assume_init_ref() })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.check_index(index)?;
        // SAFETY: index < len, so the value is initialized.
        Ok(unsafe { self.arr[index].assume_init_mut() })
    }

    /// Replaces the element at `index` with `value`, returning the old value.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`. The Vector is left untouched and `value` is
    /// dropped.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = ['a', 'b', 'c'].into_iter().collect();
    /// assert_eq!(vec.set(1, 'z'), Ok('b'));
    /// assert!(vec.set(3, 'd').is_err());
    /// assert_eq!(&*vec, &['a', 'z', 'c']);
    /// ```
    pub fn set(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        self.check_index(index).logged("Vector set")?;

        // SAFETY: index < len and all values < len are initialized.
        Ok(unsafe {
            mem::replace(&mut self.arr[index], MaybeUninit::new(value)).assume_init()
        })
    }

    /// Inserts the provided value at the given index, growing first if the Vector is full and
    /// moving every later item one place to the right. `index == len` appends.
    ///
    /// # Errors
    /// Returns [`InsertError::IndexOutOfBounds`] if `index > len`, or [`InsertError::Alloc`] if
    /// the Vector couldn't grow. Either way the Vector is unchanged and `value` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100).unwrap();
    /// vec.insert(1, 200).unwrap();
    /// vec.insert(5, 300).unwrap();
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// assert!(vec.insert(7, 400).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), InsertError> {
        if index > self.len {
            return Err(IndexOutOfBounds { index, len: self.len }.into()).logged("Vector insert");
        }

        if self.len == self.cap() && let Err(err) = self.try_grow() {
            warn!("Vector insert discarded its value: {err}");
            return Err(err.into());
        }

        // Written past the end, then rotated down into place.
        self.arr[self.len].write(value);
        self.arr[index..=self.len].rotate_right(1);
        self.len += 1;
        Ok(())
    }

    /// Takes the value at `index` out, shifting everything after it down by one.
    /// The Vector may shrink afterwards.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "stacks".chars().collect();
    /// assert_eq!(vec.remove(5), Ok('s'));
    /// assert_eq!(vec.remove(0), Ok('s'));
    /// assert_eq!(vec.remove(9), Err(stl_containers::IndexOutOfBounds { index: 9, len: 4 }));
    /// assert_eq!(&*vec, &['t', 'a', 'c', 'k']);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        self.check_index(index).logged("Vector remove")?;

        // The removed value is rotated out to the last slot before being read.
        self.arr[index..self.len].rotate_left(1);
        self.len -= 1;
        // SAFETY: The last slot holds the initialized value that was at index, and is now outside
        // of len.
        let value = unsafe { self.arr[self.len].assume_init_read() };

        self.shrink_if_sparse();
        Ok(value)
    }

    /// Returns true if the Vector contains an element equal to `value`.
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    /// Drops every element, keeping the current capacity.
    pub fn clear(&mut self) {
        let live: *mut [T] = &mut **self;
        // Zeroed first, so a panicking drop leaks the rest instead of dropping twice.
        self.len = 0;
        // SAFETY: live covered exactly the initialized values, none of which are reachable now.
        unsafe { ptr::drop_in_place(live) }
    }

    /// Drops every element and releases the buffer, leaving the Vector with length and capacity 0.
    /// The Vector remains usable afterwards.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..10).collect();
    /// vec.free();
    /// assert_eq!((vec.len(), vec.cap()), (0, 0));
    /// vec.push(1);
    /// assert_eq!(&*vec, &[1]);
    /// ```
    pub fn free(&mut self) {
        self.clear();
        // Dropping the old buffer deallocates it, MaybeUninit values have no drop of their own.
        self.arr = Array::new_uninit(0);
    }

    /// Makes room for at least `extra` more values, reallocating to exactly `len + extra` when
    /// the current capacity falls short.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if `len + extra` can't be allocated.
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        if new_cap <= self.cap() { return; }

        self.arr.realloc(new_cap);
    }

    /// Like [`reserve`](Vector::reserve), but reports failure instead of panicking or aborting.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), AllocError> {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow)?;

        if new_cap <= self.cap() { return Ok(()); }

        self.arr.try_realloc(new_cap)
    }

    /// Decomposes the Vector into a pointer to its buffer, its length and its capacity.
    pub const fn into_parts(self) -> (NonNull<MaybeUninit<T>>, usize, usize) {
        let parts = (self.arr.ptr, self.len, self.arr.size);
        mem::forget(self);
        parts
    }

    /// Grows the internal Array to `max(MIN_CAP, cap * GROWTH_FACTOR)`. On failure the Vector is
    /// unchanged.
    pub(crate) fn try_grow(&mut self) -> Result<(), AllocError> {
        let new_cap = cmp::max(
            self.cap().checked_mul(GROWTH_FACTOR).ok_or(CapacityOverflow)?,
            MIN_CAP,
        );

        self.arr.try_realloc(new_cap)
    }

    /// Halves the capacity (never below [`MIN_CAP`]) when `0 < len <= cap / SHRINK_DIVISOR`. This
    /// is the only shrink path; every removal from a Vector, Stack or Queue ends here.
    pub(crate) fn shrink_if_sparse(&mut self) {
        let cap = self.cap();

        if self.len == 0 || self.len > cap / SHRINK_DIVISOR {
            return;
        }

        let new_cap = cmp::max(MIN_CAP, cap / 2);
        if new_cap >= cap {
            return;
        }

        // len <= cap / 4 < new_cap, so only uninitialized slots are released.
        if let Err(err) = self.arr.try_realloc(new_cap) {
            debug!("Vector shrink from {cap} to {new_cap} failed, keeping capacity: {err}");
        }
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<(), IndexOutOfBounds> {
        match index < self.len {
            true => Ok(()),
            false => Err(IndexOutOfBounds { index, len: self.len }),
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        let iter = iter.into_iter();
        // A failed reservation just means that push will try again one value at a time.
        let _ = self.try_reserve(iter.size_hint().0);

        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut collected = Vector::new();
        collected.extend(value);
        collected
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // The buffer deallocates itself afterwards.
        self.clear();
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The first len slots are initialized, and MaybeUninit<T> is layout compatible
        // with T.
        unsafe { slice::from_raw_parts(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusivity from the mutable borrow.
        unsafe { slice::from_raw_parts_mut(self.arr.ptr.as_ptr().cast(), self.len) }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

// Send and Sync follow from Array<MaybeUninit<T>>.

impl<T: Clone> Clone for Vector<T> {
    /// The clone keeps the capacity of the original, so it shrinks and grows at the same points.
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());
        vec.extend(self.iter().cloned());
        vec
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: Hash> Hash for Vector<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self[..].hash(state);
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &&**self)
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self[..], f)
    }
}
