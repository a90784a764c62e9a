use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;

use crate::collections::contiguous::Vector;
use crate::util::error::{EmptyCollection, Underflow};
use crate::util::result::ResultExtension;

/// A first-in, first-out collection. Values are enqueued at the end of an owned [`Vector`] and
/// dequeued from its start, moving every remaining value down by one. Dequeuing is therefore
/// linear, which keeps the storage a single contiguous run in insertion order.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `enqueue` | `O(1)`*, `O(n)` |
/// | `dequeue` | `O(n)` |
/// | `front` | `O(1)` |
/// | `rear` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* Amortized, a reallocation is `O(n)`.
pub struct Queue<T> {
    pub(crate) inner: Vector<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue. Nothing is allocated until the first value is enqueued.
    pub fn new() -> Queue<T> {
        Queue {
            inner: Vector::new(),
        }
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `value` to the rear of the Queue. As with [`Vector::push`], a value that can't be
    /// stored because of an allocation failure is dropped and a warning is logged.
    pub fn enqueue(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Removes the value at the front of the Queue and returns it.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the Queue is empty.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Queue;
    /// let mut queue: Queue<_> = (0..10).collect();
    /// assert_eq!(queue.front(), Ok(&0));
    /// assert_eq!(queue.rear(), Ok(&9));
    /// assert_eq!(queue.dequeue(), Ok(0));
    /// assert_eq!(queue.front(), Ok(&1));
    /// ```
    pub fn dequeue(&mut self) -> Result<T, Underflow> {
        if self.inner.is_empty() {
            return Err(Underflow).logged("Queue dequeue");
        }

        self.inner.remove(0).map_err(|_| Underflow)
    }

    /// Returns a reference to the oldest value in the Queue.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn front(&self) -> Result<&T, EmptyCollection> {
        self.inner.first().ok_or(EmptyCollection).logged("Queue front")
    }

    /// Returns a reference to the newest value in the Queue.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Queue is empty.
    pub fn rear(&self) -> Result<&T, EmptyCollection> {
        self.inner.last().ok_or(EmptyCollection).logged("Queue rear")
    }

    /// Drops every value and releases the underlying buffer. The Queue remains usable.
    pub fn free(&mut self) {
        self.inner.free();
    }

    /// Iterates over the Queue from the front to the rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: Vector::from_iter(iter),
        }
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Queue<T> {
    type Item = T;

    type IntoIter = crate::collections::contiguous::IntoIter<T>;

    /// Yields the values from the front to the rear.
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Self {
        Queue {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Queue<T> {}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &&*self.inner)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
