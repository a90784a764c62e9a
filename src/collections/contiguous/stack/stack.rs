use std::fmt::{self, Debug, Display, Formatter};
use std::slice::Iter;

use crate::collections::contiguous::Vector;
use crate::util::error::{EmptyCollection, Underflow};
use crate::util::result::ResultExtension;

/// A last-in, first-out collection. Values are pushed onto and popped off of the end of an owned
/// [`Vector`], so it shares the Vector's growth and shrink policy.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `peek` | `O(1)` |
/// | `len` | `O(1)` |
///
/// \* Amortized, a reallocation is `O(n)`.
pub struct Stack<T> {
    pub(crate) inner: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack. Nothing is allocated until the first push.
    pub fn new() -> Stack<T> {
        Stack {
            inner: Vector::new(),
        }
    }

    /// Returns the number of values on the Stack.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Stack contains no values.
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the capacity of the underlying [`Vector`].
    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Pushes `value` onto the top of the Stack. As with [`Vector::push`], a value that can't be
    /// stored because of an allocation failure is dropped and a warning is logged.
    pub fn push(&mut self, value: T) {
        self.inner.push(value);
    }

    /// Removes the value on top of the Stack and returns it.
    ///
    /// # Errors
    /// Returns [`Underflow`] if the Stack is empty.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Stack;
    /// # use stl_containers::Underflow;
    /// let mut stack = Stack::new();
    /// stack.push(105);
    /// stack.push(32);
    /// let sum = stack.pop().unwrap() + stack.pop().unwrap();
    /// stack.push(sum);
    /// assert_eq!(stack.peek(), Ok(&137));
    /// assert_eq!(stack.pop(), Ok(137));
    /// assert_eq!(stack.pop(), Err(Underflow));
    /// ```
    pub fn pop(&mut self) -> Result<T, Underflow> {
        self.inner.pop().ok_or(Underflow).logged("Stack pop")
    }

    /// Returns a reference to the value on top of the Stack without removing it.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn peek(&self) -> Result<&T, EmptyCollection> {
        self.inner.last().ok_or(EmptyCollection).logged("Stack peek")
    }

    /// Another name for [`peek`](Stack::peek).
    pub fn top(&self) -> Result<&T, EmptyCollection> {
        self.peek()
    }

    /// Returns a mutable reference to the value on top of the Stack.
    ///
    /// # Errors
    /// Returns [`EmptyCollection`] if the Stack is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyCollection> {
        self.inner.last_mut().ok_or(EmptyCollection).logged("Stack peek")
    }

    /// Drops every value and releases the underlying buffer. The Stack remains usable.
    pub fn free(&mut self) {
        self.inner.free();
    }

    /// Iterates over the Stack from the bottom to the top.
    pub fn iter(&self) -> Iter<'_, T> {
        self.inner.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vector<T>> for Stack<T> {
    /// The last value of the Vector becomes the top of the Stack.
    fn from(value: Vector<T>) -> Self {
        Stack {
            inner: value,
        }
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack::from(Vector::from_iter(iter))
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl<T> IntoIterator for Stack<T> {
    type Item = T;

    type IntoIter = crate::collections::contiguous::IntoIter<T>;

    /// Yields the values from the bottom to the top, the same order as [`iter`](Stack::iter).
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            inner: self.inner.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<T: Eq> Eq for Stack<T> {}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &&*self.inner)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    /// Lists the values from the bottom to the top.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}
