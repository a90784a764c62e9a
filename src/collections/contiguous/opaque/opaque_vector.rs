use std::fmt::{self, Debug, Formatter};
use std::iter::Copied;
use std::slice::Iter;

use super::Handle;
use crate::collections::contiguous::Vector;
use crate::util::error::{IndexOutOfBounds, InsertError};

/// A Vector of [`Handle`]s, for storing values whose type isn't known at compile time.
///
/// The OpaqueVector owns its handles but never the values behind them. Dropping it, or calling
/// [`free`](OpaqueVector::free), leaves every referent alone. To hand the referents back for
/// cleanup, use [`free_with`](OpaqueVector::free_with) instead, which calls a release function
/// once per handle.
///
/// Storage is a [`Vector<Handle>`], so growth and shrinking follow exactly the same policy as
/// [`Vector`].
///
/// # Examples
/// ```
/// # use stl_containers::collections::contiguous::{Handle, OpaqueVector};
/// let mut vec = OpaqueVector::new();
/// for i in 1..=3 {
///     vec.push_back(Handle::from_box(Box::new(i * 10)));
/// }
/// // SAFETY: Index 1 was created from a Box<i32>.
/// assert_eq!(unsafe { *vec.get(1).unwrap().as_ref::<i32>() }, 20);
///
/// let mut total = 0;
/// // SAFETY: Every handle was created from a Box<i32> and is released exactly once.
/// vec.free_with(|handle| total += *unsafe { handle.into_box::<i32>() });
/// assert_eq!(total, 60);
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct OpaqueVector {
    pub(crate) inner: Vector<Handle>,
}

impl OpaqueVector {
    pub fn new() -> OpaqueVector {
        OpaqueVector {
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

    /// Appends `handle`. As with [`Vector::push`], a handle that can't be stored because of an
    /// allocation failure is discarded and a warning is logged.
    pub fn push_back(&mut self, handle: Handle) {
        self.inner.push(handle);
    }

    pub fn get(&self, index: usize) -> Result<Handle, IndexOutOfBounds> {
        self.inner.get(index).copied()
    }

    /// Replaces the handle at `index`, returning the displaced one so that the caller can release
    /// its referent.
    pub fn set(&mut self, index: usize, handle: Handle) -> Result<Handle, IndexOutOfBounds> {
        self.inner.set(index, handle)
    }

    pub fn insert(&mut self, index: usize, handle: Handle) -> Result<(), InsertError> {
        self.inner.insert(index, handle)
    }

    /// Removes the handle at `index` and returns it. The referent is untouched.
    pub fn remove(&mut self, index: usize) -> Result<Handle, IndexOutOfBounds> {
        self.inner.remove(index)
    }

    pub fn iter(&self) -> Copied<Iter<'_, Handle>> {
        self.inner.iter().copied()
    }

    /// Releases the storage for the handles. Referents remain with the caller.
    pub fn free(self) {}

    /// Passes every handle, in index order, to `release` and then releases the storage. Each
    /// handle is passed exactly once.
    pub fn free_with<F: FnMut(Handle)>(self, release: F) {
        self.inner.into_iter().for_each(release);
    }
}

impl FromIterator<Handle> for OpaqueVector {
    fn from_iter<I: IntoIterator<Item = Handle>>(iter: I) -> Self {
        OpaqueVector {
            inner: Vector::from_iter(iter),
        }
    }
}

impl Extend<Handle> for OpaqueVector {
    fn extend<I: IntoIterator<Item = Handle>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}

impl Debug for OpaqueVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpaqueVector")
            .field("handles", &&*self.inner)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}
