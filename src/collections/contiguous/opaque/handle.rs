use std::fmt::{self, Debug, Formatter};
use std::ptr::NonNull;

/// An untyped, non-null pointer stored by an [`OpaqueVector`](super::OpaqueVector).
///
/// A Handle doesn't own its referent. Whoever created it stays responsible for the pointed-to
/// value, and for remembering its type: every typed access is `unsafe` for that reason.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(NonNull<()>);

impl Handle {
    /// Leaks `value` onto the heap and returns a Handle to it. The value can be reclaimed with
    /// [`Handle::into_box`].
    pub fn from_box<T>(value: Box<T>) -> Handle {
        Handle(NonNull::from(Box::leak(value)).cast())
    }

    /// Creates a Handle to a borrowed value. The Handle carries no lifetime, so the caller must
    /// not use it once the borrow has ended.
    pub fn from_ref<T>(value: &T) -> Handle {
        Handle(NonNull::from(value).cast())
    }

    pub const fn from_non_null<T>(ptr: NonNull<T>) -> Handle {
        Handle(ptr.cast())
    }

    /// Returns the raw pointer, interpreted as pointing to a `T`.
    pub const fn as_ptr<T>(self) -> *mut T {
        self.0.as_ptr().cast()
    }

    /// Borrows the referent as a `T`.
    ///
    /// # Safety
    /// The Handle must point to a live, properly aligned and initialized `T`, that isn't mutably
    /// aliased for the duration of `'a`.
    pub const unsafe fn as_ref<'a, T>(self) -> &'a T {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.cast::<T>().as_ref() }
    }

    /// Mutably borrows the referent as a `T`.
    ///
    /// # Safety
    /// The Handle must point to a live, properly aligned and initialized `T`, and no other
    /// reference to it may exist for the duration of `'a`.
    pub const unsafe fn as_mut<'a, T>(self) -> &'a mut T {
        // SAFETY: Upheld by the caller.
        unsafe { self.0.cast::<T>().as_mut() }
    }

    /// Takes back ownership of a value created with [`Handle::from_box`].
    ///
    /// # Safety
    /// The Handle must have come from `Handle::from_box::<T>` and must not have been converted
    /// back already. Every copy of the Handle is dangling afterwards.
    pub unsafe fn into_box<T>(self) -> Box<T> {
        // SAFETY: The pointer was produced by Box::leak for a Box<T>, as guaranteed by the caller.
        unsafe { Box::from_raw(self.as_ptr::<T>()) }
    }
}

impl Debug for Handle {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:p})", self.0)
    }
}
