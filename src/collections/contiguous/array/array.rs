use std::alloc::{self, Layout};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::util::error::{AllocError, CapacityOverflow, OutOfMemory};

/// A heap allocated buffer with a length fixed at runtime, similar to a [`Box<[T]>`](Box<T>).
/// Unlike a boxed slice, an `Array<MaybeUninit<T>>` can be resized in place, which is what
/// [`Vector`](super::super::Vector) and the bucket table of
/// [`HashMap`](crate::collections::hash::HashMap) are built on.
///
/// Zero sized layouts (an empty Array, or any Array of a zero sized type) never touch the
/// allocator and hold a dangling pointer instead.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `realloc` | `O(n)`*, `O(1)` |
///
/// \* Whether the allocator can resize in place is out of our hands.
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Creates an empty Array without allocating.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub const fn new() -> Array<T> {
        Array {
            ptr: NonNull::dangling(),
            size: 0,
            _phantom: PhantomData,
        }
    }

    /// Returns the number of elements in the Array.
    ///
    /// # Examples
    /// ```
    /// # use stl_containers::collections::contiguous::Array;
    /// let arr: Array<u8> = Array::repeat_default(3);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Allocates room for `size` elements without initializing any of them.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the allocation would exceed [`isize::MAX`] bytes. Running
    /// out of memory calls [`alloc::handle_alloc_error`].
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        Self::try_new_uninit(size).unwrap_or_else(|err| Array::<T>::alloc_failed(err, size))
    }

    /// Allocates room for `size` elements without initializing any of them, reporting an
    /// [`AllocError`] instead of panicking or aborting.
    pub fn try_new_uninit(size: usize) -> Result<Array<MaybeUninit<T>>, AllocError> {
        let layout = Array::<MaybeUninit<T>>::layout_for(size)?;

        Ok(Array {
            ptr: Array::<MaybeUninit<T>>::allocate(layout)?,
            size,
            _phantom: PhantomData,
        })
    }

    /// Builds an Array of `size` elements, filling each slot in order with the result of `f`.
    /// Nothing is called if the memory can't be allocated.
    pub fn try_repeat_with<F: FnMut() -> T>(size: usize, mut f: F) -> Result<Array<T>, AllocError> {
        let mut arr = Self::try_new_uninit(size)?;

        for slot in arr.iter_mut() {
            slot.write(f());
        }

        // SAFETY: The loop wrote every slot.
        Ok(unsafe { arr.assume_init() })
    }

    /// Hands over ownership of the allocation as a pointer and an element count. Pass both to
    /// [`Array::from_parts`] to take it back.
    pub const fn into_parts(self) -> (NonNull<T>, usize) {
        let parts = (self.ptr, self.size);
        mem::forget(self);
        parts
    }

    /// Reassembles an Array from the result of [`Array::into_parts`].
    ///
    /// # Safety
    /// - `ptr` must come from the global allocator with the layout of `size` elements of `T`, or be
    ///   dangling when that layout has a size of zero.
    /// - All `size` elements behind `ptr` must be initialized.
    pub const unsafe fn from_parts(ptr: NonNull<T>, size: usize) -> Array<T> {
        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Views the Array as possibly uninitialized, so that it can be reallocated.
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        let (ptr, size) = self.into_parts();
        // SAFETY: MaybeUninit<T> is layout compatible with T.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    pub(crate) fn layout_for(size: usize) -> Result<Layout, CapacityOverflow> {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow)
    }

    /// Gets a pointer for `layout` from the global allocator, or a dangling one if the layout is
    /// zero sized.
    fn allocate(layout: Layout) -> Result<NonNull<T>, OutOfMemory> {
        if layout.size() == 0 {
            return Ok(NonNull::dangling());
        }

        // SAFETY: The layout has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        NonNull::new(raw.cast()).ok_or(OutOfMemory { bytes: layout.size() })
    }

    /// The infallible constructors panic on an impossible layout but defer to the global handler
    /// when memory runs out.
    fn alloc_failed(err: AllocError, size: usize) -> ! {
        match (err, Array::<T>::layout_for(size)) {
            (AllocError::OutOfMemory(_), Ok(layout)) => alloc::handle_alloc_error(layout),
            (err, _) => panic!("{}", err),
        }
    }
}

impl<T: Default> Array<T> {
    /// Creates an Array holding `size` copies of `T::default()`.
    ///
    /// # Panics
    /// Panics if the allocation would exceed [`isize::MAX`] bytes.
    pub fn repeat_default(size: usize) -> Array<T> {
        Self::try_repeat_with(size, T::default).unwrap_or_else(|err| Self::alloc_failed(err, size))
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Treats every element as initialized.
    ///
    /// # Safety
    /// Every element must actually have been initialized.
    pub unsafe fn assume_init(self) -> Array<T> {
        let (ptr, size) = self.into_parts();
        // SAFETY: T is layout compatible with MaybeUninit<T> and the caller vouches for the
        // contents.
        unsafe { Array::from_parts(ptr.cast(), size) }
    }

    /// Resizes the allocation to `new_size` elements. Elements past `new_size` are forgotten
    /// rather than dropped, and any new elements are uninitialized.
    ///
    /// # Panics
    /// Panics with [`CapacityOverflow`] if the allocation would exceed [`isize::MAX`] bytes. Running
    /// out of memory calls [`alloc::handle_alloc_error`].
    pub fn realloc(&mut self, new_size: usize) {
        if let Err(err) = self.try_realloc(new_size) {
            Array::<T>::alloc_failed(err, new_size)
        }
    }

    /// Resizes the allocation to `new_size` elements like [`realloc`](Array::realloc), but hands
    /// back an [`AllocError`] instead. A failed call leaves the Array as it was.
    pub fn try_realloc(&mut self, new_size: usize) -> Result<(), AllocError> {
        if new_size == self.size {
            return Ok(());
        }

        let new_layout = Self::layout_for(new_size)?;
        // The current layout was valid when it was allocated.
        let old_layout = Self::layout_for(self.size)?;

        self.ptr = match (old_layout.size(), new_layout.size()) {
            (0, _) => Self::allocate(new_layout)?,
            (_, 0) => {
                // SAFETY: ptr was allocated with old_layout, which isn't zero sized.
                unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), old_layout) };
                NonNull::dangling()
            },
            (_, new_bytes) => {
                // SAFETY: ptr was allocated with old_layout, and new_bytes is non-zero and came
                // from a valid layout with the same alignment.
                let raw = unsafe { alloc::realloc(self.ptr.as_ptr().cast(), old_layout, new_bytes) };
                // A null return leaves the old allocation in place.
                NonNull::new(raw.cast()).ok_or(OutOfMemory { bytes: new_bytes })?
            },
        };
        self.size = new_size;
        Ok(())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        // SAFETY: Every element is initialized and is never used again.
        unsafe { ptr::drop_in_place(&mut **self as *mut [T]) };

        let allocated = Self::layout_for(self.size).ok().filter(|layout| layout.size() != 0);
        if let Some(layout) = allocated {
            // SAFETY: ptr was allocated with this layout.
            unsafe { alloc::dealloc(self.ptr.as_ptr().cast(), layout) }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: ptr is aligned and holds size initialized elements, whose total size fits in an
        // isize.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: As for deref, with exclusivity from the mutable borrow.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self
    }
}

// SAFETY: An Array uniquely owns its elements, the same as a Box<[T]>.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Shared access only hands out shared references to the elements.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self[..] == other[..]
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &&self[..])
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self[..], f)
    }
}
