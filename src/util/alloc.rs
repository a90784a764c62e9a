use std::alloc::{self, Layout};
use std::ptr::NonNull;

use crate::util::error::{AllocError, OutOfMemory};

/// Moves `value` onto the heap, returning an [`AllocError`] rather than aborting if the allocator
/// can't provide the memory. Node based collections use this so that a failed node allocation can
/// be reported instead of taking the process down.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocError> {
    let layout = Layout::new::<T>();

    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: The layout has a non-zero size.
    let ptr = NonNull::new(unsafe { alloc::alloc(layout) }.cast::<T>())
        .ok_or(OutOfMemory { bytes: layout.size() })?;

    // SAFETY: ptr is non-null, properly aligned and valid for writes of a single T. The allocation
    // was made in the global allocator with Layout::new::<T>(), exactly what Box expects.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

#[cfg(test)]
pub(crate) use test_types::*;
