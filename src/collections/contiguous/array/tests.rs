#![cfg(test)]

use std::mem::MaybeUninit;

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::{AllocError, CapacityOverflow};
use crate::util::panic::assert_panics;

fn counting(size: usize) -> Array<usize> {
    let mut next = 0;
    Array::try_repeat_with(size, || {
        next += 1;
        next - 1
    }).unwrap()
}

#[test]
fn test_zst_support() {
    let arr = Array::<ZeroSizedType>::repeat_default(5);
    assert_eq!(arr[0], ZeroSizedType, "Indexing with no offset should work.");
    assert_eq!(arr[4], ZeroSizedType, "Indexing with an in-bounds offset should work.");
    assert_eq!(arr.iter().count(), 5, "Should iterate over the right number of ZST instances.");

    let mut arr = arr.forget_init();
    let old_ptr = arr.ptr;

    arr.try_realloc(30).unwrap();
    assert_eq!(arr.ptr, old_ptr, "Pointer shouldn't change when reallocated for a ZST.");
    assert_eq!(arr.size(), 30);
}

#[test]
fn test_realloc() {
    let mut arr = counting(5).forget_init();
    assert_eq!(arr.size(), 5);

    let old_ptr = arr.ptr;
    arr.realloc(5);
    assert_eq!(arr.ptr, old_ptr, "When reallocating to the same size, the pointer shouldn't change.");

    arr.realloc(0);
    assert_ne!(arr.ptr, old_ptr, "Pointer should be replaced with a dangling one for 0 size.");
    assert_eq!(arr.size(), 0);

    arr.realloc(10);
    for i in 0..10 {
        arr[i] = MaybeUninit::new(i);
    }

    arr.realloc(15);
    assert_eq!(arr.size(), 15);
    for i in 0..10 {
        // SAFETY: The first 10 locations were written before growing.
        assert_eq!(
            unsafe { arr[i].assume_init() }, i,
            "When growing, all elements should remain in the Array."
        );
    }

    arr.realloc(0);
}

#[test]
fn test_realloc_overflow() {
    let mut arr = counting(5).forget_init();

    assert_eq!(
        arr.try_realloc(isize::MAX as usize + 1),
        Err(AllocError::CapacityOverflow(CapacityOverflow)),
        "An oversized layout should be reported rather than allocated."
    );
    assert_eq!(arr.size(), 5, "A failed reallocation should leave the Array untouched.");

    // SAFETY: Nothing has been overwritten since the Array was initialized.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    assert_panics!({
        let mut arr = Array::<u64>::new().forget_init();
        arr.realloc(usize::MAX / 2);
    });
}

#[test]
fn test_try_new_uninit() {
    let arr = Array::<u8>::try_new_uninit(0).unwrap();
    assert_eq!(arr.size(), 0);

    assert!(
        Array::<u32>::try_new_uninit(usize::MAX).is_err(),
        "A size that can't be represented as a layout should fail."
    );
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr = Array::try_repeat_with(10, || counter.clone()).unwrap();

    drop(arr);

    assert_eq!(*counter.borrow(), 10, "10 elements should have been dropped.");
}

#[test]
fn test_equality() {
    let arr = counting(5);

    assert_eq!(arr, counting(5), "Separately constructed arrays should be equal.");
    assert_ne!(arr, counting(4));
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Deref equality should be upheld.");
    assert_eq!(format!("{arr}"), "[0, 1, 2, 3, 4]");
}

#[test]
fn test_iterators() {
    let mut arr = counting(5);

    for i in arr.iter_mut() {
        *i *= 2;
    }
    assert_eq!(*arr, [0_usize, 2, 4, 6, 8], "Array mutated by iterator should equal this slice.");

    let mut iter = arr.into_iter();
    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(8));
    assert_eq!(iter.next_back(), Some(6));
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), None);

    let counter = CountedDrop::new(0);
    let arr = Array::try_repeat_with(10, || counter.clone()).unwrap();

    let mut iter = arr.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(
        *counter.borrow(), 10,
        "Dropping a partially consumed iterator should drop all remaining elements."
    );
}
