#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyCollection, Underflow};

#[test]
fn test_lifo_order() {
    let mut stack: Stack<_> = (0..10).collect();

    assert_eq!(stack.len(), 10);
    assert_eq!(stack.peek(), Ok(&9));
    assert_eq!(stack.top(), Ok(&9), "Top and peek should agree.");

    for i in (0..10).rev() {
        assert_eq!(stack.pop(), Ok(i), "Values should come off in reverse order.");
    }

    assert!(stack.is_empty());
}

#[test]
fn test_empty_stack() {
    let mut stack: Stack<u8> = Stack::new();

    assert_eq!(stack.pop(), Err(Underflow), "Popping an empty Stack should underflow.");
    assert_eq!(stack.peek(), Err(EmptyCollection));
    assert_eq!(stack.peek_mut(), Err(EmptyCollection));
    assert_eq!(stack.len(), 0, "A failed pop shouldn't change the Stack.");
}

#[test]
fn test_arithmetic() {
    let mut stack = Stack::new();

    stack.push(105);
    stack.push(32);
    let (a, b) = (stack.pop().unwrap(), stack.pop().unwrap());
    stack.push(a + b);
    assert_eq!(stack.top(), Ok(&137));

    stack.push(2);
    let (a, b) = (stack.pop().unwrap(), stack.pop().unwrap());
    stack.push(a * b);
    assert_eq!(stack.top(), Ok(&274));
    assert_eq!(stack.len(), 1);
}

#[test]
fn test_shrinks_with_vector_policy() {
    let mut stack: Stack<_> = (0..16).collect();
    assert_eq!(stack.cap(), 16);

    while stack.len() > 4 {
        stack.pop().unwrap();
    }
    assert_eq!(stack.cap(), 8, "Popping to a quarter full should halve the capacity.");

    *stack.peek_mut().unwrap() = 100;
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [0, 1, 2, 100]);
}

#[test]
fn test_free() {
    let counter = CountedDrop::new(0);
    let mut stack: Stack<_> = iter::repeat_with(|| counter.clone()).take(6).collect();

    drop(stack.pop());
    stack.free();
    assert_eq!(*counter.borrow(), 6, "Free should drop every remaining value.");
    assert_eq!((stack.len(), stack.cap()), (0, 0));

    stack.extend(iter::repeat_with(|| counter.clone()).take(3));
    drop(stack);
    assert_eq!(*counter.borrow(), 9);
}

#[test]
fn test_into_iter() {
    let stack: Stack<_> = (1..=4).collect();
    assert_eq!(
        stack.clone().into_iter().collect::<Vec<_>>(),
        [1, 2, 3, 4],
        "Owned iteration runs bottom to top."
    );
    assert_eq!(stack.into_iter().rev().next(), Some(4));

    let counter = CountedDrop::new(0);
    let stack: Stack<_> = iter::repeat_with(|| counter.clone()).take(5).collect();
    let mut values = stack.into_iter();
    drop(values.next());
    assert_eq!(*counter.borrow(), 1);
    drop(values);
    assert_eq!(*counter.borrow(), 5, "Unyielded values should drop with the iterator.");
}

#[test]
fn test_display() {
    let stack: Stack<_> = [1, 2, 3].into_iter().collect();
    assert_eq!(format!("{stack}"), "[1, 2, 3]");
}
