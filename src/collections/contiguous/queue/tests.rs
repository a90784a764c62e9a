#![cfg(test)]

use std::iter;

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::error::{EmptyCollection, Underflow};

#[test]
fn test_fifo_order() {
    let mut queue = Queue::new();
    for i in 0..10 {
        queue.enqueue(i);
    }

    assert_eq!(queue.front(), Ok(&0), "The first value enqueued should be at the front.");
    assert_eq!(queue.rear(), Ok(&9), "The last value enqueued should be at the rear.");

    for i in 0..10 {
        assert_eq!(queue.dequeue(), Ok(i), "Values should come out in insertion order.");
    }
    assert!(queue.is_empty());
}

#[test]
fn test_empty_queue() {
    let mut queue: Queue<String> = Queue::new();

    assert_eq!(queue.dequeue(), Err(Underflow));
    assert_eq!(queue.front(), Err(EmptyCollection));
    assert_eq!(queue.rear(), Err(EmptyCollection));

    queue.enqueue(String::from("only"));
    assert_eq!(queue.front(), queue.rear(), "A single value is both front and rear.");
}

#[test]
fn test_interleaved() {
    let mut queue = Queue::new();
    queue.enqueue('a');
    queue.enqueue('b');
    assert_eq!(queue.dequeue(), Ok('a'));
    queue.enqueue('c');
    assert_eq!(queue.iter().collect::<String>(), "bc");
    assert_eq!(queue.into_iter().collect::<String>(), "bc");
}

#[test]
fn test_shrinks_with_vector_policy() {
    let mut queue: Queue<_> = (0..16).collect();

    while queue.len() > 4 {
        queue.dequeue().unwrap();
    }
    assert_eq!(queue.cap(), 8, "Dequeuing to a quarter full should halve the capacity.");
    assert_eq!(queue.front(), Ok(&12));
}

#[test]
fn test_free() {
    let counter = CountedDrop::new(0);
    let mut queue: Queue<_> = iter::repeat_with(|| counter.clone()).take(8).collect();

    drop(queue.dequeue());
    queue.free();
    assert_eq!(*counter.borrow(), 8, "Free should drop every remaining value.");

    queue.enqueue(counter.clone());
    drop(queue);
    assert_eq!(*counter.borrow(), 9);
}
