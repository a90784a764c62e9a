//! End to end scenarios mixing several containers, the way a caller of the library would.

use stl_containers::collections::binary_tree::OrderedSet;
use stl_containers::collections::contiguous::{Handle, OpaqueVector, Queue, Stack, Vector};
use stl_containers::collections::hash::HashMap;
use stl_containers::collections::linked::LinkedList;
use stl_containers::{EmptyCollection, IndexOutOfBounds, Underflow};

const TEXT: &str = "the quick brown fox jumps over the lazy dog the end";

#[test]
fn word_frequency() {
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in TEXT.split_whitespace() {
        match counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                counts.put(word.to_owned(), 1);
            },
        }
    }

    assert_eq!(counts.get("the"), Some(&3));
    assert_eq!(counts.get("quick"), Some(&1));
    assert_eq!(counts.get("cat"), None);
    assert_eq!(counts.len(), 9);

    // The distinct words, in order, through an OrderedSet of borrowed keys.
    let words: OrderedSet<&str> = counts.keys().map(String::as_str).collect();
    assert_eq!(words.iter().next(), Some(&"brown"));
    assert_eq!(words.len(), counts.len());
}

#[test]
fn word_frequency_of_listed_words() {
    let mut counts: HashMap<&str, i32> = HashMap::new();

    for word in "the,quick,brown,fox,jumps,over,the,lazy,dog,the".split(',') {
        let count = counts.get(word).copied().unwrap_or(0);
        counts.put(word, count + 1);
    }

    assert_eq!(counts.get("the"), Some(&3));
    assert_eq!(counts.get("quick"), Some(&1));
    assert_eq!(counts.len(), 8);
}

#[test]
fn stack_arithmetic() {
    // Evaluates "105 32 + 2 *" in reverse polish notation, checking the top after each operator.
    let mut stack = Stack::new();
    let mut tops = Vector::new();

    for token in "105 32 + 2 *".split(' ') {
        match token {
            "+" | "*" => {
                let rhs: i64 = stack.pop().unwrap();
                let lhs = stack.pop().unwrap();
                stack.push(if token == "+" { lhs + rhs } else { lhs * rhs });
                tops.push(*stack.peek().unwrap());
            },
            number => stack.push(number.parse().unwrap()),
        }
    }

    assert_eq!(&*tops, &[137, 274]);
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop(), Ok(274));
    assert_eq!(stack.pop(), Err(Underflow));
    assert_eq!(stack.peek(), Err(EmptyCollection));
}

#[test]
fn queue_front_and_rear() {
    let mut queue = Queue::new();
    for i in 0..10 {
        queue.enqueue(i);
    }

    assert_eq!(queue.front(), Ok(&0));
    assert_eq!(queue.rear(), Ok(&9));

    let drained: Vector<_> = std::iter::from_fn(|| queue.dequeue().ok()).collect();
    assert!(drained.iter().copied().eq(0..10), "A Queue should be first in, first out.");
    assert_eq!(queue.dequeue(), Err(Underflow));
    assert_eq!(queue.rear(), Err(EmptyCollection));
}

#[test]
fn resize_preserves_membership() {
    let mut map = HashMap::new();
    for key in 0..13_i32 {
        map.put(key, key * key);
    }

    assert!(map.cap() > 16, "The 13th key should trigger a resize.");
    for key in 0..13 {
        assert_eq!(map.get(&key), Some(&(key * key)));
    }
}

#[test]
fn playlist() {
    let mut playlist: LinkedList<&str> = ["intro", "verse", "chorus"].into_iter().collect();
    playlist.push_front("count in");
    playlist.push_back("outro");

    assert_eq!(playlist.len(), 5);
    assert_eq!(playlist.get(2), &"verse");
    assert_eq!(playlist.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_eq!(playlist.index_of(&"chorus"), Some(3));

    assert_eq!(playlist.pop_front(), "count in");
    assert_eq!(playlist.pop_back(), "outro");
    assert_eq!(playlist.to_string(), r#"("intro") -> ("verse") -> ("chorus")"#);
}

#[test]
fn opaque_vector_of_boxes() {
    let mut handles = OpaqueVector::new();
    for name in ["alpha", "beta", "gamma"] {
        handles.push_back(Handle::from_box(Box::new(String::from(name))));
    }

    // SAFETY: Every handle was created from a Box<String>.
    let second = unsafe { handles.get(1).unwrap().as_ref::<String>() };
    assert_eq!(second, "beta");

    let mut released = Vector::new();
    handles.free_with(|handle| {
        // SAFETY: Every handle was created from a Box<String> and is released exactly once.
        released.push(*unsafe { handle.into_box::<String>() });
    });
    assert_eq!(&*released, &["alpha", "beta", "gamma"]);
}
