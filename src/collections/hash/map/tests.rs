#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::hash::ManualHash;

#[test]
fn test_put_and_get() {
    let mut map = HashMap::new();
    assert_eq!(map.cap(), INITIAL_CAP, "A new HashMap should start with the initial capacity.");

    assert_eq!(map.put(1_u32, "one"), None);
    assert_eq!(map.put(2_u32, "two"), None);
    assert_eq!(map.len(), 2);

    assert_eq!(map.put(1_u32, "uno"), Some("one"), "Updating should return the old value.");
    assert_eq!(map.len(), 2, "Updating shouldn't change the length.");

    assert_eq!(map.get(&1), Some(&"uno"));
    assert_eq!(map.get_entry(&2), Some((&2, &"two")));
    assert_eq!(map.get(&3), None);
    assert!(map.contains(&2));
    assert!(!map.contains(&3));

    *map.get_mut(&2).unwrap() = "dos";
    assert_eq!(map.get(&2), Some(&"dos"));
}

#[test]
fn test_collisions() {
    let mut map = HashMap::new();
    let keys = [ManualHash::new(1, 'a'), ManualHash::new(17, 'b'), ManualHash::new(33, 'c')];

    for (i, key) in keys.into_iter().enumerate() {
        map.put(key, i);
    }
    for key in keys {
        assert_eq!(map.bucket_index(&key), 1, "All three keys should share a bucket.");
    }
    assert_eq!(
        map.keys().map(|k| k.value()).collect::<Vector<_>>(),
        ['c', 'b', 'a'].into_iter().collect(),
        "New keys should be linked at the head of their chain."
    );

    assert_eq!(map.remove(&keys[1]), Some(1), "Removing from the middle of a chain.");
    assert_eq!(map.get(&keys[0]), Some(&0));
    assert_eq!(map.get(&keys[2]), Some(&2));

    assert_eq!(map.remove(&keys[2]), Some(2), "Removing the head of a chain.");
    assert_eq!(map.get(&keys[0]), Some(&0));

    assert_eq!(map.remove(&keys[0]), Some(0), "Removing the last node of a chain.");
    assert!(map.is_empty());
    assert_eq!(map.remove(&keys[0]), None);

    // Equal hashes alone don't make equal keys.
    map.put(ManualHash::new(5, 'x'), 10);
    map.put(ManualHash::new(5, 'y'), 20);
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(&ManualHash::new(5, 'y')), Some(&20));
}

#[test]
fn test_resize() {
    let mut map = HashMap::new();
    for i in 0..12_u32 {
        map.put(i, i * 10);
    }
    assert_eq!(map.cap(), 16, "Shouldn't grow until a new key is added at the load factor.");

    map.put(0, 0);
    assert_eq!(map.cap(), 16, "Updating an existing key shouldn't grow the map.");

    map.put(12, 120);
    assert_eq!(map.cap(), 32, "The 13th key should double the capacity.");
    assert_eq!(map.len(), 13);

    for i in 1..13 {
        assert_eq!(map.get(&i), Some(&(i * 10)), "Every key should survive a resize.");
    }
}

#[test]
fn test_growing_insert_uses_new_capacity() {
    let mut map = HashMap::with_cap(4);
    for hash in 0..3 {
        assert_eq!(map.try_put(ManualHash::new(hash, hash), 'x'), Ok(None));
    }
    assert_eq!(map.cap(), 4);

    // Hash 6 belongs in bucket 2 of 4 but bucket 6 of 8, and the table only grows for this key.
    let key = ManualHash::new(6, 6);
    assert_eq!(map.try_put(key, 'y'), Ok(None));
    assert_eq!(map.cap(), 8, "The fourth key should have grown the map.");
    assert_eq!(map.bucket_index(&key), 6);
    assert_eq!(map.get(&key), Some(&'y'), "The new key should be placed after growing.");
    assert_eq!(map.len(), 4);

    assert_eq!(map.try_put(key, 'z'), Ok(Some('y')));
    assert_eq!(map.cap(), 8, "An update allocates nothing and never grows.");
}

#[test]
fn test_rehash_reverses_chains() {
    let mut map = HashMap::with_cap(4);
    for hash in [0, 8, 16] {
        map.put(ManualHash::new(hash, hash), ());
    }
    assert_eq!(
        map.keys().map(|k| k.value()).collect::<Vector<_>>(),
        [16, 8, 0].into_iter().collect()
    );

    map.put(ManualHash::new(1, 1), ());
    assert_eq!(map.cap(), 8);
    assert_eq!(
        map.keys().map(|k| k.value()).collect::<Vector<_>>(),
        [0, 8, 16, 1].into_iter().collect(),
        "Rehashing by head insertion should reverse the order of a chain."
    );
}

#[test]
fn test_remove_batch() {
    let mut map: HashMap<_, _> = (0..1000_u32).map(|i| (i, i.to_string())).collect();
    assert_eq!(map.len(), 1000);
    let cap = map.cap();

    for i in (0..1000).step_by(2) {
        assert_eq!(map.remove(&i), Some(i.to_string()));
    }
    assert_eq!(map.len(), 500);
    assert_eq!(map.cap(), cap, "Removal should never shrink the map.");

    for i in 0..1000 {
        assert_eq!(map.contains(&i), i % 2 == 1);
    }
    assert_eq!(map.remove(&0), None, "A second removal should report a miss.");
    assert_eq!(map.remove_entry(&1), Some((1, String::from("1"))));
}

#[test]
fn test_builtin_keys() {
    let mut ints = HashMap::new();
    for i in -5_i64..=5 {
        ints.put(i, i * i);
    }
    assert_eq!(ints.get(&-5), Some(&25));
    assert_eq!(ints.get(&0), Some(&0));
    assert_eq!(ints.len(), 11);

    let mut floats = HashMap::new();
    floats.put(0.0_f64, "zero");
    floats.put(1.5_f64, "one and a half");
    assert_eq!(floats.get(&-0.0), Some(&"zero"), "Negative zero should find positive zero.");
    assert_eq!(floats.get(&1.5), Some(&"one and a half"));

    let mut strings = HashMap::new();
    strings.put(String::new(), 0);
    strings.put(String::from("key"), 1);
    assert_eq!(strings.get(""), Some(&0), "The empty string is a valid key.");
    assert_eq!(strings.get("key"), Some(&1));
    assert_eq!(strings.remove("key"), Some(1));

    let mut chars: HashMap<_, _> = "hello".chars().zip(0..).collect();
    assert_eq!(chars.len(), 4);
    assert_eq!(chars.get(&'l'), Some(&3), "The later value should win.");
    chars.put('!', 5);
    assert!(chars.contains(&'!'));
}

#[test]
fn test_custom_functions() {
    let mut map = HashMap::with_functions(
        |key: &&str| key.len() as u64,
        |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
    );

    for word in "The cat saw THE other CAT".split(' ') {
        let count = map.get(&word).copied().unwrap_or(0);
        map.put(word, count + 1);
    }

    assert_eq!(map.len(), 4);
    assert_eq!(map.get(&"the"), Some(&2));
    assert_eq!(map.get(&"Cat"), Some(&2));
    assert_eq!(map.get_entry(&"cat"), Some((&"cat", &2)), "The first key instance should stay.");
}

#[test]
fn test_clear_and_drop() {
    let counter = CountedDrop::new(0);
    let mut map: HashMap<_, _> = (0..20_u32).zip(iter::repeat_with(|| counter.clone())).collect();
    let cap = map.cap();

    map.clear();
    assert_eq!(*counter.borrow(), 20, "Clear should drop every value.");
    assert_eq!(map.cap(), cap, "Clear should keep the capacity.");
    assert!(map.is_empty());

    map.extend((0..10).zip(iter::repeat_with(|| counter.clone())));
    drop(map.put(3, counter.clone()));
    drop(map.remove(&4));
    assert_eq!(*counter.borrow(), 22);

    let mut iter = map.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(*counter.borrow(), 31, "Every value should be dropped exactly once.");
}

#[test]
fn test_iterators() {
    let mut map: HashMap<_, _> = (0..10_u32).map(|i| (i, i)).collect();

    for value in map.values_mut() {
        *value *= 2;
    }
    for (key, value) in &mut map {
        *value += key;
    }

    let iter = map.iter();
    assert_eq!(iter.len(), 10);
    assert!(iter.clone().all(|(key, value)| *value == key * 3));
    assert_eq!(map.values().sum::<u32>(), 135);
    assert_eq!(map.keys().copied().max(), Some(9));
    assert_eq!(map.clone().into_iter().count(), 10);
}

#[test]
fn test_clone_and_eq() {
    let mut map: HashMap<_, _> = (0..30_u32).map(|i| (i, i % 3)).collect();
    let copy = map.clone();

    assert_eq!(map, copy);
    assert_eq!(copy.cap(), map.cap());
    assert!(map.iter().eq(copy.iter()), "A clone should keep the chain order.");

    map.put(0, 100);
    assert_ne!(map, copy);

    let other: HashMap<_, _> = (0..30_u32).rev().map(|i| (i, i % 3)).collect();
    assert_eq!(other, copy, "Insertion order shouldn't affect equality.");
}

#[test]
fn test_display() {
    let mut map = HashMap::with_cap(4);
    map.put(1_u32, 'a');
    map.put(5_u32, 'b');
    map.put(2_u32, 'c');

    assert_eq!(map.to_string(), "{5: 'b', 1: 'a', 2: 'c'}");
    assert_eq!(format!("{map:?}"), "HashMap (len 3, cap 4)\n[1] -> (5: 'b') -> (1: 'a')\n[2] -> (2: 'c')");
    assert_eq!(HashMap::<u8, u8>::new().to_string(), "{}");
}
