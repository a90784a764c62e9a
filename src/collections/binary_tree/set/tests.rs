#![cfg(test)]

use std::iter;

use super::*;
use crate::collections::binary_tree::order::FnOrder;
use crate::collections::contiguous::Vector;
use crate::collections::traits::set::Set;
use crate::util::alloc::CountedDrop;
use crate::util::panic::assert_panics;

fn set_of(values: &[i32]) -> OrderedSet<i32> {
    values.iter().copied().collect()
}

#[test]
fn test_add_and_contains() {
    let mut set = OrderedSet::new();

    for value in [50, 30, 70, 20, 40, 60, 80] {
        assert!(set.add(value), "A new value should be inserted.");
    }
    assert!(!set.add(40), "Adding a value twice should be a no-op.");
    assert_eq!(set.len(), 7, "A duplicate shouldn't change the length.");
    assert!(set.contains(&40));

    for value in [50, 30, 70, 20, 40, 60, 80] {
        assert!(set.contains(&value));
    }
    for value in [0, 35, 55, 90] {
        assert!(!set.contains(&value));
    }

    assert_eq!(*set.flatten(), [&20, &30, &40, &50, &60, &70, &80], "Flatten should be in order.");
}

#[test]
fn test_tree_shape() {
    let set = set_of(&[2, 1, 3]);

    let root = set.root.as_deref().unwrap();
    assert_eq!(root.value, 2, "The first value should become the root.");
    assert_eq!(root.left.as_deref().map(|n| n.value), Some(1), "Less should go left.");
    assert_eq!(root.right.as_deref().map(|n| n.value), Some(3), "Greater should go right.");
}

#[test]
fn test_degenerate_tree() {
    // Sorted input produces a tree that is one long chain of right children.
    let mut set: OrderedSet<u32> = (0..10_000).collect();

    assert_eq!(set.len(), 10_000);
    assert!(set.contains(&9_999));
    assert!(!set.contains(&10_000));
    assert!(set.iter().copied().eq(0..10_000));

    set.clear();
    assert!(set.is_empty());

    let set: OrderedSet<u32> = (0..10_000).rev().collect();
    assert_eq!(set.into_iter().next(), Some(0));
}

#[test]
fn test_custom_order() {
    #[derive(Debug, Clone, PartialEq)]
    struct Point {
        x: f64,
        y: f64,
    }

    let mut set = OrderedSet::with_functions(
        |a: &Point, b: &Point| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)),
        |a: &Point, b: &Point| a.x == b.x && a.y == b.y,
    );

    set.add(Point { x: 1.0, y: 2.0 });
    set.add(Point { x: 0.5, y: 9.0 });
    set.add(Point { x: 1.0, y: 1.0 });
    assert!(!set.add(Point { x: 1.0, y: 2.0 }));

    assert_eq!(set.len(), 3);
    assert_eq!(
        set.iter().map(|p| (p.x, p.y)).collect::<Vector<_>>(),
        [(0.5, 9.0), (1.0, 1.0), (1.0, 2.0)].into_iter().collect(),
        "Values should be ordered by the comparator."
    );

    let mut reversed = OrderedSet::with_comparator(FnOrder::new(
        |a: &i32, b: &i32| b.cmp(a),
        |a: &i32, b: &i32| a == b,
    ));
    reversed.extend([1, 3, 2]);
    assert_eq!(reversed.to_string(), "{ 3 2 1 }");
}

#[test]
fn test_inconsistent_equality() {
    // Equality that is stricter than the ordering: values that compare equal but aren't equal
    // are stored to the right.
    let mut set = OrderedSet::with_functions(
        |a: &(i32, char), b: &(i32, char)| a.0.cmp(&b.0),
        |a: &(i32, char), b: &(i32, char)| a == b,
    );

    assert!(set.add((1, 'a')));
    assert!(set.add((1, 'b')));
    assert!(!set.add((1, 'a')));
    assert!(set.contains(&(1, 'b')));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_set_algebra() {
    let a = set_of(&[1, 2, 3, 4]);
    let b = set_of(&[3, 4, 5]);

    assert_eq!(a.union(&b), set_of(&[1, 2, 3, 4, 5]));
    assert_eq!(a.intersection(&b), set_of(&[3, 4]));
    assert_eq!(a.difference(&b), set_of(&[1, 2]));
    assert_eq!(b.difference(&a), set_of(&[5]));

    assert!(a.intersection(&b).is_subset(&a));
    assert!(!a.is_subset(&b));
    assert!(a.is_equal(&a.clone()), "A set should equal its clone.");
    assert!(!a.is_equal(&b));
    assert!(set_of(&[]).is_subset(&b), "The empty set is a subset of everything.");

    assert_eq!(
        a.union_iter(&b).copied().collect::<Vector<_>>(),
        [1, 2, 3, 4, 5].into_iter().collect(),
        "The lazy union should yield self first, then the rest of other."
    );
    assert_eq!(
        a.symmetric_difference_iter(&b).copied().collect::<Vector<_>>(),
        [1, 2, 5].into_iter().collect()
    );
    assert_eq!(
        a.clone().into_intersection(b.clone()).collect::<Vector<_>>(),
        [3, 4].into_iter().collect()
    );
}

#[test]
fn test_power_set() {
    let set = set_of(&[1, 2, 3]);
    let subsets = set.power_set();

    assert_eq!(subsets.len(), 8);
    assert_eq!(
        subsets.iter().map(|s| s.to_string()).collect::<Vector<_>>(),
        [
            "{ }", "{ 1 }", "{ 2 }", "{ 1 2 }", "{ 3 }", "{ 1 3 }", "{ 2 3 }", "{ 1 2 3 }",
        ].into_iter().map(String::from).collect(),
        "Subsets should be in bit mask order."
    );

    assert_eq!(set_of(&[]).power_set().len(), 1, "The empty set has one subset.");

    let huge: OrderedSet<u32> = (0..usize::BITS).collect();
    assert!(huge.try_power_set().unwrap_err().is_capacity_overflow());
    assert_panics!({
        let huge: OrderedSet<u32> = (0..usize::BITS).collect();
        huge.power_set();
    });
}

#[test]
fn test_cartesian_product() {
    let a = set_of(&[1, 2]);
    let b: OrderedSet<_> = ['x', 'y', 'z'].into_iter().collect();

    let pairs = a.cartesian_product(&b);
    assert_eq!(pairs.len(), 6);
    assert_eq!(pairs[0], (&1, &'x'));
    assert_eq!(pairs[2], (&1, &'z'));
    assert_eq!(pairs[3], (&2, &'x'));
    assert!(a.cartesian_product(&OrderedSet::<char>::new()).is_empty());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let mut next = 0;
    let mut set = OrderedSet::with_functions(
        |a: &(u32, CountedDrop), b: &(u32, CountedDrop)| a.0.cmp(&b.0),
        |a: &(u32, CountedDrop), b: &(u32, CountedDrop)| a.0 == b.0,
    );
    set.extend(iter::repeat_with(|| {
        next += 1;
        (next % 7, counter.clone())
    }).take(20));

    assert_eq!(set.len(), 7);
    assert_eq!(*counter.borrow(), 13, "Rejected duplicates should be dropped immediately.");

    let mut iter = set.into_iter();
    drop(iter.next());
    drop(iter);
    assert_eq!(*counter.borrow(), 20, "Every value should be dropped exactly once.");
}

#[test]
fn test_display() {
    let set = set_of(&[3, 1, 2]);
    assert_eq!(set.to_string(), "{ 1 2 3 }");
    assert_eq!(set_of(&[]).to_string(), "{ }");
    assert_eq!(
        format!("{set:?}"),
        "OrderedSet (len 3)\n[1] ┌ (1)\n[2] └ (2)\n[0] (3)"
    );
    assert_eq!(format!("{:?}", set_of(&[])), "OrderedSet (len 0)");
}

#[test]
fn test_debug_of_degenerate_tree() {
    let sorted: OrderedSet<i32> = (0..10_000).collect();
    let drawn = format!("{sorted:?}");
    assert_eq!(drawn.lines().count(), 10_001, "Every node should be drawn on its own line.");
    assert!(drawn.ends_with("\n[9999] └ (9999)"), "The deepest node should be drawn last.");
    assert!(drawn.len() < 300_000, "Drawing a list shaped tree should take linear space.");

    // Set algebra rebuilds from sorted sequences, so its results are list shaped too.
    let evens: OrderedSet<i32> = (0..5_000).map(|i| i * 2).collect();
    let odds: OrderedSet<i32> = (0..5_000).map(|i| i * 2 + 1).collect();
    let union = evens.union(&odds);
    assert_eq!(format!("{union:?}").lines().count(), 10_001);
}
