#![cfg(all(test, feature = "hash"))]

use crate::collections::hash::HashKey;

/// A key with a hash chosen by the test, used to force collisions in hash based collections.
#[derive(Debug, Clone, Copy)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: Eq> HashKey for ManualHash<T> {
    fn hash_key(&self) -> u64 {
        self.hash
    }

    fn key_eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
