use std::fmt::{self, Debug, Formatter};

/// A type that can be used as a key in a [`HashMap`](super::HashMap) with the default
/// [`DefaultHashing`] strategy.
///
/// Implementations must uphold `a.key_eq(b) => a.hash_key() == b.hash_key()`. Breaking this
/// doesn't cause undefined behavior, but lookups for equal keys may miss.
pub trait HashKey {
    /// Produces the hash of this key.
    fn hash_key(&self) -> u64;

    /// Returns true if this key and `other` identify the same entry.
    fn key_eq(&self, other: &Self) -> bool;
}

/// Starting value of the djb2 string hash.
pub const DJB2_SEED: u64 = 5381;

/// Hashes bytes with djb2: `hash = hash * 33 + byte` for each byte, starting from
/// [`DJB2_SEED`], wrapping on overflow.
pub const fn djb2(bytes: &[u8]) -> u64 {
    let mut hash = DJB2_SEED;
    let mut i = 0;
    while i < bytes.len() {
        hash = hash.wrapping_mul(33).wrapping_add(bytes[i] as u64);
        i += 1;
    }
    hash
}

macro_rules! impl_hash_key_unsigned {
    ($($t:ty),*) => {
        $(
            impl HashKey for $t {
                fn hash_key(&self) -> u64 {
                    *self as u64
                }

                fn key_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

macro_rules! impl_hash_key_signed {
    ($($t:ty),*) => {
        $(
            impl HashKey for $t {
                fn hash_key(&self) -> u64 {
                    // Sign extend first, so -1_i8 and -1_i64 hash equally.
                    *self as i64 as u64
                }

                fn key_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_hash_key_unsigned!(u8, u16, u32, u64, usize);
impl_hash_key_signed!(i8, i16, i32, i64, isize);

impl HashKey for u128 {
    fn hash_key(&self) -> u64 {
        (*self ^ (*self >> 64)) as u64
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl HashKey for i128 {
    fn hash_key(&self) -> u64 {
        (*self as u128).hash_key()
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

macro_rules! impl_hash_key_float {
    ($($t:ty),*) => {
        $(
            /// Hashes the bit pattern of the value, with `-0.0` folded into `0.0`. Keys compare
            /// with `==`, so a `NaN` key can be inserted but never found again.
            impl HashKey for $t {
                fn hash_key(&self) -> u64 {
                    if *self == 0.0 {
                        0
                    } else {
                        self.to_bits() as u64
                    }
                }

                fn key_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_hash_key_float!(f32, f64);

impl HashKey for char {
    fn hash_key(&self) -> u64 {
        *self as u64
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl HashKey for bool {
    fn hash_key(&self) -> u64 {
        *self as u64
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl HashKey for str {
    fn hash_key(&self) -> u64 {
        djb2(self.as_bytes())
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl HashKey for String {
    fn hash_key(&self) -> u64 {
        self.as_str().hash_key()
    }

    fn key_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl<T: HashKey + ?Sized> HashKey for &T {
    fn hash_key(&self) -> u64 {
        (**self).hash_key()
    }

    fn key_eq(&self, other: &Self) -> bool {
        (**self).key_eq(*other)
    }
}

impl<T: HashKey + ?Sized> HashKey for Box<T> {
    fn hash_key(&self) -> u64 {
        (**self).hash_key()
    }

    fn key_eq(&self, other: &Self) -> bool {
        (**self).key_eq(other)
    }
}

/// Supplies the hash and equality functions a [`HashMap`](super::HashMap) uses for keys of type
/// `K`.
pub trait HashStrategy<K: ?Sized> {
    fn hash(&self, key: &K) -> u64;

    fn equal(&self, a: &K, b: &K) -> bool;
}

/// Hashes keys with their [`HashKey`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultHashing;

impl<K: HashKey + ?Sized> HashStrategy<K> for DefaultHashing {
    fn hash(&self, key: &K) -> u64 {
        key.hash_key()
    }

    fn equal(&self, a: &K, b: &K) -> bool {
        a.key_eq(b)
    }
}

/// A strategy built from a caller supplied hash function and equality predicate.
#[derive(Clone, Copy)]
pub struct FnHashing<H, E> {
    hash: H,
    equal: E,
}

impl<H, E> FnHashing<H, E> {
    pub const fn new(hash: H, equal: E) -> FnHashing<H, E> {
        FnHashing {
            hash,
            equal,
        }
    }
}

impl<K: ?Sized, H, E> HashStrategy<K> for FnHashing<H, E>
where
    H: Fn(&K) -> u64,
    E: Fn(&K, &K) -> bool,
{
    fn hash(&self, key: &K) -> u64 {
        (self.hash)(key)
    }

    fn equal(&self, a: &K, b: &K) -> bool {
        (self.equal)(a, b)
    }
}

impl<H, E> Debug for FnHashing<H, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHashing").finish_non_exhaustive()
    }
}
