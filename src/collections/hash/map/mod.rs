//! A module containing [`HashMap`] and associated types.
//!
//! Besides the map itself, the types here provide owned and borrowed iteration over entries, keys
//! or values. There is no iterator with mutable keys, because changing a key in place would leave
//! it in the wrong bucket.
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;
mod iter;
mod node;
mod tests;

pub use hash_map::*;
pub use iter::*;
