//! Hash based collections. [`HashMap`] resolves collisions by chaining, and hashes keys through a
//! [`HashStrategy`]: either [`DefaultHashing`] over the [`HashKey`] trait or caller supplied
//! functions with [`FnHashing`].

pub mod key;
pub mod map;

#[doc(inline)]
pub use key::{DefaultHashing, FnHashing, HashKey, HashStrategy};
#[doc(inline)]
pub use map::HashMap;
