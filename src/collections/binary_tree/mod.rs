//! Binary search tree collections. Currently just [`OrderedSet`], an unbalanced tree ordered by a
//! [`Comparator`].

pub mod order;
pub mod set;

#[doc(inline)]
pub use order::{Comparator, FnOrder, NaturalOrder};
#[doc(inline)]
pub use set::OrderedSet;
