//! Linked collection types. Currently just the doubly linked [`LinkedList`].

pub mod list;

#[doc(inline)]
pub use list::LinkedList;
