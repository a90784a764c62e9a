//! Generic collection types, each in the module of the structure it is built on.
//!
//! # Method
//! Contiguous types implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), so slice
//! methods come for free. Node based types own their nodes through [`Box`] wherever a node has a
//! single owner, and only fall back to raw pointers where a node is reachable from both sides, as
//! in [`LinkedList`](linked::LinkedList).
//!
//! Every module is behind a Cargo feature of the same name (`binary-tree` for
//! [`binary_tree`]), all of which are enabled by the default `collections-all` feature.

#[cfg(feature = "binary-tree")]
pub mod binary_tree;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "traits")]
pub mod traits;
