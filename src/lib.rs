//! A library of generic containers: vectors, stacks, queues, doubly linked lists, binary search
//! tree sets and chained hash maps, along with a type erased vector of handles.
//!
//! # Purpose
//! Each container is written from scratch on top of raw allocations and owned nodes, rather than
//! wrapping [`std`]'s collections. The same growth policy and the same error types are shared by
//! every container, so a [`Stack`](collections::contiguous::Stack) behaves exactly like the
//! [`Vector`](collections::contiguous::Vector) it is built on.
//!
//! # Method
//! All containers are generic over their element types. Where a container needs to order, hash
//! or compare its elements, the behavior comes from a trait with a default implementation
//! ([`NaturalOrder`](collections::binary_tree::NaturalOrder),
//! [`DefaultHashing`](collections::hash::DefaultHashing)) or from caller supplied functions
//! ([`FnOrder`](collections::binary_tree::FnOrder), [`FnHashing`](collections::hash::FnHashing)).
//!
//! # Error Handling
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with small
//! structs (often ZSTs) that implement [`Error`](std::error::Error). They are re-exported at the
//! root of the crate.
//!
//! Operations that can only fail by running out of memory have a `try_` variant returning an
//! [`AllocError`]. The plain versions panic, except for pushes, which drop the value and log a
//! warning. Imagine having to handle the possibility of a capacity
//! overflow every time you push into a Vector. Operations that fail because of the state of the
//! collection, such as popping from an empty [`Stack`](collections::contiguous::Stack) or reading
//! past the end of a [`Vector`](collections::contiguous::Vector), return a [`Result`] instead.
//!
//! # Logging
//! Failures that are tolerated or reported through a [`Result`] are also logged through the
//! [`log`] facade: a warning when a value is discarded because memory couldn't be allocated, and
//! debug records for failed shrinks and rejected operations. No logger is installed by this
//! crate.
//!
//! # Dependencies
//! This crate doesn't use [`Vec`] or any of [`std`]'s other collections outside of tests. It
//! depends on some derive macros because they're helpful and remove the need for some very
//! repetitive programming, and on [`log`] for diagnostics.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{
    AllocError, CapacityOverflow, EmptyCollection, IndexOutOfBounds, InsertError, OutOfMemory,
    Underflow,
};
