//! A module containing [`Stack`], a LIFO collection backed by a [`Vector`](super::Vector).
//!
//! [`Stack`] is also re-exported under the parent module.

mod stack;
mod tests;

pub use stack::*;
