//! A module containing [`Queue`], a FIFO collection backed by a [`Vector`](super::Vector).
//!
//! [`Queue`] is also re-exported under the parent module.

mod queue;
mod tests;

pub use queue::*;
