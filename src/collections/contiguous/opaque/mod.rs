//! A module containing [`OpaqueVector`], a type erased Vector of caller owned [`Handle`]s.

mod handle;
mod opaque_vector;

pub use handle::*;
pub use opaque_vector::*;
