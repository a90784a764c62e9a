//! Contiguous collection types. [`Array`] is a fixed size heap buffer and [`Vector`] grows and
//! shrinks on top of it. [`Stack`] and [`Queue`] each wrap a single Vector, and [`OpaqueVector`]
//! stores untyped [`Handle`]s with the same policy.

pub mod array;
pub mod opaque;
pub mod queue;
pub mod stack;
pub mod vector;

#[doc(inline)]
pub use array::{Array, IntoIter};
#[doc(inline)]
pub use opaque::{Handle, OpaqueVector};
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;
#[doc(inline)]
pub use vector::Vector;
