mod iter;
mod node;
mod ordered_set;
mod tests;

pub use iter::*;
pub(crate) use node::*;
pub use ordered_set::*;
