use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator returned null for a request of `bytes` bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Memory allocation of {bytes} bytes failed!")]
pub struct OutOfMemory {
    pub bytes: usize,
}

/// Removal from an empty Stack or Queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Underflow;

impl Display for Underflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Underflow: attempted to remove from an empty collection!")
    }
}

impl Error for Underflow {}

/// Reading the front, back or top of an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCollection;

impl Display for EmptyCollection {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty collection!")
    }
}

impl Error for EmptyCollection {}

/// Any failure to obtain memory: either the layout itself is too large or the allocator refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum AllocError {
    CapacityOverflow(CapacityOverflow),
    OutOfMemory(OutOfMemory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, TryInto, IsVariant)]
pub enum InsertError {
    IndexOutOfBounds(IndexOutOfBounds),
    Alloc(AllocError),
}

impl From<CapacityOverflow> for InsertError {
    fn from(value: CapacityOverflow) -> Self {
        InsertError::Alloc(value.into())
    }
}

impl From<OutOfMemory> for InsertError {
    fn from(value: OutOfMemory) -> Self {
        InsertError::Alloc(value.into())
    }
}
