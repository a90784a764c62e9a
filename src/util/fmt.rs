use std::cell::Cell;
use std::fmt::{self, Debug, Formatter};

/// Debug prints the items of an iterator as a list, without collecting them first. The iterator
/// is consumed by the first call to `fmt`; later calls print an empty list.
pub struct DebugIter<I>(Cell<Option<I>>);

impl<I> DebugIter<I> {
    pub fn new(iter: I) -> DebugIter<I> {
        DebugIter(Cell::new(Some(iter)))
    }
}

impl<I> Debug for DebugIter<I>
where
    I: Iterator,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        if let Some(iter) = self.0.take() {
            list.entries(iter);
        }
        list.finish()
    }
}
