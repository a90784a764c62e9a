use super::Vector;
use crate::collections::contiguous::Array;
#[doc(inline)]
pub use crate::collections::contiguous::array::IntoIter;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (ptr, len, cap) = self.into_parts();
        // SAFETY: The parts describe the Vector's whole allocation, and every element of an
        // Array<MaybeUninit<T>> counts as initialized.
        let buf = unsafe { Array::from_parts(ptr, cap) };
        IntoIter::from_buffer(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;

    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
