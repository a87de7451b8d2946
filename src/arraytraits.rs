use std::hash;
use std::ops::Index;

use crate::DynArray;

impl PartialEq for DynArray
{
    /// Return `true` if both arrays have the same length and equal elements
    /// in the occupied region. Capacity is not compared.
    fn eq(&self, other: &DynArray) -> bool
    {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for DynArray {}

impl hash::Hash for DynArray
{
    fn hash<H: hash::Hasher>(&self, state: &mut H)
    {
        self.as_slice().hash(state)
    }
}

impl Default for DynArray
{
    /// An empty array with the default initial capacity.
    fn default() -> DynArray
    {
        DynArray::new()
    }
}

/// Access an occupied slot by non-negative index.
///
/// **Panics** if `index` is not in `[0, len)`. Use [`DynArray::get`] for a
/// fallible read or for the negative-index convention.
impl Index<usize> for DynArray
{
    type Output = i32;
    #[inline]
    fn index(&self, index: usize) -> &i32
    {
        &self.as_slice()[index]
    }
}

impl FromIterator<i32> for DynArray
{
    fn from_iter<I: IntoIterator<Item = i32>>(iterable: I) -> DynArray
    {
        DynArray::from_vec(iterable.into_iter().collect())
    }
}

/// Append every yielded element, growing as needed.
///
/// **Panics** on allocation failure; the `Extend` contract has no error
/// channel.
impl Extend<i32> for DynArray
{
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iterable: I)
    {
        for elt in iterable {
            if self.push(elt).is_err() {
                panic!("dynarray: allocation failed while extending");
            }
        }
    }
}

impl<'a> IntoIterator for &'a DynArray
{
    type Item = &'a i32;
    type IntoIter = std::slice::Iter<'a, i32>;

    fn into_iter(self) -> Self::IntoIter
    {
        self.iter()
    }
}

impl From<Vec<i32>> for DynArray
{
    fn from(v: Vec<i32>) -> DynArray
    {
        DynArray::from_vec(v)
    }
}

impl Clone for DynArray
{
    fn clone(&self) -> DynArray
    {
        DynArray {
            items: self.items.clone(),
            len: self.len,
        }
    }

    /// `DynArray` implements `.clone_from()` to reuse the destination's
    /// existing allocation where possible. Semantically equivalent to
    /// `*self = other.clone()`: same length, same capacity, independent
    /// buffer.
    fn clone_from(&mut self, other: &Self)
    {
        self.items.clone_from(&other.items);
        self.len = other.len;
    }
}
