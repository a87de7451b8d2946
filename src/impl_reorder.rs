// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Reordering methods and order statistics.

use crate::error::{self, ArrayError, ErrorKind};
use crate::{DynArray, SortOrder};

/// # Reordering and Order Statistics
impl DynArray
{
    /// Rotate the occupied region `n` steps toward index 0; elements
    /// falling off the front wrap around to the end.
    ///
    /// The step count is taken modulo the length. Rotating an empty array
    /// is a no-op. O(len), with the same end state as `n % len` single-step
    /// rotations.
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let mut a = DynArray::from_vec(vec![1, 2, 3, 4, 5]);
    /// a.rotate_left(2);
    /// assert_eq!(a.as_slice(), &[3, 4, 5, 1, 2]);
    /// ```
    pub fn rotate_left(&mut self, n: usize)
    {
        if self.len == 0 {
            return;
        }
        let n = n % self.len;
        self.items[..self.len].rotate_left(n);
    }

    /// Mirror of [`rotate_left`](DynArray::rotate_left): rotate toward the
    /// highest index, wrapping the back element(s) around to the front.
    pub fn rotate_right(&mut self, n: usize)
    {
        if self.len == 0 {
            return;
        }
        let n = n % self.len;
        self.items[..self.len].rotate_right(n);
    }

    /// Reverse the occupied region in place.
    pub fn reverse(&mut self)
    {
        self.items[..self.len].reverse();
    }

    /// Return a sorted copy of this array; the source is left untouched.
    ///
    /// The copy has the same length and capacity. The sort is unstable:
    /// equal elements may end up in either relative order.
    ///
    /// ```rust
    /// use dynarray::{DynArray, SortOrder};
    ///
    /// let a = DynArray::from_vec(vec![3, 1, 2]);
    /// assert_eq!(a.sorted(SortOrder::Ascending).as_slice(), &[1, 2, 3]);
    /// assert_eq!(a.sorted(SortOrder::Descending).as_slice(), &[3, 2, 1]);
    /// assert_eq!(a.as_slice(), &[3, 1, 2]);
    /// ```
    pub fn sorted(&self, order: SortOrder) -> DynArray
    {
        let mut out = self.clone();
        let occupied = &mut out.items[..out.len];
        match order {
            SortOrder::Ascending => occupied.sort_unstable(),
            SortOrder::Descending => occupied.sort_unstable_by(|a, b| b.cmp(a)),
        }
        out
    }

    /// Return the smallest element.
    ///
    /// Fails with [`ErrorKind::EmptyArray`] on an empty array; an order
    /// statistic over zero elements has no value to report.
    pub fn min(&self) -> Result<i32, ArrayError>
    {
        self.iter()
            .copied()
            .min()
            .ok_or_else(|| error::from_kind(ErrorKind::EmptyArray))
    }

    /// Return the largest element.
    ///
    /// Fails with [`ErrorKind::EmptyArray`] on an empty array.
    pub fn max(&self) -> Result<i32, ArrayError>
    {
        self.iter()
            .copied()
            .max()
            .ok_or_else(|| error::from_kind(ErrorKind::EmptyArray))
    }
}
