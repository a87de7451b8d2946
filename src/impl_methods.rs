// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::slice;

use crate::error::{self, ArrayError, ErrorKind};
use crate::{DynArray, GROWTH_FACTOR};

impl DynArray
{
    /// Return the number of occupied slots.
    pub fn len(&self) -> usize
    {
        self.len
    }

    /// Return the number of allocated slots.
    pub fn capacity(&self) -> usize
    {
        self.items.len()
    }

    /// Return `true` if no slot is occupied.
    pub fn is_empty(&self) -> bool
    {
        self.len == 0
    }

    /// Return `true` if every allocated slot is occupied, i.e. the next
    /// insertion will grow the buffer.
    pub fn is_full(&self) -> bool
    {
        self.len == self.capacity()
    }

    /// Read the element at `index`.
    ///
    /// Negative indices count from the end: `-1` addresses the last
    /// element, `-len` the first. Fails with [`ErrorKind::OutOfBounds`]
    /// when the normalized index falls outside `[0, len)`.
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let a = DynArray::from_vec(vec![10, 20, 30]);
    /// assert_eq!(a.get(0), Ok(10));
    /// assert_eq!(a.get(-1), Ok(30));
    /// assert!(a.get(3).is_err());
    /// ```
    pub fn get(&self, index: isize) -> Result<i32, ArrayError>
    {
        let ix = self.normalize(index)?;
        Ok(self.items[ix])
    }

    /// Return the occupied region as a slice.
    pub fn as_slice(&self) -> &[i32]
    {
        &self.items[..self.len]
    }

    /// Return the entire allocated buffer, unoccupied slots included.
    ///
    /// Slots at positions `len..` are zero-filled and carry no meaningful
    /// values; this view exists for diagnostics.
    pub fn as_entire_slice(&self) -> &[i32]
    {
        &self.items
    }

    /// Return an iterator over the occupied region.
    pub fn iter(&self) -> slice::Iter<'_, i32>
    {
        self.as_slice().iter()
    }

    /// Return the occupied region as a vector.
    pub fn to_vec(&self) -> Vec<i32>
    {
        self.as_slice().to_vec()
    }

    /// Append `value` at the end, growing the buffer first when full.
    ///
    /// Amortized O(1); O(len) on a growth step. Fails with
    /// [`ErrorKind::AllocationFailed`] only if growth cannot obtain memory,
    /// in which case the array is unchanged.
    pub fn push(&mut self, value: i32) -> Result<(), ArrayError>
    {
        if self.is_full() {
            self.try_grow()?;
        }
        self.items[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element, or `None` on an empty array.
    ///
    /// The vacated slot is zero-filled; the capacity is unchanged.
    pub fn pop(&mut self) -> Option<i32>
    {
        if self.is_empty() {
            return None;
        }
        self.len -= 1;
        let value = self.items[self.len];
        self.items[self.len] = 0;
        Some(value)
    }

    /// Insert `value` at `index`, shifting the elements from `index` onward
    /// one slot toward the end.
    ///
    /// Valid indices are `[0, len]`; `index == len` appends. Grows the
    /// buffer first when full. O(len).
    pub fn insert(&mut self, index: usize, value: i32) -> Result<(), ArrayError>
    {
        if index > self.len {
            return Err(error::from_kind(ErrorKind::OutOfBounds));
        }
        if self.is_full() {
            self.try_grow()?;
        }
        self.items.copy_within(index..self.len, index + 1);
        self.items[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting the elements
    /// after it one slot toward the start.
    ///
    /// Accepts the same negative-index convention as [`get`](DynArray::get);
    /// valid indices normalize into `[0, len)`. The vacated tail slot is
    /// zero-filled and the capacity is unchanged. O(len).
    pub fn remove(&mut self, index: isize) -> Result<i32, ArrayError>
    {
        let ix = self.normalize(index)?;
        let value = self.items[ix];
        self.items.copy_within(ix + 1..self.len, ix);
        self.len -= 1;
        self.items[self.len] = 0;
        Ok(value)
    }

    /// Remove every element. The capacity is unchanged and all slots are
    /// zero-filled.
    pub fn clear(&mut self)
    {
        self.items[..self.len].fill(0);
        self.len = 0;
    }

    /// Map `index` into `[0, len)`, resolving the negative convention.
    fn normalize(&self, index: isize) -> Result<usize, ArrayError>
    {
        let len = self.len as isize;
        if index < -len || index >= len {
            return Err(error::from_kind(ErrorKind::OutOfBounds));
        }
        let ix = if index < 0 { index + len } else { index };
        Ok(ix as usize)
    }

    /// Grow the buffer by [`GROWTH_FACTOR`], preserving every element at
    /// its position. New slots are zero-filled.
    fn try_grow(&mut self) -> Result<(), ArrayError>
    {
        let new_cap = self.capacity() * GROWTH_FACTOR;
        let additional = new_cap - self.items.len();
        self.items
            .try_reserve_exact(additional)
            .map_err(|_| error::from_kind(ErrorKind::AllocationFailed))?;
        self.items.resize(new_cap, 0);
        Ok(())
    }
}
