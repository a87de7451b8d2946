// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Constructor methods for `DynArray`.

use crate::error::{self, ArrayError, ErrorKind};
use crate::{DynArray, INITIAL_CAPACITY};

/// # Constructor Methods
impl DynArray
{
    /// Create an empty array with the default initial capacity
    /// ([`INITIAL_CAPACITY`], one slot).
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let a = DynArray::new();
    /// assert!(a.is_empty());
    /// assert_eq!(a.capacity(), 1);
    /// ```
    pub fn new() -> DynArray
    {
        DynArray::with_capacity(INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    ///
    /// A requested capacity of zero is bumped to one slot; the array never
    /// exists without allocated storage.
    ///
    /// **Panics** (aborts, via the global allocator) if the backing buffer
    /// cannot be allocated; use [`try_with_capacity`](DynArray::try_with_capacity)
    /// to handle that case.
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let a = DynArray::with_capacity(8);
    /// assert_eq!(a.len(), 0);
    /// assert_eq!(a.capacity(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> DynArray
    {
        let capacity = capacity.max(1);
        DynArray {
            items: vec![0; capacity],
            len: 0,
        }
    }

    /// Fallible variant of [`with_capacity`](DynArray::with_capacity):
    /// allocation failure is reported as [`ErrorKind::AllocationFailed`]
    /// instead of terminating, so the caller decides whether to abort.
    pub fn try_with_capacity(capacity: usize) -> Result<DynArray, ArrayError>
    {
        let capacity = capacity.max(1);
        let mut items = Vec::new();
        items
            .try_reserve_exact(capacity)
            .map_err(|_| error::from_kind(ErrorKind::AllocationFailed))?;
        items.resize(capacity, 0);
        Ok(DynArray { items, len: 0 })
    }

    /// Create an array from a vector; length and capacity both equal the
    /// vector's length (an empty vector still yields one allocated slot).
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let a = DynArray::from_vec(vec![1, 2, 3]);
    /// assert_eq!(a.len(), 3);
    /// assert!(a.is_full());
    /// ```
    pub fn from_vec(v: Vec<i32>) -> DynArray
    {
        let len = v.len();
        let mut items = v;
        if items.is_empty() {
            items.push(0);
        }
        DynArray { items, len }
    }

    /// Create an array from an iterable.
    ///
    /// ```rust
    /// use dynarray::DynArray;
    ///
    /// let a = DynArray::from_iter((0..5).map(|x| x * x));
    /// assert_eq!(a.as_slice(), &[0, 1, 4, 9, 16]);
    /// ```
    pub fn from_iter<I>(iterable: I) -> DynArray
    where I: IntoIterator<Item = i32>
    {
        DynArray::from_vec(iterable.into_iter().collect())
    }
}
