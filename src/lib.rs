// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The `dynarray` crate provides [`DynArray`], a growable one-dimensional
//! array of `i32` values with an explicit, observable capacity.
//!
//! Unlike `Vec`, the allocated capacity is part of the container's contract:
//! it is queryable, it grows only by the documented [`GROWTH_FACTOR`] step
//! when an insertion hits a full buffer, and it never shrinks. Indexed reads
//! and removals accept negative indices counted from the end (`-1` addresses
//! the last element). Rotation, reversal, non-mutating sort and order
//! statistics round out the surface.
//!
//! ```rust
//! use dynarray::{DynArray, SortOrder};
//!
//! let mut a = DynArray::new();
//! a.push(3).unwrap();
//! a.push(1).unwrap();
//! a.push(2).unwrap();
//!
//! assert_eq!(format!("{}", a), "[3, 1, 2]");
//! assert_eq!(a.get(-1), Ok(2));
//! assert_eq!(a.sorted(SortOrder::Ascending).as_slice(), &[1, 2, 3]);
//! assert_eq!(a.max(), Ok(3));
//! ```
//!
//! Random fill lives in the sibling `dynarray-rand` crate, which integrates
//! with `rand`.

pub use crate::error::{ArrayError, ErrorKind};

mod arrayformat;
mod arraytraits;
mod error;
mod impl_constructors;
mod impl_methods;
mod impl_reorder;

/// Capacity used by [`DynArray::new`]: a single slot.
pub const INITIAL_CAPACITY: usize = 1;

/// Multiplicative step applied to the capacity when a full array takes an
/// insertion. Must be greater than 1.
///
/// Earlier revisions of this container grew by a 1.2 factor; the exact
/// constant is tunable and not semantically load-bearing. Doubling keeps the
/// arithmetic integral and makes a growth step from capacity 1 actually grow.
pub const GROWTH_FACTOR: usize = 2;

/// A growable one-dimensional array of `i32` with an explicit, observable
/// capacity.
///
/// Two counters describe the container: `capacity` is the number of
/// allocated slots and `len` the number of occupied ones, with
/// `len <= capacity` at all times. Positions `[0, len)` hold meaningful
/// values; the remaining slots are kept zero-filled and are only ever
/// exposed through the diagnostic views ([`as_entire_slice`] and the `Debug`
/// formatting).
///
/// The capacity never shrinks. It grows only when `push` or `insert` find
/// the buffer full, by the [`GROWTH_FACTOR`] step, preserving every element
/// at its position.
///
/// [`as_entire_slice`]: DynArray::as_entire_slice
pub struct DynArray
{
    // items.len() is the allocated capacity; slots at positions len.. are
    // zero-filled.
    items: Vec<i32>,
    len: usize,
}

/// Element ordering selector for [`DynArray::sorted`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SortOrder
{
    /// Non-decreasing order.
    Ascending,
    /// Non-increasing order.
    Descending,
}
