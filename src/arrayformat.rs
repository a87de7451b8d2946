// Copyright 2026 dynarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::fmt;

use crate::DynArray;

fn format_slice<F>(slice: &[i32], f: &mut fmt::Formatter<'_>, mut format: F) -> fmt::Result
where F: FnMut(&i32, &mut fmt::Formatter<'_>) -> fmt::Result
{
    write!(f, "[")?;
    let mut first = true;
    for elt in slice {
        if !first {
            write!(f, ", ")?;
        }
        first = false;
        format(elt, f)?;
    }
    write!(f, "]")
}

/// Format the occupied region as a comma-separated bracketed list, applying
/// the formatting parameters to each element.
impl fmt::Display for DynArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_slice(self.as_slice(), f, fmt::Display::fmt)
    }
}

/// Format the entire allocated buffer, with length and capacity appended.
///
/// Unoccupied (zero-filled) slots are shown too; this is the diagnostic
/// view.
impl fmt::Debug for DynArray
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        format_slice(self.as_entire_slice(), f, fmt::Display::fmt)?;
        write!(f, " len={}, capacity={}", self.len(), self.capacity())
    }
}
