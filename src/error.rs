use std::error::Error;
use std::fmt;

/// An error from a `DynArray` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayError
{
    // we want to be able to change this representation later
    repr: ErrorKind,
}

impl ArrayError
{
    /// Create a new `ArrayError` with the given kind.
    #[inline]
    pub fn from_kind(kind: ErrorKind) -> ArrayError
    {
        ArrayError { repr: kind }
    }

    /// Return the `ErrorKind` of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind
    {
        self.repr
    }
}

/// Error code for an error from a `DynArray` operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind
{
    /// the backing buffer could not be allocated or grown
    AllocationFailed,
    /// an index lies outside the occupied region (after negative-index
    /// normalization)
    OutOfBounds,
    /// an order statistic was requested from an empty array
    EmptyArray,
}

#[inline(always)]
pub(crate) fn from_kind(k: ErrorKind) -> ArrayError
{
    ArrayError::from_kind(k)
}

impl Error for ArrayError {}

impl fmt::Display for ArrayError
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        let description = match self.kind() {
            ErrorKind::AllocationFailed => "could not allocate memory for the backing buffer",
            ErrorKind::OutOfBounds => "index out of bounds of the occupied region",
            ErrorKind::EmptyArray => "empty array has no order statistics",
        };
        f.write_str(description)
    }
}
