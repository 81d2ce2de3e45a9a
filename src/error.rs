use core::fmt::{self, Display};

/// The error type for heap operations whose preconditions were not met.
///
/// The engine reports these instead of returning a placeholder value, so a
/// caller that pops an empty collection or addresses a stale index finds out
/// at the call site.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HeapError {
    /// An element was requested from a collection of length zero.
    Empty,

    /// An index outside `0..len` was passed to `remove` or `fix`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// The collection's length at the time of the call.
        len: usize,
    },
}

impl HeapError {
    #[inline]
    pub(crate) fn check_index(index: usize, len: usize) -> Result<(), HeapError> {
        if index < len {
            Ok(())
        } else {
            Err(HeapError::IndexOutOfBounds { index, len })
        }
    }
}

impl Display for HeapError {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HeapError::Empty => fmt.write_str("heap is empty"),
            HeapError::IndexOutOfBounds { index, len } => {
                write!(fmt, "index {index} is out of bounds for a heap of length {len}")
            }
        }
    }
}

#[cfg(any(feature = "std", feature = "error_in_core"))]
impl crate::polyfill::Error for HeapError {}
