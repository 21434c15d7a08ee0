use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// A single index fell outside the valid range of the list it was used with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for list with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A (start index, count) range reached past the end of the list it was used with.
///
/// Kept distinct from [`IndexOutOfBounds`] so the failure names both offending arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeOutOfBounds {
    pub index: usize,
    pub count: usize,
    pub len: usize,
}

impl Display for RangeOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range starting at {} with {} elements out of bounds for list with {} elements!",
            self.index, self.count, self.len
        )
    }
}

impl Error for RangeOutOfBounds {}

/// A search found no matching element.
///
/// This is deliberately not conflated with the out-of-bounds errors: "you asked for a position
/// that doesn't exist" and "nothing matched" are different failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "No matching element found!")
    }
}

impl Error for NotFound {}

/// Aggregate of every error the list can return, for callers funnelling multiple operations
/// through one error path.
#[derive(Debug, Display, Error, From, TryInto, IsVariant)]
pub enum ListError {
    IndexOutOfBounds(IndexOutOfBounds),
    RangeOutOfBounds(RangeOutOfBounds),
    NotFound(NotFound),
}
