/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

//! Row and column addressing.
//!
//! Every access to a [`Matrix`](crate::Matrix) buffer goes through this module: a
//! [`Selector`] names the requested rows or columns, [`Selector::resolve`] turns it into an
//! inclusive [`Span`] (or fails with `OutOfRange`), and [`offset`] maps a `(row, col)` pair
//! into the row-major buffer.

use std::{
    fmt,
    ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive},
};

use crate::MatrixError;

/// One of the two axes of a matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows => write!(f, "row"),
            Self::Columns => write!(f, "column"),
        }
    }
}

/// A selection of rows or columns.
///
/// Selectors are usually built implicitly from integers and Rust range expressions:
///
/// | expression | selector             | resolved span        |
/// |------------|----------------------|----------------------|
/// | `3usize`   | `Single(3)`          | `[3, 3]`             |
/// | `1..=3`    | `Inclusive(1, 3)`    | `[1, 3]`             |
/// | `1..4`     | `Exclusive(1, 4)`    | `[1, 3]`             |
/// | `2..`      | `From(2)`            | `[2, extent - 1]`    |
/// | `..=2`     | `Through(2)`         | `[0, 2]`             |
/// | `..3`      | `Exclusive(0, 3)`    | `[0, 2]`             |
/// | `..`       | `All`                | `[0, extent - 1]`    |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    Single(usize),
    Inclusive(usize, usize),
    Exclusive(usize, usize),
    From(usize),
    Through(usize),
    All,
}

impl Selector {
    /// Resolve `self` against an axis with `extent` positions.
    ///
    /// Open bounds are substituted with `0` and `extent - 1` first. The resulting bounds
    /// must then both be valid indices with `lo <= hi`; a reversed or empty range is an
    /// error rather than an empty selection.
    pub fn resolve(self, axis: Axis, extent: usize) -> Result<Span, MatrixError> {
        let error = || MatrixError::out_of_range(axis, self, extent);
        let last = extent.checked_sub(1).ok_or_else(error)?;

        let (lo, hi) = match self {
            Self::Single(i) => (i, i),
            Self::Inclusive(lo, hi) => (lo, hi),
            Self::Exclusive(lo, end) => (lo, end.checked_sub(1).ok_or_else(error)?),
            Self::From(lo) => (lo, last),
            Self::Through(hi) => (0, hi),
            Self::All => (0, last),
        };

        if lo > last || hi > last || lo > hi {
            return Err(error());
        }
        Ok(Span { lo, hi })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(i) => write!(f, "{i}"),
            Self::Inclusive(lo, hi) => write!(f, "{lo}..={hi}"),
            Self::Exclusive(lo, end) => write!(f, "{lo}..{end}"),
            Self::From(lo) => write!(f, "{lo}.."),
            Self::Through(hi) => write!(f, "..={hi}"),
            Self::All => write!(f, ".."),
        }
    }
}

impl From<usize> for Selector {
    fn from(i: usize) -> Self {
        Self::Single(i)
    }
}

impl From<RangeInclusive<usize>> for Selector {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::Inclusive(*range.start(), *range.end())
    }
}

impl From<Range<usize>> for Selector {
    fn from(range: Range<usize>) -> Self {
        Self::Exclusive(range.start, range.end)
    }
}

impl From<RangeFrom<usize>> for Selector {
    fn from(range: RangeFrom<usize>) -> Self {
        Self::From(range.start)
    }
}

impl From<RangeToInclusive<usize>> for Selector {
    fn from(range: RangeToInclusive<usize>) -> Self {
        Self::Through(range.end)
    }
}

impl From<RangeTo<usize>> for Selector {
    fn from(range: RangeTo<usize>) -> Self {
        Self::Exclusive(0, range.end)
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Self::All
    }
}

/// A resolved, non-empty, inclusive range of indices `[lo, hi]` along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    lo: usize,
    hi: usize,
}

impl Span {
    /// The first selected index.
    pub fn lo(&self) -> usize {
        self.lo
    }

    /// The last selected index.
    pub fn hi(&self) -> usize {
        self.hi
    }

    /// The number of selected indices. Always at least 1.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.hi - self.lo + 1
    }

    /// Iterate over the selected indices in increasing order.
    pub fn iter(&self) -> RangeInclusive<usize> {
        self.lo..=self.hi
    }
}

/// Return the linear offset of `(row, col)` in a row-major buffer with `ncols` columns.
#[inline]
pub fn offset(row: usize, col: usize, ncols: usize) -> usize {
    row * ncols + col
}

///////////
// Tests //
///////////
