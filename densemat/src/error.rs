/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use thiserror::Error;

use crate::selector::{Axis, Selector};

/// Errors returned by fallible [`Matrix`](crate::Matrix) operations.
///
/// Every check producing one of these errors runs before the receiver is touched, so a
/// failed operation never leaves a matrix partially modified.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum MatrixError {
    /// An index or range selects positions outside the matrix, or a range's lower bound
    /// exceeds its upper bound.
    #[error("{axis} selector {selector} is out of range for an extent of {extent}")]
    OutOfRange {
        axis: Axis,
        selector: Selector,
        extent: usize,
    },

    /// Operand shapes are incompatible for the requested operation.
    #[error(
        "shape mismatch in {op}: left is {}x{}, right is {}x{}",
        left.0, left.1, right.0, right.1
    )]
    ShapeMismatch {
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    },

    /// A nested-row constructor was given rows of unequal length.
    #[error("row {row} has {found} elements but row 0 has {expected}")]
    RaggedInput {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A matrix was requested with zero rows or zero columns.
    #[error("a matrix must have at least one row and one column (got {nrows}x{ncols})")]
    EmptyShape { nrows: usize, ncols: usize },

    /// The element count of the requested shape does not fit in a `usize`.
    #[error("a {nrows}x{ncols} matrix has more elements than fit in memory")]
    TooLarge { nrows: usize, ncols: usize },

    /// A random constructor was given an empty or non-finite range.
    #[error("invalid sampling range: {0}")]
    InvalidDistribution(#[from] rand::distr::uniform::Error),
}

impl MatrixError {
    pub(crate) fn shape_mismatch(
        op: &'static str,
        left: (usize, usize),
        right: (usize, usize),
    ) -> Self {
        tracing::debug!(op, ?left, ?right, "rejecting operation on mismatched shapes");
        Self::ShapeMismatch { op, left, right }
    }

    pub(crate) fn out_of_range(axis: Axis, selector: Selector, extent: usize) -> Self {
        tracing::debug!(%axis, %selector, extent, "rejecting out of range selector");
        Self::OutOfRange {
            axis,
            selector,
            extent,
        }
    }
}
