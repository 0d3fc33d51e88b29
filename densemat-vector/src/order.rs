/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

//! Ordering kernels: sorting and reversal.

#[cfg(feature = "rayon")]
use rayon::slice::ParallelSliceMut;

use crate::Dispatch;

/// The direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    /// Return the opposite direction.
    pub fn opposite(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    fn compare(self, a: &f32, b: &f32) -> std::cmp::Ordering {
        match self {
            Self::Ascending => a.total_cmp(b),
            Self::Descending => b.total_cmp(a),
        }
    }
}

/// Sort `x` in place in the requested order.
///
/// Elements are ordered with IEEE-754 `totalOrder` (see [`f32::total_cmp`]), so `-0.0`
/// sorts before `0.0` and positive `NaN`s sort after `+inf` in ascending order.
pub fn sort(dispatch: Dispatch, x: &mut [f32], order: SortOrder) {
    if dispatch.is_parallel(x.len()) {
        tracing::trace!(len = x.len(), ?order, "parallel sort");
        sort_parallel(x, order);
    } else {
        x.sort_unstable_by(|a, b| order.compare(a, b));
    }
}

#[cfg(feature = "rayon")]
fn sort_parallel(x: &mut [f32], order: SortOrder) {
    x.par_sort_unstable_by(|a, b| order.compare(a, b));
}

#[cfg(not(feature = "rayon"))]
fn sort_parallel(x: &mut [f32], order: SortOrder) {
    x.sort_unstable_by(|a, b| order.compare(a, b));
}

/// Reverse `x` in place: position `p` swaps with position `len - 1 - p`.
pub fn reverse(x: &mut [f32]) {
    x.reverse();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(SortOrder::Ascending.opposite(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.opposite(), SortOrder::Ascending);
    }

    #[rstest]
    fn test_sort(#[values(Dispatch::sequential(), Dispatch::with_threshold(1))] dispatch: Dispatch) {
        let mut x = vec![3.0, -1.0, 2.5, 0.0, -7.0];
        sort(dispatch, &mut x, SortOrder::Ascending);
        assert_eq!(x, [-7.0, -1.0, 0.0, 2.5, 3.0]);

        sort(dispatch, &mut x, SortOrder::Descending);
        assert_eq!(x, [3.0, 2.5, 0.0, -1.0, -7.0]);
    }

    #[test]
    fn test_sort_total_order() {
        let mut x = vec![f32::NAN, 1.0, f32::INFINITY, -0.0, 0.0];
        sort(Dispatch::sequential(), &mut x, SortOrder::Ascending);
        assert_eq!(x[0].to_bits(), (-0.0f32).to_bits());
        assert_eq!(x[1].to_bits(), 0.0f32.to_bits());
        assert_eq!(x[2], 1.0);
        assert_eq!(x[3], f32::INFINITY);
        assert!(x[4].is_nan());
    }

    #[test]
    fn test_reverse() {
        let mut x = vec![1.0, 2.0, 3.0, 4.0];
        reverse(&mut x);
        assert_eq!(x, [4.0, 3.0, 2.0, 1.0]);

        let mut empty: Vec<f32> = vec![];
        reverse(&mut empty);
        assert!(empty.is_empty());
    }
}
