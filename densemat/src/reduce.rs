/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use densemat_vector::reduce;

use crate::{Axis, Config, Matrix};

impl Matrix {
    /// Apply `f` to every row (`Axis::Rows`) or every column (`Axis::Columns`).
    fn reduce_lanes<T, F>(&self, axis: Axis, f: F) -> Vec<T>
    where
        F: FnMut(&[f32]) -> T,
    {
        match axis {
            Axis::Rows => self.row_iter().map(f).collect(),
            Axis::Columns => self.transposed().row_iter().map(f).collect(),
        }
    }

    /// Return the sum of all elements.
    pub fn sum(&self) -> f32 {
        reduce::sum(Config::default().dispatch(), self.as_slice())
    }

    /// Return the sum of each row (`Axis::Rows`, length `nrows`) or of each column
    /// (`Axis::Columns`, length `ncols`).
    pub fn sum_axis(&self, axis: Axis) -> Vec<f32> {
        let dispatch = Config::default().dispatch();
        self.reduce_lanes(axis, |lane| reduce::sum(dispatch, lane))
    }

    /// Return the position of the maximum within each row or column.
    ///
    /// Ties resolve to the first occurrence. `NaN` is never selected unless a lane holds
    /// nothing else.
    pub fn argmax(&self, axis: Axis) -> Vec<usize> {
        self.reduce_lanes(axis, reduce::argmax)
    }

    /// Return the position of the minimum within each row or column.
    ///
    /// Ties resolve to the first occurrence. `NaN` is never selected unless a lane holds
    /// nothing else.
    pub fn argmin(&self, axis: Axis) -> Vec<usize> {
        self.reduce_lanes(axis, reduce::argmin)
    }

    /// Return the number of elements equal to zero. Both `0.0` and `-0.0` count.
    pub fn count_zeros(&self) -> usize {
        reduce::count_zeros(self.as_slice())
    }

    /// Return the number of elements not equal to zero. `NaN` counts as non-zero.
    pub fn count_nonzeros(&self) -> usize {
        self.size() - self.count_zeros()
    }
}

///////////
// Tests //
///////////
