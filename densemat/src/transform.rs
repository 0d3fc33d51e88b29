/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use densemat_vector::{order, transpose::transpose_into, SortOrder};

use crate::{selector::offset, Axis, Config, Matrix};

impl Matrix {
    /// Return the transpose of `self`: an `ncols x nrows` matrix with
    /// `result[(j, i)] == self[(i, j)]`.
    pub fn transposed(&self) -> Matrix {
        let (nrows, ncols) = self.shape();
        let mut data = vec![0.0f32; self.size()].into_boxed_slice();
        transpose_into(self.as_slice(), nrows, ncols, &mut data);
        Matrix::from_parts(data, ncols, nrows)
    }

    /// Transpose `self` in place, swapping its extents.
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Return the main diagonal `self[(k, k)]` for `k < min(nrows, ncols)` as a row
    /// vector.
    pub fn diagonal(&self) -> Matrix {
        let len = self.nrows().min(self.ncols());
        let data: Box<[f32]> = (0..len)
            .map(|k| self.as_slice()[offset(k, k, self.ncols())])
            .collect();
        Matrix::from_parts(data, 1, len)
    }

    /// Return a matrix of the same shape holding the elements of `self` in reverse
    /// row-major order.
    pub fn reversed(&self) -> Matrix {
        let mut out = self.clone();
        order::reverse(out.as_mut_slice());
        out
    }

    /// Mirror the matrix along `axis`.
    ///
    /// `Axis::Columns` reverses the order of the columns (each row is reversed).
    /// `Axis::Rows` reverses the order of the rows and keeps each row intact.
    ///
    /// ```
    /// use densemat::{Axis, Matrix};
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!(m.flip(Axis::Rows).as_slice(), &[5.0, 6.0, 3.0, 4.0, 1.0, 2.0]);
    /// assert_eq!(m.flip(Axis::Columns).as_slice(), &[2.0, 1.0, 4.0, 3.0, 6.0, 5.0]);
    /// ```
    pub fn flip(&self, axis: Axis) -> Matrix {
        match axis {
            Axis::Columns => {
                let mut out = self.clone();
                out.row_iter_mut().for_each(order::reverse);
                out
            }
            // Reversing the whole buffer also reverses every row; undo the latter.
            Axis::Rows => self.reversed().flip(Axis::Columns),
        }
    }

    /// Return a `1 x size` copy of `self` in row-major order.
    pub fn flatten(&self) -> Matrix {
        Matrix::from_parts(self.as_slice().into(), 1, self.size())
    }

    /// Return a copy of `self` with every row (`Axis::Rows`) or every column
    /// (`Axis::Columns`) sorted independently in `order`.
    ///
    /// Elements are compared with [`f32::total_cmp`].
    pub fn sorted(&self, axis: Axis, order: SortOrder) -> Matrix {
        let dispatch = Config::default().dispatch();
        match axis {
            Axis::Rows => {
                let mut out = self.clone();
                out.row_iter_mut()
                    .for_each(|row| order::sort(dispatch, row, order));
                out
            }
            Axis::Columns => {
                // Each column becomes a row of the intermediate, sorted the other way.
                // Transposing back and flipping the rows restores the requested order.
                let mut lanes = self.transposed();
                lanes
                    .row_iter_mut()
                    .for_each(|lane| order::sort(dispatch, lane, order.opposite()));
                lanes.transposed().flip(Axis::Rows)
            }
        }
    }
}

///////////
// Tests //
///////////
