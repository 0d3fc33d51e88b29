/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::ops::Range;

use crate::{
    selector::{offset, Axis, Selector, Span},
    Matrix, MatrixError,
};

/// A resolved rectangular selection over a row-major buffer with `ncols` columns.
///
/// Each selected row contributes one contiguous run of `cols.len()` elements. Successive
/// runs are `ncols` elements apart, so a column selection is a run of length 1 with stride
/// `ncols`.
#[derive(Debug, Clone, Copy)]
struct Region {
    rows: Span,
    cols: Span,
    ncols: usize,
}

impl Region {
    fn resolve(matrix: &Matrix, rows: Selector, cols: Selector) -> Result<Self, MatrixError> {
        let rows = rows.resolve(Axis::Rows, matrix.nrows())?;
        let cols = cols.resolve(Axis::Columns, matrix.ncols())?;
        Ok(Self {
            rows,
            cols,
            ncols: matrix.ncols(),
        })
    }

    fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.cols.len())
    }

    /// Return the buffer range covered by each selected row, top to bottom.
    fn runs(&self) -> impl Iterator<Item = Range<usize>> {
        let Self { rows, cols, ncols } = *self;
        rows.iter().map(move |row| {
            let start = offset(row, cols.lo(), ncols);
            start..start + cols.len()
        })
    }

    /// The number of buffer elements between the first and last selected element,
    /// inclusive.
    fn linear_length(&self) -> usize {
        (self.rows.len() - 1) * self.ncols + self.cols.len()
    }
}

impl Matrix {
    /// Return the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<f32, MatrixError> {
        let region = Region::resolve(self, row.into(), col.into())?;
        Ok(self.as_slice()[offset(region.rows.lo(), region.cols.lo(), region.ncols)])
    }

    /// Overwrite the element at `(row, col)` with `value`.
    pub fn set(&mut self, row: usize, col: usize, value: f32) -> Result<(), MatrixError> {
        let region = Region::resolve(self, row.into(), col.into())?;
        self.as_mut_slice()[offset(region.rows.lo(), region.cols.lo(), region.ncols)] = value;
        Ok(())
    }

    /// Copy the selected rows and columns into a new matrix.
    ///
    /// A single row index with a column range yields a `1 x count` row vector; a row range
    /// with a single column index yields a `count x 1` column vector.
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap();
    /// let col = m.read_region(.., 1usize).unwrap();
    /// assert_eq!(col.shape(), (2, 1));
    /// assert_eq!(col.as_slice(), &[2.0, 5.0]);
    ///
    /// let tail = m.read_region(1usize, 1..).unwrap();
    /// assert_eq!(tail.as_slice(), &[5.0, 6.0]);
    /// ```
    pub fn read_region<R, C>(&self, rows: R, cols: C) -> Result<Matrix, MatrixError>
    where
        R: Into<Selector>,
        C: Into<Selector>,
    {
        let region = Region::resolve(self, rows.into(), cols.into())?;
        let (nrows, ncols) = region.shape();
        let src = self.as_slice();
        debug_assert!(
            offset(region.rows.lo(), region.cols.lo(), region.ncols) + region.linear_length()
                <= src.len()
        );

        let mut data = Vec::with_capacity(nrows * ncols);
        for run in region.runs() {
            data.extend_from_slice(&src[run]);
        }
        Ok(Matrix::from_parts(data.into(), nrows, ncols))
    }

    /// Overwrite the selected rows and columns with the contents of `value`.
    ///
    /// `value` must have exactly the shape of the selection, otherwise
    /// [`MatrixError::ShapeMismatch`] is returned and `self` is left unchanged.
    pub fn write_region<R, C>(
        &mut self,
        rows: R,
        cols: C,
        value: &Matrix,
    ) -> Result<(), MatrixError>
    where
        R: Into<Selector>,
        C: Into<Selector>,
    {
        let region = Region::resolve(self, rows.into(), cols.into())?;
        if region.shape() != value.shape() {
            return Err(MatrixError::shape_mismatch(
                "write_region",
                region.shape(),
                value.shape(),
            ));
        }

        let dst = self.as_mut_slice();
        for (run, src) in region.runs().zip(value.row_iter()) {
            dst[run].copy_from_slice(src);
        }
        Ok(())
    }

    /// Read the selected region, pass it through `f` and write the result back.
    ///
    /// This is how compound assignment on a slice is expressed:
    ///
    /// ```
    /// use densemat::Matrix;
    ///
    /// let mut m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// m.update_region(1usize, .., |r| Ok(r * 10.0)).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 30.0, 40.0]);
    /// ```
    ///
    /// If `f` fails, or returns a matrix whose shape differs from the selection, the error
    /// is returned and `self` is left unchanged.
    pub fn update_region<R, C, F>(&mut self, rows: R, cols: C, f: F) -> Result<(), MatrixError>
    where
        R: Into<Selector>,
        C: Into<Selector>,
        F: FnOnce(Matrix) -> Result<Matrix, MatrixError>,
    {
        let (rows, cols) = (rows.into(), cols.into());
        let updated = f(self.read_region(rows, cols)?)?;
        self.write_region(rows, cols, &updated)
    }
}

///////////
// Tests //
///////////
