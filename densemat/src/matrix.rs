/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::ops::{Index, IndexMut, Range, RangeInclusive};

use rand::{
    distr::{Distribution, Uniform},
    Rng,
};

use crate::{selector::offset, MatrixError};

/// A generator for initializing the entries in a matrix via [`Matrix::new`].
pub trait Generator<T> {
    fn generate(&mut self) -> T;
}

impl<T> Generator<T> for T
where
    T: Clone,
{
    fn generate(&mut self) -> T {
        self.clone()
    }
}

/// A matrix initializer that invokes the provided lambda to initialize each element.
pub struct Init<F>(pub F);

impl<T, F> Generator<T> for Init<F>
where
    F: FnMut() -> T,
{
    fn generate(&mut self) -> T {
        (self.0)()
    }
}

////////////
// Matrix //
////////////

/// An owned, dense, 2-dimensional matrix of `f32` laid out in row-major order.
///
/// Element `(r, c)` lives at position `r * ncols + c` of the underlying buffer, and the
/// buffer always holds exactly `nrows * ncols` elements. Both extents are at least 1:
/// every constructor rejects a zero-sized shape with [`MatrixError::EmptyShape`], and a
/// shape whose element count overflows `usize` with [`MatrixError::TooLarge`].
///
/// A `Matrix` never shares its buffer. Reading a region (see
/// [`Matrix::read_region`]) copies the selected elements into a new `Matrix`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: Box<[f32]>,
    nrows: usize,
    ncols: usize,
}

/// Validate a requested shape and return the number of elements it holds.
fn check_extents(nrows: usize, ncols: usize) -> Result<usize, MatrixError> {
    if nrows == 0 || ncols == 0 {
        tracing::debug!(nrows, ncols, "rejecting zero-sized matrix");
        return Err(MatrixError::EmptyShape { nrows, ncols });
    }
    nrows.checked_mul(ncols).ok_or_else(|| {
        tracing::debug!(nrows, ncols, "rejecting matrix whose length overflows usize");
        MatrixError::TooLarge { nrows, ncols }
    })
}

impl Matrix {
    /// Construct a new `Matrix` initialized with the contents of the generator.
    ///
    /// Elements are initialized in memory order.
    pub fn new<U>(mut generator: U, nrows: usize, ncols: usize) -> Result<Self, MatrixError>
    where
        U: Generator<f32>,
    {
        let len = check_extents(nrows, ncols)?;
        let data: Box<[f32]> = (0..len).map(|_| generator.generate()).collect();
        Ok(Self::from_parts(data, nrows, ncols))
    }

    /// Construct a `nrows x ncols` matrix with every element equal to `value`.
    pub fn filled(value: f32, nrows: usize, ncols: usize) -> Result<Self, MatrixError> {
        Self::new(value, nrows, ncols)
    }

    /// Try to construct a `Matrix` over the provided row-major data.
    ///
    /// The length of `data` must be equal to `nrows * ncols`.
    pub fn try_from<T>(data: T, nrows: usize, ncols: usize) -> Result<Self, MatrixError>
    where
        T: Into<Box<[f32]>>,
    {
        let len = check_extents(nrows, ncols)?;
        let data = data.into();
        if data.len() != len {
            return Err(MatrixError::shape_mismatch(
                "try_from",
                (nrows, ncols),
                (1, data.len()),
            ));
        }
        Ok(Self::from_parts(data, nrows, ncols))
    }

    /// Construct a single-row matrix whose contents are `data`.
    pub fn row_vector<T>(data: T) -> Result<Self, MatrixError>
    where
        T: Into<Box<[f32]>>,
    {
        let data = data.into();
        let ncols = data.len();
        Self::try_from(data, 1, ncols)
    }

    /// Construct a matrix from a sequence of rows.
    ///
    /// All rows must have the same, non-zero length. On jagged input, the first row whose
    /// length differs from row 0 is reported.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, MatrixError>
    where
        R: AsRef<[f32]>,
    {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.as_ref().len());
        let len = check_extents(nrows, ncols)?;

        let mut data = Vec::with_capacity(len);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != ncols {
                tracing::debug!(row, expected = ncols, found = values.len(), "ragged rows");
                return Err(MatrixError::RaggedInput {
                    row,
                    expected: ncols,
                    found: values.len(),
                });
            }
            data.extend_from_slice(values);
        }
        Ok(Self::from_parts(data.into(), nrows, ncols))
    }

    /// Construct a matrix of values drawn uniformly from the half-open `range`.
    ///
    /// Returns [`MatrixError::InvalidDistribution`] if the range is empty or not finite.
    pub fn random<R>(
        nrows: usize,
        ncols: usize,
        range: Range<f32>,
        rng: &mut R,
    ) -> Result<Self, MatrixError>
    where
        R: Rng + ?Sized,
    {
        let distribution = Uniform::new(range.start, range.end)?;
        Self::new(Init(|| distribution.sample(rng)), nrows, ncols)
    }

    /// Construct a matrix of values drawn uniformly from the closed `range`.
    ///
    /// Returns [`MatrixError::InvalidDistribution`] if the range is empty or not finite.
    pub fn random_inclusive<R>(
        nrows: usize,
        ncols: usize,
        range: RangeInclusive<f32>,
        rng: &mut R,
    ) -> Result<Self, MatrixError>
    where
        R: Rng + ?Sized,
    {
        let distribution = Uniform::new_inclusive(*range.start(), *range.end())?;
        Self::new(Init(|| distribution.sample(rng)), nrows, ncols)
    }

    /// Assemble a matrix from parts that are already known to be consistent.
    pub(crate) fn from_parts(data: Box<[f32]>, nrows: usize, ncols: usize) -> Self {
        debug_assert!(nrows > 0 && ncols > 0);
        debug_assert_eq!(data.len(), nrows * ncols);
        Self { data, nrows, ncols }
    }

    /// Return the number of columns in the matrix.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the number of rows in the matrix.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return `(nrows, ncols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the total number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Return the underlying data as a slice.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Return the underlying data as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Return row `row` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row(&self, row: usize) -> &[f32] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );
        let start = offset(row, 0, self.ncols);
        &self.data[start..start + self.ncols]
    }

    /// Return row `row` as a mutable slice.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.nrows()`.
    pub fn row_mut(&mut self, row: usize) -> &mut [f32] {
        assert!(
            row < self.nrows(),
            "tried to access row {row} of a matrix with {} rows",
            self.nrows()
        );
        let start = offset(row, 0, self.ncols);
        &mut self.data[start..start + self.ncols]
    }

    /// Return a iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter(&self) -> impl ExactSizeIterator<Item = &[f32]> {
        self.data.chunks_exact(self.ncols)
    }

    /// Return a mutable iterator over all rows in the matrix.
    ///
    /// Rows are yielded sequentially beginning with row 0.
    pub fn row_iter_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [f32]> {
        self.data.chunks_exact_mut(self.ncols)
    }

    /// Consume the matrix, returning the row-major buffer.
    pub fn into_inner(self) -> Box<[f32]> {
        self.data
    }
}

/// Return a reference to the item at entry `(row, col)` in the matrix.
///
/// Use [`Matrix::get`] for a non-panicking alternative.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(
            row < self.nrows(),
            "row {row} is out of bounds (max: {})",
            self.nrows()
        );
        assert!(
            col < self.ncols(),
            "col {col} is out of bounds (max: {})",
            self.ncols()
        );
        &self.data[offset(row, col, self.ncols)]
    }
}

/// Return a mutable reference to the item at entry `(row, col)` in the matrix.
///
/// Use [`Matrix::set`] for a non-panicking alternative.
///
/// # Panics
///
/// Panics if `row >= self.nrows()` or `col >= self.ncols()`.
impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        assert!(
            row < self.nrows(),
            "row {row} is out of bounds (max: {})",
            self.nrows()
        );
        assert!(
            col < self.ncols(),
            "col {col} is out of bounds (max: {})",
            self.ncols()
        );
        let ncols = self.ncols;
        &mut self.data[offset(row, col, ncols)]
    }
}

///////////
// Tests //
///////////
