/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use crate::{Config, Matrix, MatrixError};

impl Matrix {
    /// Return the matrix product `self * rhs`.
    ///
    /// The result has shape `(self.nrows(), rhs.ncols())`. Fails with
    /// [`MatrixError::ShapeMismatch`] unless `self.ncols() == rhs.nrows()`.
    pub fn matmul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        self.matmul_with(rhs, &Config::default())
    }

    /// Like [`Matrix::matmul`], with the thread count taken from `config`.
    pub fn matmul_with(&self, rhs: &Matrix, config: &Config) -> Result<Matrix, MatrixError> {
        if self.ncols() != rhs.nrows() {
            return Err(MatrixError::shape_mismatch(
                "matmul",
                self.shape(),
                rhs.shape(),
            ));
        }

        let (m, k, n) = (self.nrows(), self.ncols(), rhs.ncols());
        let parallelism = config.parallelism();
        tracing::debug!(m, n, k, ?parallelism, "dispatching sgemm");

        let mut data = vec![0.0f32; m * n].into_boxed_slice();
        densemat_linalg::sgemm(
            parallelism,
            m,
            n,
            k,
            self.as_slice(),
            rhs.as_slice(),
            &mut data,
        );
        Ok(Matrix::from_parts(data, m, n))
    }

    /// Replace `self` with the product `self * rhs`.
    ///
    /// The shape of `self` becomes `(self.nrows(), rhs.ncols())`. On a shape mismatch
    /// `self` is left unchanged.
    pub fn matmul_assign(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
        *self = self.matmul(rhs)?;
        Ok(())
    }
}

///////////
// Tests //
///////////
