/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use faer::mat::{MatMut, MatRef};

/// Write the transpose of the row-major `nrows x ncols` matrix `src` into `dst`, which is
/// interpreted as a row-major `ncols x nrows` matrix.
///
/// ```text
///  src (2 x 3)        dst (3 x 2)
///  a0 a1 a2           a0 b0
///  b0 b1 b2    ->     a1 b1
///                     a2 b2
/// ```
///
/// # Panics
///
/// Panics if `src.len() != nrows * ncols` or `dst.len() != nrows * ncols`.
pub fn transpose_into(src: &[f32], nrows: usize, ncols: usize, dst: &mut [f32]) {
    assert_eq!(
        src.len(),
        nrows * ncols,
        "expected {}x{} source to have length {}, instead got {}",
        nrows,
        ncols,
        nrows * ncols,
        src.len()
    );
    assert_eq!(
        dst.len(),
        nrows * ncols,
        "expected {}x{} destination to have length {}, instead got {}",
        ncols,
        nrows,
        nrows * ncols,
        dst.len()
    );

    let src = MatRef::from_row_major_slice(src, nrows, ncols);
    MatMut::from_row_major_slice_mut(dst, ncols, nrows).copy_from(src.transpose());
}
