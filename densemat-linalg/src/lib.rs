/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

pub mod common;
pub use common::Parallelism;

mod faer;
use faer::sgemm_impl;

// Make the reference implementation available for internal testing.
#[cfg(test)]
mod reference;

/// Matrix-matrix multiplication for implicit row-major matrices `a` and `b` using the
/// implicit row-major matrix `c` as the destination.
///
/// Performs:
/// ```ignore
/// c = a * b
/// ```
///
/// The destination `c` is completely over-written and its prior contents (including any
/// `NaN`s) do not influence the result.
///
/// * `parallelism`: How many threads the multiplication may use.
/// * `m`: The number of rows in `a` and `c`.
/// * `n`: The number of columns in `b` and `c`.
/// * `k`: The number of columns in `a` and the number of rows in `b`.
/// * `a`: The matrix `a` with dimension `m x k`.
/// * `b`: The matrix `b` with dimension `k x n`.
/// * `c`: The output matrix with dimension `m x n`.
///
/// # Note
///
/// This is a narrowed version of the cblas `sgemm` interface: only dense row-major
/// operands without implicit transposition or scaling are supported.
///
/// # Panics
///
/// Panics if
/// * `a.len() != m * k`
/// * `b.len() != k * n`
/// * `c.len() != m * n`.
pub fn sgemm(
    parallelism: Parallelism,
    m: usize,
    n: usize,
    k: usize,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    // Check size requirements.
    assert_eq!(
        a.len(),
        m * k,
        "expected {}x{} matrix `a` to have length {}, instead got {}",
        m,
        k,
        m * k,
        a.len()
    );
    assert_eq!(
        b.len(),
        k * n,
        "expected {}x{} matrix `b` to have length {}, instead got {}",
        k,
        n,
        k * n,
        b.len()
    );
    assert_eq!(
        c.len(),
        m * n,
        "expected {}x{} matrix `c` to have length {}, instead got {}",
        m,
        n,
        m * n,
        c.len()
    );

    sgemm_impl(parallelism, m, n, k, a, b, c)
}
