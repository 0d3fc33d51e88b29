/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use faer::{self, Par};

use super::common::Parallelism;

fn to_par(parallelism: Parallelism) -> Par {
    match parallelism {
        Parallelism::Sequential => Par::Seq,
        Parallelism::Rayon(threads) => Par::rayon(threads.get()),
    }
}

/// Row-major `c = a * b` through faer.
///
/// Slice lengths have already been checked against `m`, `n` and `k` by `sgemm`.
pub(super) fn sgemm_impl(
    parallelism: Parallelism,
    m: usize,
    n: usize,
    k: usize,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    let a = faer::mat::MatRef::from_row_major_slice(a, m, k);
    let b = faer::mat::MatRef::from_row_major_slice(b, k, n);
    let c = faer::mat::MatMut::from_row_major_slice_mut(c, m, n);

    faer::linalg::matmul::matmul(
        c,
        faer::Accum::Replace,
        a,
        b,
        1.0f32,
        to_par(parallelism),
    )
}
