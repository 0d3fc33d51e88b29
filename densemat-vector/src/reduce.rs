/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

//! Reductions over `f32` slices.

#[cfg(feature = "rayon")]
use rayon::prelude::{ParallelIterator, ParallelSlice};

use crate::Dispatch;

/// The number of independent accumulators used by the sequential sum. Splitting the
/// dependency chain lets LLVM keep the partial sums in vector registers.
const LANES: usize = 8;

/// Return the sum of all elements of `x`. The sum of an empty slice is `0.0`.
pub fn sum(dispatch: Dispatch, x: &[f32]) -> f32 {
    if dispatch.is_parallel(x.len()) {
        tracing::trace!(len = x.len(), "parallel sum");
        sum_parallel(x)
    } else {
        sum_sequential(x)
    }
}

fn sum_sequential(x: &[f32]) -> f32 {
    let mut lanes = [0.0f32; LANES];
    let chunks = x.chunks_exact(LANES);
    let remainder = chunks.remainder();
    for chunk in chunks {
        lanes.iter_mut().zip(chunk).for_each(|(l, &v)| *l += v);
    }
    lanes.iter().sum::<f32>() + remainder.iter().sum::<f32>()
}

#[cfg(feature = "rayon")]
fn sum_parallel(x: &[f32]) -> f32 {
    x.par_chunks(crate::dispatch::CHUNK)
        .map(sum_sequential)
        .sum()
}

#[cfg(not(feature = "rayon"))]
fn sum_parallel(x: &[f32]) -> f32 {
    sum_sequential(x)
}

/// Return the number of elements exactly equal to zero. Both `0.0` and `-0.0` count.
pub fn count_zeros(x: &[f32]) -> usize {
    x.iter().filter(|&&v| v == 0.0).count()
}

/// Return the index of the largest element of `x`.
///
/// Ties resolve to the lowest index. `NaN` never compares greater than a number, so it is
/// only returned when every element is `NaN`.
///
/// # Panics
///
/// Panics if `x` is empty.
pub fn argmax(x: &[f32]) -> usize {
    arg_extreme(x, |candidate, best| candidate > best)
}

/// Return the index of the smallest element of `x`.
///
/// Ties resolve to the lowest index. See [`argmax`] for the handling of `NaN`.
///
/// # Panics
///
/// Panics if `x` is empty.
pub fn argmin(x: &[f32]) -> usize {
    arg_extreme(x, |candidate, best| candidate < best)
}

fn arg_extreme<F>(x: &[f32], better: F) -> usize
where
    F: Fn(f32, f32) -> bool,
{
    assert!(!x.is_empty(), "cannot take the arg-extreme of an empty slice");
    let mut best = 0;
    for (i, &v) in x.iter().enumerate().skip(1) {
        let current = x[best];
        if (current.is_nan() && !v.is_nan()) || better(v, current) {
            best = i;
        }
    }
    best
}

///////////
// Tests //
///////////
