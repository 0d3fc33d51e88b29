/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

//! Elementwise binary kernels.
//!
//! All kernels write their result back into the destination buffer. Callers wanting an
//! out-of-place result clone the left-hand operand first.

#[cfg(feature = "rayon")]
use rayon::prelude::{IndexedParallelIterator, ParallelIterator, ParallelSlice, ParallelSliceMut};

use crate::Dispatch;

/// A scalar binary operation that can be lifted over slices.
pub trait BinaryOp: Copy + Send + Sync {
    fn apply(self, a: f32, b: f32) -> f32;
}

/// `a + b`
#[derive(Debug, Clone, Copy)]
pub struct Add;

/// `a - b`
#[derive(Debug, Clone, Copy)]
pub struct Sub;

/// `a * b`
#[derive(Debug, Clone, Copy)]
pub struct Mul;

/// `a / b`
#[derive(Debug, Clone, Copy)]
pub struct Div;

impl BinaryOp for Add {
    #[inline(always)]
    fn apply(self, a: f32, b: f32) -> f32 {
        a + b
    }
}

impl BinaryOp for Sub {
    #[inline(always)]
    fn apply(self, a: f32, b: f32) -> f32 {
        a - b
    }
}

impl BinaryOp for Mul {
    #[inline(always)]
    fn apply(self, a: f32, b: f32) -> f32 {
        a * b
    }
}

impl BinaryOp for Div {
    #[inline(always)]
    fn apply(self, a: f32, b: f32) -> f32 {
        a / b
    }
}

/// Compute `dst[i] = op(dst[i], rhs[i])` for every position.
///
/// # Panics
///
/// Panics if `dst.len() != rhs.len()`.
pub fn apply<Op: BinaryOp>(dispatch: Dispatch, op: Op, dst: &mut [f32], rhs: &[f32]) {
    assert_eq!(
        dst.len(),
        rhs.len(),
        "elementwise operands must have equal length"
    );

    if dispatch.is_parallel(dst.len()) {
        tracing::trace!(len = dst.len(), "parallel elementwise kernel");
        zip_parallel(op, dst, rhs);
    } else {
        zip_sequential(op, dst, rhs);
    }
}

/// Compute `dst[i] = op(dst[i], scalar)` for every position.
pub fn apply_scalar<Op: BinaryOp>(dispatch: Dispatch, op: Op, dst: &mut [f32], scalar: f32) {
    map_in_place(dispatch, dst, move |x| op.apply(x, scalar));
}

/// Compute `dst[i] = op(scalar, dst[i])` for every position.
///
/// This is the kernel behind non-commutative operations where the scalar is on the
/// left-hand side, such as `scalar / matrix`.
pub fn apply_scalar_left<Op: BinaryOp>(dispatch: Dispatch, op: Op, scalar: f32, dst: &mut [f32]) {
    map_in_place(dispatch, dst, move |x| op.apply(scalar, x));
}

#[inline]
fn zip_sequential<Op: BinaryOp>(op: Op, dst: &mut [f32], rhs: &[f32]) {
    dst.iter_mut()
        .zip(rhs.iter())
        .for_each(|(d, &r)| *d = op.apply(*d, r));
}

#[cfg(feature = "rayon")]
fn zip_parallel<Op: BinaryOp>(op: Op, dst: &mut [f32], rhs: &[f32]) {
    use crate::dispatch::CHUNK;

    dst.par_chunks_mut(CHUNK)
        .zip(rhs.par_chunks(CHUNK))
        .for_each(|(d, r)| zip_sequential(op, d, r));
}

#[cfg(not(feature = "rayon"))]
fn zip_parallel<Op: BinaryOp>(op: Op, dst: &mut [f32], rhs: &[f32]) {
    zip_sequential(op, dst, rhs)
}

fn map_in_place<F>(dispatch: Dispatch, dst: &mut [f32], f: F)
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    if dispatch.is_parallel(dst.len()) {
        tracing::trace!(len = dst.len(), "parallel scalar kernel");
        map_parallel(dst, f);
    } else {
        dst.iter_mut().for_each(|x| *x = f(*x));
    }
}

#[cfg(feature = "rayon")]
fn map_parallel<F>(dst: &mut [f32], f: F)
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    use crate::dispatch::CHUNK;

    dst.par_chunks_mut(CHUNK)
        .for_each(|chunk| chunk.iter_mut().for_each(|x| *x = f(*x)));
}

#[cfg(not(feature = "rayon"))]
fn map_parallel<F>(dst: &mut [f32], f: F)
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    dst.iter_mut().for_each(|x| *x = f(*x));
}

///////////
// Tests //
///////////

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use rstest::rstest;

    use super::*;

    fn random_vec(len: usize, rng: &mut StdRng) -> Vec<f32> {
        (0..len).map(|_| rng.random_range(-10.0f32..10.0)).collect()
    }

    fn reference<Op: BinaryOp>(op: Op, a: &[f32], b: &[f32]) -> Vec<f32> {
        a.iter().zip(b).map(|(&x, &y)| op.apply(x, y)).collect()
    }

    #[test]
    fn test_scalar_ops() {
        assert_eq!(Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Sub.apply(2.0, 3.0), -1.0);
        assert_eq!(Mul.apply(2.0, 3.0), 6.0);
        assert_eq!(Div.apply(3.0, 2.0), 1.5);
    }

    #[rstest]
    fn test_apply_matches_reference(
        #[values(0, 1, 7, 4096, 10_001)] len: usize,
        #[values(Dispatch::sequential(), Dispatch::with_threshold(1))] dispatch: Dispatch,
    ) {
        let mut rng = StdRng::seed_from_u64(0x5eed ^ len as u64);
        let a = random_vec(len, &mut rng);
        let b = random_vec(len, &mut rng);

        let mut dst = a.clone();
        apply(dispatch, Add, &mut dst, &b);
        assert_eq!(dst, reference(Add, &a, &b));

        let mut dst = a.clone();
        apply(dispatch, Sub, &mut dst, &b);
        assert_eq!(dst, reference(Sub, &a, &b));

        let mut dst = a.clone();
        apply(dispatch, Mul, &mut dst, &b);
        assert_eq!(dst, reference(Mul, &a, &b));

        let mut dst = a.clone();
        apply(dispatch, Div, &mut dst, &b);
        assert_eq!(dst, reference(Div, &a, &b));
    }

    #[rstest]
    fn test_apply_scalar(
        #[values(Dispatch::sequential(), Dispatch::with_threshold(2))] dispatch: Dispatch,
    ) {
        let mut x = vec![1.0, 2.0, 4.0];
        apply_scalar(dispatch, Div, &mut x, 2.0);
        assert_eq!(x, [0.5, 1.0, 2.0]);

        let mut x = vec![1.0, 2.0, 4.0];
        apply_scalar_left(dispatch, Div, 2.0, &mut x);
        assert_eq!(x, [2.0, 1.0, 0.5]);

        let mut x = vec![1.0, 2.0, 4.0];
        apply_scalar_left(dispatch, Sub, 10.0, &mut x);
        assert_eq!(x, [9.0, 8.0, 6.0]);
    }

    #[test]
    #[should_panic(expected = "elementwise operands must have equal length")]
    fn test_apply_length_mismatch_panics() {
        let mut a = vec![0.0; 3];
        apply(Dispatch::sequential(), Add, &mut a, &[1.0, 2.0]);
    }
}
