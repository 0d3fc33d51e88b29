/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use thiserror::Error;

use super::common::Parallelism;

/// A triple-loop matrix product used to validate the optimized backend.
pub(super) fn sgemm_impl(
    _parallelism: Parallelism,
    m: usize,
    n: usize,
    k: usize,
    a: &[f32],
    b: &[f32],
    c: &mut [f32],
) {
    for i in 0..m {
        for j in 0..n {
            c[i * n + j] = (0..k).map(|l| a[i * k + l] * b[l * n + j]).sum();
        }
    }
}

/// A test-problem for GEMM.
///
/// `c` is the initial content of the destination. It never influences `expected`.
#[derive(Debug)]
pub(crate) struct TestProblem {
    m: usize,
    n: usize,
    k: usize,
    a: Vec<f32>,
    b: Vec<f32>,
    c: Vec<f32>,
    expected: Vec<f32>,
}

#[derive(Debug, Error)]
#[error("mismatch in test problem. got {:?}, expected {:?}", got, expected)]
pub(crate) struct ReferenceError {
    got: Vec<f32>,
    expected: Vec<f32>,
}

pub(crate) trait GemmFunction:
    Fn(Parallelism, usize, usize, usize, &[f32], &[f32], &mut [f32])
{
}
impl<F> GemmFunction for F where
    F: Fn(Parallelism, usize, usize, usize, &[f32], &[f32], &mut [f32])
{
}

impl TestProblem {
    pub(crate) fn check<F: GemmFunction>(
        &self,
        parallelism: Parallelism,
        f: F,
    ) -> Result<(), ReferenceError> {
        let mut result = self.c.clone();
        f(
            parallelism,
            self.m,
            self.n,
            self.k,
            &self.a,
            &self.b,
            &mut result,
        );

        if result == self.expected {
            Ok(())
        } else {
            Err(ReferenceError {
                got: result,
                expected: self.expected.clone(),
            })
        }
    }
}

/// Return a basic set of test-problems covering several shapes and destinations whose
/// prior contents must be discarded.
pub(crate) fn test_sgemm_problems() -> Vec<TestProblem> {
    // Matrix A:
    //  7  1  6  8
    //  6  2  6  1
    let a = vec![7.0, 1.0, 6.0, 8.0, 6.0, 2.0, 6.0, 1.0];

    // Matrix B:
    //  1  9  6
    //  8  7  5
    //  6  4  3
    //  4  7  6
    let b = vec![1.0, 9.0, 6.0, 8.0, 7.0, 5.0, 6.0, 4.0, 3.0, 4.0, 7.0, 6.0];

    // A * B:
    //  83  150  113
    //  62   99   70
    let ab = vec![83.0, 150.0, 113.0, 62.0, 99.0, 70.0];

    let mut identity = vec![0.0; 16];
    identity.iter_mut().step_by(5).for_each(|v| *v = 1.0);

    vec![
        // Zeroed destination.
        TestProblem {
            m: 2,
            n: 3,
            k: 4,
            a: a.clone(),
            b: b.clone(),
            c: vec![0.0; 6],
            expected: ab.clone(),
        },
        // Stale destination.
        TestProblem {
            m: 2,
            n: 3,
            k: 4,
            a: a.clone(),
            b: b.clone(),
            c: vec![3.0, 3.0, 3.0, 0.0, 1.0, 9.0],
            expected: ab.clone(),
        },
        // Non-finite destination.
        TestProblem {
            m: 2,
            n: 3,
            k: 4,
            a: a.clone(),
            b,
            c: vec![f32::NAN, f32::INFINITY, f32::NAN, 0.0, f32::NEG_INFINITY, 1.0],
            expected: ab,
        },
        // Right identity.
        TestProblem {
            m: 2,
            n: 4,
            k: 4,
            a: a.clone(),
            b: identity,
            c: vec![-1.0; 8],
            expected: a,
        },
        // Scalar.
        TestProblem {
            m: 1,
            n: 1,
            k: 1,
            a: vec![3.0],
            b: vec![4.0],
            c: vec![5.0],
            expected: vec![12.0],
        },
        // Outer product.
        TestProblem {
            m: 2,
            n: 3,
            k: 1,
            a: vec![1.0, 2.0],
            b: vec![3.0, 4.0, 5.0],
            c: vec![f32::NAN; 6],
            expected: vec![3.0, 4.0, 5.0, 6.0, 8.0, 10.0],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_implementation() {
        let problems = test_sgemm_problems();
        assert_eq!(problems.len(), 6);
        for (i, problem) in problems.iter().enumerate() {
            let result = problem.check(Parallelism::Sequential, sgemm_impl);
            if let Err(err) = result {
                panic!("{} on iteration {}. Problem: {:?}", err, i, problem);
            }
        }
    }
}
