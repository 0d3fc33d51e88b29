/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

//! Elementwise matrix-matrix arithmetic, scalar broadcast and the `std::ops` overloads.
//!
//! Matrix-matrix forms can fail and are exposed as named `try_*` methods. Scalar forms
//! cannot fail and additionally implement the arithmetic operators in both operand
//! orders.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use densemat_vector::{elementwise, BinaryOp};

use crate::{Config, Matrix, MatrixError};

impl Matrix {
    fn ensure_same_shape(&self, op: &'static str, rhs: &Matrix) -> Result<(), MatrixError> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatrixError::shape_mismatch(op, self.shape(), rhs.shape()))
        }
    }

    fn zip_in_place<Op: BinaryOp>(
        &mut self,
        name: &'static str,
        op: Op,
        rhs: &Matrix,
        config: &Config,
    ) -> Result<(), MatrixError> {
        self.ensure_same_shape(name, rhs)?;
        elementwise::apply(config.dispatch(), op, self.as_mut_slice(), rhs.as_slice());
        Ok(())
    }

    fn zip<Op: BinaryOp>(
        &self,
        name: &'static str,
        op: Op,
        rhs: &Matrix,
        config: &Config,
    ) -> Result<Matrix, MatrixError> {
        self.ensure_same_shape(name, rhs)?;
        let mut out = self.clone();
        elementwise::apply(config.dispatch(), op, out.as_mut_slice(), rhs.as_slice());
        Ok(out)
    }

    fn scalar_in_place<Op: BinaryOp>(&mut self, op: Op, scalar: f32) {
        let dispatch = Config::default().dispatch();
        elementwise::apply_scalar(dispatch, op, self.as_mut_slice(), scalar);
    }

    /// Overwrite every element with `value`.
    pub fn fill(&mut self, value: f32) {
        self.as_mut_slice().fill(value);
    }
}

macro_rules! elementwise_ops {
    ($($op:ident => $name:literal, $what:literal,
        $try_op:ident, $try_op_with:ident, $try_assign:ident, $try_assign_with:ident;)*) => {
        impl Matrix {
            $(
                #[doc = concat!("Return the elementwise ", $what, " of `self` and `rhs`.")]
                ///
                /// Fails with [`MatrixError::ShapeMismatch`] unless both matrices have the
                /// same shape.
                pub fn $try_op(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
                    self.$try_op_with(rhs, &Config::default())
                }

                #[doc = concat!("Like [`Matrix::", stringify!($try_op), "`], running the kernel with `config`.")]
                pub fn $try_op_with(&self, rhs: &Matrix, config: &Config) -> Result<Matrix, MatrixError> {
                    self.zip($name, elementwise::$op, rhs, config)
                }

                #[doc = concat!("Replace `self` with the elementwise ", $what, " of `self` and `rhs`.")]
                ///
                /// On a shape mismatch `self` is left unchanged.
                pub fn $try_assign(&mut self, rhs: &Matrix) -> Result<(), MatrixError> {
                    self.$try_assign_with(rhs, &Config::default())
                }

                #[doc = concat!("Like [`Matrix::", stringify!($try_assign), "`], running the kernel with `config`.")]
                pub fn $try_assign_with(&mut self, rhs: &Matrix, config: &Config) -> Result<(), MatrixError> {
                    self.zip_in_place($name, elementwise::$op, rhs, config)
                }
            )*
        }
    };
}

elementwise_ops! {
    Add => "add", "sum", try_add, try_add_with, try_add_assign, try_add_assign_with;
    Sub => "sub", "difference", try_sub, try_sub_with, try_sub_assign, try_sub_assign_with;
    Mul => "mul", "product", try_mul, try_mul_with, try_mul_assign, try_mul_assign_with;
    Div => "div", "quotient", try_div, try_div_with, try_div_assign, try_div_assign_with;
}

////////////
// Scalar //
////////////

impl Matrix {
    /// Return `self + scalar` elementwise.
    pub fn add_scalar(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out += scalar;
        out
    }

    /// Return `self - scalar` elementwise.
    pub fn sub_scalar(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out -= scalar;
        out
    }

    /// Return `scalar - self` elementwise.
    pub fn scalar_sub(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out.negate_then_add(scalar);
        out
    }

    /// Return `self * scalar` elementwise.
    pub fn mul_scalar(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out *= scalar;
        out
    }

    /// Return `self / scalar` elementwise.
    pub fn div_scalar(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out /= scalar;
        out
    }

    /// Return `scalar / self` elementwise.
    pub fn scalar_div(&self, scalar: f32) -> Matrix {
        let mut out = self.clone();
        out.divide_scalar_by(scalar);
        out
    }

    // (m * -1) + s
    fn negate_then_add(&mut self, scalar: f32) {
        self.scalar_in_place(elementwise::Mul, -1.0);
        self.scalar_in_place(elementwise::Add, scalar);
    }

    fn divide_scalar_by(&mut self, scalar: f32) {
        let dispatch = Config::default().dispatch();
        elementwise::apply_scalar_left(dispatch, elementwise::Div, scalar, self.as_mut_slice());
    }
}

impl AddAssign<f32> for Matrix {
    fn add_assign(&mut self, scalar: f32) {
        self.scalar_in_place(elementwise::Add, scalar);
    }
}

impl SubAssign<f32> for Matrix {
    fn sub_assign(&mut self, scalar: f32) {
        self.scalar_in_place(elementwise::Add, -scalar);
    }
}

impl MulAssign<f32> for Matrix {
    fn mul_assign(&mut self, scalar: f32) {
        self.scalar_in_place(elementwise::Mul, scalar);
    }
}

impl DivAssign<f32> for Matrix {
    fn div_assign(&mut self, scalar: f32) {
        self.scalar_in_place(elementwise::Div, scalar);
    }
}

/// Implement `Matrix op f32`, `&Matrix op f32`, `f32 op Matrix` and `f32 op &Matrix`.
///
/// `$right` mutates a matrix in place for the scalar-on-the-right form and `$left` for
/// the scalar-on-the-left form.
macro_rules! scalar_ops {
    ($($trait:ident, $method:ident, |$m:ident, $s:ident| $right:expr, $left:expr;)*) => {
        $(
            impl $trait<f32> for Matrix {
                type Output = Matrix;
                fn $method(mut self, scalar: f32) -> Matrix {
                    let ($m, $s) = (&mut self, scalar);
                    $right;
                    self
                }
            }

            impl $trait<f32> for &Matrix {
                type Output = Matrix;
                fn $method(self, scalar: f32) -> Matrix {
                    self.clone().$method(scalar)
                }
            }

            impl $trait<Matrix> for f32 {
                type Output = Matrix;
                fn $method(self, mut matrix: Matrix) -> Matrix {
                    let ($m, $s) = (&mut matrix, self);
                    $left;
                    matrix
                }
            }

            impl $trait<&Matrix> for f32 {
                type Output = Matrix;
                fn $method(self, matrix: &Matrix) -> Matrix {
                    self.$method(matrix.clone())
                }
            }
        )*
    };
}

scalar_ops! {
    Add, add, |m, s| *m += s, *m += s;
    Sub, sub, |m, s| *m -= s, m.negate_then_add(s);
    Mul, mul, |m, s| *m *= s, *m *= s;
    Div, div, |m, s| *m /= s, m.divide_scalar_by(s);
}

impl Neg for Matrix {
    type Output = Matrix;
    fn neg(mut self) -> Matrix {
        self *= -1.0;
        self
    }
}

impl Neg for &Matrix {
    type Output = Matrix;
    fn neg(self) -> Matrix {
        -self.clone()
    }
}

///////////
// Tests //
///////////
