/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */
//! # densemat
//!
//! Owned, dense, row-major `f32` matrices.
//!
//! Rows and columns are addressed with [`Selector`]s built from integers and Rust range
//! expressions. Reads of a region always produce a fresh [`Matrix`]; writes and compound
//! updates of a region are shape-checked before any element changes:
//!
//! ```
//! use densemat::Matrix;
//!
//! let mut m = Matrix::from_rows(&[
//!     [1.0, 2.0, 3.0],
//!     [4.0, 5.0, 6.0],
//!     [7.0, 8.0, 9.0],
//!     [10.0, 11.0, 12.0],
//! ])
//! .unwrap();
//!
//! m.update_region(1..=3, 1..=2, |block| Ok(block * 2.0)).unwrap();
//! assert_eq!(m.to_string(), "[[1.0, 2.0, 3.0], [4.0, 10.0, 12.0], [7.0, 16.0, 18.0], [10.0, 22.0, 24.0]]");
//!
//! let product = m.matmul(&m.transposed()).unwrap();
//! assert_eq!(product.shape(), (4, 4));
//! ```
//!
//! Elementwise and scalar kernels live in `densemat-vector`; matrix multiplication is
//! delegated to `densemat-linalg`. Both honor the execution settings in [`Config`].
#![cfg_attr(
    not(test),
    warn(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::undocumented_unsafe_blocks
    )
)]

pub mod config;
pub use config::{Builder, Config, ConfigError};

mod error;
pub use error::MatrixError;

mod matrix;
pub use matrix::{Generator, Init, Matrix};

pub mod selector;
pub use selector::{Axis, Selector, Span};

mod arith;
mod display;
mod product;
mod reduce;
mod region;
mod transform;

pub use densemat_linalg::Parallelism;
pub use densemat_vector::SortOrder;

#[cfg(test)]
mod test_util;
