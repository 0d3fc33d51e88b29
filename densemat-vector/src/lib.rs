/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */
//! # vector
//!
//! Slice-level numeric primitives used by `densemat`. Every function here operates on
//! contiguous `f32` buffers and knows nothing about matrix shape beyond what is passed in
//! explicitly (see [`transpose::transpose_into`]).
//!
//! Kernels accept a [`Dispatch`] describing when work is large enough to be split across
//! the rayon pool. Without the `rayon` feature every kernel runs sequentially regardless
//! of the dispatch threshold.
#![cfg_attr(
    not(test),
    warn(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::undocumented_unsafe_blocks
    )
)]

mod dispatch;
pub use dispatch::Dispatch;

pub mod elementwise;
pub use elementwise::{Add, BinaryOp, Div, Mul, Sub};

pub mod order;
pub use order::SortOrder;

pub mod reduce;
pub mod transpose;
