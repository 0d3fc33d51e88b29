/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::num::NonZeroUsize;

use densemat_linalg::Parallelism;

/// Conservatively defaults to sequential execution.
pub const PARALLELISM: Parallelism = Parallelism::Sequential;

/// Buffers shorter than this are never split across threads. Below roughly 64Ki elements
/// the cost of waking the pool exceeds the time spent in the kernel itself.
pub const MIN_PARALLEL_LEN: NonZeroUsize = NonZeroUsize::new(1 << 16).unwrap();

/// Environment variable holding the thread count read by
/// [`Config::from_env`](super::Config::from_env).
pub const THREADS_VAR: &str = "DENSEMAT_THREADS";

/// Environment variable holding the parallel threshold read by
/// [`Config::from_env`](super::Config::from_env).
pub const MIN_PARALLEL_LEN_VAR: &str = "DENSEMAT_MIN_PARALLEL_LEN";
