/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

/// The number of elements handed to a single rayon task by the parallel kernels.
pub(crate) const CHUNK: usize = 1 << 12;

/// Controls whether a kernel runs on the calling thread or is split across the rayon pool.
///
/// Buffers with at least `min_parallel_len` elements are processed in parallel when the
/// `rayon` feature is enabled. Shorter buffers, and every buffer when the feature is
/// disabled, are processed sequentially.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatch {
    min_parallel_len: usize,
}

impl Dispatch {
    /// A dispatch that never goes parallel.
    pub const fn sequential() -> Self {
        Self {
            min_parallel_len: usize::MAX,
        }
    }

    /// A dispatch that goes parallel for buffers of `min_parallel_len` elements or more.
    pub const fn with_threshold(min_parallel_len: usize) -> Self {
        Self { min_parallel_len }
    }

    /// Return the configured threshold.
    pub fn min_parallel_len(&self) -> usize {
        self.min_parallel_len
    }

    /// Return whether a buffer of length `len` should be processed in parallel.
    pub fn is_parallel(&self, len: usize) -> bool {
        cfg!(feature = "rayon") && len >= self.min_parallel_len
    }
}

impl Default for Dispatch {
    fn default() -> Self {
        Self::sequential()
    }
}
