/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

pub mod defaults;

use std::num::NonZeroUsize;

use densemat_linalg::Parallelism;
use densemat_vector::Dispatch;
use serde::{Deserialize, Serialize};
use thiserror::Error;

////////////
// Config //
////////////

/// Execution settings for the kernels behind [`Matrix`](crate::Matrix) operations.
///
/// The `*_with` family of methods (for example [`Matrix::try_add_with`](crate::Matrix::try_add_with)
/// and [`Matrix::matmul_with`](crate::Matrix::matmul_with)) take a `Config` explicitly.
/// Everything else runs with [`Config::default`], which is sequential.
///
/// A `Config` can be deserialized; missing fields take their defaults:
/// ```
/// use densemat::Config;
///
/// let config: Config = serde_json::from_str(r#"{ "parallelism": { "rayon": 4 } }"#).unwrap();
/// assert_eq!(config.parallelism().threads().get(), 4);
/// assert_eq!(config.min_parallel_len(), densemat::config::defaults::MIN_PARALLEL_LEN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How many threads matrix multiplication and large elementwise kernels may use.
    parallelism: Parallelism,

    /// Elementwise kernels only go parallel for buffers of at least this many elements.
    min_parallel_len: NonZeroUsize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parallelism: defaults::PARALLELISM,
            min_parallel_len: defaults::MIN_PARALLEL_LEN,
        }
    }
}

impl Config {
    /// Attempt to construct a [`Config`] from a builder.
    ///
    /// See: [`Builder::build`].
    pub fn try_from_builder(builder: Builder) -> Result<Self, ConfigError> {
        let parallelism = match builder.threads {
            Some(threads) => {
                Parallelism::from_threads(threads).ok_or(ConfigErrorInner::Zero("threads"))?
            }
            None => defaults::PARALLELISM,
        };

        let min_parallel_len = match builder.min_parallel_len {
            Some(len) => NonZeroUsize::new(len).ok_or(ConfigErrorInner::Zero("min_parallel_len"))?,
            None => defaults::MIN_PARALLEL_LEN,
        };

        Ok(Self {
            parallelism,
            min_parallel_len,
        })
    }

    /// Build a [`Config`] from the `DENSEMAT_THREADS` and `DENSEMAT_MIN_PARALLEL_LEN`
    /// environment variables. Unset variables take their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let parse = |key: &'static str| -> Result<Option<usize>, ConfigErrorInner> {
            match lookup(key) {
                None => Ok(None),
                Some(value) => value
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| ConfigErrorInner::Environment(key, value)),
            }
        };

        let mut builder = Builder::new();
        if let Some(threads) = parse(defaults::THREADS_VAR)? {
            builder.threads(threads);
        }
        if let Some(len) = parse(defaults::MIN_PARALLEL_LEN_VAR)? {
            builder.min_parallel_len(len);
        }

        let config = builder.build()?;
        tracing::debug!(?config, "loaded configuration from the environment");
        Ok(config)
    }

    //-----------//
    // Accessors //
    //-----------//

    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    pub fn min_parallel_len(&self) -> NonZeroUsize {
        self.min_parallel_len
    }

    /// Return the kernel dispatch for this configuration.
    ///
    /// Elementwise kernels stay sequential unless `parallelism` allows more than one
    /// thread. Parallel kernels run on the global rayon pool.
    pub fn dispatch(&self) -> Dispatch {
        if self.parallelism.is_parallel() {
            Dispatch::with_threshold(self.min_parallel_len.get())
        } else {
            Dispatch::sequential()
        }
    }
}

/// Errors that can occur when building a [`Config`].
///
/// See [`Builder::build`] for possible failure modes.
#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct ConfigError {
    #[from]
    inner: ConfigErrorInner,
}

#[derive(Debug, Clone, Error)]
enum ConfigErrorInner {
    #[error("parameter \"{0}\" invalid because it cannot be zero")]
    Zero(&'static str),
    #[error("environment variable \"{0}\" invalid because \"{1}\" is not an unsigned integer")]
    Environment(&'static str, String),
}

/////////////
// Builder //
/////////////

/// A builder for [`Config`]. Parameters are validated upon invoking [`Builder::build`].
#[derive(Debug, Clone, Default)]
pub struct Builder {
    threads: Option<usize>,
    min_parallel_len: Option<usize>,
}

impl Builder {
    /// Construct a new builder. Unconfigured parameters use their default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct a new builder.
    ///
    /// A closure `f` can be used to chain additional builder methods inline.
    pub fn new_with<F>(f: F) -> Self
    where
        F: FnOnce(&mut Self),
    {
        let mut this = Self::new();
        f(&mut this);
        this
    }

    /// Configure the number of threads. `1` selects sequential execution.
    ///
    /// Parameter `threads` must be non-zero.
    pub fn threads(&mut self, threads: usize) -> &mut Self {
        self.threads = Some(threads);
        self
    }

    /// Configure the minimum buffer length for parallel elementwise kernels.
    ///
    /// Parameter `len` must be non-zero.
    pub fn min_parallel_len(&mut self, len: usize) -> &mut Self {
        self.min_parallel_len = Some(len);
        self
    }

    /// Attempt to build the config. Fails if any parameter is zero.
    pub fn build(self) -> Result<Config, ConfigError> {
        Config::try_from_builder(self)
    }
}

///////////
// Tests //
///////////
