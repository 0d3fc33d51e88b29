/*
 * Copyright (c) densemat contributors.
 * Licensed under the MIT license.
 */

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Indicate how many threads a matrix multiplication may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Parallelism {
    /// Run on the calling thread.
    #[default]
    Sequential,
    /// Split the work across up to this many rayon threads.
    Rayon(NonZeroUsize),
}

impl Parallelism {
    /// Construct a `Parallelism` from a thread count.
    ///
    /// A count of `1` yields [`Parallelism::Sequential`]. Returns `None` if `threads == 0`.
    pub fn from_threads(threads: usize) -> Option<Self> {
        match threads {
            0 => None,
            1 => Some(Self::Sequential),
            n => NonZeroUsize::new(n).map(Self::Rayon),
        }
    }

    /// Return whether or not the enum is `Parallelism::Rayon`.
    pub fn is_parallel(&self) -> bool {
        match self {
            Self::Sequential => false,
            Self::Rayon(_) => true,
        }
    }

    /// Return the number of threads this setting allows.
    pub fn threads(&self) -> NonZeroUsize {
        match self {
            Self::Sequential => NonZeroUsize::MIN,
            Self::Rayon(n) => *n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_threads() {
        assert_eq!(Parallelism::from_threads(0), None);
        assert_eq!(Parallelism::from_threads(1), Some(Parallelism::Sequential));
        assert_eq!(
            Parallelism::from_threads(4),
            Some(Parallelism::Rayon(NonZeroUsize::new(4).unwrap()))
        );
    }

    #[test]
    fn test_is_parallel_and_threads() {
        assert!(!Parallelism::Sequential.is_parallel());
        assert_eq!(Parallelism::Sequential.threads().get(), 1);

        let p = Parallelism::from_threads(8).unwrap();
        assert!(p.is_parallel());
        assert_eq!(p.threads().get(), 8);
        assert_eq!(Parallelism::default(), Parallelism::Sequential);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Parallelism::Sequential).unwrap();
        assert_eq!(json, "\"sequential\"");

        let p: Parallelism = serde_json::from_str("{\"rayon\":3}").unwrap();
        assert_eq!(p, Parallelism::from_threads(3).unwrap());

        assert!(serde_json::from_str::<Parallelism>("{\"rayon\":0}").is_err());
    }
}
