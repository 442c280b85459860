//! Sequential/parallel execution switch.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Whether a scan may run on the rayon pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parallelism {
    Sequential,
    Parallel,
    /// Parallel when the rayon pool has more than one thread
    #[default]
    Auto,
}

impl Parallelism {
    /// Resolve `Auto` against the current pool and the amount of work.
    ///
    /// Work smaller than `threshold` items always runs sequentially.
    #[inline]
    pub fn resolve(self, len: usize, threshold: usize) -> Parallelism {
        if len < threshold {
            return Parallelism::Sequential;
        }
        match self {
            Parallelism::Auto if rayon::current_num_threads() > 1 => Parallelism::Parallel,
            Parallelism::Auto => Parallelism::Sequential,
            other => other,
        }
    }

    #[inline]
    pub fn is_parallel(self) -> bool {
        matches!(self, Parallelism::Parallel)
    }

    /// Filter-map over a slice, keeping input order in the result.
    #[inline]
    pub fn maybe_par_filter_map<'a, T, B, F>(self, items: &'a [T], f: F) -> Vec<B>
    where
        T: Sync,
        B: Send,
        F: Fn(&'a T) -> Option<B> + Sync + Send,
    {
        if self.is_parallel() {
            items.par_iter().filter_map(f).collect()
        } else {
            items.iter().filter_map(f).collect()
        }
    }
}
