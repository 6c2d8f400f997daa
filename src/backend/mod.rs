//! # Backend Module
//!
//! Two implementations of the same operation families:
//! - `eager`: computes immediately over an in-memory array
//! - `chunked`: builds a deferred graph of per-block tasks, realized by `compute()`
//!
//! ## Operation Families
//! - `genotypes_3d`: masks and allele counts over `(variants, samples, ploidy)` calls
//! - `allele_counts_2d`: frequencies, allelism and variant masks per variant
//! - `allele_counts_3d`: the same per (variant, sample)

pub mod chunked;
pub mod eager;

use std::fmt;

/// Execution backend of a benchmark case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Backend {
    Eager,
    Chunked,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Eager => "eager",
            Backend::Chunked => "chunked",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
