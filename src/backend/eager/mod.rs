//! # Eager Backend
//!
//! Synchronous kernels over in-memory `ndarray` views. Each call computes its
//! full result before returning. The chunked backend runs these same kernels
//! on every block, so both backends agree bit for bit.

pub mod allele_counts_2d;
pub mod allele_counts_3d;
pub mod genotypes_3d;
pub(crate) mod kernels;
