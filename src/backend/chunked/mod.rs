//! # Chunked Backend
//!
//! Lazy evaluation over block-partitioned arrays.
//!
//! ## Flow
//! ```text
//! ChunkedArray --op--> LazyArray (one BlockTask per block) --compute()--> Array
//! ```
//! Block tasks run the eager kernels on their region, so realized results are
//! identical to the eager backend for any chunking. Realization parallelizes
//! across blocks on the rayon pool; building the graph does no array work.

pub mod allele_counts_2d;
pub mod allele_counts_3d;
pub mod array;
pub mod genotypes_3d;
pub mod grid;
pub mod lazy;

pub use allele_counts_2d::ChunkedAlleleCounts2D;
pub use allele_counts_3d::ChunkedAlleleCounts3D;
pub use array::ChunkedArray;
pub use genotypes_3d::ChunkedGenotypes;
pub use grid::{BlockRegion, ChunkSpec, Chunks};
pub use lazy::{BlockTask, LazyArray, Merge};
