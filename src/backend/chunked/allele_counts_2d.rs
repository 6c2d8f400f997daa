//! # Allele Count Queries, Per Variant (Chunked)
//!
//! Deferred versions of [`eager::allele_counts_2d`](crate::backend::eager::allele_counts_2d).
//! Tasks follow the variant chunks; the allele axis is always read whole, so
//! a grid that splits alleles gives the same tasks as one that does not.

use ndarray::{Ix1, Ix2};

use super::array::ChunkedArray;
use super::lazy::LazyArray;
use crate::backend::eager::allele_counts_2d as eager;

/// Chunked allele counts `(variants, alleles)`
pub type ChunkedAlleleCounts2D = ChunkedArray<i32, Ix2>;

pub fn to_frequencies(ac: &ChunkedAlleleCounts2D) -> LazyArray<f64, Ix2> {
    ac.map_last_axis("allele_counts_2d_to_frequencies", eager::to_frequencies)
}

pub fn allelism(ac: &ChunkedAlleleCounts2D) -> LazyArray<i32, Ix1> {
    ac.reduce_last_axis("allele_counts_2d_allelism", eager::allelism)
}

pub fn max_allele(ac: &ChunkedAlleleCounts2D) -> LazyArray<i32, Ix1> {
    ac.reduce_last_axis("allele_counts_2d_max_allele", eager::max_allele)
}

pub fn locate_variant(ac: &ChunkedAlleleCounts2D) -> LazyArray<bool, Ix1> {
    ac.reduce_last_axis("allele_counts_2d_locate_variant", eager::locate_variant)
}

pub fn locate_non_variant(ac: &ChunkedAlleleCounts2D) -> LazyArray<bool, Ix1> {
    ac.reduce_last_axis("allele_counts_2d_locate_non_variant", eager::locate_non_variant)
}

pub fn locate_segregating(ac: &ChunkedAlleleCounts2D) -> LazyArray<bool, Ix1> {
    ac.reduce_last_axis("allele_counts_2d_locate_segregating", eager::locate_segregating)
}
