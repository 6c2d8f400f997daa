//! # Genotype Queries (Chunked)
//!
//! Deferred versions of [`eager::genotypes_3d`](crate::backend::eager::genotypes_3d).
//! Every block reads the whole ploidy axis; variants and samples follow the
//! input grid.

use ndarray::{Ix2, Ix3};

use super::array::ChunkedArray;
use super::lazy::{sum, LazyArray, Merge};
use crate::backend::eager::genotypes_3d as eager;
use crate::data::n_alleles;
use crate::error::Result;

/// Chunked genotype calls `(variants, samples, ploidy)`
pub type ChunkedGenotypes = ChunkedArray<i8, Ix3>;

const PLOIDY: usize = 2;

fn dims(gt: &ChunkedGenotypes) -> (usize, usize, usize) {
    let shape = gt.shape();
    (shape[0], shape[1], shape[2])
}

pub fn locate_called(gt: &ChunkedGenotypes) -> LazyArray<bool, Ix2> {
    gt.reduce_last_axis("genotypes_3d_locate_called", eager::locate_called)
}

pub fn locate_missing(gt: &ChunkedGenotypes) -> LazyArray<bool, Ix2> {
    gt.reduce_last_axis("genotypes_3d_locate_missing", eager::locate_missing)
}

pub fn locate_hom(gt: &ChunkedGenotypes) -> LazyArray<bool, Ix2> {
    gt.reduce_last_axis("genotypes_3d_locate_hom", eager::locate_hom)
}

pub fn locate_het(gt: &ChunkedGenotypes) -> LazyArray<bool, Ix2> {
    gt.reduce_last_axis("genotypes_3d_locate_het", eager::locate_het)
}

/// Fails immediately (before any task is built) if `call` does not match the ploidy.
pub fn locate_call(gt: &ChunkedGenotypes, call: &[i8]) -> Result<LazyArray<bool, Ix2>> {
    eager::check_call_len(dims(gt).2, call)?;
    let call = call.to_vec();
    Ok(gt.reduce_last_axis("genotypes_3d_locate_call", move |block| {
        eager::locate_call_unchecked(block, &call)
    }))
}

/// Partial counts per (variant block, sample block), summed on realization
pub fn count_alleles(gt: &ChunkedGenotypes, max_allele: u8) -> LazyArray<i32, Ix2> {
    let n = n_alleles(max_allele);
    let (n_variants, _, _) = dims(gt);
    gt.map_blocks(
        "genotypes_3d_count_alleles",
        Ix2(n_variants, n),
        Merge::Combine(sum::<i32>),
        &[PLOIDY],
        |region| region.drop_axis(PLOIDY).with_range(1, 0..n),
        move |block| eager::count_alleles(block, max_allele),
    )
}

pub fn to_allele_counts(gt: &ChunkedGenotypes, max_allele: u8) -> LazyArray<i32, Ix3> {
    let n = n_alleles(max_allele);
    let (n_variants, n_samples, _) = dims(gt);
    gt.map_blocks(
        "genotypes_3d_to_allele_counts",
        Ix3(n_variants, n_samples, n),
        Merge::Assign,
        &[PLOIDY],
        |region| region.with_range(PLOIDY, 0..n),
        move |block| eager::to_allele_counts(block, max_allele),
    )
}

/// Each variant block maps to a contiguous run of `n_alleles` rows per variant
pub fn to_allele_counts_melt(gt: &ChunkedGenotypes, max_allele: u8) -> LazyArray<i32, Ix2> {
    let n = n_alleles(max_allele);
    let (n_variants, n_samples, _) = dims(gt);
    gt.map_blocks(
        "genotypes_3d_to_allele_counts_melt",
        Ix2(n_variants * n, n_samples),
        Merge::Assign,
        &[PLOIDY],
        |region| {
            let variants = region.range(0);
            region
                .drop_axis(PLOIDY)
                .with_range(0, variants.start * n..variants.end * n)
        },
        move |block| eager::to_allele_counts_melt(block, max_allele),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::chunked::ChunkSpec;
    use crate::data::synthetic::random_genotypes;

    fn chunked(seed: u64) -> (ndarray::Array3<i8>, ChunkedGenotypes) {
        let gt = random_genotypes((23, 11, 2), -1, 4, seed).unwrap();
        let chunked = ChunkedArray::from_array(
            gt.clone(),
            &[ChunkSpec::Fixed(5), ChunkSpec::Fixed(4), ChunkSpec::Fixed(1)],
        )
        .unwrap();
        (gt, chunked)
    }

    #[test]
    fn test_masks_match_eager() {
        let (gt, c) = chunked(1);
        assert_eq!(locate_called(&c).compute().unwrap(), eager::locate_called(gt.view()));
        assert_eq!(locate_missing(&c).compute().unwrap(), eager::locate_missing(gt.view()));
        assert_eq!(locate_hom(&c).compute().unwrap(), eager::locate_hom(gt.view()));
        assert_eq!(locate_het(&c).compute().unwrap(), eager::locate_het(gt.view()));
    }

    #[test]
    fn test_ploidy_chunks_are_merged() {
        let (_, c) = chunked(2);
        // 5 variant blocks x 3 sample blocks; ploidy blocks collapse into one
        assert_eq!(locate_called(&c).n_tasks(), 15);
    }

    #[test]
    fn test_locate_call_matches_eager() {
        let (gt, c) = chunked(3);
        let lazy = locate_call(&c, &[0, 1]).unwrap();
        assert_eq!(lazy.compute().unwrap(), eager::locate_call(gt.view(), &[0, 1]).unwrap());
        assert!(locate_call(&c, &[0]).is_err());
    }

    #[test]
    fn test_counts_match_eager() {
        let (gt, c) = chunked(4);
        assert_eq!(
            count_alleles(&c, 3).compute().unwrap(),
            eager::count_alleles(gt.view(), 3)
        );
        assert_eq!(
            to_allele_counts(&c, 3).compute().unwrap(),
            eager::to_allele_counts(gt.view(), 3)
        );
        assert_eq!(
            to_allele_counts_melt(&c, 3).compute().unwrap(),
            eager::to_allele_counts_melt(gt.view(), 3)
        );
    }

    #[test]
    fn test_count_alleles_sums_sample_blocks() {
        let (_, c) = chunked(5);
        let lazy = count_alleles(&c, 2);
        assert_eq!(lazy.name(), "genotypes_3d_count_alleles");
        assert_eq!(lazy.n_tasks(), 15);
        assert_eq!(lazy.shape(), &[23, 3]);
    }
}
