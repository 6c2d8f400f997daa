//! # Allele Count Queries, Per Sample (Chunked)
//!
//! Deferred versions of [`eager::allele_counts_3d`](crate::backend::eager::allele_counts_3d).
//! Variants and samples follow the input grid; the allele axis is read whole.

use ndarray::{Ix2, Ix3};

use super::array::ChunkedArray;
use super::lazy::LazyArray;
use crate::backend::eager::allele_counts_3d as eager;
use crate::error::Result;

/// Chunked allele counts `(variants, samples, alleles)`
pub type ChunkedAlleleCounts3D = ChunkedArray<i32, Ix3>;

pub fn locate_called(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_called", eager::locate_called)
}

pub fn locate_missing(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_missing", eager::locate_missing)
}

pub fn locate_hom(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_hom", eager::locate_hom)
}

pub fn locate_het(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_het", eager::locate_het)
}

/// Fails immediately if `call` names an allele outside the count array
pub fn locate_call(ac: &ChunkedAlleleCounts3D, call: &[i8]) -> Result<LazyArray<bool, Ix2>> {
    let expected = eager::call_to_counts(call, ac.shape()[2])?;
    Ok(ac.reduce_last_axis("allele_counts_3d_locate_call", move |block| {
        eager::locate_counts(block, &expected)
    }))
}

pub fn to_frequencies(ac: &ChunkedAlleleCounts3D) -> LazyArray<f64, Ix3> {
    ac.map_last_axis("allele_counts_3d_to_frequencies", eager::to_frequencies)
}

pub fn allelism(ac: &ChunkedAlleleCounts3D) -> LazyArray<i32, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_allelism", eager::allelism)
}

pub fn max_allele(ac: &ChunkedAlleleCounts3D) -> LazyArray<i32, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_max_allele", eager::max_allele)
}

pub fn locate_variant(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_variant", eager::locate_variant)
}

pub fn locate_non_variant(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_non_variant", eager::locate_non_variant)
}

pub fn locate_segregating(ac: &ChunkedAlleleCounts3D) -> LazyArray<bool, Ix2> {
    ac.reduce_last_axis("allele_counts_3d_locate_segregating", eager::locate_segregating)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::chunked::ChunkSpec;
    use crate::backend::eager::genotypes_3d;
    use crate::data::synthetic::random_genotypes;

    fn counts() -> (ndarray::Array3<i32>, ChunkedAlleleCounts3D) {
        let gt = random_genotypes((17, 9, 2), -1, 4, 21).unwrap();
        let ac = genotypes_3d::to_allele_counts(gt.view(), 3);
        let chunked = ChunkedArray::from_array(
            ac.clone(),
            &[ChunkSpec::Fixed(4), ChunkSpec::Fixed(2), ChunkSpec::Full],
        )
        .unwrap();
        (ac, chunked)
    }

    #[test]
    fn test_masks_match_eager() {
        let (ac, c) = counts();
        assert_eq!(locate_called(&c).compute().unwrap(), eager::locate_called(ac.view()));
        assert_eq!(locate_missing(&c).compute().unwrap(), eager::locate_missing(ac.view()));
        assert_eq!(locate_hom(&c).compute().unwrap(), eager::locate_hom(ac.view()));
        assert_eq!(locate_het(&c).compute().unwrap(), eager::locate_het(ac.view()));
        assert_eq!(locate_variant(&c).compute().unwrap(), eager::locate_variant(ac.view()));
        assert_eq!(
            locate_non_variant(&c).compute().unwrap(),
            eager::locate_non_variant(ac.view())
        );
        assert_eq!(
            locate_segregating(&c).compute().unwrap(),
            eager::locate_segregating(ac.view())
        );
    }

    #[test]
    fn test_reductions_match_eager() {
        let (ac, c) = counts();
        assert_eq!(allelism(&c).compute().unwrap(), eager::allelism(ac.view()));
        assert_eq!(max_allele(&c).compute().unwrap(), eager::max_allele(ac.view()));
        let lazy_af = to_frequencies(&c).compute().unwrap();
        let eager_af = eager::to_frequencies(ac.view());
        assert!(lazy_af
            .iter()
            .zip(eager_af.iter())
            .all(|(a, b)| a.to_bits() == b.to_bits()));
    }

    #[test]
    fn test_locate_call() {
        let (ac, c) = counts();
        let lazy = locate_call(&c, &[1, 0]).unwrap();
        assert_eq!(lazy.compute().unwrap(), eager::locate_call(ac.view(), &[1, 0]).unwrap());
        assert!(locate_call(&c, &[0, 4]).is_err());
    }
}
