//! # Allele Count Queries, Per Sample (Eager)
//!
//! Operations over `(variants, samples, alleles)` count arrays, such as the
//! output of [`to_allele_counts`](super::genotypes_3d::to_allele_counts).
//! A (variant, sample) lane with no counts is a missing genotype.

use ndarray::{Array1, Array2, Array3, ArrayView3, Axis};

use super::kernels;
use crate::data::CallMask;
use crate::error::{Result, TensorError};

const ALLELES: Axis = Axis(2);

/// True where at least one allele was counted
pub fn locate_called(ac: ArrayView3<'_, i32>) -> CallMask {
    ac.map_axis(ALLELES, |counts| counts.iter().any(|&c| c > 0))
}

/// True where no allele was counted
pub fn locate_missing(ac: ArrayView3<'_, i32>) -> CallMask {
    ac.map_axis(ALLELES, |counts| counts.iter().all(|&c| c == 0))
}

/// True where exactly one allele was counted
pub fn locate_hom(ac: ArrayView3<'_, i32>) -> CallMask {
    kernels::locate_by_allelism(ac, |n| n == 1)
}

/// True where more than one allele was counted
pub fn locate_het(ac: ArrayView3<'_, i32>) -> CallMask {
    kernels::locate_by_allelism(ac, |n| n > 1)
}

/// Allele counts implied by a genotype call over `n_alleles` slots.
pub(crate) fn call_to_counts(call: &[i8], n_alleles: usize) -> Result<Array1<i32>> {
    let mut expected = Array1::<i32>::zeros(n_alleles);
    for &allele in call {
        if allele < 0 || allele as usize >= n_alleles {
            return Err(TensorError::invalid_call(format!(
                "allele {} in call {:?} is outside 0..{}",
                allele, call, n_alleles
            )));
        }
        expected[allele as usize] += 1;
    }
    Ok(expected)
}

pub(crate) fn locate_counts(ac: ArrayView3<'_, i32>, expected: &Array1<i32>) -> CallMask {
    ac.map_axis(ALLELES, |counts| counts == expected.view())
}

/// True where the counts equal those of the genotype `call`.
///
/// Allele counts are unordered, so `[0, 1]` and `[1, 0]` locate the same lanes.
pub fn locate_call(ac: ArrayView3<'_, i32>, call: &[i8]) -> Result<CallMask> {
    let expected = call_to_counts(call, ac.len_of(ALLELES))?;
    Ok(locate_counts(ac, &expected))
}

/// Per-sample allele frequencies; lanes with no counts are `NaN`
pub fn to_frequencies(ac: ArrayView3<'_, i32>) -> Array3<f64> {
    kernels::to_frequencies(ac)
}

/// Number of distinct alleles per (variant, sample)
pub fn allelism(ac: ArrayView3<'_, i32>) -> Array2<i32> {
    kernels::allelism(ac)
}

/// Highest allele index per (variant, sample), `-1` if none
pub fn max_allele(ac: ArrayView3<'_, i32>) -> Array2<i32> {
    kernels::max_allele(ac)
}

pub fn locate_variant(ac: ArrayView3<'_, i32>) -> CallMask {
    kernels::locate_by_allelism(ac, |n| n > 1)
}

pub fn locate_non_variant(ac: ArrayView3<'_, i32>) -> CallMask {
    kernels::locate_by_allelism(ac, |n| n == 1)
}

pub fn locate_segregating(ac: ArrayView3<'_, i32>) -> CallMask {
    kernels::locate_by_allelism(ac, |n| n > 1)
}
