//! # Allele Count Queries, Per Variant (Eager)
//!
//! Operations over `(variants, alleles)` count arrays, such as the output of
//! [`count_alleles`](super::genotypes_3d::count_alleles).

use ndarray::{Array1, Array2, ArrayView2};

use super::kernels;
use crate::data::VariantMask;

/// Counts divided by the row total; rows with no observations are `NaN`
pub fn to_frequencies(ac: ArrayView2<'_, i32>) -> Array2<f64> {
    kernels::to_frequencies(ac)
}

/// Number of distinct alleles observed at each variant
pub fn allelism(ac: ArrayView2<'_, i32>) -> Array1<i32> {
    kernels::allelism(ac)
}

/// Highest allele index observed at each variant, `-1` if none
pub fn max_allele(ac: ArrayView2<'_, i32>) -> Array1<i32> {
    kernels::max_allele(ac)
}

/// True where more than one allele is observed
pub fn locate_variant(ac: ArrayView2<'_, i32>) -> VariantMask {
    kernels::locate_by_allelism(ac, |n| n > 1)
}

/// True where exactly one allele is observed
pub fn locate_non_variant(ac: ArrayView2<'_, i32>) -> VariantMask {
    kernels::locate_by_allelism(ac, |n| n == 1)
}

/// True where the variant segregates (more than one allele present)
pub fn locate_segregating(ac: ArrayView2<'_, i32>) -> VariantMask {
    kernels::locate_by_allelism(ac, |n| n > 1)
}
