//! # Data Module
//!
//! In-memory representations of genotype and allele-count tensors.
//!
//! ## Layout
//! - **Genotypes:** `(variants, samples, ploidy)` of `i8`. Negative values are
//!   missing calls, `0..=max_allele` are allele indices.
//! - **Allele counts 2D:** `(variants, alleles)` of `i32`.
//! - **Allele counts 3D:** `(variants, samples, alleles)` of `i32`.
//!
//! Plain `ndarray` owned arrays are used throughout; views are passed to
//! kernels so both backends share the same code path on each block.

pub mod synthetic;

use ndarray::{Array1, Array2, Array3};

/// Genotype call value for a missing allele
pub const MISSING: i8 = -1;

/// Genotype calls indexed by (variant, sample, ploidy)
pub type Genotypes3D = Array3<i8>;

/// Allele counts indexed by (variant, allele)
pub type AlleleCounts2D = Array2<i32>;

/// Allele counts indexed by (variant, sample, allele)
pub type AlleleCounts3D = Array3<i32>;

/// Per-variant boolean mask
pub type VariantMask = Array1<bool>;

/// Per-(variant, sample) boolean mask
pub type CallMask = Array2<bool>;

/// Number of allele slots needed to count alleles `0..=max_allele`
#[inline]
pub fn n_alleles(max_allele: u8) -> usize {
    max_allele as usize + 1
}

/// True if a genotype call value refers to an observed allele
#[inline]
pub fn is_called(call: i8) -> bool {
    call >= 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_n_alleles() {
        assert_eq!(n_alleles(0), 1);
        assert_eq!(n_alleles(3), 4);
        assert_eq!(n_alleles(u8::MAX), 256);
    }

    #[test]
    fn test_is_called() {
        assert!(is_called(0));
        assert!(is_called(3));
        assert!(!is_called(MISSING));
        assert!(!is_called(-7));
    }
}
