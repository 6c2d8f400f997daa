//! # Synthetic Datasets
//!
//! Seeded random generation of genotype and allele-count arrays for
//! benchmarks and tests. Values are drawn uniformly from a half-open range,
//! so `random_genotypes(.., -1, 4, ..)` yields missing calls and alleles 0..=3.

use ndarray::{Array, Array2, Array3, Dimension, ShapeBuilder};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info_span;

use crate::data::{AlleleCounts2D, Genotypes3D};
use crate::error::{Result, TensorError};

/// Fill an array of the given shape with values from `low..high`.
fn uniform<D, Sh>(shape: Sh, low: i32, high: i32, seed: u64) -> Result<Array<i32, D>>
where
    D: Dimension,
    Sh: ShapeBuilder<Dim = D>,
{
    if high <= low {
        return Err(TensorError::config(format!(
            "empty value range [{}, {})",
            low, high
        )));
    }
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(Array::from_shape_simple_fn(shape, || rng.gen_range(low..high)))
}

/// Random genotype calls of shape `(n_variants, n_samples, ploidy)`.
///
/// `low..high` must fit in `i8`.
pub fn random_genotypes(
    shape: (usize, usize, usize),
    low: i8,
    high: i8,
    seed: u64,
) -> Result<Genotypes3D> {
    info_span!("random_genotypes", n_variants = shape.0, n_samples = shape.1).in_scope(|| {
        let values: Array3<i32> = uniform(shape, low as i32, high as i32, seed)?;
        // Range is bounded by i8 inputs, so the narrowing is lossless.
        Ok(values.mapv(|v| v as i8))
    })
}

/// Random allele counts of shape `(n_variants, n_alleles)` drawn from `0..high`.
pub fn random_allele_counts(
    shape: (usize, usize),
    high: i32,
    seed: u64,
) -> Result<AlleleCounts2D> {
    info_span!("random_allele_counts", n_variants = shape.0).in_scope(|| {
        let values: Array2<i32> = uniform(shape, 0, high, seed)?;
        Ok(values)
    })
}
