//! # Genotype Queries (Eager)
//!
//! Masks and allele counts over a `(variants, samples, ploidy)` genotype array.
//! Every function reads the calls of one (variant, sample) lane along the
//! ploidy axis; negative values are missing calls.

use ndarray::{Array2, Array3, ArrayView1, ArrayView3, Axis, Zip};

use crate::data::{is_called, n_alleles, CallMask};
use crate::error::{Result, TensorError};

const PLOIDY: Axis = Axis(2);

/// True where every call of the genotype is observed
pub fn locate_called(gt: ArrayView3<'_, i8>) -> CallMask {
    gt.map_axis(PLOIDY, |calls| calls.iter().all(|&c| is_called(c)))
}

/// True where at least one call of the genotype is missing
pub fn locate_missing(gt: ArrayView3<'_, i8>) -> CallMask {
    gt.map_axis(PLOIDY, |calls| calls.iter().any(|&c| !is_called(c)))
}

fn is_hom(calls: ArrayView1<'_, i8>) -> bool {
    match calls.get(0) {
        Some(&first) if is_called(first) => calls.iter().all(|&c| c == first),
        _ => false,
    }
}

fn is_het(calls: ArrayView1<'_, i8>) -> bool {
    let mut iter = calls.iter();
    let first = match iter.next() {
        Some(&first) if is_called(first) => first,
        _ => return false,
    };
    let mut differs = false;
    for &c in iter {
        if !is_called(c) {
            return false;
        }
        differs |= c != first;
    }
    differs
}

/// True where all calls are observed and identical
pub fn locate_hom(gt: ArrayView3<'_, i8>) -> CallMask {
    gt.map_axis(PLOIDY, is_hom)
}

/// True where all calls are observed and at least two differ
pub fn locate_het(gt: ArrayView3<'_, i8>) -> CallMask {
    gt.map_axis(PLOIDY, is_het)
}

/// True where the genotype equals `call`, position by position.
///
/// `call` must have one entry per ploidy slot.
pub fn locate_call(gt: ArrayView3<'_, i8>, call: &[i8]) -> Result<CallMask> {
    check_call_len(gt.len_of(PLOIDY), call)?;
    Ok(locate_call_unchecked(gt, call))
}

pub(crate) fn check_call_len(ploidy: usize, call: &[i8]) -> Result<()> {
    if call.len() != ploidy {
        return Err(TensorError::shape_mismatch(
            "genotypes_3d::locate_call",
            vec![ploidy],
            vec![call.len()],
        ));
    }
    Ok(())
}

pub(crate) fn locate_call_unchecked(gt: ArrayView3<'_, i8>, call: &[i8]) -> CallMask {
    Zip::from(gt.lanes(PLOIDY)).map_collect(|calls| calls.iter().eq(call.iter()))
}

/// Per-variant counts of alleles `0..=max_allele`, shape `(n_variants, max_allele + 1)`.
///
/// Missing calls and alleles above `max_allele` are not counted.
pub fn count_alleles(gt: ArrayView3<'_, i8>, max_allele: u8) -> Array2<i32> {
    let n = n_alleles(max_allele);
    let mut out = Array2::<i32>::zeros((gt.len_of(Axis(0)), n));
    for (variant, mut counts) in gt.outer_iter().zip(out.outer_iter_mut()) {
        for &c in variant.iter() {
            if is_called(c) && (c as usize) < n {
                counts[c as usize] += 1;
            }
        }
    }
    out
}

/// Per-sample allele counts, shape `(n_variants, n_samples, max_allele + 1)`.
pub fn to_allele_counts(gt: ArrayView3<'_, i8>, max_allele: u8) -> Array3<i32> {
    let n = n_alleles(max_allele);
    let (n_variants, n_samples, _) = gt.dim();
    let mut out = Array3::<i32>::zeros((n_variants, n_samples, n));
    Zip::from(out.lanes_mut(Axis(2)))
        .and(gt.lanes(PLOIDY))
        .for_each(|mut counts, calls| {
            for &c in calls.iter() {
                if is_called(c) && (c as usize) < n {
                    counts[c as usize] += 1;
                }
            }
        });
    out
}

/// Long-form allele counts, shape `(n_variants * (max_allele + 1), n_samples)`.
///
/// Row `v * (max_allele + 1) + a` holds the count of allele `a` at variant `v`
/// for every sample.
pub fn to_allele_counts_melt(gt: ArrayView3<'_, i8>, max_allele: u8) -> Array2<i32> {
    let n = n_alleles(max_allele);
    let (n_variants, n_samples, _) = gt.dim();
    let mut out = Array2::<i32>::zeros((n_variants * n, n_samples));
    for ((v, s, _), &c) in gt.indexed_iter() {
        if is_called(c) && (c as usize) < n {
            out[[v * n + c as usize, s]] += 1;
        }
    }
    out
}
