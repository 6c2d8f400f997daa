//! Allele-count reductions along the last (allele) axis.
//!
//! Shared by the 2D and 3D allele-count families: a 2D array reduces to one
//! value per variant, a 3D array to one value per (variant, sample).

use ndarray::{Array, ArrayView, ArrayView1, Axis, Dimension, RemoveAxis};

#[inline]
fn allele_axis<D: Dimension>(ac: &ArrayView<'_, i32, D>) -> Axis {
    Axis(ac.ndim() - 1)
}

/// Number of alleles with a nonzero count in one lane
#[inline]
pub(crate) fn lane_allelism(counts: ArrayView1<'_, i32>) -> i32 {
    counts.iter().filter(|&&c| c > 0).count() as i32
}

pub(crate) fn allelism<D: RemoveAxis>(ac: ArrayView<'_, i32, D>) -> Array<i32, D::Smaller> {
    let axis = allele_axis(&ac);
    ac.map_axis(axis, lane_allelism)
}

pub(crate) fn max_allele<D: RemoveAxis>(ac: ArrayView<'_, i32, D>) -> Array<i32, D::Smaller> {
    let axis = allele_axis(&ac);
    ac.map_axis(axis, |counts| {
        counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c > 0)
            .map(|(i, _)| i as i32)
            .last()
            .unwrap_or(-1)
    })
}

pub(crate) fn to_frequencies<D: Dimension>(ac: ArrayView<'_, i32, D>) -> Array<f64, D> {
    let mut out = ac.mapv(f64::from);
    if out.ndim() == 0 {
        return out;
    }
    let axis = Axis(out.ndim() - 1);
    for mut lane in out.lanes_mut(axis) {
        let total: f64 = lane.sum();
        // 0 / 0 leaves NaN for rows with nothing observed
        lane.mapv_inplace(|c| c / total);
    }
    out
}

/// Mask lanes by their allelism
pub(crate) fn locate_by_allelism<D, F>(ac: ArrayView<'_, i32, D>, pred: F) -> Array<bool, D::Smaller>
where
    D: RemoveAxis,
    F: Fn(i32) -> bool,
{
    let axis = allele_axis(&ac);
    ac.map_axis(axis, |counts| pred(lane_allelism(counts)))
}
