//! # Deferred Block Graphs
//!
//! A `LazyArray` is the unrealized result of a chunked operation: one task per
//! input block plus the rule for combining task outputs into the final array.
//! Nothing runs until `compute()`.
//!
//! ## Realization
//! Tasks run in parallel on the rayon pool. Each output is merged into a
//! zero-initialized array as soon as its task finishes, then dropped, so at
//! most one block per worker is alive besides the result. Blocks are either
//! written in place (`Merge::Assign`) or folded in (`Merge::Combine`); the
//! fold must be commutative since merge order follows completion order.

use std::ops::AddAssign;
use std::sync::{Mutex, PoisonError};

use ndarray::{Array, Dimension, Slice};
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, info_span};

use super::grid::BlockRegion;
use crate::error::{Result, TensorError};

/// How block outputs combine into the result
#[derive(Clone, Copy)]
pub enum Merge<B> {
    /// Blocks tile the output; each element is written once
    Assign,
    /// Blocks may overlap; elements are folded with the given function
    Combine(fn(&mut B, B)),
}

/// Fold function for partial sums
pub fn sum<B: AddAssign>(acc: &mut B, value: B) {
    *acc += value;
}

/// One unit of deferred work and the output region it fills
pub struct BlockTask<B, D> {
    region: BlockRegion,
    run: Box<dyn FnOnce() -> Array<B, D> + Send>,
}

impl<B, D> BlockTask<B, D> {
    pub fn new<F>(region: BlockRegion, run: F) -> Self
    where
        F: FnOnce() -> Array<B, D> + Send + 'static,
    {
        Self {
            region,
            run: Box::new(run),
        }
    }

    fn execute(self) -> (BlockRegion, Array<B, D>) {
        let block = (self.run)();
        (self.region, block)
    }
}

/// Deferred result of a chunked operation
pub struct LazyArray<B, D> {
    name: &'static str,
    shape: D,
    merge: Merge<B>,
    tasks: Vec<BlockTask<B, D>>,
}

impl<B, D> LazyArray<B, D>
where
    B: Copy + Default + Send + 'static,
    D: Dimension + 'static,
{
    pub fn new(name: &'static str, shape: D, merge: Merge<B>, tasks: Vec<BlockTask<B, D>>) -> Self {
        Self {
            name,
            shape,
            merge,
            tasks,
        }
    }

    /// Operation name (used in traces and benchmark ids)
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Shape of the realized array
    pub fn shape(&self) -> &[usize] {
        self.shape.slice()
    }

    /// Number of block tasks in the graph
    pub fn n_tasks(&self) -> usize {
        self.tasks.len()
    }

    /// Realize the graph on the current rayon pool
    pub fn compute(self) -> Result<Array<B, D>> {
        let LazyArray {
            name,
            shape,
            merge,
            tasks,
        } = self;
        let n_tasks = tasks.len();

        info_span!("compute", op = name, n_tasks).in_scope(|| {
            let out = Mutex::new(Array::from_elem(shape, B::default()));
            tasks.into_par_iter().try_for_each(|task| {
                let (region, block) = task.execute();
                let mut out = out.lock().unwrap_or_else(PoisonError::into_inner);
                merge_block(&mut *out, &region, &block, merge, name)
            })?;

            let out = out.into_inner().unwrap_or_else(PoisonError::into_inner);
            debug!(op = name, n_tasks, shape = ?out.shape(), "realized");
            Ok(out)
        })
    }

    /// Realize the graph on a dedicated pool
    pub fn compute_on(self, pool: &ThreadPool) -> Result<Array<B, D>> {
        pool.install(move || self.compute())
    }
}

fn merge_block<B, D>(
    out: &mut Array<B, D>,
    region: &BlockRegion,
    block: &Array<B, D>,
    merge: Merge<B>,
    name: &str,
) -> Result<()>
where
    B: Copy,
    D: Dimension,
{
    let in_bounds = region.ndim() == out.ndim()
        && region
            .ranges()
            .iter()
            .zip(out.shape())
            .all(|(r, &len)| r.start <= r.end && r.end <= len);
    if !in_bounds {
        return Err(TensorError::shape_mismatch(
            format!("{} output region {:?}", name, region.ranges()),
            out.shape(),
            region.shape(),
        ));
    }
    let expected = region.shape();
    if block.shape() != expected.as_slice() {
        return Err(TensorError::shape_mismatch(
            format!("{} block", name),
            expected,
            block.shape(),
        ));
    }

    let mut target = out.slice_each_axis_mut(|ax| Slice::from(region.range(ax.axis.index())));
    match merge {
        Merge::Assign => target.assign(block),
        Merge::Combine(fold) => target.zip_mut_with(block, |acc, &value| fold(acc, value)),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1, Ix1};

    fn task(range: std::ops::Range<usize>, values: Vec<i32>) -> BlockTask<i32, Ix1> {
        BlockTask::new(BlockRegion::new(vec![range]), move || Array1::from(values))
    }

    #[test]
    fn test_assign_tiles() {
        let lazy = LazyArray::new(
            "tile",
            Ix1(5),
            Merge::Assign,
            vec![task(0..2, vec![1, 2]), task(2..5, vec![3, 4, 5])],
        );
        assert_eq!(lazy.n_tasks(), 2);
        assert_eq!(lazy.shape(), &[5]);
        assert_eq!(lazy.compute().unwrap(), array![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_combine_sums_overlaps() {
        let lazy = LazyArray::new(
            "partial_sums",
            Ix1(3),
            Merge::Combine(sum::<i32>),
            vec![task(0..3, vec![1, 1, 1]), task(0..3, vec![2, 0, 5])],
        );
        assert_eq!(lazy.compute().unwrap(), array![3, 1, 6]);
    }

    #[test]
    fn test_block_shape_mismatch() {
        let lazy = LazyArray::new("bad", Ix1(3), Merge::Assign, vec![task(0..3, vec![1, 2])]);
        assert!(matches!(
            lazy.compute(),
            Err(TensorError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn test_region_out_of_bounds() {
        let lazy = LazyArray::new("oob", Ix1(2), Merge::Assign, vec![task(1..3, vec![1, 2])]);
        assert!(lazy.compute().is_err());
    }

    #[test]
    fn test_no_tasks_yields_default() {
        let lazy: LazyArray<bool, Ix1> = LazyArray::new("empty", Ix1(4), Merge::Assign, Vec::new());
        assert_eq!(lazy.compute().unwrap(), array![false, false, false, false]);
    }

    #[test]
    fn test_combine_many_overlapping_blocks() {
        let tasks = (0..64).map(|i| task(0..2, vec![i, 1])).collect();
        let lazy = LazyArray::new("many", Ix1(2), Merge::Combine(sum::<i32>), tasks);
        assert_eq!(lazy.name(), "many");
        assert_eq!(lazy.compute().unwrap(), array![(0..64).sum::<i32>(), 64]);
    }

    #[test]
    fn test_compute_on_single_thread_pool() {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(1).build().unwrap();
        let tasks = (0..8usize).map(|i| task(i..i + 1, vec![i as i32])).collect();
        let lazy = LazyArray::new("serial", Ix1(8), Merge::Assign, tasks);
        assert_eq!(lazy.compute_on(&pool).unwrap(), Array1::from_iter(0..8));
    }

    #[test]
    fn test_compute_on_pool() {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(2).build().unwrap();
        let lazy = LazyArray::new("pool", Ix1(2), Merge::Assign, vec![task(0..2, vec![7, 8])]);
        assert_eq!(lazy.compute_on(&pool).unwrap(), array![7, 8]);
    }
}
