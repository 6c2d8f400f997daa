//! # Chunked Arrays
//!
//! A shared, read-only array plus a chunk grid. Operations never copy the
//! data: every block task holds an `Arc` to the whole array and slices out
//! its own region when it runs.

use std::sync::Arc;

use ndarray::{Array, ArrayView, Axis, Dimension, RemoveAxis, Slice};

use super::grid::{BlockRegion, ChunkSpec, Chunks};
use super::lazy::{BlockTask, LazyArray, Merge};
use crate::error::Result;

/// Read-only array partitioned into blocks
#[derive(Debug, Clone)]
pub struct ChunkedArray<A, D: Dimension> {
    data: Arc<Array<A, D>>,
    chunks: Chunks,
}

impl<A, D> ChunkedArray<A, D>
where
    A: Send + Sync + 'static,
    D: Dimension + 'static,
{
    /// Take ownership of `array` and chunk it with one spec per axis
    pub fn from_array(array: Array<A, D>, specs: &[ChunkSpec]) -> Result<Self> {
        Self::from_shared(Arc::new(array), specs)
    }

    /// Chunk an array that is also used elsewhere (e.g. by the eager backend)
    pub fn from_shared(data: Arc<Array<A, D>>, specs: &[ChunkSpec]) -> Result<Self> {
        let chunks = Chunks::new(data.shape(), specs)?;
        Ok(Self { data, chunks })
    }

    /// Same data under a different grid
    pub fn rechunk(&self, specs: &[ChunkSpec]) -> Result<Self> {
        Self::from_shared(Arc::clone(&self.data), specs)
    }

    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    pub fn chunks(&self) -> &Chunks {
        &self.chunks
    }

    pub fn n_blocks(&self) -> usize {
        self.chunks.n_blocks()
    }

    /// Block regions in row-major block order
    pub fn blocks(&self) -> Vec<BlockRegion> {
        self.chunks.regions()
    }

    /// The underlying array
    pub fn data(&self) -> &Array<A, D> {
        &self.data
    }

    /// Build one task per block.
    ///
    /// Axes listed in `full_axes` are read whole by every task regardless of
    /// the grid. `out_region` maps an input block region to the region its
    /// output fills in an array of shape `out_shape`.
    pub(crate) fn map_blocks<B, E, K, R>(
        &self,
        name: &'static str,
        out_shape: E,
        merge: Merge<B>,
        full_axes: &[usize],
        out_region: R,
        kernel: K,
    ) -> LazyArray<B, E>
    where
        B: Copy + Default + Send + 'static,
        E: Dimension + 'static,
        K: Fn(ArrayView<'_, A, D>) -> Array<B, E> + Send + Sync + 'static,
        R: Fn(&BlockRegion) -> BlockRegion,
    {
        let kernel = Arc::new(kernel);
        let tasks = self
            .chunks
            .merge_axes(full_axes)
            .regions()
            .into_iter()
            .map(|region| {
                let data = Arc::clone(&self.data);
                let kernel = Arc::clone(&kernel);
                BlockTask::new(out_region(&region), move || {
                    let block = data.slice_each_axis(|ax| Slice::from(region.range(ax.axis.index())));
                    (*kernel)(block)
                })
            })
            .collect();
        LazyArray::new(name, out_shape, merge, tasks)
    }
}

impl<A, D> ChunkedArray<A, D>
where
    A: Send + Sync + 'static,
    D: RemoveAxis + 'static,
{
    fn last_axis(&self) -> usize {
        self.ndim() - 1
    }

    /// One output value per lane of the last axis; that axis is read whole
    pub(crate) fn reduce_last_axis<B, K>(&self, name: &'static str, kernel: K) -> LazyArray<B, D::Smaller>
    where
        B: Copy + Default + Send + 'static,
        D::Smaller: 'static,
        K: Fn(ArrayView<'_, A, D>) -> Array<B, D::Smaller> + Send + Sync + 'static,
    {
        let last = self.last_axis();
        let shape = self.data.raw_dim().remove_axis(Axis(last));
        self.map_blocks(name, shape, Merge::Assign, &[last], |region| region.drop_axis(last), kernel)
    }

    /// Same-shaped output; the last axis is read whole
    pub(crate) fn map_last_axis<B, K>(&self, name: &'static str, kernel: K) -> LazyArray<B, D>
    where
        B: Copy + Default + Send + 'static,
        K: Fn(ArrayView<'_, A, D>) -> Array<B, D> + Send + Sync + 'static,
    {
        let last = self.last_axis();
        let shape = self.data.raw_dim();
        self.map_blocks(name, shape, Merge::Assign, &[last], BlockRegion::clone, kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::chunked::lazy::sum;
    use ndarray::{array, Array2, Ix1};

    #[test]
    fn test_from_array_shape_and_blocks() {
        let data = Array2::<i32>::zeros((10, 4));
        let chunked = ChunkedArray::from_array(data, &[ChunkSpec::Fixed(3), ChunkSpec::Full]).unwrap();
        assert_eq!(chunked.shape(), &[10, 4]);
        assert_eq!(chunked.n_blocks(), 4);
        let blocks = chunked.blocks();
        assert_eq!(blocks.len(), 4);
        assert_eq!(blocks[3].ranges(), &[9..10, 0..4]);
    }

    #[test]
    fn test_rechunk_shares_data() {
        let data = Arc::new(Array2::<i32>::ones((6, 6)));
        let chunked = ChunkedArray::from_shared(Arc::clone(&data), &[ChunkSpec::Full, ChunkSpec::Full]).unwrap();
        let rechunked = chunked.rechunk(&[ChunkSpec::Fixed(2), ChunkSpec::Fixed(3)]).unwrap();
        assert_eq!(rechunked.n_blocks(), 6);
        assert_eq!(Arc::strong_count(&data), 3);
    }

    #[test]
    fn test_reduce_last_axis_merges_column_chunks() {
        let data = array![[1, 2, 3], [4, 5, 6], [7, 8, 9]];
        let chunked =
            ChunkedArray::from_array(data, &[ChunkSpec::Fixed(2), ChunkSpec::Fixed(1)]).unwrap();
        let lazy = chunked.reduce_last_axis("row_sum", |block| block.sum_axis(Axis(1)));
        // Column chunks are merged, so only row blocks produce tasks
        assert_eq!(lazy.n_tasks(), 2);
        assert_eq!(lazy.compute().unwrap(), array![6, 15, 24]);
    }

    #[test]
    fn test_map_blocks_with_sum_merge() {
        let data = array![[1, 2, 3, 4], [5, 6, 7, 8]];
        let chunked =
            ChunkedArray::from_array(data, &[ChunkSpec::Full, ChunkSpec::Fixed(2)]).unwrap();
        let lazy = chunked.map_blocks(
            "col_sum",
            Ix1(2),
            Merge::Combine(sum::<i32>),
            &[],
            |region| BlockRegion::new(vec![region.range(0)]),
            |block| block.sum_axis(Axis(1)),
        );
        assert_eq!(lazy.n_tasks(), 2);
        assert_eq!(lazy.compute().unwrap(), array![10, 26]);
    }
}
