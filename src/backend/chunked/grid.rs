//! # Chunk Grid
//!
//! Partition of an array's extents into blocks. Each axis is split
//! independently; a block is one range per axis.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TensorError};

/// How to split one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChunkSpec {
    /// Blocks of this many elements; the last block may be shorter
    Fixed(usize),
    /// A single block spanning the whole axis
    Full,
}

impl ChunkSpec {
    fn split(self, len: usize) -> Result<Vec<usize>> {
        match self {
            ChunkSpec::Full => Ok(vec![len]),
            ChunkSpec::Fixed(0) => Err(TensorError::invalid_chunks("chunk size must be positive")),
            ChunkSpec::Fixed(_) if len == 0 => Ok(vec![0]),
            ChunkSpec::Fixed(size) => {
                let mut sizes = vec![size; len / size];
                if len % size != 0 {
                    sizes.push(len % size);
                }
                Ok(sizes)
            }
        }
    }
}

/// The region of one block: a half-open range per axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockRegion {
    ranges: Vec<Range<usize>>,
}

impl BlockRegion {
    pub fn new(ranges: Vec<Range<usize>>) -> Self {
        Self { ranges }
    }

    pub fn ndim(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn range(&self, axis: usize) -> Range<usize> {
        self.ranges[axis].clone()
    }

    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Block extents along every axis
    pub fn shape(&self) -> Vec<usize> {
        self.ranges.iter().map(|r| r.len()).collect()
    }

    /// Region with `axis` removed
    pub fn drop_axis(&self, axis: usize) -> Self {
        let mut ranges = self.ranges.clone();
        ranges.remove(axis);
        Self { ranges }
    }

    /// Region with `axis` replaced by `range`
    pub fn with_range(&self, axis: usize, range: Range<usize>) -> Self {
        let mut ranges = self.ranges.clone();
        ranges[axis] = range;
        Self { ranges }
    }
}

/// Block sizes along each axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunks {
    sizes: Vec<Vec<usize>>,
}

impl Chunks {
    /// Split `shape` with one spec per axis
    pub fn new(shape: &[usize], specs: &[ChunkSpec]) -> Result<Self> {
        if shape.len() != specs.len() {
            return Err(TensorError::invalid_chunks(format!(
                "{} chunk specs for a {}-dimensional array",
                specs.len(),
                shape.len()
            )));
        }
        let sizes = shape
            .iter()
            .zip(specs)
            .map(|(&len, spec)| spec.split(len))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sizes })
    }

    pub fn ndim(&self) -> usize {
        self.sizes.len()
    }

    /// Block sizes along `axis`
    pub fn sizes(&self, axis: usize) -> &[usize] {
        &self.sizes[axis]
    }

    /// Total number of blocks
    pub fn n_blocks(&self) -> usize {
        self.sizes.iter().map(Vec::len).product()
    }

    /// Block ranges along `axis`
    pub fn boundaries(&self, axis: usize) -> Vec<Range<usize>> {
        let mut start = 0;
        self.sizes[axis]
            .iter()
            .map(|&size| {
                let range = start..start + size;
                start += size;
                range
            })
            .collect()
    }

    /// Same grid with each listed axis collapsed into a single block
    pub fn merge_axes(&self, axes: &[usize]) -> Self {
        let sizes = self
            .sizes
            .iter()
            .enumerate()
            .map(|(axis, sizes)| {
                if axes.contains(&axis) {
                    vec![sizes.iter().sum()]
                } else {
                    sizes.clone()
                }
            })
            .collect();
        Self { sizes }
    }

    /// All block regions in row-major block order
    pub fn regions(&self) -> Vec<BlockRegion> {
        let bounds: Vec<Vec<Range<usize>>> = (0..self.ndim()).map(|a| self.boundaries(a)).collect();
        let total = self.n_blocks();
        let mut regions = Vec::with_capacity(total);
        let mut idx = vec![0usize; self.ndim()];

        for _ in 0..total {
            regions.push(BlockRegion::new(
                idx.iter()
                    .enumerate()
                    .map(|(axis, &i)| bounds[axis][i].clone())
                    .collect(),
            ));
            // Odometer increment, last axis fastest
            for axis in (0..idx.len()).rev() {
                idx[axis] += 1;
                if idx[axis] < bounds[axis].len() {
                    break;
                }
                idx[axis] = 0;
            }
        }
        regions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_with_remainder() {
        let chunks = Chunks::new(&[10, 4], &[ChunkSpec::Fixed(4), ChunkSpec::Full]).unwrap();
        assert_eq!(chunks.sizes(0), &[4, 4, 2]);
        assert_eq!(chunks.sizes(1), &[4]);
        assert_eq!(chunks.n_blocks(), 3);
        assert_eq!(chunks.boundaries(0), vec![0..4, 4..8, 8..10]);
    }

    #[test]
    fn test_chunk_larger_than_axis() {
        let chunks = Chunks::new(&[3], &[ChunkSpec::Fixed(100)]).unwrap();
        assert_eq!(chunks.sizes(0), &[3]);
    }

    #[test]
    fn test_empty_axis_single_block() {
        let chunks = Chunks::new(&[0, 5], &[ChunkSpec::Fixed(2), ChunkSpec::Fixed(2)]).unwrap();
        assert_eq!(chunks.sizes(0), &[0]);
        assert_eq!(chunks.n_blocks(), 3);
    }

    #[test]
    fn test_invalid_specs() {
        assert!(Chunks::new(&[10], &[ChunkSpec::Fixed(0)]).is_err());
        assert!(Chunks::new(&[10, 2], &[ChunkSpec::Full]).is_err());
    }

    #[test]
    fn test_regions_row_major() {
        let chunks = Chunks::new(&[4, 3], &[ChunkSpec::Fixed(2), ChunkSpec::Fixed(2)]).unwrap();
        let regions = chunks.regions();
        assert_eq!(regions.len(), 4);
        assert_eq!(regions[0].ranges(), &[0..2, 0..2]);
        assert_eq!(regions[1].ranges(), &[0..2, 2..3]);
        assert_eq!(regions[2].ranges(), &[2..4, 0..2]);
        assert_eq!(regions[3].ranges(), &[2..4, 2..3]);
        assert_eq!(regions[3].shape(), vec![2, 1]);
    }

    #[test]
    fn test_merge_axes() {
        let chunks = Chunks::new(&[4, 6], &[ChunkSpec::Fixed(2), ChunkSpec::Fixed(2)]).unwrap();
        let merged = chunks.merge_axes(&[1]);
        assert_eq!(merged.sizes(0), &[2, 2]);
        assert_eq!(merged.sizes(1), &[6]);
        assert_eq!(merged.n_blocks(), 2);
    }

    #[test]
    fn test_region_edits() {
        let region = BlockRegion::new(vec![0..2, 4..6, 0..2]);
        assert_eq!(region.drop_axis(2).ranges(), &[0..2, 4..6]);
        assert_eq!(region.with_range(2, 0..4).ranges(), &[0..2, 4..6, 0..4]);
    }

    #[test]
    fn test_spec_serde() {
        let specs: Vec<ChunkSpec> = serde_json::from_str(r#"[{"fixed": 1000}, "full"]"#).unwrap();
        assert_eq!(specs, vec![ChunkSpec::Fixed(1000), ChunkSpec::Full]);
    }
}
