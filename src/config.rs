//! # Benchmark Configuration
//!
//! ## Role
//! Dataset shapes, value ranges, chunk grids and runtime options for the
//! benchmark suites.
//!
//! ## Sources
//! - `BenchConfig::default()` reproduces the reference workload:
//!   genotypes `(10000, 1000, 2)` in `[-1, 4)` chunked `(1000, 200, 2)`,
//!   allele counts `(10_000_000, 4)` in `[0, 100)` chunked `(100000, full)`.
//! - `BenchConfig::from_env()` loads JSON from `$GENOTENSOR_BENCH_CONFIG`,
//!   falling back to the defaults when the variable is unset or the file is
//!   missing. Fields absent from the file keep their default values.
//!
//! ## Validation
//! - All extents and chunk sizes positive
//! - Genotype range non-empty, and `max_allele` covers every generated allele
//! - `call` has one entry per ploidy slot, each an allele in `0..=max_allele`

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::chunked::ChunkSpec;
use crate::error::{Result, TensorError};

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "GENOTENSOR_BENCH_CONFIG";

/// Genotype dataset (also the source of the 3D allele-count dataset)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenotypesConfig {
    pub n_variants: usize,
    pub n_samples: usize,
    pub ploidy: usize,
    /// Inclusive lower bound of generated calls (negative = missing)
    pub low: i8,
    /// Exclusive upper bound of generated calls
    pub high: i8,
    pub max_allele: u8,
    /// Call pattern for `locate_call`
    pub call: Vec<i8>,
    pub chunks: [ChunkSpec; 3],
    /// Grid for the allele counts derived from the genotypes
    pub counts_chunks: [ChunkSpec; 3],
}

impl Default for GenotypesConfig {
    fn default() -> Self {
        Self {
            n_variants: 10_000,
            n_samples: 1_000,
            ploidy: 2,
            low: -1,
            high: 4,
            max_allele: 3,
            call: vec![0, 1],
            chunks: [ChunkSpec::Fixed(1_000), ChunkSpec::Fixed(200), ChunkSpec::Fixed(2)],
            counts_chunks: [ChunkSpec::Fixed(1_000), ChunkSpec::Fixed(200), ChunkSpec::Full],
        }
    }
}

/// Per-variant allele count dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlleleCountsConfig {
    pub n_variants: usize,
    pub n_alleles: usize,
    /// Exclusive upper bound of generated counts
    pub high: i32,
    pub chunks: [ChunkSpec; 2],
}

impl Default for AlleleCountsConfig {
    fn default() -> Self {
        Self {
            n_variants: 10_000_000,
            n_alleles: 4,
            high: 100,
            chunks: [ChunkSpec::Fixed(100_000), ChunkSpec::Full],
        }
    }
}

/// Top-level benchmark configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Seed for synthetic data
    pub seed: u64,
    /// Emit span timings via `tracing_subscriber`
    pub profile: bool,
    /// Worker threads for chunked realization (default: all cores)
    pub nthreads: Option<usize>,
    pub genotypes: GenotypesConfig,
    pub allele_counts: AlleleCountsConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            profile: false,
            nthreads: None,
            genotypes: GenotypesConfig::default(),
            allele_counts: AlleleCountsConfig::default(),
        }
    }
}

impl BenchConfig {
    /// Small datasets with several blocks per axis, for tests and smoke runs
    pub fn small() -> Self {
        Self {
            genotypes: GenotypesConfig {
                n_variants: 60,
                n_samples: 25,
                chunks: [ChunkSpec::Fixed(16), ChunkSpec::Fixed(7), ChunkSpec::Fixed(1)],
                counts_chunks: [ChunkSpec::Fixed(16), ChunkSpec::Fixed(7), ChunkSpec::Full],
                ..GenotypesConfig::default()
            },
            allele_counts: AlleleCountsConfig {
                n_variants: 500,
                high: 3,
                chunks: [ChunkSpec::Fixed(64), ChunkSpec::Full],
                ..AlleleCountsConfig::default()
            },
            ..Self::default()
        }
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Load from `$GENOTENSOR_BENCH_CONFIG` if set, then validate
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var_os(CONFIG_ENV) {
            Some(path) if Path::new(&path).exists() => {
                info!(path = ?path, "loading bench config");
                Self::load(&path)?
            }
            Some(path) => {
                warn!(path = ?path, "bench config not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Number of worker threads for chunked realization
    pub fn nthreads(&self) -> usize {
        self.nthreads.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }

    pub fn validate(&self) -> Result<()> {
        if self.nthreads == Some(0) {
            return Err(TensorError::config("nthreads must be positive"));
        }

        let gt = &self.genotypes;
        if gt.n_variants == 0 || gt.n_samples == 0 || gt.ploidy == 0 {
            return Err(TensorError::config(format!(
                "genotype shape ({}, {}, {}) has an empty axis",
                gt.n_variants, gt.n_samples, gt.ploidy
            )));
        }
        if gt.high <= gt.low {
            return Err(TensorError::config(format!(
                "genotype range [{}, {}) is empty",
                gt.low, gt.high
            )));
        }
        if i32::from(gt.high) - 1 > i32::from(gt.max_allele) {
            return Err(TensorError::config(format!(
                "max_allele {} does not cover generated alleles up to {}",
                gt.max_allele,
                gt.high - 1
            )));
        }
        if gt.call.len() != gt.ploidy {
            return Err(TensorError::config(format!(
                "call {:?} does not match ploidy {}",
                gt.call, gt.ploidy
            )));
        }
        if let Some(&allele) = gt.call.iter().find(|&&a| a < 0 || a as u8 > gt.max_allele) {
            return Err(TensorError::config(format!(
                "call allele {} is outside 0..={}",
                allele, gt.max_allele
            )));
        }

        let ac = &self.allele_counts;
        if ac.n_variants == 0 || ac.n_alleles == 0 {
            return Err(TensorError::config(format!(
                "allele count shape ({}, {}) has an empty axis",
                ac.n_variants, ac.n_alleles
            )));
        }
        if ac.high <= 0 {
            return Err(TensorError::config("allele count upper bound must be positive"));
        }

        let mut specs = gt.chunks.iter().chain(&gt.counts_chunks).chain(&ac.chunks);
        if specs.any(|s| *s == ChunkSpec::Fixed(0)) {
            return Err(TensorError::config("chunk sizes must be positive"));
        }
        Ok(())
    }
}
