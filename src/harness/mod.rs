//! # Benchmark Harness
//!
//! ## Role
//! Registry of timed cases over synthetic data, shared by the criterion
//! benches and the integration tests.
//!
//! ## Model
//! - A `Suite` builds its dataset once from a `BenchConfig`: an eager array
//!   and a chunked view over the same `Arc`.
//! - `Suite::cases()` lists named `Case`s. Every operation is registered once
//!   per backend under the same name, so the two can be compared directly.
//! - A case calls exactly one backend function and returns its realized
//!   output as a `CaseOutput`. Chunked cases call `compute_on` on the suite's
//!   pool, so the graph is fully realized inside the timed closure.

pub mod allele_counts_2d;
pub mod allele_counts_3d;
pub mod genotypes_3d;

pub use allele_counts_2d::AlleleCounts2DSuite;
pub use allele_counts_3d::AlleleCounts3DSuite;
pub use genotypes_3d::Genotypes3DSuite;

use ndarray::{Array, Array1, Array2, Array3, Dimension};

use crate::backend::Backend;
use crate::config::BenchConfig;
use crate::data::{CallMask, VariantMask};
use crate::error::Result;

/// A dataset plus the operations timed over it
pub trait Suite: Sized + Send + Sync {
    /// Benchmark group name
    const NAME: &'static str;

    /// Generate the dataset; runs once, outside any timing
    fn setup(config: &BenchConfig) -> Result<Self>;

    /// All registered cases, both backends
    fn cases() -> Vec<Case<Self>>;

    /// Input elements touched by one case (criterion throughput)
    fn n_elements(&self) -> u64;
}

/// One named operation on one backend
pub struct Case<S> {
    name: &'static str,
    backend: Backend,
    func: fn(&S) -> Result<CaseOutput>,
}

impl<S> Case<S> {
    pub fn eager(name: &'static str, func: fn(&S) -> Result<CaseOutput>) -> Self {
        Self {
            name,
            backend: Backend::Eager,
            func,
        }
    }

    pub fn chunked(name: &'static str, func: fn(&S) -> Result<CaseOutput>) -> Self {
        Self {
            name,
            backend: Backend::Chunked,
            func,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// `name/backend`, as shown in benchmark reports
    pub fn id(&self) -> String {
        format!("{}/{}", self.name, self.backend)
    }

    #[inline]
    pub fn run(&self, suite: &S) -> Result<CaseOutput> {
        (self.func)(suite)
    }
}

/// Realized result of a case
#[derive(Debug, Clone)]
pub enum CaseOutput {
    VariantMask(VariantMask),
    CallMask(CallMask),
    Counts1(Array1<i32>),
    Counts2(Array2<i32>),
    Counts3(Array3<i32>),
    Frequencies2(Array2<f64>),
    Frequencies3(Array3<f64>),
}

impl CaseOutput {
    pub fn shape(&self) -> &[usize] {
        match self {
            CaseOutput::VariantMask(a) => a.shape(),
            CaseOutput::CallMask(a) => a.shape(),
            CaseOutput::Counts1(a) => a.shape(),
            CaseOutput::Counts2(a) => a.shape(),
            CaseOutput::Counts3(a) => a.shape(),
            CaseOutput::Frequencies2(a) => a.shape(),
            CaseOutput::Frequencies3(a) => a.shape(),
        }
    }
}

/// Element-wise equality where `NaN` matches `NaN`
fn same_frequencies<D: Dimension>(a: &Array<f64, D>, b: &Array<f64, D>) -> bool {
    a.shape() == b.shape()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| x == y || (x.is_nan() && y.is_nan()))
}

impl PartialEq for CaseOutput {
    fn eq(&self, other: &Self) -> bool {
        use CaseOutput::*;
        match (self, other) {
            (VariantMask(a), VariantMask(b)) => a == b,
            (CallMask(a), CallMask(b)) => a == b,
            (Counts1(a), Counts1(b)) => a == b,
            (Counts2(a), Counts2(b)) => a == b,
            (Counts3(a), Counts3(b)) => a == b,
            (Frequencies2(a), Frequencies2(b)) => same_frequencies(a, b),
            (Frequencies3(a), Frequencies3(b)) => same_frequencies(a, b),
            _ => false,
        }
    }
}
