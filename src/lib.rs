//! # Genotensor Library Root
//!
//! ## Role
//! Genotype and allele-count array operations on two backends, plus the
//! benchmark harness that times them against each other.
//!
//! ## Module Structure
//! ```text
//! genotensor
//! ├── backend     # Operation families
//! │   ├── eager   # Immediate computation over ndarray views
//! │   └── chunked # Block grids, lazy task graphs, parallel compute()
//! ├── config      # BenchConfig (JSON + defaults)
//! ├── data        # Array aliases and synthetic data
//! ├── error       # TensorError
//! ├── harness     # Suites and cases shared by benches and tests
//! └── utils       # Thread pools, profiling output
//! ```

pub mod backend;
pub mod config;
pub mod data;
pub mod error;
pub mod harness;
pub mod utils;

pub use backend::Backend;
pub use config::BenchConfig;
pub use error::{Result, TensorError};
pub use harness::{Case, CaseOutput, Suite};
