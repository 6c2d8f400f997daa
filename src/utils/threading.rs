//! # Threading Configuration
//!
//! Rayon pools for realizing chunked graphs. `LazyArray::compute` uses the
//! global pool; `compute_on` takes one built here, as every benchmark suite does.

use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::debug;

use crate::error::{Result, TensorError};

/// Create a named pool with `n_threads` workers
pub fn build_thread_pool(n_threads: usize) -> Result<ThreadPool> {
    if n_threads == 0 {
        return Err(TensorError::thread_pool("pool needs at least one thread"));
    }
    let pool = ThreadPoolBuilder::new()
        .num_threads(n_threads)
        .thread_name(|i| format!("genotensor-worker-{}", i))
        .build()
        .map_err(|e| TensorError::thread_pool(format!("Failed to create thread pool: {}", e)))?;
    debug!(n_threads, "built thread pool");
    Ok(pool)
}
