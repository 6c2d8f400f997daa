//! # Utilities Module
//!
//! ## Role
//! Cross-cutting helpers that don't belong in domain-specific modules.
//!
//! ## Sub-modules
//! - `threading`: Rayon thread pool configuration
//! - `profiling`: `tracing_subscriber` setup for span timings

pub mod profiling;
pub mod threading;
