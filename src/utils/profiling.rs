//! # Profiling Output
//!
//! Hierarchical span timings on stderr. Every `compute()` opens a `compute`
//! span tagged with the operation name and task count, so enabling this shows
//! per-operation realization time.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the fmt subscriber; returns false if one was already set
pub fn init_profiling() -> bool {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_span_events(FmtSpan::CLOSE)
                .with_target(false)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init()
        .is_ok()
}
