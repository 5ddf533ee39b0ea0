//! Structured logging setup for the geode tools.
//!
//! Console output with uptime timestamps and module targets via the
//! `tracing` ecosystem, filterable through `RUST_LOG`.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Installs a console layer with module paths, severity levels, and an
/// uptime timer. The filter defaults to `info` and can be overridden
/// with the `RUST_LOG` environment variable. Call once at process start.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_env_filter());

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::uptime());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer)
        .init();
}

/// Create an `EnvFilter` with the default filter string (`info`, with
/// `wgpu` and `naga` quieted to warnings).
pub fn default_env_filter() -> EnvFilter {
    EnvFilter::new("info,wgpu=warn,naga=warn")
}
