//! Tracing subscriber bootstrap.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const MAX_FILTER_LEN: usize = 4096;

/// Installs a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// An unset, empty, oversized, or invalid `RUST_LOG` falls back to
/// `default_filter`, and an invalid `default_filter` falls back to `off`.
/// Returns `false` when a global subscriber was already installed, so
/// repeated calls are harmless.
pub fn init_tracing(default_filter: &str) -> bool {
    let filter = std::env::var("RUST_LOG")
        .ok()
        .and_then(|raw| parse_filter(&raw))
        .or_else(|| parse_filter(default_filter))
        .unwrap_or_else(|| EnvFilter::new("off"));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
        .is_ok()
}

fn parse_filter(raw: &str) -> Option<EnvFilter> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_FILTER_LEN {
        return None;
    }
    EnvFilter::try_new(trimmed).ok()
}
