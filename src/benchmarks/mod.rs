//! Lightweight timing for transform construction.
//!
//! Building model and projection matrices sits on the per-frame hot path of a
//! renderer. This module records how long named operations take so callers can
//! see where that time goes.
//!
//! # Features
//! - **Timers**: `Timer` for explicit start/stop, `ScopedTimer` for drop-based timing
//! - **Central store**: all samples aggregate into [`data::BENCHMARK_DATA`]
//! - **Configuration**: [`BenchmarkConfig`], from code or from the environment
//! - **Transform suite**: [`run_transform_suite`] times the core matrix operations
//!
//! Only compiled with the `profiling` cargo feature, and recording stays off until
//! enabled through [`BenchmarkConfig`] or [`ENV_ENABLED`]. Results are reported
//! through the `log` facade; nothing is printed or written to disk.

use std::time::Duration;

/// Environment variable that enables (`1`/`true`) or disables (`0`/`false`) recording.
pub const ENV_ENABLED: &str = "LINMATH_BENCH";
/// Environment variable that turns on per-sample trace logging.
pub const ENV_LOG: &str = "LINMATH_BENCH_LOG";

/// Configuration for benchmarking features
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    /// Whether measurements are recorded at all
    pub enabled: bool,
    /// Whether each recorded sample is logged at trace level
    pub log_results: bool,
    /// Samples shorter than this are dropped
    pub min_duration_threshold: Duration,
    /// Maximum number of distinct operation names kept in the store
    pub max_entries: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_results: false,
            min_duration_threshold: Duration::ZERO,
            max_entries: 1000,
        }
    }
}

impl BenchmarkConfig {
    /// Default configuration with overrides from [`ENV_ENABLED`] and [`ENV_LOG`].
    ///
    /// Unrecognised values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(enabled) = read_flag(ENV_ENABLED) {
            config.enabled = enabled;
        }
        if let Some(log_results) = read_flag(ENV_LOG) {
            config.log_results = log_results;
        }
        config
    }
}

fn read_flag(name: &str) -> Option<bool> {
    let value = std::env::var(name).ok()?;
    parse_flag(&value).or_else(|| {
        log::warn!("ignoring {}={:?}: expected 1, 0, true or false", name, value);
        None
    })
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Some(true),
        "0" | "false" => Some(false),
        _ => None,
    }
}

/// Measurement storage and aggregated metrics
pub mod data;

/// Timers, the transform suite and reporting helpers
pub mod utils;

#[cfg(test)]
mod tests;

pub use data::{BENCHMARK_DATA, PerformanceMetrics};
pub use utils::*;
