use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use super::BenchmarkConfig;

/// Aggregated timings for one named operation
#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceMetrics {
    /// Number of recorded samples
    pub count: u64,
    /// Sum of all samples
    pub total_duration: Duration,
    /// Fastest sample
    pub min_duration: Duration,
    /// Slowest sample
    pub max_duration: Duration,
    /// `total_duration / count`
    pub avg_duration: Duration,
}

impl PerformanceMetrics {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            total_duration: Duration::ZERO,
            min_duration: Duration::MAX,
            max_duration: Duration::ZERO,
            avg_duration: Duration::ZERO,
        }
    }

    pub(crate) fn update(&mut self, duration: Duration) {
        self.count += 1;
        self.total_duration += duration;
        self.min_duration = self.min_duration.min(duration);
        self.max_duration = self.max_duration.max(duration);
        self.avg_duration = self.total_duration.div_f64(self.count as f64);
    }
}

lazy_static::lazy_static! {
    /// Process-wide benchmark storage
    pub static ref BENCHMARK_DATA: Arc<Mutex<BenchmarkData>> =
        Arc::new(Mutex::new(BenchmarkData::new()));
}

/// Locks the shared store, recovering the guard from a poisoned mutex.
pub(crate) fn lock_data() -> MutexGuard<'static, BenchmarkData> {
    BENCHMARK_DATA
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Central storage for all benchmark measurements
pub struct BenchmarkData {
    measurements: HashMap<String, PerformanceMetrics>,
}

impl BenchmarkData {
    fn new() -> Self {
        Self {
            measurements: HashMap::new(),
        }
    }

    /// Records a sample for `name`.
    ///
    /// New names are refused once `config.max_entries` distinct names exist;
    /// existing names keep aggregating.
    pub fn record_measurement(&mut self, name: &str, duration: Duration, config: &BenchmarkConfig) {
        if !self.measurements.contains_key(name) && self.measurements.len() >= config.max_entries {
            log::warn!(
                "benchmark store full ({} entries); dropping sample for '{}'",
                config.max_entries,
                name
            );
            return;
        }

        self.measurements
            .entry(name.to_string())
            .or_insert_with(PerformanceMetrics::new)
            .update(duration);
    }

    /// Returns a copy of all recorded measurements
    pub fn get_measurements(&self) -> HashMap<String, PerformanceMetrics> {
        self.measurements.clone()
    }

    /// Clears all recorded measurements
    pub fn clear(&mut self) {
        self.measurements.clear();
    }
}
