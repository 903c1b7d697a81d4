//! Benchmark timers and helpers
//!
//! # Key Features
//! - **Manual Timers**: `Timer` for explicit start/stop timing
//! - **Scoped Timers**: `ScopedTimer` records when dropped
//! - **Transform suite**: `run_transform_suite` times the matrix operations of this crate
//! - **Macros**: `benchmark!` for easy code instrumentation

use std::collections::HashMap;
use std::hint::black_box;
use std::time::{Duration, Instant};

use super::BenchmarkConfig;
use super::data::{PerformanceMetrics, lock_data};
use crate::math::{Matrix3x3, Matrix4x4, Vector3};

/// A timer for measuring execution time of code sections
///
/// Starts timing when created and records the measurement when stopped.
pub struct Timer {
    name: String,
    start_time: Instant,
    config: BenchmarkConfig,
}

impl Timer {
    /// Creates a new timer with the given name
    ///
    /// # Arguments
    /// * `name` - The name of the operation to be timed
    /// * `config` - Configuration for the timer behavior
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            name: name.to_string(),
            start_time: Instant::now(),
            config,
        }
    }

    /// Stops the timer and records the measurement
    ///
    /// Returns the elapsed duration whether or not it was recorded.
    pub fn stop(self) -> Duration {
        let duration = self.start_time.elapsed();
        record(&self.name, duration, &self.config);
        duration
    }
}

/// A scoped timer that records when dropped
pub struct ScopedTimer {
    name: String,
    start_time: Instant,
    config: BenchmarkConfig,
}

impl ScopedTimer {
    /// Creates a new scoped timer
    pub fn new(name: &str, config: BenchmarkConfig) -> Self {
        Self {
            name: name.to_string(),
            start_time: Instant::now(),
            config,
        }
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        record(&self.name, self.start_time.elapsed(), &self.config);
    }
}

fn record(name: &str, duration: Duration, config: &BenchmarkConfig) {
    if !config.enabled || duration < config.min_duration_threshold {
        return;
    }

    lock_data().record_measurement(name, duration, config);

    if config.log_results {
        log::trace!("[BENCHMARK] {}: {:?}", name, duration);
    }
}

/// Times a closure with the default configuration and returns its result
pub fn time<F, R>(name: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let _timer = ScopedTimer::new(name, BenchmarkConfig::default());
    f()
}

/// Creates a scoped timer with the default configuration
pub fn scoped_timer(name: &str) -> ScopedTimer {
    ScopedTimer::new(name, BenchmarkConfig::default())
}

/// Returns a copy of all recorded measurements
pub fn get_measurements() -> HashMap<String, PerformanceMetrics> {
    lock_data().get_measurements()
}

/// Clears all recorded measurements
pub fn clear_measurements() {
    lock_data().clear();
}

/// Logs one line per recorded operation at info level, slowest total first.
pub fn log_summary() {
    let measurements = get_measurements();
    if measurements.is_empty() {
        log::info!("[BENCHMARK] No measurements recorded");
        return;
    }

    let mut rows: Vec<_> = measurements.into_iter().collect();
    rows.sort_by(|a, b| b.1.total_duration.cmp(&a.1.total_duration));

    let name_width = rows.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    log::info!("=== TRANSFORM BENCHMARKS ===");
    for (name, metrics) in rows {
        log::info!(
            "{:<width$}  count {:>8}  avg {:>12?}  min {:>12?}  max {:>12?}",
            name,
            metrics.count,
            metrics.avg_duration,
            metrics.min_duration,
            metrics.max_duration,
            width = name_width
        );
    }
}

/// Operation names recorded by [`run_transform_suite`].
pub const SUITE_OPERATIONS: [&str; 6] = [
    "mat4_transform",
    "mat4_determinant",
    "mat4_inverse",
    "mat3_inverse",
    "mat4_perspective",
    "mat4_ortho",
];

/// Times the core matrix operations `iterations` times each.
///
/// Returns the metrics of the suite's operations only (see [`SUITE_OPERATIONS`]).
/// When `config.enabled` is false the suite is skipped and the map is empty.
pub fn run_transform_suite(
    iterations: usize,
    config: &BenchmarkConfig,
) -> HashMap<String, PerformanceMetrics> {
    if !config.enabled {
        log::debug!("transform suite skipped: benchmarking disabled");
        return HashMap::new();
    }

    let translate = Vector3::new(1.0, -2.0, 3.0);
    let scale = Vector3::new(2.0, 2.0, 0.5);
    let model = Matrix4x4::transform(&translate, &scale, 0.3, 0.7, 1.1);
    let plane = Matrix3x3::translation_xy(4.0, -1.0).multiply(&Matrix3x3::new([
        2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 1.0,
    ]));

    for i in 0..iterations {
        let angle = i as f32 * 0.01;

        let timer = Timer::new(SUITE_OPERATIONS[0], config.clone());
        black_box(Matrix4x4::transform(
            black_box(&translate),
            black_box(&scale),
            angle,
            angle,
            angle,
        ));
        timer.stop();

        let timer = Timer::new(SUITE_OPERATIONS[1], config.clone());
        black_box(black_box(&model).determinant());
        timer.stop();

        let timer = Timer::new(SUITE_OPERATIONS[2], config.clone());
        let _ = black_box(black_box(&model).try_inverse());
        timer.stop();

        let timer = Timer::new(SUITE_OPERATIONS[3], config.clone());
        let _ = black_box(black_box(&plane).try_inverse());
        timer.stop();

        let timer = Timer::new(SUITE_OPERATIONS[4], config.clone());
        black_box(Matrix4x4::perspective(black_box(1.0), 16.0 / 9.0, 0.1, 100.0));
        timer.stop();

        let timer = Timer::new(SUITE_OPERATIONS[5], config.clone());
        black_box(Matrix4x4::ortho(black_box(1.0), -1.0, 1.0, -1.0, 0.1, 100.0));
        timer.stop();
    }

    let mut measurements = get_measurements();
    measurements.retain(|name, _| SUITE_OPERATIONS.contains(&name.as_str()));
    measurements
}

/// Times a block with a [`ScopedTimer`] using the default configuration.
///
/// # Example
/// ```
/// use linmath::benchmark;
/// use linmath::math::Matrix4x4;
///
/// let view = benchmark!("build_view", {
///     Matrix4x4::translation_xyz(0.0, 0.0, -5.0)
/// });
/// assert_eq!(view.m[11], -5.0);
/// ```
#[macro_export]
macro_rules! benchmark {
    ($name:expr, $block:expr) => {{
        let _timer = $crate::benchmarks::ScopedTimer::new(
            $name,
            $crate::benchmarks::BenchmarkConfig::default(),
        );
        $block
    }};
}
