//! Benchmark module tests
//!
//! The measurement store is process-wide and tests run in parallel, so every
//! test records under its own operation names and never asserts exact totals
//! for names another test could touch.

use std::thread;
use std::time::Duration;

use super::*;

fn enabled() -> BenchmarkConfig {
    BenchmarkConfig {
        enabled: true,
        log_results: true,
        min_duration_threshold: Duration::ZERO,
        max_entries: 1000,
    }
}

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn timer_records_elapsed_time() {
    init_logger();
    let timer = Timer::new("test_timer_records", enabled());
    thread::sleep(Duration::from_millis(5));
    let duration = timer.stop();

    assert!(duration >= Duration::from_millis(5));
    let metrics = &get_measurements()["test_timer_records"];
    assert_eq!(metrics.count, 1);
    assert_eq!(metrics.total_duration, duration);
}

#[test]
fn scoped_timer_records_on_drop() {
    {
        let _timer = ScopedTimer::new("test_scoped_drop", enabled());
    }
    assert!(get_measurements().contains_key("test_scoped_drop"));
}

#[test]
fn disabled_config_records_nothing() {
    let config = BenchmarkConfig {
        enabled: false,
        ..enabled()
    };
    Timer::new("test_disabled_timer", config.clone()).stop();
    assert!(!get_measurements().contains_key("test_disabled_timer"));
    assert!(run_transform_suite(3, &config).is_empty());
}

#[test]
fn default_config_records_nothing() {
    assert!(!BenchmarkConfig::default().enabled);
    let value = time("test_default_off", || 1 + 1);
    drop(scoped_timer("test_default_off"));
    assert_eq!(value, 2);
    assert!(!get_measurements().contains_key("test_default_off"));
}

#[test]
fn threshold_filters_short_samples() {
    let config = BenchmarkConfig {
        min_duration_threshold: Duration::from_secs(60),
        ..enabled()
    };
    Timer::new("test_threshold", config).stop();
    assert!(!get_measurements().contains_key("test_threshold"));
}

#[test]
fn metrics_aggregate_min_max_avg() {
    let mut metrics = PerformanceMetrics::new();
    metrics.update(Duration::from_millis(2));
    metrics.update(Duration::from_millis(4));
    assert_eq!(metrics.count, 2);
    assert_eq!(metrics.min_duration, Duration::from_millis(2));
    assert_eq!(metrics.max_duration, Duration::from_millis(4));
    assert_eq!(metrics.avg_duration, Duration::from_millis(3));
}

#[test]
fn transform_suite_times_every_operation() {
    init_logger();
    let results = run_transform_suite(10, &enabled());
    assert_eq!(results.len(), SUITE_OPERATIONS.len());
    for name in SUITE_OPERATIONS {
        assert!(results[name].count >= 10, "{} under-recorded", name);
    }
    log_summary();
}

#[test]
fn time_returns_closure_result() {
    let value = time("test_time_closure", || 6 * 7);
    assert_eq!(value, 42);
}

#[test]
fn flags_parse_case_insensitively() {
    assert_eq!(parse_flag("TRUE"), Some(true));
    assert_eq!(parse_flag(" 0 "), Some(false));
    assert_eq!(parse_flag("maybe"), None);
}
