//! Property-Based Tests for Metrics Module

use proptest::prelude::*;
use std::time::Duration;

use crate::metrics::MetricsCollector;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // After N responses on one route, its average is the mean of the latencies.
    #[test]
    fn prop_route_average_is_mean(latencies in prop::collection::vec(0u64..5_000_000, 1..100)) {
        let mut metrics = MetricsCollector::new();
        for micros in &latencies {
            metrics.record_request();
            metrics.record_response("index", Duration::from_micros(*micros));
        }

        let expected_ms = latencies.iter().map(|m| *m as f64 / 1000.0).sum::<f64>()
            / latencies.len() as f64;
        let stats = &metrics.route_stats["index"];

        prop_assert_eq!(stats.count, latencies.len() as u64);
        prop_assert!((stats.avg_time - expected_ms).abs() < 1e-6 * expected_ms.max(1.0));
        prop_assert_eq!(metrics.request_count, latencies.len() as u64);
    }

    // Route counts always sum to the number of finished responses.
    #[test]
    fn prop_route_counts_sum(routes in prop::collection::vec(prop::sample::select(vec!["index", "view_cart", "checkout"]), 0..50)) {
        let mut metrics = MetricsCollector::new();
        for route in &routes {
            metrics.record_request();
            metrics.record_response(route, Duration::from_millis(1));
        }

        let total: u64 = metrics.route_stats.values().map(|s| s.count).sum();
        prop_assert_eq!(total, routes.len() as u64);
        prop_assert_eq!(metrics.snapshot().total_requests, routes.len() as u64);
    }
}
