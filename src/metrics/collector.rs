//! Metrics Collector Module
//!
//! Request counters and per-route response-time aggregates.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

// == Route Stats ==
/// Aggregate timings for one route. Times are in milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RouteStats {
    /// Number of completed responses
    pub count: u64,
    /// Sum of response times
    pub total_time: f64,
    /// Running mean, `total_time / count`
    pub avg_time: f64,
}

impl RouteStats {
    fn record(&mut self, elapsed_ms: f64) {
        self.count += 1;
        self.total_time += elapsed_ms;
        self.avg_time = self.total_time / self.count as f64;
    }
}

// == Metrics Snapshot ==
/// Point-in-time view of the collector, as served by `GET /metrics`.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    /// Requests seen since start
    pub total_requests: u64,
    /// Mean response time formatted like `12.34ms`
    pub average_response_time: String,
    /// Per-route aggregates keyed by route name
    pub route_statistics: BTreeMap<String, RouteStats>,
}

// == Metrics Collector ==
/// Process-wide request metrics.
///
/// The request counter moves when a request starts, the timings when its
/// response is finalized, so an in-flight request is counted but not timed.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    /// Requests started
    pub request_count: u64,
    /// Sum of all response times in milliseconds
    pub total_response_time: f64,
    /// Aggregates keyed by route name
    pub route_stats: BTreeMap<String, RouteStats>,
}

impl MetricsCollector {
    // == Constructor ==
    /// Creates a collector with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Request ==
    /// Counts an inbound request.
    pub fn record_request(&mut self) {
        self.request_count += 1;
    }

    // == Record Response ==
    /// Adds a finished response's elapsed time to the totals and its route.
    pub fn record_response(&mut self, route: &str, elapsed: Duration) {
        let elapsed_ms = elapsed.as_secs_f64() * 1000.0;
        self.total_response_time += elapsed_ms;

        match self.route_stats.get_mut(route) {
            Some(stats) => stats.record(elapsed_ms),
            None => {
                let mut stats = RouteStats::default();
                stats.record(elapsed_ms);
                self.route_stats.insert(route.to_string(), stats);
            }
        }
    }

    /// Mean response time over all requests, 0 when none were seen.
    pub fn average_response_time(&self) -> f64 {
        if self.request_count == 0 {
            0.0
        } else {
            self.total_response_time / self.request_count as f64
        }
    }

    // == Snapshot ==
    /// Copies the current counters into a serializable snapshot.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            total_requests: self.request_count,
            average_response_time: format!("{:.2}ms", self.average_response_time()),
            route_statistics: self.route_stats.clone(),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collector_new() {
        let metrics = MetricsCollector::new();
        assert_eq!(metrics.request_count, 0);
        assert_eq!(metrics.total_response_time, 0.0);
        assert!(metrics.route_stats.is_empty());
    }

    #[test]
    fn test_snapshot_no_requests() {
        let snapshot = MetricsCollector::new().snapshot();
        assert_eq!(snapshot.total_requests, 0);
        assert_eq!(snapshot.average_response_time, "0.00ms");
        assert!(snapshot.route_statistics.is_empty());
    }

    #[test]
    fn test_route_average() {
        let mut metrics = MetricsCollector::new();
        for ms in [10, 20, 30] {
            metrics.record_request();
            metrics.record_response("index", Duration::from_millis(ms));
        }

        let stats = &metrics.route_stats["index"];
        assert_eq!(stats.count, 3);
        assert!((stats.total_time - 60.0).abs() < 1e-9);
        assert!((stats.avg_time - 20.0).abs() < 1e-9);
        assert_eq!(metrics.snapshot().average_response_time, "20.00ms");
    }

    #[test]
    fn test_routes_tracked_separately() {
        let mut metrics = MetricsCollector::new();
        metrics.record_request();
        metrics.record_response("index", Duration::from_millis(4));
        metrics.record_request();
        metrics.record_response("view_cart", Duration::from_millis(8));

        assert_eq!(metrics.route_stats.len(), 2);
        assert_eq!(metrics.route_stats["index"].count, 1);
        assert_eq!(metrics.route_stats["view_cart"].count, 1);
        assert!((metrics.route_stats["view_cart"].avg_time - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_in_flight_request_counted_not_timed() {
        let mut metrics = MetricsCollector::new();
        metrics.record_request();
        metrics.record_response("index", Duration::from_millis(10));
        metrics.record_request();

        let snapshot = metrics.snapshot();
        assert_eq!(snapshot.total_requests, 2);
        assert_eq!(snapshot.average_response_time, "5.00ms");
    }

    #[test]
    fn test_snapshot_serialize() {
        let mut metrics = MetricsCollector::new();
        metrics.record_request();
        metrics.record_response("health_check", Duration::from_millis(1));

        let json = serde_json::to_value(metrics.snapshot()).unwrap();
        assert_eq!(json["total_requests"], 1);
        assert_eq!(json["route_statistics"]["health_check"]["count"], 1);
        assert!(json["average_response_time"].as_str().unwrap().ends_with("ms"));
    }
}
