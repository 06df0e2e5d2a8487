//! Metrics Module
//!
//! In-process request counters and per-route response times.

mod collector;

#[cfg(test)]
mod property_tests;

pub use collector::{MetricsCollector, MetricsSnapshot, RouteStats};
