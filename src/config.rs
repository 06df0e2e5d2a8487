//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Shortest allowed idle-session sweep interval in seconds.
pub const MIN_CLEANUP_INTERVAL: u64 = 1;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Seconds a session may stay idle before its cart is discarded
    pub session_ttl: u64,
    /// Idle-session sweep interval in seconds
    pub cleanup_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `SESSION_TTL` - Idle session lifetime in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 60, minimum: 1)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_or(lookup("SERVER_PORT"), defaults.server_port),
            session_ttl: parse_or(lookup("SESSION_TTL"), defaults.session_ttl),
            // A zero interval would spin on the session store lock
            cleanup_interval: parse_or(lookup("CLEANUP_INTERVAL"), defaults.cleanup_interval)
                .max(MIN_CLEANUP_INTERVAL),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 5000,
            session_ttl: 3600,
            cleanup_interval: 60,
        }
    }
}
