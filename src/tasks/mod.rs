//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Session cleanup: discards carts of sessions idle past the configured TTL

mod cleanup;

pub use cleanup::spawn_cleanup_task;
