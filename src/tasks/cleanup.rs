//! Session Cleanup Task
//!
//! Background task that periodically discards idle sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::sessions::SessionStore;

/// Spawns a background task that periodically removes idle sessions.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. It holds the write lock on the session store only for the
/// duration of one sweep.
///
/// # Arguments
/// * `sessions` - shared session store
/// * `cleanup_interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, to be aborted on shutdown.
pub fn spawn_cleanup_task(
    sessions: Arc<RwLock<SessionStore>>,
    cleanup_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(cleanup_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting session cleanup task with interval of {} seconds",
            cleanup_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Hold the write lock only for the sweep itself
            let (removed, remaining) = {
                let mut store = sessions.write().await;
                let removed = store.cleanup_idle();
                (removed, store.len())
            };

            // Log cleanup statistics
            if removed > 0 {
                info!(
                    "Session cleanup: removed {} idle sessions, {} remaining",
                    removed, remaining
                );
            } else {
                debug!("Session cleanup: no idle sessions found");
            }
        }
    })
}
