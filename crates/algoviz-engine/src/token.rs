//! Cancellation handle for a single run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag owned by one run.
///
/// Every run gets a fresh token; clones share the same flag. Once cancelled a
/// token never becomes live again.
#[derive(Debug, Clone)]
pub struct RunToken {
    live: Arc<AtomicBool>,
}

impl RunToken {
    /// Create a live token.
    pub fn new() -> Self {
        Self {
            live: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Whether the owning run may keep mutating state.
    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    /// Cancel the run. Idempotent.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Whether both handles refer to the same run.
    pub fn same_run(&self, other: &RunToken) -> bool {
        Arc::ptr_eq(&self.live, &other.live)
    }
}

impl Default for RunToken {
    fn default() -> Self {
        Self::new()
    }
}
