//! Mount tracking for deferred work.
//!
//! Uses an atomic flag so a timer task can check, without locking, whether
//! the view that spawned it still exists.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared handle to a view's mounted flag.
#[derive(Clone, Debug)]
pub struct ViewLifetime {
    mounted: Arc<AtomicBool>,
}

impl Default for ViewLifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewLifetime {
    /// Creates a handle for a freshly mounted view.
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Marks the view as torn down. Every clone observes it.
    pub fn detach(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detach_is_shared() {
        let lifetime = ViewLifetime::new();
        let task_side = lifetime.clone();
        assert!(task_side.is_mounted());
        lifetime.detach();
        assert!(!task_side.is_mounted());
    }
}
